//! Draft and saved-note types.

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{Activity, Feeling};

/// Stable identifier for a saved note.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NoteId(pub Uuid);

impl NoteId {
    /// Generate a fresh random id.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for NoteId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for NoteId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// The in-progress sleep note the screen is editing.
///
/// Owned by the view-model; the UI only ever sees cloned snapshots.
/// `BTreeSet` keeps the activity subset deterministic across snapshots.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SleepNoteDraft {
    /// Selected feeling, if any. A fresh draft has none.
    pub feeling: Option<Feeling>,

    /// Selected activities. Any subset of the catalog.
    pub activities: BTreeSet<Activity>,

    /// When the note was started.
    pub noted_at: DateTime<Utc>,
}

impl SleepNoteDraft {
    /// Create an empty draft stamped with the given time.
    pub fn new(noted_at: DateTime<Utc>) -> Self {
        Self {
            feeling: None,
            activities: BTreeSet::new(),
            noted_at,
        }
    }

    /// Select a feeling. Selecting the already-selected feeling clears it,
    /// so the "no feeling" state is reachable by tapping.
    pub fn select_feeling(&mut self, feeling: Feeling) {
        if self.feeling == Some(feeling) {
            self.feeling = None;
        } else {
            self.feeling = Some(feeling);
        }
    }

    /// Toggle an activity's membership in the selected set.
    pub fn toggle_activity(&mut self, activity: Activity) {
        if !self.activities.remove(&activity) {
            self.activities.insert(activity);
        }
    }

    /// Whether nothing has been selected yet. Empty drafts are still savable.
    pub fn is_empty(&self) -> bool {
        self.feeling.is_none() && self.activities.is_empty()
    }
}

/// A saved sleep note as handed to the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SleepNote {
    pub id: NoteId,
    pub feeling: Option<Feeling>,
    pub activities: BTreeSet<Activity>,
    /// When the note was started.
    pub noted_at: DateTime<Utc>,
    /// When the note was saved.
    pub saved_at: DateTime<Utc>,
}

impl SleepNote {
    /// Snapshot a draft into a saved note with a fresh id.
    pub fn from_draft(draft: &SleepNoteDraft, saved_at: DateTime<Utc>) -> Self {
        Self {
            id: NoteId::new(),
            feeling: draft.feeling,
            activities: draft.activities.clone(),
            noted_at: draft.noted_at,
            saved_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> SleepNoteDraft {
        SleepNoteDraft::new(Utc::now())
    }

    #[test]
    fn test_fresh_draft_is_empty() {
        let draft = draft();
        assert!(draft.is_empty());
        assert_eq!(draft.feeling, None);
    }

    #[test]
    fn test_select_feeling_is_exclusive() {
        let mut draft = draft();

        draft.select_feeling(Feeling::Happy);
        assert_eq!(draft.feeling, Some(Feeling::Happy));

        // Picking another feeling replaces, never accumulates
        draft.select_feeling(Feeling::Tired);
        assert_eq!(draft.feeling, Some(Feeling::Tired));
    }

    #[test]
    fn test_reselect_clears_feeling() {
        let mut draft = draft();

        draft.select_feeling(Feeling::Calm);
        draft.select_feeling(Feeling::Calm);
        assert_eq!(draft.feeling, None);
    }

    #[test]
    fn test_toggle_activity_twice_restores_membership() {
        let mut draft = draft();

        draft.toggle_activity(Activity::Coffee);
        assert!(draft.activities.contains(&Activity::Coffee));

        draft.toggle_activity(Activity::Coffee);
        assert!(!draft.activities.contains(&Activity::Coffee));
    }

    #[test]
    fn test_activities_are_a_subset() {
        let mut draft = draft();

        draft.toggle_activity(Activity::Coffee);
        draft.toggle_activity(Activity::Meditation);
        draft.toggle_activity(Activity::Coffee);

        assert_eq!(draft.activities.len(), 1);
        assert!(draft.activities.contains(&Activity::Meditation));
    }

    #[test]
    fn test_from_draft_copies_fields() {
        let mut draft = draft();
        draft.select_feeling(Feeling::Anxious);
        draft.toggle_activity(Activity::Alcohol);

        let saved_at = Utc::now();
        let note = SleepNote::from_draft(&draft, saved_at);

        assert_eq!(note.feeling, Some(Feeling::Anxious));
        assert_eq!(note.activities, draft.activities);
        assert_eq!(note.noted_at, draft.noted_at);
        assert_eq!(note.saved_at, saved_at);
    }

    #[test]
    fn test_from_draft_ids_are_unique() {
        let draft = draft();
        let a = SleepNote::from_draft(&draft, Utc::now());
        let b = SleepNote::from_draft(&draft, Utc::now());
        assert_ne!(a.id, b.id);
    }
}
