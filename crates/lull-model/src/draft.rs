//! Observable note draft with automatic change notifications.
//!
//! The key insight: mutation = notification. Every method that changes the
//! draft also broadcasts the new snapshot. Callers cannot mutate without
//! notifying.

use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use tokio::sync::watch;

use lull_core::{Activity, Feeling, SleepNoteDraft};

/// A note draft that automatically broadcasts changes.
///
/// Every mutation method (`select_feeling`, `toggle_activity`, `reset`)
/// broadcasts the new snapshot. This makes it impossible to change the draft
/// without notifying subscribers.
///
/// ## Thread Safety
///
/// Uses `parking_lot::RwLock` for the draft (never poisons) and
/// `tokio::sync::watch` for broadcasts. Multiple threads can read
/// concurrently; writes are exclusive.
pub struct ObservableDraft {
    inner: RwLock<SleepNoteDraft>,
    tx: watch::Sender<SleepNoteDraft>,
    rx: watch::Receiver<SleepNoteDraft>,
}

impl ObservableDraft {
    /// Create a fresh empty draft stamped with the given time.
    pub fn new(noted_at: DateTime<Utc>) -> Self {
        let draft = SleepNoteDraft::new(noted_at);
        let (tx, rx) = watch::channel(draft.clone());
        Self {
            inner: RwLock::new(draft),
            tx,
            rx,
        }
    }

    // =========================================================================
    // Mutation Methods (all broadcast automatically)
    // =========================================================================

    /// Select a feeling; selecting the current feeling clears it.
    ///
    /// Broadcasts the new snapshot.
    pub fn select_feeling(&self, feeling: Feeling) {
        let snapshot = {
            let mut inner = self.inner.write();
            inner.select_feeling(feeling);
            tracing::debug!("Selected feeling: {:?}", inner.feeling);
            inner.clone()
        };
        let _ = self.tx.send(snapshot);
    }

    /// Toggle an activity's membership.
    ///
    /// Broadcasts the new snapshot.
    pub fn toggle_activity(&self, activity: Activity) {
        let snapshot = {
            let mut inner = self.inner.write();
            inner.toggle_activity(activity);
            tracing::debug!("Toggled {}, {} selected", activity, inner.activities.len());
            inner.clone()
        };
        let _ = self.tx.send(snapshot);
    }

    /// Replace the draft with a fresh empty one stamped at `noted_at`.
    ///
    /// Broadcasts the new snapshot.
    pub fn reset(&self, noted_at: DateTime<Utc>) {
        let snapshot = {
            let mut inner = self.inner.write();
            *inner = SleepNoteDraft::new(noted_at);
            inner.clone()
        };
        let _ = self.tx.send(snapshot);
    }

    // =========================================================================
    // Read Methods
    // =========================================================================

    /// Get a snapshot of the current draft.
    pub fn snapshot(&self) -> SleepNoteDraft {
        self.inner.read().clone()
    }

    /// Read the draft with a closure, without cloning.
    pub fn with_draft<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&SleepNoteDraft) -> R,
    {
        let inner = self.inner.read();
        f(&inner)
    }

    // =========================================================================
    // Subscription
    // =========================================================================

    /// Subscribe to draft changes.
    ///
    /// The receiver holds the current snapshot immediately and sees all
    /// future changes. Clone the receiver for multiple subscribers.
    pub fn subscribe(&self) -> watch::Receiver<SleepNoteDraft> {
        self.rx.clone()
    }

    /// Force a broadcast of the current snapshot.
    ///
    /// Useful after initialization to ensure subscribers have the initial state.
    pub fn broadcast(&self) {
        let _ = self.tx.send(self.snapshot());
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> ObservableDraft {
        ObservableDraft::new(Utc::now())
    }

    #[test]
    fn test_select_feeling_broadcasts() {
        let draft = draft();
        let rx = draft.subscribe();

        // Initially no feeling
        assert_eq!(rx.borrow().feeling, None);

        // Selecting broadcasts
        draft.select_feeling(Feeling::Happy);
        assert_eq!(rx.borrow().feeling, Some(Feeling::Happy));

        // Selecting another replaces
        draft.select_feeling(Feeling::Stress);
        assert_eq!(rx.borrow().feeling, Some(Feeling::Stress));
    }

    #[test]
    fn test_reselect_broadcasts_none() {
        let draft = draft();
        let rx = draft.subscribe();

        draft.select_feeling(Feeling::Calm);
        assert_eq!(rx.borrow().feeling, Some(Feeling::Calm));

        draft.select_feeling(Feeling::Calm);
        assert_eq!(rx.borrow().feeling, None);
    }

    #[test]
    fn test_toggle_activity_broadcasts() {
        let draft = draft();
        let rx = draft.subscribe();

        draft.toggle_activity(Activity::Coffee);
        assert!(rx.borrow().activities.contains(&Activity::Coffee));

        // Toggling twice restores the original membership
        draft.toggle_activity(Activity::Coffee);
        assert!(!rx.borrow().activities.contains(&Activity::Coffee));
    }

    #[test]
    fn test_each_mutation_is_one_broadcast() {
        let draft = draft();
        let mut rx = draft.subscribe();

        // Drain the initial value
        assert!(!rx.has_changed().unwrap());

        draft.toggle_activity(Activity::Alcohol);
        assert!(rx.has_changed().unwrap());
        rx.mark_unchanged();

        draft.select_feeling(Feeling::Tired);
        assert!(rx.has_changed().unwrap());
        rx.mark_unchanged();

        // Reads never broadcast
        let _ = draft.snapshot();
        let _ = draft.with_draft(|d| d.activities.len());
        assert!(!rx.has_changed().unwrap());
    }

    #[test]
    fn test_reset_clears_and_restamps() {
        let draft = draft();
        let rx = draft.subscribe();

        draft.select_feeling(Feeling::Anxious);
        draft.toggle_activity(Activity::Nicotine);

        let later = Utc::now();
        draft.reset(later);

        let snapshot = rx.borrow().clone();
        assert!(snapshot.is_empty());
        assert_eq!(snapshot.noted_at, later);
    }

    #[test]
    fn test_with_draft_reads_without_clone() {
        let draft = draft();
        draft.toggle_activity(Activity::Meditation);

        let count = draft.with_draft(|d| d.activities.len());
        assert_eq!(count, 1);
    }
}
