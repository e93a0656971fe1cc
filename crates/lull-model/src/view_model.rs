//! The sleep-note view-model.
//!
//! Owns the observable draft and the store handle. The UI calls intents;
//! state flows back exclusively through the draft's watch channel.

use std::sync::Arc;

use chrono::Utc;
use futures::future::BoxFuture;
use tokio::sync::watch;

use lull_core::{Activity, Feeling, ModelError, NoteId, SleepNote, SleepNoteDraft};

use crate::draft::ObservableDraft;
use crate::store::NoteStore;

/// View-model for the "Add sleep note" screen.
///
/// Intents mutate the draft (which broadcasts) or persist it. No intent
/// reports state back to the caller directly; subscribers observe the draft.
pub struct SleepNoteViewModel {
    draft: ObservableDraft,
    store: Arc<dyn NoteStore>,
}

impl SleepNoteViewModel {
    /// Create a view-model with a fresh draft stamped now.
    pub fn new(store: Arc<dyn NoteStore>) -> Self {
        Self {
            draft: ObservableDraft::new(Utc::now()),
            store,
        }
    }

    /// Subscribe to draft changes. Clone the receiver for each subscriber.
    pub fn subscribe(&self) -> watch::Receiver<SleepNoteDraft> {
        self.draft.subscribe()
    }

    /// Select a feeling; re-selecting the current one clears it.
    pub fn select_feeling(&self, feeling: Feeling) {
        self.draft.select_feeling(feeling);
    }

    /// Toggle an activity's membership.
    pub fn toggle_activity(&self, activity: Activity) {
        self.draft.toggle_activity(activity);
    }

    /// Persist the current draft.
    ///
    /// Empty drafts are accepted; there is no screen-local validation.
    /// The draft itself is left untouched, so the screen keeps its
    /// selections after saving.
    pub fn save_note(&self) -> BoxFuture<'static, Result<NoteId, ModelError>> {
        let note = SleepNote::from_draft(&self.draft.snapshot(), Utc::now());
        let store = self.store.clone();

        Box::pin(async move {
            let id = store.save(note).await?;
            tracing::info!("Saved sleep note {}", id);
            Ok(id)
        })
    }
}

// =============================================================================
// Tests
// =============================================================================
