//! View-model integration for the note screen.
//!
//! This module provides the bridge between the UI and the sleep-note
//! view-model. The `SleepModel` trait is GPUI-independent and mockable for
//! testing.
//!
//! ## Reactive State
//!
//! The view-model broadcasts draft changes automatically via
//! `tokio::sync::watch`. The UI subscribes to these changes and re-renders.
//! Intents (`select_feeling`, `toggle_activity`) never report state back
//! directly; updated snapshots arrive through the subscription.

use std::sync::Arc;

use futures::future::BoxFuture;
use tokio::sync::watch;

use lull_core::{Activity, Feeling, ModelError, NoteId, SleepNoteDraft};
use lull_model::SleepNoteViewModel;

// =============================================================================
// SleepModel Trait
// =============================================================================

/// Trait for view-model operations.
///
/// This trait is GPUI-independent. `save_note` returns a future, allowing
/// the caller to spawn it however it wants. This enables testing with mock
/// models.
pub trait SleepModel: Send + Sync {
    /// Subscribe to draft changes. Clone the receiver for each subscriber.
    fn subscribe(&self) -> watch::Receiver<SleepNoteDraft>;

    /// Select a feeling; re-selecting the current one clears it.
    fn select_feeling(&self, feeling: Feeling);

    /// Toggle an activity's membership in the selected set.
    fn toggle_activity(&self, activity: Activity);

    /// Persist the current draft. Empty drafts are accepted.
    fn save_note(&self) -> BoxFuture<'static, Result<NoteId, ModelError>>;
}

// =============================================================================
// Runtime Model
// =============================================================================

/// Real model implementation backed by `SleepNoteViewModel`.
pub struct RuntimeModel {
    inner: Arc<SleepNoteViewModel>,
}

impl RuntimeModel {
    /// Create a new runtime model.
    pub fn new(inner: Arc<SleepNoteViewModel>) -> Self {
        Self { inner }
    }
}

impl SleepModel for RuntimeModel {
    fn subscribe(&self) -> watch::Receiver<SleepNoteDraft> {
        self.inner.subscribe()
    }

    fn select_feeling(&self, feeling: Feeling) {
        self.inner.select_feeling(feeling);
    }

    fn toggle_activity(&self, activity: Activity) {
        self.inner.toggle_activity(activity);
    }

    fn save_note(&self) -> BoxFuture<'static, Result<NoteId, ModelError>> {
        self.inner.save_note()
    }
}

// =============================================================================
// Mock Model for Testing
// =============================================================================

#[cfg(test)]
pub mod mock {
    use super::*;
    use chrono::Utc;
    use lull_model::ObservableDraft;
    use parking_lot::Mutex;

    /// Mock model for testing.
    ///
    /// Intents drive a real observable draft so subscription behavior matches
    /// the runtime model; saving only counts invocations.
    pub struct MockModel {
        draft: ObservableDraft,
        pub save_count: Arc<Mutex<usize>>,
        pub fail_save: bool,
    }

    impl MockModel {
        /// Create a new mock model.
        pub fn new() -> Self {
            Self {
                draft: ObservableDraft::new(Utc::now()),
                save_count: Arc::new(Mutex::new(0)),
                fail_save: false,
            }
        }

        /// Make `save_note` fail.
        pub fn with_failing_save(mut self) -> Self {
            self.fail_save = true;
            self
        }

        /// How many times `save_note` has been invoked.
        pub fn saves(&self) -> usize {
            *self.save_count.lock()
        }
    }

    impl Default for MockModel {
        fn default() -> Self {
            Self::new()
        }
    }

    impl SleepModel for MockModel {
        fn subscribe(&self) -> watch::Receiver<SleepNoteDraft> {
            self.draft.subscribe()
        }

        fn select_feeling(&self, feeling: Feeling) {
            self.draft.select_feeling(feeling);
        }

        fn toggle_activity(&self, activity: Activity) {
            self.draft.toggle_activity(activity);
        }

        fn save_note(&self) -> BoxFuture<'static, Result<NoteId, ModelError>> {
            *self.save_count.lock() += 1;
            let fail = self.fail_save;
            Box::pin(async move {
                if fail {
                    Err(ModelError::Store("mock save failure".to_string()))
                } else {
                    Ok(NoteId::new())
                }
            })
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::mock::*;
    use super::*;
    use lull_model::MemoryStore;

    #[tokio::test]
    async fn test_mock_save_counts_one_per_activation() {
        let model = MockModel::new();

        model.save_note().await.unwrap();
        assert_eq!(model.saves(), 1);

        model.save_note().await.unwrap();
        assert_eq!(model.saves(), 2);
    }

    #[tokio::test]
    async fn test_mock_save_counts_even_on_empty_selection() {
        let model = MockModel::new();
        assert!(model.subscribe().borrow().is_empty());

        model.save_note().await.unwrap();
        assert_eq!(model.saves(), 1);
    }

    #[tokio::test]
    async fn test_mock_failing_save() {
        let model = MockModel::new().with_failing_save();

        let result = model.save_note().await;
        assert!(matches!(result, Err(ModelError::Store(_))));
        assert_eq!(model.saves(), 1);
    }

    #[test]
    fn test_mock_intents_broadcast() {
        let model = MockModel::new();
        let rx = model.subscribe();

        model.select_feeling(Feeling::Calm);
        model.toggle_activity(Activity::Nicotine);

        let snapshot = rx.borrow().clone();
        assert_eq!(snapshot.feeling, Some(Feeling::Calm));
        assert!(snapshot.activities.contains(&Activity::Nicotine));
    }

    #[tokio::test]
    async fn test_runtime_model_forwards_intents() {
        let store = Arc::new(MemoryStore::new());
        let model = RuntimeModel::new(Arc::new(SleepNoteViewModel::new(store.clone())));
        let rx = model.subscribe();

        model.select_feeling(Feeling::Stress);
        assert_eq!(rx.borrow().feeling, Some(Feeling::Stress));

        model.save_note().await.unwrap();
        assert_eq!(store.len(), 1);
    }
}
