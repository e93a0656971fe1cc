//! The persistence seam for saved notes.
//!
//! The store trait returns futures, allowing the caller to spawn them
//! however it wants. What backs the store is not this crate's concern;
//! `MemoryStore` is the reference implementation and is all the app ships.

use std::sync::Arc;

use futures::future::BoxFuture;
use parking_lot::Mutex;

use lull_core::{ModelError, NoteId, SleepNote};

/// Trait for note persistence.
///
/// Implementations must be cheap to clone behind an `Arc` and callable from
/// any thread.
pub trait NoteStore: Send + Sync {
    /// Persist a note. Returns the stored note's id.
    fn save(&self, note: SleepNote) -> BoxFuture<'static, Result<NoteId, ModelError>>;

    /// List all stored notes in insertion order.
    fn list(&self) -> BoxFuture<'static, Result<Vec<SleepNote>, ModelError>>;
}

/// In-memory note store.
pub struct MemoryStore {
    notes: Arc<Mutex<Vec<SleepNote>>>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            notes: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Number of stored notes.
    pub fn len(&self) -> usize {
        self.notes.lock().len()
    }

    /// Whether the store holds no notes.
    pub fn is_empty(&self) -> bool {
        self.notes.lock().is_empty()
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl NoteStore for MemoryStore {
    fn save(&self, note: SleepNote) -> BoxFuture<'static, Result<NoteId, ModelError>> {
        let notes = self.notes.clone();
        Box::pin(async move {
            let id = note.id;
            notes.lock().push(note);
            tracing::debug!("Stored note {}", id);
            Ok(id)
        })
    }

    fn list(&self) -> BoxFuture<'static, Result<Vec<SleepNote>, ModelError>> {
        let notes = self.notes.clone();
        Box::pin(async move { Ok(notes.lock().clone()) })
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use lull_core::SleepNoteDraft;

    fn note() -> SleepNote {
        SleepNote::from_draft(&SleepNoteDraft::new(Utc::now()), Utc::now())
    }

    #[tokio::test]
    async fn test_save_returns_the_note_id() {
        let store = MemoryStore::new();
        let note = note();
        let id = note.id;

        let saved = store.save(note).await.unwrap();
        assert_eq!(saved, id);
        assert_eq!(store.len(), 1);
    }

    #[tokio::test]
    async fn test_list_preserves_insertion_order() {
        let store = MemoryStore::new();
        let first = note();
        let second = note();

        store.save(first.clone()).await.unwrap();
        store.save(second.clone()).await.unwrap();

        let listed = store.list().await.unwrap();
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0].id, first.id);
        assert_eq!(listed[1].id, second.id);
    }

    #[tokio::test]
    async fn test_empty_store() {
        let store = MemoryStore::new();
        assert!(store.is_empty());
        assert!(store.list().await.unwrap().is_empty());
    }
}
