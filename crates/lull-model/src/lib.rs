//! View-model for the Lull sleep tracker.
//!
//! This crate owns the note draft and its change notifications:
//! - `ObservableDraft` broadcasts every mutation over `tokio::sync::watch`
//! - `SleepNoteViewModel` exposes the screen's intents
//! - `NoteStore` is the persistence seam (in-memory reference impl)
//!
//! Nothing here depends on the UI toolkit; the UI subscribes and reacts.

mod draft;
mod store;
mod view_model;

pub use draft::ObservableDraft;
pub use store::{MemoryStore, NoteStore};
pub use view_model::SleepNoteViewModel;
