//! GPUI keybinding registration.
//!
//! All bindings are static; nothing is runtime-configurable. GPUI uses
//! last-wins semantics, so anything registered after these would override
//! them at the same context depth.

use gpui::KeyBinding;

use crate::actions::{Dismiss, SaveNote};

/// Keybinding context for the note screen.
pub const NOTE_SCREEN_CONTEXT: &str = "NoteScreen";

/// Default bindings for the note screen.
pub fn default_bindings() -> Vec<KeyBinding> {
    vec![
        KeyBinding::new("enter", SaveNote, Some(NOTE_SCREEN_CONTEXT)),
        KeyBinding::new("cmd-s", SaveNote, Some(NOTE_SCREEN_CONTEXT)),
        KeyBinding::new("escape", Dismiss, Some(NOTE_SCREEN_CONTEXT)),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_bindings_cover_save_and_dismiss() {
        assert_eq!(default_bindings().len(), 3);
    }
}
