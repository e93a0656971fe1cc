//! Centralized actions for the note screen.
//!
//! Actions are dispatched by GPUI's key binding system; the screen handles
//! them via `on_action`.

use gpui::actions;

actions!(lull, [SaveNote, Dismiss]);
