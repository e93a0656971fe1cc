//! UI views for the note screen.
//!
//! `NoteScreen` is the stateful composition; tiles and the nav bar are
//! stateless render helpers.

mod nav_bar;
mod note_screen;
mod tile;

pub use nav_bar::render_nav_bar;
pub use note_screen::{NoteScreen, NoteScreenEvent};
pub use tile::render_tile;
