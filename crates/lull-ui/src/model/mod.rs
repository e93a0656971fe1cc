//! State model for the note screen UI.
//!
//! This module contains the display state and grid layout helpers that drive
//! the UI. All types are GPUI-independent for testability.

mod state;

pub use state::{activity_rows, feeling_rows, NavDestination, NoteDisplayState, GRID_COLUMNS};
