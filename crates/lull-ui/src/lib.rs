//! GPUI frontend for the Lull sleep tracker.
//!
//! This crate provides the native GPUI user interface including:
//! - NoteWindow for window management
//! - NoteScreen for the screen composition
//! - Tile and nav bar render helpers
//! - View-model integration
//! - Theme and keybinding setup

pub mod actions;
pub mod keymap;
pub mod model;
pub mod theme;
pub mod viewmodel;
pub mod views;
pub mod window;

// Re-export commonly used types
pub use model::{activity_rows, feeling_rows, NavDestination, NoteDisplayState, GRID_COLUMNS};
pub use theme::{Appearance, Theme, ThemeExt, ThemeSettings};
pub use viewmodel::{RuntimeModel, SleepModel};
pub use views::{NoteScreen, NoteScreenEvent};
pub use window::{run_app, NoteWindow};
