//! Core types for the Lull sleep tracker.
//!
//! This crate contains shared data structures that are used across all Lull crates:
//! - Feeling and Activity catalogs for the note screen
//! - Draft and saved-note types
//! - Configuration types
//! - Error types

mod activity;
mod config;
mod error;
mod feeling;
mod note;

pub use activity::Activity;
pub use config::{
    config_dir, config_file_path, ensure_config_dir, AppConfig, AppearanceConfig, ThemeMode,
};
pub use error::{ConfigError, ModelError};
pub use feeling::Feeling;
pub use note::{NoteId, SleepNote, SleepNoteDraft};
