//! Lull - main entry point.
//!
//! Loads configuration, wires the store and view-model together, and starts
//! the GPUI application.

use std::sync::Arc;

use lull_core::AppConfig;
use lull_model::{MemoryStore, SleepNoteViewModel};
use lull_ui::theme::ThemeSettings;
use lull_ui::viewmodel::RuntimeModel;
use lull_ui::window::run_app;

// =============================================================================
// Configuration
// =============================================================================

/// Load lull.toml, degrading gracefully to defaults.
///
/// A missing file is normal; a malformed one gets a warning and defaults so
/// startup never fails on configuration.
fn load_config() -> AppConfig {
    match AppConfig::load_default() {
        Ok(Some(config)) => {
            tracing::info!("Config loaded");
            config
        }
        Ok(None) => {
            tracing::info!("No lull.toml found - using default configuration");
            AppConfig::default()
        }
        Err(e) => {
            tracing::warn!("Failed to load config: {} - continuing with defaults", e);
            AppConfig::default()
        }
    }
}

// =============================================================================
// Entry Point
// =============================================================================

fn main() {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    tracing::info!("Lull starting...");

    // Create a tokio runtime and enter its context.
    // This keeps tokio available for the entire lifetime of the app,
    // which is needed for the watch channels used by the view-model.
    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()
        .expect("Failed to create tokio runtime");
    let _guard = rt.enter();

    // Load configuration and derive theme settings
    let config = load_config();
    let settings = ThemeSettings::from_config(&config);

    // Wire store -> view-model -> UI bridge
    let store = Arc::new(MemoryStore::new());
    let view_model = Arc::new(SleepNoteViewModel::new(store));
    let model = Arc::new(RuntimeModel::new(view_model));
    tracing::info!("View-model created");

    // Run the GPUI application
    tracing::info!("Starting GPUI application...");
    run_app(settings, model);
}
