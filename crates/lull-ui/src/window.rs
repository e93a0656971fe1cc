//! Window management for the Lull app.
//!
//! This module provides `NoteWindow` which owns the window lifecycle and
//! the dismiss handling, plus `run_app` as the application entry point.

use std::sync::Arc;

use gpui::{
    px, size, App, AppContext, Bounds, Entity, TitlebarOptions, WindowBounds, WindowHandle,
    WindowKind, WindowOptions,
};

use crate::keymap::default_bindings;
use crate::theme::{Theme, ThemeSettings};
use crate::viewmodel::SleepModel;
use crate::views::{NoteScreen, NoteScreenEvent};

// =============================================================================
// Window Configuration
// =============================================================================

/// Default window dimensions - phone-proportioned, like the screen it hosts.
pub const DEFAULT_WIDTH: f32 = 390.0;
pub const DEFAULT_HEIGHT: f32 = 844.0;

/// Create window options for the note screen.
///
/// Note: Window bounds will be set after creation since we need App context.
fn create_window_options() -> WindowOptions {
    WindowOptions {
        window_bounds: None, // Will be set via Bounds::centered
        titlebar: Some(TitlebarOptions {
            title: Some("Lull".into()),
            ..Default::default()
        }),
        focus: true,
        show: true,
        kind: WindowKind::Normal,
        is_movable: true,
        ..Default::default()
    }
}

// =============================================================================
// Note Window
// =============================================================================

/// The main app window.
///
/// Owns the GPUI window handle and wires screen events to app lifecycle.
pub struct NoteWindow {
    /// The GPUI window handle.
    window_handle: WindowHandle<NoteScreen>,
}

impl NoteWindow {
    /// Create the app window hosting the note screen.
    ///
    /// Returns `None` if the window couldn't be created.
    pub fn new(model: Arc<dyn SleepModel>, cx: &mut App) -> Option<Self> {
        // Create window options with centered bounds
        let window_size = size(px(DEFAULT_WIDTH), px(DEFAULT_HEIGHT));
        let bounds = Bounds::centered(None, window_size, cx);
        let options = WindowOptions {
            window_bounds: Some(WindowBounds::Windowed(bounds)),
            ..create_window_options()
        };

        // Create the window and get the screen entity for event subscription
        let mut screen_entity: Option<Entity<NoteScreen>> = None;
        let window_handle = cx
            .open_window(options, |window, cx| {
                let screen = cx.new(|inner_cx| NoteScreen::new(model.clone(), inner_cx));
                screen_entity = Some(screen.clone());

                // Focus the screen so keybindings land in its context
                let handle = screen.read(cx).focus_handle(cx);
                window.focus(&handle, cx);

                screen
            })
            .ok()?;

        // Quit when the screen asks to be dismissed
        let screen_entity = screen_entity?;
        cx.subscribe(&screen_entity, |_, event: &NoteScreenEvent, cx| match event {
            NoteScreenEvent::Dismiss => {
                cx.quit();
            }
        })
        .detach();

        Some(Self { window_handle })
    }

    /// Get the window handle.
    pub fn handle(&self) -> WindowHandle<NoteScreen> {
        self.window_handle
    }
}

// =============================================================================
// App Entry Point
// =============================================================================

/// Initialize and run the Lull application.
///
/// This is the main entry point that sets up everything needed:
/// 1. Creates the GPUI application
/// 2. Installs the theme global and default keybindings
/// 3. Creates the window with the note screen
/// 4. Runs the main loop
pub fn run_app(settings: ThemeSettings, model: Arc<dyn SleepModel>) {
    gpui::Application::new().run(move |cx| {
        // The screen's native look is dark; System resolves to it
        cx.set_global(Theme::from_settings(&settings, true));

        cx.bind_keys(default_bindings());

        let window = NoteWindow::new(model, cx);

        let Some(window) = window else {
            tracing::error!("Failed to create app window");
            cx.quit();
            return;
        };

        cx.activate(true);

        // Keep the window alive by storing it as a global
        cx.set_global(window);
    });
}

// =============================================================================
// Global Storage
// =============================================================================

impl gpui::Global for NoteWindow {}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_options() {
        let options = create_window_options();
        assert!(options.titlebar.is_some());
        assert!(options.show);
        assert!(matches!(options.kind, WindowKind::Normal));
        assert!(options.is_movable);
    }

    #[test]
    fn test_window_is_phone_proportioned() {
        assert!(DEFAULT_HEIGHT > DEFAULT_WIDTH * 2.0);
    }
}
