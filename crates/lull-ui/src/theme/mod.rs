//! Theme system for the Lull note screen.
//!
//! Provides a two-layer theming system:
//! - `ThemeSettings`: User-configurable preferences (from lull.toml)
//! - `Theme`: Computed colors and metrics derived from settings

use gpui::{px, rgb, App, Global, Hsla, Pixels, SharedString};

use lull_core::{AppConfig, ThemeMode};

// =============================================================================
// Theme Settings (User-Configurable)
// =============================================================================

/// User-configurable theme settings.
///
/// These come from lull.toml. The actual `Theme` is derived from these
/// settings; the screen's native look is the dark palette.
#[derive(Debug, Clone)]
pub struct ThemeSettings {
    /// Light, dark, or follow system.
    pub appearance: Appearance,
    /// Accent color override as packed 0xRRGGBB, if configured.
    pub accent: Option<u32>,
    /// Main font family.
    pub font_family: SharedString,
}

impl Default for ThemeSettings {
    fn default() -> Self {
        Self {
            appearance: Appearance::System,
            accent: None,
            font_family: "Poppins".into(),
        }
    }
}

impl ThemeSettings {
    /// Build settings from the loaded config.
    ///
    /// An invalid accent string is dropped with a warning; it never blocks
    /// startup.
    pub fn from_config(config: &AppConfig) -> Self {
        let appearance = match config.appearance.theme {
            ThemeMode::Light => Appearance::Light,
            ThemeMode::Dark => Appearance::Dark,
            ThemeMode::System => Appearance::System,
        };

        let accent = match config.appearance.accent_rgb() {
            Ok(accent) => accent,
            Err(e) => {
                tracing::warn!("Ignoring accent override: {}", e);
                None
            }
        };

        Self {
            appearance,
            accent,
            ..Default::default()
        }
    }
}

impl Global for ThemeSettings {}

/// Appearance mode preference.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Appearance {
    Light,
    Dark,
    #[default]
    System,
}

// =============================================================================
// Theme (Computed)
// =============================================================================

/// The active theme with computed colors and layout metrics.
///
/// Access via `cx.global::<Theme>()` or `cx.theme()` in render methods.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Whether this is a dark theme.
    pub is_dark: bool,

    // -------------------------------------------------------------------------
    // Background Colors
    // -------------------------------------------------------------------------
    /// Main screen background.
    pub background: Hsla,
    /// Unselected tile fill.
    pub surface: Hsla,
    /// Bottom navigation bar background.
    pub nav_background: Hsla,

    // -------------------------------------------------------------------------
    // Text Colors
    // -------------------------------------------------------------------------
    /// Primary text color.
    pub text: Hsla,
    /// Secondary/muted text (timestamps).
    pub text_muted: Hsla,

    // -------------------------------------------------------------------------
    // Interactive Colors
    // -------------------------------------------------------------------------
    /// Selected tile fill and save button.
    pub accent: Hsla,
    /// Save button while hovered.
    pub accent_hover: Hsla,

    // -------------------------------------------------------------------------
    // Typography
    // -------------------------------------------------------------------------
    /// Main font family.
    pub font_family: SharedString,
    /// Screen title size.
    pub title_size: Pixels,
    /// Section header size.
    pub section_size: Pixels,
    /// Tile label size.
    pub label_size: Pixels,
    /// Tile glyph size.
    pub glyph_size: Pixels,
    /// Save button text size.
    pub button_text_size: Pixels,
    /// Nav destination label size.
    pub nav_label_size: Pixels,
    /// Nav destination icon size.
    pub nav_icon_size: Pixels,

    // -------------------------------------------------------------------------
    // Spacing
    // -------------------------------------------------------------------------
    /// Horizontal screen padding.
    pub screen_padding: Pixels,
    /// Gap between grid rows.
    pub row_gap: Pixels,
    /// Diameter of the circular tile.
    pub tile_size: Pixels,
    /// Width of a tile column (glyph + label).
    pub tile_width: Pixels,
    /// Save button height.
    pub button_height: Pixels,
    /// Save button corner radius.
    pub button_radius: Pixels,
}

impl Theme {
    /// Create a theme from settings and system appearance.
    pub fn from_settings(settings: &ThemeSettings, system_is_dark: bool) -> Self {
        let is_dark = match settings.appearance {
            Appearance::Dark => true,
            Appearance::Light => false,
            Appearance::System => system_is_dark,
        };

        let mut palette = if is_dark {
            Palette::dark()
        } else {
            Palette::light()
        };

        if let Some(accent) = settings.accent {
            palette.accent = rgb(accent).into();
            palette.accent_hover = palette.accent;
        }

        Self {
            is_dark,

            // Backgrounds
            background: palette.bg_base,
            surface: palette.bg_tile,
            nav_background: palette.bg_nav,

            // Text
            text: palette.fg_primary,
            text_muted: palette.fg_muted,

            // Interactive
            accent: palette.accent,
            accent_hover: palette.accent_hover,

            // Typography
            font_family: settings.font_family.clone(),
            title_size: px(24.0),
            section_size: px(16.0),
            label_size: px(14.0),
            glyph_size: px(24.0),
            button_text_size: px(20.0),
            nav_label_size: px(12.0),
            nav_icon_size: px(24.0),

            // Spacing
            screen_padding: px(16.0),
            row_gap: px(16.0),
            tile_size: px(56.0),
            tile_width: px(80.0),
            button_height: px(48.0),
            button_radius: px(30.0),
        }
    }

    /// Create default dark theme.
    pub fn dark() -> Self {
        Self::from_settings(&ThemeSettings::default(), true)
    }

    /// Create default light theme.
    pub fn light() -> Self {
        Self::from_settings(&ThemeSettings::default(), false)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Global for Theme {}

// =============================================================================
// Palette (Internal)
// =============================================================================

/// Internal color palette for deriving theme colors.
///
/// Not exposed publicly - just an implementation detail.
struct Palette {
    bg_base: Hsla,
    bg_tile: Hsla,
    bg_nav: Hsla,
    fg_primary: Hsla,
    fg_muted: Hsla,
    accent: Hsla,
    accent_hover: Hsla,
}

impl Palette {
    fn dark() -> Self {
        Self {
            bg_base: rgb(0x0c1631).into(),
            bg_tile: rgb(0x1c3365).into(),
            bg_nav: rgb(0x0d1527).into(),
            fg_primary: rgb(0xffffff).into(),
            fg_muted: rgb(0x8d97b8).into(),
            accent: rgb(0x514388).into(),
            accent_hover: rgb(0x61519f).into(),
        }
    }

    fn light() -> Self {
        Self {
            bg_base: rgb(0xf2f4fb).into(),
            bg_tile: rgb(0xdde3f1).into(),
            bg_nav: rgb(0xe8ecf7).into(),
            fg_primary: rgb(0x10182b).into(),
            fg_muted: rgb(0x5a6380).into(),
            accent: rgb(0x514388).into(),
            accent_hover: rgb(0x61519f).into(),
        }
    }
}

// =============================================================================
// Theme Extensions
// =============================================================================

/// Extension trait for convenient theme access.
pub trait ThemeExt {
    /// Get the current theme.
    fn theme(&self) -> &Theme;
}

impl ThemeExt for App {
    fn theme(&self) -> &Theme {
        self.global::<Theme>()
    }
}

// =============================================================================
// Tests
// =============================================================================
