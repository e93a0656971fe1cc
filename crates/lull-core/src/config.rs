//! Configuration types.
//!
//! Configuration lives in `<config_dir>/lull/lull.toml`. A missing file
//! means defaults; a malformed file is reported to the caller, which is
//! expected to warn and continue with defaults.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::ConfigError;

/// Runtime configuration loaded from lull.toml.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Appearance settings
    #[serde(default)]
    pub appearance: AppearanceConfig,
}

impl AppConfig {
    /// Load configuration from a specific file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|e| ConfigError::Io(e.to_string()))?;
        toml::from_str(&raw).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Load from the default location. `Ok(None)` when no file exists.
    pub fn load_default() -> Result<Option<Self>, ConfigError> {
        let path = config_file_path().ok_or(ConfigError::NoConfigDir)?;
        if !path.exists() {
            return Ok(None);
        }
        Self::load(&path).map(Some)
    }
}

/// Appearance configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppearanceConfig {
    /// Theme mode: "light", "dark", or "system"
    #[serde(default)]
    pub theme: ThemeMode,

    /// Accent color override (hex string, e.g. "#514388")
    pub accent_color: Option<String>,
}

impl AppearanceConfig {
    /// Parse the accent override into a packed 0xRRGGBB value.
    pub fn accent_rgb(&self) -> Result<Option<u32>, ConfigError> {
        let Some(raw) = self.accent_color.as_deref() else {
            return Ok(None);
        };
        let hex = raw.strip_prefix('#').unwrap_or(raw);
        if hex.len() != 6 {
            return Err(ConfigError::InvalidColor(raw.to_string()));
        }
        u32::from_str_radix(hex, 16)
            .map(Some)
            .map_err(|_| ConfigError::InvalidColor(raw.to_string()))
    }
}

/// Theme mode selection.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    #[default]
    System,
}

/// Get the path to lull.toml.
pub fn config_file_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("lull/lull.toml"))
}

/// Get the config directory path.
pub fn config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("lull"))
}

/// Ensure the config directory exists.
pub fn ensure_config_dir() -> std::io::Result<()> {
    if let Some(dir) = config_dir() {
        std::fs::create_dir_all(dir)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(contents: &str) -> (tempfile::TempDir, PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("lull.toml");
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        (dir, path)
    }

    #[test]
    fn test_load_full_config() {
        let (_dir, path) = write_config(
            r##"
            [appearance]
            theme = "dark"
            accent_color = "#514388"
            "##,
        );

        let config = AppConfig::load(&path).unwrap();
        assert_eq!(config.appearance.theme, ThemeMode::Dark);
        assert_eq!(config.appearance.accent_rgb().unwrap(), Some(0x514388));
    }

    #[test]
    fn test_missing_sections_default() {
        let (_dir, path) = write_config("");

        let config = AppConfig::load(&path).unwrap();
        assert_eq!(config.appearance.theme, ThemeMode::System);
        assert!(config.appearance.accent_color.is_none());
    }

    #[test]
    fn test_garbage_is_a_parse_error() {
        let (_dir, path) = write_config("appearance = 3");

        let err = AppConfig::load(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_accent_without_hash_prefix() {
        let appearance = AppearanceConfig {
            theme: ThemeMode::System,
            accent_color: Some("1c3365".to_string()),
        };
        assert_eq!(appearance.accent_rgb().unwrap(), Some(0x1c3365));
    }

    #[test]
    fn test_bad_accent_is_rejected() {
        let appearance = AppearanceConfig {
            theme: ThemeMode::System,
            accent_color: Some("#51438".to_string()),
        };
        assert!(matches!(
            appearance.accent_rgb(),
            Err(ConfigError::InvalidColor(_))
        ));
    }
}
