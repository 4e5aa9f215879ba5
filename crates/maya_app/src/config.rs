//! Application configuration (`maya.toml`)
//!
//! Theme settings sit at the top level (see [`ThemeConfig`]); the viewport
//! used for breakpoint selection has its own table:
//!
//! ```toml
//! theme = "dark"
//! device = "tablet"
//!
//! [viewport]
//! width = 900
//! ```

use std::fs;
use std::path::Path;

use maya_layout::Breakpoint;
use maya_theme::{DeviceType, ThemeConfig};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};

pub const DEFAULT_VIEWPORT_WIDTH: f32 = 1280.0;

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct AppConfig {
    #[serde(flatten)]
    pub theme: ThemeConfig,
    #[serde(default)]
    pub viewport: ViewportConfig,
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct ViewportConfig {
    #[serde(default = "default_width")]
    pub width: f32,
}

fn default_width() -> f32 {
    DEFAULT_VIEWPORT_WIDTH
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
        }
    }
}

impl AppConfig {
    pub fn from_toml_str(src: &str) -> Result<Self> {
        Ok(toml::from_str(src)?)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let src = fs::read_to_string(path).map_err(|source| AppError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&src)?;
        tracing::debug!("loaded config from {}", path.display());
        Ok(config)
    }

    /// Replace the configured theme and device with command-line choices
    pub fn with_overrides(mut self, theme: Option<String>, device: Option<DeviceType>) -> Self {
        if let Some(theme) = theme {
            self.theme.theme = theme;
        }
        if let Some(device) = device {
            self.theme.device = device;
        }
        self
    }

    pub fn breakpoint(&self) -> Breakpoint {
        Breakpoint::for_width(self.viewport.width)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::from_toml_str("").unwrap();
        assert_eq!(config.theme.theme, "default");
        assert_eq!(config.viewport.width, DEFAULT_VIEWPORT_WIDTH);
        assert_eq!(config.breakpoint(), Breakpoint::Xl);
    }

    #[test]
    fn test_theme_and_viewport_tables() {
        let config = AppConfig::from_toml_str(
            r#"
            theme = "dark"
            device = "tablet"

            [classes]
            prefix = "ui"

            [viewport]
            width = 900.0
            "#,
        )
        .unwrap();

        assert_eq!(config.theme.theme, "dark");
        assert_eq!(config.theme.device, DeviceType::Tablet);
        assert_eq!(config.theme.classes.prefix, "ui");
        assert_eq!(config.breakpoint(), Breakpoint::Md);
    }

    #[test]
    fn test_overrides_win() {
        let config = AppConfig::default().with_overrides(Some("dark".into()), Some(DeviceType::Mobile));
        assert_eq!(config.theme.theme, "dark");
        assert_eq!(config.theme.device, DeviceType::Mobile);
    }

    #[test]
    fn test_missing_file_reports_path() {
        let err = AppConfig::load(Path::new("/nonexistent/maya.toml")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/maya.toml"));
    }
}
