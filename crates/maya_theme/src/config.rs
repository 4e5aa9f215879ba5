//! Theme configuration (`maya.toml`)
//!
//! ```toml
//! theme = "default"
//! device = "tablet"
//!
//! [classes]
//! prefix = "maya"
//!
//! [classes.overrides]
//! "maya-title__content" = "title-text"
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use maya_core::defaults::DEFAULT_THEME;
use serde::{Deserialize, Serialize};

use crate::device::DeviceType;
use crate::error::ThemeError;
use crate::namespace::{ClassNamespace, DEFAULT_PREFIX};

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct ThemeConfig {
    #[serde(default = "default_theme")]
    pub theme: String,
    #[serde(default)]
    pub device: DeviceType,
    #[serde(default)]
    pub classes: ClassConfig,
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct ClassConfig {
    #[serde(default = "default_prefix")]
    pub prefix: String,
    /// Generated class name -> replacement identifier
    #[serde(default)]
    pub overrides: BTreeMap<String, String>,
}

fn default_theme() -> String {
    DEFAULT_THEME.to_string()
}

fn default_prefix() -> String {
    DEFAULT_PREFIX.to_string()
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            theme: default_theme(),
            device: DeviceType::default(),
            classes: ClassConfig::default(),
        }
    }
}

impl Default for ClassConfig {
    fn default() -> Self {
        Self {
            prefix: default_prefix(),
            overrides: BTreeMap::new(),
        }
    }
}

impl ThemeConfig {
    pub fn from_toml_str(src: &str) -> Result<Self, ThemeError> {
        Ok(toml::from_str(src)?)
    }

    pub fn load(path: &Path) -> Result<Self, ThemeError> {
        let src = fs::read_to_string(path).map_err(|source| ThemeError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&src)
    }

    /// Build the class namespace described by `[classes]`
    pub fn namespace(&self) -> ClassNamespace {
        let mut ns = ClassNamespace::new(self.classes.prefix.clone());
        ns.extend_overrides(self.classes.overrides.clone());
        ns
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = ThemeConfig::from_toml_str("").unwrap();
        assert_eq!(config, ThemeConfig::default());
        assert_eq!(config.theme, "default");
        assert_eq!(config.device, DeviceType::Computer);
    }

    #[test]
    fn test_full_config() {
        let config = ThemeConfig::from_toml_str(
            r#"
            theme = "dark"
            device = "mobile"

            [classes]
            prefix = "ui"

            [classes.overrides]
            "ui-title__content" = "title-text"
            "#,
        )
        .unwrap();

        assert_eq!(config.theme, "dark");
        assert_eq!(config.device, DeviceType::Mobile);
        let ns = config.namespace();
        assert_eq!(ns.element("title", "content"), "title-text");
        assert_eq!(ns.block("title"), "ui-title");
    }

    #[test]
    fn test_unknown_device_is_a_parse_error() {
        let err = ThemeConfig::from_toml_str(r#"device = "watch""#).unwrap_err();
        assert!(matches!(err, ThemeError::Parse(_)));
    }
}
