//! Maya Theme System
//!
//! - [`ClassNamespace`]: read-only lookup from semantic keys to class identifiers
//! - [`ThemeState`]: current theme name and device class
//! - [`ThemeManager`]: attaches theme and device to a view's properties
//! - [`ThemeConfig`]: `maya.toml` loading
//!
//! # Quick Start
//!
//! ```rust
//! use maya_theme::{ThemeConfig, ThemeManager, ThemeState};
//!
//! let state = ThemeState::new(&ThemeConfig::default());
//! let manager = ThemeManager::new(&state);
//! assert_eq!(manager.namespace().block("title"), "maya-title");
//! ```

pub mod config;
pub mod device;
pub mod error;
pub mod manager;
pub mod namespace;
pub mod state;

pub use config::{ClassConfig, ThemeConfig};
pub use device::DeviceType;
pub use error::ThemeError;
pub use manager::ThemeManager;
pub use namespace::ClassNamespace;
pub use state::{set_redraw_callback, ThemeState};
