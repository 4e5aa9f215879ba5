//! Maya Application Layer
//!
//! Views, component documents and configuration on top of the component
//! library. Views read the current theme and device through a
//! [`ThemeManager`](maya_theme::ThemeManager).

pub mod config;
pub mod document;
pub mod error;
pub mod home_page;

pub use config::AppConfig;
pub use document::{ComponentKind, Document};
pub use error::{AppError, Result};
pub use home_page::HomePage;
