//! Defaults shared by every atom and molecule

use crate::types::{ComponentAlignment, ComponentSize};

pub const DEFAULT_THEME: &str = "default";
pub const DEFAULT_DEVICE: &str = "computer";
pub const DEFAULT_SIZE: ComponentSize = ComponentSize::Md;
pub const DEFAULT_ALIGNMENT: ComponentAlignment = ComponentAlignment::Left;
pub const DEFAULT_IS_USER_SELECTABLE: bool = true;
pub const DEFAULT_IS_COMPONENT_ENABLED: bool = true;

/// Modifier applied when text selection is turned off
pub const NOT_USER_SELECTABLE_CLASS: &str = "notUserSelectable";
/// Modifier applied to disabled components
pub const DISABLED_CLASS: &str = "disabled";
