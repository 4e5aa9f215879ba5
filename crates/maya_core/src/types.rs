//! Shared component enums

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::value::PropValue;

/// Component size variants
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComponentSize {
    Xs,
    Sm,
    #[default]
    Md,
    Lg,
    Xl,
}

impl ComponentSize {
    pub fn as_str(self) -> &'static str {
        match self {
            ComponentSize::Xs => "xs",
            ComponentSize::Sm => "sm",
            ComponentSize::Md => "md",
            ComponentSize::Lg => "lg",
            ComponentSize::Xl => "xl",
        }
    }
}

impl FromStr for ComponentSize {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "xs" => Ok(ComponentSize::Xs),
            "sm" => Ok(ComponentSize::Sm),
            "md" => Ok(ComponentSize::Md),
            "lg" => Ok(ComponentSize::Lg),
            "xl" => Ok(ComponentSize::Xl),
            other => Err(CoreError::unknown("size", other)),
        }
    }
}

/// Horizontal alignment of a component or of a molecule's layout
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComponentAlignment {
    #[default]
    Left,
    Center,
    Right,
    Justify,
}

impl ComponentAlignment {
    pub fn as_str(self) -> &'static str {
        match self {
            ComponentAlignment::Left => "left",
            ComponentAlignment::Center => "center",
            ComponentAlignment::Right => "right",
            ComponentAlignment::Justify => "justify",
        }
    }
}

impl FromStr for ComponentAlignment {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "left" => Ok(ComponentAlignment::Left),
            "center" => Ok(ComponentAlignment::Center),
            "right" => Ok(ComponentAlignment::Right),
            "justify" => Ok(ComponentAlignment::Justify),
            other => Err(CoreError::unknown("alignment", other)),
        }
    }
}

impl Display for ComponentSize {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Display for ComponentAlignment {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<ComponentSize> for PropValue {
    fn from(value: ComponentSize) -> Self {
        PropValue::Text(value.as_str().to_string())
    }
}

impl From<ComponentAlignment> for PropValue {
    fn from(value: ComponentAlignment) -> Self {
        PropValue::Text(value.as_str().to_string())
    }
}
