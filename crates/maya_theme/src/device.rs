//! Device classes

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use maya_core::{CoreError, PropValue};
use serde::{Deserialize, Serialize};

/// Viewport width below which a device counts as mobile
pub const TABLET_MIN_WIDTH: f32 = 768.0;
/// Viewport width from which a device counts as a computer
pub const COMPUTER_MIN_WIDTH: f32 = 1024.0;

/// The class of device a view is rendered for
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeviceType {
    #[default]
    Computer,
    Tablet,
    Mobile,
}

impl DeviceType {
    pub fn as_str(self) -> &'static str {
        match self {
            DeviceType::Computer => "computer",
            DeviceType::Tablet => "tablet",
            DeviceType::Mobile => "mobile",
        }
    }

    /// Classify a viewport width in logical pixels
    pub fn for_width(width: f32) -> Self {
        match width {
            w if w < TABLET_MIN_WIDTH => DeviceType::Mobile,
            w if w < COMPUTER_MIN_WIDTH => DeviceType::Tablet,
            _ => DeviceType::Computer,
        }
    }
}

impl FromStr for DeviceType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "computer" => Ok(DeviceType::Computer),
            "tablet" => Ok(DeviceType::Tablet),
            "mobile" => Ok(DeviceType::Mobile),
            other => Err(CoreError::unknown("device", other)),
        }
    }
}

impl Display for DeviceType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<DeviceType> for PropValue {
    fn from(value: DeviceType) -> Self {
        PropValue::Text(value.as_str().to_string())
    }
}
