//! Layout style helpers

pub use taffy::prelude::*;

/// Helper to create common layout styles
pub struct LayoutStyle;

impl LayoutStyle {
    /// Create a flex row style that wraps its items
    pub fn flex_row() -> Style {
        Style {
            display: Display::Flex,
            flex_direction: FlexDirection::Row,
            flex_wrap: FlexWrap::Wrap,
            ..Default::default()
        }
    }

    /// Create a flex column style
    pub fn flex_column() -> Style {
        Style {
            display: Display::Flex,
            flex_direction: FlexDirection::Column,
            ..Default::default()
        }
    }

    /// Create a flex column style with a fixed size, used as a viewport root
    pub fn viewport(width: f32, height: f32) -> Style {
        Style {
            size: Size {
                width: Dimension::Length(width),
                height: Dimension::Length(height),
            },
            ..Self::flex_column()
        }
    }

    /// Symmetric horizontal margins
    pub fn horizontal_margin(value: f32) -> Rect<LengthPercentageAuto> {
        Rect {
            left: LengthPercentageAuto::Length(value),
            right: LengthPercentageAuto::Length(value),
            top: LengthPercentageAuto::Length(0.0),
            bottom: LengthPercentageAuto::Length(0.0),
        }
    }

    /// Symmetric horizontal padding
    pub fn horizontal_padding(value: f32) -> Rect<LengthPercentage> {
        Rect {
            left: LengthPercentage::Length(value),
            right: LengthPercentage::Length(value),
            top: LengthPercentage::Length(0.0),
            bottom: LengthPercentage::Length(0.0),
        }
    }
}
