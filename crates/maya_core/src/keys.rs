//! Well-known property names
//!
//! Names follow the camelCase convention used by JSON documents.

pub const THEME: &str = "theme";
pub const DEVICE: &str = "device";
pub const CUSTOM_CLASS: &str = "customClass";
pub const SIZE: &str = "size";
pub const IS_USER_SELECTABLE: &str = "isUserSelectable";
pub const IS_ENABLED: &str = "isEnabled";
pub const STATUS: &str = "status";
pub const ALIGNMENT: &str = "alignment";

pub const ANIMATION_TYPE: &str = "animationType";
pub const ANIMATION_NAME: &str = "animationName";
pub const ANIMATION_BEHAVIOUR: &str = "animationBehaviour";
pub const ANIMATION_DURATION: &str = "animationDuration";

/// Text content of a text-bearing atom
pub const CHILDREN: &str = "children";
pub const FAMILY: &str = "family";
pub const NAME: &str = "name";
pub const LABEL: &str = "label";

pub const SIDE: &str = "side";
pub const DIVIDER_TYPE: &str = "type";
pub const PADDING_TOP: &str = "paddingTop";
pub const PADDING_BOTTOM: &str = "paddingBottom";
pub const PADDING_LEFT: &str = "paddingLeft";
pub const PADDING_RIGHT: &str = "paddingRight";

pub const HEADER_TITLE: &str = "headerTitle";
pub const HEADER_SUBTITLE: &str = "headerSubtitle";
pub const HEADER_GLYPH: &str = "headerGlyph";
pub const HEADER_DIVIDER: &str = "headerDivider";
pub const GLYPH_FAMILY: &str = "glyphFamily";
pub const GLYPH_NAME: &str = "glyphName";

pub const LABEL_ALIGNMENT: &str = "labelAlignment";

pub const PADDINGS: [&str; 4] = [PADDING_TOP, PADDING_BOTTOM, PADDING_LEFT, PADDING_RIGHT];

/// Scalars a molecule hands down to every slot it fills
pub const PASSTHROUGH: [&str; 8] = [
    THEME,
    DEVICE,
    CUSTOM_CLASS,
    SIZE,
    IS_USER_SELECTABLE,
    IS_ENABLED,
    STATUS,
    ALIGNMENT,
];

/// Properties that may be declared once or once per slot
pub const MULTI_VALUE: [&str; 4] = [
    ANIMATION_TYPE,
    ANIMATION_NAME,
    ANIMATION_BEHAVIOUR,
    ANIMATION_DURATION,
];
