//! Divider atom - a horizontal rule with configurable line style and padding

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use maya_core::{keys, CoreError, PropValue, PropertyBag};
use maya_layout::{animate, Element, Node};
use maya_theme::ClassNamespace;

use super::common::{parse_or, AtomProps};

pub const DEFAULT_PADDING: f64 = 5.0;

/// Line style of a divider, emitted as `border-style`
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum DividerType {
    #[default]
    Solid,
    Dotted,
    Dashed,
    Ridge,
}

impl DividerType {
    pub fn as_str(self) -> &'static str {
        match self {
            DividerType::Solid => "solid",
            DividerType::Dotted => "dotted",
            DividerType::Dashed => "dashed",
            DividerType::Ridge => "ridge",
        }
    }
}

impl FromStr for DividerType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "solid" => Ok(DividerType::Solid),
            "dotted" => Ok(DividerType::Dotted),
            "dashed" => Ok(DividerType::Dashed),
            "ridge" => Ok(DividerType::Ridge),
            other => Err(CoreError::unknown("divider type", other)),
        }
    }
}

impl Display for DividerType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<DividerType> for PropValue {
    fn from(value: DividerType) -> Self {
        PropValue::Text(value.as_str().to_string())
    }
}

const PADDINGS: [(&str, &str); 4] = [
    (keys::PADDING_TOP, "padding-top"),
    (keys::PADDING_BOTTOM, "padding-bottom"),
    (keys::PADDING_LEFT, "padding-left"),
    (keys::PADDING_RIGHT, "padding-right"),
];

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Divider {
    props: PropertyBag,
}

impl Divider {
    pub const BLOCK: &'static str = "divider";

    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_props(props: PropertyBag) -> Self {
        Self { props }
    }

    pub fn prop(mut self, key: impl Into<String>, value: impl Into<PropValue>) -> Self {
        self.props.insert(key, value);
        self
    }

    pub fn kind(self, kind: DividerType) -> Self {
        self.prop(keys::DIVIDER_TYPE, kind)
    }

    pub fn props(&self) -> &PropertyBag {
        &self.props
    }

    fn with_paddings(&self, mut wrapper: Element) -> Element {
        for (key, property) in PADDINGS {
            let value = match self.props.get(key) {
                None => Some(DEFAULT_PADDING),
                Some(value) => value.as_f64(),
            };
            if let Some(value) = value {
                wrapper = wrapper.style(property, format!("{value}px"));
            }
        }
        wrapper
    }

    pub fn render(&self, ns: &ClassNamespace) -> Node {
        let atom = AtomProps::from_bag(&self.props);

        let mut content = atom.base_content(ns, Self::BLOCK);
        if let Some(kind) = parse_or(&self.props, keys::DIVIDER_TYPE, DividerType::default()) {
            content = content.style("border-style", kind.as_str());
        }

        let side = self
            .props
            .get_str(keys::SIDE)
            .map(|side| ns.modifier(Self::BLOCK, side));

        self.with_paddings(atom.wrapper(ns, Self::BLOCK).class_opt(side))
            .child(animate(atom.animation.clone(), content.into_node(), ns))
            .into_node()
    }
}
