//! Glyph atom - an icon from one of the bundled icon fonts
//!
//! The icon itself is a global font class `{family}-{name}`, e.g.
//! `fontawesome-star`. Icon font classes come from the font stylesheets and
//! are not routed through the class namespace.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use maya_core::{keys, CoreError, PropValue, PropertyBag};
use maya_layout::{animate, Node};
use maya_theme::ClassNamespace;

use super::common::AtomProps;

/// Icon font a glyph is drawn from
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum IconFamily {
    #[default]
    FontAwesome,
    Ionicons,
    JustVectorSocial,
}

impl IconFamily {
    pub fn as_str(self) -> &'static str {
        match self {
            IconFamily::FontAwesome => "fontawesome",
            IconFamily::Ionicons => "ionicons",
            IconFamily::JustVectorSocial => "justvectorsocial",
        }
    }

    /// Font class of an icon in this family
    pub fn icon_class(self, name: &str) -> String {
        format!("{}-{}", self.as_str(), name)
    }
}

impl FromStr for IconFamily {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "fontawesome" => Ok(IconFamily::FontAwesome),
            "ionicons" => Ok(IconFamily::Ionicons),
            "justvectorsocial" => Ok(IconFamily::JustVectorSocial),
            other => Err(CoreError::unknown("icon family", other)),
        }
    }
}

impl Display for IconFamily {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<IconFamily> for PropValue {
    fn from(value: IconFamily) -> Self {
        PropValue::Text(value.as_str().to_string())
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Glyph {
    props: PropertyBag,
}

impl Glyph {
    pub const BLOCK: &'static str = "glyph";

    pub fn new(family: IconFamily, name: impl Into<String>) -> Self {
        Self::from_props(
            PropertyBag::new()
                .with(keys::FAMILY, family)
                .with(keys::NAME, name.into()),
        )
    }

    pub fn from_props(props: PropertyBag) -> Self {
        Self { props }
    }

    pub fn prop(mut self, key: impl Into<String>, value: impl Into<PropValue>) -> Self {
        self.props.insert(key, value);
        self
    }

    pub fn props(&self) -> &PropertyBag {
        &self.props
    }

    fn icon_class(&self) -> Option<String> {
        let family = match self.props.get(keys::FAMILY) {
            None => IconFamily::default(),
            Some(value) => match value.as_str().map(str::parse::<IconFamily>) {
                Some(Ok(family)) => family,
                Some(Err(err)) => {
                    tracing::warn!("glyph rendered without icon: {}", err);
                    return None;
                }
                None => {
                    tracing::warn!("glyph rendered without icon: family {:?}", value);
                    return None;
                }
            },
        };
        let name = self.props.get_str(keys::NAME)?;
        Some(family.icon_class(name))
    }

    pub fn render(&self, ns: &ClassNamespace) -> Node {
        let atom = AtomProps::from_bag(&self.props);
        let content = atom
            .content(ns, Self::BLOCK)
            .class_opt(self.icon_class())
            .into_node();

        atom.wrapper(ns, Self::BLOCK)
            .child(animate(atom.animation, content, ns))
            .into_node()
    }
}
