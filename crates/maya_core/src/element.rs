//! Child element descriptors
//!
//! Molecules never inspect concrete atom types. Each child declares the role
//! it wants to fill through a tag, so a custom atom substitutes for a built-in
//! one by declaring the same role.

use serde::{Deserialize, Serialize};

use crate::bag::PropertyBag;
use crate::keys;
use crate::value::PropValue;

pub mod roles {
    pub const TITLE: &str = "title";
    pub const SUBTITLE: &str = "subtitle";
    pub const GLYPH: &str = "glyph";
    pub const DIVIDER: &str = "divider";
    pub const LABEL: &str = "label";
}

/// A declared child: a role tag plus its locally declared properties
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChildElement {
    pub role: String,
    #[serde(default)]
    pub props: PropertyBag,
}

impl ChildElement {
    pub fn new(role: impl Into<String>) -> Self {
        Self {
            role: role.into(),
            props: PropertyBag::new(),
        }
    }

    pub fn title(text: impl Into<String>) -> Self {
        Self::new(roles::TITLE).text(text)
    }

    pub fn subtitle(text: impl Into<String>) -> Self {
        Self::new(roles::SUBTITLE).text(text)
    }

    pub fn glyph(family: impl Into<String>, name: impl Into<String>) -> Self {
        Self::new(roles::GLYPH)
            .prop(keys::FAMILY, family.into())
            .prop(keys::NAME, name.into())
    }

    pub fn divider() -> Self {
        Self::new(roles::DIVIDER)
    }

    pub fn label(text: impl Into<String>) -> Self {
        Self::new(roles::LABEL).text(text)
    }

    /// Set the text content
    pub fn text(self, text: impl Into<String>) -> Self {
        self.prop(keys::CHILDREN, text.into())
    }

    /// Declare a property on this child
    pub fn prop(mut self, key: impl Into<String>, value: impl Into<PropValue>) -> Self {
        self.props.insert(key, value);
        self
    }
}
