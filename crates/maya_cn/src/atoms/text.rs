//! Text atoms: Title, Subtitle and Label
//!
//! All three render the same shape under their own block name:
//!
//! ```text
//! <div class="maya-title maya-title--{theme} maya-title--{device} ...">
//!   [animator]
//!     <div class="maya-title__content maya-title--{size} ... maya-title--{alignment}">text</div>
//! </div>
//! ```
//!
//! Without text the wrapper is emitted empty.
//!
//! # Example
//!
//! ```rust
//! use maya_cn::atoms::Title;
//! use maya_core::keys;
//! use maya_theme::ClassNamespace;
//!
//! let node = Title::new("Hello").prop(keys::SIZE, "xl").render(&ClassNamespace::default());
//! assert_eq!(node.text_content(), "Hello");
//! assert!(node.find_class("maya-title--xl").is_some());
//! ```

use maya_core::{keys, PropValue, PropertyBag};
use maya_layout::{animate, Node};
use maya_theme::ClassNamespace;

use super::common::AtomProps;

fn render_text_atom(block: &str, props: &PropertyBag, ns: &ClassNamespace) -> Node {
    let atom = AtomProps::from_bag(props);
    let wrapper = atom.wrapper(ns, block);

    let Some(text) = props.get(keys::CHILDREN).and_then(PropValue::as_text) else {
        tracing::trace!("{} rendered without text", block);
        return wrapper.into_node();
    };

    let content = atom.content(ns, block).child(text.into_owned()).into_node();
    wrapper
        .child(animate(atom.animation, content, ns))
        .into_node()
}

macro_rules! text_atom {
    ($(#[$meta:meta])* $name:ident, $block:literal) => {
        $(#[$meta])*
        #[derive(Clone, Debug, Default, PartialEq)]
        pub struct $name {
            props: PropertyBag,
        }

        impl $name {
            pub const BLOCK: &'static str = $block;

            pub fn new(text: impl Into<String>) -> Self {
                Self::from_props(PropertyBag::new().with(keys::CHILDREN, text.into()))
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

            pub fn render(&self, ns: &ClassNamespace) -> Node {
                render_text_atom(Self::BLOCK, &self.props, ns)
            }
        }
    };
}

text_atom!(
    /// Primary heading text
    Title,
    "title"
);
text_atom!(
    /// Secondary heading text
    Subtitle,
    "subtitle"
);
text_atom!(
    /// Caption shown between the dividers of a labeled divider
    Label,
    "label"
);
