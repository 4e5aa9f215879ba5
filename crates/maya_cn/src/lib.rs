//! Maya Component Library
//!
//! Atoms and molecules built on the `maya_layout` node tree. Molecules bind
//! their declared children to named slots by role, resolve each slot's
//! properties from their own and the child's, and arrange the present slots
//! by alignment.
//!
//! # Example
//!
//! ```rust
//! use maya_cn::{Header, LabeledDivider};
//! use maya_core::{keys, ChildElement};
//! use maya_theme::ClassNamespace;
//!
//! let ns = ClassNamespace::default();
//!
//! let header = Header::new()
//!     .prop(keys::HEADER_TITLE, "Welcome")
//!     .prop(keys::HEADER_DIVIDER, true);
//! assert!(header.render(&ns).is_some());
//!
//! let divider = LabeledDivider::new()
//!     .prop(keys::LABEL_ALIGNMENT, "left")
//!     .child(ChildElement::label("Or"));
//! let node = divider.render(&ns).unwrap();
//! assert_eq!(node.slots(), vec!["label", "rightDivider"]);
//! ```

pub mod atoms;
pub mod compose;
pub mod molecules;

pub use atoms::{Divider, DividerType, Glyph, IconFamily, Label, Subtitle, Title};
pub use molecules::{Header, LabeledDivider};

/// Common imports for building components
pub mod prelude {
    pub use crate::atoms::*;
    pub use crate::molecules::*;
    pub use maya_core::{keys, roles, ChildElement, PropValue, PropertyBag};
    pub use maya_layout::Node;
    pub use maya_theme::ClassNamespace;
}
