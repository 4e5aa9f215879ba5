//! Maya Core
//!
//! Foundational types shared by every layer of the Maya UI kit:
//!
//! - **Property values**: [`PropValue`], with explicit null distinct from unset
//! - **Property bags**: ordered [`PropertyBag`]s attached to molecules and children
//! - **Child descriptors**: [`ChildElement`]s tagged with the role they fill
//! - **Shared enums**: [`ComponentSize`], [`ComponentAlignment`] and defaults
//!
//! # Example
//!
//! ```rust
//! use maya_core::{keys, ChildElement, PropertyBag};
//!
//! let parent = PropertyBag::new()
//!     .with(keys::SIZE, "lg")
//!     .with(keys::ANIMATION_NAME, vec!["bounce", "fadeIn"]);
//!
//! let child = ChildElement::title("Hello").prop(keys::SIZE, "xl");
//! assert_eq!(child.props.get_str(keys::CHILDREN), Some("Hello"));
//! assert_eq!(parent.get_str(keys::SIZE), Some("lg"));
//! ```

pub mod bag;
pub mod defaults;
pub mod element;
pub mod error;
pub mod keys;
pub mod types;
pub mod value;

pub use bag::PropertyBag;
pub use element::{roles, ChildElement};
pub use error::CoreError;
pub use types::{ComponentAlignment, ComponentSize};
pub use value::PropValue;
