//! Atoms - the smallest building blocks
//!
//! Each atom reads a resolved [`PropertyBag`](maya_core::PropertyBag),
//! fills in its own defaults for anything unset and renders a [`Node`](maya_layout::Node).

mod common;
pub mod divider;
pub mod glyph;
pub mod text;

pub use common::AtomProps;
pub use divider::{Divider, DividerType};
pub use glyph::{Glyph, IconFamily};
pub use text::{Label, Subtitle, Title};
