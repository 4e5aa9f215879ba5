//! Maya Layout
//!
//! Rendering primitives shared by every component:
//!
//! - **Markup**: the [`Node`] tree components render into, serializable to HTML
//! - **Animator**: the wrapper that plays a keyframe animation around content
//! - **Flex grid**: [`FlexRow`] / [`FlexCol`] twelve-column layout
//! - **Layout tree**: Taffy-backed measurement of a rendered tree

pub mod animator;
pub mod flex;
pub mod node;
pub mod style;
pub mod tree;

pub use animator::{animate, Animator};
pub use flex::{Breakpoint, ColumnSpan, FlexCol, FlexRow};
pub use node::{div, text, Element, Node, SLOT_ATTR};
pub use style::LayoutStyle;
pub use tree::{LayoutNodeId, LayoutTree};
