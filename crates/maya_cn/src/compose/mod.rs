//! Composition core shared by the molecules
//!
//! A molecule render is four pure steps: [`classify`] the children into
//! slots, [`resolve`] each slot's properties (with [`fan_out`] for the
//! animation keys), render the atoms, and [`assemble_header`] (or the
//! molecule's own arrangement) into one tree.

pub mod assemble;
pub mod classify;
pub mod fanout;
pub mod resolve;
pub mod slot;

pub use assemble::{assemble_header, slot_container, DividerSides, HeaderParts, LayoutPlan};
pub use classify::{classify, SlotBindings};
pub use fanout::fan_out;
pub use resolve::{resolve, ResolvedSlotProps, SlotRequest};
pub use slot::{recognized_roles, Slot, SlotSpec, HEADER_SLOTS, LABELED_DIVIDER_SLOTS};
