//! Molecules - atoms composed into slots

pub mod header;
pub mod labeled_divider;

pub use header::Header;
pub use labeled_divider::LabeledDivider;
