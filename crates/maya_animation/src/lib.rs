//! Maya Animation
//!
//! Vocabulary for the CSS keyframe animations components can play:
//!
//! - **Families**: [`AnimationType`] (attention seekers, entrances, exits, ...)
//! - **Behaviour**: play once or loop ([`AnimationBehaviour`])
//! - **Duration**: named speeds or explicit milliseconds ([`AnimationDuration`])
//! - **Spec**: [`AnimationSpec`], read from a component's resolved properties

pub mod kind;
pub mod spec;

pub use kind::{AnimationBehaviour, AnimationDuration, AnimationType};
pub use spec::AnimationSpec;
