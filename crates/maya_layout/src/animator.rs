//! Animator wrapper
//!
//! Wraps content in a container carrying the keyframe animation classes:
//!
//! ```text
//! <div class="maya-animator">
//!   <div class="{type} {name} animated [infinite] [speed]">content</div>
//! </div>
//! ```
//!
//! Animation class names are global (they come from the keyframe stylesheet)
//! and are not routed through the class namespace; only the outer wrapper is.

use maya_animation::{AnimationBehaviour, AnimationDuration, AnimationSpec};
use maya_theme::ClassNamespace;

use crate::node::{div, Node};

pub const ANIMATED_CLASS: &str = "animated";
pub const INFINITE_CLASS: &str = "infinite";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Animator {
    spec: AnimationSpec,
}

impl Animator {
    pub fn new(spec: AnimationSpec) -> Self {
        Self { spec }
    }

    pub fn spec(&self) -> &AnimationSpec {
        &self.spec
    }

    pub fn wrap(&self, content: impl Into<Node>, ns: &ClassNamespace) -> Node {
        let spec = &self.spec;

        let mut inner = div()
            .class(spec.kind.as_str())
            .class(spec.name.as_str())
            .class(ANIMATED_CLASS);

        if spec.behaviour == AnimationBehaviour::AnimateLoop {
            inner = inner.class(INFINITE_CLASS);
        }

        inner = match spec.duration {
            AnimationDuration::Millis(ms) => inner.style("animation-duration", format!("{ms}ms")),
            duration => inner.class_opt(duration.modifier()),
        };

        div()
            .class(ns.block("animator"))
            .child(inner.child(content))
            .into_node()
    }
}

/// Wrap `content` when an animation is configured, otherwise return it as is
pub fn animate(spec: Option<AnimationSpec>, content: Node, ns: &ClassNamespace) -> Node {
    match spec {
        Some(spec) => Animator::new(spec).wrap(content, ns),
        None => content,
    }
}
