//! Property resolution
//!
//! The bag handed to a slot's atom is built in layers, later layers winning:
//!
//! 1. passthrough scalars the parent declares (`theme`, `size`, ...)
//! 2. multi-value animation properties fanned out at the slot's index
//! 3. explicit values the molecule supplies from its own properties
//! 4. the bound child's properties
//! 5. values fixed by the slot itself (a divider's `side`)
//!
//! Nothing is defaulted here. A key absent from every layer is absent from
//! the result so the atom's own default applies.

use maya_core::{keys, ChildElement, PropValue, PropertyBag};

use super::fanout::fan_out;
use super::slot::{Slot, SlotSpec};

/// Final properties of one slot for one render
#[derive(Clone, Debug, PartialEq)]
pub struct ResolvedSlotProps {
    pub slot: Slot,
    pub present: bool,
    pub props: PropertyBag,
}

/// Everything known about one slot before resolution
#[derive(Clone, Debug)]
pub struct SlotRequest<'a> {
    spec: SlotSpec,
    child: Option<&'a ChildElement>,
    explicit: PropertyBag,
    fixed: PropertyBag,
    present: bool,
}

impl<'a> SlotRequest<'a> {
    /// A slot is present as soon as a child is bound to it
    pub fn new(spec: SlotSpec, child: Option<&'a ChildElement>) -> Self {
        Self {
            spec,
            child,
            explicit: PropertyBag::new(),
            fixed: PropertyBag::new(),
            present: child.is_some(),
        }
    }

    /// Supply a value from the molecule's own properties. Unset and null
    /// values are ignored and do not make the slot present.
    pub fn explicit(mut self, key: &str, value: Option<&PropValue>) -> Self {
        if let Some(value) = value.filter(|value| !value.is_null()) {
            self.explicit.insert(key, value.clone());
            self.present = true;
        }
        self
    }

    /// Like [`explicit`](Self::explicit) without affecting presence
    pub fn explicit_extra(mut self, key: &str, value: Option<&PropValue>) -> Self {
        if let Some(value) = value.filter(|value| !value.is_null()) {
            self.explicit.insert(key, value.clone());
        }
        self
    }

    /// Pin a value the child cannot override
    pub fn fixed(mut self, key: &str, value: impl Into<PropValue>) -> Self {
        self.fixed.insert(key, value);
        self
    }

    pub fn present_if(mut self, condition: bool) -> Self {
        self.present |= condition;
        self
    }
}

pub fn resolve(parent: &PropertyBag, request: &SlotRequest<'_>) -> ResolvedSlotProps {
    let mut props = PropertyBag::new();

    for key in keys::PASSTHROUGH {
        if let Some(value) = parent.get(key) {
            props.insert(key, value.clone());
        }
    }

    for key in keys::MULTI_VALUE {
        if let Some(value) = fan_out(parent.get(key), request.spec.index) {
            props.insert(key, value);
        }
    }

    props.overlay(&request.explicit);
    if let Some(child) = request.child {
        props.overlay(&child.props);
    }
    props.overlay(&request.fixed);

    tracing::trace!(
        slot = request.spec.slot.as_str(),
        present = request.present,
        "resolved {} properties",
        props.len()
    );

    ResolvedSlotProps {
        slot: request.spec.slot,
        present: request.present,
        props,
    }
}
