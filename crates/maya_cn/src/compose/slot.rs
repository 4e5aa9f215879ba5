//! Slots and their canonical orderings

use std::fmt::{Display, Formatter};

use maya_core::roles;

/// A named position inside a molecule that one atom fills
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Slot {
    Title,
    Subtitle,
    Glyph,
    Divider,
    LeftDivider,
    RightDivider,
    Label,
}

impl Slot {
    /// Name used for the slot container's `data-slot` attribute
    pub fn as_str(self) -> &'static str {
        match self {
            Slot::Title => "title",
            Slot::Subtitle => "subtitle",
            Slot::Glyph => "glyph",
            Slot::Divider => "divider",
            Slot::LeftDivider => "leftDivider",
            Slot::RightDivider => "rightDivider",
            Slot::Label => "label",
        }
    }
}

impl Display for Slot {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Static description of one slot of a molecule
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SlotSpec {
    pub slot: Slot,
    /// Child role that binds to this slot
    pub role: &'static str,
    /// Position in the molecule's canonical ordering, used for fan-out
    pub index: usize,
    pub required: bool,
}

impl SlotSpec {
    const fn new(slot: Slot, role: &'static str, index: usize, required: bool) -> Self {
        Self {
            slot,
            role,
            index,
            required,
        }
    }
}

pub const HEADER_SLOTS: [SlotSpec; 4] = [
    SlotSpec::new(Slot::Title, roles::TITLE, 0, true),
    SlotSpec::new(Slot::Subtitle, roles::SUBTITLE, 1, false),
    SlotSpec::new(Slot::Glyph, roles::GLYPH, 2, false),
    SlotSpec::new(Slot::Divider, roles::DIVIDER, 3, false),
];

/// Both dividers bind to the same `divider` child
pub const LABELED_DIVIDER_SLOTS: [SlotSpec; 4] = [
    SlotSpec::new(Slot::Label, roles::LABEL, 0, false),
    SlotSpec::new(Slot::LeftDivider, roles::DIVIDER, 1, false),
    SlotSpec::new(Slot::RightDivider, roles::DIVIDER, 2, false),
    SlotSpec::new(Slot::Glyph, roles::GLYPH, 3, false),
];

/// Roles a molecule recognizes, in slot order without duplicates
pub fn recognized_roles(slots: &[SlotSpec]) -> Vec<&'static str> {
    slots.iter().fold(Vec::new(), |mut roles, spec| {
        if !roles.contains(&spec.role) {
            roles.push(spec.role);
        }
        roles
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indices_follow_canonical_order() {
        let indices: Vec<_> = HEADER_SLOTS.iter().map(|spec| spec.index).collect();
        assert_eq!(indices, vec![0, 1, 2, 3]);
        assert!(HEADER_SLOTS[0].required);
    }

    #[test]
    fn test_recognized_roles_deduplicated() {
        assert_eq!(recognized_roles(&LABELED_DIVIDER_SLOTS), vec!["label", "divider", "glyph"]);
    }
}
