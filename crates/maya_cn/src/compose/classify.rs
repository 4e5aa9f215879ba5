//! Child classification
//!
//! Folds a molecule's children into an immutable role → child mapping. A
//! later child with the same role replaces an earlier one; children with an
//! unrecognized role are skipped.

use maya_core::ChildElement;
use rustc_hash::FxHashMap;

/// Result of classifying a child list
#[derive(Clone, Debug, Default)]
pub struct SlotBindings<'a> {
    bound: FxHashMap<&'a str, &'a ChildElement>,
}

impl<'a> SlotBindings<'a> {
    pub fn get(&self, role: &str) -> Option<&'a ChildElement> {
        self.bound.get(role).copied()
    }

    pub fn contains(&self, role: &str) -> bool {
        self.bound.contains_key(role)
    }

    pub fn len(&self) -> usize {
        self.bound.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bound.is_empty()
    }
}

pub fn classify<'a>(children: &'a [ChildElement], recognized: &[&str]) -> SlotBindings<'a> {
    let bound = children
        .iter()
        .fold(FxHashMap::default(), |mut bound, child| {
            if recognized.iter().any(|role| *role == child.role) {
                bound.insert(child.role.as_str(), child);
            } else {
                tracing::debug!("ignoring child with unrecognized role {:?}", child.role);
            }
            bound
        });
    SlotBindings { bound }
}

#[cfg(test)]
mod tests {
    use super::*;
    use maya_core::{keys, roles};

    const HEADER_ROLES: [&str; 4] = [roles::TITLE, roles::SUBTITLE, roles::GLYPH, roles::DIVIDER];

    #[test]
    fn test_last_match_wins() {
        let children = vec![ChildElement::title("first"), ChildElement::title("second")];
        let bindings = classify(&children, &HEADER_ROLES);

        assert_eq!(bindings.len(), 1);
        assert_eq!(
            bindings.get(roles::TITLE).unwrap().props.get_str(keys::CHILDREN),
            Some("second")
        );
    }

    #[test]
    fn test_unrecognized_roles_are_skipped() {
        let children = vec![ChildElement::new("button"), ChildElement::label("Or")];
        let bindings = classify(&children, &HEADER_ROLES);
        assert!(bindings.is_empty());
    }

    #[test]
    fn test_empty_child_list() {
        let bindings = classify(&[], &HEADER_ROLES);
        assert!(!bindings.contains(roles::TITLE));
    }
}
