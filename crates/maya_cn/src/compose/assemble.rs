//! Layout assembly
//!
//! Arranges already-rendered slot nodes according to the molecule's
//! alignment. Absent slots are `None` and contribute no node at all.

use maya_core::ComponentAlignment;
use maya_layout::{div, Element, LayoutStyle, Node};
use maya_theme::ClassNamespace;

use super::slot::Slot;

/// Arrangement of a header's glyph, content block and divider
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum LayoutPlan {
    /// row(glyph, content), then divider
    #[default]
    Left,
    /// row(content, glyph), then divider
    Right,
    /// glyph, content and divider stacked in one centered wrapper
    Center,
}

impl LayoutPlan {
    pub fn from_alignment(alignment: Option<ComponentAlignment>) -> Self {
        match alignment {
            Some(ComponentAlignment::Right) => LayoutPlan::Right,
            Some(ComponentAlignment::Center | ComponentAlignment::Justify) => LayoutPlan::Center,
            Some(ComponentAlignment::Left) | None => LayoutPlan::Left,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            LayoutPlan::Left => "left",
            LayoutPlan::Right => "right",
            LayoutPlan::Center => "center",
        }
    }
}

/// Which dividers flank a label
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DividerSides {
    pub left: bool,
    pub right: bool,
}

impl DividerSides {
    pub fn from_alignment(alignment: Option<ComponentAlignment>) -> Self {
        match alignment {
            Some(ComponentAlignment::Left) => Self {
                left: false,
                right: true,
            },
            Some(ComponentAlignment::Right) => Self {
                left: true,
                right: false,
            },
            _ => Self {
                left: true,
                right: true,
            },
        }
    }
}

/// Wrap a rendered atom in its slot container
pub fn slot_container(ns: &ClassNamespace, block: &str, slot: Slot, content: Node) -> Node {
    div()
        .class(ns.element(block, slot.as_str()))
        .slot(slot.as_str())
        .child(content)
        .into_node()
}

/// Rendered header slots, each already wrapped in its container
#[derive(Clone, Debug, Default)]
pub struct HeaderParts {
    pub title: Option<Node>,
    pub subtitle: Option<Node>,
    pub glyph: Option<Node>,
    pub divider: Option<Node>,
}

pub fn assemble_header(plan: LayoutPlan, ns: &ClassNamespace, wrapper: Element, parts: HeaderParts) -> Node {
    const BLOCK: &str = "header";

    let content = div()
        .class(ns.element(BLOCK, "content"))
        .slot("content")
        .layout(LayoutStyle::flex_column())
        .child_opt(parts.title)
        .child_opt(parts.subtitle)
        .into_node();

    let wrapper = wrapper.class(ns.modifier(BLOCK, plan.as_str()));
    let row = || {
        div()
            .class(ns.element(BLOCK, "row"))
            .layout(LayoutStyle::flex_row())
    };

    let assembled = match plan {
        LayoutPlan::Left => wrapper
            .child(row().child_opt(parts.glyph).child(content))
            .child_opt(parts.divider),
        LayoutPlan::Right => wrapper
            .child(row().child(content).child_opt(parts.glyph))
            .child_opt(parts.divider),
        LayoutPlan::Center => wrapper
            .child_opt(parts.glyph)
            .child(content)
            .child_opt(parts.divider),
    };
    assembled.into_node()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parts(ns: &ClassNamespace) -> HeaderParts {
        HeaderParts {
            title: Some(slot_container(ns, "header", Slot::Title, "T".into())),
            subtitle: None,
            glyph: Some(slot_container(ns, "header", Slot::Glyph, div().into_node())),
            divider: Some(slot_container(ns, "header", Slot::Divider, div().into_node())),
        }
    }

    #[test]
    fn test_plan_from_alignment() {
        assert_eq!(LayoutPlan::from_alignment(None), LayoutPlan::Left);
        assert_eq!(
            LayoutPlan::from_alignment(Some(ComponentAlignment::Justify)),
            LayoutPlan::Center
        );
        assert_eq!(
            LayoutPlan::from_alignment(Some(ComponentAlignment::Right)),
            LayoutPlan::Right
        );
    }

    #[test]
    fn test_left_places_glyph_before_content() {
        let ns = ClassNamespace::default();
        let node = assemble_header(LayoutPlan::Left, &ns, div(), parts(&ns));
        assert_eq!(node.slots(), vec!["glyph", "content", "title", "divider"]);
        assert_eq!(node.children().len(), 2);
    }

    #[test]
    fn test_right_places_content_before_glyph() {
        let ns = ClassNamespace::default();
        let node = assemble_header(LayoutPlan::Right, &ns, div(), parts(&ns));
        assert_eq!(node.slots(), vec!["content", "title", "glyph", "divider"]);
    }

    #[test]
    fn test_center_is_flat() {
        let ns = ClassNamespace::default();
        let node = assemble_header(LayoutPlan::Center, &ns, div(), parts(&ns));
        assert_eq!(node.children().len(), 3);
        assert!(node.as_element().unwrap().has_class("maya-header--center"));
    }

    #[test]
    fn test_divider_sides() {
        let left = DividerSides::from_alignment(Some(ComponentAlignment::Left));
        assert!(!left.left && left.right);
        let right = DividerSides::from_alignment(Some(ComponentAlignment::Right));
        assert!(right.left && !right.right);
        assert_eq!(
            DividerSides::from_alignment(None),
            DividerSides {
                left: true,
                right: true
            }
        );
    }
}
