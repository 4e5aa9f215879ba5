//! End-to-end molecule rendering

use maya_cn::prelude::*;
use maya_cn::compose::Slot;
use pretty_assertions::assert_eq;

fn ns() -> ClassNamespace {
    ClassNamespace::default()
}

fn animated(header: Header) -> Header {
    header
        .prop(keys::ANIMATION_TYPE, "fading_entrances")
        .prop(keys::ANIMATION_BEHAVIOUR, "animateOnce")
}

#[test]
fn header_with_title_only() {
    let node = Header::new()
        .prop(keys::HEADER_TITLE, "Hi")
        .render(&ns())
        .unwrap();

    assert_eq!(node.slots(), vec!["content", "title"]);
    assert_eq!(node.find_slot("title").unwrap().text_content(), "Hi");
    assert!(node.as_element().unwrap().has_class("maya-header--left"));
}

#[test]
fn header_animation_names_follow_slot_order() {
    let header = Header::new()
        .prop(keys::HEADER_TITLE, "Hi")
        .prop(keys::ANIMATION_NAME, vec!["a", "b", "c", "d"]);

    let names: Vec<_> = header
        .resolve()
        .into_iter()
        .map(|slot| {
            (
                slot.slot,
                slot.props.get_str(keys::ANIMATION_NAME).map(str::to_string),
            )
        })
        .collect();

    assert_eq!(
        names,
        vec![
            (Slot::Title, Some("a".to_string())),
            (Slot::Subtitle, Some("b".to_string())),
            (Slot::Glyph, Some("c".to_string())),
            (Slot::Divider, Some("d".to_string())),
        ]
    );
}

#[test]
fn short_animation_list_falls_back_to_first() {
    let header = animated(
        Header::new()
            .prop(keys::HEADER_TITLE, "Hi")
            .prop(keys::HEADER_DIVIDER, true)
            .prop(keys::ANIMATION_NAME, vec!["a", "b"]),
    );

    let node = header.render(&ns()).unwrap();
    let divider = node.find_slot("divider").unwrap().clone().into_node();
    assert!(divider.find_class("a").is_some());
    assert!(divider.find_class("b").is_none());

    let title = node.find_slot("title").unwrap().clone().into_node();
    assert!(title.find_class("a").is_some());
}

#[test]
fn scalar_animation_reaches_every_present_slot() {
    let header = animated(
        Header::new()
            .prop(keys::ANIMATION_NAME, "fadeIn")
            .child(ChildElement::title("Hi"))
            .child(ChildElement::subtitle("there"))
            .child(ChildElement::glyph("fontawesome", "star")),
    );

    let node = header.render(&ns()).unwrap();
    for slot in ["title", "subtitle", "glyph"] {
        let container = node.find_slot(slot).unwrap().clone().into_node();
        assert!(container.find_class("fadeIn").is_some(), "{slot} not animated");
    }
}

#[test]
fn labeled_divider_left_alignment() {
    let node = LabeledDivider::with_label("X")
        .prop(keys::LABEL_ALIGNMENT, "left")
        .render(&ns())
        .unwrap();

    assert_eq!(node.count_slot("label"), 1);
    assert_eq!(node.count_slot("rightDivider"), 1);
    assert_eq!(node.count_slot("leftDivider"), 0);
    assert!(node.find_class("maya-divider--right").is_some());
}

#[test]
fn header_without_title_renders_nothing() {
    assert!(Header::new().render(&ns()).is_none());
}

#[test]
fn alignment_decides_glyph_position() {
    let header = |alignment: &str| {
        Header::new()
            .prop(keys::ALIGNMENT, alignment)
            .child(ChildElement::title("Hi"))
            .child(ChildElement::glyph("ionicons", "ios-star"))
            .render(&ns())
            .unwrap()
    };

    let position = |node: &Node, slot: &str| node.slots().iter().position(|s| *s == slot);

    let right = header("right");
    assert!(position(&right, "content") < position(&right, "glyph"));

    let left = header("left");
    assert!(position(&left, "glyph") < position(&left, "content"));

    let justify = header("justify");
    assert_eq!(justify.children().len(), 2);
    assert!(justify.as_element().unwrap().has_class("maya-header--center"));
}

#[test]
fn child_props_win_over_header_props() {
    let header = Header::new()
        .prop(keys::SIZE, "lg")
        .prop(keys::THEME, "dark")
        .child(ChildElement::title("Hi").prop(keys::SIZE, "xs"));

    let node = header.render(&ns()).unwrap();
    let title = node.find_class("maya-title__content").unwrap();
    assert!(title.has_class("maya-title--xs"));
    assert!(!title.has_class("maya-title--lg"));
    assert!(node.find_class("maya-title--dark").is_some());
}

#[test]
fn unset_properties_reach_atoms_as_defaults() {
    let node = Header::new()
        .prop(keys::HEADER_TITLE, "Hi")
        .render(&ns())
        .unwrap();
    let title = node.find_slot("title").unwrap();

    let wrapper = title.children[0].as_element().unwrap();
    assert!(wrapper.has_class("maya-title--default"));
    assert!(wrapper.has_class("maya-title--computer"));
}

#[test]
fn custom_atom_binds_by_role() {
    let fancy = ChildElement::new(roles::TITLE)
        .text("Fancy")
        .prop(keys::CUSTOM_CLASS, "fancy-title");
    let node = Header::new().child(fancy).render(&ns()).unwrap();
    assert!(node.find_class("fancy-title").is_some());
}

#[test]
fn class_overrides_apply_inside_molecules() {
    let ns = ClassNamespace::default().with_override("maya-title__content", "headline");
    let node = Header::new()
        .prop(keys::HEADER_TITLE, "Hi")
        .render(&ns)
        .unwrap();
    assert_eq!(node.find_class("headline").unwrap().text_content(), "Hi");
}

#[test]
fn labeled_divider_paddings_reach_dividers() {
    let node = LabeledDivider::with_label("Or")
        .prop(keys::PADDING_TOP, 20)
        .render(&ns())
        .unwrap();

    for slot in ["leftDivider", "rightDivider"] {
        let html = node.find_slot(slot).unwrap().clone().into_node().to_html();
        assert!(html.contains("padding-top: 20px"), "{slot}: {html}");
        assert!(html.contains("padding-bottom: 5px"), "{slot}: {html}");
    }
}

#[test]
fn labeled_divider_glyph_from_props() {
    let node = LabeledDivider::with_label("Or")
        .prop(keys::GLYPH_FAMILY, "ionicons")
        .prop(keys::GLYPH_NAME, "ios-star")
        .prop(keys::LABEL_ALIGNMENT, "left")
        .render(&ns())
        .unwrap();

    assert_eq!(node.slots(), vec!["glyph", "label", "rightDivider"]);
    assert!(node.find_class("ionicons-ios-star").is_some());
}

#[test]
fn numeric_header_title_is_displayed() {
    let node = Header::new()
        .prop(keys::HEADER_TITLE, 5)
        .render(&ns())
        .unwrap();
    assert_eq!(node.find_slot("title").unwrap().text_content(), "5");
}
