//! Rendering JSON component documents through the theme manager

use maya_app::{AppConfig, Document};
use maya_theme::{DeviceType, ThemeManager, ThemeState};
use pretty_assertions::assert_eq;

fn state(config: &AppConfig) -> ThemeState {
    ThemeState::new(&config.theme)
}

#[test]
fn header_document_renders_children_by_role() {
    let config = AppConfig::default().with_overrides(Some("dark".into()), Some(DeviceType::Mobile));
    let state = state(&config);
    let manager = ThemeManager::new(&state);

    let doc = Document::from_json(
        r#"{
            "component": "header",
            "props": { "alignment": "right", "headerDivider": true },
            "children": [
                { "role": "title", "props": { "children": "Maya" } },
                { "role": "glyph", "props": { "family": "ionicons", "name": "ios-star" } },
                { "role": "carousel" }
            ]
        }"#,
    )
    .unwrap();

    let node = doc.render(&manager).unwrap();
    assert_eq!(node.slots(), vec!["content", "title", "glyph", "divider"]);
    assert!(node.find_class("maya-title--dark").is_some());
    assert!(node.find_class("maya-divider--mobile").is_some());
}

#[test]
fn labeled_divider_document() {
    let state = state(&AppConfig::default());
    let manager = ThemeManager::new(&state);

    let doc = Document::from_json(
        r#"{
            "component": "labeledDivider",
            "props": { "label": "Or", "labelAlignment": "right" }
        }"#,
    )
    .unwrap();

    let html = doc.to_html(&manager);
    assert!(html.contains(r#"data-slot="leftDivider""#));
    assert!(!html.contains(r#"data-slot="rightDivider""#));
    assert!(html.contains(">Or</div>"));
}

#[test]
fn explicit_document_theme_beats_manager() {
    let state = state(&AppConfig::default());
    let manager = ThemeManager::new(&state);

    let doc = Document::from_json(
        r#"{ "component": "title", "props": { "children": "Hi", "theme": "light" } }"#,
    )
    .unwrap();

    let node = doc.render(&manager).unwrap();
    let wrapper = node.as_element().unwrap();
    assert!(wrapper.has_class("maya-title--light"));
    assert!(!wrapper.has_class("maya-title--default"));
}

#[test]
fn class_overrides_from_config() {
    let config = AppConfig::from_toml_str(
        r#"
        [classes.overrides]
        "maya-label__content" = "caption"
        "#,
    )
    .unwrap();
    let state = state(&config);
    let manager = ThemeManager::new(&state);

    let doc = Document::from_json(r#"{ "component": "label", "props": { "children": "Or" } }"#)
        .unwrap();
    let node = doc.render(&manager).unwrap();
    assert_eq!(node.find_class("caption").unwrap().text_content(), "Or");
}
