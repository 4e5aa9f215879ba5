//! Component documents
//!
//! A document is one component invocation in JSON:
//!
//! ```json
//! {
//!   "component": "header",
//!   "props": { "alignment": "right", "animationName": ["fadeIn", "fadeInUp"] },
//!   "children": [
//!     { "role": "title", "props": { "children": "Maya" } },
//!     { "role": "subtitle", "props": { "children": "UI kit" } }
//!   ]
//! }
//! ```

use std::fs;
use std::path::Path;

use maya_cn::{Divider, Glyph, Header, LabeledDivider, Label, Subtitle, Title};
use maya_core::{ChildElement, PropertyBag};
use maya_layout::Node;
use maya_theme::ThemeManager;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ComponentKind {
    Header,
    LabeledDivider,
    Title,
    Subtitle,
    Glyph,
    Divider,
    Label,
}

impl ComponentKind {
    fn is_molecule(self) -> bool {
        matches!(self, ComponentKind::Header | ComponentKind::LabeledDivider)
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Document {
    pub component: ComponentKind,
    #[serde(default)]
    pub props: PropertyBag,
    #[serde(default)]
    pub children: Vec<ChildElement>,
}

impl Document {
    pub fn from_json(input: &str) -> Result<Self> {
        Ok(serde_json::from_str(input)?)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path).map_err(|source| AppError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&raw)
    }

    /// Render under the manager's theme and device. `None` when the
    /// component renders nothing.
    pub fn render(&self, manager: &ThemeManager<'_>) -> Option<Node> {
        let props = manager.attach(self.props.clone());
        let ns = manager.namespace();

        if !self.component.is_molecule() && !self.children.is_empty() {
            tracing::debug!(
                "{:?} takes no children, ignoring {}",
                self.component,
                self.children.len()
            );
        }

        match self.component {
            ComponentKind::Header => Header::from_parts(props, self.children.clone()).render(ns),
            ComponentKind::LabeledDivider => {
                LabeledDivider::from_parts(props, self.children.clone()).render(ns)
            }
            ComponentKind::Title => Some(Title::from_props(props).render(ns)),
            ComponentKind::Subtitle => Some(Subtitle::from_props(props).render(ns)),
            ComponentKind::Glyph => Some(Glyph::from_props(props).render(ns)),
            ComponentKind::Divider => Some(Divider::from_props(props).render(ns)),
            ComponentKind::Label => Some(Label::from_props(props).render(ns)),
        }
    }

    /// HTML of the rendered component; empty when nothing renders
    pub fn to_html(&self, manager: &ThemeManager<'_>) -> String {
        self.render(manager)
            .map(|node| node.to_html())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use maya_theme::{ThemeConfig, ThemeState};

    #[test]
    fn test_parse_header_document() {
        let doc = Document::from_json(
            r#"{
                "component": "header",
                "props": { "headerDivider": true },
                "children": [{ "role": "title", "props": { "children": "Hi" } }]
            }"#,
        )
        .unwrap();

        assert_eq!(doc.component, ComponentKind::Header);
        assert_eq!(doc.children.len(), 1);
        assert_eq!(doc.children[0].role, "title");
    }

    #[test]
    fn test_unknown_component_is_an_error() {
        let err = Document::from_json(r#"{ "component": "carousel" }"#).unwrap_err();
        assert!(matches!(err, AppError::Document(_)));
    }

    #[test]
    fn test_null_render_is_empty_html() {
        let state = ThemeState::new(&ThemeConfig::default());
        let manager = ThemeManager::new(&state);
        let doc = Document::from_json(r#"{ "component": "header" }"#).unwrap();
        assert_eq!(doc.to_html(&manager), "");
    }
}
