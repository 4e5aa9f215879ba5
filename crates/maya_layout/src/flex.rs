//! Flex grid primitives
//!
//! [`FlexRow`] and [`FlexCol`] form a twelve-column responsive grid. Both emit
//! namespaced classes for every breakpoint (so a stylesheet can react to the
//! real viewport) and a Taffy style for the breakpoint they are rendered for.
//!
//! # Example
//!
//! ```rust
//! use maya_layout::flex::{Breakpoint, ColumnSpan, FlexCol, FlexRow};
//! use maya_theme::ClassNamespace;
//!
//! let ns = ClassNamespace::default();
//! let row = FlexRow::new()
//!     .child(FlexCol::new().span(Breakpoint::Md, ColumnSpan::Span(6)).render(&ns, Breakpoint::Md))
//!     .render(&ns, Breakpoint::Md);
//! assert_eq!(row.children().len(), 1);
//! ```

use maya_core::ComponentAlignment;
use maya_theme::ClassNamespace;

use crate::node::{div, Element, Node};
use crate::style::{Dimension, Display, FlexDirection, JustifyContent, LayoutStyle, Style};

/// Viewport width breakpoints
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Breakpoint {
    Xs,
    Sm,
    Md,
    Lg,
    Xl,
}

impl Breakpoint {
    pub const ALL: [Breakpoint; 5] = [
        Breakpoint::Xs,
        Breakpoint::Sm,
        Breakpoint::Md,
        Breakpoint::Lg,
        Breakpoint::Xl,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Breakpoint::Xs => "xs",
            Breakpoint::Sm => "sm",
            Breakpoint::Md => "md",
            Breakpoint::Lg => "lg",
            Breakpoint::Xl => "xl",
        }
    }

    /// Active breakpoint for a viewport width in logical pixels
    pub fn for_width(width: f32) -> Self {
        match width {
            w if w < 576.0 => Breakpoint::Xs,
            w if w < 768.0 => Breakpoint::Sm,
            w if w < 992.0 => Breakpoint::Md,
            w if w < 1200.0 => Breakpoint::Lg,
            _ => Breakpoint::Xl,
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

/// How many of the twelve grid columns a [`FlexCol`] spans
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColumnSpan {
    Hidden,
    Span(u8),
}

impl ColumnSpan {
    pub const COLUMNS: u8 = 12;

    fn columns(self) -> Option<u8> {
        match self {
            ColumnSpan::Hidden => None,
            ColumnSpan::Span(n) => Some(n.clamp(1, Self::COLUMNS)),
        }
    }

    fn modifier(self, breakpoint: Breakpoint) -> String {
        match self.columns() {
            Some(n) => format!("{}-{}", breakpoint.as_str(), n),
            None => format!("{}-hidden", breakpoint.as_str()),
        }
    }
}

impl Default for ColumnSpan {
    fn default() -> Self {
        ColumnSpan::Span(ColumnSpan::COLUMNS)
    }
}

fn apply_spacing(mut element: Element, offset: f32, inset: f32) -> Element {
    if offset != 0.0 {
        element = element
            .style("margin-left", format!("{}px", -offset))
            .style("margin-right", format!("{}px", -offset));
    }
    if inset != 0.0 {
        element = element
            .style("padding-left", format!("{inset}px"))
            .style("padding-right", format!("{inset}px"));
    }
    element
}

fn spacing_style(mut style: Style, offset: f32, inset: f32) -> Style {
    if offset != 0.0 {
        style.margin = LayoutStyle::horizontal_margin(-offset);
    }
    if inset != 0.0 {
        style.padding = LayoutStyle::horizontal_padding(inset);
    }
    style
}

/// A wrapping flex row
#[derive(Clone, Debug, Default)]
pub struct FlexRow {
    hidden: [bool; 5],
    offset: f32,
    inset: f32,
    class: Option<String>,
    children: Vec<Node>,
}

impl FlexRow {
    pub fn new() -> Self {
        Self::default()
    }

    /// Hide the row at a breakpoint
    pub fn hidden(mut self, breakpoint: Breakpoint) -> Self {
        self.hidden[breakpoint.index()] = true;
        self
    }

    /// Pull the row outwards by `offset` on both sides
    pub fn offset(mut self, offset: f32) -> Self {
        self.offset = offset;
        self
    }

    /// Pad the row's content by `inset` on both sides
    pub fn inset(mut self, inset: f32) -> Self {
        self.inset = inset;
        self
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    pub fn child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    pub fn render(&self, ns: &ClassNamespace, breakpoint: Breakpoint) -> Node {
        let mut element = div().class(ns.block("flexrow"));
        for bp in Breakpoint::ALL {
            if self.hidden[bp.index()] {
                element = element.class(ns.modifier("flexrow", &format!("{}-hidden", bp.as_str())));
            }
        }
        element = element.class_opt(self.class.clone());
        element = apply_spacing(element, self.offset, self.inset);

        let mut style = spacing_style(LayoutStyle::flex_row(), self.offset, self.inset);
        if self.hidden[breakpoint.index()] {
            style.display = Display::None;
        }

        element
            .layout(style)
            .children(self.children.iter().cloned())
            .into_node()
    }
}

/// A grid column spanning part of a [`FlexRow`]
#[derive(Clone, Debug)]
pub struct FlexCol {
    spans: [ColumnSpan; 5],
    offset: f32,
    inset: f32,
    class: Option<String>,
    content_alignment: Option<ComponentAlignment>,
    children: Vec<Node>,
}

impl Default for FlexCol {
    fn default() -> Self {
        Self {
            spans: [ColumnSpan::default(); 5],
            offset: 0.0,
            inset: 0.0,
            class: None,
            content_alignment: Some(ComponentAlignment::Left),
            children: Vec::new(),
        }
    }
}

impl FlexCol {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn span(mut self, breakpoint: Breakpoint, span: ColumnSpan) -> Self {
        self.spans[breakpoint.index()] = span;
        self
    }

    /// Use the same span at every breakpoint
    pub fn span_all(mut self, span: ColumnSpan) -> Self {
        self.spans = [span; 5];
        self
    }

    pub fn offset(mut self, offset: f32) -> Self {
        self.offset = offset;
        self
    }

    pub fn inset(mut self, inset: f32) -> Self {
        self.inset = inset;
        self
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    /// Horizontal placement of the column's content. `Justify` has no effect.
    pub fn content_alignment(mut self, alignment: Option<ComponentAlignment>) -> Self {
        self.content_alignment = alignment;
        self
    }

    pub fn child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    fn justify(&self) -> Option<(JustifyContent, &'static str)> {
        match self.content_alignment? {
            ComponentAlignment::Left => Some((JustifyContent::FlexStart, "flex-start")),
            ComponentAlignment::Center => Some((JustifyContent::Center, "center")),
            ComponentAlignment::Right => Some((JustifyContent::FlexEnd, "flex-end")),
            ComponentAlignment::Justify => None,
        }
    }

    pub fn render(&self, ns: &ClassNamespace, breakpoint: Breakpoint) -> Node {
        let mut element = div().class(ns.block("flexcol"));
        for bp in Breakpoint::ALL {
            element = element
                .class(ns.modifier("flexcol", bp.as_str()))
                .class(ns.modifier("flexcol", &self.spans[bp.index()].modifier(bp)));
        }
        element = element.class_opt(self.class.clone());
        element = apply_spacing(element, self.offset, self.inset);

        let mut style = spacing_style(
            Style {
                display: Display::Flex,
                flex_direction: FlexDirection::Row,
                ..Default::default()
            },
            self.offset,
            self.inset,
        );

        match self.spans[breakpoint.index()].columns() {
            Some(n) => {
                style.flex_basis = Dimension::Percent(n as f32 / ColumnSpan::COLUMNS as f32);
            }
            None => style.display = Display::None,
        }

        if let Some((justify, css)) = self.justify() {
            element = element.style("justify-content", css);
            style.justify_content = Some(justify);
        }

        element
            .layout(style)
            .children(self.children.iter().cloned())
            .into_node()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_breakpoint_for_width() {
        assert_eq!(Breakpoint::for_width(320.0), Breakpoint::Xs);
        assert_eq!(Breakpoint::for_width(700.0), Breakpoint::Sm);
        assert_eq!(Breakpoint::for_width(800.0), Breakpoint::Md);
        assert_eq!(Breakpoint::for_width(1100.0), Breakpoint::Lg);
        assert_eq!(Breakpoint::for_width(1440.0), Breakpoint::Xl);
    }

    #[test]
    fn test_row_offset_and_inset_styles() {
        let ns = ClassNamespace::default();
        let node = FlexRow::new().offset(15.0).inset(10.0).render(&ns, Breakpoint::Md);
        let row = node.as_element().unwrap();

        assert_eq!(row.styles.get("margin-left").map(String::as_str), Some("-15px"));
        assert_eq!(row.styles.get("padding-right").map(String::as_str), Some("10px"));
    }

    #[test]
    fn test_row_without_spacing_has_no_inline_style() {
        let ns = ClassNamespace::default();
        let node = FlexRow::new().render(&ns, Breakpoint::Md);
        assert!(node.as_element().unwrap().styles.is_empty());
    }

    #[test]
    fn test_hidden_row_at_active_breakpoint() {
        let ns = ClassNamespace::default();
        let node = FlexRow::new().hidden(Breakpoint::Xs).render(&ns, Breakpoint::Xs);
        let row = node.as_element().unwrap();

        assert!(row.has_class("maya-flexrow--xs-hidden"));
        assert_eq!(row.layout.as_ref().unwrap().display, Display::None);
    }

    #[test]
    fn test_col_classes_cover_every_breakpoint() {
        let ns = ClassNamespace::default();
        let node = FlexCol::new()
            .span(Breakpoint::Md, ColumnSpan::Span(6))
            .span(Breakpoint::Xs, ColumnSpan::Hidden)
            .render(&ns, Breakpoint::Md);
        let col = node.as_element().unwrap();

        assert!(col.has_class("maya-flexcol--md-6"));
        assert!(col.has_class("maya-flexcol--xs-hidden"));
        assert!(col.has_class("maya-flexcol--xl-12"));
        assert_eq!(
            col.layout.as_ref().unwrap().flex_basis,
            Dimension::Percent(0.5)
        );
    }

    #[test]
    fn test_col_content_alignment() {
        let ns = ClassNamespace::default();
        let node = FlexCol::new()
            .content_alignment(Some(ComponentAlignment::Right))
            .render(&ns, Breakpoint::Md);
        let col = node.as_element().unwrap();

        assert_eq!(col.styles.get("justify-content").map(String::as_str), Some("flex-end"));
        assert_eq!(
            col.layout.as_ref().unwrap().justify_content,
            Some(JustifyContent::FlexEnd)
        );
    }
}
