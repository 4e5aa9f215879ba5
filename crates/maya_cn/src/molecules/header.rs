//! Header molecule - title with optional subtitle, glyph and divider
//!
//! Slots are filled by children declaring the `title`, `subtitle`, `glyph`
//! and `divider` roles, or by the header's own `headerTitle`,
//! `headerSubtitle`, `headerGlyph` (with `glyphFamily`) and `headerDivider`
//! properties. A bound child's properties win over the explicit ones.
//!
//! A header without a title renders nothing.
//!
//! # Example
//!
//! ```rust
//! use maya_cn::Header;
//! use maya_core::{keys, ChildElement};
//! use maya_theme::ClassNamespace;
//!
//! let header = Header::new()
//!     .prop(keys::ALIGNMENT, "right")
//!     .prop(keys::ANIMATION_NAME, vec!["fadeIn", "fadeInUp"])
//!     .child(ChildElement::title("Maya"))
//!     .child(ChildElement::subtitle("UI kit"));
//!
//! let node = header.render(&ClassNamespace::default()).unwrap();
//! assert_eq!(node.count_slot("title"), 1);
//! assert_eq!(node.count_slot("glyph"), 0);
//! ```

use maya_core::{keys, ChildElement, ComponentAlignment, PropValue, PropertyBag};
use maya_layout::{div, Node};
use maya_theme::ClassNamespace;

use crate::atoms::{Divider, Glyph, Subtitle, Title};
use crate::compose::{
    assemble_header, classify, recognized_roles, resolve, slot_container, HeaderParts, LayoutPlan,
    ResolvedSlotProps, Slot, SlotRequest, HEADER_SLOTS,
};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Header {
    props: PropertyBag,
    children: Vec<ChildElement>,
}

impl Header {
    pub const BLOCK: &'static str = "header";

    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_parts(props: PropertyBag, children: Vec<ChildElement>) -> Self {
        Self { props, children }
    }

    pub fn prop(mut self, key: impl Into<String>, value: impl Into<PropValue>) -> Self {
        self.props.insert(key, value);
        self
    }

    pub fn child(mut self, child: ChildElement) -> Self {
        self.children.push(child);
        self
    }

    pub fn children(mut self, children: impl IntoIterator<Item = ChildElement>) -> Self {
        self.children.extend(children);
        self
    }

    pub fn props(&self) -> &PropertyBag {
        &self.props
    }

    /// Resolve every slot, in canonical order
    pub fn resolve(&self) -> Vec<ResolvedSlotProps> {
        let roles = recognized_roles(&HEADER_SLOTS);
        let bindings = classify(&self.children, &roles);
        let props = &self.props;

        HEADER_SLOTS
            .iter()
            .map(|spec| {
                let request = SlotRequest::new(*spec, bindings.get(spec.role));
                let request = match spec.slot {
                    Slot::Title => request.explicit(keys::CHILDREN, props.get(keys::HEADER_TITLE)),
                    Slot::Subtitle => {
                        request.explicit(keys::CHILDREN, props.get(keys::HEADER_SUBTITLE))
                    }
                    Slot::Glyph => request
                        .explicit(keys::NAME, props.get(keys::HEADER_GLYPH))
                        .explicit_extra(keys::FAMILY, props.get(keys::GLYPH_FAMILY)),
                    Slot::Divider => request.present_if(
                        props
                            .get(keys::HEADER_DIVIDER)
                            .is_some_and(PropValue::is_truthy),
                    ),
                    _ => request,
                };
                resolve(props, &request)
            })
            .collect()
    }

    pub fn layout_plan(&self) -> LayoutPlan {
        LayoutPlan::from_alignment(self.props.parse::<ComponentAlignment>(keys::ALIGNMENT))
    }

    pub fn render(&self, ns: &ClassNamespace) -> Option<Node> {
        let mut parts = HeaderParts::default();

        for (spec, resolved) in HEADER_SLOTS.iter().zip(self.resolve()) {
            if !resolved.present {
                if spec.required {
                    tracing::debug!("header has no {} slot, rendering nothing", spec.slot);
                    return None;
                }
                continue;
            }

            let props = resolved.props;
            let (target, atom) = match resolved.slot {
                Slot::Title => (&mut parts.title, Title::from_props(props).render(ns)),
                Slot::Subtitle => (&mut parts.subtitle, Subtitle::from_props(props).render(ns)),
                Slot::Glyph => (&mut parts.glyph, Glyph::from_props(props).render(ns)),
                Slot::Divider => (&mut parts.divider, Divider::from_props(props).render(ns)),
                _ => continue,
            };
            *target = Some(slot_container(ns, Self::BLOCK, resolved.slot, atom));
        }

        let wrapper = div().class(ns.block(Self::BLOCK));
        Some(assemble_header(self.layout_plan(), ns, wrapper, parts))
    }
}
