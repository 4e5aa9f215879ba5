//! LabeledDivider molecule - a label flanked by dividers
//!
//! `labelAlignment` chooses the dividers: `left` keeps only the right one,
//! `right` keeps only the left one, anything else keeps both. The label comes
//! from a `label` child or the `label` property. A `divider` child's
//! properties apply to both dividers; each divider is pinned to its side.
//! The molecule's `padding*` properties reach both dividers. A glyph shown
//! before the label comes from a `glyph` child or `glyphName`/`glyphFamily`.

use maya_core::{keys, ChildElement, ComponentAlignment, PropValue, PropertyBag};
use maya_layout::{div, LayoutStyle, Node};
use maya_theme::ClassNamespace;

use crate::atoms::{Divider, Glyph, Label};
use crate::compose::{
    classify, recognized_roles, resolve, slot_container, DividerSides, ResolvedSlotProps, Slot,
    SlotRequest, LABELED_DIVIDER_SLOTS,
};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct LabeledDivider {
    props: PropertyBag,
    children: Vec<ChildElement>,
}

impl LabeledDivider {
    pub const BLOCK: &'static str = "labeledDivider";

    pub fn new() -> Self {
        Self::default()
    }

    /// Shorthand for a divider labelled by its `label` property
    pub fn with_label(label: impl Into<String>) -> Self {
        Self::new().prop(keys::LABEL, label.into())
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

    fn label_alignment(&self) -> Option<ComponentAlignment> {
        self.props.parse(keys::LABEL_ALIGNMENT)
    }

    pub fn resolve(&self) -> Vec<ResolvedSlotProps> {
        let roles = recognized_roles(&LABELED_DIVIDER_SLOTS);
        let bindings = classify(&self.children, &roles);
        let sides = DividerSides::from_alignment(self.label_alignment());
        let props = &self.props;

        LABELED_DIVIDER_SLOTS
            .iter()
            .map(|spec| {
                let request = SlotRequest::new(*spec, bindings.get(spec.role));
                let request = match spec.slot {
                    Slot::Label => request.explicit(keys::CHILDREN, props.get(keys::LABEL)),
                    Slot::Glyph => request
                        .explicit(keys::NAME, props.get(keys::GLYPH_NAME))
                        .explicit_extra(keys::FAMILY, props.get(keys::GLYPH_FAMILY)),
                    Slot::LeftDivider => with_paddings(request, props)
                        .present_if(true)
                        .fixed(keys::SIDE, "left"),
                    Slot::RightDivider => with_paddings(request, props)
                        .present_if(true)
                        .fixed(keys::SIDE, "right"),
                    _ => request,
                };
                let mut resolved = resolve(props, &request);
                resolved.present &= match spec.slot {
                    Slot::LeftDivider => sides.left,
                    Slot::RightDivider => sides.right,
                    _ => true,
                };
                resolved
            })
            .collect()
    }

    pub fn render(&self, ns: &ClassNamespace) -> Option<Node> {
        let alignment = self.label_alignment().unwrap_or(ComponentAlignment::Center);

        let slots = self
            .resolve()
            .into_iter()
            .filter(|resolved| resolved.present)
            .map(|resolved| {
                let atom = match resolved.slot {
                    Slot::Label => Label::from_props(resolved.props).render(ns),
                    Slot::Glyph => Glyph::from_props(resolved.props).render(ns),
                    _ => Divider::from_props(resolved.props).render(ns),
                };
                (resolved.slot, slot_container(ns, Self::BLOCK, resolved.slot, atom))
            })
            .collect::<Vec<_>>();

        let order = [Slot::LeftDivider, Slot::Glyph, Slot::Label, Slot::RightDivider];
        let mut wrapper = div()
            .class(ns.block(Self::BLOCK))
            .class(ns.modifier(Self::BLOCK, alignment.as_str()))
            .layout(LayoutStyle::flex_row());
        for slot in order {
            if let Some((_, node)) = slots.iter().find(|(candidate, _)| *candidate == slot) {
                wrapper = wrapper.child(node.clone());
            }
        }

        Some(wrapper.into_node())
    }
}

fn with_paddings<'a>(request: SlotRequest<'a>, props: &PropertyBag) -> SlotRequest<'a> {
    keys::PADDINGS
        .iter()
        .fold(request, |request, key| request.explicit_extra(key, props.get(key)))
}
