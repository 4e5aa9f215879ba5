//! Home page view
//!
//! A showcase of the kit: an animated title and subtitle in a grid column,
//! a header, a large animated glyph and a bare animator.

use maya_animation::{AnimationBehaviour, AnimationSpec, AnimationType};
use maya_cn::{Glyph, Header, IconFamily, Subtitle, Title};
use maya_core::{keys, ChildElement, ComponentAlignment, ComponentSize, PropertyBag};
use maya_layout::{div, Animator, Breakpoint, FlexCol, FlexRow, Node};
use maya_theme::ThemeManager;

pub const BLOCK: &str = "homepage";

pub struct HomePage {
    breakpoint: Breakpoint,
}

impl HomePage {
    pub fn new(breakpoint: Breakpoint) -> Self {
        Self { breakpoint }
    }

    fn animation(kind: AnimationType, name: &str) -> PropertyBag {
        PropertyBag::new()
            .with(keys::ANIMATION_TYPE, kind)
            .with(keys::ANIMATION_NAME, name)
            .with(keys::ANIMATION_BEHAVIOUR, AnimationBehaviour::AnimateOnce)
    }

    fn intro(&self, manager: &ThemeManager<'_>) -> Node {
        let ns = manager.namespace();

        let mut title = manager.attach(Self::animation(AnimationType::AttentionSeekers, "bounce"));
        title.insert(keys::IS_USER_SELECTABLE, false);
        title.insert(keys::CHILDREN, "Button");

        let mut subtitle = manager.attach(Self::animation(AnimationType::FadingEntrances, "fadeInLeft"));
        subtitle.insert(keys::IS_USER_SELECTABLE, false);
        subtitle.insert(keys::CHILDREN, "Buttons should be used");

        FlexCol::new()
            .child(
                div()
                    .child(Title::from_props(title).render(ns))
                    .child(Subtitle::from_props(subtitle).render(ns)),
            )
            .render(ns, self.breakpoint)
    }

    pub fn render(&self, manager: &ThemeManager<'_>) -> Node {
        let ns = manager.namespace();

        let header = Header::from_parts(
            manager.attach(PropertyBag::new()),
            vec![ChildElement::title("oi"), ChildElement::subtitle("sub")],
        )
        .render(ns);

        let glyph = Glyph::from_props(
            manager.attach(Self::animation(AnimationType::AttentionSeekers, "bounce")),
        )
        .prop(keys::FAMILY, IconFamily::Ionicons)
        .prop(keys::NAME, "ios-flower-outline")
        .prop(keys::SIZE, ComponentSize::Xl)
        .prop(keys::ALIGNMENT, ComponentAlignment::Center)
        .render(ns);

        let animator = Animator::new(AnimationSpec::new(AnimationType::AttentionSeekers, "bounce"))
            .wrap("Simple test", ns);

        let mut stage = FlexRow::new()
            .class(ns.element(BLOCK, "stage"))
            .child(self.intro(manager));
        if let Some(header) = header {
            stage = stage.child(header);
        }
        let stage = stage
            .child("testing")
            .child(glyph)
            .child(animator)
            .render(ns, self.breakpoint);

        div()
            .class(ns.block(BLOCK))
            .class(ns.modifier(BLOCK, &manager.theme()))
            .class(ns.modifier(BLOCK, manager.device().as_str()))
            .child(stage)
            .into_node()
    }
}
