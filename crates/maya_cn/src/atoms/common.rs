//! Property reading shared by every atom
//!
//! Atoms apply their own defaults to whatever the resolver left unset. An
//! explicit null is not unset: it suppresses the value entirely, so no
//! modifier class is emitted for it.

use maya_animation::AnimationSpec;
use maya_core::defaults::{
    DEFAULT_ALIGNMENT, DEFAULT_DEVICE, DEFAULT_IS_COMPONENT_ENABLED, DEFAULT_IS_USER_SELECTABLE,
    DEFAULT_SIZE, DEFAULT_THEME, DISABLED_CLASS, NOT_USER_SELECTABLE_CLASS,
};
use maya_core::{keys, ComponentAlignment, ComponentSize, PropValue, PropertyBag};
use maya_layout::{div, Element};
use maya_theme::ClassNamespace;

/// Text property: unset takes `default`, null or non-text yields nothing
pub(crate) fn text_or(props: &PropertyBag, key: &str, default: &str) -> Option<String> {
    match props.get(key) {
        None => Some(default.to_string()),
        Some(value) => value.as_str().map(str::to_string),
    }
}

/// Enum property: unset takes `default`, anything unparseable yields nothing
pub(crate) fn parse_or<T>(props: &PropertyBag, key: &str, default: T) -> Option<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match props.get(key) {
        None => Some(default),
        Some(_) => props.parse(key),
    }
}

pub(crate) fn flag_or(props: &PropertyBag, key: &str, default: bool) -> bool {
    props.get(key).map_or(default, PropValue::is_truthy)
}

/// The properties every atom understands
#[derive(Clone, Debug, PartialEq)]
pub struct AtomProps {
    pub theme: Option<String>,
    pub device: Option<String>,
    pub custom_class: Option<String>,
    pub status: Option<String>,
    pub size: Option<ComponentSize>,
    pub alignment: Option<ComponentAlignment>,
    pub is_user_selectable: bool,
    pub is_enabled: bool,
    pub animation: Option<AnimationSpec>,
}

impl AtomProps {
    pub fn from_bag(props: &PropertyBag) -> Self {
        Self {
            theme: text_or(props, keys::THEME, DEFAULT_THEME),
            device: text_or(props, keys::DEVICE, DEFAULT_DEVICE),
            custom_class: props.get_str(keys::CUSTOM_CLASS).map(str::to_string),
            status: props.get_str(keys::STATUS).map(str::to_string),
            size: parse_or(props, keys::SIZE, DEFAULT_SIZE),
            alignment: parse_or(props, keys::ALIGNMENT, DEFAULT_ALIGNMENT),
            is_user_selectable: flag_or(props, keys::IS_USER_SELECTABLE, DEFAULT_IS_USER_SELECTABLE),
            is_enabled: flag_or(props, keys::IS_ENABLED, DEFAULT_IS_COMPONENT_ENABLED),
            animation: AnimationSpec::from_props(props),
        }
    }

    /// Outer container: block, theme, device, custom class and status
    pub(crate) fn wrapper(&self, ns: &ClassNamespace, block: &str) -> Element {
        div()
            .class(ns.block(block))
            .class_opt(self.theme.as_deref().map(|theme| ns.modifier(block, theme)))
            .class_opt(self.device.as_deref().map(|device| ns.modifier(block, device)))
            .class_opt(self.custom_class.clone())
            .class_opt(self.status.as_deref().map(|status| ns.modifier(block, status)))
    }

    /// Inner content with the size and enablement modifiers only
    pub(crate) fn base_content(&self, ns: &ClassNamespace, block: &str) -> Element {
        let content = div()
            .class(ns.element(block, "content"))
            .class_opt(self.size.map(|size| ns.modifier(block, size.as_str())));
        if self.is_enabled {
            content
        } else {
            content.class(ns.modifier(block, DISABLED_CLASS))
        }
    }

    /// Inner content of a text-like atom: adds selection and alignment modifiers
    pub(crate) fn content(&self, ns: &ClassNamespace, block: &str) -> Element {
        let mut content = self.base_content(ns, block);
        if !self.is_user_selectable {
            content = content.class(ns.modifier(block, NOT_USER_SELECTABLE_CLASS));
        }
        content.class_opt(self.alignment.map(|alignment| ns.modifier(block, alignment.as_str())))
    }
}
