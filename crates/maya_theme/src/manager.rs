//! Theme manager
//!
//! Wraps a view's property bag with the current theme and device so every
//! component below it renders with the same modifiers.

use maya_core::{keys, PropertyBag};

use crate::device::DeviceType;
use crate::namespace::ClassNamespace;
use crate::state::ThemeState;

pub struct ThemeManager<'a> {
    state: &'a ThemeState,
}

impl<'a> ThemeManager<'a> {
    pub fn new(state: &'a ThemeState) -> Self {
        Self { state }
    }

    /// Manager bound to the global [`ThemeState`], if it was initialized
    pub fn global() -> Option<ThemeManager<'static>> {
        ThemeState::try_get().map(ThemeManager::new)
    }

    pub fn theme(&self) -> String {
        self.state.theme()
    }

    pub fn set_theme(&self, theme: impl Into<String>) {
        self.state.set_theme(theme);
    }

    pub fn device(&self) -> DeviceType {
        self.state.device()
    }

    pub fn namespace(&self) -> &ClassNamespace {
        self.state.namespace()
    }

    /// Attach `theme` and `device`, keeping values the caller already set
    pub fn attach(&self, mut props: PropertyBag) -> PropertyBag {
        if !props.contains(keys::THEME) {
            props.insert(keys::THEME, self.theme());
        }
        if !props.contains(keys::DEVICE) {
            props.insert(keys::DEVICE, self.device());
        }
        props
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ThemeConfig;

    #[test]
    fn test_attach_keeps_explicit_values() {
        let state = ThemeState::new(&ThemeConfig::default());
        state.set_device(DeviceType::Mobile);
        let manager = ThemeManager::new(&state);

        let props = manager.attach(PropertyBag::new().with(keys::THEME, "dark"));
        assert_eq!(props.get_str(keys::THEME), Some("dark"));
        assert_eq!(props.get_str(keys::DEVICE), Some("mobile"));
    }
}
