//! Theme state
//!
//! Holds the current theme name, the device class and the class namespace.
//! The app layer initializes one global instance at startup; components
//! never read it directly and receive the namespace by reference instead.

use std::sync::{Mutex, OnceLock, RwLock};

use crate::config::ThemeConfig;
use crate::device::DeviceType;
use crate::namespace::ClassNamespace;

/// Global theme state instance
static THEME_STATE: OnceLock<ThemeState> = OnceLock::new();

/// Global redraw callback - set by the app layer to re-render on theme changes
static REDRAW_CALLBACK: Mutex<Option<fn()>> = Mutex::new(None);

/// Set the redraw callback function
pub fn set_redraw_callback(callback: fn()) {
    *REDRAW_CALLBACK.lock().unwrap() = Some(callback);
}

fn trigger_redraw() {
    if let Some(callback) = *REDRAW_CALLBACK.lock().unwrap() {
        callback();
    }
}

pub struct ThemeState {
    theme: RwLock<String>,
    device: RwLock<DeviceType>,
    namespace: ClassNamespace,
}

impl ThemeState {
    pub fn new(config: &ThemeConfig) -> Self {
        Self {
            theme: RwLock::new(config.theme.clone()),
            device: RwLock::new(config.device),
            namespace: config.namespace(),
        }
    }

    /// Initialize the global theme state.
    ///
    /// Safe to call multiple times; the first call wins.
    pub fn init(config: &ThemeConfig) {
        let _ = THEME_STATE.set(Self::new(config));
    }

    pub fn get() -> &'static ThemeState {
        THEME_STATE
            .get()
            .expect("ThemeState not initialized. Call ThemeState::init() at app startup.")
    }

    pub fn try_get() -> Option<&'static ThemeState> {
        THEME_STATE.get()
    }

    pub fn theme(&self) -> String {
        self.theme.read().unwrap().clone()
    }

    pub fn set_theme(&self, theme: impl Into<String>) {
        let theme = theme.into();
        let mut current = self.theme.write().unwrap();
        if *current == theme {
            return;
        }
        tracing::debug!("ThemeState::set_theme: {} -> {}", *current, theme);
        *current = theme;
        drop(current);

        trigger_redraw();
    }

    pub fn device(&self) -> DeviceType {
        *self.device.read().unwrap()
    }

    pub fn set_device(&self, device: DeviceType) {
        let mut current = self.device.write().unwrap();
        if *current == device {
            return;
        }
        tracing::debug!("ThemeState::set_device: {} -> {}", *current, device);
        *current = device;
        drop(current);

        trigger_redraw();
    }

    /// Reclassify the device from a viewport width
    pub fn set_viewport_width(&self, width: f32) {
        self.set_device(DeviceType::for_width(width));
    }

    pub fn namespace(&self) -> &ClassNamespace {
        &self.namespace
    }
}
