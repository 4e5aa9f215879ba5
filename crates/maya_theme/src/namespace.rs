//! Class namespace
//!
//! Components never hard-code class identifiers. They ask the namespace for
//! the identifier of a semantic key (a block, an element of a block, or a
//! modifier of a block) and the namespace answers from its naming scheme or
//! from an override table. Lookups are read-only.

use rustc_hash::FxHashMap;

pub const DEFAULT_PREFIX: &str = "maya";

/// Semantic key to class identifier lookup table
#[derive(Clone, Debug)]
pub struct ClassNamespace {
    prefix: String,
    overrides: FxHashMap<String, String>,
}

impl ClassNamespace {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            overrides: FxHashMap::default(),
        }
    }

    /// Replace the identifier generated for `default_name`
    ///
    /// `default_name` is the name the scheme would produce, e.g.
    /// `maya-title__content`.
    pub fn with_override(mut self, default_name: impl Into<String>, class: impl Into<String>) -> Self {
        self.overrides.insert(default_name.into(), class.into());
        self
    }

    pub fn extend_overrides<I, K, V>(&mut self, overrides: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        for (name, class) in overrides {
            self.overrides.insert(name.into(), class.into());
        }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Class of a component block, e.g. `maya-header`
    pub fn block(&self, block: &str) -> String {
        self.resolve(format!("{}-{}", self.prefix, block))
    }

    /// Class of an element inside a block, e.g. `maya-header__content`
    pub fn element(&self, block: &str, element: &str) -> String {
        self.resolve(format!("{}-{}__{}", self.prefix, block, element))
    }

    /// Class of a block modifier, e.g. `maya-title--xl`
    pub fn modifier(&self, block: &str, modifier: &str) -> String {
        self.resolve(format!("{}-{}--{}", self.prefix, block, modifier))
    }

    fn resolve(&self, name: String) -> String {
        match self.overrides.get(&name) {
            Some(class) => class.clone(),
            None => name,
        }
    }
}

impl Default for ClassNamespace {
    fn default() -> Self {
        Self::new(DEFAULT_PREFIX)
    }
}
