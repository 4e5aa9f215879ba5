//! Ordered property bags

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::value::PropValue;

/// An insertion-ordered mapping from property name to value.
///
/// Bags are attached to a molecule invocation ("parent props") and to every
/// child descriptor ("child props"). A key that is not present is unset.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PropertyBag(IndexMap<String, PropValue>);

impl PropertyBag {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert
    pub fn with(mut self, key: impl Into<String>, value: impl Into<PropValue>) -> Self {
        self.insert(key, value);
        self
    }

    /// Insert or replace a value, keeping the key's original position
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<PropValue>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn remove(&mut self, key: &str) -> Option<PropValue> {
        self.0.shift_remove(key)
    }

    pub fn get(&self, key: &str) -> Option<&PropValue> {
        self.0.get(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(PropValue::as_str)
    }

    pub fn get_bool(&self, key: &str) -> Option<bool> {
        self.get(key).and_then(PropValue::as_bool)
    }

    pub fn get_f64(&self, key: &str) -> Option<f64> {
        self.get(key).and_then(PropValue::as_f64)
    }

    /// Parse a text value into a typed enum.
    ///
    /// Unset keys and non-text values yield `None`. Text that fails to parse
    /// is logged and also yields `None`, leaving the caller's default in place.
    pub fn parse<T: FromStr>(&self, key: &str) -> Option<T>
    where
        T::Err: std::fmt::Display,
    {
        let raw = self.get_str(key)?;
        match raw.parse() {
            Ok(value) => Some(value),
            Err(err) => {
                tracing::warn!("ignoring property {}={:?}: {}", key, raw, err);
                None
            }
        }
    }

    /// Copy every entry of `top` over `self`; entries of `top` win.
    pub fn overlay(&mut self, top: &PropertyBag) {
        for (key, value) in top.iter() {
            self.0.insert(key.to_string(), value.clone());
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &PropValue)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, V: Into<PropValue>> FromIterator<(K, V)> for PropertyBag {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut bag = PropertyBag::new();
        for (key, value) in iter {
            bag.insert(key, value);
        }
        bag
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ComponentSize;

    #[test]
    fn test_overlay_top_wins() {
        let mut base = PropertyBag::new().with("size", "md").with("theme", "default");
        let top = PropertyBag::new().with("size", "xl");
        base.overlay(&top);

        assert_eq!(base.get_str("size"), Some("xl"));
        assert_eq!(base.get_str("theme"), Some("default"));
        assert_eq!(base.keys().collect::<Vec<_>>(), vec!["size", "theme"]);
    }

    #[test]
    fn test_null_is_not_unset() {
        let bag = PropertyBag::new().with("animationName", PropValue::Null);
        assert!(bag.contains("animationName"));
        assert!(!bag.contains("animationType"));
        assert_eq!(bag.get_str("animationName"), None);
    }

    #[test]
    fn test_parse_falls_back_on_bad_text() {
        let bag = PropertyBag::new().with("size", "huge").with("other", "lg");
        assert_eq!(bag.parse::<ComponentSize>("size"), None);
        assert_eq!(bag.parse::<ComponentSize>("other"), Some(ComponentSize::Lg));
        assert_eq!(bag.parse::<ComponentSize>("missing"), None);
    }

    #[test]
    fn test_serde_transparent() {
        let bag: PropertyBag =
            serde_json::from_str(r#"{"headerTitle": "Hi", "isEnabled": false}"#).unwrap();
        assert_eq!(bag.get_str("headerTitle"), Some("Hi"));
        assert_eq!(bag.get_bool("isEnabled"), Some(false));
    }
}
