//! Property values
//!
//! A [`PropValue`] is what a component property holds once it has been
//! declared. An absent key in a [`PropertyBag`](crate::PropertyBag) means
//! "unset"; [`PropValue::Null`] is an explicit null and is kept distinct.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

/// A single declared property value
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PropValue {
    Bool(bool),
    Number(f64),
    Text(String),
    List(Vec<PropValue>),
    Null,
}

impl PropValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            PropValue::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            PropValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            PropValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Displayable text content. Numbers print in their shortest form
    /// (`5`, `2.5`); booleans, lists and null have no text.
    pub fn as_text(&self) -> Option<Cow<'_, str>> {
        match self {
            PropValue::Text(s) => Some(Cow::Borrowed(s)),
            PropValue::Number(n) => Some(Cow::Owned(n.to_string())),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, PropValue::Null)
    }

    /// Truthiness used by presence flags such as `headerDivider`.
    ///
    /// Only `true`, non-empty text, non-zero numbers and non-empty lists count.
    pub fn is_truthy(&self) -> bool {
        match self {
            PropValue::Bool(b) => *b,
            PropValue::Number(n) => *n != 0.0,
            PropValue::Text(s) => !s.is_empty(),
            PropValue::List(items) => !items.is_empty(),
            PropValue::Null => false,
        }
    }
}

impl From<bool> for PropValue {
    fn from(value: bool) -> Self {
        PropValue::Bool(value)
    }
}

impl From<f64> for PropValue {
    fn from(value: f64) -> Self {
        PropValue::Number(value)
    }
}

impl From<f32> for PropValue {
    fn from(value: f32) -> Self {
        PropValue::Number(value as f64)
    }
}

impl From<u32> for PropValue {
    fn from(value: u32) -> Self {
        PropValue::Number(value as f64)
    }
}

impl From<i32> for PropValue {
    fn from(value: i32) -> Self {
        PropValue::Number(value as f64)
    }
}

impl From<&str> for PropValue {
    fn from(value: &str) -> Self {
        PropValue::Text(value.to_string())
    }
}

impl From<String> for PropValue {
    fn from(value: String) -> Self {
        PropValue::Text(value)
    }
}

impl<T: Into<PropValue>> From<Vec<T>> for PropValue {
    fn from(values: Vec<T>) -> Self {
        PropValue::List(values.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<PropValue>, const N: usize> From<[T; N]> for PropValue {
    fn from(values: [T; N]) -> Self {
        PropValue::List(values.into_iter().map(Into::into).collect())
    }
}
