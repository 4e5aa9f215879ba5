//! Positional fan-out of multi-value properties

use maya_core::PropValue;

/// Value a slot at `index` receives from a multi-value declaration.
///
/// A scalar goes to every slot. A list gives element `index`, or element 0
/// when the list is too short. Unset and empty lists stay unset.
pub fn fan_out(value: Option<&PropValue>, index: usize) -> Option<PropValue> {
    match value? {
        PropValue::List(items) => items.get(index).or_else(|| items.first()).cloned(),
        scalar => Some(scalar.clone()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unset_stays_unset() {
        assert_eq!(fan_out(None, 2), None);
    }

    #[test]
    fn test_scalar_broadcasts() {
        let value = PropValue::from("bounce");
        for index in 0..4 {
            assert_eq!(fan_out(Some(&value), index), Some(value.clone()));
        }
    }

    #[test]
    fn test_list_indexes_then_falls_back_to_first() {
        let value = PropValue::from(vec!["a", "b"]);
        assert_eq!(fan_out(Some(&value), 1), Some(PropValue::from("b")));
        assert_eq!(fan_out(Some(&value), 3), Some(PropValue::from("a")));
    }

    #[test]
    fn test_empty_list_is_unset() {
        let value = PropValue::List(Vec::new());
        assert_eq!(fan_out(Some(&value), 0), None);
    }

    #[test]
    fn test_explicit_null_is_broadcast() {
        assert_eq!(fan_out(Some(&PropValue::Null), 1), Some(PropValue::Null));
    }
}
