//! Small helpers for list and record state.

use serde_json::Value;

/// Largest value an `INT` column accepts on the backend.
pub const INT_MAX: i32 = i32::MAX;

/// Removes the element at `index` when it is in bounds; otherwise a no-op.
pub fn remove_item_by_index<T>(items: &mut Vec<T>, index: usize) -> Option<T> {
    (index < items.len()).then(|| items.remove(index))
}

/// True only for a JSON object without keys.
pub fn is_empty_object(value: &Value) -> bool {
    value.as_object().is_some_and(|fields| fields.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_remove_item_by_index() {
        let mut batches = vec!["b1", "b2", "b3"];
        assert_eq!(remove_item_by_index(&mut batches, 1), Some("b2"));
        assert_eq!(batches, vec!["b1", "b3"]);

        assert_eq!(remove_item_by_index(&mut batches, 5), None);
        assert_eq!(batches, vec!["b1", "b3"]);
    }

    #[test]
    fn test_is_empty_object() {
        assert!(is_empty_object(&json!({})));
        assert!(!is_empty_object(&json!({"a": 1})));
        assert!(!is_empty_object(&json!([])));
        assert!(!is_empty_object(&Value::Null));
        assert!(!is_empty_object(&json!("")));
    }

    #[test]
    fn test_int_max() {
        assert_eq!(INT_MAX, 2_147_483_647);
    }
}
