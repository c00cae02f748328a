//! Decides whether a parsed resource has anything worth showing.

use crate::domain::model::ParsedValue;

fn trims_to_empty(value: &ParsedValue) -> bool {
    value.display_text().trim().is_empty()
}

/// Top-level emptiness check.
///
/// Sequences look at each element with [`is_item_empty`]. Mappings only
/// treat `null` and the exact empty string as blank, without trimming.
pub fn is_empty(value: &ParsedValue) -> bool {
    match value {
        ParsedValue::Null => true,
        ParsedValue::Sequence(items) => items.iter().all(is_item_empty),
        ParsedValue::Mapping(entries) => entries
            .iter()
            .all(|(_, v)| v.is_null() || v.is_empty_str()),
        ParsedValue::Scalar(_) => trims_to_empty(value),
    }
}

/// Emptiness of a single sequence element.
pub fn is_item_empty(item: &ParsedValue) -> bool {
    match item {
        ParsedValue::Mapping(entries) => entries
            .iter()
            .all(|(_, v)| v.is_null() || trims_to_empty(v)),
        ParsedValue::Null => true,
        other => trims_to_empty(other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn empty(v: serde_json::Value) -> bool {
        is_empty(&ParsedValue::from(v))
    }

    #[test]
    fn test_null_and_blank_scalars() {
        assert!(empty(json!(null)));
        assert!(empty(json!("")));
        assert!(empty(json!("  \n\t")));
        assert!(!empty(json!("x")));
        assert!(!empty(json!(0)));
        assert!(!empty(json!(false)));
    }

    #[test]
    fn test_sequences() {
        assert!(empty(json!([])));
        assert!(empty(json!([{}])));
        assert!(empty(json!([{"a": null}])));
        assert!(empty(json!([null, "", "   ", {"a": " "}])));
        assert!(!empty(json!([{"name": "x", "profit": 1}])));
        assert!(!empty(json!([null, "x"])));
    }

    #[test]
    fn test_nested_containers_are_not_blank_items() {
        assert!(!empty(json!([[]])));
        assert!(!empty(json!([{"a": []}])));
    }

    #[test]
    fn test_mappings() {
        assert!(empty(json!({})));
        assert!(empty(json!({"k": ""})));
        assert!(empty(json!({"k": null, "j": ""})));
        assert!(!empty(json!({"k": "v"})));
    }

    #[test]
    fn test_top_level_mapping_does_not_trim() {
        assert!(!empty(json!({"k": "  "})));
        assert!(empty(json!([{"k": "  "}])));
    }
}
