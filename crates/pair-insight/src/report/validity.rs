use serde_json::Value;

/// Placeholder strings the analysis backend emits when it has no real value.
const PLACEHOLDERS: &[&str] = &["", "unknown", "n/a"];

/// Returns whether a raw payload value carries displayable information.
///
/// Numeric zero and `false` are legitimate values; absent, empty, and
/// placeholder values are not. Fields that fail this gate are suppressed
/// entirely rather than rendered as empty strings.
pub fn is_displayable(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::String(text) => is_displayable_str(text),
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
        Value::Number(_) | Value::Bool(_) => true,
    }
}

pub fn is_displayable_str(text: &str) -> bool {
    let folded = text.trim().to_lowercase();
    !PLACEHOLDERS.contains(&folded.as_str())
}

/// Extracts trimmed display text from a value, or `None` when the value
/// fails the display gate or is not textual.
pub fn display_text(value: &Value) -> Option<String> {
    match value {
        Value::String(text) if is_displayable_str(text) => Some(text.trim().to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn placeholder_strings_are_not_displayable() {
        assert!(!is_displayable(&json!("N/A")));
        assert!(!is_displayable(&json!("n/a  ")));
        assert!(!is_displayable(&json!("Unknown")));
        assert!(!is_displayable(&json!("   ")));
        assert!(!is_displayable(&json!(null)));
    }

    #[test]
    fn zero_and_false_are_displayable() {
        assert!(is_displayable(&json!(0)));
        assert!(is_displayable(&json!(false)));
    }

    #[test]
    fn empty_collections_are_not_displayable() {
        assert!(!is_displayable(&json!([])));
        assert!(!is_displayable(&json!({})));
        assert!(is_displayable(&json!(["x"])));
        assert!(is_displayable(&json!({"k": 1})));
    }

    #[test]
    fn display_text_trims_and_gates() {
        assert_eq!(display_text(&json!("  hello  ")), Some("hello".to_string()));
        assert_eq!(display_text(&json!("n/a")), None);
        assert_eq!(display_text(&json!(42)), None);
    }
}
