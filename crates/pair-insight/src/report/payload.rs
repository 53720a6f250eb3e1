use super::validity::{display_text, is_displayable};
use serde::Serialize;
use serde_json::{Map, Value};

static EMPTY_ITEMS: &[Value] = &[];

/// Nested object lookup that never fails; missing or mistyped fields yield
/// `None` and callers substitute their documented defaults.
pub(crate) fn object<'a>(value: &'a Value, key: &str) -> Option<&'a Map<String, Value>> {
    value.get(key).and_then(Value::as_object)
}

/// Array lookup defaulting to an empty slice.
pub(crate) fn items<'a>(value: &'a Value, key: &str) -> &'a [Value] {
    value
        .get(key)
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or(EMPTY_ITEMS)
}

/// Displayable text for a field, validity-gated and trimmed.
pub(crate) fn text(value: &Value, key: &str) -> Option<String> {
    value.get(key).and_then(display_text)
}

/// First displayable text among alternate field names the backend is known
/// to emit for the same concept.
pub(crate) fn text_any(value: &Value, keys: &[&str]) -> Option<String> {
    keys.iter().find_map(|key| text(value, key))
}

/// Numeric lookup accepting either a JSON number or a numeric string.
pub(crate) fn number(value: &Value, key: &str) -> Option<f64> {
    match value.get(key)? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
}

pub(crate) fn number_any(value: &Value, keys: &[&str]) -> Option<f64> {
    keys.iter().find_map(|key| number(value, key))
}

/// Collects the displayable strings of a list field, preserving order and
/// flattening object entries into their joined values.
pub(crate) fn string_list(value: &Value, key: &str) -> Vec<String> {
    items(value, key)
        .iter()
        .filter(|item| is_displayable(item))
        .filter_map(|item| match item {
            Value::String(_) => display_text(item),
            Value::Object(map) => {
                let joined = map
                    .values()
                    .filter_map(display_text)
                    .collect::<Vec<_>>()
                    .join(" - ");
                if joined.is_empty() {
                    None
                } else {
                    Some(joined)
                }
            }
            other => Some(other.to_string()),
        })
        .collect()
}

/// Action entry that may arrive as a bare string or as an object carrying
/// `action` and an optional `deadline`. Both normalize uniformly.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FlexibleAction {
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deadline: Option<String>,
}

impl FlexibleAction {
    pub fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::String(_) => display_text(value).map(|text| Self {
                text,
                deadline: None,
            }),
            Value::Object(_) => {
                let action = text_any(value, &["action", "step", "task"])?;
                Some(Self {
                    text: action,
                    deadline: text(value, "deadline"),
                })
            }
            _ => None,
        }
    }
}

/// Obligation severity (HIGH/MEDIUM/LOW), parsed case-insensitively from
/// prose like "HIGH - May lead to withdrawal of guarantee".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    High,
    Medium,
    Low,
    Unspecified,
}

impl Severity {
    pub fn from_raw(raw: Option<&str>) -> Self {
        let Some(raw) = raw else {
            return Self::Unspecified;
        };
        let folded = raw.trim().to_ascii_uppercase();
        if folded.starts_with("HIGH") {
            Self::High
        } else if folded.starts_with("MEDIUM") {
            Self::Medium
        } else if folded.starts_with("LOW") {
            Self::Low
        } else {
            Self::Unspecified
        }
    }

    pub const fn label_key(self) -> &'static str {
        match self {
            Self::High => "priority_high",
            Self::Medium => "priority_medium",
            Self::Low => "priority_low",
            Self::Unspecified => "status_unknown",
        }
    }
}

/// Recommendation priority. Unrecognized input defaults to the neutral
/// midpoint so tallies still cover every list entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    pub fn from_raw(raw: Option<&str>) -> Self {
        match Severity::from_raw(raw) {
            Severity::High => Self::High,
            Severity::Low => Self::Low,
            Severity::Medium | Severity::Unspecified => Self::Medium,
        }
    }

    pub const fn label_key(self) -> &'static str {
        match self {
            Self::High => "priority_high",
            Self::Medium => "priority_medium",
            Self::Low => "priority_low",
        }
    }
}

/// Whether the analyzed policy applies to the business at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ApplicabilityStatus {
    Applicable,
    PartiallyApplicable,
    NotApplicable,
    Unknown,
}

impl ApplicabilityStatus {
    pub fn from_raw(raw: Option<&str>) -> Self {
        let Some(raw) = raw else {
            return Self::Unknown;
        };
        match raw.trim().to_ascii_uppercase().as_str() {
            "APPLICABLE" => Self::Applicable,
            "PARTIALLY_APPLICABLE" | "PARTIALLY APPLICABLE" => Self::PartiallyApplicable,
            "NOT_APPLICABLE" | "NOT APPLICABLE" => Self::NotApplicable,
            _ => Self::Unknown,
        }
    }

    pub const fn label_key(self) -> &'static str {
        match self {
            Self::Applicable => "applicable",
            Self::PartiallyApplicable => "partially_applicable",
            Self::NotApplicable => "not_applicable",
            Self::Unknown => "status_unknown",
        }
    }
}
