use crate::i18n::{translate_in, Language};
use crate::report::payload::{object, text};
use serde::Serialize;
use serde_json::Value;

/// Category keys the backend is known to emit, in display order. Unknown
/// keys still render, labeled by their raw key.
const KNOWN_CATEGORIES: &[&str] = &[
    "government_portals",
    "compliance_resources",
    "business_tools",
    "learning_resources",
];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResourceEntry {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub desc: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResourceGroup {
    pub key: String,
    pub label: String,
    pub entries: Vec<ResourceEntry>,
}

/// Normalizes a `/api/resources` response into ordered, labeled groups.
/// Known categories come first in their fixed order; unknown categories
/// follow with the raw key as the display label. Empty groups are omitted.
pub fn resource_groups(payload: &Value, language: Language) -> Vec<ResourceGroup> {
    let Some(categories) = object(payload, "resources") else {
        return Vec::new();
    };

    let mut groups = Vec::new();

    for key in KNOWN_CATEGORIES {
        if let Some(raw_entries) = categories.get(*key) {
            push_group(&mut groups, key, translate_in(language, key), raw_entries);
        }
    }

    for (key, raw_entries) in categories {
        if KNOWN_CATEGORIES.contains(&key.as_str()) {
            continue;
        }
        push_group(&mut groups, key, key, raw_entries);
    }

    groups
}

fn push_group(groups: &mut Vec<ResourceGroup>, key: &str, label: &str, raw_entries: &Value) {
    let entries: Vec<ResourceEntry> = raw_entries
        .as_array()
        .map(Vec::as_slice)
        .unwrap_or(&[])
        .iter()
        .filter_map(|entry| {
            let name = text(entry, "name")?;
            Some(ResourceEntry {
                name,
                url: text(entry, "url"),
                desc: text(entry, "desc"),
                category: text(entry, "category"),
            })
        })
        .collect();

    if !entries.is_empty() {
        groups.push(ResourceGroup {
            key: key.to_string(),
            label: label.to_string(),
            entries,
        });
    }
}
