use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Item codes the backend reports as available for a municipality and year.
///
/// The backend returns a JSON object keyed by item code. Values are either a
/// plain label or an object carrying one; anything else is kept as-is.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(transparent)]
pub struct AvailableItems {
    pub items: BTreeMap<String, serde_json::Value>,
}

impl AvailableItems {
    /// Item codes in ascending order.
    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.items.keys().map(String::as_str)
    }

    /// Best-effort label for a code.
    pub fn label(&self, code: &str) -> Option<&str> {
        match self.items.get(code)? {
            serde_json::Value::String(label) => Some(label.as_str()),
            serde_json::Value::Object(map) => map
                .get("label")
                .or_else(|| map.get("item.label"))
                .and_then(|v| v.as_str()),
            _ => None,
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
