use serde::{Deserialize, Serialize};

/// Body of `POST /api/forecast`.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct ForecastRequest {
    pub nl_data: Vec<serde_json::Value>,
}

/// One forecast line. The backend keys lines by `sector` or, failing that,
/// by `item_id`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ForecastEntry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sector: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item_id: Option<String>,

    #[serde(default)]
    pub forecast: Option<serde_json::Value>,

    #[serde(default)]
    pub allocation: Option<serde_json::Value>,
}

impl ForecastEntry {
    /// The row key: `sector` when present, else `item_id`.
    pub fn key(&self) -> &str {
        self.sector
            .as_deref()
            .or(self.item_id.as_deref())
            .unwrap_or_default()
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct ForecastResponse {
    #[serde(default)]
    pub forecast: Vec<ForecastEntry>,
}
