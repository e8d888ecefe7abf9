//! Budget forecast input loading and row model.

use municipal_api::types::ForecastEntry;
use serde::Serialize;
use serde_json::Value;

use crate::error::MunicipalError;

/// Banner text for a failed forecast request without a server message.
pub const FORECAST_FAILURE_MESSAGE: &str = "Failed to get forecast";

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ForecastRow {
    pub key: String,
    pub forecast: String,
    pub allocation: String,
}

/// Parses forecast input: either a bare JSON array of historical rows or an
/// object with an `nl_data` array.
pub fn parse_nl_data(text: &str) -> Result<Vec<Value>, MunicipalError> {
    match serde_json::from_str::<Value>(text)? {
        Value::Array(rows) => Ok(rows),
        Value::Object(mut map) => match map.remove("nl_data") {
            Some(Value::Array(rows)) => Ok(rows),
            _ => Err(MunicipalError::InvalidInput(
                "forecast input object must contain an `nl_data` array".to_string(),
            )),
        },
        _ => Err(MunicipalError::InvalidInput(
            "forecast input must be a JSON array".to_string(),
        )),
    }
}

pub fn build_forecast_rows(entries: &[ForecastEntry]) -> Vec<ForecastRow> {
    entries
        .iter()
        .map(|e| ForecastRow {
            key: e.key().to_string(),
            forecast: display_value(e.forecast.as_ref()),
            allocation: display_value(e.allocation.as_ref()),
        })
        .collect()
}

/// The line shown to the user when a forecast request fails.
pub fn failure_message(err: &municipal_api::Error) -> String {
    err.user_message_or(FORECAST_FAILURE_MESSAGE)
}

fn display_value(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}
