use municipal_api::types::AmountType;

use crate::error::MunicipalError;

/// Validate a municipality (demarcation) code: required. The trimmed value is
/// sent as entered.
pub fn validate_municipality(input: &str) -> Result<String, MunicipalError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(MunicipalError::InvalidInput(
            "municipality is required".to_string(),
        ));
    }
    Ok(trimmed.to_string())
}

/// Validate a year: required.
pub fn validate_year(year: Option<i32>) -> Result<i32, MunicipalError> {
    year.ok_or_else(|| MunicipalError::InvalidInput("year is required".to_string()))
}

/// Validate an amount type: case-insensitive code or label.
pub fn validate_amount_type(input: &str) -> Result<AmountType, MunicipalError> {
    let trimmed = input.trim();
    if let Ok(amount_type) = trimmed.to_uppercase().parse::<AmountType>() {
        return Ok(amount_type);
    }
    let lower = trimmed.to_lowercase();
    AmountType::ALL
        .into_iter()
        .find(|a| a.label().to_lowercase() == lower)
        .ok_or_else(|| {
            MunicipalError::InvalidInput(format!(
                "unknown amount type '{}'. Valid values: AUDA (audited actual), ACT (actual), \
                 ORGB (original budget), ADJB (adjusted budget)",
                input
            ))
        })
}

/// Validate a financial period (month index 1-12).
pub fn validate_financial_period(period: u8) -> Result<u8, MunicipalError> {
    if !(1..=12).contains(&period) {
        return Err(MunicipalError::InvalidInput(
            "financial period must be between 1 and 12".to_string(),
        ));
    }
    Ok(period)
}

/// Parse a comma-separated item code list.
///
/// Entries are trimmed and stripped of surrounding quotes; blank entries are
/// dropped. An empty or blank input yields an empty list.
pub fn parse_item_codes(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(|code| code.trim().trim_matches(|c| c == '"' || c == '\'').trim())
        .filter(|code| !code.is_empty())
        .map(|code| code.to_string())
        .collect()
}

/// Validate a plain-English request for the natural-language mode: required.
/// The trimmed text is sent as entered.
pub fn validate_user_request(input: &str) -> Result<String, MunicipalError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(MunicipalError::InvalidInput(
            "a request is required".to_string(),
        ));
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
#[path = "validation_tests.rs"]
mod tests;
