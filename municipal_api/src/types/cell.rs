//! Line items returned by the municipality data endpoints.

use serde::{Deserialize, Serialize};

/// One line item of a result set.
///
/// `amount.sum` is in major currency units (rands). The backend passes the
/// treasury aggregate through unscaled, so no cents conversion is applied
/// anywhere downstream.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Cell {
    /// Financial item code, e.g. "0200". Aggregates drilled down by function
    /// only carry no code.
    #[serde(rename = "item.code", default)]
    pub item_code: Option<String>,

    /// Financial item description.
    #[serde(rename = "item.label", default)]
    pub item_label: Option<String>,

    /// Municipal function the amount is booked against.
    #[serde(rename = "function.label", default)]
    pub function_label: Option<String>,

    #[serde(rename = "function.code", default, skip_serializing_if = "Option::is_none")]
    pub function_code: Option<String>,

    #[serde(rename = "demarcation.code", default, skip_serializing_if = "Option::is_none")]
    pub demarcation_code: Option<String>,

    #[serde(rename = "demarcation.label", default, skip_serializing_if = "Option::is_none")]
    pub demarcation_label: Option<String>,

    /// Aggregated amount. Facts-style rows call this field `amount`.
    #[serde(rename = "amount.sum", alias = "amount", default)]
    pub amount_sum: Option<f64>,

    /// Display name the backend attaches to every cell of a query.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub municipality_name: Option<String>,
}

impl Cell {
    /// The cell amount, treating a missing or null value as zero.
    pub fn amount(&self) -> f64 {
        self.amount_sum.unwrap_or(0.0)
    }
}

/// Ordered line items for one query.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct ResultSet {
    #[serde(default)]
    pub cells: Vec<Cell>,
}

impl ResultSet {
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }
}
