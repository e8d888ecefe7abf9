//! Row model for the line-item table.

use municipal_api::types::ResultSet;
use serde::Serialize;

use crate::currency::format_zar;

/// Notice shown in place of the table when a query matched nothing.
pub const EMPTY_NOTICE: &str = "No data found for this query.";

/// Placeholder for a missing code or label.
pub const MISSING_LABEL: &str = "-";

/// Styling class of an amount.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AmountTone {
    NonNegative,
    Negative,
}

impl AmountTone {
    /// Tone of the amount as displayed, after rounding to cents.
    pub fn of(amount: f64) -> Self {
        if (amount * 100.0).round() < 0.0 {
            AmountTone::Negative
        } else {
            AmountTone::NonNegative
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TableRow {
    /// Position in the result set. Stable because rows are never re-sorted or filtered.
    pub key: usize,
    pub item_code: String,
    pub item_label: String,
    pub function_label: String,
    pub amount: f64,
    pub amount_display: String,
    pub tone: AmountTone,
}

#[derive(Clone, Debug, PartialEq)]
pub enum ResultsTable {
    /// The query succeeded but returned no cells.
    Empty,
    Rows(Vec<TableRow>),
}

impl ResultsTable {
    /// Builds the table, or `None` when there is no result to show.
    pub fn derive(data: Option<&ResultSet>) -> Option<Self> {
        let data = data?;
        if data.is_empty() {
            return Some(ResultsTable::Empty);
        }
        let rows = data
            .cells
            .iter()
            .enumerate()
            .map(|(key, cell)| {
                let amount = cell.amount();
                TableRow {
                    key,
                    item_code: label_or_placeholder(cell.item_code.as_deref()),
                    item_label: label_or_placeholder(cell.item_label.as_deref()),
                    function_label: label_or_placeholder(cell.function_label.as_deref()),
                    amount,
                    amount_display: format_zar(amount),
                    tone: AmountTone::of(amount),
                }
            })
            .collect();
        Some(ResultsTable::Rows(rows))
    }

    pub fn rows(&self) -> &[TableRow] {
        match self {
            ResultsTable::Empty => &[],
            ResultsTable::Rows(rows) => rows,
        }
    }
}

fn label_or_placeholder(label: Option<&str>) -> String {
    match label.map(str::trim) {
        Some(l) if !l.is_empty() => l.to_string(),
        _ => MISSING_LABEL.to_string(),
    }
}
