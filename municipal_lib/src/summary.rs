//! Headline figures for a result set.

use municipal_api::types::ResultSet;
use serde::Serialize;

use crate::currency::format_zar;
use crate::mode::QueryRequest;

/// Total, line count and a label naming what was queried.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Summary {
    pub total_amount: f64,
    pub item_count: usize,
    pub query_label: String,
}

impl Summary {
    /// Derives the summary, or `None` when there is nothing to summarise.
    ///
    /// The label prefers the municipality name the backend attached to the
    /// first cell and falls back to the submitted code.
    pub fn derive(data: Option<&ResultSet>, submission: Option<&QueryRequest>) -> Option<Self> {
        let data = data?;
        let first = data.cells.first()?;

        let query_label = match (first.municipality_name.as_deref(), submission) {
            (Some(name), Some(request)) => request.named_label(name),
            (Some(name), None) => name.to_string(),
            (None, Some(request)) => request.fallback_label(),
            (None, None) => String::new(),
        };

        Some(Self {
            total_amount: data.cells.iter().map(|c| c.amount()).sum(),
            item_count: data.cells.len(),
            query_label,
        })
    }

    pub fn formatted_total(&self) -> String {
        format_zar(self.total_amount)
    }
}
