//! Composition of everything shown below the form.

use crate::state::AppState;
use crate::summary::Summary;
use crate::table::ResultsTable;

/// The rendered sections, in display order: error banner, summary, table.
#[derive(Clone, Debug, PartialEq)]
pub struct ShellView {
    pub error_banner: Option<String>,
    pub summary: Option<Summary>,
    pub table: Option<ResultsTable>,
}

impl ShellView {
    pub fn from_state(state: &AppState) -> Self {
        Self {
            error_banner: state.error().map(str::to_string),
            summary: Summary::derive(state.data(), state.submission()),
            table: ResultsTable::derive(state.data()),
        }
    }

    pub fn is_failure(&self) -> bool {
        self.error_banner.is_some()
    }
}
