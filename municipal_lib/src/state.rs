//! Top-level application state and the reducer that owns every mutation.

use municipal_api::types::ResultSet;

use crate::mode::QueryRequest;

/// State transitions. Only the form produces these.
#[derive(Debug)]
pub enum Action {
    /// A new submission started: clears the previous result and error.
    Submit(QueryRequest),
    /// The request settled with a result set.
    Resolve(ResultSet),
    /// The request settled with a user-facing error message.
    Reject(String),
}

/// Result data, error banner text and the last submitted request.
///
/// Read-only for everything except [`AppState::reduce`].
#[derive(Debug, Default)]
pub struct AppState {
    data: Option<ResultSet>,
    error: Option<String>,
    submission: Option<QueryRequest>,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reduce(&mut self, action: Action) {
        match action {
            Action::Submit(request) => {
                self.data = None;
                self.error = None;
                self.submission = Some(request);
            }
            Action::Resolve(result) => {
                self.data = Some(result);
                self.error = None;
            }
            Action::Reject(message) => {
                self.data = None;
                self.error = Some(message);
            }
        }
    }

    pub fn data(&self) -> Option<&ResultSet> {
        self.data.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn submission(&self) -> Option<&QueryRequest> {
        self.submission.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use municipal_api::types::Cell;
    use municipal_api::MunicipalityDataQuery;

    use super::*;

    fn result_with(code: &str) -> ResultSet {
        ResultSet {
            cells: vec![Cell {
                item_code: Some(code.to_string()),
                item_label: None,
                function_label: None,
                function_code: None,
                demarcation_code: None,
                demarcation_label: None,
                amount_sum: Some(1.0),
                municipality_name: None,
            }],
        }
    }

    fn request() -> QueryRequest {
        QueryRequest::Structured(MunicipalityDataQuery::new("CPT", 2023))
    }

    #[test]
    fn starts_empty() {
        let state = AppState::new();
        assert!(state.data().is_none());
        assert!(state.error().is_none());
        assert!(state.submission().is_none());
    }

    #[test]
    fn submit_clears_previous_error() {
        let mut state = AppState::new();
        state.reduce(Action::Submit(request()));
        state.reduce(Action::Reject("boom".to_string()));
        assert_eq!(state.error(), Some("boom"));

        state.reduce(Action::Submit(request()));
        assert!(state.error().is_none());
        assert!(state.data().is_none());
    }

    #[test]
    fn submit_clears_previous_data() {
        let mut state = AppState::new();
        state.reduce(Action::Submit(request()));
        state.reduce(Action::Resolve(result_with("0200")));
        assert!(state.data().is_some());

        let next = QueryRequest::NaturalLanguage("refuse".to_string());
        state.reduce(Action::Submit(next.clone()));
        assert!(state.data().is_none());
        assert_eq!(state.submission(), Some(&next));
    }

    #[test]
    fn reject_leaves_data_absent() {
        let mut state = AppState::new();
        state.reduce(Action::Submit(request()));
        state.reduce(Action::Reject("Municipality not found".to_string()));
        assert!(state.data().is_none());
        assert_eq!(state.error(), Some("Municipality not found"));
        assert_eq!(state.submission(), Some(&request()));
    }
}
