//! The two ways of asking the backend for line items.
//!
//! Each mode owns its request building and its response decoding; callers pick
//! one explicitly and run it through [`QueryRequest::execute`].

use municipal_api::types::ResultSet;
use municipal_api::{Client, MunicipalityDataQuery};

/// A validated request, ready to send. Also serves as the snapshot of the
/// submitted form that the summary label is built from.
#[derive(Clone, Debug, PartialEq)]
pub enum QueryRequest {
    /// Filter-based query against `/api/municipality-data`.
    Structured(MunicipalityDataQuery),
    /// Plain-English request against `/api/query`.
    NaturalLanguage(String),
}

impl QueryRequest {
    /// Issues exactly one request for this mode.
    pub async fn execute(&self, client: &Client) -> Result<ResultSet, municipal_api::Error> {
        match self {
            QueryRequest::Structured(query) => client.get_municipality_data(query).await,
            QueryRequest::NaturalLanguage(text) => client.post_query(text).await,
        }
    }

    pub fn mode_name(&self) -> &'static str {
        match self {
            QueryRequest::Structured(_) => "structured",
            QueryRequest::NaturalLanguage(_) => "natural-language",
        }
    }

    /// Label used when the response does not name the municipality.
    pub fn fallback_label(&self) -> String {
        match self {
            QueryRequest::Structured(query) => format!("{} {}", query.municipality, query.year),
            QueryRequest::NaturalLanguage(text) => text.clone(),
        }
    }

    /// Label built around a server-provided municipality name.
    pub fn named_label(&self, name: &str) -> String {
        match self {
            QueryRequest::Structured(query) => format!("{} {}", name, query.year),
            QueryRequest::NaturalLanguage(_) => name.to_string(),
        }
    }
}
