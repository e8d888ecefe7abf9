//! HTTP client for the municipal finance backend.

use serde::{de::DeserializeOwned, Serialize};
use url::Url;

use crate::{
    query::{AvailableItemsQuery, MunicipalityDataQuery, Query},
    types::{
        AvailableItems, ErrorBody, ForecastEntry, ForecastRequest, ForecastResponse,
        NaturalLanguageRequest, NaturalLanguageResponse, ResultSet,
    },
    Error,
};

/// Base URL of a backend started locally with its default settings.
pub const DEFAULT_BASE_URL: &str = "http://localhost:5000";

/// HTTP client for the municipal finance backend.
///
/// Every call is a single attempt: no retries and no request timeout.
pub struct Client {
    /// Base URL for the API. Defaults to [`DEFAULT_BASE_URL`].
    base_api_url: String,
}

impl Default for Client {
    fn default() -> Self {
        Self::new()
    }
}

impl Client {
    /// Creates a new client pointing at a locally running backend.
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Creates a new client with a custom base URL. Also used for testing with wiremock.
    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            base_api_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_api_url
    }

    fn get_url(&self, path: &str, query: Option<&impl Query>) -> Result<Url, Error> {
        let url = Url::parse(format!("{}{}", &self.base_api_url, path).as_str()).map_err(|e| {
            tracing::error!("Invalid URL constructed: {}", e);
            Error::InvalidUrl(e.to_string())
        })?;
        Ok(match query {
            Some(query) => query.add_to_url(&url),
            None => url,
        })
    }

    fn http_client() -> Result<reqwest::Client, Error> {
        reqwest::Client::builder()
            .user_agent(concat!("munidata/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| {
                tracing::error!("Failed to build HTTP client: {}", e);
                Error::RequestFailed
            })
    }

    async fn get<T, Q>(&self, path: &str, query: &Q) -> Result<T, Error>
    where
        T: DeserializeOwned,
        Q: Query,
    {
        let url = self.get_url(path, Some(query))?;
        tracing::debug!("GET {}", url);
        let request = Self::http_client()?
            .get(url)
            .header("accept", "application/json");
        Self::send(request).await
    }

    async fn post<T, B>(&self, path: &str, body: &B) -> Result<T, Error>
    where
        T: DeserializeOwned,
        B: Serialize,
    {
        let url = self.get_url(path, None::<&MunicipalityDataQuery>)?;
        tracing::debug!("POST {}", url);
        let request = Self::http_client()?
            .post(url)
            .header("accept", "application/json")
            .json(body);
        Self::send(request).await
    }

    async fn send<T: DeserializeOwned>(request: reqwest::RequestBuilder) -> Result<T, Error> {
        let resp = request.send().await.map_err(|e| {
            tracing::error!("Failed to get resource: {}", e);
            Error::RequestFailed
        })?;

        let status = resp.status();
        let body = resp.text().await.map_err(|e| {
            tracing::error!("Failed to read response body: {}", e);
            Error::RequestFailed
        })?;

        if !status.is_success() {
            let snippet = truncate_body(&body);
            tracing::error!("Request failed with status {}: {}", status, snippet);
            return Err(match serde_json::from_str::<ErrorBody>(&body) {
                Ok(ErrorBody { error }) if !error.trim().is_empty() => Error::Server {
                    status: status.as_u16(),
                    message: error,
                },
                _ => Error::HttpStatus {
                    status: status.as_u16(),
                    body: snippet,
                },
            });
        }

        serde_json::from_str::<T>(&body).map_err(|e| {
            let snippet = truncate_body(&body);
            tracing::error!("Failed to parse resource: {} | body: {}", e, snippet);
            Error::Decode(e.to_string())
        })
    }

    /// Fetches the line items matching a structured query.
    pub async fn get_municipality_data(
        &self,
        query: &MunicipalityDataQuery,
    ) -> Result<ResultSet, Error> {
        self.get::<ResultSet, MunicipalityDataQuery>("/api/municipality-data", query)
            .await
    }

    /// Fetches the item codes available for a municipality and year.
    pub async fn get_available_items(
        &self,
        query: &AvailableItemsQuery,
    ) -> Result<AvailableItems, Error> {
        self.get::<AvailableItems, AvailableItemsQuery>("/api/available-items", query)
            .await
    }

    /// Resolves a plain-English request into line items.
    pub async fn post_query(&self, user_request: &str) -> Result<ResultSet, Error> {
        let body = NaturalLanguageRequest {
            user_request: user_request.to_string(),
        };
        let resp = self
            .post::<NaturalLanguageResponse, _>("/api/query", &body)
            .await?;
        Ok(resp.into())
    }

    /// Requests a budget forecast for the given historical rows.
    pub async fn get_forecast(
        &self,
        nl_data: &[serde_json::Value],
    ) -> Result<Vec<ForecastEntry>, Error> {
        let body = ForecastRequest {
            nl_data: nl_data.to_vec(),
        };
        let resp = self
            .post::<ForecastResponse, _>("/api/forecast", &body)
            .await?;
        Ok(resp.forecast)
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 2000;
    if body.len() <= MAX {
        body.to_string()
    } else {
        let mut end = MAX;
        while !body.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}...[truncated]", &body[..end])
    }
}
