use url::Url;

use super::Query;

/// Filters for `GET /api/available-items`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AvailableItemsQuery {
    pub municipality: String,
    pub year: i32,
}

impl AvailableItemsQuery {
    pub fn new(municipality: &str, year: i32) -> Self {
        Self {
            municipality: municipality.to_string(),
            year,
        }
    }
}

impl Query for AvailableItemsQuery {
    fn add_to_url(&self, url: &Url) -> Url {
        let mut url = url.clone();
        url.query_pairs_mut()
            .append_pair("municipality", &self.municipality)
            .append_pair("year", &self.year.to_string());
        url
    }
}
