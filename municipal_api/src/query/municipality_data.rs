use url::Url;

use crate::types::AmountType;

use super::Query;

/// Filters for `GET /api/municipality-data`.
///
/// `municipality` and `year` are constructor arguments, so a query can never
/// be issued without them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MunicipalityDataQuery {
    pub municipality: String,
    pub year: i32,
    pub amount_type: AmountType,
    /// Month index 1-12 within the financial year. `None` requests annual totals.
    pub financial_period: Option<u8>,
    pub item_codes: Vec<String>,
}

impl MunicipalityDataQuery {
    pub fn new(municipality: &str, year: i32) -> Self {
        Self {
            municipality: municipality.to_string(),
            year,
            amount_type: AmountType::default(),
            financial_period: None,
            item_codes: Vec::new(),
        }
    }

    pub fn with_amount_type(mut self, amount_type: AmountType) -> Self {
        self.amount_type = amount_type;
        self
    }

    pub fn with_financial_period(mut self, financial_period: u8) -> Self {
        self.financial_period = Some(financial_period);
        self
    }

    pub fn with_item_code(mut self, item_code: &str) -> Self {
        self.item_codes.push(item_code.to_string());
        self
    }
    pub fn with_item_codes(mut self, item_codes: &[String]) -> Self {
        self.item_codes.extend_from_slice(item_codes);
        self
    }
}

impl Query for MunicipalityDataQuery {
    fn add_to_url(&self, url: &Url) -> Url {
        let mut url = url.clone();
        url.query_pairs_mut()
            .append_pair("municipality", &self.municipality)
            .append_pair("year", &self.year.to_string())
            .append_pair("amount_type", self.amount_type.code());
        if let Some(financial_period) = self.financial_period {
            url.query_pairs_mut()
                .append_pair("financial_period", &financial_period.to_string());
        };
        if !self.item_codes.is_empty() {
            url.query_pairs_mut()
                .append_pair("item_codes", &self.item_codes.join(","));
        };
        url
    }
}
