//! The query form: raw field values, validation into a [`QueryRequest`], and
//! the Idle/Submitting state machine.

use municipal_api::types::{AmountType, ResultSet};
use municipal_api::{Client, MunicipalityDataQuery};

use crate::catalog::current_year;
use crate::error::MunicipalError;
use crate::mode::QueryRequest;
use crate::state::{Action, AppState};
use crate::validation;

pub const SUBMIT_LABEL: &str = "Get Data";
pub const LOADING_LABEL: &str = "Loading...";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormState {
    Idle,
    Submitting,
}

/// Raw field values of the structured form, as entered.
#[derive(Clone, Debug, PartialEq)]
pub struct FormValues {
    pub municipality: String,
    pub year: Option<i32>,
    pub amount_type: AmountType,
    /// `None` requests annual totals.
    pub financial_period: Option<u8>,
    /// Comma-separated; empty means all items.
    pub item_codes: String,
}

impl Default for FormValues {
    fn default() -> Self {
        Self {
            municipality: String::new(),
            year: Some(current_year()),
            amount_type: AmountType::AuditedActual,
            financial_period: None,
            item_codes: String::new(),
        }
    }
}

impl FormValues {
    /// Builds the typed query. Fails when a required field is missing.
    pub fn to_query(&self) -> Result<MunicipalityDataQuery, MunicipalError> {
        let municipality = validation::validate_municipality(&self.municipality)?;
        let year = validation::validate_year(self.year)?;
        let mut query = MunicipalityDataQuery::new(&municipality, year)
            .with_amount_type(self.amount_type)
            .with_item_codes(&validation::parse_item_codes(&self.item_codes));
        if let Some(period) = self.financial_period {
            query = query.with_financial_period(validation::validate_financial_period(period)?);
        }
        Ok(query)
    }
}

/// What the form is currently collecting.
#[derive(Clone, Debug, PartialEq)]
pub enum FormInput {
    Structured(FormValues),
    NaturalLanguage(String),
}

/// A query form bound to one input mode.
///
/// At most one request is in flight per form: [`QueryForm::begin`] refuses to
/// start while the form is submitting.
#[derive(Debug)]
pub struct QueryForm {
    input: FormInput,
    state: FormState,
}

impl QueryForm {
    pub fn structured(values: FormValues) -> Self {
        Self {
            input: FormInput::Structured(values),
            state: FormState::Idle,
        }
    }

    pub fn natural_language(text: &str) -> Self {
        Self {
            input: FormInput::NaturalLanguage(text.to_string()),
            state: FormState::Idle,
        }
    }

    pub fn input(&self) -> &FormInput {
        &self.input
    }

    pub fn input_mut(&mut self) -> &mut FormInput {
        &mut self.input
    }

    pub fn state(&self) -> FormState {
        self.state
    }

    pub fn can_submit(&self) -> bool {
        self.state == FormState::Idle
    }

    pub fn submit_label(&self) -> &'static str {
        match self.state {
            FormState::Idle => SUBMIT_LABEL,
            FormState::Submitting => LOADING_LABEL,
        }
    }

    /// Validates the current input without touching any state.
    pub fn validate(&self) -> Result<QueryRequest, MunicipalError> {
        match &self.input {
            FormInput::Structured(values) => Ok(QueryRequest::Structured(values.to_query()?)),
            FormInput::NaturalLanguage(text) => Ok(QueryRequest::NaturalLanguage(
                validation::validate_user_request(text)?,
            )),
        }
    }

    /// Starts a submission: validates, resets the store, then enters Submitting.
    ///
    /// On validation failure nothing changes and no request must be sent.
    pub fn begin(&mut self, store: &mut AppState) -> Result<QueryRequest, MunicipalError> {
        if !self.can_submit() {
            return Err(MunicipalError::Busy);
        }
        let request = self.validate()?;
        store.reduce(Action::Submit(request.clone()));
        self.state = FormState::Submitting;
        tracing::debug!("Submitting {} query", request.mode_name());
        Ok(request)
    }

    /// Records the outcome of the request started by [`QueryForm::begin`] and
    /// returns the form to Idle.
    pub fn settle(
        &mut self,
        store: &mut AppState,
        outcome: Result<ResultSet, municipal_api::Error>,
    ) -> Result<(), MunicipalError> {
        self.state = FormState::Idle;
        match outcome {
            Ok(result) => {
                tracing::debug!("Query returned {} cells", result.len());
                store.reduce(Action::Resolve(result));
                Ok(())
            }
            Err(e) => {
                tracing::warn!("Query failed: {}", e);
                store.reduce(Action::Reject(e.user_message()));
                Err(MunicipalError::Api(e))
            }
        }
    }

    /// Runs a complete submission against `client`.
    pub async fn submit(
        &mut self,
        client: &Client,
        store: &mut AppState,
    ) -> Result<(), MunicipalError> {
        let request = self.begin(store)?;
        let outcome = request.execute(client).await;
        self.settle(store, outcome)
    }
}
