//! Library layer for the municipal finance explorer: the query form, the
//! application store, and the summary and table derivations.
//!
//! Wraps the `municipal_api` crate with input validation, an explicit state
//! container, and pure view models that a front end renders.

pub mod catalog;
pub mod config;
pub mod currency;
pub mod error;
pub mod forecast;
pub mod form;
pub mod mode;
pub mod shell;
pub mod state;
pub mod summary;
pub mod table;
pub mod validation;

pub use municipal_api;
pub use municipal_api::types;
pub use municipal_api::{AvailableItemsQuery, Client, MunicipalityDataQuery, Query};

pub use config::Config;
pub use error::MunicipalError;
pub use form::{FormInput, FormState, FormValues, QueryForm};
pub use mode::QueryRequest;
pub use shell::ShellView;
pub use state::{Action, AppState};
pub use summary::Summary;
pub use table::{AmountTone, ResultsTable, TableRow};
