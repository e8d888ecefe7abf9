mod client;
mod errors;
mod query;
pub mod types;
pub use self::client::{Client, DEFAULT_BASE_URL};
pub use self::errors::{Error, GENERIC_FAILURE_MESSAGE, NETWORK_FAILURE_MESSAGE};
pub use self::query::{AvailableItemsQuery, MunicipalityDataQuery, Query};
