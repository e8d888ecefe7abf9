//! Shared query infrastructure: the [`Query`] trait.

use url::Url;

/// Trait implemented by all GET query builders. Provides URL serialization.
///
/// Absent optional fields are omitted from the query string rather than sent
/// as empty values.
pub trait Query {
    /// Appends this query's parameters to the given URL, returning the modified URL.
    fn add_to_url(&self, url: &Url) -> Url;
}
