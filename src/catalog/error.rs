//! Error types for catalog lookups.

use thiserror::Error;

use crate::model::ProductId;

/// Errors that can occur while fetching from the catalog.
///
/// The cart never interprets these beyond "the lookup failed".
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The request never produced a response.
    #[error("Catalog request to {path} failed: {source}")]
    Transport {
        path: String,
        #[source]
        source: reqwest::Error,
    },

    /// The catalog answered with a non-success status.
    #[error("Catalog returned {status} for {path}")]
    Status { path: String, status: u16 },

    /// The response body did not match the expected shape.
    #[error("Catalog response for {path} is malformed: {source}")]
    Decode {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    /// The catalog has no record for the id.
    #[error("Catalog has no record for {0}")]
    NotFound(ProductId),

    /// A test double received a call it was not told to expect.
    #[error("Unexpected catalog call: {0}")]
    Unexpected(String),
}
