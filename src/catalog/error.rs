//! Errors raised while talking to the catalog.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    /// Base URL cannot carry path segments (e.g. `mailto:`).
    #[error("Invalid catalog URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    /// HTTP client could not be constructed
    #[error("Failed to build HTTP client: {source}")]
    Client {
        #[source]
        source: reqwest::Error,
    },

    /// Connection, TLS, timeout or body transfer failure
    #[error("Catalog unreachable: {source}")]
    Unreachable {
        #[source]
        source: reqwest::Error,
    },

    #[error("Asteroid '{id}' not found")]
    NotFound { id: String },

    /// Any other non-2xx response
    #[error("Catalog returned HTTP {status}")]
    Status { status: u16 },

    #[error("Malformed catalog response: {source}")]
    Malformed {
        #[source]
        source: serde_json::Error,
    },
}

impl CatalogError {
    /// Short machine-readable tag used in log records.
    pub fn error_type(&self) -> &'static str {
        match self {
            CatalogError::InvalidUrl { .. } => "invalid_url",
            CatalogError::Client { .. } => "client_error",
            CatalogError::Unreachable { .. } => "unreachable",
            CatalogError::NotFound { .. } => "not_found",
            CatalogError::Status { .. } => "http_status",
            CatalogError::Malformed { .. } => "malformed_response",
        }
    }
}
