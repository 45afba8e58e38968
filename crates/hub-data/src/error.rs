//! Catalog fetch error types.

use hub_catalog::SchemaError;
use thiserror::Error;

/// Errors that can occur when fetching from the catalog API.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FetchError {
    /// The request never produced a response (DNS, connect, TLS, timeout).
    #[error("Network error: {0}")]
    Network(String),

    /// Upstream answered with a non-2xx status.
    #[error("HTTP {status} for {url}")]
    Http { status: u16, url: String },

    /// The body did not decode into the expected entity.
    #[error("Schema error: {0}")]
    Schema(#[from] SchemaError),
}

impl FetchError {
    /// HTTP status, when upstream answered.
    pub fn status(&self) -> Option<u16> {
        match self {
            FetchError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(e: reqwest::Error) -> Self {
        FetchError::Network(e.to_string())
    }
}
