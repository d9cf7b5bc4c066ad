use std::sync::Arc;

/// Errors talking to the Galleria API.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The underlying HTTP request failed (network, DNS, timeout, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The API answered with a non-2xx status.
    #[error("API returned HTTP {status}: {message}")]
    Api {
        status: u16,
        code: Option<String>,
        message: String,
    },

    #[error("Invalid client configuration: {0}")]
    Config(String),
}

impl ClientError {
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Api { status, .. } => Some(*status),
            ClientError::Request(e) => e.status().map(|s| s.as_u16()),
            ClientError::Config(_) => None,
        }
    }
}

/// Errors surfaced by [`QueryClient::fetch`](crate::query::QueryClient::fetch).
#[derive(Debug, Clone, thiserror::Error)]
pub enum QueryError {
    /// Every attempt failed. Shared by all callers of a deduplicated fetch.
    #[error("Query {key} failed: {source}")]
    Fetch {
        key: String,
        source: Arc<ClientError>,
    },

    /// The cached value under `key` has a different type than requested.
    #[error("Query {0} holds a value of another type")]
    TypeMismatch(String),
}
