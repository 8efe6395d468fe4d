use thiserror::Error;

/// Errors returned by [`crate::TodoClient`].
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("API error {status_code}: {message}")]
    Api { status_code: u16, message: String },

    #[error("Invalid response at '{path}': {source}")]
    Json {
        path: String,
        source: serde_json::Error,
    },

    #[error("Invalid base URL '{0}'")]
    InvalidBaseUrl(String),
}

impl ClientError {
    /// HTTP status of an API error, if the server answered at all.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            ClientError::Api { status_code, .. } => Some(*status_code),
            ClientError::Request(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}
