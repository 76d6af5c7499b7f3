/*
[INPUT]:  Failures from reqwest, serde and the workflow API itself
[OUTPUT]: WorkflowError enum and crate-wide Result alias
[POS]:    HTTP layer - error definitions
[UPDATE]: When new failure classes need to be distinguished
*/

use thiserror::Error;

#[derive(Error, Debug)]
pub enum WorkflowError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-2xx answer from the API, with the server's own message when the
    /// body carried one.
    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl WorkflowError {
    pub fn api_error(status: u16, message: impl Into<String>) -> Self {
        WorkflowError::Api {
            status,
            message: message.into(),
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            WorkflowError::Api { status, .. } => Some(*status),
            WorkflowError::Http(err) => err.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// True for 401/403 answers, where a fresh token is the fix.
    pub fn is_auth_error(&self) -> bool {
        matches!(self.status(), Some(401) | Some(403))
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }
}

pub type Result<T> = std::result::Result<T, WorkflowError>;
