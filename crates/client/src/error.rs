//! Error types for the search client

use serde_json::Value;
use thiserror::Error;

/// Result type for client operations
pub type Result<T> = std::result::Result<T, ClientError>;

/// Longest slice of a raw error body kept in a status error
const MAX_ERROR_BODY_CHARS: usize = 200;

/// Errors that can occur while talking to the backend
#[derive(Error, Debug)]
pub enum ClientError {
    /// Network unreachable, connection reset or timeout exceeded
    #[error("Transport error: {0}")]
    Transport(#[source] reqwest::Error),

    /// Backend answered with a non-success HTTP status
    #[error("Backend returned HTTP {status}: {message}")]
    Status { status: u16, message: String },

    /// Body was not JSON or lacked expected fields
    #[error("Failed to decode response: {0}")]
    Decode(#[source] serde_json::Error),

    /// Client could not be constructed
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Where a failure originated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    Transport,
    Protocol,
    Decode,
    Config,
}

impl ClientError {
    /// Build a status error, pulling the backend's message out of the body
    ///
    /// The backend reports failures as `{"error": "..."}` or `{"msg": "..."}`.
    /// Anything else is kept as truncated raw text.
    pub(crate) fn status(status: u16, body: &[u8]) -> Self {
        let message = serde_json::from_slice::<Value>(body)
            .ok()
            .and_then(|value| {
                ["error", "msg"]
                    .iter()
                    .find_map(|key| value.get(key).and_then(Value::as_str).map(str::to_string))
            })
            .unwrap_or_else(|| {
                let text = String::from_utf8_lossy(body);
                let text = text.trim();
                if text.chars().count() > MAX_ERROR_BODY_CHARS {
                    let truncated: String = text.chars().take(MAX_ERROR_BODY_CHARS).collect();
                    format!("{truncated}...")
                } else {
                    text.to_string()
                }
            });

        Self::Status { status, message }
    }

    pub fn kind(&self) -> FailureKind {
        match self {
            Self::Transport(_) => FailureKind::Transport,
            Self::Status { .. } => FailureKind::Protocol,
            Self::Decode(_) => FailureKind::Decode,
            Self::Config(_) => FailureKind::Config,
        }
    }

    /// Whether the request ran past the configured timeout
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Transport(e) if e.is_timeout())
    }

    /// HTTP status code for protocol errors
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}
