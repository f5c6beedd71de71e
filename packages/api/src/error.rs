//! # Error types for the API client
//!
//! [`ApiError`] covers everything that can go wrong talking to the server:
//! the transport failing, the server answering with a non-2xx status, or a
//! 2xx body that does not match the expected shape. [`ValidationError`] covers
//! payloads rejected locally before any request is made.
//!
//! The server reports failures as `{"detail": ...}`. [`extract_detail`] turns
//! that body into one human-readable line; [`ApiError::user_message`] falls
//! back to [`GENERIC_ERROR`] when there is nothing better to show.

use serde_json::Value;
use thiserror::Error;

/// Message shown when a failure carries no server-provided detail.
pub const GENERIC_ERROR: &str = "An unexpected error occurred.";

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Server returned {status}: {}", .detail.as_deref().unwrap_or(GENERIC_ERROR))]
    Server { status: u16, detail: Option<String> },

    #[error("Unexpected response body: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ApiError {
    /// Server-provided detail, if the failure carried one.
    pub fn detail(&self) -> Option<&str> {
        match self {
            ApiError::Server { detail, .. } => detail.as_deref(),
            _ => None,
        }
    }

    /// Text suitable for an alert body.
    pub fn user_message(&self) -> String {
        self.detail().unwrap_or(GENERIC_ERROR).to_string()
    }

    /// Whether the server rejected the bearer token.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Server { status: 401, .. })
    }
}

/// Pull a readable message out of an error body.
///
/// Handles `{"detail": "text"}` and the request-validation shape
/// `{"detail": [{"msg": "..."}, ...]}`, whose messages are joined with `"; "`.
pub fn extract_detail(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    match value.get("detail")? {
        Value::String(text) if !text.trim().is_empty() => Some(text.clone()),
        Value::Array(items) => {
            let messages: Vec<&str> = items
                .iter()
                .filter_map(|item| item.get("msg").and_then(Value::as_str))
                .collect();
            if messages.is_empty() {
                None
            } else {
                Some(messages.join("; "))
            }
        }
        _ => None,
    }
}

/// A payload that failed local checks and was never sent.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Name is required")]
    MissingName,

    #[error("Please enter a valid email")]
    InvalidEmail,

    #[error("Password is required")]
    MissingPassword,

    #[error("Please enter a valid age")]
    InvalidAge,

    #[error("Mood choice {0} is out of range")]
    MoodOutOfRange(usize),

    #[error("Please answer all questions.")]
    Incomplete { missing: Vec<usize> },

    #[error("Answer {value} to question {index} is out of range")]
    AnswerOutOfRange { index: usize, value: u8 },
}
