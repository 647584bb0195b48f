//! Error types shared by the client.
//!
//! - [`ApiError`] - REST backend failures (network, HTTP status, decoding)
//! - [`NavigationError`] - navigation stack (browser history) failures

use thiserror::Error;

/// Errors returned by REST backend calls.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Browser window not available.
    #[error("Browser window not available")]
    NoWindow,
    /// The request never produced a response (offline, CORS, DNS).
    #[error("Network error: {0}")]
    Network(String),
    /// The session cookie is missing or expired.
    #[error("Please sign in again")]
    Unauthorized,
    /// Non-2xx response other than 401.
    #[error("Server error ({status}): {message}")]
    Http { status: u16, message: String },
    /// The response body did not match the expected shape.
    #[error("Unexpected response: {0}")]
    Decode(String),
    /// The request exceeded the configured timeout.
    #[error("Request timed out")]
    Timeout,
    /// The request was aborted because its owner went away.
    #[error("Request cancelled")]
    Aborted,
}

impl ApiError {
    /// Map an HTTP status and body text into an error.
    pub fn from_status(status: u16, body: &str) -> Self {
        if status == 401 {
            return Self::Unauthorized;
        }
        let message = serde_json::from_str::<ErrorBody>(body)
            .map(|b| b.message)
            .unwrap_or_else(|_| body.trim().chars().take(200).collect());
        Self::Http { status, message }
    }

    /// Aborted requests are expected on close and should not be reported.
    pub fn is_silent(&self) -> bool {
        matches!(self, Self::Aborted)
    }
}

#[derive(serde::Deserialize)]
struct ErrorBody {
    message: String,
}

/// Errors from a navigation stack implementation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavigationError {
    /// No history object to talk to.
    #[error("navigation history unavailable")]
    Unavailable,
    /// The host refused the push or back operation.
    #[error("navigation rejected: {0}")]
    Rejected(String),
}
