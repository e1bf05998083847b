//! Model Call Errors
//!
//! Error taxonomy for the two outbound calls. `AnalysisError` covers the
//! analyze path and is surfaced at the session boundary as a display-ready
//! message; `ChatError` covers the ask path and is swallowed by the caller
//! into a fixed fallback answer. Neither is retried.

use thiserror::Error;

/// Errors from the document analysis call.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnalysisError {
    /// API key missing or rejected
    #[error("Authentication failed: {message}")]
    AuthenticationFailed { message: String },

    /// Service rate limit hit
    #[error("Rate limited: {message}")]
    RateLimited { message: String },

    /// The request itself was malformed
    #[error("Invalid request: {message}")]
    InvalidRequest { message: String },

    /// Service-side failure
    #[error("Analysis service error: {message}")]
    ServerError {
        message: String,
        status: Option<u16>,
    },

    /// Transport-level failure
    #[error("Network error: {message}")]
    Network { message: String },

    /// The configured request timeout expired
    #[error("The document analysis timed out. Please try a smaller file or a clearer PDF.")]
    Timeout,

    /// The service answered but carried no usable payload
    #[error("No data returned from analysis engine.")]
    EmptyResponse,

    /// Response body did not match the declared schema, even after cleanup
    #[error("Could not understand the analysis response: {message}")]
    Parse { message: String },
}

impl AnalysisError {
    /// Translate a non-200 HTTP status into an analysis error.
    pub fn from_status(status: u16, body: &str) -> Self {
        match status {
            401 | 403 => AnalysisError::AuthenticationFailed {
                message: format!("HTTP {}", status),
            },
            429 => AnalysisError::RateLimited {
                message: body.to_string(),
            },
            400 => AnalysisError::InvalidRequest {
                message: body.to_string(),
            },
            500..=599 => AnalysisError::ServerError {
                message: body.to_string(),
                status: Some(status),
            },
            _ => AnalysisError::ServerError {
                message: format!("HTTP {}: {}", status, body),
                status: Some(status),
            },
        }
    }
}

/// Errors from the grounded Q&A call.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChatError {
    /// API key missing or rejected
    #[error("Authentication failed: {message}")]
    AuthenticationFailed { message: String },

    /// Service rate limit hit
    #[error("Rate limited: {message}")]
    RateLimited { message: String },

    /// The request itself was malformed
    #[error("Invalid request: {message}")]
    InvalidRequest { message: String },

    /// Service-side failure
    #[error("Chat service error: {message}")]
    ServerError {
        message: String,
        status: Option<u16>,
    },

    /// Transport-level failure
    #[error("Network error: {message}")]
    Network { message: String },

    /// The configured request timeout expired
    #[error("The answer timed out")]
    Timeout,
}

impl ChatError {
    /// Translate a non-200 HTTP status into a chat error.
    pub fn from_status(status: u16, body: &str) -> Self {
        match status {
            401 | 403 => ChatError::AuthenticationFailed {
                message: format!("HTTP {}", status),
            },
            429 => ChatError::RateLimited {
                message: body.to_string(),
            },
            400 => ChatError::InvalidRequest {
                message: body.to_string(),
            },
            500..=599 => ChatError::ServerError {
                message: body.to_string(),
                status: Some(status),
            },
            _ => ChatError::ServerError {
                message: format!("HTTP {}: {}", status, body),
                status: Some(status),
            },
        }
    }
}

/// Convert AnalysisError to a display string for the session boundary
impl From<AnalysisError> for String {
    fn from(err: AnalysisError) -> String {
        err.to_string()
    }
}

/// Convert ChatError to a display string
impl From<ChatError> for String {
    fn from(err: ChatError) -> String {
        err.to_string()
    }
}
