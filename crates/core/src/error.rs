//! Session Error Types
//!
//! Errors raised at the session boundary before any network call is made:
//! upload validation failures and in-flight guard rejections. Model-call
//! errors live in the `clauselens-llm` crate; these are strictly client-local
//! and leave the session state untouched.

use thiserror::Error;

/// Error type for session transitions and upload validation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// Uploaded document exceeds the configured size ceiling
    #[error("Document is too large: {actual} bytes exceeds the {limit} byte limit")]
    DocumentTooLarge { actual: usize, limit: usize },

    /// Uploaded document has a media type the analyzer does not accept
    #[error("Unsupported media type: {0}")]
    UnsupportedMediaType(String),

    /// An analysis request is already in flight for this session
    #[error("An analysis is already in progress")]
    AnalysisInFlight,

    /// A question is already awaiting its answer
    #[error("A question is already awaiting an answer")]
    QuestionPending,

    /// The session already holds an analyzed document
    #[error("A document is already loaded; reset the session first")]
    DocumentLoaded,

    /// The action requires an analyzed document
    #[error("No analyzed document in this session")]
    NotReady,
}

/// Result type alias for session operations
pub type SessionResult<T> = Result<T, SessionError>;

/// Convert SessionError to a display string for boundary layers
impl From<SessionError> for String {
    fn from(err: SessionError) -> String {
        err.to_string()
    }
}
