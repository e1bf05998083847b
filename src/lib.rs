//! ClauseLens
//!
//! Legal document analysis and grounded Q&A over a hosted LLM. A document is
//! uploaded once per session, analyzed into risk-labeled clauses plus a
//! summary, and then questioned — with every answer grounded strictly in the
//! uploaded text.
//!
//! This crate is the facade over the workspace:
//! - `clauselens-core` — document, analysis, and transcript types
//! - `clauselens-llm` — the model client (Gemini `generateContent`)
//! - `clauselens-session` — the session state machine
//!
//! ```no_run
//! use std::sync::Arc;
//! use clauselens::{GeminiClient, Session};
//!
//! # async fn run() {
//! let session = Session::new(Arc::new(GeminiClient::from_env()));
//! # }
//! ```

use std::sync::Arc;

// Re-export main types
pub use clauselens_core::{
    AnalysisResult, ChatMessage, ChatRole, Clause, DocumentSource, DocumentSummary, RiskLevel,
    SessionError, SessionResult,
};
pub use clauselens_llm::{
    AnalysisClient, AnalysisError, ChatError, GeminiClient, ModelConfig, NOT_IN_DOCUMENT_ANSWER,
};
pub use clauselens_session::{
    Session, SessionLimits, SessionPhase, SessionSnapshot, SessionView, CHAT_FALLBACK_ANSWER,
};

/// Build a session backed by the hosted model, credential from the
/// environment. One client instance per process, reused across calls.
pub fn session_from_env() -> Session {
    Session::new(Arc::new(GeminiClient::from_env()))
}
