//! ClauseLens Core
//!
//! Foundation types shared across the ClauseLens workspace:
//! - Document value type ([`DocumentSource`])
//! - Analysis data model ([`AnalysisResult`], [`Clause`], [`DocumentSummary`])
//! - Chat transcript types ([`ChatMessage`], [`ChatRole`])
//! - Session-level error types ([`SessionError`])
//!
//! These types are dependency-light (serde + thiserror + chrono) so that both
//! the model client and the session state machine can build on them without
//! pulling in network or runtime dependencies.

pub mod analysis;
pub mod chat;
pub mod document;
pub mod error;

// Re-export main types
pub use analysis::{AnalysisResult, Clause, DocumentSummary, RiskLevel};
pub use chat::{ChatMessage, ChatRole};
pub use document::DocumentSource;
pub use error::{SessionError, SessionResult};
