//! Analysis Client Trait
//!
//! The interface the session state machine depends on. A single
//! authenticated implementation is constructed at startup and injected into
//! the session, so tests can substitute a mock. Both calls are stateless at
//! the service boundary: every request carries the full document (and, for
//! `ask`, the full prior transcript).

use async_trait::async_trait;

use clauselens_core::{AnalysisResult, ChatMessage, DocumentSource};

use crate::error::{AnalysisError, ChatError};

/// Trait implemented by the hosted model client.
#[async_trait]
pub trait AnalysisClient: Send + Sync {
    /// Returns the client name for identification.
    fn name(&self) -> &'static str;

    /// Returns the model being used.
    fn model(&self) -> &str;

    /// Analyze a document into clauses and a summary.
    ///
    /// Single attempt; the caller owns any upload-size ceiling and there is
    /// no client-side chunking or caching.
    async fn analyze(&self, document: &DocumentSource)
        -> Result<AnalysisResult, AnalysisError>;

    /// Answer a question grounded strictly in the document.
    ///
    /// `history` is the prior transcript in original order; the new question
    /// travels as the final user turn. Does not mutate the transcript — the
    /// caller appends both the question and the answer.
    async fn ask(
        &self,
        document: &DocumentSource,
        history: &[ChatMessage],
        question: &str,
    ) -> Result<String, ChatError>;
}
