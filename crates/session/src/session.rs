//! Session Transitions
//!
//! One `Session` per document lifecycle. Transitions lock the state, apply
//! their synchronous part, release the lock across the network await, then
//! re-lock to apply the outcome. A generation counter guards against a late
//! completion mutating a session that was reset while the request was in
//! flight.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;
use tracing::{debug, error, warn};

use clauselens_core::{
    AnalysisResult, ChatMessage, DocumentSource, SessionError, SessionResult,
};
use clauselens_llm::AnalysisClient;

use crate::state::{SessionPhase, SessionSnapshot, SessionView};

/// Assistant turn appended when the answer call fails. The transcript stays
/// balanced and the user can keep asking.
pub const CHAT_FALLBACK_ANSWER: &str = "Verification failed. Please try a simpler question.";

/// Upload limits applied before any state transition or network call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionLimits {
    /// Ceiling on the decoded document size in bytes
    #[serde(default = "default_max_document_bytes")]
    pub max_document_bytes: usize,
}

fn default_max_document_bytes() -> usize {
    8 * 1024 * 1024
}

impl Default for SessionLimits {
    fn default() -> Self {
        Self {
            max_document_bytes: default_max_document_bytes(),
        }
    }
}

/// Mutable session state, guarded by the session mutex.
#[derive(Debug)]
struct Inner {
    phase: SessionPhase,
    view: SessionView,
    document: Option<DocumentSource>,
    analysis: Option<AnalysisResult>,
    transcript: Vec<ChatMessage>,
    error: Option<String>,
    question_pending: bool,
    /// Bumped on every reset; in-flight completions compare against it
    generation: u64,
}

impl Inner {
    fn new() -> Self {
        Self {
            phase: SessionPhase::Empty,
            view: SessionView::default(),
            document: None,
            analysis: None,
            transcript: Vec::new(),
            error: None,
            question_pending: false,
            generation: 0,
        }
    }
}

/// One document-analysis session.
pub struct Session {
    client: Arc<dyn AnalysisClient>,
    limits: SessionLimits,
    inner: Mutex<Inner>,
}

impl Session {
    /// Create a session with default limits.
    pub fn new(client: Arc<dyn AnalysisClient>) -> Self {
        Self::with_limits(client, SessionLimits::default())
    }

    /// Create a session with explicit limits.
    pub fn with_limits(client: Arc<dyn AnalysisClient>, limits: SessionLimits) -> Self {
        Self {
            client,
            limits,
            inner: Mutex::new(Inner::new()),
        }
    }

    /// Take a cloned snapshot for rendering.
    pub async fn snapshot(&self) -> SessionSnapshot {
        let inner = self.inner.lock().await;
        SessionSnapshot {
            phase: inner.phase,
            view: inner.view,
            document: inner.document.clone(),
            analysis: inner.analysis.clone(),
            transcript: inner.transcript.clone(),
            error: inner.error.clone(),
        }
    }

    /// Upload a document and run the analysis.
    ///
    /// Valid only from `Empty`. The size ceiling and media-type allowlist
    /// are checked synchronously before any state changes; guard rejections
    /// and validation failures are returned as errors. An analysis failure
    /// is not an error here: it is recorded as the session's display
    /// message and the session returns to `Empty` with the document
    /// dropped.
    pub async fn upload(&self, document: DocumentSource) -> SessionResult<()> {
        if !document.is_supported_media_type() {
            return Err(SessionError::UnsupportedMediaType(
                document.mime_type.clone(),
            ));
        }
        let actual = document.decoded_len();
        if actual > self.limits.max_document_bytes {
            return Err(SessionError::DocumentTooLarge {
                actual,
                limit: self.limits.max_document_bytes,
            });
        }

        let generation;
        {
            let mut inner = self.inner.lock().await;
            match inner.phase {
                SessionPhase::Analyzing => return Err(SessionError::AnalysisInFlight),
                SessionPhase::Ready => return Err(SessionError::DocumentLoaded),
                SessionPhase::Empty => {}
            }
            inner.phase = SessionPhase::Analyzing;
            inner.error = None;
            generation = inner.generation;
        }

        let outcome = self.client.analyze(&document).await;

        let mut inner = self.inner.lock().await;
        if inner.generation != generation {
            // The session was reset while the request was in flight; the
            // late outcome must not touch the fresh session.
            debug!("discarding stale analysis outcome");
            return Ok(());
        }

        match outcome {
            Ok(result) => {
                debug!(clauses = result.clauses.len(), "analysis complete");
                inner.phase = SessionPhase::Ready;
                inner.view = SessionView::Clauses;
                inner.document = Some(document);
                inner.analysis = Some(result);
                inner.transcript = Vec::new();
            }
            Err(err) => {
                error!("analysis failed: {err}");
                inner.phase = SessionPhase::Empty;
                inner.document = None;
                inner.analysis = None;
                inner.error = Some(err.to_string());
            }
        }
        Ok(())
    }

    /// Ask a question about the analyzed document.
    ///
    /// Valid only from `Ready`, one question at a time. The user turn is
    /// appended before the call goes out; the assistant turn is appended
    /// afterwards with either the real answer or the fixed fallback, so the
    /// transcript always ends up balanced.
    pub async fn ask_question(&self, question: impl Into<String>) -> SessionResult<()> {
        let question = question.into();

        let (document, history, generation);
        {
            let mut inner = self.inner.lock().await;
            if inner.phase != SessionPhase::Ready {
                return Err(SessionError::NotReady);
            }
            if inner.question_pending {
                return Err(SessionError::QuestionPending);
            }
            document = match inner.document.clone() {
                Some(doc) => doc,
                None => return Err(SessionError::NotReady),
            };
            history = inner.transcript.clone();
            inner.question_pending = true;
            inner.transcript.push(ChatMessage::user(question.as_str()));
            generation = inner.generation;
        }

        let answer = match self.client.ask(&document, &history, &question).await {
            Ok(text) => text,
            Err(err) => {
                warn!("chat request failed: {err}");
                CHAT_FALLBACK_ANSWER.to_string()
            }
        };

        let mut inner = self.inner.lock().await;
        if inner.generation != generation {
            debug!("discarding stale answer");
            return Ok(());
        }
        inner.transcript.push(ChatMessage::assistant(answer));
        inner.question_pending = false;
        Ok(())
    }

    /// Discard everything and return to `Empty`. Valid from any phase; a
    /// pending request keeps running but its outcome is ignored.
    pub async fn reset(&self) {
        let mut inner = self.inner.lock().await;
        inner.generation += 1;
        inner.phase = SessionPhase::Empty;
        inner.view = SessionView::default();
        inner.document = None;
        inner.analysis = None;
        inner.transcript.clear();
        inner.error = None;
        inner.question_pending = false;
    }

    /// Switch the Ready sub-view.
    pub async fn set_view(&self, view: SessionView) -> SessionResult<()> {
        let mut inner = self.inner.lock().await;
        if inner.phase != SessionPhase::Ready {
            return Err(SessionError::NotReady);
        }
        inner.view = view;
        Ok(())
    }

    /// Dismiss the recorded analysis error.
    pub async fn clear_error(&self) {
        let mut inner = self.inner.lock().await;
        inner.error = None;
    }
}
