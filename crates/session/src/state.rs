//! Session State Types
//!
//! The lifecycle phase, the Ready sub-view, and the snapshot handed to the
//! presentation layer. Switching sub-views is not a transition of
//! consequence; only the phase gates what actions are valid.

use serde::{Deserialize, Serialize};

use clauselens_core::{AnalysisResult, ChatMessage, DocumentSource};

/// Lifecycle phase of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionPhase {
    /// No document loaded
    Empty,
    /// Analysis request in flight
    Analyzing,
    /// Analysis present; Q&A available
    Ready,
}

impl SessionPhase {
    /// Whether a new upload is accepted in this phase.
    pub fn accepts_upload(&self) -> bool {
        matches!(self, SessionPhase::Empty)
    }

    /// Whether questions can be asked in this phase.
    pub fn accepts_questions(&self) -> bool {
        matches!(self, SessionPhase::Ready)
    }
}

impl std::fmt::Display for SessionPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SessionPhase::Empty => write!(f, "empty"),
            SessionPhase::Analyzing => write!(f, "analyzing"),
            SessionPhase::Ready => write!(f, "ready"),
        }
    }
}

/// Which Ready sub-view is active. Freely switchable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionView {
    Clauses,
    Summary,
    Chat,
}

impl Default for SessionView {
    fn default() -> Self {
        Self::Clauses
    }
}

/// A cloned view of the session for rendering. Cheap to take; holds no lock.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionSnapshot {
    /// Current lifecycle phase
    pub phase: SessionPhase,
    /// Active Ready sub-view
    pub view: SessionView,
    /// The uploaded document, present from Ready until reset
    pub document: Option<DocumentSource>,
    /// The analysis result, present from Ready until reset
    pub analysis: Option<AnalysisResult>,
    /// Q&A transcript in insertion order
    pub transcript: Vec<ChatMessage>,
    /// Display-ready message from the last failed analysis, if any
    pub error: Option<String>,
}
