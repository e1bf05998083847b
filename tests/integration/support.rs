//! Shared mock clients and fixtures for the integration tests.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Notify;

use clauselens::{
    AnalysisClient, AnalysisError, AnalysisResult, ChatError, ChatMessage, Clause,
    DocumentSource, DocumentSummary, RiskLevel, Session, SessionPhase,
};

/// The 2-clause mock lease from the protocol's worked example.
pub fn lease_analysis() -> AnalysisResult {
    AnalysisResult {
        title: "Lease".to_string(),
        clauses: vec![Clause {
            id: "1.1".to_string(),
            original_text: "Rent is due monthly.".to_string(),
            simple_explanation: "Pay rent every month.".to_string(),
            risk_level: RiskLevel::Safe,
            risk_justification: "Standard term.".to_string(),
            obligations: vec!["Pay rent monthly".to_string()],
            rights: vec![],
        }],
        summary: DocumentSummary {
            overview: "Simple lease.".to_string(),
            key_risks: vec![],
            suggested_actions: vec!["Review payment schedule".to_string()],
            critical_clauses: vec!["1.1".to_string()],
        },
    }
}

pub fn lease_document() -> DocumentSource {
    DocumentSource::from_bytes(b"Rent is due monthly.", "text/plain")
}

/// Configurable mock model client.
///
/// - `analysis: None` fails the analyze call
/// - `answer: None` fails the ask call
/// - `gate: Some(..)` blocks each call until the test notifies
pub struct MockClient {
    pub analysis: Option<AnalysisResult>,
    pub answer: Option<String>,
    pub gate: Option<Arc<Notify>>,
}

impl MockClient {
    pub fn happy() -> Self {
        Self {
            analysis: Some(lease_analysis()),
            answer: Some("Monthly.".to_string()),
            gate: None,
        }
    }

    pub fn failing_chat() -> Self {
        Self {
            answer: None,
            ..Self::happy()
        }
    }

    pub fn gated(gate: Arc<Notify>) -> Self {
        Self {
            gate: Some(gate),
            ..Self::happy()
        }
    }
}

#[async_trait]
impl AnalysisClient for MockClient {
    fn name(&self) -> &'static str {
        "mock"
    }

    fn model(&self) -> &str {
        "mock-model"
    }

    async fn analyze(&self, _document: &DocumentSource) -> Result<AnalysisResult, AnalysisError> {
        if let Some(gate) = &self.gate {
            gate.notified().await;
        }
        self.analysis.clone().ok_or(AnalysisError::EmptyResponse)
    }

    async fn ask(
        &self,
        _document: &DocumentSource,
        _history: &[ChatMessage],
        _question: &str,
    ) -> Result<String, ChatError> {
        if let Some(gate) = &self.gate {
            gate.notified().await;
        }
        self.answer.clone().ok_or(ChatError::Network {
            message: "connection refused".to_string(),
        })
    }
}

/// Mock whose answers are a pure function of the inputs, for replay tests.
pub struct DeterministicClient;

#[async_trait]
impl AnalysisClient for DeterministicClient {
    fn name(&self) -> &'static str {
        "deterministic"
    }

    fn model(&self) -> &str {
        "deterministic-model"
    }

    async fn analyze(&self, _document: &DocumentSource) -> Result<AnalysisResult, AnalysisError> {
        Ok(lease_analysis())
    }

    async fn ask(
        &self,
        document: &DocumentSource,
        history: &[ChatMessage],
        question: &str,
    ) -> Result<String, ChatError> {
        let replay: Vec<&str> = history.iter().map(|m| m.content.as_str()).collect();
        Ok(format!(
            "doc={} history=[{}] q={}",
            document.mime_type,
            replay.join(";"),
            question
        ))
    }
}

/// Spin until the session reaches the given phase.
pub async fn wait_for_phase(session: &Session, phase: SessionPhase) {
    loop {
        if session.snapshot().await.phase == phase {
            return;
        }
        tokio::task::yield_now().await;
    }
}
