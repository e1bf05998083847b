//! Gemini Client
//!
//! Implementation of the [`AnalysisClient`] trait against the Gemini
//! `generateContent` REST API. Every request is self-contained: the inline
//! document travels with the fixed instruction text (and, for Q&A, the full
//! prior transcript), so there is no server-side session to manage.

use async_trait::async_trait;
use serde::Deserialize;
use tracing::{debug, warn};

use clauselens_core::{AnalysisResult, ChatMessage, ChatRole, DocumentSource};

use crate::client::AnalysisClient;
use crate::config::ModelConfig;
use crate::error::{AnalysisError, ChatError};
use crate::http_client::build_http_client;
use crate::prompts::{ANALYSIS_INSTRUCTIONS, GROUNDING_INSTRUCTIONS};
use crate::sanitize::parse_with_cleanup;
use crate::schema::analysis_response_schema;

/// Default Gemini API endpoint
const GEMINI_API_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Answer used when the service returns an empty chat payload
pub const NOT_IN_DOCUMENT_ANSWER: &str = "This information is not mentioned in the document.";

/// Transport outcome before per-call error translation
enum TransportError {
    Timeout,
    Network(String),
}

/// Gemini client
pub struct GeminiClient {
    config: ModelConfig,
    client: reqwest::Client,
}

impl GeminiClient {
    /// Create a new client with the given configuration.
    pub fn new(config: ModelConfig) -> Self {
        let client = build_http_client(std::time::Duration::from_secs(config.timeout_secs));
        Self { config, client }
    }

    /// Create a client configured from the environment.
    pub fn from_env() -> Self {
        Self::new(ModelConfig::from_env())
    }

    /// Get the API base URL
    fn base_url(&self) -> &str {
        self.config.base_url.as_deref().unwrap_or(GEMINI_API_URL)
    }

    /// Full endpoint for the configured model
    fn endpoint(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.base_url(),
            self.config.model
        )
    }

    /// The inline document part carried by every request
    fn document_part(document: &DocumentSource) -> serde_json::Value {
        serde_json::json!({
            "inlineData": {
                "mimeType": document.mime_type,
                "data": document.data,
            }
        })
    }

    /// Build the request body for the analysis call
    fn build_analysis_body(&self, document: &DocumentSource) -> serde_json::Value {
        serde_json::json!({
            "contents": [{
                "role": "user",
                "parts": [
                    Self::document_part(document),
                    { "text": ANALYSIS_INSTRUCTIONS },
                ]
            }],
            "generationConfig": {
                "responseMimeType": "application/json",
                "responseSchema": analysis_response_schema(),
                "maxOutputTokens": self.config.max_output_tokens,
                "temperature": self.config.temperature,
            }
        })
    }

    /// Build the request body for the Q&A call: grounding turn, prior
    /// transcript in original order, then the new question as the final turn.
    fn build_chat_body(
        &self,
        document: &DocumentSource,
        history: &[ChatMessage],
        question: &str,
    ) -> serde_json::Value {
        let mut contents = vec![serde_json::json!({
            "role": "user",
            "parts": [
                Self::document_part(document),
                { "text": GROUNDING_INSTRUCTIONS },
            ]
        })];

        for msg in history {
            contents.push(serde_json::json!({
                "role": Self::wire_role(msg.role),
                "parts": [{ "text": msg.content }],
            }));
        }

        contents.push(serde_json::json!({
            "role": "user",
            "parts": [{ "text": question }],
        }));

        serde_json::json!({
            "contents": contents,
            "generationConfig": {
                "maxOutputTokens": self.config.max_output_tokens,
                "temperature": self.config.temperature,
            }
        })
    }

    /// Map transcript roles onto the service's role vocabulary
    fn wire_role(role: ChatRole) -> &'static str {
        match role {
            ChatRole::User => "user",
            ChatRole::Assistant => "model",
        }
    }

    /// Send a request body, returning the HTTP status and raw body text.
    async fn post_generate(
        &self,
        api_key: &str,
        body: &serde_json::Value,
    ) -> Result<(u16, String), TransportError> {
        let response = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", api_key)
            .header("Content-Type", "application/json")
            .json(body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    TransportError::Timeout
                } else {
                    TransportError::Network(e.to_string())
                }
            })?;

        let status = response.status().as_u16();
        let body_text = response.text().await.map_err(|e| {
            if e.is_timeout() {
                TransportError::Timeout
            } else {
                TransportError::Network(e.to_string())
            }
        })?;

        Ok((status, body_text))
    }

    /// Concatenated text parts of the first candidate, if any.
    fn extract_text(response: &GenerateContentResponse) -> Option<String> {
        let candidate = response.candidates.first()?;
        let parts = &candidate.content.as_ref()?.parts;
        let text: String = parts
            .iter()
            .filter_map(|p| p.text.as_deref())
            .collect::<Vec<_>>()
            .join("");
        if text.is_empty() {
            None
        } else {
            Some(text)
        }
    }
}

#[async_trait]
impl AnalysisClient for GeminiClient {
    fn name(&self) -> &'static str {
        "gemini"
    }

    fn model(&self) -> &str {
        &self.config.model
    }

    async fn analyze(
        &self,
        document: &DocumentSource,
    ) -> Result<AnalysisResult, AnalysisError> {
        let api_key = self.config.api_key.clone().ok_or_else(|| {
            AnalysisError::AuthenticationFailed {
                message: "API key not configured".to_string(),
            }
        })?;

        debug!(model = %self.config.model, mime_type = %document.mime_type, "sending analysis request");
        let body = self.build_analysis_body(document);

        let (status, body_text) =
            self.post_generate(&api_key, &body)
                .await
                .map_err(|e| match e {
                    TransportError::Timeout => AnalysisError::Timeout,
                    TransportError::Network(message) => AnalysisError::Network { message },
                })?;

        if status != 200 {
            return Err(AnalysisError::from_status(status, &body_text));
        }

        let response: GenerateContentResponse =
            serde_json::from_str(&body_text).map_err(|e| AnalysisError::Parse {
                message: format!("Failed to parse response envelope: {}", e),
            })?;

        let text = Self::extract_text(&response).ok_or(AnalysisError::EmptyResponse)?;
        parse_with_cleanup(&text)
    }

    async fn ask(
        &self,
        document: &DocumentSource,
        history: &[ChatMessage],
        question: &str,
    ) -> Result<String, ChatError> {
        let api_key =
            self.config.api_key.clone().ok_or_else(|| ChatError::AuthenticationFailed {
                message: "API key not configured".to_string(),
            })?;

        debug!(model = %self.config.model, turns = history.len(), "sending chat request");
        let body = self.build_chat_body(document, history, question);

        let (status, body_text) =
            self.post_generate(&api_key, &body)
                .await
                .map_err(|e| match e {
                    TransportError::Timeout => ChatError::Timeout,
                    TransportError::Network(message) => ChatError::Network { message },
                })?;

        if status != 200 {
            return Err(ChatError::from_status(status, &body_text));
        }

        let response: GenerateContentResponse =
            serde_json::from_str(&body_text).map_err(|e| ChatError::ServerError {
                message: format!("Malformed response envelope: {}", e),
                status: None,
            })?;

        match Self::extract_text(&response) {
            Some(text) => Ok(text),
            None => {
                warn!("chat response carried no text, using fixed answer");
                Ok(NOT_IN_DOCUMENT_ANSWER.to_string())
            }
        }
    }
}

/// Response envelope from the generateContent API
#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
struct Part {
    text: Option<String>,
}
