//! ClauseLens LLM
//!
//! The model client for document analysis and grounded Q&A:
//! - [`AnalysisClient`] — the trait the session depends on, substitutable
//!   with a mock in tests
//! - [`GeminiClient`] — the hosted-model implementation (Gemini
//!   `generateContent` REST API)
//! - Fixed prompt templates, the declared response schema, and the
//!   one-shot response sanitizer

pub mod client;
pub mod config;
pub mod error;
pub mod gemini;
pub mod http_client;
pub mod prompts;
pub mod sanitize;
pub mod schema;

// Re-export main types
pub use client::AnalysisClient;
pub use config::ModelConfig;
pub use error::{AnalysisError, ChatError};
pub use gemini::{GeminiClient, NOT_IN_DOCUMENT_ANSWER};
pub use http_client::build_http_client;
pub use schema::{analysis_response_schema, ResponseSchema};
