//! Response Sanitizer
//!
//! The service is asked to emit schema-conforming JSON but may wrap it in
//! markdown fences anyway. Policy: parse directly first; on failure, strip
//! known wrapping markers and retry exactly once. No deeper repair
//! (bracket balancing etc.) is attempted.

use serde::de::DeserializeOwned;
use tracing::warn;

use crate::error::AnalysisError;

/// Strip markdown code fences and surrounding whitespace.
pub fn strip_fences(raw: &str) -> String {
    raw.replace("```json", "").replace("```", "").trim().to_string()
}

/// Parse a model payload, with the one-shot cleanup retry.
pub fn parse_with_cleanup<T: DeserializeOwned>(raw: &str) -> Result<T, AnalysisError> {
    match serde_json::from_str(raw) {
        Ok(value) => Ok(value),
        Err(first_err) => {
            warn!("direct parse failed ({first_err}), retrying after cleanup");
            let cleaned = strip_fences(raw);
            serde_json::from_str(&cleaned).map_err(|retry_err| AnalysisError::Parse {
                message: retry_err.to_string(),
            })
        }
    }
}
