//! HTTP Client Factory
//!
//! Builds the reqwest client used for model calls, with the configured
//! per-request timeout applied. One client is built per provider instance
//! and reused across calls.

use std::time::Duration;

/// Build a `reqwest::Client` with the given request timeout.
pub fn build_http_client(timeout: Duration) -> reqwest::Client {
    reqwest::Client::builder()
        .timeout(timeout)
        .build()
        .expect("failed to build reqwest client")
}
