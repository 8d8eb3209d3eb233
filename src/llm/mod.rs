//! Outbound text generation.

pub mod gemini;
pub mod scrub;

pub use gemini::GeminiClient;
pub use scrub::{sanitize_api_error, scrub_secret_patterns};

use crate::error::LlmError;
use reqwest::Client;
use serde_json::Value;
use std::future::Future;
use std::pin::Pin;
use std::time::Duration;

/// A hosted model that answers a prompt with JSON matching `schema`.
pub trait TextGenerator: Send + Sync {
    /// Provider identifier used in logs.
    fn name(&self) -> &str;

    /// Issue exactly one request and return the raw response text.
    fn generate_json<'a>(
        &'a self,
        prompt: &'a str,
        schema: &'a Value,
    ) -> Pin<Box<dyn Future<Output = Result<String, LlmError>> + Send + 'a>>;
}

/// HTTP client for provider calls.
///
/// Only connecting is bounded; a started generation runs until the provider
/// answers.
pub fn build_provider_client() -> Client {
    Client::builder()
        .connect_timeout(Duration::from_secs(10))
        .pool_max_idle_per_host(2)
        .pool_idle_timeout(Duration::from_secs(90))
        .tcp_keepalive(Duration::from_secs(60))
        .build()
        .unwrap_or_else(|_| Client::new())
}
