//! Google Gemini `generateContent` client with structured (JSON schema)
//! output.
//!
//! The API key comes only from the caller; environment lookup belongs to
//! [`Config::apply_env_overrides`].

use super::{TextGenerator, build_provider_client, sanitize_api_error};
use crate::config::Config;
use crate::error::LlmError;
use reqwest::Client;
use serde_json::Value;
use std::future::Future;
use std::pin::Pin;

mod types;
use types::{Content, GenerateContentRequest, GenerateContentResponse, GenerationConfig, Part};

const PROVIDER: &str = "Gemini";

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

pub struct GeminiClient {
    api_key: Option<String>,
    base_url: String,
    model: String,
    temperature: Option<f64>,
    client: Client,
}

impl GeminiClient {
    pub fn new(api_key: Option<&str>, model: &str) -> Self {
        let api_key = api_key
            .filter(|key| !key.trim().is_empty())
            .map(String::from);

        Self {
            api_key,
            base_url: DEFAULT_BASE_URL.to_string(),
            model: model.to_string(),
            temperature: None,
            client: build_provider_client(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.api_key.as_deref(), &config.model)
            .with_base_url(&config.api_base_url)
            .with_temperature(config.temperature)
    }

    /// Point the client at another host (proxies, test servers).
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    pub fn with_temperature(mut self, temperature: Option<f64>) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn model_name(model: &str) -> String {
        if model.starts_with("models/") {
            model.to_string()
        } else {
            format!("models/{model}")
        }
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/{}:generateContent",
            self.base_url,
            Self::model_name(&self.model)
        )
    }

    fn build_request(&self, prompt: &str, schema: &Value) -> GenerateContentRequest {
        GenerateContentRequest {
            contents: vec![Content {
                role: Some("user".to_string()),
                parts: vec![Part::text(prompt)],
            }],
            generation_config: GenerationConfig {
                temperature: self.temperature,
                response_mime_type: "application/json",
                response_schema: schema.clone(),
            },
        }
    }

    fn extract_text(result: &GenerateContentResponse) -> Result<String, LlmError> {
        let text = result
            .candidates
            .as_ref()
            .and_then(|c| c.first())
            .and_then(|candidate| candidate.content.as_ref())
            .map(|content| {
                content
                    .parts
                    .iter()
                    .filter_map(|part| part.text.as_deref())
                    .collect::<String>()
            })
            .unwrap_or_default();

        if text.trim().is_empty() {
            return Err(LlmError::EmptyResponse { provider: PROVIDER });
        }

        Ok(text)
    }

    async fn call_api(&self, prompt: &str, schema: &Value) -> Result<String, LlmError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or(LlmError::MissingApiKey { provider: PROVIDER })?;

        let request = self.build_request(prompt, schema);
        let transport = |source: reqwest::Error| LlmError::Transport {
            provider: PROVIDER,
            source,
        };

        tracing::debug!(model = %self.model, "sending generateContent request");
        let response = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", api_key)
            .json(&request)
            .send()
            .await
            .map_err(transport)?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<failed to read error body>".to_string());
            return Err(LlmError::Status {
                provider: PROVIDER,
                status: status.as_u16(),
                message: sanitize_api_error(&body),
            });
        }

        let result: GenerateContentResponse = response.json().await.map_err(transport)?;
        if let Some(err) = result.error.as_ref() {
            return Err(LlmError::Api {
                provider: PROVIDER,
                message: sanitize_api_error(&err.message),
            });
        }

        Self::extract_text(&result)
    }
}

impl TextGenerator for GeminiClient {
    fn name(&self) -> &str {
        "gemini"
    }

    fn generate_json<'a>(
        &'a self,
        prompt: &'a str,
        schema: &'a Value,
    ) -> Pin<Box<dyn Future<Output = Result<String, LlmError>> + Send + 'a>> {
        Box::pin(self.call_api(prompt, schema))
    }
}
