use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::json;
use std::time::Duration;
use tracing::{error, info, warn};

use crate::config::ProviderConfig;
use crate::error::{Error, Result};

pub const TEMPERATURE: f64 = 0.7;
pub const MAX_TOKENS: u32 = 2000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionRequest {
    pub prompt: String,
    pub system_message: String,
    pub model_id: String,
}

impl CompletionRequest {
    pub fn new(prompt: impl Into<String>, system_message: impl Into<String>, model_id: impl Into<String>) -> Self {
        Self { prompt: prompt.into(), system_message: system_message.into(), model_id: model_id.into() }
    }
}

/// A chat-completion backend.
#[async_trait]
pub trait ProviderGateway: Send + Sync {
    fn name(&self) -> &str;

    fn default_model(&self) -> &str;

    /// Raw text of the first choice; empty when the backend returned none.
    async fn complete(&self, request: &CompletionRequest) -> Result<String>;
}

/// OpenAI-compatible `/chat/completions` client. Both supported backends go
/// through this type; they differ only in their [`ProviderConfig`].
pub struct ChatCompletionClient {
    client: Client,
    config: ProviderConfig,
}

impl ChatCompletionClient {
    pub fn new(config: ProviderConfig, timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_else(|e| {
                warn!("⚠️ Failed to build HTTP client with {:?} timeout, using defaults: {}", timeout, e);
                Client::new()
            });
        Self { client, config }
    }

    pub fn config(&self) -> &ProviderConfig {
        &self.config
    }
}

#[async_trait]
impl ProviderGateway for ChatCompletionClient {
    fn name(&self) -> &str {
        &self.config.display_name
    }

    fn default_model(&self) -> &str {
        &self.config.default_model_id
    }

    async fn complete(&self, request: &CompletionRequest) -> Result<String> {
        if self.config.api_key.trim().is_empty() {
            return Err(Error::Configuration(format!("missing credential for {}", self.config.display_name)));
        }

        info!("🤖 [{}] model: {}, prompt length: {} chars", self.config.display_name, request.model_id, request.prompt.len());

        let payload = json!({
            "model": request.model_id,
            "messages": [
                {"role": "system", "content": request.system_message},
                {"role": "user", "content": request.prompt}
            ],
            "temperature": TEMPERATURE,
            "max_tokens": MAX_TOKENS
        });

        let mut builder = self.client
            .post(&self.config.endpoint_url)
            .bearer_auth(&self.config.api_key)
            .json(&payload);
        if let Some(attribution) = &self.config.attribution {
            builder = builder
                .header("HTTP-Referer", &attribution.referer)
                .header("X-Title", &attribution.title);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| Error::Provider(format!("{} request failed: {}", self.config.display_name, e)))?;

        let status = response.status();
        let response_text = response.text().await.map_err(|e| Error::Provider(e.to_string()))?;
        info!("📥 [{}] response status: {}", self.config.display_name, status);

        if !status.is_success() {
            let message = serde_json::from_str::<ErrorEnvelope>(&response_text)
                .ok()
                .and_then(|e| e.error)
                .and_then(|e| e.message)
                .unwrap_or_else(|| status.canonical_reason().unwrap_or("unknown error").to_string());
            error!("❌ [{}] API error {}: {}", self.config.display_name, status, message);
            return Err(Error::Provider(format!("{} API error: {}", self.config.display_name, message)));
        }

        let parsed: ChatResponse = serde_json::from_str(&response_text)
            .map_err(|e| Error::Provider(format!("failed to decode {} response: {}", self.config.display_name, e)))?;

        if let Some(usage) = &parsed.usage {
            info!(
                "💰 [{}] tokens: {} (prompt: {}, completion: {})",
                self.config.display_name, usage.total_tokens, usage.prompt_tokens, usage.completion_tokens
            );
        }

        Ok(parsed
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message)
            .and_then(|m| m.content)
            .unwrap_or_default())
    }
}

// --- Response Parsing Helpers ---

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
    usage: Option<Usage>,
}

#[derive(Debug, Deserialize)]
struct Choice { message: Option<Message> }

#[derive(Debug, Deserialize)]
struct Message { content: Option<String> }

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct Usage {
    prompt_tokens: u64,
    completion_tokens: u64,
    total_tokens: u64,
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope { error: Option<ErrorBody> }

#[derive(Debug, Deserialize)]
struct ErrorBody { message: Option<String> }
