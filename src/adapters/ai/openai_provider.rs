//! OpenAI Provider - Implementation of AIProvider for OpenAI's chat
//! completions API.
//!
//! # Configuration
//!
//! ```ignore
//! let config = OpenAIConfig::new(api_key)
//!     .with_model("gpt-3.5-turbo")
//!     .with_timeout(Duration::from_secs(20));
//!
//! let provider = OpenAIProvider::new(config)?;
//! ```

use async_trait::async_trait;
use reqwest::{Client, Response};
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tokio::time::sleep;

use crate::ports::{
    AIError, AIProvider, CompletionRequest, CompletionResponse, FinishReason, MessageRole,
    ProviderInfo, TokenUsage,
};

pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo";
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Configuration for the OpenAI provider.
#[derive(Debug, Clone)]
pub struct OpenAIConfig {
    api_key: Secret<String>,
    pub model: String,
    pub base_url: String,
    pub timeout: Duration,
    /// Retries on transient failures, after the first attempt.
    pub max_retries: u32,
}

impl OpenAIConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::from_secret(Secret::new(api_key.into()))
    }

    pub fn from_secret(api_key: Secret<String>) -> Self {
        Self {
            api_key,
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(30),
            max_retries: 1,
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    fn api_key(&self) -> &str {
        self.api_key.expose_secret()
    }
}

/// OpenAI API provider implementation.
pub struct OpenAIProvider {
    config: OpenAIConfig,
    client: Client,
}

impl OpenAIProvider {
    pub fn new(config: OpenAIConfig) -> Result<Self, AIError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| AIError::InvalidRequest(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self { config, client })
    }

    fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.config.base_url.trim_end_matches('/'))
    }

    fn to_openai_request(&self, request: &CompletionRequest) -> OpenAIRequest {
        let system = request.system_prompt.iter().map(|prompt| OpenAIMessage {
            role: "system".to_string(),
            content: prompt.clone(),
        });

        let conversation = request.messages.iter().map(|msg| OpenAIMessage {
            role: match msg.role {
                MessageRole::System => "system",
                MessageRole::User => "user",
                MessageRole::Assistant => "assistant",
            }
            .to_string(),
            content: msg.content.clone(),
        });

        OpenAIRequest {
            model: self.config.model.clone(),
            messages: system.chain(conversation).collect(),
            max_tokens: request.max_tokens,
            temperature: request.temperature,
        }
    }

    async fn send_request(&self, request: &CompletionRequest) -> Result<Response, AIError> {
        self.client
            .post(self.completions_url())
            .bearer_auth(self.config.api_key())
            .json(&self.to_openai_request(request))
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    AIError::Timeout {
                        timeout_secs: self.config.timeout.as_secs() as u32,
                    }
                } else if e.is_connect() {
                    AIError::network(format!("Connection failed: {}", e))
                } else {
                    AIError::network(e.to_string())
                }
            })
    }

    async fn handle_response_status(&self, response: Response) -> Result<Response, AIError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let error_body = response.text().await.unwrap_or_default();

        match status.as_u16() {
            401 | 403 => Err(AIError::AuthenticationFailed),
            429 => Err(AIError::rate_limited(parse_retry_after(&error_body))),
            400 => Err(AIError::InvalidRequest(error_body)),
            500..=599 => Err(AIError::unavailable(format!(
                "Server error {}: {}",
                status, error_body
            ))),
            _ => Err(AIError::network(format!(
                "Unexpected status {}: {}",
                status, error_body
            ))),
        }
    }

    async fn parse_response(&self, response: Response) -> Result<CompletionResponse, AIError> {
        let response = self.handle_response_status(response).await?;

        let openai_response: OpenAIResponse = response
            .json()
            .await
            .map_err(|e| AIError::parse(format!("Failed to parse response: {}", e)))?;

        let choice = openai_response
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| AIError::parse("No choices in response"))?;

        Ok(CompletionResponse {
            content: choice.message.content,
            usage: openai_response
                .usage
                .map(|u| TokenUsage::new(u.prompt_tokens, u.completion_tokens))
                .unwrap_or_default(),
            model: openai_response.model,
            finish_reason: parse_finish_reason(choice.finish_reason.as_deref()),
        })
    }
}

#[async_trait]
impl AIProvider for OpenAIProvider {
    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse, AIError> {
        let mut attempt = 0;

        loop {
            let result = match self.send_request(&request).await {
                Ok(response) => self.parse_response(response).await,
                Err(err) => Err(err),
            };

            match result {
                Ok(completion) => return Ok(completion),
                Err(err) if err.is_retryable() && attempt < self.config.max_retries => {
                    tracing::debug!(
                        attempt,
                        error = %err,
                        "Retrying OpenAI request"
                    );
                    // 1s, 2s, 4s, ...
                    sleep(Duration::from_secs(1 << attempt.min(5))).await;
                    attempt += 1;
                }
                Err(err) => return Err(err),
            }
        }
    }

    fn provider_info(&self) -> ProviderInfo {
        ProviderInfo::new("openai", &self.config.model)
    }
}

fn parse_finish_reason(reason: Option<&str>) -> FinishReason {
    match reason {
        Some("length") => FinishReason::Length,
        Some("content_filter") => FinishReason::ContentFilter,
        _ => FinishReason::Stop,
    }
}

/// Reads "try again in Ns" out of an error body; defaults to 30 seconds.
fn parse_retry_after(error_body: &str) -> u32 {
    serde_json::from_str::<serde_json::Value>(error_body)
        .ok()
        .and_then(|parsed| {
            let message = parsed.get("error")?.get("message")?.as_str()?.to_string();
            let rest = &message[message.find("try again in ")? + 13..];
            let digits: String = rest.chars().take_while(char::is_ascii_digit).collect();
            digits.parse().ok()
        })
        .unwrap_or(30)
}

// ----- OpenAI API Types -----

#[derive(Debug, Serialize)]
struct OpenAIRequest {
    model: String,
    messages: Vec<OpenAIMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_tokens: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
}

#[derive(Debug, Serialize, Deserialize)]
struct OpenAIMessage {
    role: String,
    content: String,
}

#[derive(Debug, Deserialize)]
struct OpenAIResponse {
    model: String,
    choices: Vec<OpenAIChoice>,
    usage: Option<OpenAIUsage>,
}

#[derive(Debug, Deserialize)]
struct OpenAIChoice {
    message: OpenAIMessage,
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct OpenAIUsage {
    prompt_tokens: u32,
    completion_tokens: u32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::Message;

    #[test]
    fn config_builder_works() {
        let config = OpenAIConfig::new("sk-test")
            .with_model("gpt-4o-mini")
            .with_base_url("https://proxy.example.com/v1")
            .with_timeout(Duration::from_secs(5))
            .with_max_retries(0);

        assert_eq!(config.model, "gpt-4o-mini");
        assert_eq!(config.base_url, "https://proxy.example.com/v1");
        assert_eq!(config.timeout, Duration::from_secs(5));
        assert_eq!(config.max_retries, 0);
        assert_eq!(config.api_key(), "sk-test");
    }

    #[test]
    fn debug_output_hides_key() {
        let config = OpenAIConfig::new("sk-very-secret");
        assert!(!format!("{:?}", config).contains("sk-very-secret"));
    }

    #[test]
    fn completions_url_tolerates_trailing_slash() {
        let provider =
            OpenAIProvider::new(OpenAIConfig::new("k").with_base_url("http://localhost:9/v1/"))
                .unwrap();
        assert_eq!(provider.completions_url(), "http://localhost:9/v1/chat/completions");
    }

    #[test]
    fn system_prompt_goes_first() {
        let provider = OpenAIProvider::new(OpenAIConfig::new("k")).unwrap();
        let mut request = CompletionRequest::new().with_system_prompt("Eres un auditor");
        request.messages.push(Message::user("Resumen"));

        let body = provider.to_openai_request(&request);
        assert_eq!(body.messages.len(), 2);
        assert_eq!(body.messages[0].role, "system");
        assert_eq!(body.messages[1].role, "user");
        assert_eq!(body.model, DEFAULT_MODEL);
    }

    #[test]
    fn retry_after_is_parsed_from_message() {
        let body = r#"{"error":{"message":"Rate limit reached. Please try again in 20s."}}"#;
        assert_eq!(parse_retry_after(body), 20);
        assert_eq!(parse_retry_after("not json"), 30);
    }

    #[test]
    fn finish_reason_mapping() {
        assert_eq!(parse_finish_reason(Some("length")), FinishReason::Length);
        assert_eq!(parse_finish_reason(None), FinishReason::Stop);
    }

    #[test]
    fn provider_info_reports_model() {
        let provider = OpenAIProvider::new(OpenAIConfig::new("k")).unwrap();
        let info = provider.provider_info();
        assert_eq!(info.name, "openai");
        assert_eq!(info.model, DEFAULT_MODEL);
    }
}
