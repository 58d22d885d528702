//! Mock AI Provider for testing.
//!
//! Returns queued responses or errors in order and records every request,
//! so scorer tests run without a network.
//!
//! ```ignore
//! let provider = MockAIProvider::new()
//!     .with_response(r#"{"security_score": 92}"#)
//!     .with_error(MockError::Unavailable { message: "down".into() });
//! ```

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;
use tokio::time::sleep;

use crate::ports::{
    AIError, AIProvider, CompletionRequest, CompletionResponse, FinishReason, ProviderInfo,
    TokenUsage,
};

pub const DEFAULT_MOCK_CONTENT: &str = "Mock response";

#[derive(Debug, Clone)]
pub struct MockAIProvider {
    responses: Arc<Mutex<VecDeque<MockResponse>>>,
    info: ProviderInfo,
    delay: Duration,
    calls: Arc<Mutex<Vec<CompletionRequest>>>,
}

#[derive(Debug, Clone)]
pub enum MockResponse {
    Success { content: String, usage: TokenUsage },
    Error(MockError),
}

/// Error kinds the mock can be told to return.
#[derive(Debug, Clone)]
pub enum MockError {
    RateLimited { retry_after_secs: u32 },
    Unavailable { message: String },
    AuthenticationFailed,
    Network { message: String },
    Timeout { timeout_secs: u32 },
}

impl From<MockError> for AIError {
    fn from(err: MockError) -> Self {
        match err {
            MockError::RateLimited { retry_after_secs } => AIError::rate_limited(retry_after_secs),
            MockError::Unavailable { message } => AIError::unavailable(message),
            MockError::AuthenticationFailed => AIError::AuthenticationFailed,
            MockError::Network { message } => AIError::network(message),
            MockError::Timeout { timeout_secs } => AIError::Timeout { timeout_secs },
        }
    }
}

impl Default for MockAIProvider {
    fn default() -> Self {
        Self::new()
    }
}

// A panicking test must not poison the mock for the next assertion.
fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

impl MockAIProvider {
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(VecDeque::new())),
            info: ProviderInfo::new("mock", "mock-model-1"),
            delay: Duration::ZERO,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Queues a successful completion.
    pub fn with_response(self, content: impl Into<String>) -> Self {
        lock(&self.responses).push_back(MockResponse::Success {
            content: content.into(),
            usage: TokenUsage::new(10, 20),
        });
        self
    }

    /// Queues an error.
    pub fn with_error(self, error: MockError) -> Self {
        lock(&self.responses).push_back(MockResponse::Error(error));
        self
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn call_count(&self) -> usize {
        lock(&self.calls).len()
    }

    pub fn get_calls(&self) -> Vec<CompletionRequest> {
        lock(&self.calls).clone()
    }

    fn next_response(&self) -> MockResponse {
        lock(&self.responses)
            .pop_front()
            .unwrap_or_else(|| MockResponse::Success {
                content: DEFAULT_MOCK_CONTENT.to_string(),
                usage: TokenUsage::new(5, 10),
            })
    }
}

#[async_trait]
impl AIProvider for MockAIProvider {
    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse, AIError> {
        lock(&self.calls).push(request);

        if !self.delay.is_zero() {
            sleep(self.delay).await;
        }

        match self.next_response() {
            MockResponse::Success { content, usage } => Ok(CompletionResponse {
                content,
                usage,
                model: self.info.model.clone(),
                finish_reason: FinishReason::Stop,
            }),
            MockResponse::Error(err) => Err(err.into()),
        }
    }

    fn provider_info(&self) -> ProviderInfo {
        self.info.clone()
    }
}
