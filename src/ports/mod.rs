//! Ports - Interfaces for external dependencies.
//!
//! Ports define the contracts between the domain and the outside world.
//! Adapters implement these ports.
//!
//! - `RateLimiter` - Fixed-window request counting
//! - `AIProvider` - Optional hosted text generation
//! - `SecurityScorer` - Scores an assessment run

mod ai_provider;
mod rate_limiter;
mod security_scorer;

pub use ai_provider::{
    AIError, AIProvider, CompletionRequest, CompletionResponse, FinishReason, Message,
    MessageRole, ProviderInfo, TokenUsage,
};
pub use rate_limiter::{
    RateLimitDenied, RateLimitError, RateLimitKey, RateLimitResult, RateLimitScope,
    RateLimitStatus, RateLimiter,
};
pub use security_scorer::{ScoringError, SecurityScorer};
