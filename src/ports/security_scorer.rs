//! Security scorer port.
//!
//! Turns the plain-text summary of an assessment run into scores. The
//! default implementation is deterministic; a model-backed one is optional.

use async_trait::async_trait;

use super::ai_provider::AIError;
use crate::domain::assessment::AnalysisResult;

#[async_trait]
pub trait SecurityScorer: Send + Sync {
    /// Scores the system described by `resumen`.
    async fn score(&self, resumen: &str) -> Result<AnalysisResult, ScoringError>;

    /// Short name for logs.
    fn name(&self) -> &'static str;
}

#[derive(Debug, thiserror::Error)]
pub enum ScoringError {
    #[error("scoring provider failed: {0}")]
    Provider(#[from] AIError),

    #[error("unusable scoring response: {0}")]
    InvalidResponse(String),
}

impl ScoringError {
    pub fn invalid_response(message: impl Into<String>) -> Self {
        Self::InvalidResponse(message.into())
    }
}
