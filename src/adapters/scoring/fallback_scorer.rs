//! Scorer that tries a primary and falls back on failure.

use async_trait::async_trait;

use crate::domain::assessment::AnalysisResult;
use crate::ports::{ScoringError, SecurityScorer};

pub struct FallbackSecurityScorer<P, F> {
    primary: P,
    fallback: F,
}

impl<P: SecurityScorer, F: SecurityScorer> FallbackSecurityScorer<P, F> {
    pub fn new(primary: P, fallback: F) -> Self {
        Self { primary, fallback }
    }
}

#[async_trait]
impl<P: SecurityScorer, F: SecurityScorer> SecurityScorer for FallbackSecurityScorer<P, F> {
    async fn score(&self, resumen: &str) -> Result<AnalysisResult, ScoringError> {
        match self.primary.score(resumen).await {
            Ok(result) => Ok(result),
            Err(err) => {
                tracing::warn!(
                    primary = self.primary.name(),
                    fallback = self.fallback.name(),
                    error = %err,
                    "Security scorer failed, using fallback"
                );
                self.fallback.score(resumen).await
            }
        }
    }

    fn name(&self) -> &'static str {
        self.primary.name()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::ai::{MockAIProvider, MockError};
    use crate::adapters::scoring::{LlmSecurityScorer, StaticSecurityScorer};
    use std::sync::Arc;

    #[tokio::test]
    async fn uses_primary_when_it_succeeds() {
        let provider = Arc::new(MockAIProvider::new().with_response(
            r#"{"security_score": 70, "performance_score": 70, "ux_score": 70, "backend_score": 70, "confidence": 60}"#,
        ));
        let scorer = FallbackSecurityScorer::new(
            LlmSecurityScorer::new(provider),
            StaticSecurityScorer::new(),
        );

        let result = scorer.score("r").await.unwrap();
        assert_eq!(result.security_score.value(), 70);
    }

    #[tokio::test]
    async fn falls_back_on_provider_error() {
        let provider = Arc::new(MockAIProvider::new().with_error(MockError::AuthenticationFailed));
        let scorer = FallbackSecurityScorer::new(
            LlmSecurityScorer::new(provider),
            StaticSecurityScorer::new(),
        );

        assert_eq!(scorer.score("r").await.unwrap(), StaticSecurityScorer::analysis());
    }

    #[tokio::test]
    async fn falls_back_on_unparseable_reply() {
        let provider = Arc::new(MockAIProvider::new().with_response("no json"));
        let scorer = FallbackSecurityScorer::new(
            LlmSecurityScorer::new(provider),
            StaticSecurityScorer::new(),
        );

        assert_eq!(scorer.score("r").await.unwrap().security_score.value(), 94);
    }
}
