//! Deterministic scorer used when no text-generation provider is set up.

use async_trait::async_trait;

use crate::domain::assessment::AnalysisResult;
use crate::domain::foundation::Score;
use crate::ports::{ScoringError, SecurityScorer};

pub const STATIC_NEXT_STEPS: [&str; 4] = [
    "Implementar 2FA para mayor seguridad",
    "Agregar caché Redis para mejor performance",
    "Configurar monitoreo en tiempo real",
    "Optimizar para dispositivos móviles",
];

/// Returns the same scores for every run.
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticSecurityScorer;

impl StaticSecurityScorer {
    pub fn new() -> Self {
        Self
    }

    pub fn analysis() -> AnalysisResult {
        AnalysisResult {
            security_score: Score::new(94),
            performance_score: Score::new(87),
            ux_score: Score::new(91),
            backend_score: Score::new(89),
            confidence: Score::new(98),
            next_steps: STATIC_NEXT_STEPS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

#[async_trait]
impl SecurityScorer for StaticSecurityScorer {
    async fn score(&self, _resumen: &str) -> Result<AnalysisResult, ScoringError> {
        Ok(Self::analysis())
    }

    fn name(&self) -> &'static str {
        "static"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::assessment::SecurityLevel;

    #[tokio::test]
    async fn scores_are_fixed() {
        let result = StaticSecurityScorer::new().score("anything").await.unwrap();
        assert_eq!(result.security_score.value(), 94);
        assert_eq!(result.performance_score.value(), 87);
        assert_eq!(result.ux_score.value(), 91);
        assert_eq!(result.backend_score.value(), 89);
        assert_eq!(result.confidence.value(), 98);
        assert_eq!(result.next_steps.len(), 4);
        assert_eq!(result.security_level(), SecurityLevel::Alto);
    }

    #[tokio::test]
    async fn ignores_input() {
        let scorer = StaticSecurityScorer::new();
        assert_eq!(
            scorer.score("a").await.unwrap(),
            scorer.score("b").await.unwrap()
        );
    }
}
