//! Scorer backed by a text-generation provider.
//!
//! Sends the run summary with a prompt asking for a JSON object of scores,
//! then parses and clamps the reply. Any provider or parse failure is an
//! error; falling back is the caller's decision.

use async_trait::async_trait;
use serde::Deserialize;
use std::sync::Arc;

use crate::domain::assessment::AnalysisResult;
use crate::domain::foundation::Score;
use crate::ports::{AIProvider, CompletionRequest, MessageRole, ScoringError, SecurityScorer};

const SYSTEM_PROMPT: &str = "Eres un auditor de seguridad de aplicaciones web bancarias. \
Respondes únicamente con un objeto JSON válido, sin texto adicional.";

pub struct LlmSecurityScorer {
    ai_provider: Arc<dyn AIProvider>,
}

impl LlmSecurityScorer {
    pub fn new(ai_provider: Arc<dyn AIProvider>) -> Self {
        Self { ai_provider }
    }

    fn create_prompt(resumen: &str) -> String {
        format!(
            r#"Analiza los resultados de las pruebas de un formulario de solicitud de tarjeta de crédito.

{}

Responde con un JSON con esta forma:
{{
  "security_score": 0-100,
  "performance_score": 0-100,
  "ux_score": 0-100,
  "backend_score": 0-100,
  "confidence": 0-100,
  "next_steps": ["paso 1", "paso 2"]
}}"#,
            resumen
        )
    }

    fn parse_response(content: &str) -> Result<AnalysisResult, ScoringError> {
        let json = strip_code_fence(content);
        let raw: RawScores = serde_json::from_str(json)
            .map_err(|e| ScoringError::invalid_response(format!("not a score object: {}", e)))?;

        Ok(AnalysisResult {
            security_score: Score::saturating_from_f64(raw.security_score),
            performance_score: Score::saturating_from_f64(raw.performance_score),
            ux_score: Score::saturating_from_f64(raw.ux_score),
            backend_score: Score::saturating_from_f64(raw.backend_score),
            confidence: Score::saturating_from_f64(raw.confidence),
            next_steps: raw
                .next_steps
                .into_iter()
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect(),
        })
    }
}

#[derive(Debug, Deserialize)]
struct RawScores {
    security_score: f64,
    performance_score: f64,
    ux_score: f64,
    backend_score: f64,
    confidence: f64,
    #[serde(default)]
    next_steps: Vec<String>,
}

/// Models often wrap JSON in a ```json fence.
fn strip_code_fence(content: &str) -> &str {
    let trimmed = content.trim();
    let Some(inner) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let inner = inner.strip_prefix("json").unwrap_or(inner);
    inner.strip_suffix("```").unwrap_or(inner).trim()
}

#[async_trait]
impl SecurityScorer for LlmSecurityScorer {
    async fn score(&self, resumen: &str) -> Result<AnalysisResult, ScoringError> {
        let request = CompletionRequest::new()
            .with_system_prompt(SYSTEM_PROMPT)
            .with_message(MessageRole::User, Self::create_prompt(resumen))
            .with_max_tokens(400)
            .with_temperature(0.0);

        let info = self.ai_provider.provider_info();
        tracing::debug!(provider = %info.name, model = %info.model, "Requesting security score");

        let response = self.ai_provider.complete(request).await?;
        Self::parse_response(&response.content)
    }

    fn name(&self) -> &'static str {
        "llm"
    }
}
