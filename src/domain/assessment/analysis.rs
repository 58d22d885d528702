//! Scores produced by a security scorer and the level derived from them.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::Score;

/// Security score at or above which the system rates `Alto`.
pub const ALTO_THRESHOLD: u8 = 90;

/// Security score at or above which the system rates `Medio`.
pub const MEDIO_THRESHOLD: u8 = 75;

/// Coarse security rating shown to users.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SecurityLevel {
    Bajo,
    Medio,
    Alto,
}

impl SecurityLevel {
    pub fn from_score(score: Score) -> Self {
        match score.value() {
            s if s >= ALTO_THRESHOLD => SecurityLevel::Alto,
            s if s >= MEDIO_THRESHOLD => SecurityLevel::Medio,
            _ => SecurityLevel::Bajo,
        }
    }
}

/// What a scorer returns for one assessment run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub security_score: Score,
    pub performance_score: Score,
    pub ux_score: Score,
    pub backend_score: Score,
    pub confidence: Score,
    #[serde(default)]
    pub next_steps: Vec<String>,
}

impl AnalysisResult {
    pub fn security_level(&self) -> SecurityLevel {
        SecurityLevel::from_score(self.security_score)
    }

    /// One-line risk statement for the report.
    pub fn risk_assessment(&self) -> String {
        format!(
            "Sistema con {}% de seguridad. Implementadas las protecciones básicas principales.",
            self.security_score.value()
        )
    }
}
