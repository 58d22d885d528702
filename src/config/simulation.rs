//! Simulated latency for the stand-in backend endpoints

use serde::Deserialize;
use std::time::Duration;

#[derive(Debug, Clone, Deserialize)]
pub struct SimulationConfig {
    /// Delay before `/validate-data` and `/validate-address` answer
    #[serde(default = "default_validation_delay")]
    pub validation_delay_ms: u64,

    /// Delay before `/test-exhaustive` answers
    #[serde(default = "default_analysis_delay")]
    pub analysis_delay_ms: u64,
}

impl SimulationConfig {
    pub fn validation_delay(&self) -> Duration {
        Duration::from_millis(self.validation_delay_ms)
    }

    pub fn analysis_delay(&self) -> Duration {
        Duration::from_millis(self.analysis_delay_ms)
    }

    /// No delays, for tests.
    pub fn instant() -> Self {
        Self {
            validation_delay_ms: 0,
            analysis_delay_ms: 0,
        }
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            validation_delay_ms: default_validation_delay(),
            analysis_delay_ms: default_analysis_delay(),
        }
    }
}

fn default_validation_delay() -> u64 {
    1_000
}

fn default_analysis_delay() -> u64 {
    2_000
}
