//! Rate limit configuration

use serde::Deserialize;

use super::error::ValidationError;

/// Fixed-window limits applied by the HTTP middleware.
#[derive(Debug, Clone, Deserialize)]
pub struct RateLimitSettings {
    /// Turns the middleware off entirely
    #[serde(default = "default_enabled")]
    pub enabled: bool,

    /// Requests per minute allowed from one client address
    #[serde(default = "default_requests_per_minute")]
    pub requests_per_minute: u32,

    /// Requests per minute allowed across all clients
    #[serde(default = "default_global_requests_per_minute")]
    pub global_requests_per_minute: u32,

    /// Requests per minute one client may spend on the assessment endpoint
    #[serde(default = "default_assessment_requests_per_minute")]
    pub assessment_requests_per_minute: u32,
}

impl RateLimitSettings {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !self.enabled {
            return Ok(());
        }
        if self.requests_per_minute == 0
            || self.global_requests_per_minute == 0
            || self.assessment_requests_per_minute == 0
        {
            return Err(ValidationError::InvalidRateLimit);
        }
        if self.global_requests_per_minute < self.requests_per_minute {
            return Err(ValidationError::GlobalLimitTooLow);
        }
        Ok(())
    }
}

impl Default for RateLimitSettings {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            requests_per_minute: default_requests_per_minute(),
            global_requests_per_minute: default_global_requests_per_minute(),
            assessment_requests_per_minute: default_assessment_requests_per_minute(),
        }
    }
}

fn default_enabled() -> bool {
    true
}

fn default_requests_per_minute() -> u32 {
    100
}

fn default_global_requests_per_minute() -> u32 {
    10_000
}

fn default_assessment_requests_per_minute() -> u32 {
    10
}
