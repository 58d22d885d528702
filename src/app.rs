//! Wiring of configuration into adapters and the router.

use std::sync::Arc;

use axum::Router;
use thiserror::Error;

use crate::adapters::ai::{OpenAIConfig, OpenAIProvider};
use crate::adapters::http::{app_router, AppState, RouterOptions};
use crate::adapters::rate_limiter::{
    InMemoryRateLimiter, RateLimitConfig, WindowLimits, ASSESSMENT_RESOURCE,
};
use crate::adapters::scoring::{FallbackSecurityScorer, LlmSecurityScorer, StaticSecurityScorer};
use crate::config::{self, AiConfig, AppConfig, RateLimitSettings};
use crate::domain::wizard::ChatWizard;
use crate::ports::{AIError, RateLimiter, SecurityScorer};

/// Errors that stop the server from starting.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error(transparent)]
    Config(#[from] config::ConfigError),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(#[from] config::ValidationError),

    #[error("Text-generation provider setup failed: {0}")]
    Provider(#[from] AIError),

    #[error("Server I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Builds the in-memory limiter, or `None` when limiting is disabled.
pub fn rate_limiter(settings: &RateLimitSettings) -> Option<InMemoryRateLimiter> {
    if !settings.enabled {
        return None;
    }

    let mut config = RateLimitConfig {
        global: WindowLimits::per_minute(settings.global_requests_per_minute),
        per_ip: WindowLimits::per_minute(settings.requests_per_minute),
        ..RateLimitConfig::default()
    };
    config.resources.insert(
        ASSESSMENT_RESOURCE.to_string(),
        WindowLimits::per_minute(settings.assessment_requests_per_minute),
    );
    Some(InMemoryRateLimiter::new(config))
}

/// Picks the security scorer: model-backed with a static fallback when a
/// usable key is configured, otherwise static only.
pub fn security_scorer(ai: &AiConfig) -> Result<Arc<dyn SecurityScorer>, AIError> {
    let key = match &ai.openai_api_key {
        Some(key) if ai.has_openai() => key.clone(),
        _ => {
            tracing::info!("No OpenAI key configured, using static security scorer");
            return Ok(Arc::new(StaticSecurityScorer::new()));
        }
    };

    let provider = OpenAIProvider::new(
        OpenAIConfig::from_secret(key)
            .with_model(ai.model.clone())
            .with_base_url(ai.base_url.clone())
            .with_timeout(ai.timeout())
            .with_max_retries(ai.max_retries),
    )?;
    tracing::info!(model = %ai.model, "Using OpenAI security scorer with static fallback");

    Ok(Arc::new(FallbackSecurityScorer::new(
        LlmSecurityScorer::new(Arc::new(provider)),
        StaticSecurityScorer::new(),
    )))
}

/// Assembles the full router from configuration and prepared adapters.
pub fn build_router(
    config: &AppConfig,
    scorer: Arc<dyn SecurityScorer>,
    rate_limiter: Option<Arc<dyn RateLimiter>>,
) -> Router {
    let state = AppState::new(
        ChatWizard::new(config.wizard.name_policy()),
        scorer,
        rate_limiter,
        config.simulation.clone(),
    );

    app_router(
        state,
        RouterOptions {
            static_dir: &config.server.static_dir,
            cors_origins: config.server.cors_origins_list(),
            request_timeout: config.server.request_timeout(),
        },
    )
}
