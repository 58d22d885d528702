//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Invalid port number")]
    InvalidPort,

    #[error("Invalid request timeout")]
    InvalidTimeout,

    #[error("Invalid socket address: {0}")]
    InvalidSocketAddr(String),

    #[error("Invalid OpenAI base URL")]
    InvalidBaseUrl,

    #[error("AI timeout must be between 1 and 300 seconds")]
    InvalidAiTimeout,

    #[error("Rate limit must allow at least one request per minute")]
    InvalidRateLimit,

    #[error("Global rate limit is below the per-client limit")]
    GlobalLimitTooLow,

    #[error("Simulated delay exceeds the request timeout")]
    DelayExceedsTimeout,
}
