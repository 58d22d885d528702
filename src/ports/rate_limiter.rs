//! Rate limiting port.
//!
//! The store is injected into the HTTP layer rather than living in a
//! module-level map, so tests and alternative backends can swap it out.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::Timestamp;

/// Port for fixed-window request counting.
///
/// Implementations must be safe to share across request tasks.
#[async_trait]
pub trait RateLimiter: Send + Sync {
    /// Counts one request against `key` and reports whether it may proceed.
    async fn check(&self, key: RateLimitKey) -> Result<RateLimitResult, RateLimitError>;
}

/// What a counter is keyed on.
#[derive(Debug, Clone, Hash, Eq, PartialEq)]
pub struct RateLimitKey {
    pub scope: RateLimitScope,
    /// Client address, or "global".
    pub identifier: String,
    /// Endpoint group for per-route ceilings.
    pub resource: Option<String>,
}

#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RateLimitScope {
    /// Shared by every client.
    Global,
    /// One counter per client address.
    Ip,
    /// One counter per client address and endpoint group.
    Resource,
}

impl RateLimitKey {
    pub fn global() -> Self {
        Self {
            scope: RateLimitScope::Global,
            identifier: "global".to_string(),
            resource: None,
        }
    }

    pub fn ip(ip: &str) -> Self {
        Self {
            scope: RateLimitScope::Ip,
            identifier: ip.to_string(),
            resource: None,
        }
    }

    pub fn ip_resource(ip: &str, resource: &str) -> Self {
        Self {
            scope: RateLimitScope::Resource,
            identifier: ip.to_string(),
            resource: Some(resource.to_string()),
        }
    }

    /// Flat string form, usable as a map or cache key.
    pub fn storage_key(&self) -> String {
        match &self.resource {
            Some(resource) => format!(
                "ratelimit:{}:{}:{}",
                self.scope.as_str(),
                self.identifier,
                resource
            ),
            None => format!("ratelimit:{}:{}", self.scope.as_str(), self.identifier),
        }
    }
}

impl RateLimitScope {
    pub fn as_str(&self) -> &'static str {
        match self {
            RateLimitScope::Global => "global",
            RateLimitScope::Ip => "ip",
            RateLimitScope::Resource => "resource",
        }
    }
}

impl fmt::Display for RateLimitScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone)]
pub enum RateLimitResult {
    Allowed(RateLimitStatus),
    Denied(RateLimitDenied),
}

impl RateLimitResult {
    pub fn is_allowed(&self) -> bool {
        matches!(self, RateLimitResult::Allowed(_))
    }

    pub fn is_denied(&self) -> bool {
        matches!(self, RateLimitResult::Denied(_))
    }
}

/// Quota within the current window.
#[derive(Debug, Clone)]
pub struct RateLimitStatus {
    pub limit: u32,
    pub remaining: u32,
    pub reset_at: Timestamp,
    pub window_secs: u32,
}

#[derive(Debug, Clone)]
pub struct RateLimitDenied {
    pub limit: u32,
    pub retry_after_secs: u32,
    /// The scope whose ceiling was hit.
    pub scope: RateLimitScope,
    pub message: String,
}

#[derive(Debug, thiserror::Error)]
pub enum RateLimitError {
    #[error("rate limiter unavailable: {0}")]
    Unavailable(String),

    #[error("invalid key: {0}")]
    InvalidKey(String),
}
