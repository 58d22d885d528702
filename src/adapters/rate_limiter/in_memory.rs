//! In-memory rate limiter.
//!
//! Fixed-window counters in a map guarded by an async lock. Counters live
//! in one process, so this suits the single-instance deployment the form
//! runs as.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::Timestamp;
use crate::ports::{
    RateLimitDenied, RateLimitError, RateLimitKey, RateLimitResult, RateLimitScope,
    RateLimitStatus, RateLimiter,
};

use super::config::{RateLimitConfig, WindowLimits};

#[derive(Debug, Clone)]
pub struct InMemoryRateLimiter {
    config: RateLimitConfig,
    windows: Arc<RwLock<HashMap<String, WindowState>>>,
}

#[derive(Debug, Clone)]
struct WindowState {
    count: u32,
    window_start: u64,
    window_secs: u32,
}

impl WindowState {
    fn expired(&self, now: u64) -> bool {
        now >= self.window_start + u64::from(self.window_secs)
    }

    fn reset_at(&self) -> u64 {
        self.window_start + u64::from(self.window_secs)
    }
}

impl InMemoryRateLimiter {
    pub fn new(config: RateLimitConfig) -> Self {
        Self {
            config,
            windows: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    pub fn with_defaults() -> Self {
        Self::new(RateLimitConfig::default())
    }

    fn limits_for(&self, key: &RateLimitKey) -> WindowLimits {
        match key.scope {
            RateLimitScope::Global => self.config.global,
            RateLimitScope::Ip => self.config.per_ip,
            RateLimitScope::Resource => self
                .config
                .limits_for_resource(key.resource.as_deref().unwrap_or_default()),
        }
    }

    fn now_secs() -> u64 {
        Timestamp::now().as_unix_secs()
    }

    /// Drops windows that have already ended. Returns how many were removed.
    pub async fn purge_expired(&self) -> usize {
        let now = Self::now_secs();
        let mut windows = self.windows.write().await;
        let before = windows.len();
        windows.retain(|_, state| !state.expired(now));
        before - windows.len()
    }

    /// Number of live counters.
    pub async fn tracked_keys(&self) -> usize {
        self.windows.read().await.len()
    }
}

#[async_trait]
impl RateLimiter for InMemoryRateLimiter {
    async fn check(&self, key: RateLimitKey) -> Result<RateLimitResult, RateLimitError> {
        let storage_key = key.storage_key();
        let limits = self.limits_for(&key);
        let now = Self::now_secs();

        let mut windows = self.windows.write().await;

        let state = windows.entry(storage_key).or_insert_with(|| WindowState {
            count: 0,
            window_start: now,
            window_secs: limits.window_secs,
        });

        if state.expired(now) {
            state.count = 0;
            state.window_start = now;
        }

        if state.count >= limits.requests_per_window {
            let retry_after = state.reset_at().saturating_sub(now) as u32;

            return Ok(RateLimitResult::Denied(RateLimitDenied {
                limit: limits.requests_per_window,
                retry_after_secs: retry_after.max(1),
                scope: key.scope,
                message: "Demasiadas solicitudes".to_string(),
            }));
        }

        state.count += 1;

        Ok(RateLimitResult::Allowed(RateLimitStatus {
            limit: limits.requests_per_window,
            remaining: limits.requests_per_window.saturating_sub(state.count),
            reset_at: Timestamp::from_unix_secs(state.reset_at()),
            window_secs: limits.window_secs,
        }))
    }
}
