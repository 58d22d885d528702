//! Rate limit configuration types.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Endpoint group for the assessment run, which is slow and optionally
/// calls a paid provider.
pub const ASSESSMENT_RESOURCE: &str = "assessment";

/// Limits for every scope the limiter knows about.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RateLimitConfig {
    /// Ceiling shared by all clients.
    pub global: WindowLimits,
    /// Ceiling per client address.
    pub per_ip: WindowLimits,
    /// Extra ceilings per client address and endpoint group.
    pub resources: HashMap<String, WindowLimits>,
}

/// A request ceiling over a fixed window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowLimits {
    pub requests_per_window: u32,
    pub window_secs: u32,
}

impl WindowLimits {
    pub fn per_minute(requests: u32) -> Self {
        Self {
            requests_per_window: requests,
            window_secs: 60,
        }
    }
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        let mut resources = HashMap::new();
        resources.insert(ASSESSMENT_RESOURCE.to_string(), WindowLimits::per_minute(10));

        Self {
            global: WindowLimits::per_minute(10_000),
            per_ip: WindowLimits::per_minute(100),
            resources,
        }
    }
}

impl RateLimitConfig {
    /// Ceiling for an endpoint group; unknown groups fall back to the
    /// per-address ceiling.
    pub fn limits_for_resource(&self, resource: &str) -> WindowLimits {
        self.resources.get(resource).copied().unwrap_or(self.per_ip)
    }
}
