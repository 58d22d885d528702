//! Rate limiter adapters.
//!
//! - `InMemoryRateLimiter` - fixed-window counters held in process memory

mod config;
mod in_memory;

pub use config::{RateLimitConfig, WindowLimits, ASSESSMENT_RESOURCE};
pub use in_memory::InMemoryRateLimiter;
