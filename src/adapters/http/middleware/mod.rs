//! HTTP middleware for axum.
//!
//! - `rate_limit` - Global and per-client request limits
//! - `security_headers` - Browser hardening headers

pub mod rate_limit;
pub mod security_headers;

pub use rate_limit::{
    rate_limit_middleware, ClientIp, RateLimitCheck, RateLimitRejection, RateLimiterState,
};
pub use security_headers::with_security_headers;
