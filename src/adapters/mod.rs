//! Adapters - Implementations of port interfaces.
//!
//! - `ai` - Text-generation providers (OpenAI, mock)
//! - `http` - axum router, handlers and middleware
//! - `rate_limiter` - In-memory fixed-window limiter
//! - `scoring` - Security scorers

pub mod ai;
pub mod http;
pub mod rate_limiter;
pub mod scoring;
