//! Security scorer adapters.
//!
//! - `StaticSecurityScorer` - fixed scores, the default
//! - `LlmSecurityScorer` - asks an `AIProvider` for scores
//! - `FallbackSecurityScorer` - primary, then fallback on error

mod fallback_scorer;
mod llm_scorer;
mod static_scorer;

pub use fallback_scorer::FallbackSecurityScorer;
pub use llm_scorer::LlmSecurityScorer;
pub use static_scorer::{StaticSecurityScorer, STATIC_NEXT_STEPS};
