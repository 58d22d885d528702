//! Foundation module - Shared domain primitives.
//!
//! Contains the timestamp and score value objects, the state machine trait and the
//! error vocabulary used across the application form domain.

mod errors;
mod score;
mod state_machine;
mod timestamp;

pub use errors::{ErrorCode, ValidationError};
pub use score::Score;
pub use state_machine::StateMachine;
pub use timestamp::Timestamp;
