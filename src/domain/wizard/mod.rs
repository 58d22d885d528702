//! Wizard module - the four-step chat conversation that collects the
//! applicant's data.
//!
//! The server keeps no session: every turn the caller sends back the state
//! it received on the previous turn.

mod engine;
pub mod prompts;
mod state;
mod step;

pub use engine::{ChatWizard, NamePolicy, TurnOutcome, WizardReply};
pub use state::{ConversationState, StateSnapshot};
pub use step::WizardStep;
