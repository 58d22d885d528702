//! Chat wizard engine.
//!
//! A pure function over caller-supplied state: given the incoming message
//! and the conversation state it returns the bot's reply and the new state.
//! Rejected answers keep the conversation at the same step with a
//! corrective prompt; there is no retry limit.

use super::prompts;
use super::state::{ConversationState, StateSnapshot};
use super::step::WizardStep;
use crate::domain::applicant::rules::{
    normalize_direccion, validate_cedula, validate_nombre, validate_nombre_strict,
    validate_telefono,
};
use crate::domain::applicant::FieldName;
use crate::domain::foundation::ValidationError;

/// Which rule the name step enforces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NamePolicy {
    /// Any non-empty answer is a name.
    #[default]
    Lenient,
    /// Letters only, 2 to 4 words of at least 2 characters.
    Strict,
}

/// What happened during one turn.
#[derive(Debug, Clone, PartialEq)]
pub enum TurnOutcome {
    /// A new conversation was opened.
    Started,
    /// The answer for `field` was stored and the step advanced.
    Accepted(FieldName),
    /// The answer for `field` failed its rule; the step did not move.
    Rejected {
        field: FieldName,
        reason: ValidationError,
    },
    /// The last field was stored; validation can start.
    Completed,
    /// The conversation was already complete; nothing changed.
    Terminal,
    /// The caller's state was malformed and the conversation restarted.
    Reset { reason: ValidationError },
}

/// The bot's answer to one message.
#[derive(Debug, Clone, PartialEq)]
pub struct WizardReply {
    pub bot_message: String,
    pub state: ConversationState,
    pub outcome: TurnOutcome,
}

impl WizardReply {
    /// True when the caller should kick off backend validation.
    pub fn start_validation(&self) -> bool {
        matches!(self.outcome, TurnOutcome::Completed)
    }
}

/// Drives the fixed nombre → cedula → telefono → direccion sequence.
#[derive(Debug, Clone, Copy, Default)]
pub struct ChatWizard {
    policy: NamePolicy,
}

impl ChatWizard {
    pub fn new(policy: NamePolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> NamePolicy {
        self.policy
    }

    /// Opening prompt for a new conversation.
    pub fn greeting(&self) -> WizardReply {
        WizardReply {
            bot_message: prompts::WELCOME.to_string(),
            state: ConversationState::new(),
            outcome: TurnOutcome::Started,
        }
    }

    /// Handles a message against a raw caller snapshot.
    ///
    /// A malformed snapshot is not an error: the conversation restarts at
    /// step 1 and the message is discarded.
    pub fn resume(&self, message: &str, snapshot: &StateSnapshot) -> WizardReply {
        match ConversationState::restore(snapshot, self.policy) {
            Ok(state) => self.respond(message, state),
            Err(reason) => self.restart(reason),
        }
    }

    /// Discards unusable caller state and opens a new conversation.
    pub fn restart(&self, reason: ValidationError) -> WizardReply {
        tracing::warn!(error = %reason, "Malformed conversation state, restarting wizard");
        WizardReply {
            bot_message: prompts::WELCOME.to_string(),
            state: ConversationState::new(),
            outcome: TurnOutcome::Reset { reason },
        }
    }

    /// Handles a message against validated state.
    pub fn respond(&self, message: &str, state: ConversationState) -> WizardReply {
        let step = state.step();
        let Some(field) = step.waiting_for() else {
            return terminal(state);
        };

        let value = match self.check(field, message) {
            Ok(value) => value,
            Err(reason) => {
                tracing::debug!(step = step.number(), %field, error = %reason, "Answer rejected");
                return WizardReply {
                    bot_message: prompts::retry(field, self.policy == NamePolicy::Strict)
                        .to_string(),
                    state,
                    outcome: TurnOutcome::Rejected { field, reason },
                };
            }
        };

        let bot_message = match field {
            FieldName::Nombre => prompts::ask_cedula(&value),
            FieldName::Cedula => prompts::ASK_TELEFONO.to_string(),
            FieldName::Telefono => prompts::ASK_DIRECCION.to_string(),
            FieldName::Direccion => prompts::START_VALIDATION.to_string(),
        };

        let fallback = state.clone();
        match state.accept(value) {
            Ok(next) => {
                tracing::debug!(from = step.number(), to = next.step().number(), %field, "Answer accepted");
                let outcome = if next.step() == WizardStep::StartValidation {
                    TurnOutcome::Completed
                } else {
                    TurnOutcome::Accepted(field)
                };
                WizardReply {
                    bot_message,
                    state: next,
                    outcome,
                }
            }
            Err(_) => terminal(fallback),
        }
    }

    fn check(&self, field: FieldName, message: &str) -> Result<String, ValidationError> {
        match field {
            FieldName::Nombre => match self.policy {
                NamePolicy::Lenient => validate_nombre(message),
                NamePolicy::Strict => validate_nombre_strict(message),
            },
            FieldName::Cedula => validate_cedula(message),
            FieldName::Telefono => validate_telefono(message),
            FieldName::Direccion => Ok(normalize_direccion(message)),
        }
    }
}

fn terminal(state: ConversationState) -> WizardReply {
    WizardReply {
        bot_message: prompts::NOT_UNDERSTOOD.to_string(),
        state,
        outcome: TurnOutcome::Terminal,
    }
}
