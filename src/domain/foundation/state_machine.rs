//! State machine trait for step and status enums.
//!
//! Provides a consistent interface for validating and performing state
//! transitions, used by the chat wizard's step sequence.

use super::ValidationError;

/// Trait for enums that represent state machines.
///
/// Implementors define valid state transitions and get validated
/// transition methods for free.
///
/// # Example
///
/// ```ignore
/// let next = WizardStep::AwaitingNombre.transition_to(WizardStep::AwaitingCedula)?;
/// ```
pub trait StateMachine: Sized + Copy + PartialEq + std::fmt::Debug {
    /// Returns true if transition from self to target is valid.
    fn can_transition_to(&self, target: &Self) -> bool;

    /// Returns all valid target states from current state.
    fn valid_transitions(&self) -> Vec<Self>;

    /// Performs transition with validation, returning error if invalid.
    fn transition_to(&self, target: Self) -> Result<Self, ValidationError> {
        if self.can_transition_to(&target) {
            Ok(target)
        } else {
            Err(ValidationError::invalid_format(
                "state_transition",
                format!("Cannot transition from {:?} to {:?}", self, target),
            ))
        }
    }

    /// Checks if current state is terminal (no valid outgoing transitions).
    fn is_terminal(&self) -> bool {
        self.valid_transitions().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum TestStatus {
        Draft,
        Active,
        Completed,
    }

    impl StateMachine for TestStatus {
        fn can_transition_to(&self, target: &Self) -> bool {
            use TestStatus::*;
            matches!((self, target), (Draft, Active) | (Active, Completed))
        }

        fn valid_transitions(&self) -> Vec<Self> {
            use TestStatus::*;
            match self {
                Draft => vec![Active],
                Active => vec![Completed],
                Completed => vec![],
            }
        }
    }

    #[test]
    fn transition_to_succeeds_for_valid_transition() {
        let result = TestStatus::Draft.transition_to(TestStatus::Active);
        assert_eq!(result, Ok(TestStatus::Active));
    }

    #[test]
    fn transition_to_fails_for_invalid_transition() {
        let result = TestStatus::Draft.transition_to(TestStatus::Completed);
        assert!(result.is_err());
    }

    #[test]
    fn is_terminal_only_for_state_without_targets() {
        assert!(TestStatus::Completed.is_terminal());
        assert!(!TestStatus::Draft.is_terminal());
    }
}
