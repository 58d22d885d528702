//! Wizard step state machine.
//!
//! Defines the fixed sequence of data-collection steps and the only valid
//! transitions between them.

use serde::{Deserialize, Serialize};

use crate::domain::applicant::FieldName;
use crate::domain::foundation::StateMachine;

/// The step a conversation is at.
///
/// Steps are numbered 1 to 5 on the wire:
/// - `AwaitingNombre` (1): waiting for the applicant's name
/// - `AwaitingCedula` (2): waiting for the national ID number
/// - `AwaitingTelefono` (3): waiting for the phone number
/// - `AwaitingDireccion` (4): waiting for the delivery address
/// - `StartValidation` (5): all fields collected, no further questions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WizardStep {
    #[default]
    AwaitingNombre,
    AwaitingCedula,
    AwaitingTelefono,
    AwaitingDireccion,
    StartValidation,
}

impl WizardStep {
    /// Wire number of this step.
    pub fn number(&self) -> u8 {
        match self {
            WizardStep::AwaitingNombre => 1,
            WizardStep::AwaitingCedula => 2,
            WizardStep::AwaitingTelefono => 3,
            WizardStep::AwaitingDireccion => 4,
            WizardStep::StartValidation => 5,
        }
    }

    /// Parses a wire step number; anything outside 1..=5 is `None`.
    pub fn from_number(n: i64) -> Option<Self> {
        match n {
            1 => Some(WizardStep::AwaitingNombre),
            2 => Some(WizardStep::AwaitingCedula),
            3 => Some(WizardStep::AwaitingTelefono),
            4 => Some(WizardStep::AwaitingDireccion),
            5 => Some(WizardStep::StartValidation),
            _ => None,
        }
    }

    /// Field this step is waiting for; `None` once collection is done.
    pub fn waiting_for(&self) -> Option<FieldName> {
        match self {
            WizardStep::AwaitingNombre => Some(FieldName::Nombre),
            WizardStep::AwaitingCedula => Some(FieldName::Cedula),
            WizardStep::AwaitingTelefono => Some(FieldName::Telefono),
            WizardStep::AwaitingDireccion => Some(FieldName::Direccion),
            WizardStep::StartValidation => None,
        }
    }

    /// The step after this one, if any.
    pub fn next(&self) -> Option<Self> {
        self.valid_transitions().into_iter().next()
    }

    /// Fields that must already be collected when a conversation is at
    /// this step.
    pub fn collected_before(&self) -> &'static [FieldName] {
        let n = usize::from(self.number()) - 1;
        &FieldName::ALL[..n]
    }
}

impl StateMachine for WizardStep {
    fn can_transition_to(&self, target: &Self) -> bool {
        use WizardStep::*;
        matches!(
            (self, target),
            (AwaitingNombre, AwaitingCedula)
                | (AwaitingCedula, AwaitingTelefono)
                | (AwaitingTelefono, AwaitingDireccion)
                | (AwaitingDireccion, StartValidation)
        )
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use WizardStep::*;
        match self {
            AwaitingNombre => vec![AwaitingCedula],
            AwaitingCedula => vec![AwaitingTelefono],
            AwaitingTelefono => vec![AwaitingDireccion],
            AwaitingDireccion => vec![StartValidation],
            StartValidation => vec![],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [WizardStep; 5] = [
        WizardStep::AwaitingNombre,
        WizardStep::AwaitingCedula,
        WizardStep::AwaitingTelefono,
        WizardStep::AwaitingDireccion,
        WizardStep::StartValidation,
    ];

    #[test]
    fn default_step_is_one() {
        assert_eq!(WizardStep::default().number(), 1);
    }

    #[test]
    fn numbers_round_trip() {
        for step in ALL {
            assert_eq!(WizardStep::from_number(step.number().into()), Some(step));
        }
    }

    #[test]
    fn out_of_range_numbers_are_rejected() {
        assert_eq!(WizardStep::from_number(0), None);
        assert_eq!(WizardStep::from_number(6), None);
        assert_eq!(WizardStep::from_number(-1), None);
    }

    #[test]
    fn each_step_advances_by_exactly_one() {
        for step in &ALL[..4] {
            let next = step.next().unwrap();
            assert_eq!(next.number(), step.number() + 1);
        }
    }

    #[test]
    fn start_validation_is_terminal() {
        assert!(WizardStep::StartValidation.is_terminal());
        assert_eq!(WizardStep::StartValidation.next(), None);
        assert_eq!(WizardStep::StartValidation.waiting_for(), None);
    }

    #[test]
    fn cannot_skip_steps() {
        assert!(WizardStep::AwaitingNombre
            .transition_to(WizardStep::AwaitingTelefono)
            .is_err());
    }

    #[test]
    fn cannot_move_backwards() {
        assert!(!WizardStep::AwaitingTelefono.can_transition_to(&WizardStep::AwaitingCedula));
    }

    #[test]
    fn waiting_for_matches_field_order() {
        assert_eq!(WizardStep::AwaitingNombre.waiting_for(), Some(FieldName::Nombre));
        assert_eq!(WizardStep::AwaitingDireccion.waiting_for(), Some(FieldName::Direccion));
    }

    #[test]
    fn collected_before_grows_with_step() {
        assert!(WizardStep::AwaitingNombre.collected_before().is_empty());
        assert_eq!(
            WizardStep::AwaitingTelefono.collected_before(),
            &[FieldName::Nombre, FieldName::Cedula]
        );
        assert_eq!(WizardStep::StartValidation.collected_before().len(), 4);
    }

    #[test]
    fn valid_transitions_matches_can_transition_to() {
        for step in ALL {
            for target in step.valid_transitions() {
                assert!(step.can_transition_to(&target));
            }
        }
    }
}
