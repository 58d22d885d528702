//! Conversation state carried by the caller between chat turns.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::engine::NamePolicy;
use super::step::WizardStep;
use crate::domain::applicant::rules::{
    normalize_direccion, validate_cedula, validate_nombre, validate_nombre_strict,
    validate_telefono,
};
use crate::domain::applicant::FieldName;
use crate::domain::foundation::{StateMachine, ValidationError};

/// State as the caller sends it back, before any checking.
///
/// `step` defaults to 1 and `collected` to empty, which is how a new
/// conversation starts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateSnapshot {
    #[serde(default, alias = "paso")]
    pub step: Option<i64>,
    #[serde(default)]
    pub collected: BTreeMap<String, String>,
}

/// Validated conversation state.
///
/// Invariant: `collected` holds exactly the fields before `step`, in
/// collection order, each in canonical form.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ConversationState {
    step: WizardStep,
    collected: BTreeMap<FieldName, String>,
}

impl ConversationState {
    /// A fresh conversation at step 1.
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuilds state from a caller snapshot.
    ///
    /// Fails when the step is out of range, when `collected` does not hold
    /// exactly the fields before the step, or when a stored value no longer
    /// satisfies its field rule. A stored name is checked with `policy`.
    pub fn restore(
        snapshot: &StateSnapshot,
        policy: NamePolicy,
    ) -> Result<Self, ValidationError> {
        let raw_step = snapshot.step.unwrap_or(1);
        let step = WizardStep::from_number(raw_step).ok_or_else(|| {
            ValidationError::out_of_range("step", 1.0, 5.0, raw_step as f64)
        })?;

        let mut collected = BTreeMap::new();
        for (key, value) in &snapshot.collected {
            let field: FieldName = key.parse()?;
            collected.insert(field, canonical_value(field, value, policy)?);
        }

        let expected = step.collected_before();
        if collected.len() != expected.len() || !expected.iter().all(|f| collected.contains_key(f)) {
            return Err(ValidationError::invalid_format(
                "collected",
                format!(
                    "step {} requires exactly [{}]",
                    step.number(),
                    expected
                        .iter()
                        .map(FieldName::as_str)
                        .collect::<Vec<_>>()
                        .join(", ")
                ),
            ));
        }

        Ok(Self { step, collected })
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    /// Field expected next, derived from the step.
    pub fn waiting_for(&self) -> Option<FieldName> {
        self.step.waiting_for()
    }

    pub fn collected(&self) -> &BTreeMap<FieldName, String> {
        &self.collected
    }

    pub fn value(&self, field: FieldName) -> Option<&str> {
        self.collected.get(&field).map(String::as_str)
    }

    /// True once every field has been collected.
    pub fn is_complete(&self) -> bool {
        self.step.is_terminal()
    }

    /// Stores the answer for the current step and moves to the next one.
    pub(crate) fn accept(mut self, value: String) -> Result<Self, ValidationError> {
        let field = self.waiting_for().ok_or_else(|| {
            ValidationError::invalid_format("step", "conversation already complete")
        })?;
        let next = self
            .step
            .next()
            .ok_or_else(|| ValidationError::invalid_format("step", "no step follows"))?;
        self.step = self.step.transition_to(next)?;
        self.collected.insert(field, value);
        Ok(self)
    }

    /// Converts back to the wire snapshot.
    pub fn to_snapshot(&self) -> StateSnapshot {
        StateSnapshot {
            step: Some(self.step.number().into()),
            collected: self
                .collected
                .iter()
                .map(|(k, v)| (k.as_str().to_string(), v.clone()))
                .collect(),
        }
    }
}

fn canonical_value(
    field: FieldName,
    value: &str,
    policy: NamePolicy,
) -> Result<String, ValidationError> {
    match field {
        FieldName::Nombre => match policy {
            NamePolicy::Lenient => validate_nombre(value),
            NamePolicy::Strict => validate_nombre_strict(value),
        },
        FieldName::Cedula => validate_cedula(value),
        FieldName::Telefono => validate_telefono(value),
        FieldName::Direccion => Ok(normalize_direccion(value)),
    }
}
