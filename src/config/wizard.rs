//! Chat wizard configuration

use serde::Deserialize;

use crate::domain::wizard::NamePolicy;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct WizardConfig {
    /// Require the structured name rule at step 1
    #[serde(default)]
    pub strict_names: bool,
}

impl WizardConfig {
    pub fn name_policy(&self) -> NamePolicy {
        if self.strict_names {
            NamePolicy::Strict
        } else {
            NamePolicy::Lenient
        }
    }
}
