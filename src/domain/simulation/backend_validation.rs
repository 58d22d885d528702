//! Simulated approval against the national registries.

use rand::Rng;
use serde::Serialize;
use std::ops::RangeInclusive;

/// Range application numbers are drawn from.
pub const NUMERO_SOLICITUD_RANGE: RangeInclusive<u32> = 100_000..=999_999;

/// One external system the application is "checked" against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ValidationStep {
    pub system: &'static str,
    pub message: &'static str,
}

pub const VALIDATION_STEPS: [ValidationStep; 4] = [
    ValidationStep {
        system: "CCSS",
        message: "Validando en Caja Costarricense de Seguro Social...",
    },
    ValidationStep {
        system: "SUGEF",
        message: "Consultando historial crediticio...",
    },
    ValidationStep {
        system: "BCR",
        message: "Verificando en sistema BCR...",
    },
    ValidationStep {
        system: "HACIENDA",
        message: "Validando en Ministerio de Hacienda...",
    },
];

/// Draws a six-digit application number.
pub fn numero_solicitud<R: Rng>(rng: &mut R) -> u32 {
    rng.gen_range(NUMERO_SOLICITUD_RANGE)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BackendValidation {
    pub validation_complete: bool,
    pub approved: bool,
    pub numero_solicitud: u32,
    pub mensaje: String,
    pub validation_steps: [ValidationStep; 4],
}

impl BackendValidation {
    /// Every simulated validation ends in approval.
    pub fn approve<R: Rng>(rng: &mut R) -> Self {
        let numero = numero_solicitud(rng);
        Self {
            validation_complete: true,
            approved: true,
            numero_solicitud: numero,
            mensaje: format!(
                "¡Felicidades! Tu solicitud ha sido aprobada. Número de solicitud: {}",
                numero
            ),
            validation_steps: VALIDATION_STEPS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn numero_is_six_digits() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..1_000 {
            let n = numero_solicitud(&mut rng);
            assert!(NUMERO_SOLICITUD_RANGE.contains(&n));
        }
    }

    #[test]
    fn approval_lists_all_systems_in_order() {
        let result = BackendValidation::approve(&mut StdRng::seed_from_u64(1));
        assert!(result.validation_complete);
        assert!(result.approved);
        let systems: Vec<_> = result.validation_steps.iter().map(|s| s.system).collect();
        assert_eq!(systems, ["CCSS", "SUGEF", "BCR", "HACIENDA"]);
    }

    #[test]
    fn message_quotes_numero() {
        let result = BackendValidation::approve(&mut StdRng::seed_from_u64(2));
        assert!(result.mensaje.ends_with(&result.numero_solicitud.to_string()));
    }
}
