//! Simulated automated test run over random applicant records.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::Serialize;

use super::super::assessment::TestStatus;
use crate::domain::applicant::ApplicantData;
use crate::domain::foundation::Timestamp;

pub const AUTOMATED_TEST_COUNT: usize = 10;

const NOMBRES: [&str; 4] = ["Ana Pérez", "Luis Mora", "Carlos Jiménez", "María Solís"];

const DIRECCIONES: [&str; 3] = [
    "200m sur del parque",
    "Frente al hospital",
    "Avenida 2, calle 5",
];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AutomatedTestResult {
    pub test_id: usize,
    pub status: TestStatus,
    pub test_data: ApplicantData,
    pub execution_time: f64,
    pub timestamp: Timestamp,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AutomatedRun {
    pub total_tests: usize,
    pub passed: usize,
    pub failed: usize,
    pub results: Vec<AutomatedTestResult>,
}

fn random_applicant<R: Rng>(rng: &mut R) -> ApplicantData {
    let nombre = NOMBRES.choose(rng).copied().unwrap_or(NOMBRES[0]);
    let direccion = DIRECCIONES.choose(rng).copied().unwrap_or(DIRECCIONES[0]);
    ApplicantData {
        nombre: Some(nombre.to_string()),
        cedula: Some(rng.gen_range(100_000_000u32..=999_999_999).to_string()),
        telefono: Some(format!("8{}", rng.gen_range(1_000_000u32..=9_999_999))),
        direccion: Some(direccion.to_string()),
    }
}

/// Generates records and runs each through the field rules.
pub fn run_automated_tests<R: Rng>(rng: &mut R) -> AutomatedRun {
    let results: Vec<_> = (1..=AUTOMATED_TEST_COUNT)
        .map(|test_id| {
            let test_data = random_applicant(rng);
            let status = match test_data.validate() {
                Ok(_) => TestStatus::Passed,
                Err(_) => TestStatus::Failed,
            };
            AutomatedTestResult {
                test_id,
                status,
                test_data,
                execution_time: rng.gen_range(0.5..2.0),
                timestamp: Timestamp::now(),
            }
        })
        .collect();

    let passed = results
        .iter()
        .filter(|r| r.status == TestStatus::Passed)
        .count();

    AutomatedRun {
        total_tests: results.len(),
        passed,
        failed: results.len() - passed,
        results,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn runs_ten_passing_tests() {
        let run = run_automated_tests(&mut StdRng::seed_from_u64(3));
        assert_eq!(run.total_tests, 10);
        assert_eq!(run.passed, 10);
        assert_eq!(run.failed, 0);
        let ids: Vec<_> = run.results.iter().map(|r| r.test_id).collect();
        assert_eq!(ids, (1..=10).collect::<Vec<_>>());
    }

    #[test]
    fn generated_records_satisfy_field_rules() {
        let mut rng = StdRng::seed_from_u64(99);
        for _ in 0..200 {
            assert!(random_applicant(&mut rng).validate().is_ok());
        }
    }

    #[test]
    fn execution_times_in_range() {
        let run = run_automated_tests(&mut StdRng::seed_from_u64(5));
        assert!(run
            .results
            .iter()
            .all(|r| (0.5..2.0).contains(&r.execution_time)));
    }
}
