//! Simulation module - stand-ins for the external systems an application
//! would normally hit.
//!
//! Every function takes its random source as a parameter so callers decide
//! where randomness comes from and tests can seed it.

mod address;
mod automated;
mod backend_validation;
mod submission;

pub use address::{resolve_address, AddressComponents, AddressValidation, Coordinates, PROVINCIAS};
pub use automated::{run_automated_tests, AutomatedRun, AutomatedTestResult, AUTOMATED_TEST_COUNT};
pub use backend_validation::{
    numero_solicitud, BackendValidation, ValidationStep, NUMERO_SOLICITUD_RANGE, VALIDATION_STEPS,
};
pub use submission::{FormSubmission, SubmissionReceipt};
