//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared primitives (errors, state machine trait, value objects)
//! - `applicant` - Applicant fields, their canonical rules and input sanitation
//! - `wizard` - The step-by-step chat that collects applicant data
//! - `guide` - Keyword help assistant
//! - `assessment` - Simulated security assessment and improvement catalogues
//! - `simulation` - Stand-ins for registry checks, geocoding and form intake

pub mod applicant;
pub mod assessment;
pub mod foundation;
pub mod guide;
pub mod simulation;
pub mod wizard;
