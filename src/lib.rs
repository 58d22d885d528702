//! BCR Form - Credit card application backend
//!
//! A guided chat wizard collects the applicant's data one field at a time;
//! simulated endpoints stand in for registry checks, address lookup and a
//! security assessment report.

pub mod adapters;
pub mod app;
pub mod config;
pub mod domain;
pub mod ports;
pub mod telemetry;
