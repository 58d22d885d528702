//! Applicant module - the fields of a credit card application and the
//! single canonical rule for each of them.

mod data;
mod field;
pub mod rules;
mod sanitize;

pub use data::ApplicantData;
pub use field::FieldName;
pub use sanitize::{clean_html, contains_dangerous_pattern, sanitize_message, MAX_MESSAGE_LEN};
