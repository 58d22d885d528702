//! Guide module - a keyword-driven help assistant for applicants filling
//! in the form.

mod assistant;

pub use assistant::{GuideAssistant, GuideTopic};
