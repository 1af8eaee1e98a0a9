//! Validation of enforced text against profile and directive.

mod validator;

pub use validator::{Finding, Severity, ValidationReport, Validator};
