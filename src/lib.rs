//! TopUpForm Core - Order Form Rule Engine
//!
//! # Ground Rules (Non-Negotiable)
//! 1. Rules Are Data
//! 2. First Failure Wins Per Field
//! 3. Verdicts Are Values, Never Panics
//! 4. Same Input, Same Verdict

pub mod form;
pub mod validation;

pub use form::{AmountValue, Field, FormError, TopUpRequest};
pub use validation::{rule_table, RuleDescriptor, ValidationResult, Validator, Violation};

pub const ENGINE_VERSION: &str = env!("CARGO_PKG_VERSION");
