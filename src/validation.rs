//! Validation System - Rule Table + Interpreter
//!
//! Rules are plain predicate/message pairs in fixed per-field chains.
//! The interpreter stops at the first failing rule of a chain; fields
//! are judged independently and every field failure is collected.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::form::{AmountValue, Field, TopUpRequest};

/// Inclusive phone number length bounds, in characters.
pub const PHONE_MIN_LEN: usize = 10;
pub const PHONE_MAX_LEN: usize = 13;

/// Smallest purchasable amount, in whole Rupiah.
pub const MIN_AMOUNT: f64 = 10_000.0;

pub const MSG_PROVIDER_REQUIRED: &str = "Provider wajib diisi";
pub const MSG_PHONE_REQUIRED: &str = "No HP wajib diisi";
pub const MSG_PHONE_MIN: &str = "No HP minimal 10 karakter";
pub const MSG_PHONE_MAX: &str = "No HP maksimal 13 karakter";
pub const MSG_PHONE_DIGITS: &str = "No HP harus berupa angka";
pub const MSG_AMOUNT_REQUIRED: &str = "Nominal wajib diisi";
pub const MSG_AMOUNT_NUMERIC: &str = "Nominal harus berupa angka";
pub const MSG_AMOUNT_MIN: &str = "Beli minimal Rp 10.000";

/// A single field rule: a predicate plus the message shown when it fails.
pub struct FieldRule<T: ?Sized> {
    pub name: &'static str,
    pub message: &'static str,
    pub check: fn(&T) -> bool,
}

/// Walk a rule chain, stopping at the first failing rule.
fn first_failure<'a, T: ?Sized>(value: &T, chain: &'a [FieldRule<T>]) -> Option<&'a FieldRule<T>> {
    chain.iter().find(|rule| !(rule.check)(value))
}

fn phone_min_length(v: &str) -> bool {
    v.chars().count() >= PHONE_MIN_LEN
}

fn phone_max_length(v: &str) -> bool {
    v.chars().count() <= PHONE_MAX_LEN
}

fn phone_digits_only(v: &str) -> bool {
    v.bytes().all(|b| b.is_ascii_digit())
}

fn amount_min_value(v: &f64) -> bool {
    *v >= MIN_AMOUNT
}

const PHONE_RULES: [FieldRule<str>; 3] = [
    FieldRule { name: "min_length", message: MSG_PHONE_MIN, check: phone_min_length },
    FieldRule { name: "max_length", message: MSG_PHONE_MAX, check: phone_max_length },
    FieldRule { name: "digits_only", message: MSG_PHONE_DIGITS, check: phone_digits_only },
];

const AMOUNT_RULES: [FieldRule<f64>; 1] = [
    FieldRule { name: "min_value", message: MSG_AMOUNT_MIN, check: amount_min_value },
];

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Violation {
    pub field: Field,
    pub rule: String,
    pub message: String,
}

impl Violation {
    pub fn new(field: Field, rule: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field,
            rule: rule.into(),
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ValidationResult {
    pub valid: bool,
    pub violations: Vec<Violation>,
}

impl ValidationResult {
    pub fn success() -> Self {
        Self { valid: true, violations: vec![] }
    }

    pub fn failure(violations: Vec<Violation>) -> Self {
        Self { valid: false, violations }
    }

    pub fn is_valid(&self) -> bool {
        self.valid
    }

    pub fn message_for(&self, field: Field) -> Option<&str> {
        self.violations
            .iter()
            .find(|v| v.field == field)
            .map(|v| v.message.as_str())
    }

    /// Field name mapped to its first failing message, the shape the
    /// form renders next to each input.
    pub fn field_errors(&self) -> BTreeMap<&'static str, &str> {
        self.violations
            .iter()
            .map(|v| (v.field.as_str(), v.message.as_str()))
            .collect()
    }
}

// Presence and castability outrank length/format/range: a rule chain
// only ever sees a resolved value.

fn check_provider(value: Option<&str>) -> Option<Violation> {
    match value {
        Some(v) if !v.is_empty() => None,
        _ => Some(Violation::new(Field::Provider, "required", MSG_PROVIDER_REQUIRED)),
    }
}

fn check_phone(value: Option<&str>) -> Option<Violation> {
    let value = match value {
        Some(v) if !v.is_empty() => v,
        _ => return Some(Violation::new(Field::PhoneNumber, "required", MSG_PHONE_REQUIRED)),
    };

    first_failure(value, &PHONE_RULES)
        .map(|rule| Violation::new(Field::PhoneNumber, rule.name, rule.message))
}

fn check_amount(value: Option<&AmountValue>) -> Option<Violation> {
    let value = match value {
        Some(v) => v,
        None => return Some(Violation::new(Field::Amount, "required", MSG_AMOUNT_REQUIRED)),
    };

    let amount = match value.as_number() {
        Some(n) => n,
        None => return Some(Violation::new(Field::Amount, "numeric", MSG_AMOUNT_NUMERIC)),
    };

    first_failure(&amount, &AMOUNT_RULES)
        .map(|rule| Violation::new(Field::Amount, rule.name, rule.message))
}

/// Validator applies the fixed rule table to one submitted order.
pub struct Validator;

impl Validator {
    pub fn new() -> Self {
        Self
    }

    pub fn validate(&self, order: &TopUpRequest) -> ValidationResult {
        let mut violations = vec![];
        violations.extend(check_provider(order.provider.as_deref()));
        violations.extend(check_phone(order.phone_number.as_deref()));
        violations.extend(check_amount(order.amount.as_ref()));

        if violations.is_empty() {
            ValidationResult::success()
        } else {
            ValidationResult::failure(violations)
        }
    }
}

impl Default for Validator {
    fn default() -> Self {
        Self::new()
    }
}

/// One row of the effective rule table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RuleDescriptor {
    pub field: Field,
    pub rule: String,
    pub message: String,
}

/// The full rule table as data, in evaluation order per field.
pub fn rule_table() -> Vec<RuleDescriptor> {
    let mut table = vec![
        RuleDescriptor {
            field: Field::Provider,
            rule: "required".to_string(),
            message: MSG_PROVIDER_REQUIRED.to_string(),
        },
        RuleDescriptor {
            field: Field::PhoneNumber,
            rule: "required".to_string(),
            message: MSG_PHONE_REQUIRED.to_string(),
        },
    ];

    for rule in &PHONE_RULES {
        table.push(RuleDescriptor {
            field: Field::PhoneNumber,
            rule: rule.name.to_string(),
            message: rule.message.to_string(),
        });
    }

    table.push(RuleDescriptor {
        field: Field::Amount,
        rule: "required".to_string(),
        message: MSG_AMOUNT_REQUIRED.to_string(),
    });
    table.push(RuleDescriptor {
        field: Field::Amount,
        rule: "numeric".to_string(),
        message: MSG_AMOUNT_NUMERIC.to_string(),
    });

    for rule in &AMOUNT_RULES {
        table.push(RuleDescriptor {
            field: Field::Amount,
            rule: rule.name.to_string(),
            message: rule.message.to_string(),
        });
    }

    table
}
