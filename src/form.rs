//! Form Payload Contract
//!
//! Wire types for the order form. Every field is optional on the wire:
//! absence is data the rule engine judges, never a decode failure.

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FormError {
    #[error("Invalid payload: {0}")]
    InvalidPayload(#[from] serde_json::Error),
}

/// The three order form fields, under their wire names.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    Provider,
    PhoneNumber,
    Amount,
}

impl Field {
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Provider => "provider",
            Field::PhoneNumber => "phoneNumber",
            Field::Amount => "amount",
        }
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Amount as the form posts it: a JSON number, or text to be cast.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum AmountValue {
    Number(f64),
    Text(String),
}

impl AmountValue {
    /// Cast to a finite number. Text inputs are trimmed and parsed;
    /// anything that does not cast is a type violation upstream.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            AmountValue::Number(n) => Some(*n).filter(|n| n.is_finite()),
            AmountValue::Text(s) => s.trim().parse::<f64>().ok().filter(|n| n.is_finite()),
        }
    }
}

/// One submitted top-up order.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TopUpRequest {
    #[serde(default)]
    pub provider: Option<String>,
    #[serde(default)]
    pub phone_number: Option<String>,
    #[serde(default)]
    pub amount: Option<AmountValue>,
}

impl TopUpRequest {
    /// Decode a submitted payload. The only fallible entry point.
    pub fn from_json(payload: &str) -> Result<Self, FormError> {
        Ok(serde_json::from_str(payload)?)
    }
}
