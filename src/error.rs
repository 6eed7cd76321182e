//! Error types for the calorie estimator.

use thiserror::Error;

use crate::domain::Field;

/// Combined message shown for any rejected submission.
pub const VALID_RANGES_MESSAGE: &str =
    "Please enter valid data! (Age: 10–110, Height: 100–250 cm, Weight: 30–300 kg)";

/// Errors raised when biometric input or a catalog selection is rejected.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("{field} is missing")]
    Missing { field: Field },

    #[error("{field} is not a number: {value:?}")]
    NotNumeric { field: Field, value: String },

    #[error("{field} {value} is outside {}", .field.range_text())]
    OutOfRange { field: Field, value: f64 },

    #[error("unknown activity level index {0} (expected 0–4)")]
    UnknownActivityLevel(usize),

    #[error("unknown goal index {0} (expected 0–2)")]
    UnknownGoal(usize),
}

impl ValidationError {
    /// The biometric field that failed, if any.
    pub fn field(&self) -> Option<Field> {
        match self {
            ValidationError::Missing { field }
            | ValidationError::NotNumeric { field, .. }
            | ValidationError::OutOfRange { field, .. } => Some(*field),
            ValidationError::UnknownActivityLevel(_) | ValidationError::UnknownGoal(_) => None,
        }
    }

    /// Human-readable message naming all three valid ranges.
    pub fn user_message(&self) -> &'static str {
        VALID_RANGES_MESSAGE
    }
}

/// Errors that can occur when parsing selector values from text.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("unknown sex: {0}")]
    UnknownSex(String),

    #[error("unknown formula: {0}")]
    UnknownFormula(String),

    #[error("unknown activity level: {0}")]
    UnknownActivityLevel(String),

    #[error("unknown goal: {0}")]
    UnknownGoal(String),
}
