//! Domain Value Objects
//!
//! Immutable value types for the calculations domain.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::services::EvaluationError;

/// Supported arithmetic operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OperationType {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl OperationType {
    pub const ALL: [OperationType; 4] = [
        OperationType::Add,
        OperationType::Subtract,
        OperationType::Multiply,
        OperationType::Divide,
    ];

    /// Canonical lowercase tag, as stored and serialized
    pub fn as_str(&self) -> &'static str {
        match self {
            OperationType::Add => "add",
            OperationType::Subtract => "subtract",
            OperationType::Multiply => "multiply",
            OperationType::Divide => "divide",
        }
    }

    /// Apply the operation with plain `f64` semantics.
    ///
    /// Division by zero (including `-0.0`) is an error rather than an
    /// infinity.
    pub fn apply(&self, a: f64, b: f64) -> Result<f64, EvaluationError> {
        match self {
            OperationType::Add => Ok(a + b),
            OperationType::Subtract => Ok(a - b),
            OperationType::Multiply => Ok(a * b),
            OperationType::Divide if b == 0.0 => Err(EvaluationError::DivisionByZero),
            OperationType::Divide => Ok(a / b),
        }
    }
}

impl FromStr for OperationType {
    type Err = EvaluationError;

    /// Tags are matched case-insensitively after trimming
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tag = s.trim();
        Self::ALL
            .into_iter()
            .find(|op| op.as_str().eq_ignore_ascii_case(tag))
            .ok_or_else(|| EvaluationError::InvalidOperation(s.to_string()))
    }
}

impl fmt::Display for OperationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Offset/limit window over insertion order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    pub skip: u32,
    pub limit: u32,
}

impl Page {
    pub fn new(skip: u32, limit: u32) -> Self {
        Self { skip, limit }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("ADD".parse::<OperationType>(), Ok(OperationType::Add));
        assert_eq!(" Divide ".parse::<OperationType>(), Ok(OperationType::Divide));
    }

    #[test]
    fn test_parse_error_keeps_original_tag() {
        let err = "Power".parse::<OperationType>().unwrap_err();
        assert_eq!(err, EvaluationError::InvalidOperation("Power".to_string()));
    }

    #[test]
    fn test_as_str_roundtrips_through_parse() {
        for op in OperationType::ALL {
            assert_eq!(op.as_str().parse::<OperationType>(), Ok(op));
        }
    }

    #[test]
    fn test_serde_is_lowercase() {
        assert_eq!(
            serde_json::to_string(&OperationType::Multiply).unwrap(),
            "\"multiply\""
        );
    }
}
