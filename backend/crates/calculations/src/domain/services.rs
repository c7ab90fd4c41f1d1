//! Domain Services
//!
//! Pure arithmetic evaluation. No state, no I/O, no rounding.

use crate::domain::value_objects::OperationType;

/// Why an operation could not be evaluated
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EvaluationError {
    /// Tag is not one of the supported operations
    #[error("Invalid calculation type: '{0}'. Must be one of: add, subtract, multiply, divide")]
    InvalidOperation(String),

    #[error("Cannot divide by zero")]
    DivisionByZero,

    /// Result is infinite and cannot be stored or serialized.
    /// Raised when a calculation is built, never by [`evaluate`].
    #[error("Result is out of range")]
    OutOfRange,
}

/// Evaluate `a <operation> b` for a raw operation tag
pub fn evaluate(operation: &str, a: f64, b: f64) -> Result<f64, EvaluationError> {
    operation.parse::<OperationType>()?.apply(a, b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_operations() {
        assert_eq!(evaluate("add", 4.0, 5.0), Ok(9.0));
        assert_eq!(evaluate("subtract", 10.0, 4.0), Ok(6.0));
        assert_eq!(evaluate("multiply", 6.0, 3.0), Ok(18.0));
        assert_eq!(evaluate("divide", 10.0, 4.0), Ok(2.5));
    }

    #[test]
    fn test_no_rounding() {
        assert_eq!(evaluate("add", 0.1, 0.2), Ok(0.1 + 0.2));
        assert_eq!(evaluate("divide", 1.0, 3.0), Ok(1.0 / 3.0));
    }

    #[test]
    fn test_divide_by_zero_for_any_dividend() {
        for a in [0.0, 1.0, -7.5, f64::MAX] {
            assert_eq!(evaluate("divide", a, 0.0), Err(EvaluationError::DivisionByZero));
        }
        assert_eq!(evaluate("divide", 1.0, -0.0), Err(EvaluationError::DivisionByZero));
    }

    #[test]
    fn test_zero_is_fine_for_other_operations() {
        assert_eq!(evaluate("multiply", 5.0, 0.0), Ok(0.0));
        assert_eq!(evaluate("add", 5.0, 0.0), Ok(5.0));
    }

    #[test]
    fn test_unknown_tag() {
        let err = evaluate("modulo", 1.0, 2.0).unwrap_err();
        assert_eq!(err, EvaluationError::InvalidOperation("modulo".to_string()));
        assert_eq!(
            err.to_string(),
            "Invalid calculation type: 'modulo'. Must be one of: add, subtract, multiply, divide"
        );
    }

    #[test]
    fn test_empty_tag() {
        assert!(matches!(
            evaluate("", 1.0, 2.0),
            Err(EvaluationError::InvalidOperation(_))
        ));
    }
}
