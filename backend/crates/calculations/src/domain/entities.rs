//! Domain Entities
//!
//! `result` is never set directly: it is produced by evaluating the
//! operation whenever operands or operation change.

use chrono::{DateTime, Utc};
use kernel::id::{CalculationId, UserId};

use crate::domain::services::EvaluationError;
use crate::domain::value_objects::OperationType;

/// Stored calculation
#[derive(Debug, Clone, PartialEq)]
pub struct Calculation {
    pub calculation_id: CalculationId,
    pub a: f64,
    pub b: f64,
    pub operation: OperationType,
    pub result: f64,
    /// Optional owner
    pub user_id: Option<UserId>,
    pub created_at: DateTime<Utc>,
}

impl Calculation {
    /// Merge `patch` over this row and recompute the result.
    ///
    /// On error `self` is untouched; the caller must not persist anything.
    pub fn patched(&self, patch: &CalculationPatch) -> Result<Calculation, EvaluationError> {
        let operation = match &patch.operation {
            Some(tag) => tag.parse()?,
            None => self.operation,
        };
        let a = patch.a.unwrap_or(self.a);
        let b = patch.b.unwrap_or(self.b);
        let result = storable(operation.apply(a, b)?)?;

        Ok(Calculation {
            calculation_id: self.calculation_id,
            a,
            b,
            operation,
            result,
            user_id: patch.user_id.unwrap_or(self.user_id),
            created_at: self.created_at,
        })
    }
}

/// Non-finite values would serialize as `null`
fn storable(result: f64) -> Result<f64, EvaluationError> {
    if result.is_finite() {
        Ok(result)
    } else {
        Err(EvaluationError::OutOfRange)
    }
}

/// Calculation about to be inserted
#[derive(Debug, Clone, PartialEq)]
pub struct NewCalculation {
    pub a: f64,
    pub b: f64,
    pub operation: OperationType,
    pub result: f64,
    pub user_id: Option<UserId>,
}

impl NewCalculation {
    /// Evaluate the operation; the only way to build a `NewCalculation`
    pub fn evaluate(
        a: f64,
        b: f64,
        operation: &str,
        user_id: Option<UserId>,
    ) -> Result<Self, EvaluationError> {
        let operation: OperationType = operation.parse()?;
        let result = storable(operation.apply(a, b)?)?;
        Ok(Self {
            a,
            b,
            operation,
            result,
            user_id,
        })
    }
}

/// Partial update
///
/// `operation` stays a raw tag so an unknown value fails evaluation
/// rather than decoding. `user_id`: `None` keeps the stored owner,
/// `Some(None)` clears it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CalculationPatch {
    pub a: Option<f64>,
    pub b: Option<f64>,
    pub operation: Option<String>,
    #[allow(clippy::option_option)]
    pub user_id: Option<Option<UserId>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stored(a: f64, b: f64, operation: OperationType) -> Calculation {
        Calculation {
            calculation_id: CalculationId::from_i64(1),
            a,
            b,
            operation,
            result: operation.apply(a, b).unwrap(),
            user_id: Some(UserId::from_i64(7)),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_new_calculation_evaluates() {
        let new = NewCalculation::evaluate(4.0, 5.0, "add", None).unwrap();
        assert_eq!(new.operation, OperationType::Add);
        assert_eq!(new.result, 9.0);
    }

    #[test]
    fn test_new_calculation_rejects_zero_divisor() {
        let err = NewCalculation::evaluate(10.0, 0.0, "divide", None).unwrap_err();
        assert_eq!(err, EvaluationError::DivisionByZero);
    }

    #[test]
    fn test_new_calculation_rejects_overflow() {
        let err = NewCalculation::evaluate(1e308, 10.0, "multiply", None).unwrap_err();
        assert_eq!(err, EvaluationError::OutOfRange);
        assert_eq!(err.to_string(), "Result is out of range");

        let err = NewCalculation::evaluate(1.0, 1e-320, "divide", None).unwrap_err();
        assert_eq!(err, EvaluationError::OutOfRange);
    }

    #[test]
    fn test_patch_overflow_fails() {
        let row = stored(1e308, 2.0, OperationType::Add);
        let patch = CalculationPatch {
            operation: Some("multiply".to_string()),
            b: Some(10.0),
            ..Default::default()
        };

        assert_eq!(row.patched(&patch), Err(EvaluationError::OutOfRange));
    }

    #[test]
    fn test_patch_unknown_operation_fails() {
        let row = stored(6.0, 3.0, OperationType::Multiply);
        let patch = CalculationPatch {
            operation: Some("modulo".to_string()),
            ..Default::default()
        };

        assert_eq!(
            row.patched(&patch),
            Err(EvaluationError::InvalidOperation("modulo".to_string()))
        );
    }

    #[test]
    fn test_patch_user_only_keeps_result() {
        let row = stored(6.0, 3.0, OperationType::Multiply);
        let patch = CalculationPatch {
            user_id: Some(Some(UserId::from_i64(9))),
            ..Default::default()
        };

        let merged = row.patched(&patch).unwrap();
        assert_eq!(merged.result, 18.0);
        assert_eq!(merged.user_id, Some(UserId::from_i64(9)));
    }

    #[test]
    fn test_patch_recomputes_with_merged_operands() {
        let row = stored(10.0, 2.0, OperationType::Divide);
        let patch = CalculationPatch {
            b: Some(4.0),
            operation: Some("subtract".to_string()),
            ..Default::default()
        };

        let merged = row.patched(&patch).unwrap();
        assert_eq!(merged.a, 10.0);
        assert_eq!(merged.result, 6.0);
        assert_eq!(merged.operation, OperationType::Subtract);
    }

    #[test]
    fn test_patch_zero_divisor_fails() {
        let row = stored(10.0, 2.0, OperationType::Divide);
        let patch = CalculationPatch {
            b: Some(0.0),
            ..Default::default()
        };

        assert_eq!(row.patched(&patch), Err(EvaluationError::DivisionByZero));
    }

    #[test]
    fn test_patch_clear_and_keep_user() {
        let row = stored(1.0, 1.0, OperationType::Add);

        let kept = row.patched(&CalculationPatch::default()).unwrap();
        assert_eq!(kept.user_id, Some(UserId::from_i64(7)));

        let cleared = row
            .patched(&CalculationPatch {
                user_id: Some(None),
                ..Default::default()
            })
            .unwrap();
        assert_eq!(cleared.user_id, None);
    }
}
