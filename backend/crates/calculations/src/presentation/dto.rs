//! API DTOs (Data Transfer Objects)

use chrono::{DateTime, Utc};
use kernel::id::{CalculationId, UserId};
use serde::{Deserialize, Deserializer, Serialize};

use crate::domain::entities::{Calculation, CalculationPatch};
use crate::domain::value_objects::OperationType;

/// Request for POST /calculations
///
/// `type` is kept as a string so that an unknown tag is reported by the
/// evaluator with its own message.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateCalculationRequest {
    pub a: f64,
    pub b: f64,
    #[serde(rename = "type")]
    pub operation: String,
    #[serde(default)]
    pub user_id: Option<UserId>,
}

/// Request for PUT /calculations/{id}; every field optional
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateCalculationRequest {
    #[serde(default)]
    pub a: Option<f64>,
    #[serde(default)]
    pub b: Option<f64>,
    #[serde(default, rename = "type")]
    pub operation: Option<String>,
    /// Absent: keep. `null`: clear.
    #[serde(default, deserialize_with = "deserialize_some")]
    #[allow(clippy::option_option)]
    pub user_id: Option<Option<UserId>>,
}

impl From<UpdateCalculationRequest> for CalculationPatch {
    fn from(req: UpdateCalculationRequest) -> Self {
        Self {
            a: req.a,
            b: req.b,
            operation: req.operation,
            user_id: req.user_id,
        }
    }
}

/// Wrap any present value (including `null`) in `Some`
fn deserialize_some<'de, T, D>(deserializer: D) -> Result<Option<T>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    T::deserialize(deserializer).map(Some)
}

/// Query for GET /calculations
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListQuery {
    pub skip: Option<u32>,
    pub limit: Option<u32>,
}

/// Calculation as returned by every endpoint
#[derive(Debug, Clone, Serialize)]
pub struct CalculationResponse {
    pub id: CalculationId,
    pub a: f64,
    pub b: f64,
    #[serde(rename = "type")]
    pub operation: OperationType,
    pub result: f64,
    pub user_id: Option<UserId>,
    pub created_at: DateTime<Utc>,
}

impl From<Calculation> for CalculationResponse {
    fn from(calc: Calculation) -> Self {
        Self {
            id: calc.calculation_id,
            a: calc.a,
            b: calc.b,
            operation: calc.operation,
            result: calc.result,
            user_id: calc.user_id,
            created_at: calc.created_at,
        }
    }
}
