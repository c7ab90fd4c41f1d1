//! Create Calculation Use Case

use std::sync::Arc;

use kernel::id::UserId;

use crate::domain::entities::{Calculation, NewCalculation};
use crate::domain::repository::{CalculationSession, CalculationStore};
use crate::error::{CalculationError, CalculationResult};

/// Create input; `operation` is the raw tag from the request
pub struct CreateCalculationInput {
    pub a: f64,
    pub b: f64,
    pub operation: String,
    pub user_id: Option<UserId>,
}

/// Create Calculation Use Case
pub struct CreateCalculationUseCase<S>
where
    S: CalculationStore,
{
    store: Arc<S>,
}

impl<S> CreateCalculationUseCase<S>
where
    S: CalculationStore,
{
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Evaluation runs before any store access, so invalid input never
    /// opens a session.
    pub async fn execute(&self, input: CreateCalculationInput) -> CalculationResult<Calculation> {
        let new = NewCalculation::evaluate(input.a, input.b, &input.operation, input.user_id)?;

        let mut session = self.store.begin().await?;

        if let Some(user_id) = new.user_id {
            if !session.user_exists(user_id).await? {
                return Err(CalculationError::UserNotFound);
            }
        }

        let calculation = session.insert(&new).await?;
        session.commit().await?;

        tracing::info!(
            calculation_id = %calculation.calculation_id,
            operation = %calculation.operation,
            "Calculation created"
        );

        Ok(calculation)
    }
}
