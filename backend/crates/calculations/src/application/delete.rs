//! Delete Calculation Use Case

use std::sync::Arc;

use kernel::id::CalculationId;

use crate::domain::repository::{CalculationSession, CalculationStore};
use crate::error::{CalculationError, CalculationResult};

/// Delete Calculation Use Case
pub struct DeleteCalculationUseCase<S>
where
    S: CalculationStore,
{
    store: Arc<S>,
}

impl<S> DeleteCalculationUseCase<S>
where
    S: CalculationStore,
{
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    pub async fn execute(&self, id: CalculationId) -> CalculationResult<()> {
        let mut session = self.store.begin().await?;

        if !session.delete(id).await? {
            return Err(CalculationError::CalculationNotFound);
        }
        session.commit().await?;

        tracing::info!(calculation_id = %id, "Calculation deleted");

        Ok(())
    }
}
