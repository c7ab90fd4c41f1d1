//! Get Calculation Use Case

use std::sync::Arc;

use kernel::id::CalculationId;

use crate::domain::entities::Calculation;
use crate::domain::repository::{CalculationSession, CalculationStore};
use crate::error::{CalculationError, CalculationResult};

/// Get Calculation Use Case
pub struct GetCalculationUseCase<S>
where
    S: CalculationStore,
{
    store: Arc<S>,
}

impl<S> GetCalculationUseCase<S>
where
    S: CalculationStore,
{
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    pub async fn execute(&self, id: CalculationId) -> CalculationResult<Calculation> {
        let mut session = self.store.begin().await?;
        let calculation = session.find_by_id(id).await?;
        session.commit().await?;

        calculation.ok_or(CalculationError::CalculationNotFound)
    }
}
