//! Update Calculation Use Case
//!
//! Merge the patch over the stored row, re-evaluate, then persist. The
//! result is always recomputed, even when only the owner changes.

use std::sync::Arc;

use kernel::id::CalculationId;

use crate::domain::entities::{Calculation, CalculationPatch};
use crate::domain::repository::{CalculationSession, CalculationStore};
use crate::error::{CalculationError, CalculationResult};

/// Update Calculation Use Case
pub struct UpdateCalculationUseCase<S>
where
    S: CalculationStore,
{
    store: Arc<S>,
}

impl<S> UpdateCalculationUseCase<S>
where
    S: CalculationStore,
{
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    pub async fn execute(
        &self,
        id: CalculationId,
        patch: CalculationPatch,
    ) -> CalculationResult<Calculation> {
        let mut session = self.store.begin().await?;

        let stored = session
            .find_by_id(id)
            .await?
            .ok_or(CalculationError::CalculationNotFound)?;

        let merged = stored.patched(&patch)?;

        if let Some(Some(user_id)) = patch.user_id {
            if !session.user_exists(user_id).await? {
                return Err(CalculationError::UserNotFound);
            }
        }

        let updated = session.update(&merged).await?;
        session.commit().await?;

        tracing::info!(calculation_id = %updated.calculation_id, "Calculation updated");

        Ok(updated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::create::{CreateCalculationInput, CreateCalculationUseCase};
    use crate::application::get::GetCalculationUseCase;
    use crate::domain::services::EvaluationError;
    use crate::infra::memory::MemoryCalculationRepository;
    use kernel::id::UserId;

    async fn create(store: &MemoryCalculationRepository, a: f64, b: f64, op: &str) -> Calculation {
        CreateCalculationUseCase::new(Arc::new(store.clone()))
            .execute(CreateCalculationInput {
                a,
                b,
                operation: op.to_string(),
                user_id: None,
            })
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_zero_divisor_leaves_row_unchanged() {
        let store = MemoryCalculationRepository::new();
        let original = create(&store, 10.0, 2.0, "divide").await;

        let err = UpdateCalculationUseCase::new(Arc::new(store.clone()))
            .execute(
                original.calculation_id,
                CalculationPatch {
                    b: Some(0.0),
                    ..Default::default()
                },
            )
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            CalculationError::Validation(EvaluationError::DivisionByZero)
        ));

        let reread = GetCalculationUseCase::new(Arc::new(store))
            .execute(original.calculation_id)
            .await
            .unwrap();
        assert_eq!(reread, original);
    }

    #[tokio::test]
    async fn test_owner_only_update_keeps_result() {
        let store = MemoryCalculationRepository::new();
        store.add_user(UserId::from_i64(1)).await;
        let original = create(&store, 6.0, 3.0, "multiply").await;

        let updated = UpdateCalculationUseCase::new(Arc::new(store))
            .execute(
                original.calculation_id,
                CalculationPatch {
                    user_id: Some(Some(UserId::from_i64(1))),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.result, 18.0);
        assert_eq!(updated.user_id, Some(UserId::from_i64(1)));
    }

    #[tokio::test]
    async fn test_missing_row() {
        let store = MemoryCalculationRepository::new();
        let err = UpdateCalculationUseCase::new(Arc::new(store))
            .execute(CalculationId::from_i64(42), CalculationPatch::default())
            .await
            .unwrap_err();
        assert!(matches!(err, CalculationError::CalculationNotFound));
    }

    #[tokio::test]
    async fn test_unknown_owner() {
        let store = MemoryCalculationRepository::new();
        let original = create(&store, 1.0, 2.0, "add").await;

        let err = UpdateCalculationUseCase::new(Arc::new(store))
            .execute(
                original.calculation_id,
                CalculationPatch {
                    user_id: Some(Some(UserId::from_i64(5))),
                    ..Default::default()
                },
            )
            .await
            .unwrap_err();
        assert!(matches!(err, CalculationError::UserNotFound));
    }
}
