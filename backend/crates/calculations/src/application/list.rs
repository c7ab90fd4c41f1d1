//! List Calculations Use Case

use std::sync::Arc;

use crate::application::config::CalculationsConfig;
use crate::domain::entities::Calculation;
use crate::domain::repository::{CalculationSession, CalculationStore};
use crate::domain::value_objects::Page;
use crate::error::CalculationResult;

/// Paging input; missing values fall back to [`CalculationsConfig`]
#[derive(Debug, Clone, Copy, Default)]
pub struct ListCalculationsInput {
    pub skip: Option<u32>,
    pub limit: Option<u32>,
}

/// List Calculations Use Case
pub struct ListCalculationsUseCase<S>
where
    S: CalculationStore,
{
    store: Arc<S>,
    config: Arc<CalculationsConfig>,
}

impl<S> ListCalculationsUseCase<S>
where
    S: CalculationStore,
{
    pub fn new(store: Arc<S>, config: Arc<CalculationsConfig>) -> Self {
        Self { store, config }
    }

    /// No upper bound is applied to `limit`.
    pub async fn execute(&self, input: ListCalculationsInput) -> CalculationResult<Vec<Calculation>> {
        let page = Page::new(
            input.skip.unwrap_or(self.config.default_skip),
            input.limit.unwrap_or(self.config.default_limit),
        );

        let mut session = self.store.begin().await?;
        let rows = session.list(page).await?;
        session.commit().await?;

        Ok(rows)
    }
}
