//! In-memory Store Implementation
//!
//! Same session semantics as the users crate's memory store: one session
//! at a time, writes staged until commit. Known user ids stand in for the
//! foreign key to `users`.

use std::collections::HashSet;
use std::sync::Arc;

use chrono::Utc;
use kernel::id::{CalculationId, UserId};
use tokio::sync::{Mutex, OwnedMutexGuard};

use crate::domain::entities::{Calculation, NewCalculation};
use crate::domain::repository::{CalculationSession, CalculationStore};
use crate::domain::value_objects::Page;
use crate::error::{CalculationError, CalculationResult};

#[derive(Debug, Clone, Default)]
struct CalculationTable {
    last_id: i64,
    rows: Vec<Calculation>,
    users: HashSet<UserId>,
}

/// In-memory calculation store
#[derive(Clone, Default)]
pub struct MemoryCalculationRepository {
    table: Arc<Mutex<CalculationTable>>,
}

impl MemoryCalculationRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a user id that calculations may reference
    pub async fn add_user(&self, user_id: UserId) {
        self.table.lock().await.users.insert(user_id);
    }

    /// Number of committed calculations
    pub async fn len(&self) -> usize {
        self.table.lock().await.rows.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

impl CalculationStore for MemoryCalculationRepository {
    type Session = MemoryCalculationSession;

    async fn begin(&self) -> CalculationResult<MemoryCalculationSession> {
        let guard = self.table.clone().lock_owned().await;
        let staged = guard.clone();
        Ok(MemoryCalculationSession { guard, staged })
    }
}

pub struct MemoryCalculationSession {
    guard: OwnedMutexGuard<CalculationTable>,
    staged: CalculationTable,
}

impl MemoryCalculationSession {
    fn check_owner(&self, user_id: Option<UserId>) -> CalculationResult<()> {
        match user_id {
            Some(id) if !self.staged.users.contains(&id) => Err(CalculationError::UserNotFound),
            _ => Ok(()),
        }
    }
}

impl CalculationSession for MemoryCalculationSession {
    async fn insert(&mut self, calculation: &NewCalculation) -> CalculationResult<Calculation> {
        self.check_owner(calculation.user_id)?;

        self.staged.last_id += 1;
        let stored = Calculation {
            calculation_id: CalculationId::from_i64(self.staged.last_id),
            a: calculation.a,
            b: calculation.b,
            operation: calculation.operation,
            result: calculation.result,
            user_id: calculation.user_id,
            created_at: Utc::now(),
        };
        self.staged.rows.push(stored.clone());

        Ok(stored)
    }

    async fn find_by_id(&mut self, id: CalculationId) -> CalculationResult<Option<Calculation>> {
        Ok(self
            .staged
            .rows
            .iter()
            .find(|c| c.calculation_id == id)
            .cloned())
    }

    async fn list(&mut self, page: Page) -> CalculationResult<Vec<Calculation>> {
        Ok(self
            .staged
            .rows
            .iter()
            .skip(page.skip as usize)
            .take(page.limit as usize)
            .cloned()
            .collect())
    }

    async fn update(&mut self, calculation: &Calculation) -> CalculationResult<Calculation> {
        self.check_owner(calculation.user_id)?;

        let row = self
            .staged
            .rows
            .iter_mut()
            .find(|c| c.calculation_id == calculation.calculation_id)
            .ok_or(CalculationError::CalculationNotFound)?;
        *row = calculation.clone();

        Ok(row.clone())
    }

    async fn delete(&mut self, id: CalculationId) -> CalculationResult<bool> {
        let before = self.staged.rows.len();
        self.staged.rows.retain(|c| c.calculation_id != id);
        Ok(self.staged.rows.len() != before)
    }

    async fn user_exists(&mut self, user_id: UserId) -> CalculationResult<bool> {
        Ok(self.staged.users.contains(&user_id))
    }

    async fn commit(self) -> CalculationResult<()> {
        let Self { mut guard, staged } = self;
        *guard = staged;
        Ok(())
    }
}
