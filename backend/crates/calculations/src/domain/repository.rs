//! Store Traits
//!
//! Interfaces for data persistence. Implementations are in the infra layer.
//! Sessions follow the same begin / pass `&mut` / commit protocol as the
//! users crate: dropping an uncommitted session discards its writes.

use std::future::Future;

use kernel::id::{CalculationId, UserId};

use crate::domain::entities::{Calculation, NewCalculation};
use crate::domain::value_objects::Page;
use crate::error::CalculationResult;

/// Unit of work over the calculations table
#[trait_variant::make(CalculationSession: Send)]
pub trait LocalCalculationSession {
    /// Insert and return the stored row
    async fn insert(&mut self, calculation: &NewCalculation) -> CalculationResult<Calculation>;

    async fn find_by_id(&mut self, id: CalculationId) -> CalculationResult<Option<Calculation>>;

    /// Rows in insertion order
    async fn list(&mut self, page: Page) -> CalculationResult<Vec<Calculation>>;

    /// Overwrite every mutable column of an existing row
    async fn update(&mut self, calculation: &Calculation) -> CalculationResult<Calculation>;

    /// Returns false if no row had this id
    async fn delete(&mut self, id: CalculationId) -> CalculationResult<bool>;

    /// Whether a user with this id exists
    async fn user_exists(&mut self, user_id: UserId) -> CalculationResult<bool>;

    async fn commit(self) -> CalculationResult<()>;
}

/// Source of [`CalculationSession`]s
pub trait CalculationStore: Clone + Send + Sync + 'static {
    type Session: CalculationSession;

    fn begin(&self) -> impl Future<Output = CalculationResult<Self::Session>> + Send;
}
