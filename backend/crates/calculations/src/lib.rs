//! Calculations Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Evaluator, entities, store traits
//! - `application/` - Create, read, list, update, delete use cases
//! - `infra/` - PostgreSQL and in-memory stores
//! - `presentation/` - HTTP handlers, DTOs, router
//!
//! ## Invariants
//! - A stored `result` always equals the evaluator output for the stored
//!   `type`, `a` and `b`
//! - A failed evaluation never reaches the store

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::CalculationsConfig;
pub use domain::services::{EvaluationError, evaluate};
pub use error::{CalculationError, CalculationResult};
pub use infra::{MemoryCalculationRepository, PgCalculationRepository};
pub use presentation::router::{calculations_router, calculations_router_generic};

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

pub mod models {
    pub use crate::domain::entities::*;
    pub use crate::domain::value_objects::*;
    pub use crate::presentation::dto::*;
}
