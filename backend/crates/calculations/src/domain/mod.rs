//! Domain Layer - Business logic and entities
//!
//! This layer contains:
//! - Domain entities (Calculation, NewCalculation, CalculationPatch)
//! - Domain value objects (OperationType, Page)
//! - Domain services (the arithmetic evaluator)
//! - Store traits (interfaces)

pub mod entities;
pub mod repository;
pub mod services;
pub mod value_objects;

pub use entities::{Calculation, CalculationPatch, NewCalculation};
pub use repository::{CalculationSession, CalculationStore};
pub use services::{EvaluationError, evaluate};
pub use value_objects::{OperationType, Page};
