//! Application Layer - Use Cases
//!
//! Each use case opens one store session, and commits it only when the
//! whole operation succeeded.

pub mod config;
pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod update;

pub use config::CalculationsConfig;
pub use create::{CreateCalculationInput, CreateCalculationUseCase};
pub use delete::DeleteCalculationUseCase;
pub use get::GetCalculationUseCase;
pub use list::{ListCalculationsInput, ListCalculationsUseCase};
pub use update::UpdateCalculationUseCase;
