//! API application: configuration and router assembly.
//!
//! The binary in `main.rs` wires these to PostgreSQL; tests wire them to
//! the in-memory stores.

pub mod config;
pub mod routes;

pub use config::ApiConfig;
pub use routes::build_router;

// Re-export unified error types for use in handlers
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};
