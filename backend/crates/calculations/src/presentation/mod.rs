//! Presentation Layer - HTTP handlers, DTOs, router

pub mod dto;
pub mod handlers;
pub mod router;

pub use handlers::CalculationsAppState;
pub use router::{calculations_router, calculations_router_generic};
