//! Infrastructure Layer - Store implementations

pub mod memory;
pub mod postgres;

pub use memory::MemoryCalculationRepository;
pub use postgres::PgCalculationRepository;
