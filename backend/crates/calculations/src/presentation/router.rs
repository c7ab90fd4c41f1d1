//! Calculations Router

use axum::{Router, routing::get};
use std::sync::Arc;

use crate::application::config::CalculationsConfig;
use crate::domain::repository::CalculationStore;
use crate::infra::postgres::PgCalculationRepository;
use crate::presentation::handlers::{self, CalculationsAppState};

/// Create the calculations router with PostgreSQL store
pub fn calculations_router(repo: PgCalculationRepository, config: CalculationsConfig) -> Router {
    calculations_router_generic(repo, config)
}

/// Create a calculations router for any store implementation
///
/// Routes are relative; nest under `/calculations`.
pub fn calculations_router_generic<S>(store: S, config: CalculationsConfig) -> Router
where
    S: CalculationStore,
{
    let state = CalculationsAppState {
        store: Arc::new(store),
        config: Arc::new(config),
    };

    Router::new()
        .route(
            "/",
            get(handlers::list_calculations::<S>).post(handlers::create_calculation::<S>),
        )
        .route(
            "/{id}",
            get(handlers::get_calculation::<S>)
                .put(handlers::update_calculation::<S>)
                .delete(handlers::delete_calculation::<S>),
        )
        .with_state(state)
}
