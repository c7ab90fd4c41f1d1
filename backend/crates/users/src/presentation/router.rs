//! Users Router

use axum::{Router, routing::post};
use std::sync::Arc;

use crate::application::config::UsersConfig;
use crate::domain::repository::UserStore;
use crate::infra::postgres::PgUserRepository;
use crate::presentation::handlers::{self, UsersAppState};

/// Create the users router with PostgreSQL store
pub fn users_router(repo: PgUserRepository, config: UsersConfig) -> Router {
    users_router_generic(repo, config)
}

/// Create a users router for any store implementation
pub fn users_router_generic<S>(store: S, config: UsersConfig) -> Router
where
    S: UserStore,
{
    let state = UsersAppState {
        store: Arc::new(store),
        config: Arc::new(config),
    };

    Router::new()
        .route("/register", post(handlers::register::<S>))
        .route("/login", post(handlers::login::<S>))
        .with_state(state)
}
