//! API Server Entry Point
//!
//! Uses `anyhow` for startup errors; request errors go through
//! `kernel::error::AppError`.

use api::{ApiConfig, build_router};
use calculations::{CalculationsConfig, PgCalculationRepository, calculations_router};
use sqlx::postgres::PgPoolOptions;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use users::{PgUserRepository, UsersConfig, users_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "api=info,users=info,calculations=info,tower_http=info".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ApiConfig::from_env()?;

    // Database connection
    let pool = PgPoolOptions::new()
        .max_connections(config.database_max_connections)
        .connect(&config.database_url)
        .await?;

    tracing::info!("Connected to database");

    // Run migrations
    sqlx::migrate!("../../../database/migrations")
        .run(&pool)
        .await?;

    tracing::info!("Migrations completed");

    let users_config = match &config.password_pepper {
        Some(pepper) => UsersConfig::with_pepper(pepper.as_bytes()),
        None => UsersConfig::default(),
    };

    let app = build_router(
        users_router(PgUserRepository::new(pool.clone()), users_config),
        calculations_router(
            PgCalculationRepository::new(pool.clone()),
            CalculationsConfig::default(),
        ),
        pool,
        &config,
    );

    // Start server
    tracing::info!("Listening on {}", config.bind_addr);

    let listener = TcpListener::bind(config.bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
