//! Server configuration loaded from environment variables.

use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::Context;

const DEFAULT_MAX_CONNECTIONS: u32 = 5;
const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8000";
const DEFAULT_FRONTEND_ORIGINS: &str = "http://localhost:8000,http://127.0.0.1:8000";
const DEFAULT_STATIC_DIR: &str = "static";

/// Server configuration
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// PostgreSQL connection string (`DATABASE_URL`, required)
    pub database_url: String,
    /// Pool size (`DATABASE_MAX_CONNECTIONS`)
    pub database_max_connections: u32,
    /// Listen address (`BIND_ADDR`)
    pub bind_addr: SocketAddr,
    /// CORS allow-list (`FRONTEND_ORIGINS`, comma separated)
    pub frontend_origins: Vec<String>,
    /// Directory served under `/static` (`STATIC_DIR`)
    pub static_dir: PathBuf,
    /// Application-wide password pepper (`PASSWORD_PEPPER`)
    pub password_pepper: Option<String>,
}

impl ApiConfig {
    /// Load configuration from the process environment.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL").context("DATABASE_URL must be set")?;

        let database_max_connections = match lookup("DATABASE_MAX_CONNECTIONS") {
            Some(raw) => raw
                .trim()
                .parse()
                .with_context(|| format!("invalid DATABASE_MAX_CONNECTIONS: {raw}"))?,
            None => DEFAULT_MAX_CONNECTIONS,
        };

        let bind_addr = lookup("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind_addr
            .trim()
            .parse()
            .with_context(|| format!("invalid BIND_ADDR: {bind_addr}"))?;

        let frontend_origins = lookup("FRONTEND_ORIGINS")
            .unwrap_or_else(|| DEFAULT_FRONTEND_ORIGINS.to_string())
            .split(',')
            .map(|origin| origin.trim().to_string())
            .filter(|origin| !origin.is_empty())
            .collect();

        let static_dir = lookup("STATIC_DIR")
            .unwrap_or_else(|| DEFAULT_STATIC_DIR.to_string())
            .into();

        let password_pepper = lookup("PASSWORD_PEPPER").filter(|p| !p.is_empty());

        Ok(Self {
            database_url,
            database_max_connections,
            bind_addr,
            frontend_origins,
            static_dir,
            password_pepper,
        })
    }
}
