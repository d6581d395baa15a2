//! Backend entry-point: reads configuration, opens the database pool, and
//! serves the REST endpoints.

mod server;

use mockable::DefaultEnv;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use donor_registry::outbound::persistence::DbPool;
use server::{ServerConfig, create_server, server_settings_from_env};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // A missing .env file is normal outside local development.
    let dotenv = dotenvy::dotenv();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    if let Err(e) = fmt().with_env_filter(filter).json().try_init() {
        warn!(error = %e, "tracing init failed");
    }
    if let Err(error) = dotenv {
        if !error.not_found() {
            warn!(%error, "failed to load .env file");
        }
    }

    let settings = server_settings_from_env(&DefaultEnv::new()).map_err(|error| {
        tracing::error!(%error, "invalid server configuration");
        std::io::Error::new(std::io::ErrorKind::InvalidInput, error)
    })?;

    let pool = DbPool::new(settings.pool_config()).await.map_err(|error| {
        tracing::error!(%error, "failed to create database pool");
        std::io::Error::other(error)
    })?;

    info!(bind_addr = %settings.bind_addr, "starting donor registration server");
    let server = create_server(ServerConfig::new(settings.bind_addr, pool))?;
    server.await
}
