//! Environment-driven server settings and the server configuration object.
//!
//! Settings are read through [`mockable::Env`] so parsing and validation can
//! be tested without touching the process environment.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::time::Duration;

use donor_registry::outbound::persistence::{DbPool, PoolConfig};
use mockable::Env;

const DATABASE_URL_ENV: &str = "DATABASE_URL";
const PORT_ENV: &str = "PORT";
const BIND_HOST_ENV: &str = "BIND_HOST";
const POOL_MAX_SIZE_ENV: &str = "DATABASE_POOL_MAX_SIZE";
const POOL_TIMEOUT_ENV: &str = "DATABASE_POOL_TIMEOUT_SECS";

const DEFAULT_PORT: u16 = 3001;
const DEFAULT_BIND_HOST: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);
const DEFAULT_POOL_MAX_SIZE: u32 = 10;
const DEFAULT_POOL_TIMEOUT_SECS: u64 = 30;

/// Errors raised while reading server settings.
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// A required environment variable is missing or blank.
    #[error("missing required environment variable: {name}")]
    MissingEnv { name: &'static str },
    /// A variable is present but contains an invalid value.
    #[error("invalid value for {name}='{value}'; expected {expected}")]
    InvalidEnv {
        name: &'static str,
        value: String,
        expected: &'static str,
    },
}

/// Settings derived from the process environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerSettings {
    /// PostgreSQL connection string.
    pub database_url: String,
    /// Address the HTTP listener binds to.
    pub bind_addr: SocketAddr,
    /// Maximum number of pooled connections.
    pub pool_max_size: u32,
    /// How long a request waits for a pooled connection.
    pub pool_timeout: Duration,
}

impl ServerSettings {
    /// Pool configuration derived from these settings.
    pub fn pool_config(&self) -> PoolConfig {
        PoolConfig::new(self.database_url.clone())
            .with_max_size(self.pool_max_size)
            .with_connection_timeout(self.pool_timeout)
    }
}

/// Read server settings from `env`.
pub fn server_settings_from_env<E: Env>(env: &E) -> Result<ServerSettings, ConfigError> {
    let database_url = env
        .string(DATABASE_URL_ENV)
        .filter(|value| !value.trim().is_empty())
        .ok_or(ConfigError::MissingEnv {
            name: DATABASE_URL_ENV,
        })?;

    let port = parse_or(env, PORT_ENV, DEFAULT_PORT, "a port number between 0 and 65535")?;
    let host = parse_or(env, BIND_HOST_ENV, DEFAULT_BIND_HOST, "an IP address")?;
    let pool_max_size = parse_or(
        env,
        POOL_MAX_SIZE_ENV,
        DEFAULT_POOL_MAX_SIZE,
        "a positive integer",
    )?;
    if pool_max_size == 0 {
        return Err(ConfigError::InvalidEnv {
            name: POOL_MAX_SIZE_ENV,
            value: pool_max_size.to_string(),
            expected: "a positive integer",
        });
    }
    let pool_timeout_secs = parse_or(
        env,
        POOL_TIMEOUT_ENV,
        DEFAULT_POOL_TIMEOUT_SECS,
        "a whole number of seconds",
    )?;

    Ok(ServerSettings {
        database_url,
        bind_addr: SocketAddr::new(host, port),
        pool_max_size,
        pool_timeout: Duration::from_secs(pool_timeout_secs),
    })
}

fn parse_or<E, T>(
    env: &E,
    name: &'static str,
    default: T,
    expected: &'static str,
) -> Result<T, ConfigError>
where
    E: Env,
    T: std::str::FromStr,
{
    match env.string(name) {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidEnv {
                name,
                value,
                expected,
            }),
    }
}

/// Configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) db_pool: DbPool,
}

impl ServerConfig {
    /// Construct a server configuration over an established pool.
    #[must_use]
    pub fn new(bind_addr: SocketAddr, db_pool: DbPool) -> Self {
        Self { bind_addr, db_pool }
    }
}
