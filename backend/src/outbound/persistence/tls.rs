//! Encrypted connection setup for pooled PostgreSQL connections.
//!
//! The managed database presents a certificate the service cannot verify, so
//! the connector encrypts the link without validating the certificate chain
//! or hostname. `sslmode=require` is enforced unless the connection string
//! names a mode explicitly.

use std::str::FromStr;

use diesel::{ConnectionError, ConnectionResult};
use diesel_async::AsyncPgConnection;
use futures_util::FutureExt;
use futures_util::future::BoxFuture;
use postgres_native_tls::MakeTlsConnector;
use tokio_postgres::config::SslMode;
use tracing::error;

/// Open one TLS-backed connection for the pool manager.
pub(super) fn establish_tls_connection(
    database_url: &str,
) -> BoxFuture<'_, ConnectionResult<AsyncPgConnection>> {
    async move {
        let config = connection_config(database_url)?;
        let connector = tls_connector()?;
        let (client, connection) = config
            .connect(connector)
            .await
            .map_err(|err| ConnectionError::BadConnection(err.to_string()))?;

        tokio::spawn(async move {
            if let Err(error) = connection.await {
                error!(%error, "database connection closed with error");
            }
        });

        AsyncPgConnection::try_from(client).await
    }
    .boxed()
}

fn connection_config(database_url: &str) -> ConnectionResult<tokio_postgres::Config> {
    let mut config = tokio_postgres::Config::from_str(database_url)
        .map_err(|err| ConnectionError::InvalidConnectionUrl(err.to_string()))?;
    if !database_url.contains("sslmode=") {
        config.ssl_mode(SslMode::Require);
    }
    Ok(config)
}

fn tls_connector() -> ConnectionResult<MakeTlsConnector> {
    let connector = native_tls::TlsConnector::builder()
        .danger_accept_invalid_certs(true)
        .danger_accept_invalid_hostnames(true)
        .build()
        .map_err(|err| ConnectionError::BadConnection(err.to_string()))?;
    Ok(MakeTlsConnector::new(connector))
}
