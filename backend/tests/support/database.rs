//! Helpers for integration tests that need a real PostgreSQL server.
//!
//! Tests run only when `DONOR_TEST_DATABASE_URL` points at a disposable
//! database. For a local server without TLS, append `?sslmode=disable`.

use postgres::{Client, NoTls};

/// Environment variable naming the test database.
pub const TEST_DATABASE_URL_ENV: &str = "DONOR_TEST_DATABASE_URL";

const CREATE_DONORS_TABLE: &str = "CREATE TABLE IF NOT EXISTS donors (
    id SERIAL PRIMARY KEY,
    full_name TEXT NOT NULL,
    email TEXT NOT NULL UNIQUE,
    phone TEXT NOT NULL,
    city TEXT NOT NULL,
    blood_group TEXT,
    is_blood_donor BOOLEAN NOT NULL,
    is_organ_donor BOOLEAN NOT NULL,
    organs_to_donate TEXT NOT NULL
)";

/// Return the test database URL, or print a skip marker when unset.
pub fn database_url_or_skip(test_name: &str) -> Option<String> {
    match std::env::var(TEST_DATABASE_URL_ENV) {
        Ok(url) if !url.trim().is_empty() => Some(url),
        _ => {
            eprintln!("SKIP-TEST-DATABASE: {test_name} skipped; {TEST_DATABASE_URL_ENV} not set");
            None
        }
    }
}

/// Render a PostgreSQL error with its SQLSTATE and server detail.
pub fn format_postgres_error(error: &postgres::Error) -> String {
    match error.as_db_error() {
        Some(db) => format!("{} ({}): {:?}", db.message(), db.code().code(), db.detail()),
        None => error.to_string(),
    }
}

/// Open a plain setup client.
///
/// Setup traffic does not go through the service's TLS connector, so the test
/// database must accept unencrypted connections from the test host.
pub fn setup_client(url: &str) -> Result<Client, String> {
    Client::connect(url, NoTls).map_err(|err| format_postgres_error(&err))
}

/// Create the `donors` table if it does not exist yet.
pub fn ensure_schema(client: &mut Client) -> Result<(), String> {
    client
        .batch_execute(CREATE_DONORS_TABLE)
        .map_err(|err| format_postgres_error(&err))
}

/// Number of stored rows for `email`.
pub fn count_rows_for(client: &mut Client, email: &str) -> Result<i64, String> {
    let row = client
        .query_one("SELECT COUNT(*) FROM donors WHERE email = $1", &[&email])
        .map_err(|err| format_postgres_error(&err))?;
    Ok(row.get(0))
}

/// Stored blood group and organ text for `email`.
pub fn stored_fields_for(
    client: &mut Client,
    email: &str,
) -> Result<(Option<String>, String), String> {
    let row = client
        .query_one(
            "SELECT blood_group, organs_to_donate FROM donors WHERE email = $1",
            &[&email],
        )
        .map_err(|err| format_postgres_error(&err))?;
    Ok((row.get(0), row.get(1)))
}
