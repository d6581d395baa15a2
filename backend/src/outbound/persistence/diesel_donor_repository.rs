//! PostgreSQL-backed `DonorRepository` implementation using Diesel ORM.
//!
//! A registration is one parameterised `INSERT ... RETURNING id`. The pooled
//! connection is a guard scoped to the call, so it goes back to the pool
//! whether the insert succeeds or fails.

use async_trait::async_trait;
use diesel::result::{DatabaseErrorInformation, DatabaseErrorKind, Error as DieselError};
use diesel_async::RunQueryDsl;
use tracing::debug;

use crate::domain::ports::{DonorRepository, DonorRepositoryError};
use crate::domain::{DonorId, DonorRegistration};

use super::models::NewDonorRow;
use super::pool::{DbPool, PoolError};
use super::schema::donors;

/// Diesel-backed implementation of the `DonorRepository` port.
#[derive(Clone)]
pub struct DieselDonorRepository {
    pool: DbPool,
}

impl DieselDonorRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

/// Map pool errors to domain donor repository errors.
fn map_pool_error(error: PoolError) -> DonorRepositoryError {
    match error {
        PoolError::Checkout { message } | PoolError::Build { message } => {
            DonorRepositoryError::connection(message)
        }
    }
}

/// Whether a unique violation was raised by the email constraint.
fn is_email_constraint(info: &dyn DatabaseErrorInformation) -> bool {
    info.constraint_name()
        .is_some_and(|name| name.contains("email"))
}

/// Map Diesel errors to domain donor repository errors.
fn map_diesel_error(error: DieselError) -> DonorRepositoryError {
    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(
                ?kind,
                message = info.message(),
                constraint = info.constraint_name(),
                "diesel operation failed"
            );
        }
        _ => debug!(
            error_type = %std::any::type_name_of_val(&error),
            "diesel operation failed"
        ),
    }

    match error {
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, info)
            if is_email_constraint(info.as_ref()) =>
        {
            DonorRepositoryError::duplicate_email()
        }
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, info) => {
            DonorRepositoryError::connection(info.message())
        }
        DieselError::DatabaseError(_, info) => DonorRepositoryError::query(info.message()),
        DieselError::QueryBuilderError(err) => DonorRepositoryError::query(err.to_string()),
        other => DonorRepositoryError::query(other.to_string()),
    }
}

#[async_trait]
impl DonorRepository for DieselDonorRepository {
    async fn insert(
        &self,
        registration: &DonorRegistration,
    ) -> Result<DonorId, DonorRepositoryError> {
        let row = NewDonorRow::from_registration(registration)
            .map_err(|err| DonorRepositoryError::serialization(err.to_string()))?;

        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let id: i32 = diesel::insert_into(donors::table)
            .values(&row)
            .returning(donors::id)
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(DonorId::new(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    /// Database error details as PostgreSQL reports them.
    struct PgErrorInfo {
        message: &'static str,
        constraint: Option<&'static str>,
    }

    impl DatabaseErrorInformation for PgErrorInfo {
        fn message(&self) -> &str {
            self.message
        }

        fn details(&self) -> Option<&str> {
            None
        }

        fn hint(&self) -> Option<&str> {
            None
        }

        fn table_name(&self) -> Option<&str> {
            Some("donors")
        }

        fn column_name(&self) -> Option<&str> {
            None
        }

        fn constraint_name(&self) -> Option<&str> {
            self.constraint
        }

        fn statement_position(&self) -> Option<i32> {
            None
        }
    }

    fn database_error(
        kind: DatabaseErrorKind,
        message: &'static str,
        constraint: Option<&'static str>,
    ) -> DieselError {
        DieselError::DatabaseError(
            kind,
            Box::new(PgErrorInfo {
                message,
                constraint,
            }),
        )
    }

    #[rstest]
    fn pool_error_maps_to_connection_error() {
        let repo_err = map_pool_error(PoolError::checkout("timed out waiting for connection"));

        assert!(matches!(repo_err, DonorRepositoryError::Connection { .. }));
        assert!(repo_err.to_string().contains("timed out"));
    }

    #[rstest]
    fn email_unique_violation_maps_to_duplicate_email() {
        let repo_err = map_diesel_error(database_error(
            DatabaseErrorKind::UniqueViolation,
            "duplicate key value violates unique constraint \"donors_email_key\"",
            Some("donors_email_key"),
        ));

        assert_eq!(repo_err, DonorRepositoryError::DuplicateEmail);
    }

    #[rstest]
    #[case(Some("donors_pkey"))]
    #[case(None)]
    fn other_unique_violations_map_to_query_error(#[case] constraint: Option<&'static str>) {
        let repo_err = map_diesel_error(database_error(
            DatabaseErrorKind::UniqueViolation,
            "duplicate key value violates unique constraint",
            constraint,
        ));

        assert!(
            matches!(repo_err, DonorRepositoryError::Query { .. }),
            "expected Query error, got {repo_err:?}"
        );
    }

    #[rstest]
    fn closed_connection_maps_to_connection_error() {
        let repo_err = map_diesel_error(database_error(
            DatabaseErrorKind::ClosedConnection,
            "server closed the connection unexpectedly",
            None,
        ));

        assert!(matches!(repo_err, DonorRepositoryError::Connection { .. }));
    }

    #[rstest]
    fn not_null_violation_maps_to_query_error() {
        let repo_err = map_diesel_error(database_error(
            DatabaseErrorKind::NotNullViolation,
            "null value in column \"city\" violates not-null constraint",
            None,
        ));

        assert!(matches!(repo_err, DonorRepositoryError::Query { .. }));
        assert!(repo_err.to_string().contains("city"));
    }

    #[rstest]
    fn not_found_maps_to_query_error() {
        let repo_err = map_diesel_error(DieselError::NotFound);
        assert!(matches!(repo_err, DonorRepositoryError::Query { .. }));
    }
}
