//! Port abstraction for donor registration persistence.
//!
//! Adapters decide how a failed insert is classified: a duplicate email is a
//! distinct [`DonorRepositoryError::DuplicateEmail`] variant so callers never
//! inspect driver error codes or messages.

use async_trait::async_trait;

use crate::domain::{DonorId, DonorRegistration};

use super::define_port_error;

define_port_error! {
    /// Errors raised by donor repository adapters.
    pub enum DonorRepositoryError {
        /// Repository connection could not be established or was lost.
        Connection { message: String } => "donor repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "donor repository query failed: {message}",
        /// Registration data could not be encoded for storage.
        Serialization { message: String } => "donor repository serialization failed: {message}",
        /// Another registration already uses this email address.
        DuplicateEmail => "a donor with this email is already registered",
    }
}

/// Port for storing donor registrations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DonorRepository: Send + Sync {
    /// Insert a registration and return the identifier storage assigned.
    ///
    /// Nothing is stored when an error is returned.
    async fn insert(
        &self,
        registration: &DonorRegistration,
    ) -> Result<DonorId, DonorRepositoryError>;
}

#[cfg(any(test, feature = "test-support"))]
pub use in_memory::{InMemoryDonorRepository, StoredDonor};

#[cfg(any(test, feature = "test-support"))]
mod in_memory {
    use std::sync::Mutex;

    use async_trait::async_trait;

    use super::{DonorRepository, DonorRepositoryError};
    use crate::domain::{DonorId, DonorRegistration};

    /// A registration held by [`InMemoryDonorRepository`].
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct StoredDonor {
        /// Identifier assigned on insert.
        pub id: DonorId,
        /// Registration as it was accepted.
        pub registration: DonorRegistration,
    }

    /// Repository backed by a vector, enforcing email uniqueness.
    ///
    /// Identifiers start at 1 and increase by one per successful insert, like
    /// a `SERIAL` column.
    #[derive(Debug, Default)]
    pub struct InMemoryDonorRepository {
        rows: Mutex<Vec<StoredDonor>>,
    }

    impl InMemoryDonorRepository {
        /// Create an empty repository.
        #[must_use]
        pub fn new() -> Self {
            Self::default()
        }

        /// Snapshot of every stored registration in insertion order.
        #[must_use]
        pub fn stored(&self) -> Vec<StoredDonor> {
            self.rows
                .lock()
                .map(|rows| rows.clone())
                .unwrap_or_default()
        }

        /// Number of stored registrations.
        #[must_use]
        pub fn len(&self) -> usize {
            self.rows.lock().map(|rows| rows.len()).unwrap_or_default()
        }

        /// Whether nothing has been stored yet.
        #[must_use]
        pub fn is_empty(&self) -> bool {
            self.len() == 0
        }
    }

    #[async_trait]
    impl DonorRepository for InMemoryDonorRepository {
        async fn insert(
            &self,
            registration: &DonorRegistration,
        ) -> Result<DonorId, DonorRepositoryError> {
            let mut rows = self
                .rows
                .lock()
                .map_err(|err| DonorRepositoryError::query(err.to_string()))?;

            if rows
                .iter()
                .any(|row| row.registration.email() == registration.email())
            {
                return Err(DonorRepositoryError::duplicate_email());
            }

            let next = i32::try_from(rows.len() + 1)
                .map_err(|err| DonorRepositoryError::query(err.to_string()))?;
            let id = DonorId::new(next);
            rows.push(StoredDonor {
                id,
                registration: registration.clone(),
            });
            Ok(id)
        }
    }
}
