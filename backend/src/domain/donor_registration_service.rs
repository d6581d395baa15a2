//! Registration use-case backed by a [`DonorRepository`].

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{error, info};

use super::ports::{DonorRegistrationCommand, DonorRepository, DonorRepositoryError};
use super::{DonorId, DonorRegistration, Error};

/// Message returned when the email is already taken.
pub const DUPLICATE_EMAIL_MESSAGE: &str = "This email is already registered.";

/// Service implementing [`DonorRegistrationCommand`].
///
/// Each call performs exactly one repository insert; there is no retry, as
/// the insert is not idempotent.
pub struct DonorRegistrationService<R> {
    repository: Arc<R>,
}

impl<R> DonorRegistrationService<R> {
    /// Create a service over the given repository.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }
}

fn map_repository_error(err: DonorRepositoryError) -> Error {
    match err {
        DonorRepositoryError::DuplicateEmail => Error::conflict(DUPLICATE_EMAIL_MESSAGE),
        other => {
            error!(error = %other, "donor registration failed");
            Error::internal("donor registration failed")
        }
    }
}

#[async_trait]
impl<R> DonorRegistrationCommand for DonorRegistrationService<R>
where
    R: DonorRepository,
{
    async fn register(&self, registration: DonorRegistration) -> Result<DonorId, Error> {
        let donor_id = self
            .repository
            .insert(&registration)
            .await
            .map_err(map_repository_error)?;
        info!(donor_id = donor_id.get(), "donor registered");
        Ok(donor_id)
    }
}
