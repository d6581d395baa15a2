//! Driving port for the registration use-case.

use async_trait::async_trait;

use crate::domain::{DonorId, DonorRegistration, Error};

/// Register a validated donor and return the identifier storage assigned.
///
/// Implementations translate persistence failures into domain errors:
/// a duplicate email is [`ErrorCode::Conflict`](crate::domain::ErrorCode),
/// everything else is an internal error with a generic message.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DonorRegistrationCommand: Send + Sync {
    /// Persist the registration.
    async fn register(&self, registration: DonorRegistration) -> Result<DonorId, Error>;
}
