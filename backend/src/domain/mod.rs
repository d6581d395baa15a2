//! Domain primitives, ports, and the registration use-case.
//!
//! Public surface:
//! - [`Error`] / [`ErrorCode`]: transport-agnostic failure payload.
//! - [`DonorRegistration`]: validated registration built from a
//!   [`DonorRegistrationDraft`].
//! - [`DonorRegistrationService`]: implements the
//!   [`ports::DonorRegistrationCommand`] driving port.

pub mod donor;
pub mod donor_registration_service;
pub mod error;
pub mod ports;
pub mod trace_id;

pub use self::donor::{DonorId, DonorRegistration, DonorRegistrationDraft, DonorValidationError};
pub use self::donor_registration_service::DonorRegistrationService;
pub use self::error::{Error, ErrorCode};
pub use self::trace_id::TraceId;
