//! Domain ports defining the edges of the hexagon.
//!
//! Driven ports (repositories) expose strongly typed errors so adapters map
//! their failures into predictable variants. Driving ports (commands) return
//! the domain [`Error`](crate::domain::Error) that inbound adapters render.

mod donor_registration;
mod donor_repository;
mod macros;

pub(crate) use macros::define_port_error;

#[cfg(test)]
pub use donor_registration::MockDonorRegistrationCommand;
pub use donor_registration::DonorRegistrationCommand;
#[cfg(test)]
pub use donor_repository::MockDonorRepository;
#[cfg(any(test, feature = "test-support"))]
pub use donor_repository::{InMemoryDonorRepository, StoredDonor};
pub use donor_repository::{DonorRepository, DonorRepositoryError};
