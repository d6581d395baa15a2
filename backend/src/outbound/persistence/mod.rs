//! PostgreSQL persistence adapters using Diesel ORM.
//!
//! Concrete implementations of domain repository ports backed by PostgreSQL
//! via `diesel-async` with `bb8` connection pooling.
//!
//! - **Thin adapters**: repositories only translate between Diesel models and
//!   domain types.
//! - **Internal models**: row structs (`models.rs`) and schema definitions
//!   (`schema.rs`) never leave this module.
//! - **Strongly typed errors**: database errors are classified into
//!   [`DonorRepositoryError`](crate::domain::ports::DonorRepositoryError)
//!   variants here, including duplicate-email detection.
//!
//! # Example
//!
//! ```no_run
//! use donor_registry::outbound::persistence::{DbPool, DieselDonorRepository, PoolConfig};
//!
//! # async fn wire() -> Result<(), Box<dyn std::error::Error>> {
//! let pool = DbPool::new(PoolConfig::new("postgres://localhost/donors")).await?;
//! let repo = DieselDonorRepository::new(pool);
//! # let _ = repo;
//! # Ok(())
//! # }
//! ```

mod diesel_donor_repository;
mod models;
mod pool;
mod schema;
mod tls;

pub use diesel_donor_repository::DieselDonorRepository;
pub use pool::{DbPool, PoolConfig, PoolError};
