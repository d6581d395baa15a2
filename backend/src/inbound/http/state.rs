//! Shared HTTP adapter state.
//!
//! Handlers receive this through `actix_web::web::Data` so they depend only
//! on domain ports and stay testable without a database.

use std::sync::Arc;

use crate::domain::ports::DonorRegistrationCommand;

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub registration: Arc<dyn DonorRegistrationCommand>,
}

impl HttpState {
    /// Construct state from the registration port.
    pub fn new(registration: Arc<dyn DonorRegistrationCommand>) -> Self {
        Self { registration }
    }
}
