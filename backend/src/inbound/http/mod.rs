//! HTTP inbound adapter exposing the REST endpoints.
//!
//! ```text
//! GET  /api
//! POST /api/register
//! ```

pub mod cors;
pub mod donors;
pub mod error;
pub mod health;
pub mod payload;
pub mod state;

use actix_web::web;

pub use error::ApiResult;

/// Register the JSON extractor configuration and every API endpoint.
///
/// Shared by the server and by tests so both exercise the same routing.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use donor_registry::inbound::http::configure;
///
/// let _app = App::new().configure(configure);
/// ```
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(payload::json_config())
        .service(health::health)
        .service(donors::register_donor);
}
