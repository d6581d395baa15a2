//! Cross-origin policy.

use actix_cors::Cors;

/// Permissive policy: any origin, method, and header.
///
/// The registration form is served from a different origin than the API.
pub fn permissive() -> Cors {
    Cors::default()
        .allow_any_origin()
        .allow_any_method()
        .allow_any_header()
        .max_age(3600)
}
