//! JSON extractor configuration.
//!
//! Malformed or non-JSON bodies become a domain `InvalidRequest` error so
//! they share the `{"error": "..."}` envelope with validation failures.

use actix_web::{HttpRequest, error::JsonPayloadError, web};
use tracing::debug;

use crate::domain::Error;

/// Message returned when the request body cannot be parsed.
pub const INVALID_JSON_MESSAGE: &str = "invalid JSON body";

/// Upper bound on accepted request bodies.
pub const MAX_BODY_BYTES: usize = 64 * 1024;

/// Build the [`web::JsonConfig`] used by every handler.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(MAX_BODY_BYTES)
        .error_handler(json_error_handler)
}

fn json_error_handler(err: JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    debug!(path = %req.path(), error = %err, "rejecting unparseable JSON body");
    Error::invalid_request(INVALID_JSON_MESSAGE).into()
}
