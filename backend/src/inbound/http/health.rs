//! Health check endpoint.
//!
//! Never touches the database so it answers even when storage is down.

use actix_web::{HttpResponse, get, http::header};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Static text returned by `GET /api`.
pub const HEALTH_MESSAGE: &str = "Donor registration API is running";

/// Body of the health check response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    #[schema(example = "Donor registration API is running")]
    pub message: String,
}

/// Report that the server is accepting requests.
#[utoipa::path(
    get,
    path = "/api",
    tags = ["health"],
    responses(
        (status = 200, description = "Server is running", body = HealthResponse)
    ),
    operation_id = "health"
)]
#[get("/api")]
pub async fn health() -> HttpResponse {
    HttpResponse::Ok()
        .insert_header((header::CACHE_CONTROL, "no-store"))
        .json(HealthResponse {
            message: HEALTH_MESSAGE.to_owned(),
        })
}
