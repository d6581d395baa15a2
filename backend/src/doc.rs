//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers both endpoints and the request, response, and error
//! bodies they exchange. The document is served by Swagger UI in debug builds.

use utoipa::OpenApi;

use crate::inbound::http::donors::{RegisterDonorRequest, RegisterDonorResponse};
use crate::inbound::http::error::ErrorResponse;
use crate::inbound::http::health::HealthResponse;

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Donor registration API",
        description = "Health check and donor registration for the donor sign-up form."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::health::health,
        crate::inbound::http::donors::register_donor,
    ),
    components(schemas(
        HealthResponse,
        RegisterDonorRequest,
        RegisterDonorResponse,
        ErrorResponse
    )),
    tags(
        (name = "donors", description = "Donor registration"),
        (name = "health", description = "Service health check")
    )
)]
pub struct ApiDoc;
