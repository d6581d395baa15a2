//! Donor registration handler.
//!
//! ```text
//! POST /api/register {"fullName":"Ana Khan","email":"ana@example.com",...}
//! ```

use actix_web::{HttpResponse, post, web};
use serde::{Deserialize, Serialize};
use tracing::debug;
use utoipa::ToSchema;

use crate::domain::{DonorRegistration, DonorRegistrationDraft, DonorValidationError, Error};
use crate::inbound::http::ApiResult;
use crate::inbound::http::error::ErrorResponse;
use crate::inbound::http::state::HttpState;

/// Message returned with a successful registration.
pub const REGISTERED_MESSAGE: &str = "Donor registered successfully!";
/// Message returned when a required contact field is missing or empty.
pub const MISSING_FIELDS_MESSAGE: &str = "Missing required fields.";
/// Message returned when a blood donor omits their blood group.
pub const MISSING_BLOOD_GROUP_MESSAGE: &str = "Blood group is required for blood donors.";

/// Registration request body for `POST /api/register`.
///
/// Every field is optional on the wire; presence rules are enforced by the
/// domain so that missing fields yield a 400 rather than a parse failure.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RegisterDonorRequest {
    #[schema(example = "Ana Khan")]
    pub full_name: Option<String>,
    #[schema(example = "ana@example.com")]
    pub email: Option<String>,
    #[schema(example = "555-0100")]
    pub phone: Option<String>,
    #[schema(example = "Lahore")]
    pub city: Option<String>,
    #[schema(example = "O+")]
    pub blood_group: Option<String>,
    pub is_blood_donor: Option<bool>,
    pub is_organ_donor: Option<bool>,
    #[schema(example = json!(["kidney", "liver"]))]
    pub organs: Option<Vec<String>>,
}

impl From<RegisterDonorRequest> for DonorRegistrationDraft {
    fn from(value: RegisterDonorRequest) -> Self {
        Self {
            full_name: value.full_name,
            email: value.email,
            phone: value.phone,
            city: value.city,
            blood_group: value.blood_group,
            is_blood_donor: value.is_blood_donor.unwrap_or(false),
            is_organ_donor: value.is_organ_donor.unwrap_or(false),
            organs: value.organs.unwrap_or_default(),
        }
    }
}

/// Successful registration body.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RegisterDonorResponse {
    #[schema(example = "Donor registered successfully!")]
    pub message: String,
    #[schema(example = 1)]
    pub donor_id: i32,
}

/// Validate a registration and persist it.
#[utoipa::path(
    post,
    path = "/api/register",
    request_body = RegisterDonorRequest,
    responses(
        (status = 201, description = "Donor registered", body = RegisterDonorResponse),
        (status = 400, description = "Missing fields or malformed body", body = ErrorResponse),
        (status = 409, description = "Email already registered", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tags = ["donors"],
    operation_id = "registerDonor"
)]
#[post("/api/register")]
pub async fn register_donor(
    state: web::Data<HttpState>,
    payload: web::Json<RegisterDonorRequest>,
) -> ApiResult<HttpResponse> {
    let draft = DonorRegistrationDraft::from(payload.into_inner());
    let registration = DonorRegistration::try_from(draft).map_err(map_validation_error)?;
    let donor_id = state.registration.register(registration).await?;

    Ok(HttpResponse::Created().json(RegisterDonorResponse {
        message: REGISTERED_MESSAGE.to_owned(),
        donor_id: donor_id.get(),
    }))
}

fn map_validation_error(err: DonorValidationError) -> Error {
    debug!(reason = %err, "registration rejected");
    match err {
        DonorValidationError::MissingRequiredFields => {
            Error::invalid_request(MISSING_FIELDS_MESSAGE)
        }
        DonorValidationError::MissingBloodGroup => {
            Error::invalid_request(MISSING_BLOOD_GROUP_MESSAGE)
        }
    }
}
