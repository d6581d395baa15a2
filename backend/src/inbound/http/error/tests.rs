//! Tests for HTTP error mapping.

use super::*;
use actix_web::body::to_bytes;
use rstest::rstest;

const TRACE_ID: &str = "00000000-0000-0000-0000-000000000000";

#[rstest]
#[case(Error::invalid_request("bad"), StatusCode::BAD_REQUEST)]
#[case(Error::conflict("taken"), StatusCode::CONFLICT)]
#[case(Error::internal("boom"), StatusCode::INTERNAL_SERVER_ERROR)]
fn status_code_matches_error_code(#[case] error: Error, #[case] status: StatusCode) {
    assert_eq!(ResponseError::status_code(&error), status);
}

async fn render(error: Error) -> (StatusCode, Option<String>, ErrorResponse) {
    let response = ResponseError::error_response(&error);
    let status = response.status();
    let trace_id = response
        .headers()
        .get(TRACE_ID_HEADER)
        .map(|value| value.to_str().expect("Trace-Id is UTF-8").to_owned());
    let bytes = to_bytes(response.into_body())
        .await
        .expect("reading response body succeeds");
    let body = serde_json::from_slice(&bytes).expect("error body is JSON");
    (status, trace_id, body)
}

#[actix_web::test]
async fn client_errors_keep_their_message() {
    let (status, _, body) = render(Error::conflict("This email is already registered.")).await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body.error, "This email is already registered.");
}

#[actix_web::test]
async fn internal_errors_are_redacted() {
    let (status, _, body) =
        render(Error::internal("connection to 10.0.0.5:5432 refused")).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body.error, INTERNAL_ERROR_MESSAGE);
}

#[actix_web::test]
async fn trace_id_is_echoed_in_header() {
    let (_, trace_id, _) = render(Error::invalid_request("bad").with_trace_id(TRACE_ID)).await;
    assert_eq!(trace_id.as_deref(), Some(TRACE_ID));
}

#[actix_web::test]
async fn error_without_trace_id_omits_header() {
    let (_, trace_id, _) = render(Error::invalid_request("bad")).await;
    assert!(trace_id.is_none());
}

#[actix_web::test]
async fn body_contains_only_the_error_field() {
    let response = ResponseError::error_response(&Error::invalid_request("bad"));
    let bytes = to_bytes(response.into_body()).await.expect("body");
    let value: serde_json::Value = serde_json::from_slice(&bytes).expect("JSON");
    assert_eq!(value, serde_json::json!({ "error": "bad" }));
}
