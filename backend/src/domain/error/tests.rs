//! Tests for the domain error type.

use super::*;
use rstest::rstest;

#[rstest]
#[case(Error::invalid_request("bad"), ErrorCode::InvalidRequest)]
#[case(Error::conflict("taken"), ErrorCode::Conflict)]
#[case(Error::internal("boom"), ErrorCode::InternalError)]
fn constructors_set_code(#[case] error: Error, #[case] expected: ErrorCode) {
    assert_eq!(error.code(), expected);
}

#[rstest]
#[case("")]
#[case("   ")]
fn blank_messages_fall_back_to_code_text(#[case] message: &str) {
    let error = Error::internal(message);
    assert_eq!(error.message(), "internal server error");
}

#[test]
fn display_uses_message() {
    let error = Error::conflict("This email is already registered.");
    assert_eq!(error.to_string(), "This email is already registered.");
}

#[tokio::test]
async fn trace_id_is_captured_from_scope() {
    let trace_id = TraceId::generate();
    let error = TraceId::scope(trace_id, async { Error::internal("boom") }).await;
    assert_eq!(error.trace_id(), Some(trace_id.to_string().as_str()));
}

#[test]
fn trace_id_is_absent_out_of_scope() {
    assert_eq!(Error::invalid_request("bad").trace_id(), None);
}

#[test]
fn with_trace_id_overrides_captured_value() {
    let error = Error::invalid_request("bad").with_trace_id("abc");
    assert_eq!(error.trace_id(), Some("abc"));
}
