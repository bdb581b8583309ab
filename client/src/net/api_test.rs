use super::*;
use serde_json::json;

#[test]
fn rejected_login_surfaces_detail() {
    let err = interpret_credential_response(false, json!({ "detail": "bad credentials" })).unwrap_err();
    assert_eq!(err, ApiError::Rejected("bad credentials".to_owned()));
    assert_eq!(err.to_string(), "bad credentials");
}

#[test]
fn rejected_without_detail_uses_generic_text() {
    let err = interpret_credential_response(false, json!({})).unwrap_err();
    assert_eq!(err, ApiError::Rejected(GENERIC_FAILURE.to_owned()));
    let err = interpret_credential_response(false, json!({ "detail": "" })).unwrap_err();
    assert_eq!(err, ApiError::Rejected(GENERIC_FAILURE.to_owned()));
}

#[test]
fn structured_detail_rendered_as_json() {
    let body = json!({ "detail": [{ "loc": ["body", "name"], "msg": "field required" }] });
    let ApiError::Rejected(text) = interpret_credential_response(false, body).unwrap_err() else {
        panic!("expected rejection");
    };
    assert!(text.contains("field required"));
}

#[test]
fn successful_login_decodes_grant() {
    let grant = interpret_credential_response(true, json!({ "message": "ok" })).unwrap();
    assert_eq!(grant.message, "ok");
    assert!(grant.access_token.is_none());
}

#[test]
fn successful_body_of_wrong_shape_is_decode_error() {
    let err = interpret_credential_response(true, json!({ "message": 42 })).unwrap_err();
    assert!(matches!(err, ApiError::Decode(_)));
}

#[test]
fn query_error_body_passes_through_on_200() {
    let resp = interpret_query_response(true, json!({ "sql": "SELECT x", "error": "No data returned" })).unwrap();
    assert_eq!(resp.sql.as_deref(), Some("SELECT x"));
    assert_eq!(resp.error.as_deref(), Some("No data returned"));
}

#[test]
fn query_failure_status_without_payload_is_rejected() {
    let err = interpret_query_response(false, json!({ "detail": "Internal Server Error" })).unwrap_err();
    assert_eq!(err, ApiError::Rejected("Internal Server Error".to_owned()));
}

#[test]
fn query_failure_status_with_error_field_is_kept() {
    let resp = interpret_query_response(false, json!({ "error": "boom" })).unwrap();
    assert_eq!(resp.error.as_deref(), Some("boom"));
}

#[test]
fn insights_failure_status_is_rejected() {
    let err = interpret_insights_response(false, json!({ "detail": "down" })).unwrap_err();
    assert_eq!(err, ApiError::Rejected("down".to_owned()));
}

#[test]
fn bearer_header_formats_token() {
    assert_eq!(bearer_header("abc"), "Bearer abc");
}

#[test]
fn api_error_display_texts() {
    assert_eq!(ApiError::Transport("Failed to fetch".to_owned()).to_string(), "Failed to fetch");
    assert_eq!(ApiError::Timeout.to_string(), "request timed out");
    assert_eq!(ApiError::Unavailable.to_string(), "not available on server");
}
