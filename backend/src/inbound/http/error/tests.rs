//! Tests for HTTP error mapping.

use super::*;
use crate::domain::Error;
use actix_web::ResponseError;
use actix_web::body::to_bytes;
use actix_web::http::StatusCode;
use rstest::rstest;
use serde_json::Value;

const TRACE_ID: &str = "00000000-0000-0000-0000-000000000000";

#[rstest]
#[case(Error::method_not_allowed("no"), StatusCode::METHOD_NOT_ALLOWED)]
#[case(Error::validation("missing"), StatusCode::INTERNAL_SERVER_ERROR)]
#[case(Error::malformed_request("bad json"), StatusCode::INTERNAL_SERVER_ERROR)]
#[case(Error::email_delivery_failed("rejected"), StatusCode::INTERNAL_SERVER_ERROR)]
fn confirmation_statuses(#[case] error: Error, #[case] expected: StatusCode) {
    let error: HandlerError<ConfirmationPolicy> = error.into();
    assert_eq!(ResponseError::status_code(&error), expected);
}

#[rstest]
#[case(Error::method_not_allowed("no"), StatusCode::METHOD_NOT_ALLOWED)]
#[case(Error::validation("missing"), StatusCode::BAD_REQUEST)]
#[case(Error::malformed_request("bad json"), StatusCode::BAD_REQUEST)]
#[case(Error::upstream_query("denied"), StatusCode::BAD_REQUEST)]
#[case(Error::not_found("empty"), StatusCode::NOT_FOUND)]
fn export_statuses(#[case] error: Error, #[case] expected: StatusCode) {
    let error: HandlerError<ExportPolicy> = error.into();
    assert_eq!(ResponseError::status_code(&error), expected);
}

#[rstest]
fn conversion_keeps_the_domain_error() {
    let error: HandlerError<ExportPolicy> = Error::upstream_query("JWT expired").into();

    assert_eq!(error.error().code(), ErrorCode::UpstreamQueryError);
    assert_eq!(error.error().message(), "JWT expired");
    assert_eq!(error.to_string(), format!("{}: JWT expired", ErrorCode::UpstreamQueryError));
}

#[actix_web::test]
async fn json_body_carries_message_and_trace_header() {
    let error: HandlerError<ConfirmationPolicy> =
        Error::email_delivery_failed("Falha ao enviar e-mail de confirmação.")
            .with_trace_id(TRACE_ID)
            .into();

    let response = error.error_response();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        response
            .headers()
            .get(TRACE_ID_HEADER)
            .and_then(|value| value.to_str().ok()),
        Some(TRACE_ID)
    );
    let bytes = to_bytes(response.into_body()).await.expect("body");
    let body: Value = serde_json::from_slice(&bytes).expect("json body");
    assert_eq!(
        body,
        serde_json::json!({"error": "Falha ao enviar e-mail de confirmação."})
    );
}

#[actix_web::test]
async fn export_not_found_is_plain_text() {
    let error: HandlerError<ExportPolicy> = Error::not_found("Pedido não encontrado.").into();

    let response = error.error_response();
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
        .to_owned();
    assert!(content_type.starts_with("text/plain"));
    let bytes = to_bytes(response.into_body()).await.expect("body");
    assert_eq!(&bytes[..], "Pedido não encontrado.".as_bytes());
}

#[actix_web::test]
async fn method_not_allowed_advertises_post() {
    let result = method_not_allowed::<ExportPolicy>().await;
    let error = result.expect_err("always rejects");

    let response = error.error_response();
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(
        response
            .headers()
            .get(header::ALLOW)
            .and_then(|value| value.to_str().ok()),
        Some("POST")
    );
    let bytes = to_bytes(response.into_body()).await.expect("body");
    let body: Value = serde_json::from_slice(&bytes).expect("json body");
    assert_eq!(body["error"], METHOD_NOT_ALLOWED_MESSAGE);
}
