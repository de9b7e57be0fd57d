//! Assertions for the backend's `application/problem+json` error contract.
//!
//! Kept free of backend types on purpose: the helpers parse the wire
//! shape directly, so a field rename in the backend breaks these tests
//! instead of silently tracking it.

use actix_web::body::BoxBody;
use actix_web::dev::ServiceResponse;
use actix_web::http::header::HeaderMap;
use actix_web::http::StatusCode;
use serde::Deserialize;

/// Wire shape of a problem-details body.
#[derive(Debug, Deserialize)]
struct ProblemBody {
    #[serde(rename = "type")]
    type_: String,
    title: String,
    status: u16,
    detail: String,
    code: String,
    trace_id: String,
}

/// Assert that `resp` carries a problem-details body with the expected
/// code and status, that the body's `trace_id` matches the `x-trace-id`
/// header, and (optionally) that the detail contains a substring.
pub async fn assert_problem_details_from_service_response(
    resp: ServiceResponse<BoxBody>,
    expected_code: &str,
    expected_status: StatusCode,
    expected_detail_contains: Option<&str>,
) {
    let status = resp.status();
    let headers = resp.headers().clone();
    let body = actix_web::test::read_body(resp).await;
    assert_problem_details_from_parts(
        status,
        &headers,
        &body,
        expected_code,
        expected_status,
        expected_detail_contains,
    );
}

/// Same assertions, for callers that already split the response apart.
pub fn assert_problem_details_from_parts(
    status: StatusCode,
    headers: &HeaderMap,
    body_bytes: &[u8],
    expected_code: &str,
    expected_status: StatusCode,
    expected_detail_contains: Option<&str>,
) {
    assert_eq!(status, expected_status);

    let problem: ProblemBody =
        serde_json::from_slice(body_bytes).expect("body is problem-details JSON");

    let header_trace_id = headers
        .get("x-trace-id")
        .expect("x-trace-id header present")
        .to_str()
        .expect("x-trace-id header is UTF-8");
    assert_eq!(
        problem.trace_id, header_trace_id,
        "trace_id in body and x-trace-id header must agree"
    );

    assert_eq!(problem.code, expected_code);
    assert_eq!(problem.status, expected_status.as_u16());
    assert!(!problem.type_.is_empty());
    assert!(!problem.title.is_empty());

    if let Some(needle) = expected_detail_contains {
        assert!(
            problem.detail.contains(needle),
            "expected detail to contain {needle:?}, got {:?}",
            problem.detail
        );
    }
}
