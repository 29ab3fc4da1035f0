//! Assertion helpers for tests.

use axum::http::StatusCode;
use pretty_assertions::assert_eq;

use super::app::TestResponse;

/// Assert response has expected status code
pub fn assert_status(response: &TestResponse, expected: StatusCode) {
    assert_eq!(
        response.status, expected,
        "Expected status {}, got {}. Body: {}",
        expected,
        response.status,
        response.text()
    );
}

/// Assert response is OK (200)
pub fn assert_ok(response: &TestResponse) {
    assert_status(response, StatusCode::OK);
}

/// Assert a 400 whose `detail` starts with the given prefix, returning the detail
pub fn assert_bad_request(response: &TestResponse, detail_prefix: &str) -> String {
    assert_status(response, StatusCode::BAD_REQUEST);
    let json: serde_json::Value = response.json();
    let detail = json["detail"]
        .as_str()
        .unwrap_or_else(|| panic!("Expected a detail string, got {json}"))
        .to_string();
    assert!(
        detail.starts_with(detail_prefix),
        "Expected detail starting with {detail_prefix:?}, got {detail:?}"
    );
    detail
}

/// Assert a successful scan response and return the nine codes
pub fn assert_valid_scan_response(response: &TestResponse) -> Vec<String> {
    assert_ok(response);
    let json: serde_json::Value = response.json();
    let colors: Vec<String> = json["colors"]
        .as_array()
        .expect("colors should be an array")
        .iter()
        .map(|c| c.as_str().expect("color should be a string").to_string())
        .collect();

    assert_eq!(colors.len(), 9, "A face has nine stickers");
    for code in &colors {
        assert!(
            ["U", "R", "F", "D", "L", "B"].contains(&code.as_str()),
            "Unexpected code {code:?}"
        );
    }
    colors
}
