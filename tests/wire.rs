use std::time::Duration;

use serde_json::json;

use separator_viz::api::http::HttpService;
use separator_viz::api::{ComputeRequest, ComputeResponse, ErrorBody, COMPUTE_PATH};
use separator_viz::{Algorithm, ApiError, Point};

#[test]
fn compute_request_uses_service_field_names() {
    let request = ComputeRequest {
        red_points: vec![Point::new(100.0, 100.0)],
        blue_points: vec![Point::new(300.0, 300.5)],
        algorithm: Algorithm::TwoSquares,
        save_to_db: false,
    };
    assert_eq!(
        serde_json::to_value(&request).unwrap(),
        json!({
            "red_points": [{"x": 100.0, "y": 100.0}],
            "blue_points": [{"x": 300.0, "y": 300.5}],
            "algorithm": "squares",
            "save_to_db": false,
        })
    );
}

#[test]
fn default_algorithm_is_rectangles_on_the_wire() {
    assert_eq!(serde_json::to_value(Algorithm::default()).unwrap(), json!("rectangles"));
}

#[test]
fn compute_response_tolerates_nulls_and_missing_optionals() {
    let r: ComputeResponse = serde_json::from_value(json!({
        "computation_id": null,
        "shapes": [{"x": 90.0, "y": 90.0, "width": 20.0, "height": 20.0}],
        "blue_covered": 0,
        "red_covered": 1,
        "total_red": 1,
        "total_blue": 0,
        "execution_time_ms": 3.2,
        "algorithm": "Two Rectangles"
    }))
    .unwrap();
    assert_eq!(r.computation_id, None);
    assert_eq!(r.created_at, None);
    assert_eq!(r.shapes.len(), 1);
    assert_eq!(r.algorithm, "Two Rectangles");
}

#[test]
fn error_body_string_detail_is_used() {
    let body: ErrorBody = serde_json::from_value(json!({
        "detail": "internal error",
        "error_code": "COMPUTATION_ERROR"
    }))
    .unwrap();
    assert_eq!(body.detail_message().as_deref(), Some("internal error"));
}

#[test]
fn error_body_list_detail_is_not_shown() {
    let body: ErrorBody = serde_json::from_value(json!({
        "detail": [{"loc": ["body", "red_points"], "msg": "field required"}]
    }))
    .unwrap();
    assert_eq!(body.detail_message(), None);

    let empty: ErrorBody = serde_json::from_value(json!({})).unwrap();
    assert_eq!(empty.detail_message(), None);
}

#[test]
fn user_message_prefers_validation_and_detail() {
    let fallback = "Failed to compute separators";
    assert_eq!(
        ApiError::Validation("Please add at least one red point".into()).user_message(fallback),
        "Please add at least one red point"
    );
    assert_eq!(
        ApiError::Service { status: 500, detail: Some("boom".into()) }.user_message(fallback),
        "boom"
    );
    assert_eq!(
        ApiError::Timeout(Duration::from_secs(30)).user_message(fallback),
        fallback
    );
}

#[test]
fn endpoints_join_cleanly() {
    let svc = HttpService::new("http://localhost:8000/", Duration::from_secs(30)).unwrap();
    assert_eq!(svc.base_url(), "http://localhost:8000");
    assert_eq!(
        svc.endpoint(COMPUTE_PATH),
        "http://localhost:8000/api/compute-separators"
    );
}
