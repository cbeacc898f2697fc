//! Contract Test: CORS

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use tower::ServiceExt;

use crate::support::create_test_app;

/// 任意のOriginからのリクエストを許可する
#[tokio::test]
async fn test_simple_request_allows_any_origin() {
    let app = create_test_app();

    let response = app
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/v1/team4/status")
                .header("origin", "http://dashboard.example")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()["access-control-allow-origin"], "*");
}

/// 制御エンドポイントへのプリフライトに応答する
#[tokio::test]
async fn test_preflight_for_control() {
    let app = create_test_app();

    let response = app
        .oneshot(
            Request::builder()
                .method("OPTIONS")
                .uri("/v1/team8/control")
                .header("origin", "http://dashboard.example")
                .header("access-control-request-method", "POST")
                .header("access-control-request-headers", "content-type")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert!(response.status().is_success());
    assert_eq!(response.headers()["access-control-allow-origin"], "*");
    assert!(response
        .headers()
        .contains_key("access-control-allow-methods"));
}
