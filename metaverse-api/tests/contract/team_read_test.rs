//! Contract Test: GET /v1/teamN/{status|data|session}

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

use crate::support::{create_test_app, get, send};

fn expected_reads() -> Vec<(&'static str, Value)> {
    vec![
        ("/v1/team2/status", json!({"rocket_status": "ready"})),
        ("/v1/team3/status", json!({"robot_status": "idle"})),
        ("/v1/team4/status", json!({"rover_status": "active"})),
        ("/v1/team5/data", json!({"eeg_activity": "normal"})),
        ("/v1/team6/status", json!({"battery_status": "charged"})),
        ("/v1/team7/session", json!({"session_status": "in_progress"})),
        (
            "/v1/team8/data",
            json!({"heart_rate": "72bpm", "blood_pressure": "120/80"}),
        ),
        ("/v1/team9/data", json!({"earth_model": "stable"})),
        ("/v1/team10/status", json!({"arm_status": "standby"})),
        ("/v1/team11/status", json!({"room_status": "online"})),
        ("/v1/team12/data", json!({"posture": "good"})),
        ("/v1/team13/status", json!({"rover_status": "searching"})),
        ("/v1/team15/status", json!({"rover_status": "scanning"})),
        ("/v1/team16/status", json!({"ventilator_status": "normal"})),
    ]
}

/// GET /v1/team9/data - 正常系
#[tokio::test]
async fn test_team9_earth_model() {
    let app = create_test_app();

    let (status, body) = send(&app, get("/v1/team9/data")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({"status": "success", "data": {"earth_model": "stable"}})
    );
}

/// 全チームの読み取りエンドポイントが固定値を返す
#[tokio::test]
async fn test_every_team_returns_fixed_payload() {
    let app = create_test_app();

    for (path, data) in expected_reads() {
        let (status, body) = send(&app, get(path)).await;
        assert_eq!(status, StatusCode::OK, "GET {}", path);
        assert_eq!(body, json!({"status": "success", "data": data}), "GET {}", path);
    }
}

/// 同じリクエストは常に同じレスポンスを返す
#[tokio::test]
async fn test_reads_are_idempotent() {
    let app = create_test_app();

    let (_, first) = send(&app, get("/v1/team8/data")).await;
    for _ in 0..3 {
        let (status, again) = send(&app, get("/v1/team8/data")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(again, first);
    }
}

/// 読み取りレスポンスはJSONとして返る
#[tokio::test]
async fn test_read_content_type_is_json() {
    let app = create_test_app();

    let response = tower::ServiceExt::oneshot(app, get("/v1/team2/status"))
        .await
        .unwrap();

    assert_eq!(
        response.headers()["content-type"],
        "application/json"
    );
}

/// 末尾スラッシュ付きのパスも同じエンドポイントに届く
#[tokio::test]
async fn test_trailing_slash_is_ignored() {
    let app = create_test_app();

    let (status, body) = send(&app, get("/v1/team9/data/")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({"status": "success", "data": {"earth_model": "stable"}})
    );
}

/// パスの大文字小文字は区別しない
#[tokio::test]
async fn test_path_is_case_insensitive() {
    let app = create_test_app();

    for path in ["/V1/Team9/Data", "/v1/TEAM9/data/"] {
        let (status, body) = send(&app, get(path)).await;
        assert_eq!(status, StatusCode::OK, "GET {}", path);
        assert_eq!(body["data"], json!({"earth_model": "stable"}), "GET {}", path);
    }
}
