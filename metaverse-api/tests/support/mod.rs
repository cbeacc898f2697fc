//! 契約テスト・E2Eテスト共通のヘルパー

pub mod http;

use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
};
use metaverse_api::{
    api::{self, App},
    registry::ResponseRegistry,
    AppState,
};
use serde_json::Value;
use tower::ServiceExt;

/// Service name used by every test app.
#[allow(dead_code)]
pub const TEST_SERVICE_NAME: &str = "Metaverse Master API";

/// 組み込みレジストリでAppStateを作成する
#[allow(dead_code)]
pub fn test_state() -> AppState {
    let registry = ResponseRegistry::builtin().expect("builtin registry");
    AppState::new(registry, TEST_SERVICE_NAME)
}

/// `.oneshot()` スタイルのテスト用ルーターを作成する
#[allow(dead_code)]
pub fn create_test_app() -> App {
    api::create_app(test_state())
}

/// リクエストを1件送り、ステータスとJSONボディを返す
///
/// ボディがJSONでない場合は `Value::Null` を返す。
#[allow(dead_code)]
pub async fn send(app: &App, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

/// GETリクエストを作成する
#[allow(dead_code)]
pub fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

/// JSONボディ付きPOSTリクエストを作成する
#[allow(dead_code)]
pub fn post_json(uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_vec(body).unwrap()))
        .unwrap()
}

/// 生のボディでPOSTリクエストを作成する（Content-Typeなし）
#[allow(dead_code)]
pub fn post_raw(uri: &str, body: &'static str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .body(Body::from(body))
        .unwrap()
}
