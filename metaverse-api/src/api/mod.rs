//! REST APIハンドラー
//!
//! ルート、チームごとの読み取り・制御エンドポイント

/// 汎用ディスパッチ
pub mod dispatch;
/// APIエラーレスポンス
pub mod error;

use crate::{registry::ResponseRegistry, AppState};
use axum::{
    extract::{OriginalUri, Request, State},
    http::Uri,
    routing::get,
    Json, Router,
};
use metaverse_api_common::protocol::{ApiResponse, API_PREFIX};
use tower::{util::MapRequest, ServiceBuilder};
use tower_http::{
    cors::CorsLayer,
    normalize_path::{NormalizePath, NormalizePathLayer},
    trace::TraceLayer,
};

/// ルーティング前にパスを正規化したアプリケーション
///
/// パスの大文字小文字を区別せず、末尾スラッシュも無視する。
pub type App = MapRequest<NormalizePath<Router>, fn(Request) -> Request>;

/// APIルーターを作成
pub fn create_app(state: AppState) -> App {
    ServiceBuilder::new()
        .map_request(fold_path_case as fn(Request) -> Request)
        .layer(NormalizePathLayer::trim_trailing_slash())
        .service(create_router(state))
}

fn create_router(state: AppState) -> Router {
    let team_routes = team_routes(&state.registry);

    Router::new()
        .route("/", get(root))
        .nest(API_PREFIX, team_routes)
        .fallback(error::not_found)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

fn team_routes(registry: &ResponseRegistry) -> Router<AppState> {
    registry
        .definitions()
        .iter()
        .fold(Router::new(), dispatch::mount)
}

/// Lowercase the request path, keeping the query untouched.
///
/// The uri as received is stored as [`OriginalUri`] first so error
/// messages still echo what the client sent.
fn fold_path_case(mut request: Request) -> Request {
    let uri = request.uri().clone();
    request.extensions_mut().insert(OriginalUri(uri.clone()));

    if !uri.path().bytes().any(|b| b.is_ascii_uppercase()) {
        return request;
    }

    let path = uri.path().to_ascii_lowercase();
    let path_and_query = match uri.query() {
        Some(query) => format!("{}?{}", path, query),
        None => path,
    };

    let Ok(path_and_query) = path_and_query.parse() else {
        return request;
    };
    let mut parts = uri.into_parts();
    parts.path_and_query = Some(path_and_query);
    if let Ok(lowered) = Uri::from_parts(parts) {
        *request.uri_mut() = lowered;
    }
    request
}

/// GET / - 稼働確認
async fn root(State(state): State<AppState>) -> Json<ApiResponse> {
    Json(ApiResponse::message(format!("{} is running.", state.service_name)))
}
