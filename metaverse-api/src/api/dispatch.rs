//! 汎用ディスパッチ
//!
//! レジストリのエンドポイント定義をルートとしてマウントする。
//! チームごとのハンドラー関数は持たない。

use axum::{
    body::Bytes,
    extract::State,
    routing::{get, post},
    Json, Router,
};
use metaverse_api_common::{
    protocol::{ApiResponse, ControlRequest},
    types::{EndpointKey, RouteMethod},
};
use tracing::debug;

use super::error::{ApiError, AppError};
use crate::{registry::EndpointDefinition, AppState};

/// Mount one endpoint definition on `router`.
pub fn mount(router: Router<AppState>, definition: &EndpointDefinition) -> Router<AppState> {
    let key = definition.key();
    match definition.method {
        RouteMethod::Get => router.route(
            &definition.path,
            get(move |State(state): State<AppState>| read_endpoint(state, key)),
        ),
        RouteMethod::Post => router.route(
            &definition.path,
            post(move |State(state): State<AppState>, body: Bytes| {
                control_endpoint(state, key, body)
            }),
        ),
    }
}

/// GET /v1/teamN/{status|data|session}
async fn read_endpoint(state: AppState, key: EndpointKey) -> Result<Json<ApiResponse>, AppError> {
    respond(&state, key, &ControlRequest::default())
}

/// POST /v1/teamN/control
async fn control_endpoint(
    state: AppState,
    key: EndpointKey,
    body: Bytes,
) -> Result<Json<ApiResponse>, AppError> {
    let request = ControlRequest::from_body(&body)?;
    debug!(endpoint = %key, action = ?request.action, "Echoing control action");
    respond(&state, key, &request)
}

fn respond(
    state: &AppState,
    key: EndpointKey,
    request: &ControlRequest,
) -> Result<Json<ApiResponse>, AppError> {
    match state.registry.respond(&key, request) {
        Some(response) => Ok(Json(response)),
        None => Err(ApiError::UnregisteredEndpoint(key).into()),
    }
}
