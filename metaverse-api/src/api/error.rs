//! APIエラーレスポンス型
//!
//! axum用の共通エラーハンドリング

use axum::{
    extract::OriginalUri,
    http::{Method, StatusCode},
    response::IntoResponse,
    Json,
};
use metaverse_api_common::{error::CommonError, protocol::ApiResponse, types::EndpointKey};
use thiserror::Error;
use tracing::{debug, error, warn};

/// API layer error type
#[derive(Debug, Error)]
pub enum ApiError {
    /// No route matches the request
    #[error("Cannot {method} {path}")]
    NotFound {
        /// Request method
        method: String,
        /// Request path
        path: String,
    },

    /// A mounted route has no registry entry
    #[error("Endpoint not registered: {0}")]
    UnregisteredEndpoint(EndpointKey),

    /// Common layer error
    #[error(transparent)]
    Common(#[from] CommonError),
}

impl ApiError {
    /// HTTP status for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::NotFound { .. } | ApiError::UnregisteredEndpoint(_) => StatusCode::NOT_FOUND,
            ApiError::Common(CommonError::InvalidBody(_) | CommonError::ScalarBody) => {
                StatusCode::BAD_REQUEST
            }
            ApiError::Common(CommonError::DuplicateRoute { .. }) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

/// Axum用のエラーレスポンス型
#[derive(Debug)]
pub struct AppError(pub ApiError);

impl From<ApiError> for AppError {
    fn from(err: ApiError) -> Self {
        AppError(err)
    }
}

impl From<CommonError> for AppError {
    fn from(err: CommonError) -> Self {
        AppError(ApiError::Common(err))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let status = self.0.status_code();
        let message = self.0.to_string();

        if status.is_server_error() {
            error!(status = status.as_u16(), "{}", message);
        } else if status == StatusCode::BAD_REQUEST {
            warn!(status = status.as_u16(), "{}", message);
        } else {
            debug!(status = status.as_u16(), "{}", message);
        }

        (status, Json(ApiResponse::error(message))).into_response()
    }
}

/// Fallback for requests no route matches.
pub async fn not_found(method: Method, OriginalUri(uri): OriginalUri) -> AppError {
    ApiError::NotFound {
        method: method.to_string(),
        path: uri.path().to_string(),
    }
    .into()
}
