//! エラー型定義
//!
//! 統一エラー型（thiserror使用）

use thiserror::Error;

use crate::types::RouteMethod;

/// Common layer error type
#[derive(Debug, Error)]
pub enum CommonError {
    /// Request body could not be parsed as JSON
    #[error("Invalid request body: {0}")]
    InvalidBody(#[from] serde_json::Error),

    /// Two endpoint definitions share the same method and path
    #[error("Duplicate route: {method} {path}")]
    DuplicateRoute {
        /// HTTP method of the conflicting definitions
        method: RouteMethod,
        /// Path of the conflicting definitions
        path: String,
    },

    /// Request body is a bare JSON scalar instead of an object or array
    #[error("Invalid request body: expected a JSON object or array")]
    ScalarBody,
}

/// Result alias for the common layer
pub type CommonResult<T> = Result<T, CommonError>;
