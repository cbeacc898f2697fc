//! 通信プロトコル定義
//!
//! クライアント↔APIサーバー間のリクエスト・レスポンス形式

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{CommonError, CommonResult};

/// Versioned prefix every team route is mounted under.
pub const API_PREFIX: &str = "/v1";

/// レスポンスのステータス
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ResponseStatus {
    /// 成功
    Success,
    /// エラー
    Error,
}

/// 全エンドポイント共通のレスポンスエンベロープ
///
/// 成功時は `{"status":"success","data":{...}}` または
/// `{"status":"success","message":"..."}`、失敗時は
/// `{"status":"error","message":"..."}` の形になる。
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiResponse {
    /// ステータス
    pub status: ResponseStatus,
    /// ペイロード
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
    /// メッセージ
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ApiResponse {
    /// Success envelope carrying a data payload.
    pub fn success(data: Value) -> Self {
        Self {
            status: ResponseStatus::Success,
            data: Some(data),
            message: None,
        }
    }

    /// Success envelope carrying only a message.
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            status: ResponseStatus::Success,
            data: None,
            message: Some(message.into()),
        }
    }

    /// Error envelope.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: ResponseStatus::Error,
            data: None,
            message: Some(message.into()),
        }
    }
}

/// 制御リクエスト
///
/// `action` は型も有無も検証しない。受け取った値をそのままエコーする。
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ControlRequest {
    /// 実行を要求されたアクション
    #[serde(default)]
    pub action: Option<Value>,
}

impl ControlRequest {
    /// Request carrying the given action.
    pub fn with_action(action: impl Into<Value>) -> Self {
        Self {
            action: Some(action.into()),
        }
    }

    /// Parse a raw request body.
    ///
    /// An empty body and a JSON array both yield a request without an
    /// action. Invalid JSON and bare scalars (`"x"`, `42`, `null`) are
    /// errors.
    pub fn from_body(body: &[u8]) -> CommonResult<Self> {
        if body.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self::default());
        }

        let value: Value = serde_json::from_slice(body)?;
        let action = match value {
            Value::Object(mut fields) => fields.remove("action"),
            Value::Array(_) => None,
            _ => return Err(CommonError::ScalarBody),
        };
        Ok(Self { action })
    }
}

/// 制御レスポンスの `data` 部分
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ControlResponse {
    /// エコーされたアクション（未指定時は null）
    pub action_performed: Option<Value>,
}

impl From<&ControlRequest> for ControlResponse {
    fn from(req: &ControlRequest) -> Self {
        Self {
            action_performed: req.action.clone(),
        }
    }
}

/// Build a JSON object from static `(field, value)` pairs.
pub fn fixed_object(fields: &[(&str, &str)]) -> Value {
    let map: Map<String, Value> = fields
        .iter()
        .map(|(name, value)| ((*name).to_string(), Value::String((*value).to_string())))
        .collect();
    Value::Object(map)
}
