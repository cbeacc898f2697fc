//! 共通型定義
//!
//! OperationKind, RouteMethod, EndpointKey等のコアデータ型

use serde::{Deserialize, Serialize};
use std::fmt;

/// チームが公開するオペレーションの種類
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum OperationKind {
    /// ステータス読み取り
    Status,
    /// データ読み取り
    Data,
    /// セッション読み取り
    Session,
    /// 制御（アクションのエコー）
    Control,
}

impl OperationKind {
    /// Path segment used for this operation.
    pub fn as_str(&self) -> &'static str {
        match self {
            OperationKind::Status => "status",
            OperationKind::Data => "data",
            OperationKind::Session => "session",
            OperationKind::Control => "control",
        }
    }

    /// Read operations are served over GET with a fixed payload.
    pub fn is_read(&self) -> bool {
        !matches!(self, OperationKind::Control)
    }

    /// HTTP method the operation is exposed on.
    pub fn method(&self) -> RouteMethod {
        if self.is_read() {
            RouteMethod::Get
        } else {
            RouteMethod::Post
        }
    }
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// ルートのHTTPメソッド
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "UPPERCASE")]
pub enum RouteMethod {
    /// GET
    Get,
    /// POST
    Post,
}

impl fmt::Display for RouteMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RouteMethod::Get => f.write_str("GET"),
            RouteMethod::Post => f.write_str("POST"),
        }
    }
}

/// レジストリの検索キー（チームID + オペレーション）
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EndpointKey {
    /// チームID（例: "team8"）
    pub team_id: String,
    /// オペレーション
    pub operation: OperationKind,
}

impl EndpointKey {
    /// Build a key from a team id and operation.
    pub fn new(team_id: impl Into<String>, operation: OperationKind) -> Self {
        Self {
            team_id: team_id.into(),
            operation,
        }
    }
}

impl fmt::Display for EndpointKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.team_id, self.operation)
    }
}
