//! 設定管理
//!
//! ServerConfig設定構造体

use serde::{Deserialize, Serialize};

/// APIサーバー設定
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ServerConfig {
    /// ホストアドレス (デフォルト: "0.0.0.0")
    #[serde(default = "default_host")]
    pub host: String,

    /// ポート番号 (デフォルト: 3000)
    #[serde(default = "default_port")]
    pub port: u16,

    /// ルートエンドポイントとログに表示するサービス名
    #[serde(default = "default_service_name")]
    pub service_name: String,
}

/// Port used when nothing is configured.
pub const DEFAULT_PORT: u16 = 3000;

/// Service name used when nothing is configured.
pub const DEFAULT_SERVICE_NAME: &str = "Metaverse Master API";

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    DEFAULT_PORT
}

fn default_service_name() -> String {
    DEFAULT_SERVICE_NAME.to_string()
}

impl ServerConfig {
    /// `host:port` string suitable for `TcpListener::bind`.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            service_name: default_service_name(),
        }
    }
}
