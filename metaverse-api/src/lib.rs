//! Metaverse Master API Server
//!
//! 各チームのモックステータスを返すREST APIサーバー

#![warn(missing_docs)]

use std::sync::Arc;

/// REST APIハンドラー
pub mod api;

/// 設定管理（環境変数ヘルパー）
pub mod config;

/// ロギング初期化ユーティリティ
pub mod logging;

/// レスポンスレジストリ（エンドポイント定義テーブル）
pub mod registry;

/// axumサーバー起動・シャットダウン
pub mod server;

/// Shutdown controller
pub mod shutdown;

/// アプリケーション状態
#[derive(Clone)]
pub struct AppState {
    /// レスポンスレジストリ（起動後は不変）
    pub registry: Arc<registry::ResponseRegistry>,
    /// ルートエンドポイントに表示するサービス名
    pub service_name: Arc<str>,
    /// Cooperative shutdown controller
    pub shutdown: shutdown::ShutdownController,
}

impl AppState {
    /// Build state around a registry.
    pub fn new(registry: registry::ResponseRegistry, service_name: impl Into<Arc<str>>) -> Self {
        Self {
            registry: Arc::new(registry),
            service_name: service_name.into(),
            shutdown: shutdown::ShutdownController::default(),
        }
    }
}
