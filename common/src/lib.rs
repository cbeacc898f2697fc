//! Metaverse Master API Common Library
//!
//! サーバーとテストで共有する型定義、プロトコル、エラー、設定

#![warn(missing_docs)]

/// 設定構造体
pub mod config;

/// エラー型定義
pub mod error;

/// リクエスト・レスポンスのワイヤ形式
pub mod protocol;

/// ドメイン型（チーム、オペレーション、エンドポイント定義）
pub mod types;
