//! Site Monitor 共通ライブラリ
//!
//! サーバーとCLIで共有する型・プロトコル・エラー・設定

#![warn(missing_docs)]

/// 設定管理
pub mod config;

/// エラー型定義
pub mod error;

/// 通信プロトコル定義
pub mod protocol;

/// 共通型定義
pub mod types;
