//! Site Monitor Server
//!
//! 登録されたWebサイトの稼働状況を定期的に監視する中央サーバー

#![warn(missing_docs)]

use std::sync::Arc;

/// REST APIハンドラー
pub mod api;

/// CLIインターフェース
pub mod cli;

/// 設定管理（環境変数ヘルパー）
pub mod config;

/// 定期ヘルスチェック（サイクル調整）
pub mod health;

/// サイト登録受付
pub mod intake;

/// ロギング初期化ユーティリティ
pub mod logging;

/// 単一サイトの到達性チェック
pub mod probe;

/// サイト状態レジストリ
pub mod registry;

/// axumサーバー起動・シャットダウンハンドリング
pub mod server;

/// Shutdown controller
pub mod shutdown;

/// アプリケーション状態
#[derive(Clone)]
pub struct AppState {
    /// サイト状態レジストリ
    pub registry: registry::SiteRegistry,
    /// 定期ヘルスチェッカー
    pub checker: health::SiteStatusChecker,
    /// サイト登録受付
    pub intake: intake::RegistrationIntake,
    /// Cooperative shutdown controller
    pub shutdown: shutdown::ShutdownController,
}

impl AppState {
    /// 空のレジストリと指定プローブからアプリケーション状態を構築
    pub fn new(probe: Arc<dyn probe::Probe>) -> Self {
        let shutdown = shutdown::ShutdownController::default();
        let registry = registry::SiteRegistry::new();
        let checker = health::SiteStatusChecker::new(registry.clone(), probe, shutdown.clone());
        let intake = intake::RegistrationIntake::new(registry.clone(), checker.clone());
        Self {
            registry,
            checker,
            intake,
            shutdown,
        }
    }
}
