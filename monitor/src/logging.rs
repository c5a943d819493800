//! ロギング初期化
//!
//! `SITE_MONITOR_LOG_LEVEL`（旧: `RUST_LOG`）でフィルタを指定できる。未設定時は `info`。

use site_monitor_common::error::{MonitorError, MonitorResult};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::get_env_with_fallback;

/// デフォルトのログレベル
const DEFAULT_LOG_LEVEL: &str = "info";

/// 環境変数からフィルタを構築
fn build_filter() -> EnvFilter {
    let directive = get_env_with_fallback("SITE_MONITOR_LOG_LEVEL", "RUST_LOG")
        .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string());
    EnvFilter::try_new(&directive).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL))
}

/// グローバルサブスクライバーを初期化
pub fn init() -> MonitorResult<()> {
    tracing_subscriber::registry()
        .with(build_filter())
        .with(fmt::layer().with_target(false))
        .try_init()
        .map_err(|e| MonitorError::Internal(format!("failed to initialize logging: {}", e)))
}
