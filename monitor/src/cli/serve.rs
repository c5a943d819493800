//! serve サブコマンド
//!
//! 監視サーバーを起動します。

use clap::Args;
use site_monitor_common::config::MonitorConfig;

use crate::config::monitor_config_from_env;

/// serve サブコマンドの引数
///
/// 未指定の値は環境変数（旧名を含む）、さらにデフォルト値の順で補完する。
#[derive(Args, Debug, Clone, Default)]
pub struct ServeArgs {
    /// Listen port [env: SITE_MONITOR_PORT, PORT] [default: 8080]
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Bind address [env: SITE_MONITOR_HOST, HOST] [default: 127.0.0.1]
    #[arg(short = 'H', long)]
    pub host: Option<String>,
}

impl ServeArgs {
    /// 引数と環境変数からサーバー設定を作成
    pub fn to_config(&self) -> MonitorConfig {
        let base = monitor_config_from_env();
        MonitorConfig {
            host: self.host.clone().unwrap_or(base.host),
            port: self.port.unwrap_or(base.port),
        }
    }
}
