//! check サブコマンド
//!
//! 指定サイトを1サイクルだけチェックし、結果を表示します。

use clap::Args;
use std::sync::Arc;

use crate::health::SiteStatusChecker;
use crate::probe::{HttpProbe, Probe};
use crate::registry::SiteRegistry;
use crate::shutdown::ShutdownController;
use site_monitor_common::error::MonitorResult;
use site_monitor_common::types::{SiteEntry, SiteStatus};

/// check サブコマンドの引数
#[derive(Args, Debug, Clone)]
pub struct CheckArgs {
    /// Sites to check
    #[arg(required = true)]
    pub sites: Vec<String>,
}

/// checkコマンドを実行
///
/// 全サイトが `UP` なら `true` を返す。
pub async fn execute(args: &CheckArgs) -> MonitorResult<bool> {
    let probe = Arc::new(HttpProbe::new()?);
    let entries = check_once(probe, &args.sites).await;

    for entry in &entries {
        println!("{}: {}", entry.site, entry.status);
    }

    Ok(entries.iter().all(|e| e.status == SiteStatus::Up))
}

/// 新しいレジストリに登録して1サイクルだけ実行
///
/// ループは起動しない。
pub async fn check_once(probe: Arc<dyn Probe>, sites: &[String]) -> Vec<SiteEntry> {
    let registry = SiteRegistry::new();
    for site in sites {
        registry.insert_pending(site).await;
    }

    let checker = SiteStatusChecker::new(registry.clone(), probe, ShutdownController::default());
    checker.run_cycle().await;

    registry.snapshot().await
}
