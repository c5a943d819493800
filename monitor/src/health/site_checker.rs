//! サイトステータスチェッカー
//!
//! プル型ヘルスチェックで登録済みサイトの稼働状況を監視

use futures::future::join_all;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::time::sleep;
use tracing::{debug, error, info};

use crate::probe::Probe;
use crate::registry::SiteRegistry;
use crate::shutdown::ShutdownController;
use site_monitor_common::types::SiteStatus;

/// チェック間隔（秒）
pub const CHECK_INTERVAL_SECS: u64 = 60;

/// チェッカーの稼働状態
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckerState {
    /// ループ未起動
    Idle,
    /// ループ稼働中
    Running,
}

/// 1サイクルの集計結果
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CycleSummary {
    /// プローブを起動したサイト数
    pub probed: usize,
    /// `Up` になったサイト数
    pub up: usize,
    /// `Down` になったサイト数（タスク異常終了を含む）
    pub down: usize,
}

/// サイトステータスチェッカー
///
/// `ensure_running()` で初回のみバックグラウンドループを起動する。
/// テストからは `run_cycle()` で1サイクルだけ決定的に実行できる。
#[derive(Clone)]
pub struct SiteStatusChecker {
    /// サイト状態レジストリ
    registry: SiteRegistry,
    /// プローブ実装
    probe: Arc<dyn Probe>,
    /// ループ起動済みフラグ
    running: Arc<AtomicBool>,
    /// ループ停止シグナル
    shutdown: ShutdownController,
}

impl SiteStatusChecker {
    /// 新しいチェッカーを作成（Idle状態）
    pub fn new(
        registry: SiteRegistry,
        probe: Arc<dyn Probe>,
        shutdown: ShutdownController,
    ) -> Self {
        Self {
            registry,
            probe,
            running: Arc::new(AtomicBool::new(false)),
            shutdown,
        }
    }

    /// 現在の稼働状態
    pub fn state(&self) -> CheckerState {
        if self.running.load(Ordering::SeqCst) {
            CheckerState::Running
        } else {
            CheckerState::Idle
        }
    }

    /// ループが未起動なら起動する
    ///
    /// このコールで起動した場合のみ `true` を返す。
    /// シャットダウン要求後は起動しない。
    pub fn ensure_running(&self) -> bool {
        if self.shutdown.is_shutdown_requested() {
            return false;
        }
        if self
            .running
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_err()
        {
            return false;
        }

        let checker = self.clone();
        tokio::spawn(async move {
            checker.monitor_loop().await;
            checker.running.store(false, Ordering::SeqCst);
        });
        true
    }

    /// 監視ループ
    async fn monitor_loop(&self) {
        info!(
            interval_secs = CHECK_INTERVAL_SECS,
            "Site status checker started"
        );

        loop {
            self.run_cycle().await;

            debug!(interval_secs = CHECK_INTERVAL_SECS, "Sleeping until next cycle");
            tokio::select! {
                _ = sleep(Duration::from_secs(CHECK_INTERVAL_SECS)) => {}
                _ = self.shutdown.wait() => {
                    info!("Site status checker stopped");
                    break;
                }
            }
        }
    }

    /// 全サイトを並列チェック（1サイクル）
    ///
    /// 各プローブの結果は完了次第レジストリへ書き込まれ、
    /// このサイクルで起動した全タスクの完了を待ってから戻る。
    pub async fn run_cycle(&self) -> CycleSummary {
        let sites = self.registry.addresses().await;

        debug!(count = sites.len(), "Starting check cycle");

        let (sites, handles): (Vec<_>, Vec<_>) = sites
            .into_iter()
            .map(|site| {
                let registry = self.registry.clone();
                let probe = Arc::clone(&self.probe);
                let task_site = site.clone();
                let handle = tokio::spawn(async move {
                    let site = task_site;
                    let status = match probe.check(&site).await {
                        // 一度チェックしたサイトをPendingに戻さない
                        SiteStatus::Pending => SiteStatus::Down,
                        status => status,
                    };
                    registry.upsert(&site, status).await;
                    info!(site = %site, status = %status, "Site checked");
                    status
                });
                (site, handle)
            })
            .unzip();

        let mut summary = CycleSummary {
            probed: handles.len(),
            ..Default::default()
        };

        for (site, result) in sites.iter().zip(join_all(handles).await) {
            match result {
                Ok(SiteStatus::Up) => summary.up += 1,
                Ok(_) => summary.down += 1,
                Err(e) => {
                    // タスク異常終了もDownとして記録する
                    error!(site = %site, "Probe task join error: {}", e);
                    self.registry.upsert(site, SiteStatus::Down).await;
                    summary.down += 1;
                }
            }
        }

        info!(
            probed = summary.probed,
            up = summary.up,
            down = summary.down,
            "Check cycle completed"
        );

        summary
    }
}
