//! サイト登録受付
//!
//! 新規アドレスを `Pending` で登録し、チェッカーループを起動する

use tracing::{debug, info};

use crate::health::SiteStatusChecker;
use crate::registry::SiteRegistry;

/// 登録結果
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RegisterSummary {
    /// 新規登録したアドレス数
    pub added: usize,
    /// 既に登録済みだったアドレス数
    pub already_tracked: usize,
}

/// サイト登録受付
#[derive(Clone)]
pub struct RegistrationIntake {
    registry: SiteRegistry,
    checker: SiteStatusChecker,
}

impl RegistrationIntake {
    /// 新しい受付を作成
    pub fn new(registry: SiteRegistry, checker: SiteStatusChecker) -> Self {
        Self { registry, checker }
    }

    /// アドレス群を登録
    ///
    /// 既存アドレスの状態は変更しない。空の入力でもチェッカーの起動は試みる。
    pub async fn register<S: AsRef<str>>(&self, sites: &[S]) -> RegisterSummary {
        let mut summary = RegisterSummary::default();

        for site in sites {
            let site = site.as_ref();
            if self.registry.insert_pending(site).await {
                debug!(site = %site, "Site registered");
                summary.added += 1;
            } else {
                summary.already_tracked += 1;
            }
        }

        if self.checker.ensure_running() {
            info!("Site status checker launched by registration");
        }

        info!(
            added = summary.added,
            already_tracked = summary.already_tracked,
            "Site list updated"
        );

        summary
    }
}
