//! サイト状態レジストリ
//!
//! アドレス → 状態のマッピングをメモリ内で管理する。
//! すべての読み書きは単一の `RwLock` で1操作単位に直列化される。

use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use site_monitor_common::types::{SiteEntry, SiteStatus};

/// サイト状態レジストリ
#[derive(Clone, Default)]
pub struct SiteRegistry {
    sites: Arc<RwLock<HashMap<String, SiteStatus>>>,
}

impl SiteRegistry {
    /// 新しいレジストリを作成
    pub fn new() -> Self {
        Self::default()
    }

    /// サイトの状態を取得（未登録なら `None`）
    pub async fn get(&self, site: &str) -> Option<SiteStatus> {
        self.sites.read().await.get(site).copied()
    }

    /// サイトの状態を書き込む（既存なら上書き）
    pub async fn upsert(&self, site: &str, status: SiteStatus) {
        let mut sites = self.sites.write().await;
        match sites.get_mut(site) {
            Some(current) => *current = status,
            None => {
                sites.insert(site.to_string(), status);
            }
        }
    }

    /// 未登録の場合のみ `Pending` で登録する
    ///
    /// 登録した場合は `true`。既存エントリの状態は変更しない。
    pub async fn insert_pending(&self, site: &str) -> bool {
        let mut sites = self.sites.write().await;
        if sites.contains_key(site) {
            return false;
        }
        sites.insert(site.to_string(), SiteStatus::Pending);
        true
    }

    /// 全エントリのスナップショット（アドレス順）
    pub async fn snapshot(&self) -> Vec<SiteEntry> {
        let sites = self.sites.read().await;
        let mut entries: Vec<SiteEntry> = sites
            .iter()
            .map(|(site, status)| SiteEntry::new(site.clone(), *status))
            .collect();
        drop(sites);
        entries.sort_by(|a, b| a.site.cmp(&b.site));
        entries
    }

    /// 登録済みアドレス一覧
    pub async fn addresses(&self) -> Vec<String> {
        self.sites.read().await.keys().cloned().collect()
    }

    /// 登録数
    pub async fn len(&self) -> usize {
        self.sites.read().await.len()
    }

    /// 登録が空か
    pub async fn is_empty(&self) -> bool {
        self.sites.read().await.is_empty()
    }
}
