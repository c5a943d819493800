//! 共通型定義
//!
//! 監視対象サイトとその状態

use serde::{Deserialize, Serialize};

/// サイトの稼働状態
///
/// ワイヤ上では `"WAIT"` / `"UP"` / `"DOWN"` として表現される。
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
pub enum SiteStatus {
    /// 登録済み・未チェック
    #[default]
    #[serde(rename = "WAIT")]
    Pending,
    /// 直近のチェックが成功
    #[serde(rename = "UP")]
    Up,
    /// 直近のチェックが失敗
    #[serde(rename = "DOWN")]
    Down,
}

impl SiteStatus {
    /// SiteStatusを文字列に変換
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "WAIT",
            Self::Up => "UP",
            Self::Down => "DOWN",
        }
    }

    /// チェック結果（成功/失敗）から状態を決定
    pub fn from_probe_success(success: bool) -> Self {
        if success {
            Self::Up
        } else {
            Self::Down
        }
    }
}

impl std::fmt::Display for SiteStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// レジストリの1エントリ（アドレスと状態の組）
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SiteEntry {
    /// 監視対象アドレス
    #[serde(rename = "Site")]
    pub site: String,
    /// 直近の状態
    #[serde(rename = "Status")]
    pub status: SiteStatus,
}

impl SiteEntry {
    /// 新しいエントリを作成
    pub fn new(site: impl Into<String>, status: SiteStatus) -> Self {
        Self {
            site: site.into(),
            status,
        }
    }
}
