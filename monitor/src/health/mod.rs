//! ヘルスチェックモニター
//!
//! 登録済みサイトを一定間隔で並列チェックし、結果をレジストリへ反映する。
//!
//! 1サイクル = 全サイトへのプローブを並列起動 → 全完了を待機 → 固定間隔スリープ。
//! ループはプロセス内で常に1つだけ起動される。

/// サイトステータスチェッカー
pub mod site_checker;

pub use site_checker::{CheckerState, CycleSummary, SiteStatusChecker, CHECK_INTERVAL_SECS};
