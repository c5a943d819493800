//! 通信プロトコル定義
//!
//! クライアント↔Monitor間のリクエスト/レスポンス

use serde::{Deserialize, Serialize};

use crate::types::SiteEntry;

/// 登録成功時のメッセージ
pub const MSG_REGISTER_OK: &str = "website list updated successfully!";

/// 登録リクエストが不正な場合のメッセージ
pub const MSG_REGISTER_REJECTED: &str = "website list not updated";

/// `site` クエリパラメータが無い場合のメッセージ
pub const MSG_MISSING_SITE_PARAM: &str = "Query param not found, enter valid url string";

/// 未登録サイトを問い合わせた場合のメッセージ
pub const MSG_SITE_NOT_TRACKED: &str = "This website not in the database, please add first";

/// サイト登録リクエスト
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RegisterRequest {
    /// 監視対象アドレス一覧
    #[serde(rename = "SiteList", alias = "siteList", alias = "site_list")]
    pub site_list: Vec<String>,
}

impl RegisterRequest {
    /// 空白のみのアドレスを含むか
    pub fn has_blank_site(&self) -> bool {
        self.site_list.iter().any(|s| s.trim().is_empty())
    }
}

/// サイト状態レスポンス
pub type SiteStatusResponse = SiteEntry;

/// 汎用メッセージレスポンス
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MessageResponse {
    /// メッセージ本文
    pub message: String,
}

impl MessageResponse {
    /// 新しいメッセージレスポンスを作成
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// `GET /query` のクエリパラメータ
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SiteQuery {
    /// 問い合わせ対象アドレス（空文字列も「指定あり」として扱う）
    #[serde(default)]
    pub site: Option<String>,
}

impl SiteQuery {
    /// クエリのキー/値ペアから構築
    ///
    /// `site` が複数ある場合は最初の値を使う。
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        Self {
            site: pairs
                .into_iter()
                .find(|(key, _)| key == "site")
                .map(|(_, value)| value),
        }
    }
}
