//! サイトプローブ
//!
//! 1サイトに対して1回だけ到達性チェックを行う。
//! `200 OK` のみを `Up` とし、それ以外（非200、接続失敗、タイムアウト、不正なURL）は
//! すべて `Down` に畳み込む。リトライは行わない。

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use std::time::Duration;
use tracing::{debug, warn};

use site_monitor_common::error::{MonitorError, MonitorResult};
use site_monitor_common::types::SiteStatus;

/// プローブのタイムアウト（秒）
pub const PROBE_TIMEOUT_SECS: u64 = 10;

/// 到達性チェック
#[async_trait]
pub trait Probe: Send + Sync {
    /// サイトを1回チェックして状態を返す
    async fn check(&self, site: &str) -> SiteStatus;
}

/// HTTP GETによるプローブ
#[derive(Clone)]
pub struct HttpProbe {
    client: Client,
}

impl HttpProbe {
    /// デフォルトのタイムアウトでプローブを作成
    pub fn new() -> MonitorResult<Self> {
        Self::with_timeout(Duration::from_secs(PROBE_TIMEOUT_SECS))
    }

    /// タイムアウトを指定してプローブを作成
    pub fn with_timeout(timeout: Duration) -> MonitorResult<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| MonitorError::Http(format!("Failed to create HTTP client: {}", e)))?;
        Ok(Self { client })
    }
}

#[async_trait]
impl Probe for HttpProbe {
    async fn check(&self, site: &str) -> SiteStatus {
        debug!(site = %site, "Checking site");

        let success = match self.client.get(site).send().await {
            Ok(response) => {
                let ok = response.status() == StatusCode::OK;
                if !ok {
                    warn!(site = %site, status = %response.status(), "Site responded with non-OK status");
                }
                ok
            }
            Err(e) => {
                warn!(site = %site, error = %e, "Site check failed");
                false
            }
        };

        SiteStatus::from_probe_success(success)
    }
}
