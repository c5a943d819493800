//! 設定管理
//!
//! MonitorConfig 設定構造体

use serde::{Deserialize, Serialize};

use crate::error::CommonError;

/// Monitorサーバー設定
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MonitorConfig {
    /// ホストアドレス (デフォルト: "127.0.0.1")
    #[serde(default = "default_host")]
    pub host: String,

    /// ポート番号 (デフォルト: 8080)
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8080
}

impl MonitorConfig {
    /// バインドアドレス（`host:port`）
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// 設定値を検証
    pub fn validate(&self) -> Result<(), CommonError> {
        if self.host.trim().is_empty() {
            return Err(CommonError::Config("host must not be empty".to_string()));
        }
        Ok(())
    }
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}
