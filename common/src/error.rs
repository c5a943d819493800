//! エラー型定義
//!
//! 統一エラー型（thiserror使用）
//!
//! `MonitorError::external_message()` はクライアント向けの安全なメッセージを返す。
//! 詳細は `Display` 実装（`to_string()`）に含まれるが、サーバーログにのみ出力する。

use thiserror::Error;

use crate::protocol::{MSG_MISSING_SITE_PARAM, MSG_REGISTER_REJECTED, MSG_SITE_NOT_TRACKED};

/// Common layer error type
#[derive(Debug, Error)]
pub enum CommonError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Site monitor error type
#[derive(Debug, Error)]
pub enum MonitorError {
    /// Common layer error
    #[error(transparent)]
    Common(#[from] CommonError),

    /// Registration payload could not be parsed or validated
    #[error("Invalid registration: {0}")]
    InvalidRegistration(String),

    /// `site` query parameter is missing
    #[error("Missing query parameter: site")]
    MissingSiteParam,

    /// Site is not tracked yet
    #[error("Site not tracked: {0}")]
    SiteNotFound(String),

    /// HTTP client error
    #[error("HTTP client error: {0}")]
    Http(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl MonitorError {
    /// Returns a safe error message for external clients.
    pub fn external_message(&self) -> &'static str {
        match self {
            Self::Common(_) => "Request error",
            Self::InvalidRegistration(_) => MSG_REGISTER_REJECTED,
            Self::MissingSiteParam => MSG_MISSING_SITE_PARAM,
            Self::SiteNotFound(_) => MSG_SITE_NOT_TRACKED,
            Self::Http(_) => "Backend service unavailable",
            Self::Io(_) => "Internal server error",
            Self::Internal(_) => "Internal server error",
        }
    }

    /// クライアント起因のエラーか
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            Self::Common(_) | Self::InvalidRegistration(_) | Self::MissingSiteParam | Self::SiteNotFound(_)
        )
    }
}

/// Result alias for monitor operations
pub type MonitorResult<T> = Result<T, MonitorError>;
