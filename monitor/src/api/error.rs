//! APIエラーレスポンス型
//!
//! axum用の共通エラーハンドリング

use axum::{http::StatusCode, response::IntoResponse, Json};
use site_monitor_common::error::MonitorError;
use site_monitor_common::protocol::MessageResponse;
use tracing::{debug, error};

/// Axum用のエラーレスポンス型
#[derive(Debug)]
pub struct AppError(pub MonitorError);

impl From<MonitorError> for AppError {
    fn from(err: MonitorError) -> Self {
        AppError(err)
    }
}

impl AppError {
    /// エラーに対応するHTTPステータス
    pub fn status_code(&self) -> StatusCode {
        match &self.0 {
            MonitorError::InvalidRegistration(_) => StatusCode::NOT_ACCEPTABLE,
            MonitorError::MissingSiteParam => StatusCode::BAD_REQUEST,
            MonitorError::SiteNotFound(_) => StatusCode::BAD_REQUEST,
            MonitorError::Common(_) => StatusCode::BAD_REQUEST,
            MonitorError::Http(_) => StatusCode::BAD_GATEWAY,
            MonitorError::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
            MonitorError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        // 詳細はログのみに出し、クライアントには external_message() を返す
        if self.0.is_client_error() {
            debug!(error = %self.0, "Client error");
        } else {
            error!(error = %self.0, "Request failed");
        }

        let status = self.status_code();
        let payload = MessageResponse::new(self.0.external_message());

        (status, Json(payload)).into_response()
    }
}
