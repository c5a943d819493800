//! サイト登録・状態問い合わせAPIハンドラー

use axum::{
    body::Bytes,
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use site_monitor_common::{
    error::MonitorError,
    protocol::{MessageResponse, RegisterRequest, SiteQuery, SiteStatusResponse, MSG_REGISTER_OK},
};

use super::error::AppError;
use crate::AppState;

/// POST /websites - サイト一覧登録
///
/// ボディは Content-Type に関係なくJSONとして解釈する。
/// 解釈できない場合や空のアドレスを含む場合はレジストリに触れずに406を返す。
pub async fn register_websites(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<(StatusCode, Json<MessageResponse>), AppError> {
    let req: RegisterRequest = serde_json::from_slice(&body)
        .map_err(|e| MonitorError::InvalidRegistration(e.to_string()))?;

    if req.has_blank_site() {
        return Err(MonitorError::InvalidRegistration("blank site in list".to_string()).into());
    }

    state.intake.register(&req.site_list).await;

    Ok((StatusCode::CREATED, Json(MessageResponse::new(MSG_REGISTER_OK))))
}

/// GET /query?site=... - 単一サイトの状態
///
/// `site` が重複していても最初の値を使う。空の値は未登録サイトとして扱う。
pub async fn query_website(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Json<SiteStatusResponse>, AppError> {
    let site = SiteQuery::from_pairs(pairs)
        .site
        .ok_or(MonitorError::MissingSiteParam)?;

    let status = state
        .registry
        .get(&site)
        .await
        .ok_or_else(|| MonitorError::SiteNotFound(site.clone()))?;

    Ok(Json(SiteStatusResponse::new(site, status)))
}

/// GET /websites - 全サイトの状態
pub async fn list_websites(State(state): State<AppState>) -> Json<Vec<SiteStatusResponse>> {
    Json(state.registry.snapshot().await)
}
