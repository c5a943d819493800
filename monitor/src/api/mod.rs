//! REST APIハンドラー
//!
//! サイト登録と状態問い合わせ

/// APIエラーレスポンス型
pub mod error;
/// サイト登録・状態問い合わせ
pub mod websites;

use crate::AppState;
use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

/// APIルーターを作成
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route(
            "/websites",
            get(websites::list_websites).post(websites::register_websites),
        )
        .route("/query", get(websites::query_website))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
