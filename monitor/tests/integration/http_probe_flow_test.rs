//! Integration Test: 実HTTPプローブでのエンドツーエンド
//!
//! wiremockのサイトを登録し、1サイクル後にAPIから状態を確認する

use axum::http::StatusCode;
use serde_json::json;
use site_monitor::{api, probe::HttpProbe, AppState};
use std::sync::Arc;
use site_monitor_common::types::SiteStatus;
use std::time::Duration;
use wiremock::matchers::method;
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::support::{get_json, register_sites};

async fn site_responding(status: u16) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(status))
        .mount(&server)
        .await;
    server
}

#[tokio::test]
async fn test_http_sites_reported_after_cycle() {
    let up = site_responding(200).await;
    let not_found = site_responding(404).await;
    let probe = HttpProbe::with_timeout(Duration::from_secs(2)).unwrap();
    let state = AppState::new(Arc::new(probe));
    let app = api::create_router(state.clone());

    let up_uri = up.uri();
    let not_found_uri = not_found.uri();
    let unreachable = "http://127.0.0.1:1".to_string();
    let (status, _) = register_sites(
        &app,
        &[up_uri.as_str(), not_found_uri.as_str(), unreachable.as_str()],
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let summary = state.checker.run_cycle().await;
    assert_eq!(summary.probed, 3);
    assert_eq!(summary.up, 1);
    assert_eq!(summary.down, 2);

    let (_, body) = get_json(&app, &format!("/query?site={}", up_uri)).await;
    assert_eq!(body, json!({"Site": up_uri, "Status": "UP"}));
    let (_, body) = get_json(&app, &format!("/query?site={}", not_found_uri)).await;
    assert_eq!(body, json!({"Site": not_found_uri, "Status": "DOWN"}));
    let (_, body) = get_json(&app, &format!("/query?site={}", unreachable)).await;
    assert_eq!(body, json!({"Site": unreachable, "Status": "DOWN"}));
}

#[tokio::test]
async fn test_site_recovers_on_next_cycle() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;
    let state = AppState::new(Arc::new(HttpProbe::new().unwrap()));

    state.registry.insert_pending(&server.uri()).await;
    state.checker.run_cycle().await;
    assert_eq!(
        state.registry.get(&server.uri()).await,
        Some(SiteStatus::Down)
    );

    state.checker.run_cycle().await;
    assert_eq!(
        state.registry.get(&server.uri()).await,
        Some(SiteStatus::Up)
    );
}
