//! Contract Test: POST /websites

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use site_monitor::health::CheckerState;
use site_monitor_common::types::SiteStatus;

use crate::support::{build_app, post_websites, register_sites, send, StubProbe};

/// POST /websites - 正常系: 新規登録
#[tokio::test]
async fn test_register_websites_created() {
    let test = build_app(StubProbe::hanging());

    let (status, body) =
        register_sites(&test.app, &["https://xyzw.zyx", "https://a.test", "https://b.test"]).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body, r#"{"message":"website list updated successfully!"}"#);
    assert_eq!(test.state.registry.len().await, 3);
    assert_eq!(
        test.state.registry.get("https://a.test").await,
        Some(SiteStatus::Pending)
    );
    assert_eq!(test.state.checker.state(), CheckerState::Running);
}

/// POST /websites - 異常系: JSONとして解釈できない
#[tokio::test]
async fn test_register_websites_malformed_body() {
    let test = build_app(StubProbe::hanging());

    let (status, body) = post_websites(&test.app, r#"{"SiteList": ["https://a.test""#).await;

    assert_eq!(status, StatusCode::NOT_ACCEPTABLE);
    assert_eq!(body, r#"{"message":"website list not updated"}"#);
    assert!(test.state.registry.is_empty().await);
    assert_eq!(test.state.checker.state(), CheckerState::Idle);
}

/// POST /websites - 異常系: 形の違うJSON（文字列）
#[tokio::test]
async fn test_register_websites_wrong_shape() {
    let test = build_app(StubProbe::hanging());
    let payload = serde_json::to_vec(
        r#"[]string{"https://xyzw.zyx", "https://youtube.com", "https://google.com"}"#,
    )
    .unwrap();

    let (status, body) = post_websites(&test.app, payload).await;

    assert_eq!(status, StatusCode::NOT_ACCEPTABLE);
    assert_eq!(body, r#"{"message":"website list not updated"}"#);
    assert!(test.state.registry.is_empty().await);
}

/// POST /websites - 異常系: 空のアドレスを含む
#[tokio::test]
async fn test_register_websites_blank_site_rejected() {
    let test = build_app(StubProbe::hanging());

    let (status, _) = register_sites(&test.app, &["https://a.test", "   "]).await;

    assert_eq!(status, StatusCode::NOT_ACCEPTABLE);
    assert!(test.state.registry.is_empty().await);
}

/// POST /websites - Content-Typeなしでも受け付ける
#[tokio::test]
async fn test_register_websites_without_content_type() {
    let test = build_app(StubProbe::hanging());
    let request = Request::builder()
        .method("POST")
        .uri("/websites")
        .body(Body::from(r#"{"SiteList":["https://a.test"]}"#))
        .unwrap();

    let (status, _) = send(&test.app, request).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(test.state.registry.len().await, 1);
}

/// POST /websites - 空リストは有効
#[tokio::test]
async fn test_register_websites_empty_list() {
    let test = build_app(StubProbe::hanging());

    let (status, _) = register_sites(&test.app, &[]).await;

    assert_eq!(status, StatusCode::CREATED);
    assert!(test.state.registry.is_empty().await);
    assert_eq!(test.state.checker.state(), CheckerState::Running);
}

/// POST /websites - 既存サイトの状態はリセットされない
#[tokio::test]
async fn test_register_websites_keeps_existing_status() {
    let test = build_app(StubProbe::hanging());
    register_sites(&test.app, &["https://a.test"]).await;
    test.state
        .registry
        .upsert("https://a.test", SiteStatus::Up)
        .await;

    let (status, _) = register_sites(&test.app, &["https://a.test", "https://b.test"]).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(test.state.registry.len().await, 2);
    assert_eq!(
        test.state.registry.get("https://a.test").await,
        Some(SiteStatus::Up)
    );
    assert_eq!(
        test.state.registry.get("https://b.test").await,
        Some(SiteStatus::Pending)
    );
}
