mod common;

use common::{ScriptedTransport, test_config};
use serde_json::json;
use std::sync::Arc;
use vk_links::AppError;
use vk_links::application::services::{Classification, LinkService};
use vk_links::infrastructure::vk::{GET_LINK_STATS, VkApiClient};

fn link_service(transport: Arc<ScriptedTransport>) -> LinkService<Arc<ScriptedTransport>> {
    let config = test_config();
    let api = VkApiClient::new(
        Arc::new(transport),
        config.access_token.clone(),
        config.api_version.clone(),
    );
    LinkService::new(Arc::new(api))
}

#[tokio::test]
async fn test_foreign_hosts_never_reach_the_network() {
    let transport = Arc::new(ScriptedTransport::new());
    let service = link_service(transport.clone());

    for url in [
        "https://example.com/very/long/path",
        "https://vk.com/abc123",
        "https://vk.cc.example.com/abc123",
        "ftp://files.example.com/vk.cc/abc123",
    ] {
        assert!(!service.is_shortened_link(url).await, "{url}");
    }

    assert_eq!(transport.call_count(), 0);
}

#[tokio::test]
async fn test_empty_key_never_reaches_the_network() {
    let transport = Arc::new(ScriptedTransport::new());
    let service = link_service(transport.clone());

    assert!(!service.is_shortened_link("https://vk.cc").await);
    assert!(!service.is_shortened_link("https://vk.cc/").await);
    assert!(!service.is_shortened_link("https://vk.cc/?key=abc").await);

    assert_eq!(transport.call_count(), 0);
}

#[tokio::test]
async fn test_confirmed_key_is_a_short_link() {
    let transport = Arc::new(
        ScriptedTransport::new().reply(json!({ "response": { "key": "abc123", "stats": [] } })),
    );
    let service = link_service(transport.clone());

    let classification = service.classify("https://VK.CC/abc123").await;

    assert!(matches!(classification, Classification::ShortLink(ref key) if key.as_str() == "abc123"));

    let calls = transport.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].method, GET_LINK_STATS);
    assert_eq!(calls[0].param("key"), Some("abc123"));
    assert_eq!(calls[0].param("access_token"), Some("test-token"));
    assert_eq!(calls[0].param("v"), Some("5.199"));
    assert_eq!(calls[0].param("interval"), None);
}

#[tokio::test]
async fn test_error_payload_is_not_a_short_link() {
    let transport = Arc::new(ScriptedTransport::new().reply(json!({
        "error": { "error_code": 100, "error_msg": "One of the parameters specified was missing or invalid" }
    })));
    let service = link_service(transport.clone());

    assert!(!service.is_shortened_link("https://vk.cc/unknown").await);
    assert_eq!(transport.call_count(), 1);
}

#[tokio::test]
async fn test_transport_failure_is_not_a_short_link() {
    let transport =
        Arc::new(ScriptedTransport::new().fail(AppError::request("connection refused")));
    let service = link_service(transport.clone());

    assert!(!service.is_shortened_link("https://vk.cc/abc123").await);
    assert_eq!(transport.call_count(), 1);
}
