//! Integration tests for the endpoint methods.
//!
//! These tests run [`HipchatClient`] against a local mock server over real
//! HTTP to verify paths, token placement, payloads, and post-processing.

use std::time::Duration;

use hipchat_api::rest::{EmoticonListParams, EmoticonType, MessageColor, Notification, WebhookOptions};
use hipchat_api::{
    ApiRoot, AuthToken, HipchatClient, HipchatConfig, HipchatError, InvalidRequestError,
};
use serde_json::json;
use tokio_test::{assert_err, assert_ok};
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Creates a client pointed at the mock server's `/v2/` root.
fn create_test_client(server: &MockServer, max_concurrent_requests: usize) -> HipchatClient {
    let config = HipchatConfig::builder()
        .auth_token(AuthToken::new("client-token").unwrap())
        .api_root(ApiRoot::new(format!("{}/v2/", server.uri())).unwrap())
        .max_concurrent_requests(max_concurrent_requests)
        .build()
        .unwrap();
    HipchatClient::new(&config).unwrap()
}

// ============================================================================
// Rooms
// ============================================================================

#[tokio::test]
async fn test_rooms_returns_items_not_envelope() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v2/room"))
        .and(query_param("auth_token", "client-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "items": [{"id": 1, "name": "Dev"}],
            "links": {"self": "https://api.hipchat.com/v2/room"}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_test_client(&server, 8);
    let rooms = assert_ok!(client.rooms().await);

    assert_eq!(rooms, vec![json!({"id": 1, "name": "Dev"})]);
}

#[tokio::test]
async fn test_get_room_by_name_escapes_path() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v2/room/Dev%20Team"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": 3, "name": "Dev Team"})))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_test_client(&server, 8);
    let room = assert_ok!(client.get_room("Dev Team").await);

    assert_eq!(room["id"], 3);
}

#[tokio::test]
async fn test_history_reports_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v2/room/99/history"))
        .respond_with(
            ResponseTemplate::new(404)
                .set_body_json(json!({"error": {"code": 404, "message": "Room not found", "type": "Not Found"}})),
        )
        .mount(&server)
        .await;

    let client = create_test_client(&server, 8);
    let error = assert_err!(client.history(99_u64).await);

    assert!(matches!(error, HipchatError::Api(ref e) if e.code == 404));
    assert_eq!(error.to_string(), "Room not found");
}

#[tokio::test]
async fn test_create_room_posts_params_as_json() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v2/room"))
        .and(query_param("auth_token", "client-token"))
        .and(body_json(json!({"name": "Ops", "privacy": "private"})))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"id": 12})))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_test_client(&server, 8);
    let params = json!({"name": "Ops", "privacy": "private"});
    let created = assert_ok!(
        client
            .create_room(params.as_object().unwrap().clone())
            .await
    );

    assert_eq!(created, json!({"id": 12}));
}

#[tokio::test]
async fn test_delete_room_succeeds_on_204() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/v2/room/12"))
        .and(query_param("auth_token", "client-token"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_test_client(&server, 8);
    assert_ok!(client.delete_room(12_u64).await);
}

#[tokio::test]
async fn test_set_topic_puts_topic_with_client_token() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/v2/room/Dev/topic"))
        .and(query_param("auth_token", "client-token"))
        .and(body_json(json!({"topic": "Release day"})))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_test_client(&server, 8);
    assert_ok!(client.set_topic("Dev", "Release day").await);
}

#[tokio::test]
async fn test_capabilities_uses_empty_token() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v2/capabilities"))
        .and(query_param("auth_token", ""))
        .and(query_param("token", ""))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"capabilities": {}})))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_test_client(&server, 8);
    let capabilities = assert_ok!(client.capabilities().await);

    assert!(capabilities.get("capabilities").is_some());
}

// ============================================================================
// Emoticons
// ============================================================================

#[tokio::test]
async fn test_emoticons_with_applies_defaults() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v2/emoticon"))
        .and(query_param("start-index", "0"))
        .and(query_param("max-results", "100"))
        .and(query_param("type", "group"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"items": [{"id": 34, "shortcut": "fonzie"}]})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = create_test_client(&server, 8);
    let params = EmoticonListParams {
        emoticon_type: Some(EmoticonType::Group),
        ..Default::default()
    };
    let emoticons = assert_ok!(client.emoticons_with(&params).await);

    assert_eq!(emoticons, vec![json!({"id": 34, "shortcut": "fonzie"})]);
}

#[tokio::test]
async fn test_get_emoticon_by_shortcut() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v2/emoticon/fonzie"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": 34})))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_test_client(&server, 8);
    let emoticon = assert_ok!(client.get_emoticon("fonzie").await);

    assert_eq!(emoticon["id"], 34);
}

#[tokio::test]
async fn test_emoticons_without_items_is_unexpected_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v2/emoticon"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"links": {}})))
        .mount(&server)
        .await;

    let client = create_test_client(&server, 8);
    let error = assert_err!(client.emoticons().await);

    assert!(matches!(error, HipchatError::UnexpectedBody { field: "items" }));
}

// ============================================================================
// Notifications
// ============================================================================

#[tokio::test]
async fn test_notify_authenticates_with_notification_token() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v2/room/Dev/notification"))
        .and(query_param("auth_token", "room-token"))
        .and(body_json(json!({
            "message": "Build passed",
            "token": "room-token",
            "color": "green"
        })))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_test_client(&server, 8);
    let notification = Notification::builder()
        .message("Build passed")
        .token("room-token")
        .color(MessageColor::Green)
        .build()
        .unwrap();

    assert_ok!(client.notify("Dev", notification).await);
}

#[tokio::test]
async fn test_notify_message_convenience() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v2/room/5/notification"))
        .and(query_param("auth_token", "room-token"))
        .and(body_json(json!({"message": "hi", "token": "room-token"})))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_test_client(&server, 8);
    assert_ok!(client.notify_message(5_u64, "hi", "room-token").await);
}

#[test]
fn test_notification_without_token_is_invalid_usage() {
    let error = assert_err!(Notification::builder().message("hi").build());
    assert_eq!(error, InvalidRequestError::MissingNotificationFields);
}

// ============================================================================
// Webhooks
// ============================================================================

#[tokio::test]
async fn test_create_webhook_posts_options() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v2/room/Dev/webhook"))
        .and(query_param("auth_token", "client-token"))
        .and(body_json(json!({
            "url": "https://example.com/hook",
            "event": "room_message",
            "pattern": "^/deploy"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"id": 77})))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_test_client(&server, 8);
    let options = WebhookOptions::builder()
        .url("https://example.com/hook")
        .event("room_message")
        .pattern("^/deploy")
        .build()
        .unwrap();
    let created = assert_ok!(client.create_webhook("Dev", options).await);

    assert_eq!(created["id"], 77);
}

#[tokio::test]
async fn test_get_and_list_webhooks() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v2/room/Dev/webhook/77"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": 77})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v2/room/Dev/webhook"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"items": [{"id": 77}]})))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_test_client(&server, 8);
    let hook = assert_ok!(client.get_webhook("Dev", 77).await);
    let listing = assert_ok!(client.webhooks("Dev").await);

    assert_eq!(hook["id"], 77);
    assert_eq!(listing["items"][0]["id"], 77);
}

async fn mount_webhook_listing(server: &MockServer, ids: &[u64]) {
    let items: Vec<_> = ids.iter().map(|id| json!({"id": id})).collect();
    Mock::given(method("GET"))
        .and(path("/v2/room/Dev/webhook"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"items": items})))
        .expect(1)
        .mount(server)
        .await;
}

async fn mount_webhook_delete(server: &MockServer, id: u64, response: ResponseTemplate) {
    Mock::given(method("DELETE"))
        .and(path(format!("/v2/room/Dev/webhook/{id}")))
        .and(query_param("auth_token", "client-token"))
        .respond_with(response)
        .expect(1)
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_delete_all_webhooks_deletes_each_one() {
    let server = MockServer::start().await;
    mount_webhook_listing(&server, &[1, 2, 3]).await;
    for id in [1, 2, 3] {
        mount_webhook_delete(&server, id, ResponseTemplate::new(204)).await;
    }

    let client = create_test_client(&server, 2);
    let deleted = assert_ok!(client.delete_all_webhooks("Dev").await);

    assert_eq!(deleted, 3);
}

#[tokio::test]
async fn test_delete_all_webhooks_with_no_webhooks() {
    let server = MockServer::start().await;
    mount_webhook_listing(&server, &[]).await;

    let client = create_test_client(&server, 8);
    assert_eq!(assert_ok!(client.delete_all_webhooks("Dev").await), 0);
}

#[tokio::test]
async fn test_delete_all_webhooks_surfaces_the_failing_deletion() {
    let server = MockServer::start().await;
    mount_webhook_listing(&server, &[1, 2, 3]).await;
    mount_webhook_delete(
        &server,
        1,
        ResponseTemplate::new(204).set_delay(Duration::from_millis(200)),
    )
    .await;
    mount_webhook_delete(
        &server,
        2,
        ResponseTemplate::new(404).set_body_json(json!({"error": {"message": "Webhook 2 not found"}})),
    )
    .await;
    mount_webhook_delete(
        &server,
        3,
        ResponseTemplate::new(204).set_delay(Duration::from_millis(50)),
    )
    .await;

    let client = create_test_client(&server, 8);
    let error = assert_err!(client.delete_all_webhooks("Dev").await);

    assert_eq!(error.to_string(), "Webhook 2 not found");
}

#[tokio::test]
async fn test_delete_all_webhooks_returns_listing_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v2/room/Dev/webhook"))
        .respond_with(ResponseTemplate::new(403).set_body_json(json!({"error": {"message": "Forbidden"}})))
        .mount(&server)
        .await;

    let client = create_test_client(&server, 8);
    let error = assert_err!(client.delete_all_webhooks("Dev").await);

    assert_eq!(error.to_string(), "Forbidden");
}

// ============================================================================
// Transport Failures
// ============================================================================

#[tokio::test]
async fn test_connection_failure_maps_to_generic_transport_error() {
    let config = HipchatConfig::builder()
        .auth_token(AuthToken::new("client-token").unwrap())
        .api_root(ApiRoot::new("http://127.0.0.1:1/v2/").unwrap())
        .build()
        .unwrap();
    let client = HipchatClient::new(&config).unwrap();

    let error = assert_err!(client.rooms().await);

    assert!(matches!(error, HipchatError::Transport(_)));
    assert_eq!(error.to_string(), "HipChat API Error.");
}
