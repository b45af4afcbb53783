//! Integration tests for the LINE push dispatcher.
//!
//! The Messaging API is mocked with `mockito`; no real network access.

use mockito::{Matcher, Server, ServerGuard};

use herald_common::config::DebugConfig;
use herald_common::types::{DeliveryTarget, DispatchResult, MessageBlock, UriAction};
use herald_notifier::dispatch::Dispatcher;

// ============================================================
// Helpers
// ============================================================

fn target() -> DeliveryTarget {
    DeliveryTarget {
        recipient_id: "dummy_channel_id".to_string(),
        token: "dummy_token".to_string(),
    }
}

fn text_payload() -> Vec<MessageBlock> {
    vec![MessageBlock::text("debug test message")]
}

fn push_endpoint(server: &ServerGuard) -> String {
    format!("{}/v2/bot/message/push", server.url())
}

// ============================================================
// Log-only mode
// ============================================================

#[tokio::test]
async fn test_log_only_mode_skips_network_and_records_payload() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/v2/bot/message/push")
        .expect(0)
        .create_async()
        .await;

    let debug = DebugConfig {
        log_instead_of_send: true,
        ..Default::default()
    };
    let dispatcher = Dispatcher::with_endpoint(push_endpoint(&server), debug);

    let messages = text_payload();
    let result = dispatcher.send(&target(), &messages).await.unwrap();

    match result {
        DispatchResult::Logged { payload } => {
            assert_eq!(payload, serde_json::to_string(&messages).unwrap());
            assert!(payload.contains("debug test message"));
        }
        other => panic!("expected Logged, got {other:?}"),
    }
    mock.assert_async().await;
}

// ============================================================
// Production mode
// ============================================================

#[tokio::test]
async fn test_send_posts_bearer_token_and_returns_sent_on_200() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/v2/bot/message/push")
        .match_header("authorization", "Bearer dummy_token")
        .match_header("content-type", "application/json")
        .match_body(Matcher::PartialJson(serde_json::json!({
            "to": "dummy_channel_id",
            "messages": [{"type": "text", "text": "debug test message"}]
        })))
        .with_status(200)
        .with_body("{}")
        .expect(1)
        .create_async()
        .await;

    let dispatcher = Dispatcher::with_endpoint(push_endpoint(&server), DebugConfig::default());

    let result = dispatcher.send(&target(), &text_payload()).await.unwrap();
    assert_eq!(result, DispatchResult::Sent);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_template_payload_is_sent_in_wire_shape() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/v2/bot/message/push")
        .match_body(Matcher::PartialJson(serde_json::json!({
            "messages": [{
                "type": "template",
                "altText": "reminder",
                "template": {
                    "type": "buttons",
                    "text": "reminder",
                    "actions": [
                        {"type": "uri", "label": "open", "uri": "https://example.com/doc.pdf"}
                    ]
                }
            }]
        })))
        .with_status(200)
        .with_body("{}")
        .expect(1)
        .create_async()
        .await;

    let dispatcher = Dispatcher::with_endpoint(push_endpoint(&server), DebugConfig::default());
    let messages = vec![MessageBlock::buttons(
        "reminder",
        vec![UriAction::new("open", "https://example.com/doc.pdf")],
    )];

    let result = dispatcher.send(&target(), &messages).await.unwrap();
    assert_eq!(result, DispatchResult::Sent);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_rejected_send_reports_status_and_body_without_retry() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/v2/bot/message/push")
        .with_status(400)
        .with_body("Bad Request")
        .expect(1)
        .create_async()
        .await;

    let dispatcher = Dispatcher::with_endpoint(push_endpoint(&server), DebugConfig::default());

    let result = dispatcher.send(&target(), &text_payload()).await.unwrap();
    match result {
        DispatchResult::Failed { status, body } => {
            assert_eq!(status, 400);
            assert_eq!(body, "Bad Request");
        }
        other => panic!("expected Failed, got {other:?}"),
    }
    mock.assert_async().await;
}

#[tokio::test]
async fn test_unreachable_endpoint_is_a_transport_error() {
    // Bind-then-drop leaves a port nothing is listening on.
    let server = Server::new_async().await;
    let endpoint = push_endpoint(&server);
    drop(server);

    let dispatcher = Dispatcher::with_endpoint(endpoint, DebugConfig::default());

    let err = dispatcher.send(&target(), &text_payload()).await.unwrap_err();
    assert!(matches!(
        err,
        herald_common::error::AppError::Transport(_)
    ));
}
