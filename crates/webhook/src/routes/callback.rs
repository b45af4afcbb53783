//! Receive-only callback endpoint for discovering channel identifiers.
//!
//! Point the LINE webhook at this route, post a message in the target group,
//! and read `events[].source.groupId` out of the logs. No schema validation:
//! group, room and user events differ in shape, and the goal is to see the
//! raw event.

use axum::routing::post;
use axum::{Json, Router};

pub fn router() -> Router {
    Router::new().route("/callback", post(callback))
}

async fn callback(Json(event): Json<serde_json::Value>) -> &'static str {
    tracing::info!(event = %event, "webhook event received");
    "OK"
}
