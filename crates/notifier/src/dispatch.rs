//! LINE push dispatcher.
//!
//! One payload, one recipient, at most one network call. Log-only mode
//! replaces the send with a log record carrying the payload verbatim, which
//! is also returned in `DispatchResult::Logged` for inspection. A rejected
//! push (non-200) is an outcome, not an error: it is logged with status and
//! body and reported as `DispatchResult::Failed` so callers can finish the
//! run normally. No retries.

use herald_common::config::DebugConfig;
use herald_common::error::AppError;
use herald_common::types::{DeliveryTarget, DispatchResult, MessageBlock, PushRequest};

/// Messaging API push endpoint.
pub const LINE_PUSH_ENDPOINT: &str = "https://api.line.me/v2/bot/message/push";

/// Push client with a debug/production switch.
pub struct Dispatcher {
    http: reqwest::Client,
    endpoint: String,
    debug: DebugConfig,
}

impl Dispatcher {
    pub fn new(debug: DebugConfig) -> Self {
        Self::with_endpoint(LINE_PUSH_ENDPOINT, debug)
    }

    /// Dispatcher pointed at a custom endpoint; tests use a local mock
    /// server.
    pub fn with_endpoint(endpoint: impl Into<String>, debug: DebugConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: endpoint.into(),
            debug,
        }
    }

    /// Deliver one payload to one recipient.
    ///
    /// Exactly one log emission per invocation, and in production mode
    /// exactly one POST with `Authorization: Bearer <token>` and a
    /// `{to, messages}` JSON body. Errors are returned only when the request
    /// could not be performed at all (connection refused, DNS); HTTP-level
    /// rejection is reported as `Failed`.
    pub async fn send(
        &self,
        target: &DeliveryTarget,
        messages: &[MessageBlock],
    ) -> Result<DispatchResult, AppError> {
        let payload = serde_json::to_string(messages)
            .map_err(|e| AppError::Internal(format!("payload serialization failed: {e}")))?;

        if self.debug.log_instead_of_send {
            tracing::info!(payload = %payload, "log-only mode: payload logged instead of sent");
            return Ok(DispatchResult::Logged { payload });
        }

        let request = PushRequest {
            to: target.recipient_id.clone(),
            messages: messages.to_vec(),
        };
        let response = self
            .http
            .post(&self.endpoint)
            .bearer_auth(&target.token)
            .json(&request)
            .send()
            .await
            .map_err(|e| AppError::Transport(format!("push request failed: {e}")))?;

        let status = response.status().as_u16();
        if status == 200 {
            tracing::info!(recipient = %target.recipient_id, payload = %payload, "message delivered");
            Ok(DispatchResult::Sent)
        } else {
            let body = response.text().await.unwrap_or_default();
            tracing::error!(status, body = %body, "push rejected");
            Ok(DispatchResult::Failed { status, body })
        }
    }
}
