use serde::{Deserialize, Serialize};

/// One block of a LINE push payload.
///
/// Serializes to the exact Messaging API wire shape:
/// `{"type":"text",...}` or `{"type":"template","altText":...,"template":...}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum MessageBlock {
    Text {
        text: String,
    },
    Template {
        #[serde(rename = "altText")]
        alt_text: String,
        template: ButtonsTemplate,
    },
}

impl MessageBlock {
    /// Plain text block.
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text { text: text.into() }
    }

    /// Buttons template block; the body text doubles as the alt text shown
    /// on clients that cannot render templates.
    pub fn buttons(text: impl Into<String>, actions: Vec<UriAction>) -> Self {
        let text = text.into();
        Self::Template {
            alt_text: text.clone(),
            template: ButtonsTemplate::new(text, actions),
        }
    }
}

/// A `buttons` template body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ButtonsTemplate {
    #[serde(rename = "type")]
    pub template_type: String,
    pub text: String,
    pub actions: Vec<UriAction>,
}

impl ButtonsTemplate {
    pub fn new(text: impl Into<String>, actions: Vec<UriAction>) -> Self {
        Self {
            template_type: "buttons".to_string(),
            text: text.into(),
            actions,
        }
    }
}

/// A `uri` template action: a labeled button opening an absolute URI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UriAction {
    #[serde(rename = "type")]
    pub action_type: String,
    pub label: String,
    pub uri: String,
}

impl UriAction {
    pub fn new(label: impl Into<String>, uri: impl Into<String>) -> Self {
        Self {
            action_type: "uri".to_string(),
            label: label.into(),
            uri: uri.into(),
        }
    }
}

/// Body of a Messaging API push request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PushRequest {
    pub to: String,
    pub messages: Vec<MessageBlock>,
}

/// Where and as whom a payload is delivered; resolved once per run.
#[derive(Debug, Clone)]
pub struct DeliveryTarget {
    pub recipient_id: String,
    pub token: String,
}

/// Outcome of a single dispatch.
///
/// `Logged` carries the serialized payload verbatim so callers (and tests)
/// can inspect what would have been sent without a network dependency.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchResult {
    Logged { payload: String },
    Sent,
    Failed { status: u16, body: String },
}
