//! Voice platform request and response envelopes

use crate::state_machine::{RenderedReply, SessionState};
use serde::{Deserialize, Serialize};
use serde_json::Value;

// ============================================================================
// Requests
// ============================================================================

/// Incoming skill request
#[derive(Debug, Deserialize)]
pub struct SkillRequest {
    #[serde(default)]
    pub session: Option<Session>,
    pub request: RequestBody,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    #[serde(default)]
    pub new: bool,
    #[serde(default)]
    pub session_id: Option<String>,
    #[serde(default)]
    pub application: Option<Application>,
    #[serde(default)]
    pub attributes: Option<Value>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Application {
    pub application_id: String,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "type")]
pub enum RequestBody {
    LaunchRequest,
    IntentRequest { intent: Intent },
    SessionEndedRequest {
        #[serde(default)]
        reason: Option<String>,
    },
    #[serde(other)]
    Unsupported,
}

#[derive(Debug, Deserialize)]
pub struct Intent {
    pub name: String,
}

impl Session {
    pub fn application_id(&self) -> Option<&str> {
        self.application
            .as_ref()
            .map(|app| app.application_id.as_str())
    }

    /// Session state carried in the attributes, if this is a continuing
    /// session that has one
    pub fn state(&self) -> Option<SessionState> {
        if self.new {
            return None;
        }
        self.attributes
            .clone()
            .and_then(|attributes| serde_json::from_value(attributes).ok())
    }
}

// ============================================================================
// Responses
// ============================================================================

/// Outgoing skill response
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillResponse {
    pub version: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_attributes: Option<SessionState>,
    pub response: ResponseBody,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseBody {
    pub output_speech: OutputSpeech,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card: Option<CardBody>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reprompt: Option<Reprompt>,
    pub should_end_session: bool,
}

#[derive(Debug, Serialize)]
pub struct OutputSpeech {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub text: String,
}

impl OutputSpeech {
    pub fn plain_text(text: impl Into<String>) -> Self {
        Self {
            kind: "PlainText",
            text: text.into(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Reprompt {
    pub output_speech: OutputSpeech,
}

#[derive(Debug, Serialize)]
pub struct CardBody {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub title: String,
    pub content: String,
}

impl SkillResponse {
    pub fn new(reply: RenderedReply, state: SessionState) -> Self {
        Self {
            version: "1.0",
            session_attributes: (!reply.is_terminal).then_some(state),
            response: ResponseBody {
                output_speech: OutputSpeech::plain_text(reply.prompt),
                card: reply.card.map(|card| CardBody {
                    kind: "Simple",
                    title: card.title,
                    content: card.content,
                }),
                reprompt: reply.reprompt.map(|text| Reprompt {
                    output_speech: OutputSpeech::plain_text(text),
                }),
                should_end_session: reply.is_terminal,
            },
        }
    }
}

/// Error response
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}
