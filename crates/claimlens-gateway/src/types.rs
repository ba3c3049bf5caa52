//! Wire types for the remote agent run protocol

use crate::GatewayConfig;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One part of a message to the agent
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessagePart {
    pub text: String,
}

/// A message in the agent conversation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewMessage {
    pub role: String,
    pub parts: Vec<MessagePart>,
}

impl NewMessage {
    /// A single-part user message
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            parts: vec![MessagePart { text: text.into() }],
        }
    }
}

/// Body of a `POST /run` request
#[derive(Debug, Clone, Serialize)]
pub struct RunRequest {
    pub app_name: String,
    pub user_id: String,
    pub session_id: String,
    pub new_message: NewMessage,
}

impl RunRequest {
    /// Run request carrying a page url as the user message
    pub fn page_message(config: &GatewayConfig, session_id: &str, url: &str) -> Self {
        Self {
            app_name: config.app_name.clone(),
            user_id: config.user_id.clone(),
            session_id: session_id.to_string(),
            new_message: NewMessage::user(url),
        }
    }
}

/// One event from the run response.
///
/// The agent emits an event per pipeline step; only the final event's
/// `content` matters here, so everything else is carried opaquely and
/// a missing content deserializes to null.
#[derive(Debug, Clone, Deserialize)]
pub struct AgentEvent {
    #[serde(default)]
    pub content: Value,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_run_request_wire_shape() {
        let config = GatewayConfig::default();
        let request = RunRequest::page_message(&config, "ext-123-abc", "https://example.com");

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(
            value,
            json!({
                "app_name": "master_agent",
                "user_id": "user_123",
                "session_id": "ext-123-abc",
                "new_message": {
                    "role": "user",
                    "parts": [{"text": "https://example.com"}],
                },
            })
        );
    }

    #[test]
    fn test_event_without_content_is_null() {
        let event: AgentEvent = serde_json::from_value(json!({"author": "retrieval"})).unwrap();
        assert!(event.content.is_null());
    }

    #[test]
    fn test_event_list_parsing() {
        let events: Vec<AgentEvent> = serde_json::from_value(json!([
            {"content": {"claims": []}},
            {"content": {"claims": [{"text": "x", "confidence": 0.5, "bias_score": 0.5}]}},
        ]))
        .unwrap();
        assert_eq!(events.len(), 2);
    }
}
