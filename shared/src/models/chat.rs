//! Concierge chat model

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// One turn of the conversation
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChatMessage {
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
}

/// Chat request body
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChatRequest {
    /// Anything other than an array reads as no messages
    #[serde(default, deserialize_with = "messages_or_empty")]
    pub messages: Vec<ChatMessage>,
}

fn messages_or_empty<'de, D>(deserializer: D) -> Result<Vec<ChatMessage>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Array(items) => items
            .into_iter()
            .map(|item| serde_json::from_value(item).map_err(serde::de::Error::custom))
            .collect(),
        _ => Ok(Vec::new()),
    }
}

impl ChatRequest {
    /// Content of the most recent `user` turn.
    pub fn last_user_message(&self) -> Option<&str> {
        self.messages
            .iter()
            .rev()
            .find(|m| m.role.as_deref() == Some("user"))
            .and_then(|m| m.content.as_deref())
    }
}

/// Chat reply body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatReply {
    pub reply: String,
}
