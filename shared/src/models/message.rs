use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub const ROLE_USER: &str = "user";
pub const ROLE_ASSISTANT: &str = "assistant";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub id: Uuid,
    pub character_id: Uuid,
    pub content: String,
    /// "user" or "assistant"
    pub role: String,
    pub timestamp: DateTime<Utc>,
}

impl Message {
    pub fn new(character_id: Uuid, role: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id: Uuid::now_v7(),
            character_id,
            content: content.into(),
            role: role.into(),
            timestamp: Utc::now(),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct SendMessageRequest {
    pub content: String,
    #[serde(default = "default_role")]
    pub role: String,
}

fn default_role() -> String {
    ROLE_USER.to_string()
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct StreamRequest {
    pub content: String,
}
