use serde::{Deserialize, Serialize};

/// Wire types for the persona reply service. These are built per request and
/// never stored.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TraitScores {
    pub humor: u8,
    pub intelligence: u8,
    pub empathy: u8,
    pub playfulness: u8,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CharacterContext {
    pub name: String,
    /// Personality adjectives, e.g. ["playful", "caring"].
    pub personality: Vec<String>,
    pub traits: TraitScores,
    #[serde(rename = "conversationStyle")]
    pub conversation_style: String,
    pub interests: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChatTurn {
    /// "user" or "assistant"
    pub role: String,
    pub content: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChatRequest {
    pub message: String,
    pub character_id: String,
    pub character_context: CharacterContext,
    #[serde(default)]
    pub conversation_history: Vec<ChatTurn>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChatResponse {
    pub response: String,
}
