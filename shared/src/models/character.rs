use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Character {
    pub id: Uuid,
    pub name: String,
    pub personality: String,
    pub description: String,
    #[serde(default)]
    pub avatar: Option<String>,
    pub traits: Vec<String>,
    pub greeting: String,
    pub background: String,
    pub likes: Vec<String>,
    pub dislikes: Vec<String>,
    pub conversation_style: String,
    #[serde(default = "default_active")]
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Character {
    pub fn from_request(req: CreateCharacterRequest) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name: req.name,
            personality: req.personality,
            description: req.description,
            avatar: req.avatar,
            traits: req.traits,
            greeting: req.greeting,
            background: req.background,
            likes: req.likes,
            dislikes: req.dislikes,
            conversation_style: req.conversation_style,
            is_active: req.is_active,
            created_at: now,
            updated_at: now,
        }
    }

    /// Apply an update payload in place, keeping id and creation time.
    pub fn apply(&mut self, req: CreateCharacterRequest) {
        self.name = req.name;
        self.personality = req.personality;
        self.description = req.description;
        self.avatar = req.avatar;
        self.traits = req.traits;
        self.greeting = req.greeting;
        self.background = req.background;
        self.likes = req.likes;
        self.dislikes = req.dislikes;
        self.conversation_style = req.conversation_style;
        self.is_active = req.is_active;
        self.updated_at = Utc::now();
    }
}

#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct CreateCharacterRequest {
    pub name: String,
    pub personality: String,
    pub description: String,
    #[serde(default)]
    pub avatar: Option<String>,
    #[serde(default)]
    pub traits: Vec<String>,
    pub greeting: String,
    pub background: String,
    #[serde(default)]
    pub likes: Vec<String>,
    #[serde(default)]
    pub dislikes: Vec<String>,
    pub conversation_style: String,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

fn default_active() -> bool {
    true
}
