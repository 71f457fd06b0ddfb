use async_trait::async_trait;
use shared::models::{Character, ChatSession, Message};
use std::sync::Arc;
use thiserror::Error;
use uuid::Uuid;

pub mod memory;

pub use memory::MemoryStore;

pub type StoreResult<T> = Result<T, StoreError>;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Entity not found: {0}")]
    NotFound(String),
    #[error("Internal error: {0}")]
    Internal(String),
}

#[async_trait]
pub trait Store: Send + Sync {
    async fn get_characters(&self) -> StoreResult<Vec<Character>>;
    async fn get_character(&self, character_id: Uuid) -> StoreResult<Character>;
    async fn create_character(&self, character: Character) -> StoreResult<()>;
    /// Replaces the stored character with the same id.
    async fn update_character(&self, character: Character) -> StoreResult<()>;
    async fn delete_character(&self, character_id: Uuid) -> StoreResult<()>;
    async fn create_session(&self, session: ChatSession) -> StoreResult<()>;
    async fn get_session(&self, session_id: Uuid) -> StoreResult<ChatSession>;
    async fn append_message(&self, session_id: Uuid, message: Message) -> StoreResult<()>;
}

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn Store>,
}
