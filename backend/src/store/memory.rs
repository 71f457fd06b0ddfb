use crate::store::{Store, StoreError, StoreResult};
use async_trait::async_trait;
use chrono::Utc;
use shared::models::{Character, ChatSession, Message};
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use uuid::Uuid;

#[derive(Default)]
struct Inner {
    characters: Vec<Character>,
    sessions: Vec<ChatSession>,
}

/// Process-local store. Nothing survives a restart.
#[derive(Default)]
pub struct MemoryStore {
    inner: RwLock<Inner>,
}

impl MemoryStore {
    fn read(&self) -> StoreResult<RwLockReadGuard<'_, Inner>> {
        self.inner
            .read()
            .map_err(|_| StoreError::Internal("store lock poisoned".to_string()))
    }

    fn write(&self) -> StoreResult<RwLockWriteGuard<'_, Inner>> {
        self.inner
            .write()
            .map_err(|_| StoreError::Internal("store lock poisoned".to_string()))
    }
}

#[async_trait]
impl Store for MemoryStore {
    async fn get_characters(&self) -> StoreResult<Vec<Character>> {
        let inner = self.read()?;
        Ok(inner.characters.clone())
    }

    async fn get_character(&self, character_id: Uuid) -> StoreResult<Character> {
        let inner = self.read()?;
        inner
            .characters
            .iter()
            .find(|c| c.id == character_id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(format!("Character {} not found", character_id)))
    }

    async fn create_character(&self, character: Character) -> StoreResult<()> {
        let mut inner = self.write()?;
        inner.characters.push(character);
        Ok(())
    }

    async fn update_character(&self, character: Character) -> StoreResult<()> {
        let mut inner = self.write()?;
        match inner.characters.iter_mut().find(|c| c.id == character.id) {
            Some(existing) => {
                *existing = character;
                Ok(())
            }
            None => Err(StoreError::NotFound(format!(
                "Character {} not found",
                character.id
            ))),
        }
    }

    async fn delete_character(&self, character_id: Uuid) -> StoreResult<()> {
        let mut inner = self.write()?;
        let before = inner.characters.len();
        inner.characters.retain(|c| c.id != character_id);
        if inner.characters.len() == before {
            return Err(StoreError::NotFound(format!(
                "Character {} not found",
                character_id
            )));
        }
        Ok(())
    }

    async fn create_session(&self, session: ChatSession) -> StoreResult<()> {
        let mut inner = self.write()?;
        inner.sessions.push(session);
        Ok(())
    }

    async fn get_session(&self, session_id: Uuid) -> StoreResult<ChatSession> {
        let inner = self.read()?;
        inner
            .sessions
            .iter()
            .find(|s| s.id == session_id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(format!("Session {} not found", session_id)))
    }

    async fn append_message(&self, session_id: Uuid, message: Message) -> StoreResult<()> {
        let mut inner = self.write()?;
        match inner.sessions.iter_mut().find(|s| s.id == session_id) {
            Some(session) => {
                session.messages.push(message);
                session.updated_at = Utc::now();
                Ok(())
            }
            None => Err(StoreError::NotFound(format!(
                "Session {} not found",
                session_id
            ))),
        }
    }
}
