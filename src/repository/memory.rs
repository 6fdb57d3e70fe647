use std::collections::HashMap;

use crate::{
    domain::{
        chat::Chat,
        message::Message,
        user::{normalize_username, User},
    },
    repository::contracts::{
        ChatRepository, MessageRepository, RepositoryError, UserRepository,
    },
};

/// In-memory chat store. Entities keep their insertion position across
/// saves, so `find_all` order is stable for the lifetime of the store.
#[derive(Debug, Default)]
pub struct MemoryChatRepository {
    chats: Vec<Chat>,
}

impl MemoryChatRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ChatRepository for MemoryChatRepository {
    fn save(&mut self, chat: Chat) -> Result<Chat, RepositoryError> {
        match self.chats.iter_mut().find(|existing| existing.id == chat.id) {
            Some(existing) => *existing = chat.clone(),
            None => self.chats.push(chat.clone()),
        }
        Ok(chat)
    }

    fn find_by_id(&self, id: &str) -> Result<Option<Chat>, RepositoryError> {
        Ok(self.chats.iter().find(|chat| chat.id == id).cloned())
    }

    fn find_all(&self) -> Result<Vec<Chat>, RepositoryError> {
        Ok(self.chats.clone())
    }

    fn clear(&mut self) -> Result<usize, RepositoryError> {
        let removed = self.chats.len();
        self.chats.clear();
        Ok(removed)
    }
}

/// In-memory message store. `find_by_chat_id` returns messages in save
/// order, which for this implementation equals send order.
#[derive(Debug, Default)]
pub struct MemoryMessageRepository {
    messages: Vec<Message>,
}

impl MemoryMessageRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl MessageRepository for MemoryMessageRepository {
    fn find_by_id(&self, id: &str) -> Result<Option<Message>, RepositoryError> {
        Ok(self.messages.iter().find(|message| message.id == id).cloned())
    }

    fn save(&mut self, message: Message) -> Result<Message, RepositoryError> {
        match self
            .messages
            .iter_mut()
            .find(|existing| existing.id == message.id)
        {
            Some(existing) => *existing = message.clone(),
            None => self.messages.push(message.clone()),
        }
        Ok(message)
    }

    fn find_by_chat_id(&self, chat_id: &str) -> Result<Vec<Message>, RepositoryError> {
        Ok(self
            .messages
            .iter()
            .filter(|message| message.chat_id == chat_id)
            .cloned()
            .collect())
    }

    fn delete_by_id(&mut self, id: &str) -> Result<(), RepositoryError> {
        self.messages.retain(|message| message.id != id);
        Ok(())
    }

    fn clear(&mut self) -> Result<usize, RepositoryError> {
        let removed = self.messages.len();
        self.messages.clear();
        Ok(removed)
    }
}

/// In-memory user store keeping a canonical lowercase username index
/// alongside the primary list, so case-insensitive lookup follows one
/// normalization rule instead of being re-derived per call site.
#[derive(Debug, Default)]
pub struct MemoryUserRepository {
    users: Vec<User>,
    username_index: HashMap<String, String>,
}

impl MemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl UserRepository for MemoryUserRepository {
    fn find_by_username(&self, username: &str) -> Result<Option<User>, RepositoryError> {
        let Some(user_id) = self.username_index.get(&normalize_username(username)) else {
            return Ok(None);
        };
        self.find_by_id(user_id)
    }

    fn find_by_id(&self, id: &str) -> Result<Option<User>, RepositoryError> {
        Ok(self.users.iter().find(|user| user.id == id).cloned())
    }

    fn save(&mut self, user: User) -> Result<User, RepositoryError> {
        match self.users.iter_mut().find(|existing| existing.id == user.id) {
            Some(existing) => {
                self.username_index
                    .remove(&normalize_username(&existing.username));
                *existing = user.clone();
            }
            None => self.users.push(user.clone()),
        }
        self.username_index
            .insert(normalize_username(&user.username), user.id.clone());
        Ok(user)
    }

    fn clear(&mut self) -> Result<usize, RepositoryError> {
        let removed = self.users.len();
        self.users.clear();
        self.username_index.clear();
        Ok(removed)
    }
}

/// Counts reported by a full storage reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StorageReset {
    pub chats_removed: usize,
    pub messages_removed: usize,
    pub users_removed: usize,
}

/// The process's storage, owned by the composition root and injected into
/// interactors. Constructed at startup, reset explicitly at logout; no
/// global singleton state anywhere in the crate.
#[derive(Debug, Default)]
pub struct StorageContext {
    pub chats: MemoryChatRepository,
    pub messages: MemoryMessageRepository,
    pub users: MemoryUserRepository,
}

impl StorageContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears every repository and reports what was dropped.
    pub fn reset(&mut self) -> Result<StorageReset, RepositoryError> {
        Ok(StorageReset {
            chats_removed: self.chats.clear()?,
            messages_removed: self.messages.clear()?,
            users_removed: self.users.clear()?,
        })
    }
}
