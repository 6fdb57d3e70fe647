use thiserror::Error;

use crate::domain::{chat::Chat, message::Message, user::User};

/// Failure reported by a storage backend.
///
/// The in-memory implementations never produce one; remote adapters
/// translate their transport/store faults into it. Interactors surface the
/// message text as a generic storage failure instead of letting it cross
/// the boundary as a raw fault.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RepositoryError {
    #[error("storage backend error: {0}")]
    Backend(String),
}

/// Read/write contract over chats.
///
/// No ordering guarantee beyond each implementation's own insertion order;
/// interactors that need a particular order sort for themselves.
pub trait ChatRepository {
    fn save(&mut self, chat: Chat) -> Result<Chat, RepositoryError>;
    fn find_by_id(&self, id: &str) -> Result<Option<Chat>, RepositoryError>;
    fn find_all(&self) -> Result<Vec<Chat>, RepositoryError>;
    /// Removes every chat, returning how many were dropped.
    fn clear(&mut self) -> Result<usize, RepositoryError>;
}

/// Read/write contract over messages.
pub trait MessageRepository {
    fn find_by_id(&self, id: &str) -> Result<Option<Message>, RepositoryError>;
    fn save(&mut self, message: Message) -> Result<Message, RepositoryError>;
    /// Every message of one chat, in the implementation's insertion order.
    fn find_by_chat_id(&self, chat_id: &str) -> Result<Vec<Message>, RepositoryError>;
    /// Hard delete. Deleting an absent id is not an error.
    fn delete_by_id(&mut self, id: &str) -> Result<(), RepositoryError>;
    fn clear(&mut self) -> Result<usize, RepositoryError>;
}

/// Read/write contract over users.
pub trait UserRepository {
    /// Lookup by login name, case-insensitive
    /// (see [`crate::domain::user::normalize_username`]).
    fn find_by_username(&self, username: &str) -> Result<Option<User>, RepositoryError>;
    fn find_by_id(&self, id: &str) -> Result<Option<User>, RepositoryError>;
    fn save(&mut self, user: User) -> Result<User, RepositoryError>;
    fn clear(&mut self) -> Result<usize, RepositoryError>;
}
