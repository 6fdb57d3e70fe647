//! Repository layer: storage-agnostic contracts over the entities, plus the
//! in-memory reference implementation used as the test double.

mod contracts;
mod memory;

pub use contracts::{ChatRepository, MessageRepository, RepositoryError, UserRepository};
pub use memory::{
    MemoryChatRepository, MemoryMessageRepository, MemoryUserRepository, StorageContext,
    StorageReset,
};
