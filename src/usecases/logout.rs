//! Use case for logging out: the storage context is reset wholesale.
//! Individual chats are never deleted; logout clears the repositories.

use thiserror::Error;

use crate::repository::{RepositoryError, StorageContext};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogoutOutcome {
    pub chats_removed: usize,
    pub messages_removed: usize,
    pub users_removed: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LogoutError {
    #[error("{0}")]
    Storage(String),
}

pub fn logout_and_reset(storage: &mut StorageContext) -> Result<LogoutOutcome, LogoutError> {
    let reset = storage
        .reset()
        .map_err(|error: RepositoryError| LogoutError::Storage(error.to_string()))?;

    tracing::info!(
        chats_removed = reset.chats_removed,
        messages_removed = reset.messages_removed,
        users_removed = reset.users_removed,
        "storage context reset"
    );

    Ok(LogoutOutcome {
        chats_removed: reset.chats_removed,
        messages_removed: reset.messages_removed,
        users_removed: reset.users_removed,
    })
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::*;
    use crate::{
        domain::{chat::Chat, message::Message, user::User},
        repository::{ChatRepository, MessageRepository, UserRepository},
    };

    #[test]
    fn logout_clears_all_repositories_and_reports_counts() {
        let mut storage = StorageContext::new();
        storage
            .chats
            .save(Chat::new("c1", "book club"))
            .expect("seed chat should save");
        storage
            .messages
            .save(Message::new(
                "m1",
                "c1",
                "alice",
                None,
                "hello",
                Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap(),
            ))
            .expect("seed message should save");
        storage
            .users
            .save(User::new("u1", "alice", "secret"))
            .expect("seed user should save");

        let outcome = logout_and_reset(&mut storage).expect("logout should succeed");

        assert_eq!(
            outcome,
            LogoutOutcome {
                chats_removed: 1,
                messages_removed: 1,
                users_removed: 1,
            }
        );
        assert!(storage
            .chats
            .find_all()
            .expect("find_all should succeed")
            .is_empty());
        assert_eq!(
            storage.messages.find_by_id("m1").expect("lookup should succeed"),
            None
        );
    }

    #[test]
    fn logout_is_idempotent_on_empty_storage() {
        let mut storage = StorageContext::new();

        let first = logout_and_reset(&mut storage).expect("logout should succeed");
        let second = logout_and_reset(&mut storage).expect("logout should succeed");

        assert_eq!(first, second);
        assert_eq!(second.chats_removed, 0);
    }
}
