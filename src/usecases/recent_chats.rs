//! Use case for listing the chats a user participates in.

use std::collections::HashMap;

use thiserror::Error;

use crate::repository::{ChatRepository, RepositoryError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecentChatsQuery {
    pub user_id: String,
}

/// The user's chats, keyed for presentation as a recents list.
///
/// `chat_names` keeps first-occurrence order without duplicates.
/// `chats_by_name` maps display name to chat id; when distinct chats share
/// a display name, chats are visited in repository `find_all` order and the
/// later chat wins the mapping entry (deterministic last-write-wins).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RecentChatsOutput {
    pub chat_names: Vec<String>,
    pub chats_by_name: HashMap<String, String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecentChatsError {
    #[error("{0}")]
    Storage(String),
}

/// Collects the display names of every chat the user participates in.
/// A user with no chats gets an empty output, not a failure.
pub fn recent_chats(
    chats: &dyn ChatRepository,
    query: RecentChatsQuery,
) -> Result<RecentChatsOutput, RecentChatsError> {
    let mut output = RecentChatsOutput::default();

    for chat in chats
        .find_all()
        .map_err(|error: RepositoryError| RecentChatsError::Storage(error.to_string()))?
    {
        if !chat.is_participant(&query.user_id) {
            continue;
        }

        if !output.chat_names.contains(&chat.group_name) {
            output.chat_names.push(chat.group_name.clone());
        }
        output.chats_by_name.insert(chat.group_name, chat.id);
    }

    Ok(output)
}
