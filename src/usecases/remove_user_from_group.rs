//! Use case for removing a member from a group chat.

use thiserror::Error;

use crate::repository::{ChatRepository, RepositoryError, UserRepository};

/// A group chat never drops below this many participants through removal.
/// A pure count check: no chat-type special case, 1:1 chats simply never
/// reach this path through normal flows.
const MIN_GROUP_PARTICIPANTS: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoveUserFromGroupCommand {
    pub chat_id: String,
    pub username: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoveUserFromGroupOutput {
    pub chat_id: String,
    pub username: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RemoveUserFromGroupError {
    #[error("username must not be empty")]
    EmptyUsername,
    #[error("chat not found")]
    ChatNotFound,
    #[error("user not found: {0}")]
    UserNotFound(String),
    #[error("not a member")]
    NotAMember,
    #[error("minimum number of participants is {MIN_GROUP_PARTICIPANTS}")]
    MinimumParticipants,
    #[error("{0}")]
    Storage(String),
}

/// Removes a participant, refusing any removal that would leave the chat
/// with fewer than [`MIN_GROUP_PARTICIPANTS`] members. Membership is left
/// untouched on every failure path.
pub fn remove_user_from_group(
    chats: &mut dyn ChatRepository,
    users: &dyn UserRepository,
    command: RemoveUserFromGroupCommand,
) -> Result<RemoveUserFromGroupOutput, RemoveUserFromGroupError> {
    let username = command.username.trim();
    if username.is_empty() {
        return Err(RemoveUserFromGroupError::EmptyUsername);
    }

    let mut chat = chats
        .find_by_id(&command.chat_id)
        .map_err(storage_failure)?
        .ok_or(RemoveUserFromGroupError::ChatNotFound)?;

    let user = users
        .find_by_username(username)
        .map_err(storage_failure)?
        .ok_or_else(|| RemoveUserFromGroupError::UserNotFound(username.to_owned()))?;

    if !chat.is_participant(&user.id) {
        return Err(RemoveUserFromGroupError::NotAMember);
    }

    if chat.participant_count() <= MIN_GROUP_PARTICIPANTS {
        return Err(RemoveUserFromGroupError::MinimumParticipants);
    }

    chat.remove_participant(&user.id);
    chats.save(chat).map_err(storage_failure)?;

    Ok(RemoveUserFromGroupOutput {
        chat_id: command.chat_id,
        username: username.to_owned(),
    })
}

fn storage_failure(error: RepositoryError) -> RemoveUserFromGroupError {
    RemoveUserFromGroupError::Storage(error.to_string())
}
