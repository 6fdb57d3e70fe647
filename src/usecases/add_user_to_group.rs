//! Use case for adding a member to a group chat.

use thiserror::Error;

use crate::repository::{ChatRepository, RepositoryError, UserRepository};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddUserToGroupCommand {
    pub chat_id: String,
    pub username: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddUserToGroupOutput {
    pub chat_id: String,
    pub username: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AddUserToGroupError {
    #[error("username must not be empty")]
    EmptyUsername,
    #[error("chat not found")]
    ChatNotFound,
    #[error("user not found: {0}")]
    UserNotFound(String),
    #[error("already a member")]
    AlreadyMember,
    #[error("{0}")]
    Storage(String),
}

/// Resolves the username and appends the user to the chat's participant
/// sequence. Membership order is append-only; the single write goes
/// through [`ChatRepository::save`].
pub fn add_user_to_group(
    chats: &mut dyn ChatRepository,
    users: &dyn UserRepository,
    command: AddUserToGroupCommand,
) -> Result<AddUserToGroupOutput, AddUserToGroupError> {
    let username = command.username.trim();
    if username.is_empty() {
        return Err(AddUserToGroupError::EmptyUsername);
    }

    let mut chat = chats
        .find_by_id(&command.chat_id)
        .map_err(storage_failure)?
        .ok_or(AddUserToGroupError::ChatNotFound)?;

    let user = users
        .find_by_username(username)
        .map_err(storage_failure)?
        .ok_or_else(|| AddUserToGroupError::UserNotFound(username.to_owned()))?;

    if chat.is_participant(&user.id) {
        return Err(AddUserToGroupError::AlreadyMember);
    }

    chat.add_participant(user.id);
    chats.save(chat).map_err(storage_failure)?;

    Ok(AddUserToGroupOutput {
        chat_id: command.chat_id,
        username: username.to_owned(),
    })
}

fn storage_failure(error: RepositoryError) -> AddUserToGroupError {
    AddUserToGroupError::Storage(error.to_string())
}
