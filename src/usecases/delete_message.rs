//! Use case for deleting a message. Only the sender may delete.

use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::{
    infra::clock::Clock,
    repository::{MessageRepository, RepositoryError},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteMessageCommand {
    pub message_id: String,
    pub current_user_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteMessageOutput {
    pub message_id: String,
    /// Wall-clock time of the deletion, not the original send time.
    pub deleted_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DeleteMessageError {
    #[error("message not found")]
    MessageNotFound,
    #[error("permission denied")]
    PermissionDenied,
    #[error("{0}")]
    Storage(String),
}

/// Hard-deletes a message after checking the caller is its sender.
///
/// The owning chat's message-id sequence is left untouched: it is the
/// append-only send-order record, and every read path derives a chat's
/// messages from [`MessageRepository::find_by_chat_id`] instead.
pub fn delete_message(
    messages: &mut dyn MessageRepository,
    clock: &dyn Clock,
    command: DeleteMessageCommand,
) -> Result<DeleteMessageOutput, DeleteMessageError> {
    let message = messages
        .find_by_id(&command.message_id)
        .map_err(storage_failure)?
        .ok_or(DeleteMessageError::MessageNotFound)?;

    if message.sender_user_id != command.current_user_id {
        return Err(DeleteMessageError::PermissionDenied);
    }

    messages
        .delete_by_id(&command.message_id)
        .map_err(storage_failure)?;

    Ok(DeleteMessageOutput {
        message_id: command.message_id,
        deleted_at: clock.now(),
    })
}

fn storage_failure(error: RepositoryError) -> DeleteMessageError {
    DeleteMessageError::Storage(error.to_string())
}
