//! Use case for clearing a user's reaction from a message.

use std::collections::BTreeMap;

use thiserror::Error;

use crate::repository::{MessageRepository, RepositoryError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoveReactionCommand {
    pub message_id: String,
    pub user_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoveReactionOutput {
    pub message_id: String,
    pub reactions: BTreeMap<String, String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RemoveReactionError {
    #[error("message not found")]
    MessageNotFound,
    #[error("{0}")]
    Storage(String),
}

/// Removes the user's reaction if present. Removing an absent reaction is
/// a success no-op; either way the resulting mapping is returned.
pub fn remove_reaction(
    messages: &mut dyn MessageRepository,
    command: RemoveReactionCommand,
) -> Result<RemoveReactionOutput, RemoveReactionError> {
    let mut message = messages
        .find_by_id(&command.message_id)
        .map_err(storage_failure)?
        .ok_or(RemoveReactionError::MessageNotFound)?;

    message.remove_reaction(&command.user_id);
    let message = messages.save(message).map_err(storage_failure)?;

    Ok(RemoveReactionOutput {
        message_id: message.id,
        reactions: message.reactions,
    })
}

fn storage_failure(error: RepositoryError) -> RemoveReactionError {
    RemoveReactionError::Storage(error.to_string())
}
