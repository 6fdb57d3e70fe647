//! Use case for sending a message to a chat.
//!
//! Builds the message with a fresh id and the current time, persists it,
//! and appends its id to the owning chat's send-order sequence.

use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::{
    domain::message::Message,
    infra::{clock::Clock, config::MessagingConfig, id::IdGenerator},
    repository::{ChatRepository, MessageRepository, RepositoryError},
};

const DEFAULT_MAX_CONTENT_CHARS: usize = 4_096;

/// Command to send a message to a specific chat.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SendMessageCommand {
    pub chat_id: String,
    pub sender_user_id: String,
    pub replied_message_id: Option<String>,
    pub content: String,
}

/// Content-length policy, normally sourced from
/// [`crate::infra::config::MessagingConfig`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MessagePolicy {
    pub max_content_chars: usize,
}

impl Default for MessagePolicy {
    fn default() -> Self {
        Self {
            max_content_chars: DEFAULT_MAX_CONTENT_CHARS,
        }
    }
}

impl From<&MessagingConfig> for MessagePolicy {
    fn from(config: &MessagingConfig) -> Self {
        Self {
            max_content_chars: config.max_content_chars,
        }
    }
}

/// The created message's rendered fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SendMessageOutput {
    pub message_id: String,
    pub sender_user_id: String,
    pub content: String,
    pub sent_at: DateTime<Utc>,
}

impl SendMessageOutput {
    /// Timestamp formatted for direct display.
    pub fn sent_at_display(&self) -> String {
        self.sent_at.format("%Y-%m-%d %H:%M:%S").to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SendMessageError {
    #[error("chat not found")]
    ChatNotFound,
    #[error("content cannot be empty")]
    EmptyContent,
    #[error("content exceeds {0} characters")]
    ContentTooLong(usize),
    #[error("{0}")]
    Storage(String),
}

/// Sends a message to the specified chat.
///
/// Content is trimmed before validation and storage; the trimmed text must
/// be non-empty and fit the policy bound. The message id lands at the end
/// of the chat's sequence, so back-to-back sends read back in FIFO order.
pub fn send_message(
    chats: &mut dyn ChatRepository,
    messages: &mut dyn MessageRepository,
    ids: &dyn IdGenerator,
    clock: &dyn Clock,
    policy: &MessagePolicy,
    command: SendMessageCommand,
) -> Result<SendMessageOutput, SendMessageError> {
    let content = command.content.trim();
    if content.is_empty() {
        return Err(SendMessageError::EmptyContent);
    }
    if content.chars().count() > policy.max_content_chars {
        return Err(SendMessageError::ContentTooLong(policy.max_content_chars));
    }

    let mut chat = chats
        .find_by_id(&command.chat_id)
        .map_err(storage_failure)?
        .ok_or(SendMessageError::ChatNotFound)?;

    let message = Message::new(
        ids.next_id(),
        command.chat_id.clone(),
        command.sender_user_id.clone(),
        command.replied_message_id.clone(),
        content,
        clock.now(),
    );

    let message = messages.save(message).map_err(storage_failure)?;
    chat.record_message(message.id.clone());
    chats.save(chat).map_err(storage_failure)?;

    Ok(SendMessageOutput {
        message_id: message.id,
        sender_user_id: message.sender_user_id,
        content: message.content,
        sent_at: message.sent_at,
    })
}

fn storage_failure(error: RepositoryError) -> SendMessageError {
    SendMessageError::Storage(error.to_string())
}
