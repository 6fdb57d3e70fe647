//! Use case for keyword search over one chat's history.
//!
//! Ordering happens here, not in the repository: implementations only
//! promise insertion order, so the interactor sorts by timestamp itself
//! and repository adapters stay trivial.

use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::repository::{
    ChatRepository, MessageRepository, RepositoryError, UserRepository,
};

/// Display name used when a hit's sender cannot be resolved.
const UNKNOWN_SENDER: &str = "Unknown";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchChatHistoryQuery {
    pub chat_id: String,
    pub keyword: String,
}

/// One matching message, resolved for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageHit {
    pub message_id: String,
    pub sender_username: String,
    pub content: String,
    pub sent_at: DateTime<Utc>,
}

/// A search that ran to completion. An empty match set is its own outcome,
/// not a failure, so presentation can render an empty state instead of an
/// error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// Matches in ascending timestamp order; timestamp ties keep the
    /// repository's insertion order.
    Matches(Vec<MessageHit>),
    NoMatches { chat_id: String, keyword: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchChatHistoryError {
    #[error("chat not found")]
    ChatNotFound,
    #[error("keyword must not be empty")]
    EmptyKeyword,
    #[error("{0}")]
    Storage(String),
}

/// Searches a chat's messages for a case-insensitive substring match.
pub fn search_chat_history(
    chats: &dyn ChatRepository,
    messages: &dyn MessageRepository,
    users: &dyn UserRepository,
    query: SearchChatHistoryQuery,
) -> Result<SearchOutcome, SearchChatHistoryError> {
    let keyword = query.keyword.trim();
    if keyword.is_empty() {
        return Err(SearchChatHistoryError::EmptyKeyword);
    }

    chats
        .find_by_id(&query.chat_id)
        .map_err(storage_failure)?
        .ok_or(SearchChatHistoryError::ChatNotFound)?;

    let mut history = messages
        .find_by_chat_id(&query.chat_id)
        .map_err(storage_failure)?;
    // Stable sort: equal timestamps keep repository order.
    history.sort_by_key(|message| message.sent_at);

    let mut hits = Vec::new();
    for message in history {
        if !message.content_matches(keyword) {
            continue;
        }

        let sender_username = users
            .find_by_id(&message.sender_user_id)
            .map_err(storage_failure)?
            .map(|user| user.username)
            .unwrap_or_else(|| UNKNOWN_SENDER.to_owned());

        hits.push(MessageHit {
            message_id: message.id,
            sender_username,
            content: message.content,
            sent_at: message.sent_at,
        });
    }

    if hits.is_empty() {
        return Ok(SearchOutcome::NoMatches {
            chat_id: query.chat_id,
            keyword: keyword.to_owned(),
        });
    }

    Ok(SearchOutcome::Matches(hits))
}

fn storage_failure(error: RepositoryError) -> SearchChatHistoryError {
    SearchChatHistoryError::Storage(error.to_string())
}
