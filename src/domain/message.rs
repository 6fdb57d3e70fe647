use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single authored content unit belonging to one chat.
///
/// Messages cross-reference their chat and an optional replied-to message
/// by id only; the owning `Chat` never holds the message value itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub id: String,
    pub chat_id: String,
    pub sender_user_id: String,
    pub replied_message_id: Option<String>,
    pub content: String,
    pub sent_at: DateTime<Utc>,
    /// Reacting user id mapped to that user's single active emoji.
    /// Re-reacting overwrites; a user never holds two reactions at once.
    pub reactions: BTreeMap<String, String>,
}

impl Message {
    pub fn new(
        id: impl Into<String>,
        chat_id: impl Into<String>,
        sender_user_id: impl Into<String>,
        replied_message_id: Option<String>,
        content: impl Into<String>,
        sent_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: id.into(),
            chat_id: chat_id.into(),
            sender_user_id: sender_user_id.into(),
            replied_message_id,
            content: content.into(),
            sent_at,
            reactions: BTreeMap::new(),
        }
    }

    /// Records `user_id`'s reaction, replacing any previous one.
    pub fn react(&mut self, user_id: impl Into<String>, emoji: impl Into<String>) {
        self.reactions.insert(user_id.into(), emoji.into());
    }

    /// Clears `user_id`'s reaction if present. Returns whether a reaction
    /// was actually removed.
    pub fn remove_reaction(&mut self, user_id: &str) -> bool {
        self.reactions.remove(user_id).is_some()
    }

    pub fn content_matches(&self, keyword: &str) -> bool {
        self.content
            .to_lowercase()
            .contains(&keyword.to_lowercase())
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn msg(content: &str) -> Message {
        Message::new(
            "m1",
            "c1",
            "alice",
            None,
            content,
            Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap(),
        )
    }

    #[test]
    fn react_stores_one_reaction_per_user() {
        let mut message = msg("hello");

        message.react("bob", "👍");
        message.react("bob", "🎉");

        assert_eq!(message.reactions.get("bob"), Some(&"🎉".to_owned()));
        assert_eq!(message.reactions.len(), 1);
    }

    #[test]
    fn remove_reaction_is_a_noop_without_prior_reaction() {
        let mut message = msg("hello");

        assert!(!message.remove_reaction("bob"));
        assert!(message.reactions.is_empty());
    }

    #[test]
    fn remove_reaction_clears_existing_reaction() {
        let mut message = msg("hello");
        message.react("bob", "👍");

        assert!(message.remove_reaction("bob"));
        assert!(message.reactions.is_empty());
    }

    #[test]
    fn content_matches_is_case_insensitive() {
        let message = msg("Hello there");

        assert!(message.content_matches("hello"));
        assert!(message.content_matches("THERE"));
        assert!(!message.content_matches("world"));
    }
}
