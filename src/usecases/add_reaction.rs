//! Use case for reacting to a message with an emoji.

use std::collections::BTreeMap;

use thiserror::Error;

use crate::repository::{MessageRepository, RepositoryError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddReactionCommand {
    pub message_id: String,
    pub user_id: String,
    pub emoji: String,
}

/// The message's full reaction mapping after the change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddReactionOutput {
    pub message_id: String,
    pub reactions: BTreeMap<String, String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AddReactionError {
    #[error("message not found")]
    MessageNotFound,
    #[error("{0}")]
    Storage(String),
}

/// Sets the user's reaction on the message, replacing any previous one.
/// Idempotent for the same (message, user, emoji) triple.
pub fn add_reaction(
    messages: &mut dyn MessageRepository,
    command: AddReactionCommand,
) -> Result<AddReactionOutput, AddReactionError> {
    let mut message = messages
        .find_by_id(&command.message_id)
        .map_err(storage_failure)?
        .ok_or(AddReactionError::MessageNotFound)?;

    message.react(command.user_id, command.emoji);
    let message = messages.save(message).map_err(storage_failure)?;

    Ok(AddReactionOutput {
        message_id: message.id,
        reactions: message.reactions,
    })
}

fn storage_failure(error: RepositoryError) -> AddReactionError {
    AddReactionError::Storage(error.to_string())
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::*;
    use crate::{domain::message::Message, repository::MemoryMessageRepository};

    fn seeded_message_repo() -> MemoryMessageRepository {
        let mut messages = MemoryMessageRepository::new();
        messages
            .save(Message::new(
                "m1",
                "c1",
                "alice",
                None,
                "hello",
                Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap(),
            ))
            .expect("seed message should save");
        messages
    }

    fn react(messages: &mut MemoryMessageRepository, user: &str, emoji: &str) -> AddReactionOutput {
        add_reaction(
            messages,
            AddReactionCommand {
                message_id: "m1".to_owned(),
                user_id: user.to_owned(),
                emoji: emoji.to_owned(),
            },
        )
        .expect("reaction should succeed")
    }

    #[test]
    fn fails_when_message_is_missing() {
        let mut messages = MemoryMessageRepository::new();

        let result = add_reaction(
            &mut messages,
            AddReactionCommand {
                message_id: "m1".to_owned(),
                user_id: "bob".to_owned(),
                emoji: "👍".to_owned(),
            },
        );

        assert_eq!(result, Err(AddReactionError::MessageNotFound));
    }

    #[test]
    fn stores_and_returns_the_updated_mapping() {
        let mut messages = seeded_message_repo();

        let output = react(&mut messages, "bob", "👍");

        assert_eq!(output.reactions.get("bob"), Some(&"👍".to_owned()));

        let stored = messages
            .find_by_id("m1")
            .expect("lookup should succeed")
            .expect("message should exist");
        assert_eq!(stored.reactions, output.reactions);
    }

    #[test]
    fn re_reacting_overwrites_instead_of_accumulating() {
        let mut messages = seeded_message_repo();

        react(&mut messages, "bob", "👍");
        let output = react(&mut messages, "bob", "🎉");

        assert_eq!(output.reactions.len(), 1);
        assert_eq!(output.reactions.get("bob"), Some(&"🎉".to_owned()));
    }

    #[test]
    fn same_triple_is_idempotent() {
        let mut messages = seeded_message_repo();

        let first = react(&mut messages, "bob", "👍");
        let second = react(&mut messages, "bob", "👍");

        assert_eq!(first, second);
    }

    #[test]
    fn distinct_users_each_keep_their_own_reaction() {
        let mut messages = seeded_message_repo();

        react(&mut messages, "bob", "👍");
        let output = react(&mut messages, "carol", "❤️");

        assert_eq!(output.reactions.len(), 2);
        assert_eq!(output.reactions.get("bob"), Some(&"👍".to_owned()));
        assert_eq!(output.reactions.get("carol"), Some(&"❤️".to_owned()));
    }
}
