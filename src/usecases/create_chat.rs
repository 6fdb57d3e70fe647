//! Use case for creating a chat.

use std::collections::HashSet;

use thiserror::Error;

use crate::{
    domain::chat::Chat,
    infra::id::IdGenerator,
    repository::{ChatRepository, RepositoryError},
};

const MIN_CHAT_PARTICIPANTS: usize = 2;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateChatCommand {
    pub group_name: String,
    pub participant_user_ids: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateChatOutput {
    pub chat_id: String,
    pub group_name: String,
    pub participant_count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CreateChatError {
    #[error("chat name cannot be empty")]
    EmptyName,
    #[error("a chat needs at least {MIN_CHAT_PARTICIPANTS} participants")]
    TooFewParticipants,
    #[error("duplicate participant")]
    DuplicateParticipant,
    #[error("{0}")]
    Storage(String),
}

pub fn create_chat(
    chats: &mut dyn ChatRepository,
    ids: &dyn IdGenerator,
    command: CreateChatCommand,
) -> Result<CreateChatOutput, CreateChatError> {
    let group_name = command.group_name.trim();
    if group_name.is_empty() {
        return Err(CreateChatError::EmptyName);
    }
    if command.participant_user_ids.len() < MIN_CHAT_PARTICIPANTS {
        return Err(CreateChatError::TooFewParticipants);
    }

    let distinct: HashSet<&String> = command.participant_user_ids.iter().collect();
    if distinct.len() != command.participant_user_ids.len() {
        return Err(CreateChatError::DuplicateParticipant);
    }

    let mut chat = Chat::new(ids.next_id(), group_name);
    for user_id in command.participant_user_ids {
        chat.add_participant(user_id);
    }

    let chat = chats
        .save(chat)
        .map_err(|error: RepositoryError| CreateChatError::Storage(error.to_string()))?;

    Ok(CreateChatOutput {
        chat_id: chat.id,
        group_name: chat.group_name,
        participant_count: chat.participant_user_ids.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{infra::stubs::SequentialIds, repository::MemoryChatRepository};

    fn command(name: &str, participants: &[&str]) -> CreateChatCommand {
        CreateChatCommand {
            group_name: name.to_owned(),
            participant_user_ids: participants.iter().map(|id| (*id).to_owned()).collect(),
        }
    }

    #[test]
    fn rejects_blank_name() {
        let mut chats = MemoryChatRepository::new();

        let result = create_chat(
            &mut chats,
            &SequentialIds::default(),
            command("  ", &["alice", "bob"]),
        );

        assert_eq!(result, Err(CreateChatError::EmptyName));
    }

    #[test]
    fn rejects_a_single_participant() {
        let mut chats = MemoryChatRepository::new();

        let result = create_chat(
            &mut chats,
            &SequentialIds::default(),
            command("solo", &["alice"]),
        );

        assert_eq!(result, Err(CreateChatError::TooFewParticipants));
    }

    #[test]
    fn rejects_duplicate_participants() {
        let mut chats = MemoryChatRepository::new();

        let result = create_chat(
            &mut chats,
            &SequentialIds::default(),
            command("pair", &["alice", "alice"]),
        );

        assert_eq!(result, Err(CreateChatError::DuplicateParticipant));
    }

    #[test]
    fn persists_the_chat_with_trimmed_name_and_fresh_id() {
        let mut chats = MemoryChatRepository::new();

        let output = create_chat(
            &mut chats,
            &SequentialIds::default(),
            command("  book club ", &["alice", "bob", "carol"]),
        )
        .expect("create should succeed");

        assert_eq!(output.chat_id, "id-1");
        assert_eq!(output.group_name, "book club");
        assert_eq!(output.participant_count, 3);

        let stored = chats
            .find_by_id("id-1")
            .expect("lookup should succeed")
            .expect("chat should be stored");
        assert_eq!(stored.participant_user_ids, vec!["alice", "bob", "carol"]);
        assert!(stored.message_ids.is_empty());
    }
}
