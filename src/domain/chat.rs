use serde::{Deserialize, Serialize};

/// A conversation owning an ordered participant list and an append-only
/// message-id sequence.
///
/// The entity itself stays permissive: it does not reject duplicate
/// participants and it never shrinks the message-id sequence. The
/// interactors own those rules, so a storage adapter can round-trip any
/// chat it finds without tripping invariants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chat {
    pub id: String,
    /// Display label. For a 1:1 chat presentation conventionally sets this
    /// to the other participant's name; nothing here enforces that.
    pub group_name: String,
    /// Insertion order is membership order.
    pub participant_user_ids: Vec<String>,
    /// Insertion order is send order.
    pub message_ids: Vec<String>,
}

impl Chat {
    pub fn new(id: impl Into<String>, group_name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            group_name: group_name.into(),
            participant_user_ids: Vec::new(),
            message_ids: Vec::new(),
        }
    }

    pub fn is_participant(&self, user_id: &str) -> bool {
        self.participant_user_ids.iter().any(|id| id == user_id)
    }

    pub fn add_participant(&mut self, user_id: impl Into<String>) {
        self.participant_user_ids.push(user_id.into());
    }

    /// Removes the first occurrence of `user_id`. Returns whether a
    /// participant was actually removed.
    pub fn remove_participant(&mut self, user_id: &str) -> bool {
        match self.participant_user_ids.iter().position(|id| id == user_id) {
            Some(index) => {
                self.participant_user_ids.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn participant_count(&self) -> usize {
        self.participant_user_ids.len()
    }

    /// Appends a message id, preserving send order.
    pub fn record_message(&mut self, message_id: impl Into<String>) {
        self.message_ids.push(message_id.into());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chat_with(participants: &[&str]) -> Chat {
        let mut chat = Chat::new("c1", "study group");
        for id in participants {
            chat.add_participant(*id);
        }
        chat
    }

    #[test]
    fn reports_membership_for_added_participant() {
        let chat = chat_with(&["alice", "bob"]);

        assert!(chat.is_participant("alice"));
        assert!(!chat.is_participant("carol"));
    }

    #[test]
    fn remove_participant_drops_only_the_named_user() {
        let mut chat = chat_with(&["alice", "bob", "carol"]);

        assert!(chat.remove_participant("bob"));
        assert_eq!(chat.participant_user_ids, vec!["alice", "carol"]);
    }

    #[test]
    fn remove_participant_returns_false_for_unknown_user() {
        let mut chat = chat_with(&["alice", "bob"]);

        assert!(!chat.remove_participant("carol"));
        assert_eq!(chat.participant_count(), 2);
    }

    #[test]
    fn entity_does_not_prevent_duplicate_participants() {
        let mut chat = chat_with(&["alice"]);

        chat.add_participant("alice");

        assert_eq!(chat.participant_count(), 2);
    }

    #[test]
    fn record_message_preserves_send_order() {
        let mut chat = chat_with(&["alice", "bob"]);

        chat.record_message("m1");
        chat.record_message("m2");
        chat.record_message("m3");

        assert_eq!(chat.message_ids, vec!["m1", "m2", "m3"]);
    }
}
