//! Use case layer: one interactor per operation.
//!
//! Every interactor is a free function over repository and infra ports.
//! It validates, mutates entities through the repositories, and returns
//! exactly one outcome: the success output or a failure whose `Display`
//! string is suitable for direct display.

pub mod add_reaction;
pub mod add_user_to_group;
pub mod bootstrap;
pub mod context;
pub mod create_chat;
pub mod delete_message;
pub mod logout;
pub mod recent_chats;
pub mod remove_reaction;
pub mod remove_user_from_group;
pub mod search_chat_history;
pub mod send_message;
