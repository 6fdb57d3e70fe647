//! Parley: a domain engine for one-on-one and group chats.
//!
//! The crate is split into a `domain` layer (entities), a `repository`
//! layer (storage contracts plus the in-memory reference implementation),
//! a `usecases` layer (one interactor per operation), and `infra`
//! (config, logging, clock, and id generation adapters).
//!
//! Presentation and remote storage live outside this crate; they consume
//! the interactor outputs and implement the repository contracts.

pub mod domain;
pub mod infra;
pub mod repository;
pub mod usecases;
