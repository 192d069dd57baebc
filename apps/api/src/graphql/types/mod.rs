//! GraphQL type definitions for Linkboard
//!
//! Object types wrap the database models; mutation payloads are plain
//! `SimpleObject`s.

mod link;
mod payload;
mod user;
mod vote;

pub use link::Link;
pub use payload::{CreateLinkPayload, CreateVotePayload};
pub use user::User;
pub use vote::Vote;
