//! Database models and types for Linkboard
//!
//! This module contains SQLx models for:
//! - Users (owned by the external auth collaborator, read-only here)
//! - Links and votes
//! - Offset/limit pagination windows

pub mod link;
pub mod page;
pub mod user;
pub mod vote;

pub use link::{Link, LinkQuery, NewLink};
pub use page::Page;
pub use user::{Claims, User};
pub use vote::{CastVote, Vote};
