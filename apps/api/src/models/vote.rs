//! Vote models for Linkboard

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;

use super::link::Link;
use super::user::User;

/// Vote record from the votes table
///
/// Votes are not deduplicated: the same user may vote for the same link
/// any number of times.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct Vote {
    /// Unique vote identifier
    pub id: i32,

    /// User who cast the vote
    pub user_id: i32,

    /// Link that received the vote
    pub link_id: i32,

    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

/// Outcome of a successful vote
#[derive(Debug, Clone)]
pub struct CastVote {
    pub user: User,
    pub link: Link,
    pub vote: Vote,
}
