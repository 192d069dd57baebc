//! Mutation payloads

use async_graphql::SimpleObject;

use crate::models::{CastVote, Link as DbLink, User as DbUser};

use super::link::Link;
use super::user::User;

/// Result of `createLink`
#[derive(SimpleObject)]
pub struct CreateLinkPayload {
    pub id: i32,
    pub url: String,
    pub description: String,
    /// Poster, null when the link was created anonymously
    pub posted_by: Option<User>,
}

impl CreateLinkPayload {
    /// Build the payload from the stored link and the viewer who posted it
    pub fn new(link: DbLink, poster: Option<DbUser>) -> Self {
        Self {
            id: link.id,
            url: link.url,
            description: link.description,
            posted_by: poster.map(User::from),
        }
    }
}

/// Result of `createVote`
#[derive(SimpleObject)]
pub struct CreateVotePayload {
    /// Voter
    pub user: User,
    /// Link voted for
    pub link: Link,
}

impl From<CastVote> for CreateVotePayload {
    fn from(cast: CastVote) -> Self {
        Self {
            user: cast.user.into(),
            link: cast.link.into(),
        }
    }
}
