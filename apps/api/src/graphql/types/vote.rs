//! Vote GraphQL type

use async_graphql::dataloader::DataLoader;
use async_graphql::{Context, ErrorExtensions, Object, Result};

use crate::error::ApiError;
use crate::graphql::loaders::{LinkLoader, UserLoader};
use crate::models::Vote as DbVote;

use super::link::Link;
use super::user::User;

/// A single vote exposed via GraphQL
pub struct Vote {
    inner: DbVote,
}

impl Vote {
    /// Create a new GraphQL Vote from a database Vote
    pub fn new(vote: DbVote) -> Self {
        Self { inner: vote }
    }
}

impl From<DbVote> for Vote {
    fn from(vote: DbVote) -> Self {
        Self::new(vote)
    }
}

#[Object]
impl Vote {
    /// Unique vote identifier
    async fn id(&self) -> i32 {
        self.inner.id
    }

    /// User who cast the vote
    async fn user(&self, ctx: &Context<'_>) -> Result<User> {
        let loader = ctx.data::<DataLoader<UserLoader>>()?;
        loader
            .load_one(self.inner.user_id)
            .await?
            .map(User::from)
            .ok_or_else(|| {
                ApiError::Internal(format!(
                    "vote {} references missing user {}",
                    self.inner.id, self.inner.user_id
                ))
                .extend()
            })
    }

    /// Link the vote was cast for
    async fn link(&self, ctx: &Context<'_>) -> Result<Link> {
        let loader = ctx.data::<DataLoader<LinkLoader>>()?;
        loader
            .load_one(self.inner.link_id)
            .await?
            .map(Link::from)
            .ok_or_else(|| {
                ApiError::Internal(format!(
                    "vote {} references missing link {}",
                    self.inner.id, self.inner.link_id
                ))
                .extend()
            })
    }
}
