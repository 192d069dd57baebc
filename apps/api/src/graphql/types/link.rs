//! Link GraphQL type
//!
//! Relationship fields go through DataLoaders so a page of links costs one
//! query per relationship, not one per link.

use async_graphql::dataloader::DataLoader;
use async_graphql::{Context, Object, Result};

use crate::graphql::loaders::{UserLoader, VotesByLinkLoader};
use crate::models::Link as DbLink;

use super::user::User;
use super::vote::Vote;

/// A shared link exposed via GraphQL
pub struct Link {
    inner: DbLink,
}

impl Link {
    /// Create a new GraphQL Link from a database Link
    pub fn new(link: DbLink) -> Self {
        Self { inner: link }
    }
}

impl From<DbLink> for Link {
    fn from(link: DbLink) -> Self {
        Self::new(link)
    }
}

#[Object]
impl Link {
    /// Unique link identifier
    async fn id(&self) -> i32 {
        self.inner.id
    }

    /// Shared URL
    async fn url(&self) -> &str {
        &self.inner.url
    }

    /// Free-form description
    async fn description(&self) -> &str {
        &self.inner.description
    }

    /// User who posted the link, null for anonymous posts
    async fn posted_by(&self, ctx: &Context<'_>) -> Result<Option<User>> {
        let Some(user_id) = self.inner.posted_by_id else {
            return Ok(None);
        };
        let loader = ctx.data::<DataLoader<UserLoader>>()?;
        let user = loader.load_one(user_id).await?;
        Ok(user.map(User::from))
    }

    /// Every vote cast for this link
    async fn votes(&self, ctx: &Context<'_>) -> Result<Vec<Vote>> {
        let loader = ctx.data::<DataLoader<VotesByLinkLoader>>()?;
        let votes = loader.load_one(self.inner.id).await?;
        Ok(votes
            .unwrap_or_default()
            .into_iter()
            .map(Vote::from)
            .collect())
    }
}
