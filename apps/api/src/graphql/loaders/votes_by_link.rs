//! Votes-by-Link DataLoader for batched fetching
//!
//! Returns every vote for each requested link in ascending id order.

use async_graphql::dataloader::Loader;
use sqlx::PgPool;
use std::collections::HashMap;
use std::sync::Arc;

use crate::models::Vote;
use crate::repositories::utils::VOTE_COLUMNS;

/// DataLoader for batching votes-by-link queries
#[derive(Clone)]
pub struct VotesByLinkLoader {
    pool: PgPool,
}

impl VotesByLinkLoader {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl Loader<i32> for VotesByLinkLoader {
    type Value = Vec<Vote>;
    type Error = Arc<sqlx::Error>;

    async fn load(&self, keys: &[i32]) -> Result<HashMap<i32, Self::Value>, Self::Error> {
        let sql = format!(
            "SELECT {} FROM votes WHERE link_id = ANY($1) ORDER BY id ASC",
            VOTE_COLUMNS
        );
        let votes: Vec<Vote> = sqlx::query_as(&sql)
            .bind(keys)
            .fetch_all(&self.pool)
            .await
            .map_err(Arc::new)?;

        let mut result: HashMap<i32, Vec<Vote>> = HashMap::new();
        for vote in votes {
            result.entry(vote.link_id).or_default().push(vote);
        }

        // Links without votes still get an entry
        for key in keys {
            result.entry(*key).or_default();
        }

        Ok(result)
    }
}
