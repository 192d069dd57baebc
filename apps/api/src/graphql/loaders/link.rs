//! Link DataLoader for batched fetching
//!
//! Used when a list of votes resolves the link each one points at.

use async_graphql::dataloader::Loader;
use sqlx::PgPool;
use std::collections::HashMap;
use std::sync::Arc;

use crate::models::Link;
use crate::repositories::utils::LINK_COLUMNS;

/// DataLoader for batching link queries
#[derive(Clone)]
pub struct LinkLoader {
    pool: PgPool,
}

impl LinkLoader {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl Loader<i32> for LinkLoader {
    type Value = Link;
    type Error = Arc<sqlx::Error>;

    async fn load(&self, keys: &[i32]) -> Result<HashMap<i32, Self::Value>, Self::Error> {
        let sql = format!("SELECT {} FROM links WHERE id = ANY($1)", LINK_COLUMNS);
        let links: Vec<Link> = sqlx::query_as(&sql)
            .bind(keys)
            .fetch_all(&self.pool)
            .await
            .map_err(Arc::new)?;

        Ok(links.into_iter().map(|l| (l.id, l)).collect())
    }
}
