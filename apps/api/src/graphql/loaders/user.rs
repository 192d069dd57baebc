//! User DataLoader for batched fetching

use async_graphql::dataloader::Loader;
use sqlx::PgPool;
use std::collections::HashMap;
use std::sync::Arc;

use crate::models::User;
use crate::repositories::utils::USER_COLUMNS;

/// DataLoader for batching user queries
#[derive(Clone)]
pub struct UserLoader {
    pool: PgPool,
}

impl UserLoader {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl Loader<i32> for UserLoader {
    type Value = User;
    type Error = Arc<sqlx::Error>;

    async fn load(&self, keys: &[i32]) -> Result<HashMap<i32, Self::Value>, Self::Error> {
        let sql = format!("SELECT {} FROM users WHERE id = ANY($1)", USER_COLUMNS);
        let users: Vec<User> = sqlx::query_as(&sql)
            .bind(keys)
            .fetch_all(&self.pool)
            .await
            .map_err(Arc::new)?;

        Ok(users.into_iter().map(|u| (u.id, u)).collect())
    }
}
