//! Vote repository for centralized database operations

use sqlx::PgPool;

use super::utils::{LINK_COLUMNS, VOTE_COLUMNS};
use crate::models::{Link, Vote};

/// Repository for vote database operations
#[derive(Clone)]
pub struct VoteRepository {
    pool: PgPool,
}

impl VoteRepository {
    /// Create a new VoteRepository instance
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List every vote in insertion order
    pub async fn list(&self) -> Result<Vec<Vote>, sqlx::Error> {
        let sql = format!("SELECT {} FROM votes ORDER BY id ASC", VOTE_COLUMNS);
        sqlx::query_as::<_, Vote>(&sql).fetch_all(&self.pool).await
    }

    /// Record a vote for a link if the link exists
    ///
    /// The link row is share-locked for the duration of the transaction so
    /// it cannot be deleted between the existence check and the insert.
    ///
    /// # Returns
    /// * `Ok(Some((link, vote)))` - The vote was stored
    /// * `Ok(None)` - No link with `link_id` exists; nothing was written
    #[tracing::instrument(skip(self))]
    pub async fn create_for_link(
        &self,
        user_id: i32,
        link_id: i32,
    ) -> Result<Option<(Link, Vote)>, sqlx::Error> {
        let mut tx = self.pool.begin().await?;

        let sql = format!(
            "SELECT {} FROM links WHERE id = $1 FOR SHARE",
            LINK_COLUMNS
        );
        let link = sqlx::query_as::<_, Link>(&sql)
            .bind(link_id)
            .fetch_optional(&mut *tx)
            .await?;

        let Some(link) = link else {
            tx.rollback().await?;
            return Ok(None);
        };

        let sql = format!(
            r#"INSERT INTO votes (user_id, link_id)
            VALUES ($1, $2)
            RETURNING {}"#,
            VOTE_COLUMNS
        );
        let vote = sqlx::query_as::<_, Vote>(&sql)
            .bind(user_id)
            .bind(link_id)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(Some((link, vote)))
    }
}
