//! Link repository for centralized database operations

use sqlx::PgPool;

use super::utils::{contains_pattern, LINK_COLUMNS};
use crate::models::{Link, NewLink, Page};

/// Repository for link database operations
#[derive(Clone)]
pub struct LinkRepository {
    pool: PgPool,
}

impl LinkRepository {
    /// Create a new LinkRepository instance
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List links in insertion order, windowed by `page`
    ///
    /// A `NULL` limit means no limit in PostgreSQL.
    pub async fn list(&self, page: Page) -> Result<Vec<Link>, sqlx::Error> {
        let sql = format!(
            "SELECT {} FROM links ORDER BY id ASC LIMIT $1 OFFSET $2",
            LINK_COLUMNS
        );
        sqlx::query_as::<_, Link>(&sql)
            .bind(page.limit)
            .bind(page.offset)
            .fetch_all(&self.pool)
            .await
    }

    /// Find links whose url or description contains `term`, ignoring case
    ///
    /// Escapes ILIKE special characters so the term matches literally.
    pub async fn search(&self, term: &str) -> Result<Vec<Link>, sqlx::Error> {
        let sql = format!(
            r#"SELECT {} FROM links
            WHERE url ILIKE $1 OR description ILIKE $1
            ORDER BY id ASC"#,
            LINK_COLUMNS
        );
        sqlx::query_as::<_, Link>(&sql)
            .bind(contains_pattern(term))
            .fetch_all(&self.pool)
            .await
    }

    /// Insert a new link and return the stored row
    pub async fn create(&self, link: &NewLink) -> Result<Link, sqlx::Error> {
        let sql = format!(
            r#"INSERT INTO links (url, description, posted_by_id)
            VALUES ($1, $2, $3)
            RETURNING {}"#,
            LINK_COLUMNS
        );
        sqlx::query_as::<_, Link>(&sql)
            .bind(&link.url)
            .bind(&link.description)
            .bind(link.posted_by_id)
            .fetch_one(&self.pool)
            .await
    }
}
