//! User GraphQL type

use async_graphql::Object;

use crate::models::User as DbUser;

/// Public user information exposed via GraphQL
///
/// Only the id and username are visible; contact details stay private.
pub struct User {
    inner: DbUser,
}

impl User {
    /// Create a new GraphQL User from a database User
    pub fn new(user: DbUser) -> Self {
        Self { inner: user }
    }
}

impl From<DbUser> for User {
    fn from(user: DbUser) -> Self {
        Self::new(user)
    }
}

#[Object]
impl User {
    /// Unique user identifier
    async fn id(&self) -> i32 {
        self.inner.id
    }

    /// Login name
    async fn username(&self) -> &str {
        &self.inner.username
    }
}
