//! User and token models for Linkboard
//!
//! Users are created and authenticated by an external collaborator. This
//! service only reads the users table and verifies the access tokens that
//! collaborator signs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// User account from the users table
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct User {
    /// Unique user identifier
    pub id: i32,

    /// Unique login name
    pub username: String,

    /// Contact address, if the auth provider shared one
    #[serde(skip_serializing)]
    pub email: Option<String>,

    /// Account creation timestamp
    pub created_at: DateTime<Utc>,
}

/// JWT claims payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user ID)
    pub sub: i32,

    /// User's login name at the time the token was issued
    pub username: String,

    /// Issued at timestamp (Unix epoch)
    pub iat: i64,

    /// Expiration timestamp (Unix epoch)
    pub exp: i64,

    /// Issuer
    pub iss: String,

    /// Audience
    pub aud: String,
}

impl Claims {
    /// Create new claims for a user
    pub fn new(user: &User, issuer: &str, ttl_secs: i64) -> Self {
        let now = Utc::now().timestamp();
        Self {
            sub: user.id,
            username: user.username.clone(),
            iat: now,
            exp: now + ttl_secs,
            iss: issuer.to_string(),
            aud: issuer.to_string(),
        }
    }
}
