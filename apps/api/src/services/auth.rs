//! Access token verification for Linkboard
//!
//! Accounts and logins belong to an external auth provider that signs
//! HS256 JWT access tokens with a secret shared with this service. The
//! API only needs to verify those tokens; issuing is provided for the
//! provider's tooling and for tests.

use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};

use crate::error::{ApiError, ApiResult};
use crate::models::{Claims, User};

/// Default access token lifetime in seconds (15 minutes)
const DEFAULT_ACCESS_TOKEN_TTL_SECS: i64 = 15 * 60;

/// Authentication service configuration
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// JWT signing secret
    pub jwt_secret: String,
    /// Access token TTL in seconds
    pub access_token_ttl_secs: i64,
    /// JWT issuer, also used as the audience
    pub issuer: String,
}

impl AuthConfig {
    /// Create a new AuthConfig with the default TTL and issuer
    pub fn new(jwt_secret: String) -> Self {
        Self {
            jwt_secret,
            access_token_ttl_secs: DEFAULT_ACCESS_TOKEN_TTL_SECS,
            issuer: "linkboard".to_string(),
        }
    }

    /// Create AuthConfig from an issuer and an expiry string (e.g., "15m", "1h")
    pub fn with_expiry_string(jwt_secret: String, issuer: String, access_expiry: &str) -> Self {
        Self {
            jwt_secret,
            access_token_ttl_secs: parse_duration_string(access_expiry)
                .unwrap_or(DEFAULT_ACCESS_TOKEN_TTL_SECS),
            issuer,
        }
    }
}

/// Parse duration strings like "15m", "7d", "24h" to seconds
fn parse_duration_string(s: &str) -> Option<i64> {
    let s = s.trim();
    let (unit_at, unit) = s.char_indices().last()?;
    let num: i64 = s[..unit_at].parse().ok()?;

    let scale = match unit {
        's' => 1,
        'm' => 60,
        'h' => 3600,
        'd' => 24 * 3600,
        _ => return None,
    };
    num.checked_mul(scale)
}

/// Verifies (and, for tooling, issues) access tokens
#[derive(Clone)]
pub struct AuthService {
    config: AuthConfig,
}

impl AuthService {
    /// Create a new AuthService instance
    pub fn new(config: AuthConfig) -> Self {
        Self { config }
    }

    /// Sign an access token for `user`
    pub fn issue_access_token(&self, user: &User) -> ApiResult<String> {
        let claims = Claims::new(user, &self.config.issuer, self.config.access_token_ttl_secs);
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.config.jwt_secret.as_bytes()),
        )?;
        Ok(token)
    }

    /// Verify an access token and return its claims
    ///
    /// # Errors
    /// - `ApiError::InvalidToken` if token is invalid, expired, or malformed
    pub fn verify_access_token(&self, token: &str) -> ApiResult<Claims> {
        let mut validation = Validation::default();
        validation.set_issuer(&[&self.config.issuer]);
        validation.set_audience(&[&self.config.issuer]);

        let token_data = decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.config.jwt_secret.as_bytes()),
            &validation,
        )
        .map_err(|e| {
            tracing::debug!(error = %e, "Access token verification failed");
            ApiError::InvalidToken(e.to_string())
        })?;

        Ok(token_data.claims)
    }
}
