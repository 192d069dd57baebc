//! Caller identity as seen by resolvers

use async_graphql::{Context, ErrorExtensions, Result};

use crate::error::ApiError;
use crate::models::User;

/// Request data marking that the caller presented a valid token but their
/// account could not be loaded
#[derive(Debug, Clone)]
pub struct ViewerUnavailable(pub String);

/// The signed-in caller, `None` for anonymous requests
///
/// Fails when the caller's identity could not be determined, so that a
/// signed-in user is never silently treated as anonymous.
pub fn viewer<'a>(ctx: &'a Context<'_>) -> Result<Option<&'a User>> {
    if let Some(ViewerUnavailable(reason)) = ctx.data_opt::<ViewerUnavailable>() {
        return Err(ApiError::Internal(format!("viewer lookup failed: {}", reason)).extend());
    }
    Ok(ctx.data_opt::<User>())
}
