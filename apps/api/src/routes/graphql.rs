//! GraphQL HTTP endpoints
//!
//! `POST /graphql` resolves the caller from an optional bearer token and
//! executes the request; `GET /graphql/playground` serves the IDE.

use async_graphql::http::{playground_source, GraphQLPlaygroundConfig};
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{
    extract::Extension,
    http::{header, header::HeaderMap},
    response::{Html, IntoResponse},
};

use crate::error::{ApiError, ApiResult};
use crate::graphql::{LinkboardSchema, ViewerUnavailable};
use crate::models::User;
use crate::repositories::UserRepository;
use crate::services::AuthService;

/// Extract bearer token from Authorization header (case-insensitive)
pub fn extract_bearer_token(headers: &HeaderMap) -> Option<&str> {
    let value = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())?;

    let mut parts = value.split_whitespace();
    let scheme = parts.next()?;
    let token = parts.next()?;

    // Reject malformed values like "Bearer <token> <extra>"
    if parts.next().is_some() {
        return None;
    }

    if scheme.eq_ignore_ascii_case("bearer") && !token.is_empty() {
        Some(token)
    } else {
        None
    }
}

/// Resolve the user a bearer token names
///
/// `Ok(None)` when the token is valid but its subject no longer exists.
async fn resolve_viewer(
    auth_service: &AuthService,
    users: &UserRepository,
    token: &str,
) -> ApiResult<Option<User>> {
    let claims = auth_service.verify_access_token(token)?;
    users.find_by_id(claims.sub).await.map_err(ApiError::from)
}

/// GraphQL handler that executes queries against the schema
///
/// A verified bearer token naming an existing user attaches that `User` to
/// the request. A missing or unverifiable token, or one whose user no longer
/// exists, leaves the request anonymous. If the user cannot be loaded at all
/// the request is marked with [`ViewerUnavailable`] and identity-dependent
/// resolvers fail instead of acting anonymously.
pub async fn graphql_handler(
    Extension(schema): Extension<LinkboardSchema>,
    Extension(auth_service): Extension<AuthService>,
    Extension(users): Extension<UserRepository>,
    headers: HeaderMap,
    req: GraphQLRequest,
) -> GraphQLResponse {
    let mut request = req.into_inner();

    if let Some(token) = extract_bearer_token(&headers) {
        match resolve_viewer(&auth_service, &users, token).await {
            Ok(Some(user)) => {
                tracing::debug!(user_id = user.id, "GraphQL request authenticated");
                request = request.data(user);
            }
            Ok(None) => {
                tracing::debug!("GraphQL token subject no longer exists");
            }
            Err(ApiError::InvalidToken(reason)) => {
                tracing::debug!(reason = %reason, "GraphQL auth token verification failed");
            }
            Err(e) => {
                tracing::error!(error = %e, "GraphQL viewer lookup failed");
                request = request.data(ViewerUnavailable(e.to_string()));
            }
        }
    }

    schema.execute(request).await.into()
}

/// GraphQL Playground handler for development
pub async fn graphql_playground() -> impl IntoResponse {
    Html(playground_source(GraphQLPlaygroundConfig::new("/graphql")))
}
