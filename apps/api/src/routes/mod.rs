//! HTTP route handlers for the Linkboard API
//!
//! - GraphQL endpoint and playground
//! - Health check and status endpoints

pub mod graphql;
pub mod health;

pub use graphql::{extract_bearer_token, graphql_handler, graphql_playground};
pub use health::{health_router, HealthState};

use axum::{
    extract::Extension,
    routing::{get, post},
    Router,
};
use sqlx::PgPool;

use crate::graphql::{build_schema, LinkboardSchema};
use crate::repositories::UserRepository;
use crate::services::AuthService;

/// Everything the HTTP surface needs
#[derive(Clone)]
pub struct AppState {
    pub schema: LinkboardSchema,
    pub auth_service: AuthService,
    pub users: UserRepository,
    pub health: HealthState,
}

impl AppState {
    /// Wire the schema, repositories and health checks over one pool
    pub fn new(pool: PgPool, auth_service: AuthService) -> Self {
        Self::with_schema(build_schema(pool.clone()), pool, auth_service)
    }

    /// Like [`AppState::new`] with an already configured schema
    pub fn with_schema(schema: LinkboardSchema, pool: PgPool, auth_service: AuthService) -> Self {
        Self {
            schema,
            auth_service,
            users: UserRepository::new(pool.clone()),
            health: HealthState::new(pool),
        }
    }
}

/// Build the application router
///
/// Tracing and CORS layers are added by the binary.
pub fn app_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/graphql", post(graphql_handler))
        .route("/graphql/playground", get(graphql_playground))
        // Nested health routes: /health, /health/live, /health/ready
        .nest("/health", health_router(state.health))
        .layer(Extension(state.schema))
        .layer(Extension(state.users))
        .layer(Extension(state.auth_service))
}

async fn root() -> &'static str {
    "Welcome to Linkboard - share links, vote on the best ones"
}
