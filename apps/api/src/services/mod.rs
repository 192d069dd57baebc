//! Business logic services for Linkboard
//!
//! - Access token verification
//! - Link and vote resolution
//! - Health checks

pub mod auth;
pub mod health;
pub mod links;

pub use auth::{AuthConfig, AuthService};
pub use health::HealthService;
pub use links::{LinkService, LinkStore, PgStore};
