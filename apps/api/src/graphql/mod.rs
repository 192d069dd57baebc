//! GraphQL schema and resolvers for Linkboard
//!
//! - Query resolvers for links and votes
//! - Mutation resolvers for posting links and voting
//! - Object types and mutation payloads
//! - DataLoaders for relationship fields

pub mod loaders;
pub mod mutation;
pub mod query;
pub mod schema;
pub mod types;
pub mod viewer;

pub use schema::{build_schema, LinkboardSchema, SchemaBuilder};
pub use viewer::ViewerUnavailable;
