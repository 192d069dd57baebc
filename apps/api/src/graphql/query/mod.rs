//! GraphQL queries for Linkboard

mod links;

pub use links::LinkQuery;

use async_graphql::MergedObject;

/// Root query type combining all query domains
#[derive(MergedObject, Default)]
pub struct Query(LinkQuery);
