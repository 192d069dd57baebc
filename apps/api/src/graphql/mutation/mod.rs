//! GraphQL mutations for Linkboard

mod links;

pub use links::LinkMutation;

use async_graphql::MergedObject;

/// Root mutation type combining all mutation domains
#[derive(MergedObject, Default)]
pub struct Mutation(LinkMutation);
