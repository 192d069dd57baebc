//! DataLoader implementations for GraphQL
//!
//! Each loader batches the relationship lookups of one request into a
//! single query, so resolving `postedBy`, `user`, `link` or `votes` over a
//! list costs one round trip instead of one per row.
//!
//! There are two kinds of loaders:
//! - Single-entity loaders: map an id to at most one row
//! - Collection loaders: map a parent id to its (possibly empty) children

mod link;
mod user;
mod votes_by_link;

pub use link::LinkLoader;
pub use user::UserLoader;
pub use votes_by_link::VotesByLinkLoader;
