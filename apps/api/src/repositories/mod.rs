//! Database repository layer for Linkboard
//!
//! Plain lookups and writes for links, votes and users. Batched
//! relationship queries live in the GraphQL DataLoaders.

pub mod link;
pub mod user;
pub mod utils;
pub mod vote;

pub use link::LinkRepository;
pub use user::UserRepository;
pub use vote::VoteRepository;
