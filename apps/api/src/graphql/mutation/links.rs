//! Link and vote mutations for the Linkboard GraphQL API
//!
//! - createLink: share a link, attributed to the caller if signed in
//! - createVote: vote for a link (requires a signed-in caller)

use async_graphql::{Context, ErrorExtensions, Object, Result};

use crate::graphql::types::{CreateLinkPayload, CreateVotePayload};
use crate::graphql::viewer::viewer;
use crate::services::LinkService;

/// Link-related mutations
#[derive(Default)]
pub struct LinkMutation;

#[Object]
impl LinkMutation {
    /// Share a new link
    ///
    /// Anonymous callers may post; the link then has no poster.
    async fn create_link(
        &self,
        ctx: &Context<'_>,
        url: String,
        description: String,
    ) -> Result<CreateLinkPayload> {
        let service = ctx.data::<LinkService>()?;
        let viewer = viewer(ctx)?;

        let link = service
            .create_link(viewer, url, description)
            .await
            .map_err(|e| e.extend())?;

        Ok(CreateLinkPayload::new(link, viewer.cloned()))
    }

    /// Vote for an existing link
    ///
    /// Fails with "Please log in to vote!" for anonymous callers and with
    /// "Invalid Link!" when `link_id` does not name a link.
    async fn create_vote(&self, ctx: &Context<'_>, link_id: i32) -> Result<CreateVotePayload> {
        let service = ctx.data::<LinkService>()?;
        let viewer = viewer(ctx)?;

        let cast = service
            .create_vote(viewer, link_id)
            .await
            .map_err(|e| e.extend())?;

        Ok(cast.into())
    }
}
