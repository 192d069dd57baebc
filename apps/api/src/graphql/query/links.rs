//! Link and vote queries for the Linkboard GraphQL API
//!
//! - links: every link, searched or windowed
//! - votes: every vote

use async_graphql::{Context, ErrorExtensions, Object, Result};

use crate::graphql::types::{Link, Vote};
use crate::models::LinkQuery as LinkArgs;
use crate::services::LinkService;

/// Link-related queries
#[derive(Default)]
pub struct LinkQuery;

#[Object]
impl LinkQuery {
    /// List links
    ///
    /// With a non-empty `search`, returns every link whose url or
    /// description contains it (ignoring case) and `first`/`skip` are
    /// ignored. Otherwise returns links in creation order, dropping `skip`
    /// and then keeping at most `first`.
    async fn links(
        &self,
        ctx: &Context<'_>,
        search: Option<String>,
        first: Option<i32>,
        skip: Option<i32>,
    ) -> Result<Vec<Link>> {
        let service = ctx.data::<LinkService>()?;
        let links = service
            .list_links(LinkArgs {
                search,
                first,
                skip,
            })
            .await
            .map_err(|e| e.extend())?;
        Ok(links.into_iter().map(Link::from).collect())
    }

    /// List every vote
    async fn votes(&self, ctx: &Context<'_>) -> Result<Vec<Vote>> {
        let service = ctx.data::<LinkService>()?;
        let votes = service.list_votes().await.map_err(|e| e.extend())?;
        Ok(votes.into_iter().map(Vote::from).collect())
    }
}
