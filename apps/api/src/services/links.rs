//! Link and vote resolution for Linkboard
//!
//! `LinkService` holds the whole query/mutation contract:
//! - listing links, either by case-insensitive search or by offset/limit window
//! - listing votes
//! - creating links, attributed to the viewer when there is one
//! - casting votes, which requires a viewer and an existing link
//!
//! The viewer is passed in explicitly; the service never reads request state.

use std::future::Future;

use sqlx::PgPool;

use crate::error::{ApiError, ApiResult, INVALID_LINK, LOGIN_TO_VOTE};
use crate::models::link::LinkLookup;
use crate::models::{CastVote, Link, LinkQuery, NewLink, Page, User, Vote};
use crate::repositories::{LinkRepository, VoteRepository};

/// Persistence collaborator holding links and votes
pub trait LinkStore: Send + Sync {
    /// Links in store order, windowed by `page`
    fn list_links(&self, page: Page) -> impl Future<Output = ApiResult<Vec<Link>>> + Send;

    /// Links whose url or description contains `term`, ignoring case
    fn search_links(&self, term: &str) -> impl Future<Output = ApiResult<Vec<Link>>> + Send;

    /// Every vote in store order
    fn list_votes(&self) -> impl Future<Output = ApiResult<Vec<Vote>>> + Send;

    /// Persist a link and return it with its generated id
    fn insert_link(&self, link: NewLink) -> impl Future<Output = ApiResult<Link>> + Send;

    /// Persist a vote if `link_id` names an existing link
    ///
    /// Returns `None` without writing anything when the link is missing.
    /// The existence check and the insert must be atomic.
    fn insert_vote(
        &self,
        user_id: i32,
        link_id: i32,
    ) -> impl Future<Output = ApiResult<Option<(Link, Vote)>>> + Send;
}

/// PostgreSQL-backed store built on the link and vote repositories
#[derive(Clone)]
pub struct PgStore {
    links: LinkRepository,
    votes: VoteRepository,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self {
            links: LinkRepository::new(pool.clone()),
            votes: VoteRepository::new(pool),
        }
    }
}

impl LinkStore for PgStore {
    async fn list_links(&self, page: Page) -> ApiResult<Vec<Link>> {
        Ok(self.links.list(page).await?)
    }

    async fn search_links(&self, term: &str) -> ApiResult<Vec<Link>> {
        Ok(self.links.search(term).await?)
    }

    async fn list_votes(&self) -> ApiResult<Vec<Vote>> {
        Ok(self.votes.list().await?)
    }

    async fn insert_link(&self, link: NewLink) -> ApiResult<Link> {
        Ok(self.links.create(&link).await?)
    }

    async fn insert_vote(&self, user_id: i32, link_id: i32) -> ApiResult<Option<(Link, Vote)>> {
        Ok(self.votes.create_for_link(user_id, link_id).await?)
    }
}

/// Query and mutation resolution over a [`LinkStore`]
#[derive(Clone)]
pub struct LinkService<S = PgStore> {
    store: S,
}

impl<S: LinkStore> LinkService<S> {
    /// Create a new LinkService over `store`
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Get a reference to the underlying store
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Answer the `links` query
    ///
    /// A non-empty `search` wins over `first`/`skip`, which are ignored on
    /// that path. Without a search every link is returned in store order,
    /// `skip` applied before `first`.
    pub async fn list_links(&self, query: LinkQuery) -> ApiResult<Vec<Link>> {
        match query.lookup() {
            LinkLookup::Search(term) => {
                tracing::debug!(search = %term, "Searching links");
                self.store.search_links(&term).await
            }
            LinkLookup::Page(page) => {
                tracing::debug!(offset = page.offset, limit = ?page.limit, "Listing links");
                self.store.list_links(page).await
            }
        }
    }

    /// Answer the `votes` query: every vote, unfiltered
    pub async fn list_votes(&self) -> ApiResult<Vec<Vote>> {
        self.store.list_votes().await
    }

    /// Create a link posted by `viewer`, or by nobody when anonymous
    ///
    /// Url and description are stored as given; empty strings are accepted.
    pub async fn create_link(
        &self,
        viewer: Option<&User>,
        url: String,
        description: String,
    ) -> ApiResult<Link> {
        let link = self
            .store
            .insert_link(NewLink {
                url,
                description,
                posted_by_id: viewer.map(|user| user.id),
            })
            .await?;

        tracing::info!(
            link_id = link.id,
            posted_by = ?link.posted_by_id,
            "Link created"
        );

        Ok(link)
    }

    /// Cast a vote by `viewer` for the link `link_id`
    ///
    /// Repeated votes by the same user for the same link are all kept.
    ///
    /// # Errors
    /// - `ApiError::Authentication` if there is no viewer; the store is not touched
    /// - `ApiError::NotFound` if the link does not exist; nothing is written
    pub async fn create_vote(&self, viewer: Option<&User>, link_id: i32) -> ApiResult<CastVote> {
        let user = viewer.ok_or(ApiError::Authentication(LOGIN_TO_VOTE))?;

        let (link, vote) = self
            .store
            .insert_vote(user.id, link_id)
            .await?
            .ok_or(ApiError::NotFound(INVALID_LINK))?;

        tracing::info!(
            vote_id = vote.id,
            link_id = link.id,
            user_id = user.id,
            "Vote cast"
        );

        Ok(CastVote {
            user: user.clone(),
            link,
            vote,
        })
    }
}
