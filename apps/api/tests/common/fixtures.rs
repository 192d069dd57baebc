//! Test fixtures for link and vote tests
//!
//! `MemoryStore` is an in-memory `LinkStore` with the same ordering and
//! search semantics as the PostgreSQL store, so service behaviour can be
//! tested without a database.

#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use chrono::Utc;

use linkboard_api::models::{Link, NewLink, Page, User, Vote};
use linkboard_api::{ApiResult, LinkService, LinkStore};

#[derive(Default)]
struct State {
    links: Vec<Link>,
    votes: Vec<Vote>,
    next_link_id: i32,
    next_vote_id: i32,
}

/// In-memory link and vote store
#[derive(Default)]
pub struct MemoryStore {
    state: Mutex<State>,
    calls: AtomicUsize,
}

impl MemoryStore {
    /// Store pre-populated with `(url, description)` links, ids from 1
    pub fn with_links<U: AsRef<str>, D: AsRef<str>>(links: &[(U, D)]) -> Self {
        let store = Self::default();
        {
            let mut state = store.state.lock().unwrap();
            for (url, description) in links {
                state.next_link_id += 1;
                let id = state.next_link_id;
                let link = sample_link(id, url.as_ref(), description.as_ref(), None);
                state.links.push(link);
            }
        }
        store
    }

    /// Snapshot of stored links
    pub fn links(&self) -> Vec<Link> {
        self.state.lock().unwrap().links.clone()
    }

    /// Snapshot of stored votes
    pub fn votes(&self) -> Vec<Vote> {
        self.state.lock().unwrap().votes.clone()
    }

    /// Number of store operations performed so far
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn touch(&self) {
        self.calls.fetch_add(1, Ordering::SeqCst);
    }
}

impl LinkStore for MemoryStore {
    async fn list_links(&self, page: Page) -> ApiResult<Vec<Link>> {
        self.touch();
        Ok(apply_page(page, self.links()))
    }

    async fn search_links(&self, term: &str) -> ApiResult<Vec<Link>> {
        self.touch();
        Ok(self
            .links()
            .into_iter()
            .filter(|link| matches_search(link, term))
            .collect())
    }

    async fn list_votes(&self) -> ApiResult<Vec<Vote>> {
        self.touch();
        Ok(self.votes())
    }

    async fn insert_link(&self, link: NewLink) -> ApiResult<Link> {
        self.touch();
        let mut state = self.state.lock().unwrap();
        state.next_link_id += 1;
        let stored = Link {
            id: state.next_link_id,
            url: link.url,
            description: link.description,
            posted_by_id: link.posted_by_id,
            created_at: Utc::now(),
        };
        state.links.push(stored.clone());
        Ok(stored)
    }

    async fn insert_vote(&self, user_id: i32, link_id: i32) -> ApiResult<Option<(Link, Vote)>> {
        self.touch();
        let mut state = self.state.lock().unwrap();
        let Some(link) = state.links.iter().find(|l| l.id == link_id).cloned() else {
            return Ok(None);
        };
        state.next_vote_id += 1;
        let vote = Vote {
            id: state.next_vote_id,
            user_id,
            link_id,
            created_at: Utc::now(),
        };
        state.votes.push(vote.clone());
        Ok(Some((link, vote)))
    }
}

/// Window an ordered list the way `OFFSET`/`LIMIT` would
pub fn apply_page<T>(page: Page, items: Vec<T>) -> Vec<T> {
    let skipped = items.into_iter().skip(page.offset as usize);
    match page.limit {
        Some(limit) => skipped.take(limit as usize).collect(),
        None => skipped.collect(),
    }
}

/// Case-insensitive substring match over url and description, like `ILIKE`
pub fn matches_search(link: &Link, term: &str) -> bool {
    let term = term.to_lowercase();
    link.url.to_lowercase().contains(&term) || link.description.to_lowercase().contains(&term)
}

/// Service over a fresh store holding `links`
pub fn service_with<U: AsRef<str>, D: AsRef<str>>(links: &[(U, D)]) -> LinkService<MemoryStore> {
    LinkService::new(MemoryStore::with_links(links))
}

/// The two-link example: "foo" matches both, "bar" only the second
pub fn foo_bar_links() -> [(&'static str, &'static str); 2] {
    [("http://a.com", "foo"), ("http://b.com", "bar foo")]
}

/// `count` links named `http://example.com/<n>`, n from 1
pub fn numbered_links(count: usize) -> Vec<(String, String)> {
    (1..=count)
        .map(|n| (format!("http://example.com/{}", n), format!("link {}", n)))
        .collect()
}

/// Build a link row
pub fn sample_link(id: i32, url: &str, description: &str, posted_by_id: Option<i32>) -> Link {
    Link {
        id,
        url: url.to_string(),
        description: description.to_string(),
        posted_by_id,
        created_at: Utc::now(),
    }
}

/// Build a user row
pub fn sample_user(id: i32, username: &str) -> User {
    User {
        id,
        username: username.to_string(),
        email: None,
        created_at: Utc::now(),
    }
}
