//! Link models for Linkboard

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;

use super::page::Page;

/// Link record from the links table
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct Link {
    /// Unique link identifier
    pub id: i32,

    /// Shared URL
    pub url: String,

    /// Free-form description
    pub description: String,

    /// User who posted the link, absent for anonymous posts
    pub posted_by_id: Option<i32>,

    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

/// Values for a link about to be inserted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewLink {
    pub url: String,
    pub description: String,
    pub posted_by_id: Option<i32>,
}

/// Arguments of the `links` query
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinkQuery {
    /// Case-insensitive substring matched against url and description
    pub search: Option<String>,
    /// Keep at most this many links (applied after `skip`)
    pub first: Option<i32>,
    /// Drop this many links from the front
    pub skip: Option<i32>,
}

/// How a [`LinkQuery`] is answered
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkLookup {
    /// Substring search; pagination arguments do not apply
    Search(String),
    /// Every link, windowed
    Page(Page),
}

impl LinkQuery {
    /// Decide which lookup answers this query
    ///
    /// An empty search term counts as no search at all.
    pub fn lookup(&self) -> LinkLookup {
        match self.search.as_deref() {
            Some(term) if !term.is_empty() => LinkLookup::Search(term.to_string()),
            _ => LinkLookup::Page(Page::new(self.first, self.skip)),
        }
    }
}
