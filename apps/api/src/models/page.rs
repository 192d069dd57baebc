//! Offset/limit window over an ordered collection

/// Pagination window built from `first`/`skip` arguments
///
/// Out-of-range arguments never fail: a negative `skip` starts at the
/// beginning and a negative `first` selects nothing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Page {
    /// Number of leading items to drop
    pub offset: i64,
    /// Maximum number of items to keep, `None` for all
    pub limit: Option<i64>,
}

impl Page {
    pub fn new(first: Option<i32>, skip: Option<i32>) -> Self {
        Self {
            offset: skip.map_or(0, |skip| i64::from(skip.max(0))),
            limit: first.map(|first| i64::from(first.max(0))),
        }
    }
}
