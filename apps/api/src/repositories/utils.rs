//! Shared utility functions for repositories
//!
//! This module provides common functions used across repositories.

/// Escape special characters in ILIKE patterns to prevent pattern injection.
///
/// ILIKE uses `%` for any sequence and `_` for single character wildcards.
/// If user input contains these characters, they must be escaped to match literally.
///
/// # Example
/// ```
/// use linkboard_api::repositories::utils::escape_ilike;
///
/// let input = "100%";
/// let escaped = escape_ilike(input);
/// assert_eq!(escaped, r"100\%");
/// ```
pub fn escape_ilike(pattern: &str) -> String {
    pattern
        .replace('\\', r"\\")
        .replace('%', r"\%")
        .replace('_', r"\_")
}

/// Wrap an escaped term so ILIKE matches it anywhere in the column
pub fn contains_pattern(term: &str) -> String {
    format!("%{}%", escape_ilike(term))
}

// ============================================================================
// SQL Column Constants
// ============================================================================

/// SQL columns for link queries
pub const LINK_COLUMNS: &str = "id, url, description, posted_by_id, created_at";

/// SQL columns for vote queries
pub const VOTE_COLUMNS: &str = "id, user_id, link_id, created_at";

/// SQL columns for user queries
pub const USER_COLUMNS: &str = "id, username, email, created_at";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_ilike_no_special_chars() {
        assert_eq!(escape_ilike("hello world"), "hello world");
    }

    #[test]
    fn test_escape_ilike_percent() {
        assert_eq!(escape_ilike("100% complete"), r"100\% complete");
    }

    #[test]
    fn test_escape_ilike_underscore() {
        assert_eq!(escape_ilike("test_case"), r"test\_case");
    }

    #[test]
    fn test_escape_ilike_all_special() {
        assert_eq!(escape_ilike(r"100%_\test"), r"100\%\_\\test");
    }

    #[test]
    fn test_contains_pattern() {
        assert_eq!(contains_pattern("foo"), "%foo%");
        assert_eq!(contains_pattern("a_b"), r"%a\_b%");
    }
}
