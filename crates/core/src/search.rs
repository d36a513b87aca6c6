//! Pagination and listing-search helpers.
//!
//! Lives in `core` (zero internal deps) so both the repository layer and
//! the API layer share the same clamping rules.

// ---------------------------------------------------------------------------
// Pagination defaults
// ---------------------------------------------------------------------------

/// Default number of campaigns per listing page.
pub const DEFAULT_PAGE_SIZE: i64 = 20;

/// Maximum number of campaigns per listing page.
pub const MAX_PAGE_SIZE: i64 = 100;

/// Maximum length of a free-text search term.
pub const MAX_SEARCH_LENGTH: usize = 200;

/// Clamp a 1-based page number; anything below 1 (or absent) becomes 1.
pub fn clamp_page(page: Option<i64>) -> i64 {
    page.unwrap_or(1).max(1)
}

/// Clamp a page size into `1..=MAX_PAGE_SIZE`, defaulting when absent.
pub fn clamp_limit(limit: Option<i64>) -> i64 {
    limit.unwrap_or(DEFAULT_PAGE_SIZE).clamp(1, MAX_PAGE_SIZE)
}

/// Row offset for a clamped page/limit pair.
pub fn page_offset(page: i64, limit: i64) -> i64 {
    (page - 1) * limit
}

/// Total page count for a row count under the given limit.
pub fn total_pages(total: i64, limit: i64) -> i64 {
    if total == 0 {
        0
    } else {
        (total + limit - 1) / limit
    }
}

// ---------------------------------------------------------------------------
// Free-text search
// ---------------------------------------------------------------------------

/// Turn a raw search term into an `ILIKE` pattern.
///
/// Escapes the LIKE metacharacters (`\`, `%`, `_`) in the user input and
/// wraps it for substring matching. Returns `None` when the term is blank
/// or longer than [`MAX_SEARCH_LENGTH`].
pub fn like_pattern(term: &str) -> Option<String> {
    let trimmed = term.trim();
    if trimmed.is_empty() || trimmed.len() > MAX_SEARCH_LENGTH {
        return None;
    }

    let mut escaped = String::with_capacity(trimmed.len() + 2);
    escaped.push('%');
    for c in trimmed.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped.push('%');
    Some(escaped)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_defaults_to_first() {
        assert_eq!(clamp_page(None), 1);
        assert_eq!(clamp_page(Some(0)), 1);
        assert_eq!(clamp_page(Some(-3)), 1);
        assert_eq!(clamp_page(Some(7)), 7);
    }

    #[test]
    fn limit_is_clamped_to_bounds() {
        assert_eq!(clamp_limit(None), DEFAULT_PAGE_SIZE);
        assert_eq!(clamp_limit(Some(0)), 1);
        assert_eq!(clamp_limit(Some(10_000)), MAX_PAGE_SIZE);
        assert_eq!(clamp_limit(Some(50)), 50);
    }

    #[test]
    fn offset_follows_page_and_limit() {
        assert_eq!(page_offset(1, 20), 0);
        assert_eq!(page_offset(3, 20), 40);
    }

    #[test]
    fn total_pages_rounds_up() {
        assert_eq!(total_pages(0, 20), 0);
        assert_eq!(total_pages(1, 20), 1);
        assert_eq!(total_pages(20, 20), 1);
        assert_eq!(total_pages(21, 20), 2);
    }

    #[test]
    fn like_pattern_wraps_and_escapes() {
        assert_eq!(like_pattern("shoe"), Some("%shoe%".to_string()));
        assert_eq!(like_pattern("  shoe "), Some("%shoe%".to_string()));
        assert_eq!(like_pattern("50%_off"), Some("%50\\%\\_off%".to_string()));
    }

    #[test]
    fn blank_or_oversized_terms_yield_no_pattern() {
        assert_eq!(like_pattern("   "), None);
        let long = "x".repeat(MAX_SEARCH_LENGTH + 1);
        assert_eq!(like_pattern(&long), None);
    }
}
