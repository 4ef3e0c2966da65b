// Rust guideline compliant 2026-10-18

//! Pagination of item lists for inline-keyboard menus.

use serde::Serialize;

/// One page of a paginated list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Page<T> {
    /// Items on this page.
    pub items: Vec<T>,
    /// Requested page number (1-indexed).
    pub page: usize,
    /// Requested page size.
    pub per_page: usize,
    /// Total number of items across all pages.
    pub total: usize,
    /// Number of pages, `ceil(total / per_page)`.
    pub total_pages: usize,
    /// Whether a page follows this one.
    pub has_next: bool,
    /// Whether a page precedes this one.
    pub has_prev: bool,
}

/// Slices `items` into the requested page.
///
/// Page numbers start at 1. Out-of-range requests are not clamped: a page past
/// the end, page 0, and a page size of 0 all produce an empty `items` list
/// with the remaining fields computed as usual (`total_pages` is 0 when
/// `per_page` is 0).
///
/// # Arguments
///
/// * `items` - Full list to paginate
/// * `page` - Page number, starting at 1
/// * `per_page` - Items per page
///
/// # Returns
///
/// The requested page with navigation metadata.
#[must_use]
pub fn paginate_list<T: Clone>(items: &[T], page: usize, per_page: usize) -> Page<T> {
    let total = items.len();
    let total_pages = if per_page == 0 {
        0
    } else {
        total.div_ceil(per_page)
    };

    let slice: &[T] = match page.checked_sub(1) {
        Some(index) => {
            let start = index.saturating_mul(per_page).min(total);
            let end = start.saturating_add(per_page).min(total);
            &items[start..end]
        }
        None => &[],
    };

    Page {
        items: slice.to_vec(),
        page,
        per_page,
        total,
        total_pages,
        has_next: page < total_pages,
        has_prev: page > 1,
    }
}
