// Rust guideline compliant 2026-10-18

//! Property-based tests for pagination.

use botkit_core::paginate_list;
use proptest::prelude::*;

#[test]
fn test_last_partial_page() {
    let items: Vec<u32> = (1..=25).collect();
    let page = paginate_list(&items, 3, 10);
    assert_eq!(page.items, vec![21, 22, 23, 24, 25]);
    assert_eq!(page.page, 3);
    assert_eq!(page.per_page, 10);
    assert_eq!(page.total, 25);
    assert_eq!(page.total_pages, 3);
    assert!(!page.has_next);
    assert!(page.has_prev);
}

#[test]
fn test_page_past_end_is_empty() {
    let items: Vec<u32> = (1..=25).collect();
    let page = paginate_list(&items, 7, 10);
    assert!(page.items.is_empty());
    assert!(!page.has_next);
    assert!(page.has_prev);
}

#[test]
fn test_empty_list() {
    let items: Vec<String> = Vec::new();
    let page = paginate_list(&items, 1, 10);
    assert!(page.items.is_empty());
    assert_eq!(page.total_pages, 0);
    assert!(!page.has_next);
    assert!(!page.has_prev);
}

#[test]
fn test_page_serializes_named_fields() {
    let items = vec!["a", "b", "c"];
    let page = paginate_list(&items, 2, 2);
    let json = serde_json::to_value(&page).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "items": ["c"],
            "page": 2,
            "per_page": 2,
            "total": 3,
            "total_pages": 2,
            "has_next": false,
            "has_prev": true,
        })
    );
}

proptest! {
    /// Property: page length follows min(per_page, max(0, total - per_page * (page - 1))).
    #[test]
    fn test_page_length(
        items in prop::collection::vec(any::<u16>(), 0..200),
        page in 1usize..30,
        per_page in 1usize..50,
    ) {
        let result = paginate_list(&items, page, per_page);
        let total = items.len();
        let remaining = total.saturating_sub(per_page * (page - 1));
        prop_assert_eq!(result.items.len(), per_page.min(remaining));
        prop_assert_eq!(result.total, total);
        prop_assert_eq!(result.total_pages, (total + per_page - 1) / per_page);
        prop_assert_eq!(result.has_next, page < result.total_pages);
        prop_assert_eq!(result.has_prev, page > 1);
    }

    /// Property: walking every page reproduces the list in order.
    #[test]
    fn test_pages_cover_list(
        items in prop::collection::vec(any::<u16>(), 0..200),
        per_page in 1usize..50,
    ) {
        let first = paginate_list(&items, 1, per_page);
        let mut collected = Vec::new();
        for page in 1..=first.total_pages {
            collected.extend(paginate_list(&items, page, per_page).items);
        }
        prop_assert_eq!(collected, items);
    }
}
