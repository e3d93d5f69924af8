//! Listing state for the public site and the back office.
//!
//! Every view works the same way: the full collection is fetched into
//! memory via `reload()`, filters are pure functions re-evaluated over that
//! snapshot on each input change, and mutations are followed by another
//! `reload()`. Nothing is filtered or paginated store-side.

use serde::Serialize;

pub mod associates;
pub mod debounce;
pub mod events;
pub mod locations;

pub use associates::{filter_associates, AssociateDirectory, DIRECTORY_PAGE_SIZE};
pub use debounce::Debounced;
pub use events::{available_months, filter_events, group_by_month, EventsBoard, MonthSection};
pub use locations::filter_locations;

/// One page of a filtered listing.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page: usize,
    pub total_pages: usize,
    pub total_items: usize,
    pub has_next: bool,
    pub has_prev: bool,
}

/// Slices a filtered collection into fixed-size pages. Pages are 1-based;
/// out-of-range requests clamp to the nearest valid page so a stale page
/// number after a filter change still renders something.
pub fn paginate<T: Clone>(items: &[T], page: usize, page_size: usize) -> Page<T> {
    assert!(page_size > 0, "page_size must be positive");

    let total_items = items.len();
    let total_pages = usize::max(1, total_items.div_ceil(page_size));
    let page = page.clamp(1, total_pages);

    let start = (page - 1) * page_size;
    let end = usize::min(start + page_size, total_items);
    let items = if start < total_items {
        items[start..end].to_vec()
    } else {
        Vec::new()
    };

    Page {
        items,
        page,
        total_pages,
        total_items,
        has_next: page < total_pages,
        has_prev: page > 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nine_items_split_into_eight_plus_one() {
        let items: Vec<u32> = (0..9).collect();

        let first = paginate(&items, 1, 8);
        assert_eq!(first.items.len(), 8);
        assert!(first.has_next);
        assert!(!first.has_prev);

        let second = paginate(&items, 2, 8);
        assert_eq!(second.items, vec![8]);
        assert!(!second.has_next);
        assert!(second.has_prev);
    }

    #[test]
    fn empty_collection_still_has_one_page() {
        let page = paginate::<u32>(&[], 1, 8);
        assert!(page.items.is_empty());
        assert_eq!(page.total_pages, 1);
        assert!(!page.has_next);
    }

    #[test]
    fn out_of_range_page_clamps() {
        let items: Vec<u32> = (0..3).collect();
        let page = paginate(&items, 9, 8);
        assert_eq!(page.page, 1);
        assert_eq!(page.items.len(), 3);
    }
}
