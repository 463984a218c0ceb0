//! Sequential collection of paginated listings.

use std::future::Future;

use tracing::debug;

use super::{ApiError, ApiResult};
use crate::models::{Page, ValidationError};

/// Page size used when the caller has no preference.
pub const DEFAULT_PAGE_SIZE: u32 = 100;

/// Fetch every page of a listing and concatenate the items.
///
/// `fetch(limit, offset)` is called with `offset` advancing by `page_size`
/// until the accumulated count reaches the `total` reported by the latest
/// page, or a page comes back empty. Pages are requested one at a time since
/// each offset depends on the previous round.
///
/// If the server's `total` shrinks between pages the result may hold a few
/// more items than the final `total`. An empty page always ends the loop.
pub async fn collect_all_pages<T, F, Fut>(page_size: u32, mut fetch: F) -> ApiResult<Vec<T>>
where
    F: FnMut(u32, u32) -> Fut,
    Fut: Future<Output = ApiResult<Page<T>>>,
{
    if page_size == 0 {
        return Err(ApiError::Validation(ValidationError::NotPositive(
            "page_size",
        )));
    }

    let mut items = Vec::new();
    let mut offset: u32 = 0;
    let mut pages = 0usize;

    loop {
        let page = fetch(page_size, offset).await?;
        pages += 1;

        let received = page.items.len();
        items.extend(page.items);
        debug!(offset, received, total = page.total, "page received");

        if received == 0 || items.len() as u64 >= page.total {
            break;
        }

        offset = match offset.checked_add(page_size) {
            Some(next) => next,
            None => break,
        };
    }

    debug!(pages, items = items.len(), "listing collected");
    Ok(items)
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use proptest::prelude::*;
    use std::cell::RefCell;

    /// Serve `inventory` in pages, reporting `total` on every page.
    fn serve(inventory: &[u32], total: u64, limit: u32, offset: u32) -> Page<u32> {
        let start = (offset as usize).min(inventory.len());
        let end = (start + limit as usize).min(inventory.len());
        Page {
            items: inventory[start..end].to_vec(),
            total,
            limit: limit as u64,
            offset: offset as u64,
        }
    }

    #[test]
    fn test_collects_until_total() {
        let inventory: Vec<u32> = (0..5).collect();
        let offsets = RefCell::new(Vec::new());

        let items = block_on(collect_all_pages(2, |limit, offset| {
            offsets.borrow_mut().push(offset);
            let page = serve(&inventory, 5, limit, offset);
            async move { Ok(page) }
        }))
        .unwrap();

        assert_eq!(items, inventory);
        assert_eq!(*offsets.borrow(), vec![0, 2, 4]);
    }

    #[test]
    fn test_stops_on_empty_page() {
        // Server claims 10 but only has 3.
        let inventory: Vec<u32> = (0..3).collect();
        let calls = RefCell::new(0);

        let items = block_on(collect_all_pages(2, |limit, offset| {
            *calls.borrow_mut() += 1;
            let page = serve(&inventory, 10, limit, offset);
            async move { Ok(page) }
        }))
        .unwrap();

        assert_eq!(items.len(), 3);
        assert_eq!(*calls.borrow(), 3);
    }

    #[test]
    fn test_empty_listing_single_request() {
        let calls = RefCell::new(0);
        let items: Vec<u32> = block_on(collect_all_pages(100, |limit, offset| {
            *calls.borrow_mut() += 1;
            let page = serve(&[], 0, limit, offset);
            async move { Ok(page) }
        }))
        .unwrap();

        assert!(items.is_empty());
        assert_eq!(*calls.borrow(), 1);
    }

    #[test]
    fn test_zero_page_size_rejected() {
        let result: ApiResult<Vec<u32>> =
            block_on(collect_all_pages(0, |_, _| async { Ok(Page::complete(vec![1])) }));
        assert!(matches!(result, Err(ApiError::Validation(_))));
    }

    #[test]
    fn test_error_aborts() {
        let result: ApiResult<Vec<u32>> = block_on(collect_all_pages(2, |_, offset| async move {
            if offset == 0 {
                Ok(Page {
                    items: vec![1, 2],
                    total: 4,
                    limit: 2,
                    offset: 0,
                })
            } else {
                Err(ApiError::Network("connection reset".into()))
            }
        }));
        assert_eq!(result, Err(ApiError::Network("connection reset".into())));
    }

    proptest! {
        #[test]
        fn prop_terminates_and_never_loses_items(
            actual in 0usize..60,
            reported in 0u64..80,
            page_size in 1u32..12,
        ) {
            let inventory: Vec<u32> = (0..actual as u32).collect();
            let calls = RefCell::new(0usize);

            let items = block_on(collect_all_pages(page_size, |limit, offset| {
                *calls.borrow_mut() += 1;
                let page = serve(&inventory, reported, limit, offset);
                async move { Ok(page) }
            }))
            .unwrap();

            // One request per page of real inventory, plus the empty stop page.
            let pages = (actual + page_size as usize - 1) / page_size as usize;
            prop_assert!(*calls.borrow() <= pages + 1);
            prop_assert!(inventory.starts_with(&items));
            if reported as usize <= actual {
                prop_assert!(items.len() >= reported as usize);
            } else {
                prop_assert_eq!(items.len(), actual);
            }
        }
    }
}
