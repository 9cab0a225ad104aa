//! Exhaustive paging over a remote listing endpoint.

use crate::error::Result;

/// Page size used by the bulk listing entry points.
///
/// The describe endpoints accept page sizes in `1..=100`.
pub const DEFAULT_PAGE_SIZE: usize = 100;

/// Fetches every page of a listing and flattens the pages in fetch order.
///
/// `fetch_page` is called with `(page_size, page_number)`, page numbers
/// starting at 1. Paging continues while a returned page's length equals
/// `page_size`; any other length (including an empty page) ends the
/// listing. A listing whose size is an exact multiple of `page_size`
/// therefore costs one extra call that returns an empty page.
///
/// # Panics
///
/// Panics if `page_size` is zero.
///
/// # Errors
///
/// Returns the first error from `fetch_page`; pages fetched before the
/// failure are discarded.
pub fn fetch_all<T, F>(mut fetch_page: F, page_size: usize) -> Result<Vec<T>>
where
    F: FnMut(usize, usize) -> Result<Vec<T>>,
{
    assert!(page_size > 0, "page_size must be positive");

    let mut all = Vec::new();
    let mut page_number = 1;

    loop {
        let page = fetch_page(page_size, page_number)?;
        let page_len = page.len();
        all.extend(page);

        if page_len != page_size {
            return Ok(all);
        }

        page_number += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    /// Fetches all of `0..total` through a fake page source with page size
    /// `page_size`, returning the result and the number of calls made.
    fn fetch_numbers(total: usize, page_size: usize) -> (Vec<usize>, usize) {
        let items: Vec<usize> = (0..total).collect();
        let mut calls = 0;

        let result = fetch_all(
            |size, number| {
                calls += 1;
                let start = (number - 1) * size;
                let end = (start + size).min(items.len());
                Ok(items
                    .get(start..end)
                    .map_or_else(Vec::new, <[usize]>::to_vec))
            },
            page_size,
        )
        .expect("fake source never fails");

        (result, calls)
    }

    #[test]
    fn test_empty_listing() {
        let (result, calls) = fetch_numbers(0, 10);
        assert!(result.is_empty());
        assert_eq!(calls, 1);
    }

    #[test]
    fn test_short_first_page() {
        let (result, calls) = fetch_numbers(9, 10);
        assert_eq!(result, (0..9).collect::<Vec<_>>());
        assert_eq!(calls, 1);
    }

    #[test]
    fn test_exact_page_fetches_one_extra() {
        // 10 items at page size 10: the full first page forces a second
        // call that comes back empty.
        let (result, calls) = fetch_numbers(10, 10);
        assert_eq!(result, (0..10).collect::<Vec<_>>());
        assert_eq!(calls, 2);
    }

    #[test]
    fn test_one_past_page_boundary() {
        let (result, calls) = fetch_numbers(11, 10);
        assert_eq!(result, (0..11).collect::<Vec<_>>());
        assert_eq!(calls, 2);
    }

    #[test]
    fn test_exact_multiple_fetches_one_extra() {
        let (result, calls) = fetch_numbers(20, 10);
        assert_eq!(result, (0..20).collect::<Vec<_>>());
        assert_eq!(calls, 3);
    }

    #[test]
    fn test_order_preserved_across_pages() {
        let (result, _) = fetch_numbers(25, 10);
        assert_eq!(result, (0..25).collect::<Vec<_>>());
    }

    #[test]
    fn test_overlong_page_ends_listing() {
        // A page larger than requested still gets appended, but does not
        // continue the listing.
        let mut calls = 0;

        let result = fetch_all(
            |_, _| {
                calls += 1;
                Ok((0..15).collect())
            },
            10,
        )
        .expect("fake source never fails");

        assert_eq!(result, (0..15).collect::<Vec<_>>());
        assert_eq!(calls, 1);
    }

    #[test]
    fn test_fetch_error_propagates() {
        let result = fetch_all(
            |size, number| {
                if number == 1 {
                    Ok(vec![0usize; size])
                } else {
                    Err(Error::MissingField { field: "DBName" })
                }
            },
            10,
        );

        assert!(matches!(result, Err(Error::MissingField { field: "DBName" })));
    }

    #[test]
    #[should_panic(expected = "page_size must be positive")]
    fn test_zero_page_size_panics() {
        let _ = fetch_all(|_, _| Ok(vec![0usize]), 0);
    }
}
