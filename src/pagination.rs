//! Pagination Module
//!
//! Page/limit windowing applied to every upstream list.
//!
//! Bounds policy: `page` and `limit` must both be at least 1 and `limit` at most
//! [`MAX_PAGE_LIMIT`]. Anything else is rejected with
//! [`GatewayError::InvalidParameter`]; nothing is silently defaulted.

use serde::Deserialize;

use crate::error::{GatewayError, Result};

/// Page used when a caller supplies none
pub const DEFAULT_PAGE: u32 = 1;

/// Page size used when a caller supplies none
pub const DEFAULT_LIMIT: u32 = 10;

/// Largest accepted page size
pub const MAX_PAGE_LIMIT: u32 = 100;

// == Page Request ==
/// A validated, 1-indexed page window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: u32,
    limit: u32,
}

impl PageRequest {
    /// Validates `page` and `limit` against the bounds policy.
    pub fn new(page: i64, limit: i64) -> Result<Self> {
        if page < 1 {
            return Err(GatewayError::InvalidParameter(format!(
                "page must be >= 1, got {page}"
            )));
        }
        if limit < 1 || limit > i64::from(MAX_PAGE_LIMIT) {
            return Err(GatewayError::InvalidParameter(format!(
                "limit must be between 1 and {MAX_PAGE_LIMIT}, got {limit}"
            )));
        }
        let page = u32::try_from(page).map_err(|_| {
            GatewayError::InvalidParameter(format!("page out of range: {page}"))
        })?;

        Ok(Self {
            page,
            limit: limit as u32,
        })
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn limit(&self) -> u32 {
        self.limit
    }

    /// Index of the first item of this page.
    pub fn offset(&self) -> usize {
        (self.page as usize - 1).saturating_mul(self.limit as usize)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
        }
    }
}

// == Page Query ==
/// Raw `?page=&limit=` query parameters as received from a caller.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct PageQuery {
    pub page: Option<i64>,
    pub limit: Option<i64>,
}

impl PageQuery {
    /// Applies defaults for absent values, then the bounds policy.
    pub fn into_request(self) -> Result<PageRequest> {
        PageRequest::new(
            self.page.unwrap_or(i64::from(DEFAULT_PAGE)),
            self.limit.unwrap_or(i64::from(DEFAULT_LIMIT)),
        )
    }
}

// == Slice ==
/// Returns the window of `items` selected by `page`, clipped to the list end.
///
/// A page past the end yields an empty vector.
pub fn slice<T: Clone>(items: &[T], page: PageRequest) -> Vec<T> {
    items
        .iter()
        .skip(page.offset())
        .take(page.limit() as usize)
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn numbers(n: usize) -> Vec<usize> {
        (0..n).collect()
    }

    #[test]
    fn test_slice_middle_page() {
        let items = numbers(25);
        let page = PageRequest::new(2, 10).unwrap();
        assert_eq!(slice(&items, page), (10..20).collect::<Vec<_>>());
    }

    #[test]
    fn test_slice_partial_last_page() {
        let items = numbers(25);
        let page = PageRequest::new(3, 10).unwrap();
        assert_eq!(slice(&items, page), vec![20, 21, 22, 23, 24]);
    }

    #[test]
    fn test_slice_out_of_range_page_is_empty() {
        let items = numbers(25);
        let page = PageRequest::new(99, 10).unwrap();
        assert!(slice(&items, page).is_empty());
    }

    #[test]
    fn test_rejects_page_below_one() {
        assert!(matches!(
            PageRequest::new(0, 10),
            Err(GatewayError::InvalidParameter(_))
        ));
        assert!(matches!(
            PageRequest::new(-3, 10),
            Err(GatewayError::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_rejects_limit_out_of_range() {
        assert!(matches!(
            PageRequest::new(1, 0),
            Err(GatewayError::InvalidParameter(_))
        ));
        assert!(matches!(
            PageRequest::new(1, i64::from(MAX_PAGE_LIMIT) + 1),
            Err(GatewayError::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_query_defaults_when_absent() {
        let request = PageQuery::default().into_request().unwrap();
        assert_eq!(request, PageRequest::default());
        assert_eq!(request.page(), 1);
        assert_eq!(request.limit(), 10);
    }

    #[test]
    fn test_query_rejects_present_but_invalid() {
        let query = PageQuery {
            page: Some(0),
            limit: None,
        };
        assert!(query.into_request().is_err());
    }

    proptest! {
        #[test]
        fn prop_slice_is_bounded_window(
            len in 0usize..300,
            page in 1i64..50,
            limit in 1i64..=100,
        ) {
            let items = numbers(len);
            let request = PageRequest::new(page, limit).unwrap();
            let window = slice(&items, request);

            prop_assert!(window.len() <= limit as usize);
            let start = request.offset();
            for (i, item) in window.iter().enumerate() {
                prop_assert_eq!(*item, start + i);
            }
            prop_assert_eq!(slice(&items, request), window);
        }
    }
}
