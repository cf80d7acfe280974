//! Pagination types for list endpoints.

use serde::{Deserialize, Serialize};

/// Default page size.
const DEFAULT_LIMIT: u64 = 10;
/// Maximum page size.
const MAX_LIMIT: u64 = 100;

/// Request parameters for paginated queries.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageRequest {
    /// Page number (1-based).
    #[serde(default = "default_page")]
    pub page: u64,
    /// Number of items per page.
    #[serde(default = "default_limit")]
    pub limit: u64,
}

impl PageRequest {
    /// Create a new page request, clamping out-of-range values.
    pub fn new(page: u64, limit: u64) -> Self {
        Self {
            page: page.max(1),
            limit: limit.clamp(1, MAX_LIMIT),
        }
    }

    /// Calculate the slice/SQL `OFFSET` value.
    pub fn offset(&self) -> u64 {
        (self.page.saturating_sub(1)) * self.limit
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 1,
            limit: DEFAULT_LIMIT,
        }
    }
}

/// Paginated response wrapper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageResponse<T: Serialize> {
    /// The items on this page.
    pub items: Vec<T>,
    /// Current page number (1-based).
    pub page: u64,
    /// Number of items per page.
    pub limit: u64,
    /// Total number of items across all pages.
    pub total: u64,
    /// Total number of pages (`ceil(total / limit)`).
    pub total_pages: u64,
}

impl<T: Serialize> PageResponse<T> {
    /// Create a new paginated response.
    pub fn new(items: Vec<T>, page: &PageRequest, total: u64) -> Self {
        Self {
            items,
            page: page.page,
            limit: page.limit,
            total,
            total_pages: total.div_ceil(page.limit.max(1)),
        }
    }
}

fn default_page() -> u64 {
    1
}

fn default_limit() -> u64 {
    DEFAULT_LIMIT
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_is_zero_based() {
        assert_eq!(PageRequest::new(1, 10).offset(), 0);
        assert_eq!(PageRequest::new(2, 5).offset(), 5);
        assert_eq!(PageRequest::new(4, 25).offset(), 75);
    }

    #[test]
    fn test_limit_clamped_to_max() {
        assert_eq!(PageRequest::new(1, 1000).limit, 100);
        assert_eq!(PageRequest::new(1, 0).limit, 1);
    }

    #[test]
    fn test_page_zero_normalized_to_first() {
        assert_eq!(PageRequest::new(0, 10).page, 1);
    }

    #[test]
    fn test_total_pages_is_ceiling() {
        let page = PageRequest::new(2, 5);
        let resp: PageResponse<i32> = PageResponse::new(vec![], &page, 20);
        assert_eq!(resp.total_pages, 4);

        let resp: PageResponse<i32> = PageResponse::new(vec![], &page, 21);
        assert_eq!(resp.total_pages, 5);

        let resp: PageResponse<i32> = PageResponse::new(vec![], &page, 0);
        assert_eq!(resp.total_pages, 0);
    }
}
