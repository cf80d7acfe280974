//! Response DTOs.
//!
//! Every endpoint replies with the `{status, data}` envelope; the unified
//! listing adds a `pagination` block.

use serde::{Deserialize, Serialize};

use docstore_core::types::PageResponse;

/// Standard success response wrapper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T: Serialize> {
    /// Always `"success"`.
    pub status: String,
    /// Response data.
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    /// Creates a successful response.
    pub fn ok(data: T) -> Self {
        Self {
            status: "success".to_string(),
            data,
        }
    }
}

/// Pagination block for the unified listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pagination {
    /// Total matched items across both entity types.
    pub total: u64,
    /// Current page (1-based).
    pub page: u64,
    /// Items per page.
    pub limit: u64,
    /// Total pages (`ceil(total / limit)`).
    #[serde(rename = "totalPages")]
    pub total_pages: u64,
}

/// Success envelope carrying a paginated slice.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PagedApiResponse<T: Serialize> {
    /// Always `"success"`.
    pub status: String,
    /// The items on this page.
    pub data: Vec<T>,
    /// Pagination metadata.
    pub pagination: Pagination,
}

impl<T: Serialize> From<PageResponse<T>> for PagedApiResponse<T> {
    fn from(page: PageResponse<T>) -> Self {
        Self {
            status: "success".to_string(),
            data: page.items,
            pagination: Pagination {
                total: page.total,
                page: page.page,
                limit: page.limit,
                total_pages: page.total_pages,
            },
        }
    }
}

/// Standard error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Always `"error"`.
    pub status: String,
    /// Human-readable message.
    pub message: String,
}

impl ErrorResponse {
    /// Creates an error response body.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            status: "error".to_string(),
            message: message.into(),
        }
    }
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Overall status.
    pub status: String,
    /// Crate version.
    pub version: String,
    /// Database connectivity.
    pub database: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use docstore_core::types::PageRequest;

    #[test]
    fn test_success_envelope_shape() {
        let json = serde_json::to_value(ApiResponse::ok(vec![1, 2, 3])).unwrap();
        assert_eq!(json["status"], "success");
        assert_eq!(json["data"], serde_json::json!([1, 2, 3]));
    }

    #[test]
    fn test_paginated_envelope_uses_camel_case_total_pages() {
        let page = PageResponse::new(vec![1, 2, 3, 4, 5], &PageRequest::new(2, 5), 20);
        let json = serde_json::to_value(PagedApiResponse::from(page)).unwrap();
        assert_eq!(json["pagination"]["total"], 20);
        assert_eq!(json["pagination"]["totalPages"], 4);
        assert_eq!(json["pagination"]["page"], 2);
        assert_eq!(json["pagination"]["limit"], 5);
    }

    #[test]
    fn test_error_envelope_shape() {
        let json = serde_json::to_value(ErrorResponse::new("nope")).unwrap();
        assert_eq!(json["status"], "error");
        assert_eq!(json["message"], "nope");
    }
}
