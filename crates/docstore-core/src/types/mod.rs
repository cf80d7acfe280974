//! Shared types used across DocStore crates.

pub mod filter;
pub mod pagination;
pub mod sorting;

pub use filter::{DocumentFilter, ParentFilter};
pub use pagination::{PageRequest, PageResponse};
pub use sorting::{SortDirection, SortKey};
