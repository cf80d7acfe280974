//! Typed filter criteria for repository queries.
//!
//! Filters are built as explicit criteria that repositories apply in
//! sequence, rather than through a shared mutable query builder.

use serde::{Deserialize, Serialize};

use super::sorting::{SortDirection, SortKey};

/// Tri-state restriction on a parent/containing folder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ParentFilter {
    /// No restriction.
    #[default]
    Any,
    /// Root level only (`parent_id IS NULL`).
    Root,
    /// Children of a specific folder.
    Folder(i64),
}

/// Criteria for document listing queries.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DocumentFilter {
    /// Containing-folder restriction.
    pub folder: ParentFilter,
    /// Exact type label match.
    pub doc_type: Option<String>,
    /// Case-insensitive substring match on name.
    pub search: Option<String>,
    /// Sort key (defaults to creation time).
    pub sort: SortKey,
    /// Sort direction (defaults to descending).
    pub direction: SortDirection,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter_sorts_newest_first() {
        let filter = DocumentFilter::default();
        assert_eq!(filter.folder, ParentFilter::Any);
        assert_eq!(filter.sort, SortKey::CreatedAt);
        assert_eq!(filter.direction, SortDirection::Desc);
    }
}
