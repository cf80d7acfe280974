//! Sorting types for list endpoints.

use serde::{Deserialize, Serialize};

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    /// Ascending order.
    Asc,
    /// Descending order.
    Desc,
}

impl Default for SortDirection {
    fn default() -> Self {
        Self::Desc
    }
}

impl SortDirection {
    /// Parse a query-string value, falling back to the default instead of
    /// erroring on unrecognized input.
    pub fn parse(raw: Option<&str>) -> Self {
        match raw {
            Some("asc") => Self::Asc,
            Some("desc") => Self::Desc,
            _ => Self::default(),
        }
    }

    /// Return the SQL keyword for this direction.
    pub fn as_sql(&self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}

/// Fields a folder/document listing can be sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    /// Lexicographic by name.
    Name,
    /// Lexicographic by type label (groups folders and documents).
    Type,
    /// Numeric by size in bytes.
    Size,
    /// Chronological by creation time.
    CreatedAt,
}

impl Default for SortKey {
    fn default() -> Self {
        Self::CreatedAt
    }
}

impl SortKey {
    /// Parse a query-string value, falling back to the default instead of
    /// erroring on unrecognized input.
    pub fn parse(raw: Option<&str>) -> Self {
        match raw {
            Some("name") => Self::Name,
            Some("type") => Self::Type,
            Some("size") => Self::Size,
            Some("created_at") => Self::CreatedAt,
            _ => Self::default(),
        }
    }

    /// The `documents` table column backing this key.
    pub fn document_column(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Type => "doc_type",
            Self::Size => "size_bytes",
            Self::CreatedAt => "created_at",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unrecognized_sort_falls_back_to_default() {
        assert_eq!(SortKey::parse(Some("owner")), SortKey::CreatedAt);
        assert_eq!(SortKey::parse(None), SortKey::CreatedAt);
        assert_eq!(SortDirection::parse(Some("sideways")), SortDirection::Desc);
    }

    #[test]
    fn test_known_values_parse() {
        assert_eq!(SortKey::parse(Some("name")), SortKey::Name);
        assert_eq!(SortKey::parse(Some("size")), SortKey::Size);
        assert_eq!(SortDirection::parse(Some("asc")), SortDirection::Asc);
    }

    #[test]
    fn test_document_columns_are_safe_identifiers() {
        for key in [
            SortKey::Name,
            SortKey::Type,
            SortKey::Size,
            SortKey::CreatedAt,
        ] {
            assert!(
                key.document_column()
                    .chars()
                    .all(|c| c.is_ascii_alphanumeric() || c == '_')
            );
        }
    }
}
