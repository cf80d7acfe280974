//! The polymorphic entry type returned by the unified file listing.
//!
//! `FileEntry` exists only transiently in listing responses; it is never
//! persisted.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::document::Document;
use crate::folder::Folder;

/// Discriminator for unified listing entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    /// A document entry.
    Document,
    /// A folder entry.
    Folder,
}

impl EntryKind {
    /// The lexicographic label used when sorting by kind.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Document => "document",
            Self::Folder => "folder",
        }
    }
}

/// A folder or document normalized to common listing fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileEntry {
    /// Entity ID (unique within its kind).
    pub id: i64,
    /// Entry name.
    pub name: String,
    /// Whether this is a folder or a document.
    #[serde(rename = "type")]
    pub kind: EntryKind,
    /// Size in bytes; `None` for folders.
    #[serde(rename = "size", default, skip_serializing_if = "Option::is_none")]
    pub size_bytes: Option<i64>,
    /// Containing folder (parent for folders).
    pub folder_id: Option<i64>,
    /// Identifier of the creating principal.
    pub created_by: String,
    /// When the entity was created.
    pub created_at: DateTime<Utc>,
}

impl FileEntry {
    /// Size used for numeric sorting; folders count as 0.
    pub fn sort_size(&self) -> i64 {
        self.size_bytes.unwrap_or(0)
    }
}

impl From<Folder> for FileEntry {
    fn from(folder: Folder) -> Self {
        Self {
            id: folder.id,
            name: folder.name,
            kind: EntryKind::Folder,
            size_bytes: None,
            folder_id: folder.parent_id,
            created_by: folder.created_by,
            created_at: folder.created_at,
        }
    }
}

impl From<Document> for FileEntry {
    fn from(doc: Document) -> Self {
        Self {
            id: doc.id,
            name: doc.name,
            kind: EntryKind::Document,
            size_bytes: Some(doc.size_bytes),
            folder_id: doc.folder_id,
            created_by: doc.created_by,
            created_at: doc.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn folder() -> Folder {
        Folder {
            id: 7,
            name: "Reports".to_string(),
            parent_id: Some(1),
            created_by: "alice".to_string(),
            created_at: Utc.with_ymd_and_hms(2026, 1, 15, 9, 0, 0).unwrap(),
            updated_at: Utc.with_ymd_and_hms(2026, 1, 15, 9, 0, 0).unwrap(),
        }
    }

    fn document() -> Document {
        Document {
            id: 3,
            name: "q1.pdf".to_string(),
            doc_type: "pdf".to_string(),
            size_bytes: 1024,
            folder_id: Some(7),
            created_by: "alice".to_string(),
            created_at: Utc.with_ymd_and_hms(2026, 2, 1, 12, 0, 0).unwrap(),
            updated_at: Utc.with_ymd_and_hms(2026, 2, 1, 12, 0, 0).unwrap(),
        }
    }

    #[test]
    fn test_folder_projection_has_no_size() {
        let entry = FileEntry::from(folder());
        assert_eq!(entry.kind, EntryKind::Folder);
        assert_eq!(entry.size_bytes, None);
        assert_eq!(entry.sort_size(), 0);
        assert_eq!(entry.folder_id, Some(1));
    }

    #[test]
    fn test_document_projection_keeps_size() {
        let entry = FileEntry::from(document());
        assert_eq!(entry.kind, EntryKind::Document);
        assert_eq!(entry.size_bytes, Some(1024));
        assert_eq!(entry.sort_size(), 1024);
    }

    #[test]
    fn test_kind_serializes_as_lowercase_type_field() {
        let entry = FileEntry::from(folder());
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["type"], "folder");
        assert!(json.get("size").is_none());

        let json = serde_json::to_value(FileEntry::from(document())).unwrap();
        assert_eq!(json["type"], "document");
        assert_eq!(json["size"], 1024);
    }
}
