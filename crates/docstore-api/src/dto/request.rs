//! Request DTOs and query-parameter shapes.

use serde::{Deserialize, Deserializer, Serialize};

/// Deserialize helper that turns a present JSON value (including `null`)
/// into `Some(...)`, so a doubly-optional field can distinguish "absent"
/// from "explicitly null".
fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// POST /api/folders body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateFolderRequest {
    /// Folder name.
    pub name: String,
    /// Parent folder (absent or null for root).
    #[serde(default)]
    pub parent_id: Option<i64>,
    /// Creating principal.
    pub created_by: String,
}

/// PUT /api/folders/{id} body.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateFolderRequest {
    /// New name, if changing.
    #[serde(default)]
    pub name: Option<String>,
    /// New parent, if changing; `null` moves to root.
    #[serde(default, deserialize_with = "double_option")]
    pub parent_id: Option<Option<i64>>,
}

/// POST /api/documents body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateDocumentRequest {
    /// Document name.
    pub name: String,
    /// MIME-like type label.
    #[serde(rename = "type")]
    pub doc_type: String,
    /// Size in bytes.
    pub size: i64,
    /// Containing folder (absent or null for root).
    #[serde(default)]
    pub folder_id: Option<i64>,
    /// Creating principal.
    pub created_by: String,
}

/// PUT /api/documents/{id} body.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateDocumentRequest {
    /// New name, if changing.
    #[serde(default)]
    pub name: Option<String>,
    /// New type label, if changing.
    #[serde(default, rename = "type")]
    pub doc_type: Option<String>,
    /// New size, if changing.
    #[serde(default)]
    pub size: Option<i64>,
    /// New containing folder, if changing; `null` moves to root.
    #[serde(default, deserialize_with = "double_option")]
    pub folder_id: Option<Option<i64>>,
}

/// POST /api/documents/bulk-delete body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BulkDeleteRequest {
    /// Documents to delete.
    pub ids: Vec<i64>,
}

/// POST /api/documents/move body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoveDocumentsRequest {
    /// Documents to move.
    pub ids: Vec<i64>,
    /// Destination folder (absent or null for root).
    #[serde(default)]
    pub folder_id: Option<i64>,
}

/// GET /api/folders query parameters.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FolderListParams {
    /// Parent restriction; the literal `"null"` selects root-level folders.
    pub parent_id: Option<String>,
}

/// GET /api/documents query parameters.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DocumentListParams {
    /// Containing-folder restriction; `"null"` selects root-level documents.
    pub folder_id: Option<String>,
    /// Exact type label match.
    #[serde(rename = "type")]
    pub doc_type: Option<String>,
    /// Substring match on name.
    pub search: Option<String>,
    /// Sort key.
    pub sort: Option<String>,
    /// Sort direction.
    pub order: Option<String>,
}

/// GET /api/files query parameters.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListingParams {
    /// Containing-folder restriction (absent means root level).
    pub folder_id: Option<String>,
    /// Accepted alias for `folder_id`.
    pub parent_id: Option<String>,
    /// Page number (1-based).
    pub page: Option<u64>,
    /// Items per page.
    pub limit: Option<u64>,
    /// Sort key.
    pub sort: Option<String>,
    /// Sort direction.
    pub order: Option<String>,
    /// Substring match on entry names.
    pub search: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_folder_distinguishes_absent_from_null() {
        let absent: UpdateFolderRequest = serde_json::from_str(r#"{"name":"x"}"#).unwrap();
        assert_eq!(absent.parent_id, None);

        let null: UpdateFolderRequest = serde_json::from_str(r#"{"parent_id":null}"#).unwrap();
        assert_eq!(null.parent_id, Some(None));

        let set: UpdateFolderRequest = serde_json::from_str(r#"{"parent_id":7}"#).unwrap();
        assert_eq!(set.parent_id, Some(Some(7)));
    }

    #[test]
    fn test_create_document_json_field_names() {
        let req: CreateDocumentRequest = serde_json::from_str(
            r#"{"name":"q1.pdf","type":"pdf","size":1024,"folder_id":2,"created_by":"alice"}"#,
        )
        .unwrap();
        assert_eq!(req.doc_type, "pdf");
        assert_eq!(req.size, 1024);
        assert_eq!(req.folder_id, Some(2));
    }
}
