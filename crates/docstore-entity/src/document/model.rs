//! Document entity model.
//!
//! Documents carry metadata only (name/type/size); no content bytes are
//! stored or streamed by this system.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A document (file metadata record), optionally contained in a folder.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Document {
    /// Unique document identifier.
    pub id: i64,
    /// Document name.
    pub name: String,
    /// MIME-like type label (e.g. `pdf`, `image/png`).
    #[serde(rename = "type")]
    pub doc_type: String,
    /// Size in bytes.
    #[serde(rename = "size")]
    pub size_bytes: i64,
    /// Containing folder ID (null for root-level documents).
    pub folder_id: Option<i64>,
    /// Identifier of the creating principal.
    pub created_by: String,
    /// When the document was created.
    pub created_at: DateTime<Utc>,
    /// When the document was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Data required to create a new document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewDocument {
    /// Document name.
    pub name: String,
    /// MIME-like type label.
    pub doc_type: String,
    /// Size in bytes.
    pub size_bytes: i64,
    /// Containing folder (None for root).
    pub folder_id: Option<i64>,
    /// Identifier of the creating principal.
    pub created_by: String,
}

/// Partial field set for document updates.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DocumentPatch {
    /// New name, if changing.
    pub name: Option<String>,
    /// New type label, if changing.
    pub doc_type: Option<String>,
    /// New size, if changing.
    pub size_bytes: Option<i64>,
    /// New containing folder, if changing (`Some(None)` moves to root).
    pub folder_id: Option<Option<i64>>,
}

impl DocumentPatch {
    /// Whether the patch carries no changes at all.
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.doc_type.is_none()
            && self.size_bytes.is_none()
            && self.folder_id.is_none()
    }
}
