//! Folder entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A folder in the document hierarchy.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Folder {
    /// Unique folder identifier.
    pub id: i64,
    /// Folder name.
    pub name: String,
    /// Parent folder ID (null for root-level folders).
    pub parent_id: Option<i64>,
    /// Identifier of the creating principal.
    pub created_by: String,
    /// When the folder was created.
    pub created_at: DateTime<Utc>,
    /// When the folder was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Data required to create a new folder.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewFolder {
    /// Folder name.
    pub name: String,
    /// Parent folder (None for root).
    pub parent_id: Option<i64>,
    /// Identifier of the creating principal.
    pub created_by: String,
}

/// Partial field set for folder updates.
///
/// `parent_id` is doubly optional: the outer `Option` distinguishes
/// "field absent from the patch" from an explicit move to root (`Some(None)`).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FolderPatch {
    /// New name, if changing.
    pub name: Option<String>,
    /// New parent, if changing (`Some(None)` moves to root).
    pub parent_id: Option<Option<i64>>,
}

impl FolderPatch {
    /// Whether the patch carries no changes at all.
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.parent_id.is_none()
    }
}
