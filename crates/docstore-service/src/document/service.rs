//! Document CRUD with folder-reference and size/name validation.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use docstore_core::error::AppError;
use docstore_core::result::AppResult;
use docstore_core::types::DocumentFilter;
use docstore_database::repositories::document::{DocumentRepository, TypeCount};
use docstore_database::repositories::folder::FolderRepository;
use docstore_entity::document::{Document, DocumentPatch, NewDocument};

use crate::{MAX_NAME_LEN, MAX_TYPE_LEN};

/// Aggregate document statistics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentStats {
    /// Total document count (sum of per-type counts; type is a partition,
    /// so nothing is double-counted).
    pub total_documents: i64,
    /// Total size of all documents in bytes.
    pub total_size_bytes: i64,
    /// Per-type distribution.
    pub by_type: Vec<TypeCount>,
}

/// Manages document CRUD operations.
#[derive(Debug, Clone)]
pub struct DocumentService {
    /// Document repository.
    document_repo: Arc<DocumentRepository>,
    /// Folder repository, for folder-reference validation.
    folder_repo: Arc<FolderRepository>,
}

impl DocumentService {
    /// Creates a new document service.
    pub fn new(document_repo: Arc<DocumentRepository>, folder_repo: Arc<FolderRepository>) -> Self {
        Self {
            document_repo,
            folder_repo,
        }
    }

    /// Lists documents matching the given filter.
    pub async fn list_documents(&self, filter: &DocumentFilter) -> AppResult<Vec<Document>> {
        self.document_repo.find_all(filter).await
    }

    /// Gets a document by ID.
    pub async fn get_document(&self, document_id: i64) -> AppResult<Document> {
        self.document_repo
            .find_by_id(document_id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Document {document_id} not found")))
    }

    /// Creates a new document.
    ///
    /// All checks run before any store mutation; the first failing check
    /// short-circuits.
    pub async fn create_document(&self, data: NewDocument) -> AppResult<Document> {
        validate_name(&data.name)?;
        validate_type(&data.doc_type)?;
        validate_size(data.size_bytes)?;
        if let Some(folder_id) = data.folder_id {
            self.require_folder(folder_id).await?;
        }

        let document = self.document_repo.create(&data).await?;

        info!(
            document_id = document.id,
            folder_id = ?document.folder_id,
            "Document created"
        );

        Ok(document)
    }

    /// Updates a document; the patch is re-validated field by field.
    pub async fn update_document(
        &self,
        document_id: i64,
        patch: DocumentPatch,
    ) -> AppResult<Document> {
        self.get_document(document_id).await?;

        if let Some(name) = &patch.name {
            validate_name(name)?;
        }
        if let Some(doc_type) = &patch.doc_type {
            validate_type(doc_type)?;
        }
        if let Some(size_bytes) = patch.size_bytes {
            validate_size(size_bytes)?;
        }
        if let Some(Some(folder_id)) = patch.folder_id {
            self.require_folder(folder_id).await?;
        }

        let document = self
            .document_repo
            .update(document_id, &patch)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Document {document_id} not found")))?;

        info!(document_id, "Document updated");
        Ok(document)
    }

    /// Deletes a document, returning its pre-deletion snapshot.
    pub async fn delete_document(&self, document_id: i64) -> AppResult<Document> {
        let document = self
            .document_repo
            .delete(document_id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Document {document_id} not found")))?;

        info!(document_id, "Document deleted");
        Ok(document)
    }

    /// Deletes a batch of documents, returning the pre-deletion snapshot of
    /// matched rows. Empty input is a no-op.
    pub async fn bulk_delete_documents(&self, ids: &[i64]) -> AppResult<Vec<Document>> {
        let deleted = self.document_repo.bulk_delete(ids).await?;
        info!(requested = ids.len(), deleted = deleted.len(), "Documents bulk-deleted");
        Ok(deleted)
    }

    /// Moves a batch of documents into a folder (or to root).
    ///
    /// A non-null destination is validated first; a missing destination
    /// yields an empty result and performs no mutation.
    pub async fn move_documents(
        &self,
        ids: &[i64],
        folder_id: Option<i64>,
    ) -> AppResult<Vec<Document>> {
        if let Some(dest) = folder_id {
            if self.folder_repo.find_by_id(dest).await?.is_none() {
                warn!(folder_id = dest, "Move skipped: destination folder missing");
                return Ok(Vec::new());
            }
        }

        let moved = self.document_repo.move_to_folder(ids, folder_id).await?;
        info!(moved = moved.len(), folder_id = ?folder_id, "Documents moved");
        Ok(moved)
    }

    /// Composes type-distribution and total-size aggregates.
    pub async fn stats(&self) -> AppResult<DocumentStats> {
        let by_type = self.document_repo.count_by_type().await?;
        let total_size_bytes = self.document_repo.total_size().await?;
        let total_documents = by_type.iter().map(|t| t.count).sum();

        Ok(DocumentStats {
            total_documents,
            total_size_bytes,
            by_type,
        })
    }

    async fn require_folder(&self, folder_id: i64) -> AppResult<()> {
        self.folder_repo
            .find_by_id(folder_id)
            .await?
            .ok_or_else(|| AppError::validation(format!("Folder {folder_id} does not exist")))?;
        Ok(())
    }
}

fn validate_name(name: &str) -> AppResult<()> {
    if name.trim().is_empty() {
        return Err(AppError::validation("Document name cannot be empty"));
    }
    // Character count, not byte count.
    if name.chars().count() > MAX_NAME_LEN {
        return Err(AppError::validation(format!(
            "Document name cannot exceed {MAX_NAME_LEN} characters"
        )));
    }
    Ok(())
}

fn validate_type(doc_type: &str) -> AppResult<()> {
    if doc_type.chars().count() > MAX_TYPE_LEN {
        return Err(AppError::validation(format!(
            "Document type cannot exceed {MAX_TYPE_LEN} characters"
        )));
    }
    Ok(())
}

fn validate_size(size_bytes: i64) -> AppResult<()> {
    if size_bytes < 0 {
        return Err(AppError::validation("Document size cannot be negative"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use docstore_core::error::ErrorKind;

    #[test]
    fn test_negative_size_rejected() {
        let err = validate_size(-5).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Validation);
        assert!(validate_size(0).is_ok());
        assert!(validate_size(1024).is_ok());
    }

    #[test]
    fn test_whitespace_name_rejected() {
        assert!(validate_name("q1.pdf").is_ok());
        assert_eq!(
            validate_name(" \t ").unwrap_err().kind,
            ErrorKind::Validation
        );
    }

    #[test]
    fn test_type_length_limit() {
        assert!(validate_type("application/pdf").is_ok());
        assert!(validate_type(&"t".repeat(50)).is_ok());
        assert_eq!(
            validate_type(&"t".repeat(51)).unwrap_err().kind,
            ErrorKind::Validation
        );
    }

    #[test]
    fn test_limits_count_characters_not_bytes() {
        assert!(validate_name(&"ü".repeat(255)).is_ok());
        assert_eq!(
            validate_name(&"ü".repeat(256)).unwrap_err().kind,
            ErrorKind::Validation
        );
        assert!(validate_type(&"ß".repeat(50)).is_ok());
        assert_eq!(
            validate_type(&"ß".repeat(51)).unwrap_err().kind,
            ErrorKind::Validation
        );
    }
}
