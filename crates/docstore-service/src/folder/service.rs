//! Folder CRUD with parent-existence validation and cycle prevention.

use std::sync::Arc;

use tracing::info;

use docstore_core::error::AppError;
use docstore_core::result::AppResult;
use docstore_core::types::ParentFilter;
use docstore_database::repositories::folder::FolderRepository;
use docstore_entity::folder::{Folder, FolderPatch, NewFolder};

use crate::MAX_NAME_LEN;

/// Manages folder CRUD operations.
#[derive(Debug, Clone)]
pub struct FolderService {
    /// Folder repository.
    folder_repo: Arc<FolderRepository>,
}

impl FolderService {
    /// Creates a new folder service.
    pub fn new(folder_repo: Arc<FolderRepository>) -> Self {
        Self { folder_repo }
    }

    /// Lists folders, optionally restricted to a parent.
    pub async fn list_folders(&self, parent: ParentFilter) -> AppResult<Vec<Folder>> {
        self.folder_repo.find_all(parent).await
    }

    /// Gets a folder by ID.
    pub async fn get_folder(&self, folder_id: i64) -> AppResult<Folder> {
        self.folder_repo
            .find_by_id(folder_id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Folder {folder_id} not found")))
    }

    /// Creates a new folder. A non-null parent must exist.
    pub async fn create_folder(&self, data: NewFolder) -> AppResult<Folder> {
        validate_name(&data.name)?;

        if let Some(parent_id) = data.parent_id {
            self.folder_repo
                .find_by_id(parent_id)
                .await?
                .ok_or_else(|| {
                    AppError::validation(format!("Parent folder {parent_id} does not exist"))
                })?;
        }

        let folder = self.folder_repo.create(&data).await?;

        info!(
            folder_id = folder.id,
            parent_id = ?folder.parent_id,
            "Folder created"
        );

        Ok(folder)
    }

    /// Updates a folder's name and/or parent.
    ///
    /// A parent change is rejected when the new parent does not exist or is
    /// the target itself or one of its descendants; rejection leaves the
    /// store untouched.
    pub async fn update_folder(&self, folder_id: i64, patch: FolderPatch) -> AppResult<Folder> {
        self.get_folder(folder_id).await?;

        if let Some(name) = &patch.name {
            validate_name(name)?;
        }

        if let Some(Some(new_parent_id)) = patch.parent_id {
            let ancestors = self.folder_repo.path_ids(new_parent_id).await?;
            if ancestors.is_empty() {
                return Err(AppError::validation(format!(
                    "Parent folder {new_parent_id} does not exist"
                )));
            }
            if creates_cycle(folder_id, &ancestors) {
                return Err(AppError::validation(
                    "Cannot move a folder into itself or one of its descendants",
                ));
            }
        }

        let folder = self
            .folder_repo
            .update(folder_id, &patch)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Folder {folder_id} not found")))?;

        info!(folder_id, "Folder updated");
        Ok(folder)
    }

    /// Recursively deletes a folder and all its contents. Returns the
    /// pre-deletion snapshot of the folder.
    pub async fn delete_folder(&self, folder_id: i64) -> AppResult<Folder> {
        let folder = self
            .folder_repo
            .delete_recursive(folder_id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Folder {folder_id} not found")))?;

        info!(folder_id, "Folder deleted recursively");
        Ok(folder)
    }

    /// Gets the ancestor chain from root to the given folder.
    pub async fn folder_path(&self, folder_id: i64) -> AppResult<Vec<Folder>> {
        let path = self.folder_repo.path(folder_id).await?;
        if path.is_empty() {
            return Err(AppError::not_found(format!("Folder {folder_id} not found")));
        }
        Ok(path)
    }
}

/// A parent assignment creates a cycle when the target folder appears in the
/// candidate parent's ancestor chain (the chain includes the candidate
/// itself, which also covers self-assignment).
fn creates_cycle(target_id: i64, parent_ancestors: &[i64]) -> bool {
    parent_ancestors.contains(&target_id)
}

fn validate_name(name: &str) -> AppResult<()> {
    if name.trim().is_empty() {
        return Err(AppError::validation("Folder name cannot be empty"));
    }
    // The limit counts characters, not bytes; multibyte names must not be
    // rejected early.
    if name.chars().count() > MAX_NAME_LEN {
        return Err(AppError::validation(format!(
            "Folder name cannot exceed {MAX_NAME_LEN} characters"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use docstore_core::error::ErrorKind;

    #[test]
    fn test_cycle_detected_for_descendant_parent() {
        // Moving folder 1 under folder 3 where 3's ancestry is 1 -> 2 -> 3.
        assert!(creates_cycle(1, &[1, 2, 3]));
    }

    #[test]
    fn test_cycle_detected_for_self_parent() {
        assert!(creates_cycle(5, &[5]));
    }

    #[test]
    fn test_disjoint_parent_is_not_a_cycle() {
        assert!(!creates_cycle(1, &[4, 5, 6]));
    }

    #[test]
    fn test_name_validation() {
        assert!(validate_name("Finance").is_ok());

        let err = validate_name("   ").unwrap_err();
        assert_eq!(err.kind, ErrorKind::Validation);

        let err = validate_name(&"x".repeat(256)).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Validation);
        assert!(validate_name(&"x".repeat(255)).is_ok());
    }

    #[test]
    fn test_name_limit_counts_characters_not_bytes() {
        // 255 two-byte characters exceed 255 bytes but stay within the limit.
        assert!(validate_name(&"ü".repeat(255)).is_ok());
        assert_eq!(
            validate_name(&"ü".repeat(256)).unwrap_err().kind,
            ErrorKind::Validation
        );
    }
}
