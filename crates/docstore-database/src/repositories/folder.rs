//! Folder repository implementation.

use std::collections::HashMap;

use sqlx::PgPool;
use tracing::debug;

use docstore_core::error::{AppError, ErrorKind};
use docstore_core::result::AppResult;
use docstore_core::types::ParentFilter;
use docstore_entity::folder::{Folder, FolderPatch, NewFolder};

/// Repository for folder CRUD and tree queries.
#[derive(Debug, Clone)]
pub struct FolderRepository {
    pool: PgPool,
}

impl FolderRepository {
    /// Create a new folder repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List folders, optionally restricted to a parent (newest first).
    pub async fn find_all(&self, parent: ParentFilter) -> AppResult<Vec<Folder>> {
        let query = match parent {
            ParentFilter::Any => {
                sqlx::query_as::<_, Folder>("SELECT * FROM folders ORDER BY created_at DESC")
            }
            ParentFilter::Root => sqlx::query_as::<_, Folder>(
                "SELECT * FROM folders WHERE parent_id IS NULL ORDER BY created_at DESC",
            ),
            ParentFilter::Folder(id) => sqlx::query_as::<_, Folder>(
                "SELECT * FROM folders WHERE parent_id = $1 ORDER BY created_at DESC",
            )
            .bind(id),
        };

        query
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list folders", e))
    }

    /// Find a folder by ID.
    pub async fn find_by_id(&self, id: i64) -> AppResult<Option<Folder>> {
        sqlx::query_as::<_, Folder>("SELECT * FROM folders WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find folder", e))
    }

    /// Create a new folder.
    pub async fn create(&self, data: &NewFolder) -> AppResult<Folder> {
        sqlx::query_as::<_, Folder>(
            "INSERT INTO folders (name, parent_id, created_by) \
             VALUES ($1, $2, $3) RETURNING *",
        )
        .bind(&data.name)
        .bind(data.parent_id)
        .bind(&data.created_by)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create folder", e))
    }

    /// Apply a partial field set to a folder; `None` when the folder is absent.
    pub async fn update(&self, id: i64, patch: &FolderPatch) -> AppResult<Option<Folder>> {
        if patch.is_empty() {
            return self.find_by_id(id).await;
        }

        let mut builder =
            sqlx::QueryBuilder::<sqlx::Postgres>::new("UPDATE folders SET updated_at = NOW()");
        if let Some(name) = &patch.name {
            builder.push(", name = ").push_bind(name);
        }
        if let Some(parent_id) = patch.parent_id {
            builder.push(", parent_id = ").push_bind(parent_id);
        }
        builder.push(" WHERE id = ").push_bind(id);
        builder.push(" RETURNING *");

        builder
            .build_query_as::<Folder>()
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update folder", e))
    }

    /// Recursively delete a folder, its descendant folders, and all documents
    /// they own. Returns the pre-deletion snapshot of the folder, or `None`
    /// when the folder does not exist.
    ///
    /// Deletion is an explicit stack-driven depth-first walk so children are
    /// always removed before their parent; a leaf folder takes the same path
    /// with zero iterations.
    pub async fn delete_recursive(&self, id: i64) -> AppResult<Option<Folder>> {
        let Some(folder) = self.find_by_id(id).await? else {
            return Ok(None);
        };

        let mut children_of: HashMap<i64, Vec<i64>> = HashMap::new();
        let mut stack: Vec<i64> = vec![id];
        while let Some(current) = stack.pop() {
            let children: Vec<i64> =
                sqlx::query_scalar("SELECT id FROM folders WHERE parent_id = $1")
                    .bind(current)
                    .fetch_all(&self.pool)
                    .await
                    .map_err(|e| {
                        AppError::with_source(ErrorKind::Database, "Failed to list children", e)
                    })?;
            stack.extend(&children);
            children_of.insert(current, children);
        }

        let order = deletion_order(id, &children_of);
        for folder_id in &order {
            sqlx::query("DELETE FROM documents WHERE folder_id = $1")
                .bind(folder_id)
                .execute(&self.pool)
                .await
                .map_err(|e| {
                    AppError::with_source(
                        ErrorKind::Database,
                        "Failed to delete folder documents",
                        e,
                    )
                })?;
            sqlx::query("DELETE FROM folders WHERE id = $1")
                .bind(folder_id)
                .execute(&self.pool)
                .await
                .map_err(|e| {
                    AppError::with_source(ErrorKind::Database, "Failed to delete folder", e)
                })?;
        }

        debug!(folder_id = id, removed = order.len(), "Folder subtree deleted");
        Ok(Some(folder))
    }

    /// Get the ancestor chain for a folder, root first, target last.
    /// An empty chain means the folder does not exist.
    pub async fn path(&self, id: i64) -> AppResult<Vec<Folder>> {
        sqlx::query_as::<_, Folder>(
            "WITH RECURSIVE ancestors AS ( \
                SELECT f.*, 0 AS hops FROM folders f WHERE f.id = $1 \
                UNION ALL \
                SELECT f.*, a.hops + 1 FROM folders f \
                INNER JOIN ancestors a ON f.id = a.parent_id \
             ) SELECT id, name, parent_id, created_by, created_at, updated_at \
               FROM ancestors ORDER BY hops DESC",
        )
        .bind(id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to resolve path", e))
    }

    /// Ancestor chain as bare IDs, root first, target last.
    pub async fn path_ids(&self, id: i64) -> AppResult<Vec<i64>> {
        sqlx::query_scalar(
            "WITH RECURSIVE ancestors AS ( \
                SELECT f.id, f.parent_id, 0 AS hops FROM folders f WHERE f.id = $1 \
                UNION ALL \
                SELECT f.id, f.parent_id, a.hops + 1 FROM folders f \
                INNER JOIN ancestors a ON f.id = a.parent_id \
             ) SELECT id FROM ancestors ORDER BY hops DESC",
        )
        .bind(id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to resolve ancestry", e))
    }
}

/// Deletion order for a folder subtree: every child precedes its parent, the
/// root comes last. A leaf folder yields just itself.
fn deletion_order(root: i64, children_of: &HashMap<i64, Vec<i64>>) -> Vec<i64> {
    let mut order: Vec<i64> = Vec::new();
    let mut stack: Vec<i64> = vec![root];
    while let Some(current) = stack.pop() {
        order.push(current);
        if let Some(children) = children_of.get(&current) {
            stack.extend(children);
        }
    }
    order.reverse();
    order
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deletion_order_puts_children_before_parents() {
        let mut children_of = HashMap::new();
        children_of.insert(1, vec![2, 3]);
        children_of.insert(2, vec![4]);
        children_of.insert(3, Vec::new());
        children_of.insert(4, Vec::new());

        let order = deletion_order(1, &children_of);
        assert_eq!(order.len(), 4);

        let pos = |id: i64| order.iter().position(|&x| x == id).unwrap();
        for (&parent, children) in &children_of {
            for &child in children {
                assert!(pos(child) < pos(parent));
            }
        }
        assert_eq!(*order.last().unwrap(), 1);
    }

    #[test]
    fn test_deletion_order_for_a_leaf_folder() {
        assert_eq!(deletion_order(7, &HashMap::new()), vec![7]);

        let mut children_of = HashMap::new();
        children_of.insert(7, Vec::new());
        assert_eq!(deletion_order(7, &children_of), vec![7]);
    }

    #[test]
    fn test_deletion_order_covers_deep_chains() {
        // 10 -> 11 -> 12 -> 13
        let mut children_of = HashMap::new();
        children_of.insert(10, vec![11]);
        children_of.insert(11, vec![12]);
        children_of.insert(12, vec![13]);
        children_of.insert(13, Vec::new());

        assert_eq!(deletion_order(10, &children_of), vec![13, 12, 11, 10]);
    }
}
