//! Document repository implementation.

use sqlx::{FromRow, PgPool};

use docstore_core::error::{AppError, ErrorKind};
use docstore_core::result::AppResult;
use docstore_core::types::{DocumentFilter, ParentFilter};
use docstore_entity::document::{Document, DocumentPatch, NewDocument};

/// A per-type document count row.
#[derive(Debug, Clone, FromRow, serde::Serialize, serde::Deserialize)]
pub struct TypeCount {
    /// The type label.
    pub doc_type: String,
    /// Number of documents carrying it.
    pub count: i64,
}

/// Repository for document CRUD and query operations.
#[derive(Debug, Clone)]
pub struct DocumentRepository {
    pool: PgPool,
}

impl DocumentRepository {
    /// Create a new document repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List documents matching the given filter criteria.
    ///
    /// Criteria are applied in sequence; the sort key maps to a fixed column
    /// name so no user input reaches the SQL text.
    pub async fn find_all(&self, filter: &DocumentFilter) -> AppResult<Vec<Document>> {
        let mut builder = sqlx::QueryBuilder::<sqlx::Postgres>::new(
            "SELECT * FROM documents WHERE TRUE",
        );
        Self::push_criteria(&mut builder, filter);
        builder.push(" ORDER BY ");
        builder.push(filter.sort.document_column());
        builder.push(" ");
        builder.push(filter.direction.as_sql());

        builder
            .build_query_as::<Document>()
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list documents", e))
    }

    fn push_criteria(builder: &mut sqlx::QueryBuilder<'_, sqlx::Postgres>, filter: &DocumentFilter) {
        match filter.folder {
            ParentFilter::Any => {}
            ParentFilter::Root => {
                builder.push(" AND folder_id IS NULL");
            }
            ParentFilter::Folder(id) => {
                builder.push(" AND folder_id = ").push_bind(id);
            }
        }
        if let Some(doc_type) = &filter.doc_type {
            builder
                .push(" AND doc_type = ")
                .push_bind(doc_type.clone());
        }
        if let Some(search) = &filter.search {
            // Pinned as case-insensitive regardless of store collation.
            builder
                .push(" AND name ILIKE ")
                .push_bind(format!("%{}%", escape_like(search)));
        }
    }

    /// Find a document by ID.
    pub async fn find_by_id(&self, id: i64) -> AppResult<Option<Document>> {
        sqlx::query_as::<_, Document>("SELECT * FROM documents WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find document", e))
    }

    /// Batch lookup by ID; an empty input returns empty without querying.
    pub async fn find_by_ids(&self, ids: &[i64]) -> AppResult<Vec<Document>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        sqlx::query_as::<_, Document>("SELECT * FROM documents WHERE id = ANY($1)")
            .bind(ids)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find documents", e))
    }

    /// Create a new document record.
    pub async fn create(&self, data: &NewDocument) -> AppResult<Document> {
        sqlx::query_as::<_, Document>(
            "INSERT INTO documents (name, doc_type, size_bytes, folder_id, created_by) \
             VALUES ($1, $2, $3, $4, $5) RETURNING *",
        )
        .bind(&data.name)
        .bind(&data.doc_type)
        .bind(data.size_bytes)
        .bind(data.folder_id)
        .bind(&data.created_by)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create document", e))
    }

    /// Apply a partial field set; `None` when the document is absent.
    pub async fn update(&self, id: i64, patch: &DocumentPatch) -> AppResult<Option<Document>> {
        if patch.is_empty() {
            return self.find_by_id(id).await;
        }

        let mut builder =
            sqlx::QueryBuilder::<sqlx::Postgres>::new("UPDATE documents SET updated_at = NOW()");
        if let Some(name) = &patch.name {
            builder.push(", name = ").push_bind(name);
        }
        if let Some(doc_type) = &patch.doc_type {
            builder.push(", doc_type = ").push_bind(doc_type);
        }
        if let Some(size_bytes) = patch.size_bytes {
            builder.push(", size_bytes = ").push_bind(size_bytes);
        }
        if let Some(folder_id) = patch.folder_id {
            builder.push(", folder_id = ").push_bind(folder_id);
        }
        builder.push(" WHERE id = ").push_bind(id);
        builder.push(" RETURNING *");

        builder
            .build_query_as::<Document>()
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update document", e))
    }

    /// Delete a document, returning its pre-deletion snapshot.
    pub async fn delete(&self, id: i64) -> AppResult<Option<Document>> {
        sqlx::query_as::<_, Document>("DELETE FROM documents WHERE id = $1 RETURNING *")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete document", e))
    }

    /// Delete a batch of documents in one statement, returning the
    /// pre-deletion snapshot of matched rows. Empty input is a no-op.
    pub async fn bulk_delete(&self, ids: &[i64]) -> AppResult<Vec<Document>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        sqlx::query_as::<_, Document>("DELETE FROM documents WHERE id = ANY($1) RETURNING *")
            .bind(ids)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete documents", e))
    }

    /// Reassign a batch of documents to a folder (or root), returning the
    /// post-move snapshot.
    pub async fn move_to_folder(
        &self,
        ids: &[i64],
        folder_id: Option<i64>,
    ) -> AppResult<Vec<Document>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        sqlx::query_as::<_, Document>(
            "UPDATE documents SET folder_id = $2, updated_at = NOW() \
             WHERE id = ANY($1) RETURNING *",
        )
        .bind(ids)
        .bind(folder_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to move documents", e))
    }

    /// Grouped document counts per type label.
    pub async fn count_by_type(&self) -> AppResult<Vec<TypeCount>> {
        sqlx::query_as::<_, TypeCount>(
            "SELECT doc_type, COUNT(*) AS count FROM documents \
             GROUP BY doc_type ORDER BY count DESC, doc_type ASC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count by type", e))
    }

    /// Total size of all documents in bytes (0 when there are no rows).
    pub async fn total_size(&self) -> AppResult<i64> {
        sqlx::query_scalar("SELECT COALESCE(SUM(size_bytes), 0)::BIGINT FROM documents")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to calculate total size", e)
            })
    }
}

/// Escape `%` and `_` so user input matches literally inside ILIKE patterns.
fn escape_like(raw: &str) -> String {
    raw.replace('\\', "\\\\").replace('%', "\\%").replace('_', "\\_")
}

#[cfg(test)]
mod tests {
    use super::*;

    // A lazy pool never opens a connection, so the short-circuit paths
    // below must return without reaching the store.
    fn detached_repo() -> DocumentRepository {
        let pool = PgPool::connect_lazy("postgres://docstore@localhost:1/docstore").unwrap();
        DocumentRepository::new(pool)
    }

    #[test]
    fn test_escape_like_wildcards() {
        assert_eq!(escape_like("100%_done"), "100\\%\\_done");
        assert_eq!(escape_like("plain"), "plain");
        assert_eq!(escape_like("back\\slash"), "back\\\\slash");
    }

    #[tokio::test]
    async fn test_find_by_ids_empty_input_skips_the_store() {
        let docs = detached_repo().find_by_ids(&[]).await.unwrap();
        assert!(docs.is_empty());
    }

    #[tokio::test]
    async fn test_bulk_delete_empty_input_is_a_no_op() {
        let deleted = detached_repo().bulk_delete(&[]).await.unwrap();
        assert!(deleted.is_empty());
    }

    #[tokio::test]
    async fn test_move_empty_input_is_a_no_op() {
        let moved = detached_repo().move_to_folder(&[], Some(3)).await.unwrap();
        assert!(moved.is_empty());
    }
}
