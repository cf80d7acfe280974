//! Document CRUD, stats and bulk-operation handlers.

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;

use docstore_core::types::{DocumentFilter, ParentFilter, SortDirection, SortKey};
use docstore_entity::document::{Document, DocumentPatch, NewDocument};
use docstore_service::document::DocumentStats;

use crate::dto::request::{
    BulkDeleteRequest, CreateDocumentRequest, DocumentListParams, MoveDocumentsRequest,
    UpdateDocumentRequest,
};
use crate::dto::response::ApiResponse;
use crate::error::ApiResult;
use crate::extractors::parse_parent;
use crate::state::AppState;

/// GET /api/documents?folder_id=&type=&search=&sort=&order=
pub async fn list_documents(
    State(state): State<AppState>,
    Query(params): Query<DocumentListParams>,
) -> ApiResult<Json<ApiResponse<Vec<Document>>>> {
    let filter = DocumentFilter {
        folder: parse_parent(params.folder_id.as_deref(), ParentFilter::Any)?,
        doc_type: params.doc_type,
        search: params.search,
        sort: SortKey::parse(params.sort.as_deref()),
        direction: SortDirection::parse(params.order.as_deref()),
    };
    let documents = state.document_service.list_documents(&filter).await?;
    Ok(Json(ApiResponse::ok(documents)))
}

/// GET /api/documents/stats
pub async fn document_stats(
    State(state): State<AppState>,
) -> ApiResult<Json<ApiResponse<DocumentStats>>> {
    let stats = state.document_service.stats().await?;
    Ok(Json(ApiResponse::ok(stats)))
}

/// GET /api/documents/{id}
pub async fn get_document(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<Json<ApiResponse<Document>>> {
    let document = state.document_service.get_document(id).await?;
    Ok(Json(ApiResponse::ok(document)))
}

/// POST /api/documents
pub async fn create_document(
    State(state): State<AppState>,
    Json(req): Json<CreateDocumentRequest>,
) -> ApiResult<(StatusCode, Json<ApiResponse<Document>>)> {
    let document = state
        .document_service
        .create_document(NewDocument {
            name: req.name,
            doc_type: req.doc_type,
            size_bytes: req.size,
            folder_id: req.folder_id,
            created_by: req.created_by,
        })
        .await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::ok(document))))
}

/// PUT /api/documents/{id}
pub async fn update_document(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(req): Json<UpdateDocumentRequest>,
) -> ApiResult<Json<ApiResponse<Document>>> {
    let document = state
        .document_service
        .update_document(
            id,
            DocumentPatch {
                name: req.name,
                doc_type: req.doc_type,
                size_bytes: req.size,
                folder_id: req.folder_id,
            },
        )
        .await?;
    Ok(Json(ApiResponse::ok(document)))
}

/// DELETE /api/documents/{id}
///
/// Responds with the pre-deletion snapshot of the document.
pub async fn delete_document(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<Json<ApiResponse<Document>>> {
    let document = state.document_service.delete_document(id).await?;
    Ok(Json(ApiResponse::ok(document)))
}

/// POST /api/documents/bulk-delete
pub async fn bulk_delete_documents(
    State(state): State<AppState>,
    Json(req): Json<BulkDeleteRequest>,
) -> ApiResult<Json<ApiResponse<Vec<Document>>>> {
    let deleted = state
        .document_service
        .bulk_delete_documents(&req.ids)
        .await?;
    Ok(Json(ApiResponse::ok(deleted)))
}

/// POST /api/documents/move
pub async fn move_documents(
    State(state): State<AppState>,
    Json(req): Json<MoveDocumentsRequest>,
) -> ApiResult<Json<ApiResponse<Vec<Document>>>> {
    let moved = state
        .document_service
        .move_documents(&req.ids, req.folder_id)
        .await?;
    Ok(Json(ApiResponse::ok(moved)))
}
