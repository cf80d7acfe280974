//! Folder CRUD and path handlers.

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;

use docstore_core::types::ParentFilter;
use docstore_entity::folder::{Folder, FolderPatch, NewFolder};

use crate::dto::request::{CreateFolderRequest, FolderListParams, UpdateFolderRequest};
use crate::dto::response::ApiResponse;
use crate::error::ApiResult;
use crate::extractors::parse_parent;
use crate::state::AppState;

/// GET /api/folders?parent_id=...
pub async fn list_folders(
    State(state): State<AppState>,
    Query(params): Query<FolderListParams>,
) -> ApiResult<Json<ApiResponse<Vec<Folder>>>> {
    let parent = parse_parent(params.parent_id.as_deref(), ParentFilter::Any)?;
    let folders = state.folder_service.list_folders(parent).await?;
    Ok(Json(ApiResponse::ok(folders)))
}

/// GET /api/folders/{id}
pub async fn get_folder(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<Json<ApiResponse<Folder>>> {
    let folder = state.folder_service.get_folder(id).await?;
    Ok(Json(ApiResponse::ok(folder)))
}

/// GET /api/folders/{id}/path
pub async fn get_folder_path(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<Json<ApiResponse<Vec<Folder>>>> {
    let path = state.folder_service.folder_path(id).await?;
    Ok(Json(ApiResponse::ok(path)))
}

/// POST /api/folders
pub async fn create_folder(
    State(state): State<AppState>,
    Json(req): Json<CreateFolderRequest>,
) -> ApiResult<(StatusCode, Json<ApiResponse<Folder>>)> {
    let folder = state
        .folder_service
        .create_folder(NewFolder {
            name: req.name,
            parent_id: req.parent_id,
            created_by: req.created_by,
        })
        .await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::ok(folder))))
}

/// PUT /api/folders/{id}
pub async fn update_folder(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(req): Json<UpdateFolderRequest>,
) -> ApiResult<Json<ApiResponse<Folder>>> {
    let folder = state
        .folder_service
        .update_folder(
            id,
            FolderPatch {
                name: req.name,
                parent_id: req.parent_id,
            },
        )
        .await?;
    Ok(Json(ApiResponse::ok(folder)))
}

/// DELETE /api/folders/{id}
///
/// Recursive. Responds with the pre-deletion snapshot of the folder.
pub async fn delete_folder(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<Json<ApiResponse<Folder>>> {
    let folder = state.folder_service.delete_folder(id).await?;
    Ok(Json(ApiResponse::ok(folder)))
}
