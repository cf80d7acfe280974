//! Unified folder+document listing handler.

use axum::Json;
use axum::extract::{Query, State};

use docstore_core::types::{PageRequest, ParentFilter, SortDirection, SortKey};
use docstore_entity::listing::FileEntry;
use docstore_service::listing::ListingQuery;

use crate::dto::request::ListingParams;
use crate::dto::response::PagedApiResponse;
use crate::error::ApiResult;
use crate::extractors::parse_parent;
use crate::state::AppState;

/// GET /api/files?folder_id=&search=&sort=&order=&page=&limit=
///
/// Without a folder parameter this lists the root level, unlike the
/// per-entity listings which default to "anywhere".
pub async fn list_files(
    State(state): State<AppState>,
    Query(params): Query<ListingParams>,
) -> ApiResult<Json<PagedApiResponse<FileEntry>>> {
    let raw_folder = params.folder_id.as_deref().or(params.parent_id.as_deref());
    let query = ListingQuery {
        folder: parse_parent(raw_folder, ParentFilter::Root)?,
        search: params.search,
        sort: SortKey::parse(params.sort.as_deref()),
        direction: SortDirection::parse(params.order.as_deref()),
        page: PageRequest::new(params.page.unwrap_or(1), params.limit.unwrap_or(10)),
    };

    let page = state.listing_service.list(&query).await?;
    Ok(Json(PagedApiResponse::from(page)))
}
