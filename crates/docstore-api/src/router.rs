//! Route definitions for the DocStore HTTP API.
//!
//! Resource routes are organized by domain and mounted under `/api`; the
//! health check lives at the root. The router receives `AppState` and passes
//! it to all handlers via Axum's `State` extractor.

use axum::{
    Router,
    routing::{delete, get, post, put},
};
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
///
/// Receives the fully-constructed `AppState` and threads it through
/// every route via `.with_state(state)`.
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .merge(folder_routes())
        .merge(document_routes())
        .merge(files_routes());

    let cors = build_cors_layer(&state);

    Router::new()
        .route("/health", get(handlers::health::health))
        .nest("/api", api_routes)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Folder CRUD and ancestry path
fn folder_routes() -> Router<AppState> {
    Router::new()
        .route("/folders", get(handlers::folder::list_folders))
        .route("/folders", post(handlers::folder::create_folder))
        .route("/folders/{id}", get(handlers::folder::get_folder))
        .route("/folders/{id}", put(handlers::folder::update_folder))
        .route("/folders/{id}", delete(handlers::folder::delete_folder))
        .route("/folders/{id}/path", get(handlers::folder::get_folder_path))
}

/// Document CRUD, stats and bulk operations
fn document_routes() -> Router<AppState> {
    Router::new()
        .route("/documents", get(handlers::document::list_documents))
        .route("/documents", post(handlers::document::create_document))
        .route("/documents/stats", get(handlers::document::document_stats))
        .route(
            "/documents/bulk-delete",
            post(handlers::document::bulk_delete_documents),
        )
        .route("/documents/move", post(handlers::document::move_documents))
        .route("/documents/{id}", get(handlers::document::get_document))
        .route("/documents/{id}", put(handlers::document::update_document))
        .route(
            "/documents/{id}",
            delete(handlers::document::delete_document),
        )
}

/// Unified folder+document listing
fn files_routes() -> Router<AppState> {
    Router::new().route("/files", get(handlers::files::list_files))
}

/// Build CORS layer from configuration
fn build_cors_layer(state: &AppState) -> CorsLayer {
    use axum::http::{HeaderValue, Method};
    use tower_http::cors::Any;

    let cors_config = &state.config.server.cors;

    let mut cors = CorsLayer::new();

    if cors_config.allowed_origins.contains(&"*".to_string()) {
        cors = cors.allow_origin(Any);
    } else {
        let origins: Vec<HeaderValue> = cors_config
            .allowed_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        cors = cors.allow_origin(origins);
    }

    let methods: Vec<Method> = cors_config
        .allowed_methods
        .iter()
        .filter_map(|m| m.parse().ok())
        .collect();
    cors = cors.allow_methods(methods);
    cors = cors.allow_headers(Any);
    cors = cors.max_age(std::time::Duration::from_secs(cors_config.max_age_seconds));

    cors
}
