//! Application state shared across all handlers.

use std::sync::Arc;

use sqlx::PgPool;

use docstore_core::config::AppConfig;
use docstore_database::repositories::document::DocumentRepository;
use docstore_database::repositories::folder::FolderRepository;
use docstore_service::document::DocumentService;
use docstore_service::folder::FolderService;
use docstore_service::listing::ListingService;

/// Application state containing all shared dependencies.
///
/// Constructed once at startup by the composition root and passed to every
/// Axum handler via `State<AppState>`. All fields are `Arc`-wrapped for
/// cheap cloning across tasks; there is no hidden global state.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// PostgreSQL connection pool.
    pub db_pool: PgPool,
    /// Folder repository.
    pub folder_repo: Arc<FolderRepository>,
    /// Document repository.
    pub document_repo: Arc<DocumentRepository>,
    /// Folder service.
    pub folder_service: Arc<FolderService>,
    /// Document service.
    pub document_service: Arc<DocumentService>,
    /// Unified listing service.
    pub listing_service: Arc<ListingService>,
}

impl AppState {
    /// Wire repositories and services from a pool and configuration.
    pub fn new(config: AppConfig, db_pool: PgPool) -> Self {
        let folder_repo = Arc::new(FolderRepository::new(db_pool.clone()));
        let document_repo = Arc::new(DocumentRepository::new(db_pool.clone()));

        let folder_service = Arc::new(FolderService::new(Arc::clone(&folder_repo)));
        let document_service = Arc::new(DocumentService::new(
            Arc::clone(&document_repo),
            Arc::clone(&folder_repo),
        ));
        let listing_service = Arc::new(ListingService::new(
            Arc::clone(&folder_repo),
            Arc::clone(&document_repo),
        ));

        Self {
            config: Arc::new(config),
            db_pool,
            folder_repo,
            document_repo,
            folder_service,
            document_service,
            listing_service,
        }
    }
}
