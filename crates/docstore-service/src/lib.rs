//! # docstore-service
//!
//! Business rules atop the DocStore repositories: folder tree management
//! with cycle prevention, document validation, and the unified
//! folder+document listing.

pub mod document;
pub mod folder;
pub mod listing;

/// Maximum length of folder and document names.
pub const MAX_NAME_LEN: usize = 255;
/// Maximum length of document type labels.
pub const MAX_TYPE_LEN: usize = 50;
