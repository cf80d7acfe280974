//! # docstore-entity
//!
//! Domain entity models for DocStore: folders, documents, and the
//! transient unified-listing projection.

pub mod document;
pub mod folder;
pub mod listing;
