//! Folder business rules.

pub mod service;

pub use service::FolderService;
