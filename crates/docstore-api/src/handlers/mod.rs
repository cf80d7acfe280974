//! HTTP handlers, organized by resource.

pub mod document;
pub mod files;
pub mod folder;
pub mod health;
