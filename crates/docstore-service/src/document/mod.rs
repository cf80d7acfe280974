//! Document business rules.

pub mod service;

pub use service::{DocumentService, DocumentStats};
