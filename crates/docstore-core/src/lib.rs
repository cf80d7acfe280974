//! # docstore-core
//!
//! Core crate for DocStore. Contains configuration schemas,
//! pagination/sorting types, and the unified error system.
//!
//! This crate has **no** internal dependencies on other DocStore crates.

pub mod config;
pub mod error;
pub mod result;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
