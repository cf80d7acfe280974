//! Repository implementations over the PostgreSQL pool.
//!
//! Repositories surface absence as `Ok(None)` / empty collections, never as
//! errors; only store-level failures map to [`ErrorKind::Database`].
//!
//! [`ErrorKind::Database`]: docstore_core::error::ErrorKind::Database

pub mod document;
pub mod folder;
