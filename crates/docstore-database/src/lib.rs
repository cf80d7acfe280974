//! # docstore-database
//!
//! PostgreSQL access layer for DocStore: connection pool management,
//! migrations, and the folder/document repositories.

pub mod connection;
pub mod migration;
pub mod repositories;
