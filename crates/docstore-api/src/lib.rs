//! # docstore-api
//!
//! HTTP layer for DocStore: routing, request/response DTOs, and the
//! mapping from domain errors to HTTP responses.

pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod router;
pub mod state;
