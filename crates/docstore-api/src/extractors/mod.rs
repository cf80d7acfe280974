//! Query-parameter helpers shared by handlers.

pub mod parent;

pub use parent::parse_parent;
