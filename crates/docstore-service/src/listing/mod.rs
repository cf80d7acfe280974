//! Unified folder+document listing.

pub mod service;

pub use service::{ListingQuery, ListingService};
