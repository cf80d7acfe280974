//! Unified folder+document listing projection.

pub mod entry;

pub use entry::{EntryKind, FileEntry};
