//! Snapshot storage layer
//!
//! The analytics engine does not persist anything; this module only reads
//! snapshot and settings files from disk.

pub mod file_io;
pub mod snapshot;

pub use snapshot::Snapshot;
