//! Archive scanning and symbol catalogue construction

pub mod archive;
pub mod classify;
pub mod config;
pub mod coordinator;
pub mod error;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;


pub use archive::{scan_archive, ArchiveScan};
pub use classify::{classify, EntryKind};
pub use config::IndexerConfig;
pub use coordinator::{split_search_path, Coordinator, IndexOutcome, IndexReport, SkippedArchive};
pub use error::{IndexerError, Result};
