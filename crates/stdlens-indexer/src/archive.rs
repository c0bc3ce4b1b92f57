//! Single-archive scanning
//!
//! The archive handle and each entry reader live only inside
//! [`scan_archive`], so both are released on every return path.

use crate::classify::{classify, EntryKind};
use crate::config::IndexerConfig;
use crate::error::{IndexerError, Result};
use stdlens_core::Catalogue;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};
use zip::ZipArchive;

/// Partial catalogue and counters for one archive.
#[derive(Debug, Clone, Default)]
pub struct ArchiveScan {
    pub path: PathBuf,
    pub catalogue: Catalogue,
    pub source_units: usize,
    pub compiled_units: usize,
    /// Facade parts and nested types: only their packages are registered.
    pub excluded_units: usize,
    pub ignored_entries: usize,
    pub malformed_entries: usize,
}

/// Build a partial catalogue from one archive.
///
/// Any I/O or zip failure aborts the whole archive and the partial result is
/// dropped. Malformed entry names are counted and skipped.
pub fn scan_archive(path: &Path, config: &IndexerConfig) -> Result<ArchiveScan> {
    if !path.is_file() {
        return Err(IndexerError::InvalidPath(path.to_path_buf()));
    }

    let file = File::open(path)?;
    let mut archive = ZipArchive::new(BufReader::new(file))?;

    let mut scan = ArchiveScan {
        path: path.to_path_buf(),
        ..ArchiveScan::default()
    };

    for i in 0..archive.len() {
        let mut entry = archive.by_index(i)?;

        match classify(entry.name(), config) {
            EntryKind::Source { name } => {
                // The declared size is untrusted, so let the buffer grow with the data.
                let mut bytes = Vec::new();
                entry.read_to_end(&mut bytes)?;
                let text = String::from_utf8_lossy(&bytes).into_owned();
                scan.catalogue.insert_source(&name, text);
                scan.source_units += 1;
            }
            EntryKind::Compiled { name } => {
                scan.catalogue.insert_compiled(&name);
                scan.compiled_units += 1;
            }
            EntryKind::Excluded { name } => {
                scan.catalogue.insert_ancestors(&name);
                scan.excluded_units += 1;
            }
            EntryKind::Malformed => {
                tracing::warn!("Skipping malformed entry name {:?} in {}", entry.name(), path.display());
                scan.malformed_entries += 1;
            }
            EntryKind::Other => {
                scan.ignored_entries += 1;
            }
        }
    }

    tracing::debug!(
        "Scanned {}: {} sources, {} compiled, {} excluded, {} ignored, {} malformed",
        path.display(),
        scan.source_units,
        scan.compiled_units,
        scan.excluded_units,
        scan.ignored_entries,
        scan.malformed_entries
    );

    Ok(scan)
}
