//! Orchestrates a full indexing pass over a search path

use crate::archive::{scan_archive, ArchiveScan};
use crate::config::IndexerConfig;
use crate::error::Result;
use rayon::prelude::*;
use serde::Serialize;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use stdlens_core::Catalogue;

/// A search-path entry that qualified but could not be indexed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedArchive {
    pub path: PathBuf,
    pub reason: String,
}

/// What a pass did, for hosts that want to surface skipped inputs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct IndexReport {
    /// Archives whose entries made it into the catalogue.
    pub archives_scanned: Vec<PathBuf>,
    pub archives_skipped: Vec<SkippedArchive>,
    /// Search-path entries without the archive marker.
    pub entries_not_qualifying: usize,
    pub source_units: usize,
    pub compiled_units: usize,
    pub excluded_units: usize,
    pub ignored_entries: usize,
    pub malformed_entries: usize,
}

impl IndexReport {
    fn record(&mut self, scan: &ArchiveScan) {
        self.archives_scanned.push(scan.path.clone());
        self.source_units += scan.source_units;
        self.compiled_units += scan.compiled_units;
        self.excluded_units += scan.excluded_units;
        self.ignored_entries += scan.ignored_entries;
        self.malformed_entries += scan.malformed_entries;
    }

    /// Archives plus individual entries that were dropped.
    pub fn skipped_count(&self) -> usize {
        self.archives_skipped.len() + self.malformed_entries
    }
}

/// Result of a full pass.
#[derive(Debug, Clone, Default)]
pub struct IndexOutcome {
    pub catalogue: Catalogue,
    pub report: IndexReport,
}

pub struct Coordinator {
    config: IndexerConfig,
}

impl Coordinator {
    pub fn new(config: IndexerConfig) -> Self {
        Coordinator { config }
    }

    /// Index every qualifying archive on `search_path`.
    ///
    /// Archives may be scanned in parallel, but partial catalogues are merged
    /// in search-path order, so the result never depends on scheduling.
    /// Failing archives are reported and skipped; this never fails as a whole.
    pub fn run_full_index<I, P>(&self, search_path: I) -> IndexOutcome
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        let mut report = IndexReport::default();
        let mut qualifying = Vec::new();

        for entry in search_path {
            let entry = entry.as_ref();
            if self.config.qualifies(entry) {
                qualifying.push(entry.to_path_buf());
            } else {
                tracing::debug!("Ignoring search-path entry {}", entry.display());
                report.entries_not_qualifying += 1;
            }
        }

        let scans: Vec<(PathBuf, Result<ArchiveScan>)> = if self.config.parallel {
            qualifying
                .into_par_iter()
                .map(|path| {
                    let scan = scan_archive(&path, &self.config);
                    (path, scan)
                })
                .collect()
        } else {
            qualifying
                .into_iter()
                .map(|path| {
                    let scan = scan_archive(&path, &self.config);
                    (path, scan)
                })
                .collect()
        };

        let mut catalogue = Catalogue::new();
        for (path, scan) in scans {
            match scan {
                Ok(scan) => {
                    report.record(&scan);
                    catalogue.merge(scan.catalogue);
                }
                Err(e) => {
                    tracing::warn!("Skipping archive {}: {}", path.display(), e);
                    report.archives_skipped.push(SkippedArchive {
                        path,
                        reason: e.to_string(),
                    });
                }
            }
        }

        tracing::info!(
            "Indexed {} symbols from {} archives ({} skipped)",
            catalogue.len(),
            report.archives_scanned.len(),
            report.archives_skipped.len()
        );

        IndexOutcome { catalogue, report }
    }
}

impl Default for Coordinator {
    fn default() -> Self {
        Self::new(IndexerConfig::default())
    }
}

/// Split an OS path-list string (`PATH`-style) into entries.
pub fn split_search_path(list: impl AsRef<OsStr>) -> Vec<PathBuf> {
    std::env::split_paths(list.as_ref())
        .filter(|p| !p.as_os_str().is_empty())
        .collect()
}
