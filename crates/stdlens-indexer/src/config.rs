//! Indexer configuration
//!
//! Every naming rule the indexer applies lives here. All fields are optional
//! in the TOML form and fall back to the Kotlin standard library layout:
//!
//! ```toml
//! archive_marker = "kotlin-stdlib"
//! package_root = "kotlin/"
//! source_suffix = ".kt"
//! compiled_suffix = ".class"
//! facade_marker = "Kt__"
//! nested_separator = "$"
//! parallel = true
//! ```

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IndexerConfig {
    /// Substring a search-path entry must contain to be opened as an archive.
    pub archive_marker: String,
    /// Only archive entries under this prefix are indexed. Empty disables the filter.
    pub package_root: String,
    pub source_suffix: String,
    pub compiled_suffix: String,
    /// Compiled entries whose name contains this are multi-file facade parts.
    pub facade_marker: String,
    /// Compiled entries whose name contains this are nested types.
    pub nested_separator: char,
    /// Scan qualifying archives on the rayon pool.
    pub parallel: bool,
}

impl Default for IndexerConfig {
    fn default() -> Self {
        IndexerConfig {
            archive_marker: "kotlin-stdlib".to_string(),
            package_root: "kotlin/".to_string(),
            source_suffix: ".kt".to_string(),
            compiled_suffix: ".class".to_string(),
            facade_marker: "Kt__".to_string(),
            nested_separator: '$',
            parallel: true,
        }
    }
}

impl IndexerConfig {
    pub fn from_toml_str(s: &str) -> Result<Self> {
        Ok(toml::from_str(s)?)
    }

    /// Load from a TOML file. Missing files are an I/O error; callers that
    /// treat the file as optional should check for existence first.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&content)?;
        tracing::debug!("Loaded indexer config from {}", path.display());
        Ok(config)
    }

    /// Whether a search-path entry should be opened at all.
    pub fn qualifies(&self, search_path_entry: &Path) -> bool {
        search_path_entry
            .to_string_lossy()
            .contains(self.archive_marker.as_str())
    }
}
