//! Archive entry classification
//!
//! All suffix and marker checks happen here. The scanner only matches on the
//! resulting [`EntryKind`].

use crate::config::IndexerConfig;

/// What an archive entry contributes to the catalogue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryKind {
    /// Source file: text is read and registered under `name`.
    Source { name: String },
    /// Compiled unit: `name` is registered with empty text if absent.
    Compiled { name: String },
    /// Facade part or nested type: `name` is not registered, its ancestor
    /// packages are.
    Excluded { name: String },
    /// Source or compiled entry whose derived name is empty or has empty segments.
    Malformed,
    /// Directories, metadata, resources.
    Other,
}

/// Classify an archive entry path (always `/`-separated inside a zip).
pub fn classify(path: &str, config: &IndexerConfig) -> EntryKind {
    if path.ends_with('/') || !path.starts_with(config.package_root.as_str()) {
        return EntryKind::Other;
    }

    if let Some(name) = derive_name(path, &config.source_suffix) {
        return match name {
            Some(name) => EntryKind::Source { name },
            None => EntryKind::Malformed,
        };
    }

    if let Some(name) = derive_name(path, &config.compiled_suffix) {
        return match name {
            Some(name) if is_excluded_compiled(&name, config) => EntryKind::Excluded { name },
            Some(name) => EntryKind::Compiled { name },
            None => EntryKind::Malformed,
        };
    }

    EntryKind::Other
}

/// Strip `suffix` and turn `/` into `.`.
///
/// Outer `None`: the path does not end with `suffix`. Inner `None`: it does,
/// but the derived name is empty or has an empty segment.
pub fn derive_name(path: &str, suffix: &str) -> Option<Option<String>> {
    let stem = path.strip_suffix(suffix)?;
    let name = stem.replace('/', ".");
    if name.is_empty() || name.split('.').any(str::is_empty) {
        return Some(None);
    }
    Some(Some(name))
}

fn is_excluded_compiled(name: &str, config: &IndexerConfig) -> bool {
    (!config.facade_marker.is_empty() && name.contains(config.facade_marker.as_str()))
        || name.contains(config.nested_separator)
}
