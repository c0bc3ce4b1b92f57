//! CLI command implementations

use anyhow::Context;
use std::path::{Path, PathBuf};
use stdlens_core::match_catalogue;
use stdlens_indexer::{split_search_path, Coordinator, IndexOutcome, IndexerConfig};

/// Search path from the flag, else `$CLASSPATH`, else nothing.
pub fn resolve_search_path(flag: Option<&str>) -> Vec<PathBuf> {
    match flag {
        Some(list) => split_search_path(list),
        None => std::env::var_os("CLASSPATH")
            .map(split_search_path)
            .unwrap_or_default(),
    }
}

/// The config file is optional; a broken one is not.
pub fn load_config(path: &Path) -> anyhow::Result<IndexerConfig> {
    if !path.exists() {
        tracing::debug!("No config at {}, using defaults", path.display());
        return Ok(IndexerConfig::default());
    }
    IndexerConfig::load(path).with_context(|| format!("Failed to load config {}", path.display()))
}

fn build(config: &IndexerConfig, search_path: &[PathBuf]) -> IndexOutcome {
    if search_path.is_empty() {
        tracing::warn!("Search path is empty; pass --search-path or set CLASSPATH");
    }
    let outcome = Coordinator::new(config.clone()).run_full_index(search_path);
    for skipped in &outcome.report.archives_skipped {
        tracing::warn!("Skipped {}: {}", skipped.path.display(), skipped.reason);
    }
    outcome
}

pub fn search(config: &IndexerConfig, search_path: &[PathBuf], query: &str) -> anyhow::Result<()> {
    let outcome = build(config, search_path);

    let mut hits = 0;
    for (name, text) in outcome.catalogue.search_text(query) {
        println!("Found in {}{}:\n{}", name, config.source_suffix, text);
        hits += 1;
    }

    tracing::info!("{} of {} symbols contain {:?}", hits, outcome.catalogue.len(), query);
    Ok(())
}

pub fn fuzzy_match(
    config: &IndexerConfig,
    search_path: &[PathBuf],
    query: &str,
    limit: Option<usize>,
    json: bool,
) -> anyhow::Result<()> {
    let outcome = build(config, search_path);
    let scores = match_catalogue(query, &outcome.catalogue);

    if json {
        println!("{}", serde_json::to_string_pretty(&scores)?);
        return Ok(());
    }

    let ranked = scores.ranked();
    let shown = limit.unwrap_or(ranked.len());
    for (name, score) in ranked.into_iter().take(shown) {
        println!("{:>8.4}  {}", score, name);
    }
    Ok(())
}

pub fn index(config: &IndexerConfig, search_path: &[PathBuf], json: bool) -> anyhow::Result<()> {
    let outcome = build(config, search_path);

    if json {
        println!("{}", serde_json::to_string_pretty(&outcome.catalogue)?);
        return Ok(());
    }

    let report = &outcome.report;
    println!("symbols:          {}", outcome.catalogue.len());
    for (kind, count) in outcome.catalogue.kind_counts() {
        println!("  {:<16}{}", format!("{:?}", kind).to_lowercase(), count);
    }
    println!("archives scanned: {}", report.archives_scanned.len());
    println!("archives skipped: {}", report.archives_skipped.len());
    println!("excluded units:   {}", report.excluded_units);
    println!("malformed names:  {}", report.malformed_entries);
    println!("ignored entries:  {}", report.ignored_entries);
    Ok(())
}
