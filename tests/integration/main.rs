//! Integration tests for Stdlens
//!
//! These tests run the indexer, the catalogue lookups and the matcher together,
//! and drive the built binary against fixture archives.

use std::path::PathBuf;
use std::process::Command;
use stdlens_core::{match_catalogue, match_candidates, SymbolKind};
use stdlens_indexer::test_utils::{write_sample_sources, write_sample_stdlib};
use stdlens_indexer::{Coordinator, IndexerConfig};
use tempfile::TempDir;

fn fixture() -> (TempDir, Vec<PathBuf>) {
    let dir = TempDir::new().unwrap();
    let stdlib = write_sample_stdlib(dir.path());
    let sources = write_sample_sources(dir.path());
    let unrelated = dir.path().join("annotations-13.0.jar");
    (dir, vec![stdlib, unrelated, sources])
}

#[test]
fn test_index_then_substring_lookup() {
    let (_dir, search_path) = fixture();
    let outcome = Coordinator::default().run_full_index(&search_path);

    let hits: Vec<_> = outcome
        .catalogue
        .search_text("class")
        .map(|(name, _)| name)
        .collect();
    assert_eq!(hits, vec!["kotlin.Tuples", "kotlin.text.Regex"]);
    assert_eq!(outcome.report.entries_not_qualifying, 1);
}

#[test]
fn test_index_then_fuzzy_match() {
    let (_dir, search_path) = fixture();
    let catalogue = Coordinator::default().run_full_index(&search_path).catalogue;

    let scores = match_catalogue("regex", &catalogue);
    assert_eq!(scores.len(), catalogue.len());
    assert_eq!(scores.best().map(|(name, _)| name), Some("kotlin.text.Regex"));

    // Same result through the plain name-list contract
    let by_names = match_candidates("regex", catalogue.names());
    assert_eq!(scores, by_names);
}

#[test]
fn test_typo_still_ranks_intended_symbol_high() {
    let (_dir, search_path) = fixture();
    let catalogue = Coordinator::default().run_full_index(&search_path).catalogue;

    let scores = match_catalogue("kotlin.colections.list", &catalogue);
    assert_eq!(scores.best().map(|(name, _)| name), Some("kotlin.collections.List"));
}

#[test]
fn test_source_text_survives_alongside_compiled_stub() {
    let (_dir, search_path) = fixture();
    let mut reversed = search_path.clone();
    reversed.reverse();
    let config = IndexerConfig {
        parallel: false,
        ..IndexerConfig::default()
    };

    let forward = Coordinator::new(config.clone()).run_full_index(&search_path).catalogue;
    let backward = Coordinator::new(config).run_full_index(&reversed).catalogue;

    assert_eq!(forward, backward);
    assert_eq!(forward.get("kotlin.text.Regex").map(|s| s.kind), Some(SymbolKind::Source));
}

fn stdlens(dir: &TempDir, search_path: &[PathBuf]) -> Command {
    let joined = std::env::join_paths(search_path).unwrap();
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_stdlens"));
    cmd.current_dir(dir.path())
        .env_remove("CLASSPATH")
        .arg("--search-path")
        .arg(joined);
    cmd
}

#[test]
fn test_cli_search() {
    let (dir, search_path) = fixture();
    let output = stdlens(&dir, &search_path).args(["search", "listOf"]).output().unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Found in kotlin.collections.Collections.kt:"));
    assert!(!stdout.contains("kotlin.Tuples"));
}

#[test]
fn test_cli_match_limit() {
    let (dir, search_path) = fixture();
    let output = stdlens(&dir, &search_path)
        .args(["match", "map", "--limit", "1"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<_> = stdout.lines().collect();
    assert_eq!(lines.len(), 1);
    assert!(lines[0].ends_with("kotlin.collections.Map"));
}

#[test]
fn test_cli_index_json() {
    let (dir, search_path) = fixture();
    let output = stdlens(&dir, &search_path).args(["index", "--json"]).output().unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("\"kotlin.collections.List\": \"\""));
}

#[test]
fn test_cli_rejects_broken_config() {
    let (dir, search_path) = fixture();
    std::fs::write(dir.path().join("stdlens.toml"), "parallel = \"sometimes\"").unwrap();

    let output = stdlens(&dir, &search_path).arg("index").output().unwrap();
    assert!(!output.status.success());
}

#[test]
fn test_cli_version_ignores_broken_config() {
    let (dir, search_path) = fixture();
    std::fs::write(dir.path().join("stdlens.toml"), "parallel = \"sometimes\"").unwrap();

    let output = stdlens(&dir, &search_path).arg("version").output().unwrap();
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("Stdlens v"));
}
