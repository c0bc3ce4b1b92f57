//! Fuzzy matcher: edit-distance similarity plus a substring bonus
//!
//! Scores are only comparable within one query's result set. A candidate that
//! contains the query scores at least [`SUBSTRING_BONUS`], so the range is
//! `[0.0, 2.0]` rather than `[0.0, 1.0]`.

use crate::catalogue::Catalogue;
use serde::Serialize;
use std::cmp::Ordering;
use std::collections::HashMap;

/// Added to the similarity when the folded candidate contains the folded query.
pub const SUBSTRING_BONUS: f64 = 1.0;

/// Levenshtein distance over `char`s, using two rolling rows.
pub fn levenshtein(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    // Keep the rows as short as the shorter input.
    let (long, short) = if a.len() >= b.len() { (&a, &b) } else { (&b, &a) };

    let mut prev: Vec<usize> = (0..=short.len()).collect();
    let mut curr = vec![0; short.len() + 1];

    for (i, lc) in long.iter().enumerate() {
        curr[0] = i + 1;
        for (j, sc) in short.iter().enumerate() {
            let cost = if lc == sc { 0 } else { 1 };
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[short.len()]
}

/// `1 - distance / max_len` on already-folded strings; `1.0` when both are empty.
pub fn similarity(query: &str, candidate: &str) -> f64 {
    let max_len = query.chars().count().max(candidate.chars().count());
    if max_len == 0 {
        return 1.0;
    }
    1.0 - levenshtein(query, candidate) as f64 / max_len as f64
}

/// Full score for one pair: case-folded similarity, plus the substring bonus.
pub fn score(query: &str, candidate: &str) -> f64 {
    score_folded(&query.to_lowercase(), &candidate.to_lowercase())
}

fn score_folded(query: &str, candidate: &str) -> f64 {
    let mut s = similarity(query, candidate);
    if candidate.contains(query) {
        s += SUBSTRING_BONUS;
    }
    s
}

/// Score `query` against every candidate.
///
/// Duplicate candidates collapse onto one key with the same score. No
/// threshold or truncation is applied.
pub fn match_candidates<I, S>(query: &str, candidates: I) -> ScoreMap
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let folded_query = query.to_lowercase();
    let mut scores = HashMap::new();
    for candidate in candidates {
        let candidate = candidate.as_ref();
        let s = score_folded(&folded_query, &candidate.to_lowercase());
        scores.insert(candidate.to_string(), s);
    }
    ScoreMap { scores }
}

/// Score `query` against every name in a catalogue.
pub fn match_catalogue(query: &str, catalogue: &Catalogue) -> ScoreMap {
    match_candidates(query, catalogue.iter().map(|(name, _)| name))
}

/// Candidate name -> score for a single query.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ScoreMap {
    scores: HashMap<String, f64>,
}

impl ScoreMap {
    pub fn get(&self, name: &str) -> Option<f64> {
        self.scores.get(name).copied()
    }

    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.scores.iter().map(|(name, s)| (name.as_str(), *s))
    }

    /// Entries ordered best first.
    ///
    /// Ties on score go to the shorter name, then to the lexicographically
    /// smaller one, so the order is total and stable across runs.
    pub fn ranked(&self) -> Vec<(&str, f64)> {
        let mut entries: Vec<_> = self.iter().collect();
        entries.sort_by(|a, b| rank_order(*a, *b));
        entries
    }

    /// The single best entry under the [`ranked`](Self::ranked) order.
    pub fn best(&self) -> Option<(&str, f64)> {
        self.iter().min_by(|a, b| rank_order(*a, *b))
    }
}

fn rank_order(a: (&str, f64), b: (&str, f64)) -> Ordering {
    b.1.total_cmp(&a.1)
        .then_with(|| a.0.chars().count().cmp(&b.0.chars().count()))
        .then_with(|| a.0.cmp(b.0))
}

impl FromIterator<(String, f64)> for ScoreMap {
    fn from_iter<T: IntoIterator<Item = (String, f64)>>(iter: T) -> Self {
        ScoreMap {
            scores: iter.into_iter().collect(),
        }
    }
}
