//! Stdlens Core: symbol catalogue, text lookup and fuzzy matcher

pub mod model;
pub mod catalogue;
pub mod matcher;


pub use model::{ancestors, Symbol, SymbolKind};
pub use catalogue::Catalogue;
pub use matcher::{levenshtein, similarity, score, match_candidates, match_catalogue, ScoreMap, SUBSTRING_BONUS};
