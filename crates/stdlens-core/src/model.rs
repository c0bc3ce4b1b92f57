//! Core data structures for the symbol catalogue

use serde::{Deserialize, Serialize};

/// How a symbol entered the catalogue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SymbolKind {
    /// Ancestor package synthesized from a qualified name. Never carries text.
    Package,
    /// Unit backed by a source file; text is the full file contents.
    Source,
    /// Unit only available in compiled form; text is empty.
    Compiled,
}

impl SymbolKind {
    /// Whether entries of this kind replace an existing entry with the same name.
    pub fn overwrites(self) -> bool {
        matches!(self, SymbolKind::Source)
    }
}

/// A single catalogue entry. The qualified name is the catalogue key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Symbol {
    pub kind: SymbolKind,
    /// Source text, or the empty string when only the compiled form exists.
    pub text: String,
}

impl Symbol {
    pub fn package() -> Self {
        Symbol {
            kind: SymbolKind::Package,
            text: String::new(),
        }
    }

    pub fn compiled() -> Self {
        Symbol {
            kind: SymbolKind::Compiled,
            text: String::new(),
        }
    }

    pub fn source(text: impl Into<String>) -> Self {
        Symbol {
            kind: SymbolKind::Source,
            text: text.into(),
        }
    }
}

/// Every strict ancestor of a dotted name, nearest first.
///
/// `"a.b.c"` yields `"a.b"` then `"a"`. A name without dots has no ancestors.
pub fn ancestors(name: &str) -> impl Iterator<Item = &str> {
    let mut rest = name;
    std::iter::from_fn(move || {
        let idx = rest.rfind('.')?;
        rest = &rest[..idx];
        if rest.is_empty() { None } else { Some(rest) }
    })
}
