//! Symbol catalogue: qualified name -> text, with ancestor packages materialized

use crate::model::{ancestors, Symbol, SymbolKind};
use serde::{Serialize, Serializer};
use std::collections::BTreeMap;

/// Mapping from fully-qualified symbol name to its symbol.
///
/// Source entries always overwrite; compiled and package entries are only
/// inserted when the name is absent. Every insert also materializes the
/// strict ancestor packages of the name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalogue {
    symbols: BTreeMap<String, Symbol>,
}

impl Catalogue {
    pub fn new() -> Self {
        Catalogue {
            symbols: BTreeMap::new(),
        }
    }

    /// Register a source-bearing unit, replacing whatever was there.
    pub fn insert_source(&mut self, name: &str, text: impl Into<String>) {
        self.insert(name, Symbol::source(text));
    }

    /// Register a compiled-only unit unless the name is already known.
    pub fn insert_compiled(&mut self, name: &str) {
        self.insert(name, Symbol::compiled());
    }

    /// Register a package unless the name is already known.
    pub fn insert_package(&mut self, name: &str) {
        self.insert(name, Symbol::package());
    }

    /// Insert a symbol under the precedence rules, then fill in its ancestors.
    pub fn insert(&mut self, name: &str, symbol: Symbol) {
        if !symbol.kind.overwrites() {
            self.insert_if_absent(name, symbol);
            return;
        }
        if let Some(prev) = self.symbols.insert(name.to_string(), symbol) {
            tracing::trace!("{} replaced {:?} entry", name, prev.kind);
        }
        self.insert_ancestors(name);
    }

    /// Insert only if the name is unknown, whatever the symbol kind.
    /// Ancestors are filled either way. Returns false if the name was taken.
    pub fn insert_if_absent(&mut self, name: &str, symbol: Symbol) -> bool {
        let inserted = self.put_if_absent(name, symbol);
        self.insert_ancestors(name);
        inserted
    }

    fn put_if_absent(&mut self, name: &str, symbol: Symbol) -> bool {
        if self.symbols.contains_key(name) {
            return false;
        }
        self.symbols.insert(name.to_string(), symbol);
        true
    }

    /// Materialize the strict ancestor packages of `name` without registering
    /// `name` itself.
    pub fn insert_ancestors(&mut self, name: &str) {
        for pkg in ancestors(name) {
            self.put_if_absent(pkg, Symbol::package());
        }
    }

    /// Fold another catalogue into this one with the same precedence rules.
    ///
    /// Merging partial catalogues in a fixed order gives the same result no
    /// matter how the partials were produced.
    pub fn merge(&mut self, other: Catalogue) {
        for (name, symbol) in other.symbols {
            self.insert(&name, symbol);
        }
    }

    pub fn get(&self, name: &str) -> Option<&Symbol> {
        self.symbols.get(name)
    }

    /// Text for a name; empty for packages and compiled-only units.
    pub fn text(&self, name: &str) -> Option<&str> {
        self.symbols.get(name).map(|s| s.text.as_str())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.symbols.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Iterate over all entries in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Symbol)> {
        self.symbols.iter().map(|(name, sym)| (name.as_str(), sym))
    }

    /// All symbol names, in name order. This is the candidate list the matcher takes.
    pub fn names(&self) -> Vec<String> {
        self.symbols.keys().cloned().collect()
    }

    /// Count of entries per kind.
    pub fn kind_counts(&self) -> BTreeMap<SymbolKind, usize> {
        let mut counts = BTreeMap::new();
        for sym in self.symbols.values() {
            *counts.entry(sym.kind).or_insert(0) += 1;
        }
        counts
    }

    /// Entries whose text contains `query` verbatim, in name order.
    ///
    /// Case-sensitive. Packages and compiled-only units have empty text, so
    /// they only match an empty query.
    pub fn search_text<'a>(&'a self, query: &'a str) -> impl Iterator<Item = (&'a str, &'a str)> {
        self.symbols
            .iter()
            .filter(move |(_, sym)| sym.text.contains(query))
            .map(|(name, sym)| (name.as_str(), sym.text.as_str()))
    }
}

impl Serialize for Catalogue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.symbols.iter().map(|(name, sym)| (name, &sym.text)))
    }
}
