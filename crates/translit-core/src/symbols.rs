//! Symbol tables: ordered source-sequence → target-string entries.

use std::collections::HashSet;

use tracing::debug;

use crate::error::ConfigError;

/// One transliteration unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolEntry {
    /// Non-empty sequence of code points in the source script.
    pub source: Vec<char>,
    pub target: String,
}

impl SymbolEntry {
    pub fn source_str(&self) -> String {
        self.source.iter().collect()
    }
}

/// An immutable, validated list of entries.
///
/// When two entries share a source sequence the first one wins and the
/// later one is dropped. Targets may repeat freely.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SymbolTable {
    entries: Vec<SymbolEntry>,
}

impl SymbolTable {
    /// Build a table from `(source, target)` string pairs.
    pub fn new<I, S, T>(pairs: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (S, T)>,
        S: AsRef<str>,
        T: Into<String>,
    {
        let entries = pairs
            .into_iter()
            .map(|(s, t)| SymbolEntry {
                source: s.as_ref().chars().collect(),
                target: t.into(),
            })
            .collect();
        Self::from_entries(entries)
    }

    /// Build a table from already-split entries.
    pub fn from_entries(entries: Vec<SymbolEntry>) -> Result<Self, ConfigError> {
        if let Some(index) = entries.iter().position(|e| e.source.is_empty()) {
            return Err(ConfigError::EmptySource { index });
        }

        let total = entries.len();
        let mut seen: HashSet<Vec<char>> = HashSet::with_capacity(total);
        let entries: Vec<SymbolEntry> = entries
            .into_iter()
            .filter(|e| seen.insert(e.source.clone()))
            .collect();

        let dropped = total - entries.len();
        if dropped > 0 {
            debug!(dropped, "duplicate source sequences ignored");
        }
        Ok(Self { entries })
    }

    /// Wrap entries already known to be non-empty and free of duplicates.
    pub(crate) fn from_unique(entries: Vec<SymbolEntry>) -> Self {
        debug_assert!(entries.iter().all(|e| !e.source.is_empty()));
        Self { entries }
    }

    pub fn entries(&self) -> &[SymbolEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Target for an exact source sequence, if present.
    pub fn get(&self, source: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|e| e.source.iter().copied().eq(source.chars()))
            .map(|e| e.target.as_str())
    }

    /// Swap source and target of every entry.
    ///
    /// Several sources sharing a target collapse to the first one, so an
    /// ambiguous forward table yields a lossy reverse table. That loss is
    /// what the round-trip check reports.
    pub fn reversed(&self) -> Result<SymbolTable, ConfigError> {
        if let Some(e) = self.entries.iter().find(|e| e.target.is_empty()) {
            return Err(ConfigError::EmptyTarget {
                sequence: e.source_str(),
            });
        }
        let swapped = self
            .entries
            .iter()
            .map(|e| SymbolEntry {
                source: e.target.chars().collect(),
                target: e.source_str(),
            })
            .collect();
        Self::from_entries(swapped)
    }
}
