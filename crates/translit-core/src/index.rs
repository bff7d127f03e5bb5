//! Longest-prefix index over symbol-table sources.

use std::collections::HashMap;

use crate::symbols::SymbolTable;

#[derive(Debug, Default)]
struct Node {
    children: HashMap<char, Node>,
    target: Option<String>,
}

/// The longest known sequence starting at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Match<'a> {
    /// Number of code points consumed, always at least 1.
    pub len: usize,
    pub target: &'a str,
}

/// A code-point trie. Each node owns its children, and a node carries a
/// target when the path from the root spells a complete source sequence.
#[derive(Debug, Default)]
pub struct MatchIndex {
    root: Node,
    terminals: usize,
    max_depth: usize,
}

impl MatchIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Index every entry of `table`.
    pub fn build(table: &SymbolTable) -> Self {
        let mut index = Self::new();
        for entry in table.entries() {
            index.insert(&entry.source, &entry.target);
        }
        index
    }

    /// Add one path. An empty sequence is ignored; inserting an existing
    /// sequence again replaces its target.
    pub fn insert(&mut self, source: &[char], target: &str) {
        if source.is_empty() {
            return;
        }
        let mut node = &mut self.root;
        for &c in source {
            node = node.children.entry(c).or_default();
        }
        if node.target.replace(target.to_string()).is_none() {
            self.terminals += 1;
        }
        self.max_depth = self.max_depth.max(source.len());
    }

    /// Longest known sequence in `input` starting at `pos`.
    ///
    /// Descends greedily and remembers the deepest terminal passed. There
    /// is no backtracking: a path that dead-ends returns the deepest
    /// terminal seen on it, or `None` if it never passed one.
    pub fn longest_match(&self, input: &[char], pos: usize) -> Option<Match<'_>> {
        let mut node = &self.root;
        let mut best = None;
        for (depth, c) in input.get(pos..)?.iter().enumerate() {
            match node.children.get(c) {
                Some(child) => node = child,
                None => break,
            }
            if let Some(target) = &node.target {
                best = Some(Match {
                    len: depth + 1,
                    target: target.as_str(),
                });
            }
        }
        best
    }

    /// Number of complete sequences indexed.
    pub fn len(&self) -> usize {
        self.terminals
    }

    pub fn is_empty(&self) -> bool {
        self.terminals == 0
    }

    /// Length of the longest indexed sequence.
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }
}
