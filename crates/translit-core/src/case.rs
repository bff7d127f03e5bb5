//! Case-variant expansion for tables whose scripts have letter case.
//!
//! Multi-letter units can appear capitalized anywhere from "initial
//! only" to "all letters" (a digraph at the start of a sentence, an
//! all-caps heading). Rather than trying each form at conversion time, the
//! variants are folded into the table once, before the index is built.

use std::collections::HashSet;

use crate::symbols::{SymbolEntry, SymbolTable};

/// Upper-case the first character, lower-case the rest.
pub fn upcase_initial(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// Every "first `i` characters upper, rest lower" form of `s`, for `i` in
/// `1..=len`. Empty input yields no variants.
pub fn upcase_initials(s: &str) -> Vec<String> {
    let chars: Vec<char> = s.chars().collect();
    (1..=chars.len())
        .map(|i| split_case(&chars, i).into_iter().collect())
        .collect()
}

fn split_case(chars: &[char], split: usize) -> Vec<char> {
    let (head, tail) = chars.split_at(split);
    head.iter()
        .flat_map(|c| c.to_uppercase())
        .chain(tail.iter().flat_map(|c| c.to_lowercase()))
        .collect()
}

/// Add the case variants of every entry to `table`.
///
/// Base entries come first and keep their order. For a source of length
/// `L`, the variants cover split points `1..=L`, each mapped to the
/// initial-capitalized target. A variant whose source is already present
/// (a caseless script, or a collision with another base entry) is skipped,
/// so variants never override base mappings.
pub fn expand_case_variants(table: &SymbolTable) -> SymbolTable {
    let base = table.entries();
    let mut seen: HashSet<Vec<char>> = base.iter().map(|e| e.source.clone()).collect();
    let mut entries: Vec<SymbolEntry> = base.to_vec();

    for entry in base {
        let target = upcase_initial(&entry.target);
        for split in 1..=entry.source.len() {
            let source = split_case(&entry.source, split);
            if seen.insert(source.clone()) {
                entries.push(SymbolEntry {
                    source,
                    target: target.clone(),
                });
            }
        }
    }

    SymbolTable::from_unique(entries)
}
