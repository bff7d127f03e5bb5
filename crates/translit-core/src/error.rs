use std::fmt;

use serde::Serialize;

use crate::unicode::describe;

/// Errors raised while building tables and engines.
///
/// These never occur during conversion: a malformed table aborts engine
/// construction instead.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("mapping table is empty")]
    Empty,
    #[error("empty source sequence in entry {index}")]
    EmptySource { index: usize },
    #[error("entry for '{sequence}' has an empty target and cannot be reversed")]
    EmptyTarget { sequence: String },
    #[error("placeholder must be a single character, got {0:?}")]
    InvalidPlaceholder(String),
    #[error("language pair '{0}' requests verification but declares no reverse table")]
    MissingReverse(String),
    #[error("invalid rewrite pattern {pattern:?}: {reason}")]
    Pattern { pattern: String, reason: String },
}

/// A per-conversion condition, returned as data on the result.
///
/// Unmapped symbols and round-trip failures are kept apart so callers can
/// tell "unknown symbol" from "inconsistent tables".
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Diagnostic {
    /// A code point with no table entry outside the passthrough set.
    UnmappedSymbol { symbol: char },
    /// The produced text did not convert back to the input.
    RoundTripFailure {
        input: String,
        output: String,
        reconverted: String,
        /// Symbols the reverse table could not map, if any.
        unmapped: Vec<char>,
    },
}

impl Diagnostic {
    pub fn is_unmapped(&self) -> bool {
        matches!(self, Diagnostic::UnmappedSymbol { .. })
    }

    pub fn is_round_trip(&self) -> bool {
        matches!(self, Diagnostic::RoundTripFailure { .. })
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::UnmappedSymbol { symbol } => {
                write!(f, "unknown input symbol '{symbol}' {}", describe(*symbol))
            }
            Diagnostic::RoundTripFailure {
                output, unmapped, ..
            } if !unmapped.is_empty() => {
                let symbols: Vec<String> = unmapped.iter().map(|c| format!("'{c}'")).collect();
                write!(
                    f,
                    "reverse test failed: mapped '{output}' contains unknown symbol{} {}",
                    if unmapped.len() == 1 { "" } else { "s" },
                    symbols.join(", ")
                )
            }
            Diagnostic::RoundTripFailure {
                input,
                output,
                reconverted,
                ..
            } => write!(
                f,
                "reverse test failed: input '{input}', mapped '{output}', remapped '{reconverted}'"
            ),
        }
    }
}
