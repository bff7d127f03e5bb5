//! The segmentation pass.

use serde::Serialize;
use tracing::{debug, debug_span};

use crate::error::Diagnostic;
use crate::index::MatchIndex;
use crate::passthrough::PassthroughSet;

/// Outcome of one conversion.
///
/// `output` is always complete: unknown symbols are replaced by the
/// placeholder, and `ok` is false.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConversionResult {
    /// The text as the caller passed it.
    pub input: String,
    /// What the segmenter saw, when a pre-normalization hook changed it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub normalized: Option<String>,
    pub output: String,
    pub ok: bool,
    pub diagnostics: Vec<Diagnostic>,
}

impl ConversionResult {
    /// The text that was segmented: `normalized` if set, else `input`.
    pub fn segmented_input(&self) -> &str {
        self.normalized.as_deref().unwrap_or(&self.input)
    }

    /// Distinct unmapped symbols, in first-seen order.
    pub fn unmapped_symbols(&self) -> Vec<char> {
        self.diagnostics
            .iter()
            .filter_map(|d| match d {
                Diagnostic::UnmappedSymbol { symbol } => Some(*symbol),
                _ => None,
            })
            .collect()
    }

    pub fn has_round_trip_failure(&self) -> bool {
        self.diagnostics.iter().any(Diagnostic::is_round_trip)
    }

    /// Diagnostics rendered as text.
    pub fn messages(&self) -> Vec<String> {
        self.diagnostics.iter().map(ToString::to_string).collect()
    }
}

/// Convert `input` in a single left-to-right pass.
///
/// At each position the longest indexed sequence wins; failing that a
/// passthrough character is copied, and anything else becomes
/// `placeholder` plus one diagnostic per distinct symbol.
pub fn segment(
    index: &MatchIndex,
    passthrough: &PassthroughSet,
    placeholder: char,
    input: &str,
) -> ConversionResult {
    let chars: Vec<char> = input.chars().collect();
    let _span = debug_span!("segment", char_count = chars.len()).entered();

    let mut output = String::with_capacity(input.len());
    let mut unknown: Vec<char> = Vec::new();
    let mut i = 0;

    while i < chars.len() {
        if let Some(m) = index.longest_match(&chars, i) {
            output.push_str(m.target);
            i += m.len;
            continue;
        }
        let c = chars[i];
        if passthrough.is_passthrough(c) {
            output.push(c);
        } else {
            output.push(placeholder);
            if !unknown.contains(&c) {
                unknown.push(c);
            }
        }
        i += 1;
    }

    if !unknown.is_empty() {
        debug!(unknown = unknown.len(), "unmapped symbols");
    }

    ConversionResult {
        input: input.to_string(),
        normalized: None,
        output,
        ok: unknown.is_empty(),
        diagnostics: unknown
            .into_iter()
            .map(|symbol| Diagnostic::UnmappedSymbol { symbol })
            .collect(),
    }
}
