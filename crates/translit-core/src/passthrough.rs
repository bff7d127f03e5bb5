//! Script-neutral characters copied through unchanged.

use std::collections::HashSet;

/// Code points that may pass through a conversion unmapped.
///
/// `accept_ascii` is off by default. With it on, an unmapped ASCII letter
/// in the input looks like a mapped one in the output, and tables with
/// ASCII targets no longer round-trip.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PassthroughSet {
    chars: HashSet<char>,
    accept_ascii: bool,
    accept_any: bool,
}

impl PassthroughSet {
    pub fn new(chars: impl IntoIterator<Item = char>) -> Self {
        Self {
            chars: chars.into_iter().collect(),
            accept_ascii: false,
            accept_any: false,
        }
    }

    /// A set that keeps every unmapped code point. Only meant for
    /// respelling stages that run over already-converted text.
    pub fn any() -> Self {
        Self {
            accept_any: true,
            ..Self::default()
        }
    }

    pub fn with_ascii(mut self, accept_ascii: bool) -> Self {
        self.accept_ascii = accept_ascii;
        self
    }

    pub fn is_passthrough(&self, c: char) -> bool {
        self.accept_any || self.chars.contains(&c) || (self.accept_ascii && c.is_ascii())
    }

    pub fn accepts_ascii(&self) -> bool {
        self.accept_ascii
    }

    pub fn accepts_any(&self) -> bool {
        self.accept_any
    }

    /// The explicit characters, sorted.
    pub fn chars(&self) -> Vec<char> {
        let mut chars: Vec<char> = self.chars.iter().copied().collect();
        chars.sort_unstable();
        chars
    }
}
