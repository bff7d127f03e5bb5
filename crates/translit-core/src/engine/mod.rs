//! One direction of a language pair, built once and shared read-only.

#[cfg(test)]
mod proptest_engine;

use std::fmt;
use std::sync::Arc;

use tracing::{debug, debug_span};

use crate::case::expand_case_variants;
use crate::converter::{segment, ConversionResult};
use crate::index::MatchIndex;
use crate::normalize::Normalize;
use crate::passthrough::PassthroughSet;
use crate::symbols::SymbolTable;
use crate::verify::verify_round_trip;
use crate::DEFAULT_PLACEHOLDER;

/// An immutable converter: matching index, passthrough policy,
/// placeholder, and optional normalization hooks.
///
/// `Engine` is `Send + Sync`; one instance can serve conversions on many
/// threads at once.
pub struct Engine {
    name: String,
    table: SymbolTable,
    index: MatchIndex,
    passthrough: PassthroughSet,
    placeholder: char,
    pre: Option<Arc<dyn Normalize>>,
    post: Option<Arc<dyn Normalize>>,
}

/// Collects engine options before the index is built.
pub struct EngineBuilder {
    name: String,
    table: SymbolTable,
    passthrough: PassthroughSet,
    case_variants: bool,
    placeholder: char,
    pre: Option<Arc<dyn Normalize>>,
    post: Option<Arc<dyn Normalize>>,
}

impl EngineBuilder {
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn passthrough(mut self, passthrough: PassthroughSet) -> Self {
        self.passthrough = passthrough;
        self
    }

    /// Fold upper/lower case variants of every entry into the index.
    pub fn case_variants(mut self, enabled: bool) -> Self {
        self.case_variants = enabled;
        self
    }

    pub fn placeholder(mut self, placeholder: char) -> Self {
        self.placeholder = placeholder;
        self
    }

    /// Run before segmentation.
    pub fn pre_normalize(mut self, hook: Arc<dyn Normalize>) -> Self {
        self.pre = Some(hook);
        self
    }

    /// Run over the produced text.
    pub fn post_normalize(mut self, hook: Arc<dyn Normalize>) -> Self {
        self.post = Some(hook);
        self
    }

    pub fn build(self) -> Engine {
        let _span = debug_span!("build_engine", name = self.name.as_str()).entered();
        let base_len = self.table.len();
        let table = if self.case_variants {
            expand_case_variants(&self.table)
        } else {
            self.table
        };
        let index = MatchIndex::build(&table);
        debug!(
            base_entries = base_len,
            entries = table.len(),
            max_depth = index.max_depth(),
            "engine built"
        );
        Engine {
            name: self.name,
            table,
            index,
            passthrough: self.passthrough,
            placeholder: self.placeholder,
            pre: self.pre,
            post: self.post,
        }
    }
}

/// Build an engine with the default placeholder and no hooks.
pub fn build_engine(
    table: SymbolTable,
    passthrough: PassthroughSet,
    case_variants: bool,
) -> Engine {
    Engine::builder(table)
        .passthrough(passthrough)
        .case_variants(case_variants)
        .build()
}

impl Engine {
    pub fn builder(table: SymbolTable) -> EngineBuilder {
        EngineBuilder {
            name: String::new(),
            table,
            passthrough: PassthroughSet::default(),
            case_variants: false,
            placeholder: DEFAULT_PLACEHOLDER,
            pre: None,
            post: None,
        }
    }

    /// Pre-normalize, segment, post-normalize.
    ///
    /// `input` on the result is the caller's text; `normalized` is set
    /// when the pre hook changed it.
    pub fn convert(&self, input: &str) -> ConversionResult {
        let mut result = match &self.pre {
            Some(pre) => {
                let normalized = pre.normalize(input);
                let mut result = self.segment(&normalized);
                if normalized != input {
                    result.input = input.to_string();
                    result.normalized = Some(normalized);
                }
                result
            }
            None => self.segment(input),
        };
        if let Some(post) = &self.post {
            result.output = post.normalize(&result.output);
        }
        result
    }

    fn segment(&self, text: &str) -> ConversionResult {
        segment(&self.index, &self.passthrough, self.placeholder, text)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The table the index was built from, case variants included.
    pub fn table(&self) -> &SymbolTable {
        &self.table
    }

    pub fn index(&self) -> &MatchIndex {
        &self.index
    }

    pub fn passthrough(&self) -> &PassthroughSet {
        &self.passthrough
    }

    pub fn placeholder(&self) -> char {
        self.placeholder
    }
}

impl fmt::Debug for Engine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Engine")
            .field("name", &self.name)
            .field("entries", &self.table.len())
            .field("max_depth", &self.index.max_depth())
            .field("placeholder", &self.placeholder)
            .field("pre", &self.pre.is_some())
            .field("post", &self.post.is_some())
            .finish()
    }
}

/// Convert with `forward`, then check the result against `reverse`.
///
/// The reverse test only runs when the forward pass had no unmapped
/// symbols, and compares against the pre-normalized input. A failed test
/// clears `ok` and adds a round-trip diagnostic; the forward output is
/// kept.
pub fn convert_with_verification(
    forward: &Engine,
    reverse: &Engine,
    input: &str,
) -> ConversionResult {
    let mut result = forward.convert(input);
    if !result.ok {
        return result;
    }
    let verified = verify_round_trip(
        reverse,
        result.segmented_input(),
        &result.output,
    );
    if let Err(diagnostic) = verified {
        result.ok = false;
        result.diagnostics.push(diagnostic);
    }
    result
}
