//! TOML table files describing one language pair.
//!
//! ```toml
//! [pair]
//! name = "buckwalter"
//! source = "ar"
//! target = "bw"
//! reversible = true
//! verify = true
//!
//! [passthrough]
//! chars = " .,()"
//!
//! [mappings]
//! entries = [
//!     ["ا", "A"],
//!     ["ب", "b"],
//! ]
//! ```

use serde::Deserialize;

use crate::engine::{Engine, EngineBuilder};
use crate::error::ConfigError;
use crate::passthrough::PassthroughSet;
use crate::symbols::SymbolTable;
use crate::DEFAULT_PLACEHOLDER;

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawTable {
    pair: RawPair,
    #[serde(default)]
    passthrough: RawPassthrough,
    mappings: RawMappings,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawPair {
    name: String,
    #[serde(default)]
    description: String,
    source: String,
    target: String,
    #[serde(default)]
    case_variants: bool,
    #[serde(default)]
    reversible: bool,
    #[serde(default)]
    verify: bool,
    #[serde(default)]
    placeholder: Option<String>,
}

#[derive(Deserialize, Default)]
#[serde(deny_unknown_fields)]
struct RawPassthrough {
    #[serde(default)]
    chars: String,
    #[serde(default)]
    accept_ascii: bool,
    /// Keep every unmapped code point; for respelling stages.
    #[serde(default)]
    accept_any: bool,
    #[serde(default)]
    reverse_chars: Option<String>,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawMappings {
    entries: Vec<(String, String)>,
}

/// A validated language-pair table.
#[derive(Debug, Clone)]
pub struct TableConfig {
    pub name: String,
    pub description: String,
    /// Source script label, e.g. "ar".
    pub source: String,
    /// Target script label, e.g. "bw".
    pub target: String,
    pub case_variants: bool,
    pub reversible: bool,
    /// Run the reverse test on every forward conversion.
    pub verify: bool,
    pub placeholder: char,
    pub passthrough: PassthroughSet,
    pub reverse_passthrough: PassthroughSet,
    pub table: SymbolTable,
}

/// Parse and validate a table file.
pub fn parse_table_toml(toml_str: &str) -> Result<TableConfig, ConfigError> {
    let raw: RawTable = toml::from_str(toml_str).map_err(|e| ConfigError::Parse(e.to_string()))?;

    if raw.mappings.entries.is_empty() {
        return Err(ConfigError::Empty);
    }
    let table = SymbolTable::new(raw.mappings.entries)?;

    let placeholder = match raw.pair.placeholder {
        None => DEFAULT_PLACEHOLDER,
        Some(p) => {
            let mut chars = p.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => c,
                _ => return Err(ConfigError::InvalidPlaceholder(p)),
            }
        }
    };

    if raw.pair.verify && !raw.pair.reversible {
        return Err(ConfigError::MissingReverse(raw.pair.name));
    }
    if raw.pair.reversible {
        table.reversed()?;
    }

    let accept_ascii = raw.passthrough.accept_ascii;
    let passthrough = if raw.passthrough.accept_any {
        PassthroughSet::any()
    } else {
        PassthroughSet::new(raw.passthrough.chars.chars()).with_ascii(accept_ascii)
    };
    let reverse_passthrough = match raw.passthrough.reverse_chars {
        Some(chars) => PassthroughSet::new(chars.chars()).with_ascii(accept_ascii),
        None => passthrough.clone(),
    };

    Ok(TableConfig {
        name: raw.pair.name,
        description: raw.pair.description,
        source: raw.pair.source,
        target: raw.pair.target,
        case_variants: raw.pair.case_variants,
        reversible: raw.pair.reversible,
        verify: raw.pair.verify,
        placeholder,
        passthrough,
        reverse_passthrough,
        table,
    })
}

impl TableConfig {
    /// Builder for the source → target engine, without hooks.
    pub fn forward(&self) -> EngineBuilder {
        Engine::builder(self.table.clone())
            .name(format!("{}2{}", self.source, self.target))
            .passthrough(self.passthrough.clone())
            .case_variants(self.case_variants)
            .placeholder(self.placeholder)
    }

    /// Builder for the target → source engine, from the forward engine's
    /// table (case variants included).
    pub fn reverse(&self, forward: &Engine) -> Result<EngineBuilder, ConfigError> {
        if !self.reversible {
            return Err(ConfigError::MissingReverse(self.name.clone()));
        }
        Ok(Engine::builder(forward.table().reversed()?)
            .name(format!("{}2{}", self.target, self.source))
            .passthrough(self.reverse_passthrough.clone())
            .placeholder(self.placeholder))
    }
}
