//! Table-driven transliteration engine.
//!
//! An [`Engine`] segments its input into the longest known symbol
//! sequences, maps each one to its counterpart in the target script, copies
//! script-neutral characters through unchanged, and substitutes a
//! placeholder for anything else. [`convert_with_verification`] pairs a
//! forward engine with its inverse and checks that the produced text maps
//! back to the input.

pub mod case;
pub mod config;
pub mod converter;
pub mod engine;
pub mod error;
pub mod index;
pub mod normalize;
pub mod passthrough;
pub mod symbols;
pub mod unicode;
pub mod verify;

pub use case::{expand_case_variants, upcase_initial, upcase_initials};
pub use config::{parse_table_toml, TableConfig};
pub use converter::{segment, ConversionResult};
pub use engine::{build_engine, convert_with_verification, Engine, EngineBuilder};
pub use error::{ConfigError, Diagnostic};
pub use index::{Match, MatchIndex};
pub use normalize::Normalize;
pub use passthrough::PassthroughSet;
pub use symbols::{SymbolEntry, SymbolTable};
pub use verify::verify_round_trip;

/// Placeholder emitted for code points with no mapping and no passthrough.
pub const DEFAULT_PLACEHOLDER: char = '?';
