//! Built-in language pairs for `translit-core`.
//!
//! Each pair is an embedded TOML table plus the script-specific
//! normalization hooks run around its engines. [`LanguagePair::load`]
//! builds both directions once; the result is shared read-only.

pub mod hooks;
mod language;
mod pair;

#[cfg(test)]
mod tests;

pub use hooks::Hooks;
pub use language::{default_toml, respelling_toml, Language, UnknownLanguage};
pub use pair::LanguagePair;
