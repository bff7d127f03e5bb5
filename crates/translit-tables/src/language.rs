use std::fmt;
use std::str::FromStr;

pub(crate) const BUCKWALTER_TOML: &str = include_str!("tables/buckwalter.toml");
pub(crate) const TAMIL_TOML: &str = include_str!("tables/tamil.toml");
pub(crate) const PERSIAN_TOML: &str = include_str!("tables/persian.toml");
pub(crate) const RUSSIAN_TOML: &str = include_str!("tables/russian.toml");
pub(crate) const RUSSIAN_SWEDISH_TOML: &str = include_str!("tables/russian_swedish.toml");
pub(crate) const GREEK_TOML: &str = include_str!("tables/greek.toml");

/// A built-in language pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    /// Arabic ⇄ Buckwalter ASCII.
    Buckwalter,
    /// Tamil ⇄ Latin.
    Tamil,
    /// Persian → Latin.
    Persian,
    /// Russian → Latin, road sign romanization.
    Russian,
    /// Russian → Latin, respelled for Swedish readers.
    RussianSwedish,
    /// Modern Greek → Latin.
    Greek,
}

const ALL: [Language; 6] = [
    Language::Buckwalter,
    Language::Tamil,
    Language::Persian,
    Language::Russian,
    Language::RussianSwedish,
    Language::Greek,
];

impl Language {
    pub fn all() -> &'static [Language] {
        &ALL
    }

    pub fn name(self) -> &'static str {
        match self {
            Language::Buckwalter => "buckwalter",
            Language::Tamil => "tamil",
            Language::Persian => "persian",
            Language::Russian => "russian",
            Language::RussianSwedish => "russian-swedish",
            Language::Greek => "greek",
        }
    }

    /// Short names accepted by [`FromStr`] besides [`Language::name`].
    pub fn aliases(self) -> &'static [&'static str] {
        match self {
            Language::Buckwalter => &["bw", "ar", "arabic"],
            Language::Tamil => &["ta"],
            Language::Persian => &["fa", "far", "farsi"],
            Language::Russian => &["ru", "rus"],
            Language::RussianSwedish => &["ru-sv", "rus-swe"],
            Language::Greek => &["el", "grc"],
        }
    }
}

/// The embedded table for `language`.
///
/// For [`Language::RussianSwedish`] this is the Russian table; the
/// respelling stage has its own, see [`respelling_toml`].
pub fn default_toml(language: Language) -> &'static str {
    match language {
        Language::Buckwalter => BUCKWALTER_TOML,
        Language::Tamil => TAMIL_TOML,
        Language::Persian => PERSIAN_TOML,
        Language::Russian | Language::RussianSwedish => RUSSIAN_TOML,
        Language::Greek => GREEK_TOML,
    }
}

/// The Swedish respelling table run after the Russian one.
pub fn respelling_toml() -> &'static str {
    RUSSIAN_SWEDISH_TOML
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown language '{0}'")]
pub struct UnknownLanguage(pub String);

impl FromStr for Language {
    type Err = UnknownLanguage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase();
        ALL.iter()
            .copied()
            .find(|lang| {
                lang.name() == key || lang.aliases().iter().any(|a| *a == key)
            })
            .ok_or_else(|| UnknownLanguage(s.to_string()))
    }
}
