//! Script-specific normalization run around each engine.

use std::fmt;
use std::sync::Arc;

use translit_core::normalize::{Chain, Nfc, RegexRewrite, Replace};
use translit_core::{parse_table_toml, ConfigError, Engine, Normalize};

use crate::language::{respelling_toml, Language};

/// Pre/post hooks for both directions of a pair.
#[derive(Clone, Default)]
pub struct Hooks {
    pub forward_pre: Option<Arc<dyn Normalize>>,
    pub forward_post: Option<Arc<dyn Normalize>>,
    pub reverse_pre: Option<Arc<dyn Normalize>>,
    pub reverse_post: Option<Arc<dyn Normalize>>,
}

impl fmt::Debug for Hooks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Hooks")
            .field("forward_pre", &self.forward_pre.is_some())
            .field("forward_post", &self.forward_post.is_some())
            .field("reverse_pre", &self.reverse_pre.is_some())
            .field("reverse_post", &self.reverse_post.is_some())
            .finish()
    }
}

impl Hooks {
    /// NFC before segmenting, in both directions.
    pub fn nfc() -> Self {
        Self {
            forward_pre: Some(Arc::new(Nfc)),
            reverse_pre: Some(Arc::new(Nfc)),
            ..Self::default()
        }
    }

    pub fn for_language(language: Language) -> Result<Self, ConfigError> {
        match language {
            Language::Buckwalter => buckwalter(),
            Language::Tamil => Ok(Self {
                forward_post: Some(Arc::new(Nfc)),
                reverse_post: Some(Arc::new(Nfc)),
                ..Self::nfc()
            }),
            Language::Persian | Language::Russian => Ok(Self::nfc()),
            Language::RussianSwedish => Ok(Self {
                forward_post: Some(Arc::new(swedish_respelling()?)),
                ..Self::nfc()
            }),
            Language::Greek => Ok(Self {
                forward_pre: Some(Arc::new(Chain::new().then(Nfc).then(greek_initials()?))),
                ..Self::default()
            }),
        }
    }
}

fn buckwalter() -> Result<Hooks, ConfigError> {
    let arabic_pre = Chain::new()
        .then(Replace::new([
            ("\u{FEAA}", "\u{062F}"), // DAL FINAL FORM
            ("\u{06BE}", "\u{0647}"), // HEH DOACHASHMEE
            ("\u{200F}", ""),         // RIGHT-TO-LEFT MARK
        ]))
        .then(Nfc);
    // NFC puts vowel marks before shadda; Buckwalter writes shadda first.
    let shadda_first = RegexRewrite::new(&[("([aiuoFKN])(~)", "${2}${1}")])?;
    Ok(Hooks {
        forward_pre: Some(Arc::new(arabic_pre)),
        forward_post: Some(Arc::new(shadda_first)),
        reverse_pre: None,
        reverse_post: Some(Arc::new(Nfc)),
    })
}

const GREEK_INITIALS: &[(&str, &str)] = &[
    (r#"(^|[\s/()'".!?-])Γ[Κκ](\S)"#, "${1}G${2}"),
    (r#"(^|[\s/()'".!?-])Μ[Ππ](\S)"#, "${1}B${2}"),
    (r#"(^|[\s/()'".!?-])Ν[Ττ](\S)"#, "${1}D${2}"),
    (r#"(^|[\s/()'".!?-])(?i)γκ(\S)"#, "${1}g${2}"),
    (r#"(^|[\s/()'".!?-])(?i)μπ(\S)"#, "${1}b${2}"),
    (r#"(^|[\s/()'".!?-])(?i)ντ(\S)"#, "${1}d${2}"),
];

/// Word-initial γκ, μπ, ντ are read as plain g, b, d.
pub fn greek_initials() -> Result<RegexRewrite, ConfigError> {
    RegexRewrite::new(GREEK_INITIALS)
}

const SWEDISH_WORD_FINAL: &[(&str, &str)] = &[
    (r"(?i)ky\b", "kij"),
    (r"(?i)gy\b", "gij"),
    (r"(?i)ay\b", "aj"),
    (r"(?i)ey\b", "ej"),
    (r"(?i)y\b", "yj"),
];

/// A secondary engine run over already-converted text as a post hook.
pub struct Respelling(Engine);

impl Respelling {
    pub fn new(engine: Engine) -> Self {
        Self(engine)
    }

    pub fn engine(&self) -> &Engine {
        &self.0
    }
}

impl Normalize for Respelling {
    fn normalize(&self, s: &str) -> String {
        self.0.convert(s).output
    }
}

/// Swedish respelling of road sign romanization: the digraph table, then
/// the word-final `y` rules.
pub fn swedish_respelling() -> Result<Chain, ConfigError> {
    let cfg = parse_table_toml(respelling_toml())?;
    let engine = cfg.forward().name(cfg.name.clone()).build();
    Ok(Chain::new()
        .then(Respelling::new(engine))
        .then(RegexRewrite::new(SWEDISH_WORD_FINAL)?))
}
