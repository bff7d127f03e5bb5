//! Pre- and post-normalization hooks run around the segmentation pass.

use std::fmt;
use std::sync::Arc;

use icu_normalizer::ComposingNormalizerBorrowed;
use regex::Regex;

use crate::error::ConfigError;

/// A pure string → string rewrite.
pub trait Normalize: Send + Sync {
    fn normalize(&self, s: &str) -> String;
}

impl<F> Normalize for F
where
    F: Fn(&str) -> String + Send + Sync,
{
    fn normalize(&self, s: &str) -> String {
        self(s)
    }
}

/// Canonical composition (Unicode NFC).
#[derive(Debug, Clone, Copy, Default)]
pub struct Nfc;

impl Normalize for Nfc {
    fn normalize(&self, s: &str) -> String {
        ComposingNormalizerBorrowed::new_nfc()
            .normalize(s)
            .into_owned()
    }
}

/// Literal substitutions applied in order, e.g. legacy or presentation
/// forms to their canonical code points. An empty replacement deletes.
#[derive(Debug, Clone, Default)]
pub struct Replace {
    pairs: Vec<(String, String)>,
}

impl Replace {
    pub fn new<I, F, T>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (F, T)>,
        F: Into<String>,
        T: Into<String>,
    {
        Self {
            pairs: pairs
                .into_iter()
                .map(|(f, t)| (f.into(), t.into()))
                .filter(|(f, _)| !f.is_empty())
                .collect(),
        }
    }
}

impl Normalize for Replace {
    fn normalize(&self, s: &str) -> String {
        self.pairs
            .iter()
            .fold(s.to_string(), |acc, (from, to)| {
                acc.replace(from.as_str(), to)
            })
    }
}

/// Ordered regex rules, each applied to every match in the string.
/// Replacements use `regex` syntax (`$1`, `${name}`).
#[derive(Debug, Clone, Default)]
pub struct RegexRewrite {
    rules: Vec<(Regex, String)>,
}

impl RegexRewrite {
    pub fn new(rules: &[(&str, &str)]) -> Result<Self, ConfigError> {
        let rules = rules
            .iter()
            .map(|&(pattern, replacement)| {
                Regex::new(pattern)
                    .map(|re| (re, replacement.to_string()))
                    .map_err(|e| ConfigError::Pattern {
                        pattern: pattern.to_string(),
                        reason: e.to_string(),
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { rules })
    }
}

impl Normalize for RegexRewrite {
    fn normalize(&self, s: &str) -> String {
        self.rules.iter().fold(s.to_string(), |acc, (re, to)| {
            re.replace_all(&acc, to.as_str()).into_owned()
        })
    }
}

/// Run several normalizers in sequence.
#[derive(Clone, Default)]
pub struct Chain {
    steps: Vec<Arc<dyn Normalize>>,
}

impl Chain {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn then(mut self, step: impl Normalize + 'static) -> Self {
        self.steps.push(Arc::new(step));
        self
    }
}

impl fmt::Debug for Chain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Chain")
            .field("steps", &self.steps.len())
            .finish()
    }
}

impl Normalize for Chain {
    fn normalize(&self, s: &str) -> String {
        self.steps
            .iter()
            .fold(s.to_string(), |acc, step| step.normalize(&acc))
    }
}
