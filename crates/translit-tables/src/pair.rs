use std::sync::Arc;

use tracing::debug;
use translit_core::{
    convert_with_verification, parse_table_toml, ConfigError, ConversionResult, Engine,
    EngineBuilder, Normalize, TableConfig,
};

use crate::hooks::Hooks;
use crate::language::{default_toml, Language};

/// Forward engine plus, for reversible tables, its inverse.
///
/// Built once and reused; conversions never mutate it.
#[derive(Debug)]
pub struct LanguagePair {
    name: String,
    config: TableConfig,
    forward: Engine,
    reverse: Option<Engine>,
}

fn with_hooks(
    builder: EngineBuilder,
    pre: Option<Arc<dyn Normalize>>,
    post: Option<Arc<dyn Normalize>>,
) -> EngineBuilder {
    let builder = match pre {
        Some(pre) => builder.pre_normalize(pre),
        None => builder,
    };
    match post {
        Some(post) => builder.post_normalize(post),
        None => builder,
    }
}

impl LanguagePair {
    /// Build a built-in pair from its embedded table.
    pub fn load(language: Language) -> Result<Self, ConfigError> {
        let config = parse_table_toml(default_toml(language))?;
        let mut pair = Self::from_config(config, Hooks::for_language(language)?)?;
        pair.name = language.name().to_string();
        Ok(pair)
    }

    /// Build a pair from table text, e.g. a user-supplied file.
    pub fn from_toml(toml_str: &str, hooks: Hooks) -> Result<Self, ConfigError> {
        Self::from_config(parse_table_toml(toml_str)?, hooks)
    }

    pub fn from_config(config: TableConfig, hooks: Hooks) -> Result<Self, ConfigError> {
        let Hooks {
            forward_pre,
            forward_post,
            reverse_pre,
            reverse_post,
        } = hooks;
        let forward = with_hooks(config.forward(), forward_pre, forward_post).build();
        let reverse = if config.reversible {
            let builder = config.reverse(&forward)?;
            Some(with_hooks(builder, reverse_pre, reverse_post).build())
        } else {
            None
        };
        debug!(
            pair = config.name.as_str(),
            entries = forward.table().len(),
            reversible = reverse.is_some(),
            verify = config.verify,
            "language pair loaded"
        );
        Ok(Self {
            name: config.name.clone(),
            config,
            forward,
            reverse,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn config(&self) -> &TableConfig {
        &self.config
    }

    pub fn forward(&self) -> &Engine {
        &self.forward
    }

    pub fn reverse(&self) -> Option<&Engine> {
        self.reverse.as_ref()
    }

    /// Whether [`convert`](Self::convert) runs the reverse test.
    pub fn verifies(&self) -> bool {
        self.config.verify && self.reverse.is_some()
    }

    /// Source → target, reverse-tested when the table asks for it.
    pub fn convert(&self, input: &str) -> ConversionResult {
        match (&self.reverse, self.config.verify) {
            (Some(reverse), true) => convert_with_verification(&self.forward, reverse, input),
            _ => self.forward.convert(input),
        }
    }

    pub fn convert_unverified(&self, input: &str) -> ConversionResult {
        self.forward.convert(input)
    }

    /// Target → source, tested against the forward engine when the table
    /// asks for verification.
    pub fn revert(&self, input: &str) -> Result<ConversionResult, ConfigError> {
        let reverse = self.reverse_engine()?;
        Ok(if self.config.verify {
            convert_with_verification(reverse, &self.forward, input)
        } else {
            reverse.convert(input)
        })
    }

    pub fn revert_unverified(&self, input: &str) -> Result<ConversionResult, ConfigError> {
        Ok(self.reverse_engine()?.convert(input))
    }

    fn reverse_engine(&self) -> Result<&Engine, ConfigError> {
        self.reverse
            .as_ref()
            .ok_or_else(|| ConfigError::MissingReverse(self.name.clone()))
    }
}
