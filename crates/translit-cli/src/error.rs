use std::io;

use translit_core::ConfigError;
use translit_tables::UnknownLanguage;

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("failed to read '{path}': {source}")]
    Read { path: String, source: io::Error },
    #[error("failed to write output: {0}")]
    Write(#[from] io::Error),
    #[error(transparent)]
    Language(#[from] UnknownLanguage),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("conversion failed for '{input}' ({source_name}): {messages}")]
    Conversion {
        source_name: String,
        input: String,
        messages: String,
    },
}
