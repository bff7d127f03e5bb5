use std::fs;
use std::process;

use translit_core::{parse_table_toml, TableConfig};
use translit_tables::{default_toml, Hooks, Language, LanguagePair};
use unicode_width::UnicodeWidthStr;

use crate::error::CliError;

macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            process::exit(1);
        })
    };
}

fn direction(config: &TableConfig) -> String {
    let arrow = if config.reversible { "⇄" } else { "→" };
    let mut s = format!("{} {arrow} {}", config.source, config.target);
    if config.verify {
        s.push_str(", verified");
    }
    s
}

/// One line per built-in language: name, aliases, direction.
pub fn language_rows() -> Result<Vec<String>, CliError> {
    let mut rows = Vec::new();
    for &lang in Language::all() {
        let pair = LanguagePair::load(lang)?;
        let dir = match lang {
            Language::RussianSwedish => {
                format!("{}, respelled for Swedish", direction(pair.config()))
            }
            _ => direction(pair.config()),
        };
        rows.push(format!(
            "{:<16} {:<14} {dir}",
            lang.name(),
            lang.aliases().join(",")
        ));
    }
    Ok(rows)
}

pub fn list() {
    for row in die!(language_rows(), "Error loading languages: {}") {
        println!("{row}");
    }
}

pub fn export(language: &str) {
    let lang: Language = die!(language.parse(), "Error: {}");
    print!("{}", default_toml(lang));
}

/// Parse `text` and build both engines it declares.
pub fn validate_table(text: &str) -> Result<String, CliError> {
    let config = parse_table_toml(text)?;
    let mappings = config.table.len();
    let pair = LanguagePair::from_config(config, Hooks::default())?;
    let width = pair
        .config()
        .table
        .entries()
        .iter()
        .map(|e| e.source_str().width())
        .max()
        .unwrap_or(0);
    Ok(format!(
        "OK: {mappings} mappings ({}), widest source {width} column{}",
        direction(pair.config()),
        if width == 1 { "" } else { "s" }
    ))
}

pub fn validate(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    println!("{}", die!(validate_table(&content), "Error: {}"));
}
