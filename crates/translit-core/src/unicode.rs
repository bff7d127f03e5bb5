//! Code-point descriptions for diagnostic text.

use serde::Serialize;
use unicode_script::UnicodeScript;

/// `U+XXXX` notation for a code point.
pub fn code_for(c: char) -> String {
    format!("U+{:04X}", c as u32)
}

/// Name of the Unicode script `c` belongs to, e.g. "Tamil" or "Common".
pub fn script_for(c: char) -> &'static str {
    c.script().full_name()
}

/// Short description used in diagnostics: `U+0B95 (Tamil)`.
pub fn describe(c: char) -> String {
    format!("{} ({})", code_for(c), script_for(c))
}

/// One row of a per-character breakdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UnicodeInfo {
    /// The character itself, empty for controls that would garble output.
    pub ch: String,
    pub code: String,
    pub script: &'static str,
}

/// Describe every code point in `s`.
///
/// Control characters (tab, newline) are described but not echoed.
pub fn unicode_info(s: &str) -> Vec<UnicodeInfo> {
    s.chars()
        .map(|c| UnicodeInfo {
            ch: if c.is_control() {
                String::new()
            } else {
                c.to_string()
            },
            code: code_for(c),
            script: script_for(c),
        })
        .collect()
}
