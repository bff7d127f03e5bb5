use translit_core::unicode::unicode_info;
use unicode_width::UnicodeWidthStr;

const CHAR_COLUMN: usize = 4;

/// `char  U+XXXX  Script` per code point, padded by display width so
/// combining marks and wide characters line up.
pub fn info_rows(text: &str) -> Vec<String> {
    unicode_info(text)
        .into_iter()
        .map(|info| {
            let pad = CHAR_COLUMN.saturating_sub(info.ch.width());
            format!(
                "{}{}{:<9}{}",
                info.ch,
                " ".repeat(pad),
                info.code,
                info.script
            )
        })
        .collect()
}

pub fn info(text: &str) {
    for row in info_rows(text) {
        println!("{row}");
    }
}
