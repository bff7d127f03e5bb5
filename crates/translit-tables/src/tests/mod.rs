
use translit_core::ConversionResult;

use super::{Language, LanguagePair};

pub(super) fn load(language: Language) -> LanguagePair {
    LanguagePair::load(language).unwrap()
}

#[track_caller]
pub(super) fn assert_ok(result: &ConversionResult, expected: &str) {
    assert_eq!(result.output, expected, "input {:?}", result.input);
    assert!(result.ok, "{:?}: {:?}", result.input, result.messages());
}

#[track_caller]
pub(super) fn assert_fails(result: &ConversionResult, expected: &str) {
    assert_eq!(result.output, expected, "input {:?}", result.input);
    assert!(!result.ok, "expected {:?} to fail", result.input);
    assert!(!result.diagnostics.is_empty());
}

#[test]
fn test_every_language_loads() {
    for &lang in Language::all() {
        let pair = load(lang);
        assert_eq!(pair.name(), lang.name());
        assert!(!pair.forward().table().is_empty());
    }
}

#[test]
fn test_only_reversible_pairs_verify() {
    let verifying: Vec<Language> = Language::all()
        .iter()
        .copied()
        .filter(|&lang| load(lang).verifies())
        .collect();
    assert_eq!(verifying, vec![Language::Buckwalter, Language::Tamil]);
}
