//! Property-based tests for segmentation and verification.

use proptest::prelude::*;

use super::*;
use crate::error::Diagnostic;

fn arabic_pair() -> (Engine, Engine) {
    let table = SymbolTable::new([
        ("\u{0627}", "A"),
        ("\u{0644}", "l"),
        ("\u{0647}", "h"),
        ("\u{0628}", "b"),
        ("\u{062A}", "t"),
        ("\u{062B}", "v"),
        ("\u{0634}", "$"),
        ("\u{064E}", "a"),
    ])
    .unwrap();
    let pass = PassthroughSet::new([' ', '.']);
    let forward = build_engine(table.clone(), pass.clone(), false);
    let reverse = build_engine(table.reversed().unwrap(), pass, false);
    (forward, reverse)
}

fn arb_arabic_text() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![
            6 => prop::sample::select(vec![
                '\u{0627}', '\u{0644}', '\u{0647}', '\u{0628}', '\u{062A}', '\u{062B}', '\u{0634}',
                '\u{064E}',
            ]),
            1 => prop::sample::select(vec![' ', '.']),
        ],
        0..40,
    )
    .prop_map(|chars| chars.into_iter().collect())
}

/// Longest exact match at each position; valid when every prefix of an
/// entry is itself an entry.
fn reference_segment(pairs: &[(&str, &str)], input: &str) -> String {
    let chars: Vec<char> = input.chars().collect();
    let mut out = String::new();
    let mut pos = 0;
    while pos < chars.len() {
        let best = pairs
            .iter()
            .filter(|(src, _)| {
                let src: Vec<char> = src.chars().collect();
                chars[pos..].starts_with(&src)
            })
            .max_by_key(|(src, _)| src.chars().count());
        match best {
            Some((src, tgt)) => {
                out.push_str(tgt);
                pos += src.chars().count();
            }
            None => {
                out.push('?');
                pos += 1;
            }
        }
    }
    out
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn round_trip_holds_for_injective_tables(text in arb_arabic_text()) {
        let (forward, reverse) = arabic_pair();
        let r = convert_with_verification(&forward, &reverse, &text);
        prop_assert!(r.ok, "{:?}", r.diagnostics);
        let back = reverse.convert(&r.output);
        prop_assert_eq!(back.output, text);
    }

    #[test]
    fn longest_match_agrees_with_reference(
        text in prop::collection::vec(prop::sample::select(vec!['k', 's', 'h', 'x']), 0..30)
            .prop_map(|v| v.into_iter().collect::<String>())
    ) {
        let pairs = [("k", "K"), ("ks", "X"), ("ksh", "Q"), ("s", "S"), ("h", "H")];
        let table = SymbolTable::new(pairs).unwrap();
        let engine = build_engine(table, PassthroughSet::default(), false);
        let r = engine.convert(&text);
        prop_assert_eq!(r.output, reference_segment(&pairs, &text));
    }

    #[test]
    fn unmapped_reported_once_each(
        text in prop::collection::vec(prop::sample::select(vec!['a', 'x', 'y', 'z']), 0..30)
            .prop_map(|v| v.into_iter().collect::<String>())
    ) {
        let engine = build_engine(
            SymbolTable::new([("a", "A")]).unwrap(),
            PassthroughSet::default(),
            false,
        );
        let r = engine.convert(&text);

        let mut expected: Vec<char> = Vec::new();
        for c in text.chars().filter(|&c| c != 'a') {
            if !expected.contains(&c) {
                expected.push(c);
            }
        }
        let reported: Vec<char> = r
            .diagnostics
            .iter()
            .filter_map(|d| match d {
                Diagnostic::UnmappedSymbol { symbol } => Some(*symbol),
                _ => None,
            })
            .collect();
        prop_assert_eq!(&reported, &expected);
        prop_assert_eq!(r.ok, expected.is_empty());
        prop_assert_eq!(r.output.chars().count(), text.chars().count());
    }

    #[test]
    fn passthrough_text_is_unchanged(
        text in prop::collection::vec(prop::sample::select(vec![' ', '.']), 0..20)
            .prop_map(|v| v.into_iter().collect::<String>())
    ) {
        let (forward, reverse) = arabic_pair();
        let r = convert_with_verification(&forward, &reverse, &text);
        prop_assert!(r.ok);
        prop_assert_eq!(r.output, text);
    }
}
