//! Reverse-test validation of a finished conversion.

use tracing::debug;

use crate::engine::Engine;
use crate::error::Diagnostic;

/// Check that `reverse` maps `produced` back to `original`.
///
/// `original` is the text the forward segmenter saw, i.e. after its
/// pre-normalization. The reverse conversion itself is never verified.
/// Fails when the reverse pass hits unmapped symbols or yields different
/// text, even if the forward pass was clean.
pub fn verify_round_trip(
    reverse: &Engine,
    original: &str,
    produced: &str,
) -> Result<(), Diagnostic> {
    let remapped = reverse.convert(produced);
    if remapped.ok && remapped.output == original {
        return Ok(());
    }
    debug!(
        input = original,
        output = produced,
        reconverted = remapped.output.as_str(),
        "reverse test failed"
    );
    Err(Diagnostic::RoundTripFailure {
        input: original.to_string(),
        output: produced.to_string(),
        unmapped: remapped.unmapped_symbols(),
        reconverted: remapped.output,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::passthrough::PassthroughSet;
    use crate::symbols::SymbolTable;

    fn engine(pairs: &[(&str, &str)]) -> Engine {
        Engine::builder(SymbolTable::new(pairs.iter().copied()).unwrap())
            .passthrough(PassthroughSet::new([' ']))
            .build()
    }

    #[test]
    fn test_round_trip_ok() {
        // reverse of an ar2bw table: Buckwalter back to Arabic
        let rev = engine(&[("A", "ا"), ("l", "ل")]);
        assert_eq!(verify_round_trip(&rev, "ال", "Al"), Ok(()));
    }

    #[test]
    fn test_round_trip_mismatch() {
        let rev = engine(&[("h", "ه")]);
        let err = verify_round_trip(&rev, "ة", "h").unwrap_err();
        assert_eq!(
            err,
            Diagnostic::RoundTripFailure {
                input: "ة".into(),
                output: "h".into(),
                reconverted: "ه".into(),
                unmapped: Vec::new(),
            }
        );
    }

    #[test]
    fn test_round_trip_reverse_unmapped() {
        let rev = engine(&[("h", "ه")]);
        let err = verify_round_trip(&rev, "ه,", "h,").unwrap_err();
        match err {
            Diagnostic::RoundTripFailure {
                unmapped,
                reconverted,
                ..
            } => {
                assert_eq!(unmapped, vec![',']);
                assert_eq!(reconverted, "ه?");
            }
            other => panic!("expected RoundTripFailure, got {other:?}"),
        }
    }
}
