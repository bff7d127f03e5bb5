use std::fs;
use std::io::{self, Write};
use std::process;

use tracing::debug;
use translit_core::ConversionResult;
use translit_tables::{Hooks, Language, LanguagePair};

use crate::error::CliError;
use crate::input::Source;

macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            process::exit(1);
        })
    };
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ConvertOptions {
    /// Target → source instead of source → target.
    pub reverse: bool,
    /// Skip the reverse test even when the table asks for it.
    pub no_verify: bool,
    /// Print `source\tinput\toutput` instead of the output alone.
    pub echo: bool,
    /// Stop at the first line that fails.
    pub fail_on_error: bool,
    /// One JSON result per line.
    pub json: bool,
}

/// Line counts reported at the end of a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    pub processed: usize,
    pub skipped: usize,
    pub printed: usize,
}

impl Summary {
    pub fn write_to<W: Write>(&self, w: &mut W) -> io::Result<()> {
        let plural = if self.processed == 1 { "" } else { "s" };
        writeln!(w, "PROCESSED {:>7} line{plural}", self.processed)?;
        writeln!(w, "  SKIPPED {:>7}", self.skipped)?;
        writeln!(w, "  PRINTED {:>7}", self.printed)
    }
}

/// The built-in pair for `language`, or a custom table run with that
/// language's hooks.
pub fn load_pair(language: &str, table: Option<&str>) -> Result<LanguagePair, CliError> {
    let language: Language = language.parse()?;
    match table {
        None => Ok(LanguagePair::load(language)?),
        Some(path) => {
            let text = fs::read_to_string(path).map_err(|source| CliError::Read {
                path: path.to_string(),
                source,
            })?;
            debug!(path, language = language.name(), "loading custom table");
            let hooks = Hooks::for_language(language)?;
            Ok(LanguagePair::from_toml(&text, hooks)?)
        }
    }
}

pub fn convert_line(
    pair: &LanguagePair,
    line: &str,
    opts: &ConvertOptions,
) -> Result<ConversionResult, CliError> {
    let result = match (opts.reverse, opts.no_verify) {
        (false, false) => pair.convert(line),
        (false, true) => pair.convert_unverified(line),
        (true, false) => pair.revert(line)?,
        (true, true) => pair.revert_unverified(line)?,
    };
    Ok(result)
}

/// Convert every line of every source as it is read.
///
/// Converted lines go to `out`; failed lines go to `err` with their
/// diagnostics and are counted as skipped. With `fail_on_error` the
/// first failure ends the run.
pub fn run<W: Write, E: Write>(
    pair: &LanguagePair,
    sources: &[Source],
    opts: &ConvertOptions,
    out: &mut W,
    err: &mut E,
) -> Result<Summary, CliError> {
    let mut summary = Summary::default();
    for source in sources {
        let label = source.label();
        for line in source.lines()? {
            let line = line.map_err(|e| source.read_error(e))?;
            summary.processed += 1;
            let result = convert_line(pair, &line, opts)?;
            if !result.ok {
                let messages = result.messages().join("; ");
                if opts.fail_on_error {
                    return Err(CliError::Conversion {
                        source_name: label,
                        input: line,
                        messages,
                    });
                }
                writeln!(
                    err,
                    "TRANSLIT ERROR\t{label}\t{line}\t{}\t{messages}",
                    result.output
                )?;
                summary.skipped += 1;
                continue;
            }
            if opts.json {
                writeln!(out, "{}", serde_json::to_string(&result)?)?;
            } else if opts.echo {
                writeln!(out, "{label}\t{line}\t{}", result.output)?;
            } else {
                writeln!(out, "{}", result.output)?;
            }
            summary.printed += 1;
        }
    }
    debug!(
        processed = summary.processed,
        skipped = summary.skipped,
        printed = summary.printed,
        "conversion run finished"
    );
    Ok(summary)
}

pub fn convert_cmd(
    language: &str,
    inputs: &[String],
    table: Option<&str>,
    opts: &ConvertOptions,
) {
    let pair = die!(
        load_pair(language, table),
        "Error loading language pair: {}"
    );
    let sources = Source::from_args(inputs);

    let stdout = io::stdout();
    let stderr = io::stderr();
    let mut out = stdout.lock();
    let mut err = stderr.lock();
    let summary = die!(run(&pair, &sources, opts, &mut out, &mut err), "Error: {}");
    die!(out.flush(), "Error writing output: {}");
    die!(summary.write_to(&mut err), "Error writing summary: {}");
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_sources(
        pair: &LanguagePair,
        sources: &[Source],
        opts: ConvertOptions,
    ) -> (Summary, String, String) {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let summary = run(pair, sources, &opts, &mut out, &mut err).unwrap();
        (
            summary,
            String::from_utf8(out).unwrap(),
            String::from_utf8(err).unwrap(),
        )
    }

    fn run_literals(
        pair: &LanguagePair,
        lines: &[&str],
        opts: ConvertOptions,
    ) -> (Summary, String, String) {
        let sources: Vec<Source> = lines
            .iter()
            .map(|l| Source::Literal(l.to_string()))
            .collect();
        run_sources(pair, &sources, opts)
    }

    #[test]
    fn test_plain_output() {
        let pair = load_pair("ru", None).unwrap();
        let (summary, out, err) =
            run_literals(&pair, &["Москва", "Жуков"], ConvertOptions::default());
        assert_eq!(out, "Moskva\nZhukov\n");
        assert!(err.is_empty());
        assert_eq!(
            summary,
            Summary {
                processed: 2,
                skipped: 0,
                printed: 2
            }
        );
    }

    #[test]
    fn test_failed_line_goes_to_stderr() {
        let pair = load_pair("russian", None).unwrap();
        let (summary, out, err) =
            run_literals(&pair, &["Москва 2024", "Москва"], ConvertOptions::default());
        assert_eq!(out, "Moskva\n");
        assert!(err.starts_with(
            "TRANSLIT ERROR\t<arg>\tМосква 2024\tMoskva ????\t"
        ));
        assert!(err.contains("unknown input symbol '2'"));
        assert_eq!(summary.skipped, 1);
        assert_eq!(summary.printed, 1);
    }

    #[test]
    fn test_fail_on_error_stops() {
        let pair = load_pair("russian", None).unwrap();
        let sources = vec![
            Source::Literal("Москва 2024".into()),
            Source::Literal("Москва".into()),
        ];
        let opts = ConvertOptions {
            fail_on_error: true,
            ..ConvertOptions::default()
        };
        let mut out = Vec::new();
        let mut err = Vec::new();
        let e = run(&pair, &sources, &opts, &mut out, &mut err).unwrap_err();
        assert!(matches!(e, CliError::Conversion { .. }));
        assert!(out.is_empty());
    }

    #[test]
    fn test_echo_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "Москва").unwrap();
        writeln!(file, "Жуков").unwrap();
        let source = Source::File(file.path().to_path_buf());
        let label = source.label();

        let pair = load_pair("russian-swedish", None).unwrap();
        let opts = ConvertOptions {
            echo: true,
            ..ConvertOptions::default()
        };
        let (summary, out, _) = run_sources(&pair, &[source], opts);
        assert_eq!(
            out,
            format!("{label}\tМосква\tMoskva\n{label}\tЖуков\tZjukov\n")
        );
        assert_eq!(summary.printed, 2);
    }

    #[test]
    fn test_invalid_utf8_line_is_skipped_not_fatal() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let mut bytes = "Москва\n".as_bytes().to_vec();
        bytes.extend_from_slice(b"\0\xff\xfe\n");
        bytes.extend_from_slice("Жуков\n".as_bytes());
        fs::write(file.path(), bytes).unwrap();

        let pair = load_pair("ru", None).unwrap();
        let sources = vec![Source::File(file.path().to_path_buf())];
        let (summary, out, err) = run_sources(&pair, &sources, ConvertOptions::default());
        assert_eq!(out, "Moskva\nZhukov\n");
        assert!(err.contains("U+FFFD"), "{err}");
        assert_eq!(
            summary,
            Summary {
                processed: 3,
                skipped: 1,
                printed: 2
            }
        );
    }

    #[test]
    fn test_gzip_input() {
        use flate2::write::GzEncoder;
        use flate2::Compression;

        let file = tempfile::Builder::new().suffix(".gz").tempfile().unwrap();
        let gz = fs::File::create(file.path()).unwrap();
        let mut encoder = GzEncoder::new(gz, Compression::fast());
        encoder.write_all("Москва\nЖуков\n".as_bytes()).unwrap();
        encoder.finish().unwrap();

        let pair = load_pair("russian", None).unwrap();
        let sources = vec![Source::File(file.path().to_path_buf())];
        let (summary, out, _) = run_sources(&pair, &sources, ConvertOptions::default());
        assert_eq!(out, "Moskva\nZhukov\n");
        assert_eq!(summary.printed, 2);
    }

    #[test]
    fn test_reverse() {
        let pair = load_pair("bw", None).unwrap();
        let opts = ConvertOptions {
            reverse: true,
            ..ConvertOptions::default()
        };
        let (_, out, _) = run_literals(&pair, &["Allh"], opts);
        assert_eq!(out, "\u{0627}\u{0644}\u{0644}\u{0647}\n");
    }

    #[test]
    fn test_reverse_without_table_is_an_error() {
        let pair = load_pair("russian", None).unwrap();
        let opts = ConvertOptions {
            reverse: true,
            ..ConvertOptions::default()
        };
        let err = convert_line(&pair, "Moskva", &opts).unwrap_err();
        assert!(matches!(err, CliError::Config(_)));
    }

    #[test]
    fn test_no_verify_accepts_lossy_line() {
        let pair = load_pair("buckwalter", None).unwrap();
        let line = "\u{0627}, \u{0644}";
        let verified = convert_line(&pair, line, &ConvertOptions::default()).unwrap();
        assert!(!verified.ok);
        let opts = ConvertOptions {
            no_verify: true,
            ..ConvertOptions::default()
        };
        let unverified = convert_line(&pair, line, &opts).unwrap();
        assert!(unverified.ok);
        assert_eq!(unverified.output, "A, l");
    }

    #[test]
    fn test_json_output() {
        let pair = load_pair("russian", None).unwrap();
        let opts = ConvertOptions {
            json: true,
            ..ConvertOptions::default()
        };
        let (_, out, _) = run_literals(&pair, &["Москва"], opts);
        let value: serde_json::Value = serde_json::from_str(out.trim_end()).unwrap();
        assert_eq!(value["output"], "Moskva");
        assert_eq!(value["ok"], true);
        assert_eq!(value["diagnostics"], serde_json::json!([]));
        assert!(value.get("normalized").is_none());
    }

    #[test]
    fn test_json_keeps_caller_input() {
        // shadda before damma; NFC swaps them before segmenting
        let line = "\u{062D}\u{064F}\u{0645}\u{0651}\u{064F}\u{0635}";
        let pair = load_pair("buckwalter", None).unwrap();
        let opts = ConvertOptions {
            json: true,
            ..ConvertOptions::default()
        };
        let (_, out, _) = run_literals(&pair, &[line], opts);
        let value: serde_json::Value = serde_json::from_str(out.trim_end()).unwrap();
        assert_eq!(value["input"], line);
        assert_eq!(
            value["normalized"],
            "\u{062D}\u{064F}\u{0645}\u{064F}\u{0651}\u{0635}"
        );
        assert_eq!(value["output"], "Hum~uS");
    }

    #[test]
    fn test_custom_table() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"
[pair]
name = "runes"
source = "runic"
target = "lat"
reversible = true
verify = true

[passthrough]
chars = " "

[mappings]
entries = [["ᚠ", "f"], ["ᚢ", "u"], ["ᚦ", "th"]]
"#
        )
        .unwrap();
        let path = file.path().to_str().unwrap().to_string();
        let pair = load_pair("russian", Some(&path)).unwrap();
        assert_eq!(pair.name(), "runes");
        let (_, out, _) = run_literals(&pair, &["ᚠᚢᚦ ᚠ"], ConvertOptions::default());
        assert_eq!(out, "futh f\n");
    }

    #[test]
    fn test_unknown_language() {
        let err = load_pair("klingon", None).unwrap_err();
        assert_eq!(err.to_string(), "unknown language 'klingon'");
    }

    #[test]
    fn test_summary_text() {
        let summary = Summary {
            processed: 1,
            skipped: 0,
            printed: 1,
        };
        let mut buf = Vec::new();
        summary.write_to(&mut buf).unwrap();
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "PROCESSED       1 line\n  SKIPPED       0\n  PRINTED       1\n"
        );
    }
}
