//! Where conversion input comes from.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::iter;
use std::path::{Path, PathBuf};

use flate2::read::GzDecoder;

use crate::error::CliError;

/// Input lines, read as they are consumed.
pub type Lines = Box<dyn Iterator<Item = io::Result<String>>>;

/// One command-line input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    /// An existing file, read line by line; `.gz` files are decompressed.
    File(PathBuf),
    /// An argument that names no file, converted as-is.
    Literal(String),
    Stdin,
}

impl Source {
    /// A path if the argument names an existing file, a literal otherwise.
    pub fn classify(arg: &str) -> Self {
        let path = Path::new(arg);
        if path.is_file() {
            Source::File(path.to_path_buf())
        } else {
            Source::Literal(arg.to_string())
        }
    }

    /// Sources for the given arguments; stdin when there are none.
    pub fn from_args(args: &[String]) -> Vec<Self> {
        if args.is_empty() {
            vec![Source::Stdin]
        } else {
            args.iter().map(|a| Source::classify(a)).collect()
        }
    }

    /// Label used in echoed and error output.
    pub fn label(&self) -> String {
        match self {
            Source::File(path) => path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.display().to_string()),
            Source::Literal(_) => "<arg>".to_string(),
            Source::Stdin => "<stdin>".to_string(),
        }
    }

    pub fn read_error(&self, source: io::Error) -> CliError {
        let path = match self {
            Source::File(path) => path.display().to_string(),
            Source::Literal(s) => s.clone(),
            Source::Stdin => "<stdin>".to_string(),
        };
        CliError::Read { path, source }
    }

    /// Open the source for streaming.
    ///
    /// Bytes that are not UTF-8 become U+FFFD, so a bad line reaches the
    /// converter as unmapped symbols instead of ending the input.
    pub fn lines(&self) -> Result<Lines, CliError> {
        match self {
            Source::File(path) => {
                let file = File::open(path).map_err(|e| self.read_error(e))?;
                let reader: Box<dyn BufRead> = if is_gzip(path) {
                    Box::new(BufReader::new(GzDecoder::new(file)))
                } else {
                    Box::new(BufReader::new(file))
                };
                Ok(Box::new(LossyLines::new(reader)))
            }
            Source::Literal(s) => Ok(Box::new(iter::once(Ok(s.clone())))),
            Source::Stdin => Ok(Box::new(LossyLines::new(io::stdin().lock()))),
        }
    }

    /// Every line at once.
    pub fn read_lines(&self) -> Result<Vec<String>, CliError> {
        self.lines()?
            .map(|line| line.map_err(|e| self.read_error(e)))
            .collect()
    }
}

fn is_gzip(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "gz")
}

/// Lines without their terminators; a trailing `\r` is dropped too.
pub struct LossyLines<R> {
    reader: R,
    buf: Vec<u8>,
}

impl<R: BufRead> LossyLines<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buf: Vec::new(),
        }
    }
}

impl<R: BufRead> Iterator for LossyLines<R> {
    type Item = io::Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        self.buf.clear();
        match self.reader.read_until(b'\n', &mut self.buf) {
            Ok(0) => None,
            Ok(_) => {
                if self.buf.last() == Some(&b'\n') {
                    self.buf.pop();
                }
                if self.buf.last() == Some(&b'\r') {
                    self.buf.pop();
                }
                Some(Ok(String::from_utf8_lossy(&self.buf).into_owned()))
            }
            Err(e) => Some(Err(e)),
        }
    }
}
