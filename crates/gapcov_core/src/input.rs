//! Coverage input parsing.
//!
//! Input is a stream of whitespace-separated decimal numbers, spread over any
//! number of lines. The first two numbers are the domain bounds `xMin xMax`;
//! every following pair `x0 x1` is one coverage interval.
//!
//! ```text
//! 0 100
//! 10 20
//! 15 40   75 80
//! ```

use std::fs;
use std::io::Read;
use std::path::Path;

use gapcov_math::Interval;
use thiserror::Error;

/// Errors that can occur while reading coverage input.
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Missing domain: expected two numbers xMin xMax")]
    MissingDomain,

    #[error("Invalid number at line {line}: {token:?}")]
    InvalidNumber { line: usize, token: String },

    #[error("Non-finite number at line {line}: {token:?}")]
    NonFinite { line: usize, token: String },

    #[error("Unpaired value at line {line}: coverage intervals need two numbers")]
    UnpairedValue { line: usize },
}

/// Result type for parsing operations.
pub type ParseResult<T> = Result<T, ParseError>;

/// A parsed domain and the intervals covering it, in input order.
#[derive(Debug, Clone, PartialEq)]
pub struct CoverageInput {
    pub x_min: f64,
    pub x_max: f64,
    pub coverage: Vec<Interval>,
}

impl CoverageInput {
    /// The domain `[x_min, x_max]` as an interval.
    pub fn domain(&self) -> Interval {
        Interval::new(self.x_min, self.x_max)
    }

    /// Width of the domain. Negative when the bounds are inverted.
    pub fn domain_width(&self) -> f64 {
        self.x_max - self.x_min
    }
}

/// Parse coverage input from a string.
pub fn parse_input(content: &str) -> ParseResult<CoverageInput> {
    let numbers = tokenize(content)?;
    let mut values = numbers.iter();

    let (x_min, x_max) = match (values.next(), values.next()) {
        (Some(&(_, lo)), Some(&(_, hi))) => (lo, hi),
        _ => return Err(ParseError::MissingDomain),
    };

    let mut coverage = Vec::with_capacity(numbers.len().saturating_sub(2) / 2);
    while let Some(&(line, x0)) = values.next() {
        let Some(&(_, x1)) = values.next() else {
            return Err(ParseError::UnpairedValue { line });
        };
        coverage.push(Interval::new(x0, x1));
    }

    log::debug!(
        "Parsed domain [{}, {}] with {} coverage intervals",
        x_min,
        x_max,
        coverage.len()
    );

    Ok(CoverageInput {
        x_min,
        x_max,
        coverage,
    })
}

/// Read and parse coverage input from any reader (e.g. stdin).
pub fn read_input<R: Read>(mut reader: R) -> ParseResult<CoverageInput> {
    let mut content = String::new();
    reader.read_to_string(&mut content)?;
    parse_input(&content)
}

/// Load and parse coverage input from a file.
pub fn load_input<P: AsRef<Path>>(path: P) -> ParseResult<CoverageInput> {
    let path = path.as_ref();
    log::info!("Loading coverage input: {}", path.display());
    let content = fs::read_to_string(path)?;
    parse_input(&content)
}

/// Split into numbers, each tagged with its 1-based line number.
fn tokenize(content: &str) -> ParseResult<Vec<(usize, f64)>> {
    let mut numbers = Vec::new();
    for (index, line) in content.lines().enumerate() {
        let line_num = index + 1;
        for token in line.split_whitespace() {
            let value: f64 = token.parse().map_err(|_| ParseError::InvalidNumber {
                line: line_num,
                token: token.to_string(),
            })?;
            if !value.is_finite() {
                return Err(ParseError::NonFinite {
                    line: line_num,
                    token: token.to_string(),
                });
            }
            numbers.push((line_num, value));
        }
    }
    Ok(numbers)
}
