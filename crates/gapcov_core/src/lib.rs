//! Gapcov Core - measuring how much of a domain a set of intervals covers.
//!
//! This crate provides:
//!
//! - **Input**: parsing the whitespace-separated number stream into a domain
//!   and its coverage intervals
//! - **Measurement**: subtracting the coverage from the domain and deriving
//!   the uncovered width and covered percentage
//!
//! # Example
//!
//! ```
//! use gapcov_core::{measure, parse_input};
//!
//! let input = parse_input("0 10\n5 8\n")?;
//! let report = measure(&input);
//! assert_eq!(report.uncovered_width, 7.0);
//! # Ok::<(), gapcov_core::ParseError>(())
//! ```

pub mod input;
pub mod report;

// Re-export commonly used types
pub use gapcov_math::{GapSet, Interval};
pub use input::{load_input, parse_input, read_input, CoverageInput, ParseError, ParseResult};
pub use report::{measure, CoverageReport};
