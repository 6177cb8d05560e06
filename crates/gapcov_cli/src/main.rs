// Measure uncovered width of a domain.
// Run with: cargo run --release --bin gapcov -- [--json] [--gaps] [input.txt]

use std::env;
use std::io;
use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result};
use gapcov_core::{load_input, measure, read_input, CoverageInput, CoverageReport};

const USAGE: &str = "\
Usage: gapcov [--json] [--gaps] [PATH]

Reads `xMin xMax` followed by `x0 x1` coverage pairs from PATH, or from
standard input when no PATH is given, and reports the uncovered width.

Options:
  --json      Print the report as JSON
  --gaps      Also list the remaining uncovered intervals
  -h, --help  Show this message";

/// Parsed command line.
#[derive(Debug, Default, PartialEq)]
struct Options {
    path: Option<PathBuf>,
    json: bool,
    gaps: bool,
    help: bool,
}

impl Options {
    fn parse<I: IntoIterator<Item = String>>(args: I) -> Result<Self, String> {
        let mut options = Options::default();
        for arg in args {
            match arg.as_str() {
                "--json" => options.json = true,
                "--gaps" => options.gaps = true,
                "-h" | "--help" => options.help = true,
                flag if flag.starts_with('-') && flag != "-" => {
                    return Err(format!("unknown option: {}", flag));
                }
                path => {
                    if options.path.is_some() {
                        return Err(format!("unexpected argument: {}", path));
                    }
                    // "-" explicitly selects stdin
                    if path != "-" {
                        options.path = Some(PathBuf::from(path));
                    }
                }
            }
        }
        Ok(options)
    }
}

fn load(options: &Options) -> Result<CoverageInput> {
    match &options.path {
        Some(path) => load_input(path)
            .with_context(|| format!("Failed to read coverage input from {}", path.display())),
        None => read_input(io::stdin().lock()).context("Failed to read coverage input from stdin"),
    }
}

fn render(report: &CoverageReport, options: &Options) -> Result<String> {
    if options.json {
        return serde_json::to_string_pretty(report).context("Failed to serialize report");
    }

    let mut out = report.to_string();
    if options.gaps {
        out.push_str(&format!("\nGaps: {}", report.gaps.len()));
        for gap in &report.gaps {
            out.push_str(&format!("\n  {} width {:.1}", gap, gap.width()));
        }
    }
    Ok(out)
}

fn main() -> Result<()> {
    env_logger::init();

    let options = match Options::parse(env::args().skip(1)) {
        Ok(options) => options,
        Err(message) => {
            eprintln!("gapcov: {}\n\n{}", message, USAGE);
            process::exit(2);
        }
    };
    if options.help {
        println!("{}", USAGE);
        return Ok(());
    }

    let input = load(&options)?;
    let report = measure(&input);
    log::debug!("Remaining gaps: {:?}", report.gaps);

    println!("{}", render(&report, &options)?);
    Ok(())
}
