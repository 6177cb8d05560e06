//! Coverage measurement.

use std::fmt;

use gapcov_math::{GapSet, Interval};
use serde::Serialize;

use crate::input::CoverageInput;

/// Totals derived from subtracting the coverage from the domain.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CoverageReport {
    /// `x_max - x_min`.
    pub total_width: f64,
    /// Summed width of the gaps left after every removal.
    pub uncovered_width: f64,
    /// `None` when the domain has no positive width.
    pub covered_percentage: Option<f64>,
    /// Remaining gaps in ascending order.
    pub gaps: Vec<Interval>,
}

impl CoverageReport {
    /// Derive the report for a domain from the gaps left in it.
    pub fn from_gaps(x_min: f64, x_max: f64, gaps: &GapSet) -> Self {
        let total_width = x_max - x_min;
        let uncovered_width = gaps.total_width();
        let covered_percentage = if total_width > 0.0 {
            Some(100.0 * (total_width - uncovered_width) / total_width)
        } else {
            None
        };

        Self {
            total_width,
            uncovered_width,
            covered_percentage,
            gaps: gaps.iter().copied().collect(),
        }
    }

    /// Width of the domain that is covered.
    pub fn covered_width(&self) -> f64 {
        (self.total_width - self.uncovered_width).max(0.0)
    }
}

impl fmt::Display for CoverageReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Total distance: {:7.1}", self.total_width)?;
        writeln!(f, "Not covered: {:7.1}", self.uncovered_width)?;
        match self.covered_percentage {
            Some(pct) => write!(f, "Percentage covered: {:5.1}%", pct),
            None => write!(f, "Percentage covered: undefined"),
        }
    }
}

/// Subtract every coverage interval from the domain and report what is left.
pub fn measure(input: &CoverageInput) -> CoverageReport {
    if input.domain_width() <= 0.0 {
        log::warn!(
            "Domain [{}, {}] has no width, coverage percentage is undefined",
            input.x_min,
            input.x_max
        );
    }

    let mut gaps = GapSet::new(input.domain());
    for (i, covered) in input.coverage.iter().enumerate() {
        gaps.remove(*covered);
        log::debug!("Removed {} (#{}): {} gap(s) left", covered, i, gaps.len());
    }

    let report = CoverageReport::from_gaps(input.x_min, input.x_max, &gaps);
    log::info!(
        "Measured {} coverage intervals: {} of {} uncovered",
        input.coverage.len(),
        report.uncovered_width,
        report.total_width
    );
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::parse_input;

    fn measure_str(content: &str) -> CoverageReport {
        measure(&parse_input(content).unwrap())
    }

    #[test]
    fn test_split_domain() {
        let report = measure_str("0 10\n5 8\n");
        assert_eq!(report.total_width, 10.0);
        assert_eq!(report.uncovered_width, 7.0);
        assert_eq!(report.covered_width(), 3.0);
        assert_eq!(report.covered_percentage, Some(30.0));
        assert_eq!(
            report.gaps,
            vec![Interval::new(0.0, 5.0), Interval::new(8.0, 10.0)]
        );
    }

    #[test]
    fn test_overlapping_coverage() {
        let report = measure_str("0 10\n2 4\n3 6\n");
        assert_eq!(report.uncovered_width, 6.0);
        assert_eq!(report.covered_percentage, Some(40.0));
    }

    #[test]
    fn test_coverage_beyond_domain() {
        let report = measure_str("0 10\n-5 15\n");
        assert_eq!(report.uncovered_width, 0.0);
        assert_eq!(report.covered_percentage, Some(100.0));
        assert!(report.gaps.is_empty());
    }

    #[test]
    fn test_disjoint_coverage() {
        let report = measure_str("0 10\n11 12\n");
        assert_eq!(report.uncovered_width, 10.0);
        assert_eq!(report.covered_percentage, Some(0.0));
    }

    #[test]
    fn test_inverted_and_point_coverage_ignored() {
        let report = measure_str("0 10\n8 2\n4 4\n");
        assert_eq!(report.uncovered_width, 10.0);
    }

    #[test]
    fn test_zero_width_domain() {
        let report = measure_str("0 0\n");
        assert_eq!(report.total_width, 0.0);
        assert_eq!(report.uncovered_width, 0.0);
        assert_eq!(report.covered_percentage, None);
    }

    #[test]
    fn test_inverted_domain() {
        let report = measure_str("10 0\n2 3\n");
        assert_eq!(report.total_width, -10.0);
        assert_eq!(report.uncovered_width, 0.0);
        assert_eq!(report.covered_percentage, None);
        assert_eq!(report.covered_width(), 0.0);
    }

    #[test]
    fn test_display_matches_report_layout() {
        let report = measure_str("0 10\n5 8\n");
        assert_eq!(
            report.to_string(),
            "Total distance:    10.0\nNot covered:     7.0\nPercentage covered:  30.0%"
        );

        let empty = measure_str("3 3");
        assert!(empty.to_string().ends_with("Percentage covered: undefined"));
    }

    #[test]
    fn test_serializes_to_json() {
        let report = measure_str("0 10\n5 8\n");
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["uncovered_width"], 7.0);
        assert_eq!(json["covered_percentage"], 30.0);
        assert_eq!(json["gaps"][1]["low"], 8.0);
        assert_eq!(json["gaps"][1]["high"], 10.0);

        let undefined = serde_json::to_value(measure_str("0 0")).unwrap();
        assert!(undefined["covered_percentage"].is_null());
    }

    #[test]
    fn test_measure_with_logging() {
        let _ = env_logger::builder().is_test(true).try_init();
        let report = measure_str("0 100\n10 20\n15 40\n75 80\n");
        assert_eq!(report.uncovered_width, 65.0);
        assert_eq!(report.gaps.len(), 3);
    }
}
