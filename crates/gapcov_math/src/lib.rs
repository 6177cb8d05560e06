//! Gapcov Math - closed intervals and the gap subtraction engine.
//!
//! - [`Interval`]: a closed range `[low, high]`, empty when `low > high`
//! - [`GapSet`]: ordered, disjoint gaps that coverage intervals are removed from

mod gap_set;
mod interval;

pub use gap_set::GapSet;
pub use interval::{EmptyRangeError, Interval};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domain_minus_coverage() {
        let mut gaps = GapSet::spanning(0.0, 10.0);
        gaps.remove(Interval::new(5.0, 8.0));
        assert_eq!(gaps.total_width(), 7.0);
    }

    #[test]
    fn test_gaps_are_intervals() {
        let gaps = GapSet::spanning(-1.0, 1.0);
        let first: &Interval = gaps.iter().next().unwrap();
        assert_eq!(*first, Interval::new(-1.0, 1.0));
    }
}
