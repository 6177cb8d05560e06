use std::fmt;

use serde::Serialize;
use thiserror::Error;

/// Returned by [`Interval::min`] and [`Interval::max`] when the interval is empty.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("{accessor}() called on an empty interval")]
pub struct EmptyRangeError {
    pub accessor: &'static str,
}

/// A closed range of numbers `[low, high]`.
///
/// There is no separate "no interval" state: any interval with `low > high`
/// is empty and contains no numbers. Every operation except [`min`](Self::min)
/// and [`max`](Self::max) is total over empty and inverted bounds.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Interval {
    pub(crate) low: f64,
    pub(crate) high: f64,
}

impl Interval {
    /// An empty interval (low > high, contains nothing).
    pub const EMPTY: Interval = Interval {
        low: f64::INFINITY,
        high: f64::NEG_INFINITY,
    };

    /// Create an interval from min to max. If min > max the interval is empty.
    pub fn new(min: f64, max: f64) -> Self {
        Self { low: min, high: max }
    }

    /// Returns true if the interval contains no numbers.
    pub fn is_empty(&self) -> bool {
        self.high < self.low
    }

    /// Returns true if x is within the interval [low, high] (inclusive).
    pub fn contains(&self, x: f64) -> bool {
        self.low <= x && x <= self.high
    }

    /// Returns true if both intervals are non-empty and share at least one number.
    ///
    /// Intervals are closed, so touching at a single endpoint counts.
    pub fn overlaps(&self, other: &Interval) -> bool {
        if self.is_empty() || other.is_empty() {
            return false;
        }
        !(self.low > other.high || self.high < other.low)
    }

    /// Distance from low to high, clamped at zero.
    pub fn width(&self) -> f64 {
        (self.high - self.low).max(0.0)
    }

    /// The smallest number in the interval.
    pub fn min(&self) -> Result<f64, EmptyRangeError> {
        if self.is_empty() {
            return Err(EmptyRangeError { accessor: "min" });
        }
        Ok(self.low)
    }

    /// The largest number in the interval.
    pub fn max(&self) -> Result<f64, EmptyRangeError> {
        if self.is_empty() {
            return Err(EmptyRangeError { accessor: "max" });
        }
        Ok(self.high)
    }

    /// The part of this interval no greater than x. May be empty.
    pub fn below(&self, x: f64) -> Interval {
        Interval::new(self.low, x.min(self.high))
    }

    /// The part of this interval no less than x. May be empty.
    pub fn above(&self, x: f64) -> Interval {
        Interval::new(x.max(self.low), self.high)
    }
}

impl PartialEq for Interval {
    fn eq(&self, other: &Self) -> bool {
        if self.is_empty() && other.is_empty() {
            return true;
        }
        self.low == other.low && self.high == other.high
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.low, self.high)
    }
}
