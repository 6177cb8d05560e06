use std::fmt;

use crate::Interval;

/// An ordered sequence of disjoint, non-empty intervals.
///
/// A `GapSet` starts as the whole domain and shrinks as covered intervals are
/// removed from it. Stored gaps never overlap, never have zero width, and are
/// kept in ascending order of their low bound.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GapSet {
    gaps: Vec<Interval>,
}

impl GapSet {
    /// Create a gap set covering `domain`, or no gaps if the domain has zero width.
    pub fn new(domain: Interval) -> Self {
        let gaps = if domain.width() > 0.0 {
            vec![domain]
        } else {
            Vec::new()
        };
        Self { gaps }
    }

    /// Create a gap set covering `[x_min, x_max]`.
    pub fn spanning(x_min: f64, x_max: f64) -> Self {
        Self::new(Interval::new(x_min, x_max))
    }

    /// Subtract `to_remove` from the gaps.
    ///
    /// Each gap overlapping `to_remove` is replaced in place by the parts of it
    /// that lie below and above the removed range. Zero-width removals,
    /// including single points, change nothing.
    pub fn remove(&mut self, to_remove: Interval) {
        if to_remove.width() == 0.0 {
            return;
        }
        let (Ok(lo), Ok(hi)) = (to_remove.min(), to_remove.max()) else {
            return;
        };

        let mut i = 0;
        while i < self.gaps.len() {
            let current = self.gaps[i];
            if current.low > hi {
                break;
            }
            if !current.overlaps(&to_remove) {
                i += 1;
                continue;
            }

            let fragments: Vec<Interval> = [current.below(lo), current.above(hi)]
                .into_iter()
                .filter(|part| part.width() > 0.0)
                .collect();
            let kept = fragments.len();
            self.gaps.splice(i..=i, fragments);
            i += kept;
        }
    }

    /// The sum of the widths of all remaining gaps.
    pub fn total_width(&self) -> f64 {
        self.gaps.iter().map(Interval::width).sum()
    }

    /// Iterate over the remaining gaps in ascending order.
    pub fn iter(&self) -> std::slice::Iter<'_, Interval> {
        self.gaps.iter()
    }

    /// Number of disjoint gaps remaining.
    pub fn len(&self) -> usize {
        self.gaps.len()
    }

    /// Returns true if the whole domain has been covered.
    pub fn is_empty(&self) -> bool {
        self.gaps.is_empty()
    }
}

impl<'a> IntoIterator for &'a GapSet {
    type Item = &'a Interval;
    type IntoIter = std::slice::Iter<'a, Interval>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for GapSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, gap) in self.gaps.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", gap)?;
        }
        write!(f, "]")
    }
}
