//! Tolerance-based floating point comparison
//!
//! Every geometric predicate in the crate routes its comparisons through
//! these helpers so that rounding error is masked the same way everywhere.

/// Absolute tolerance used by every comparison
pub const EPSILON: f64 = 1.0e-9;

/// `x == y` within [`EPSILON`]. NaN is never equal to anything.
#[inline]
pub fn equal(x: f64, y: f64) -> bool {
    (x - y).abs() < EPSILON
}

/// `x >= y` within [`EPSILON`]
#[inline]
pub fn greater_or_equal(x: f64, y: f64) -> bool {
    equal(x, y) || x > y
}

/// `x <= y` within [`EPSILON`]
#[inline]
pub fn less_or_equal(x: f64, y: f64) -> bool {
    equal(x, y) || x < y
}

/// Closed interval `[lo, hi]` on the real line
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    /// Lower bound
    pub lo: f64,
    /// Upper bound
    pub hi: f64,
}

impl Interval {
    /// Create an interval, ordering the bounds
    pub fn new(a: f64, b: f64) -> Self {
        if a <= b {
            Self { lo: a, hi: b }
        } else {
            Self { lo: b, hi: a }
        }
    }

    /// Smallest interval containing every value, or `None` for no values
    pub fn spanning<I: IntoIterator<Item = f64>>(values: I) -> Option<Self> {
        values.into_iter().fold(None, |acc: Option<Self>, v| {
            Some(match acc {
                None => Self { lo: v, hi: v },
                Some(i) => Self { lo: i.lo.min(v), hi: i.hi.max(v) },
            })
        })
    }

    /// True if `value` lies in the interval, bounds included within tolerance
    pub fn contains(&self, value: f64) -> bool {
        less_or_equal(self.lo, value) && less_or_equal(value, self.hi)
    }

    /// True if the two intervals share at least one point (see [`intervals_overlap`])
    pub fn overlaps(&self, other: &Self) -> bool {
        intervals_overlap(self, other)
    }
}

/// True iff either interval's lower bound lies, inclusively and within
/// tolerance, inside the other interval.
pub fn intervals_overlap(first: &Interval, second: &Interval) -> bool {
    first.contains(second.lo) || second.contains(first.lo)
}
