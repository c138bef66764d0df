//! Lines `y = m*x + c` as stored in the convex hull.
//!
//! Each line stands for one candidate gap origin. For an origin index `k`
//! with baseline score `S` and gap penalty `p`, the engine stores
//! `slope = 2*p*k` and `intercept = S - p*k^2`; evaluating at the current
//! index `x` and adding the shared `-p*x^2` term gives `S - p*(x - k)^2`.

/// A line `y = slope * x + intercept`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinearFunction {
    pub slope: i64,
    pub intercept: i64,
}

impl LinearFunction {
    pub fn new(slope: i64, intercept: i64) -> Self {
        Self { slope, intercept }
    }

    /// Value of the line at `x`.
    ///
    /// The caller is responsible for keeping `slope * x + intercept` within
    /// `i64`; the engine guarantees this through
    /// [`Scoring::check_lengths`](crate::scoring::Scoring::check_lengths).
    #[inline]
    pub fn value(&self, x: i64) -> i64 {
        self.slope * x + self.intercept
    }

    /// Real-valued x-coordinate where `self` and `other` cross.
    ///
    /// Parallel lines never cross; the result is then infinite or NaN.
    #[inline]
    pub fn intersection_x(&self, other: &LinearFunction) -> f64 {
        (other.intercept - self.intercept) as f64 / (self.slope - other.slope) as f64
    }

    /// Exact form of
    /// `self.intersection_x(newer) <= self.intersection_x(middle)`.
    ///
    /// Requires `self.slope < middle.slope < newer.slope`. When it holds,
    /// `newer` overtakes `self` no later than `middle` does, so `middle` is
    /// never the maximum anywhere and can be discarded.
    #[inline]
    pub fn makes_redundant(&self, middle: &LinearFunction, newer: &LinearFunction) -> bool {
        debug_assert!(self.slope < middle.slope && middle.slope < newer.slope);
        let lhs = (self.intercept as i128 - newer.intercept as i128)
            * (middle.slope as i128 - self.slope as i128);
        let rhs = (self.intercept as i128 - middle.intercept as i128)
            * (newer.slope as i128 - self.slope as i128);
        lhs <= rhs
    }
}
