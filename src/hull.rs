//! Online convex hull trick for maximum queries.
//!
//! [`MaxQueryCht`] keeps the upper envelope of a set of lines in a deque.
//! It relies on two monotonicity contracts:
//! - slopes are inserted in non-decreasing order,
//! - query points are issued in non-decreasing order.
//!
//! Under these contracts every line is pushed and popped at most once, so
//! both operations are amortized O(1). Violating either contract silently
//! yields wrong answers in release builds; debug builds assert on it.

use std::collections::VecDeque;

use crate::line::LinearFunction;

/// Upper envelope of lines answering `max_k line_k(x)` for increasing `x`.
///
/// ```
/// use quadgap::hull::MaxQueryCht;
///
/// let mut hull = MaxQueryCht::new();
/// assert_eq!(hull.query(0), None);
/// hull.insert(0, 5);
/// hull.insert(1, 0);
/// hull.insert(3, -12);
/// assert_eq!(hull.query(2), Some(5));
/// assert_eq!(hull.query(10), Some(18));
/// ```
#[derive(Debug, Clone, Default)]
pub struct MaxQueryCht {
    lines: VecDeque<LinearFunction>,
    #[cfg(debug_assertions)]
    last_query: Option<i64>,
}

impl MaxQueryCht {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of lines currently on the envelope.
    #[inline]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Lines on the envelope, ordered by increasing slope.
    pub fn lines(&self) -> impl Iterator<Item = &LinearFunction> {
        self.lines.iter()
    }

    /// Add the line `y = slope * x + intercept`.
    ///
    /// `slope` must be at least the slope of every previously inserted line.
    /// A line parallel to the current tail keeps only the higher intercept.
    pub fn insert(&mut self, slope: i64, intercept: i64) {
        let line = LinearFunction::new(slope, intercept);

        if let Some(tail) = self.lines.back() {
            debug_assert!(
                tail.slope <= slope,
                "slopes must be non-decreasing: {} after {}",
                slope,
                tail.slope
            );
            if tail.slope == slope {
                if tail.intercept >= intercept {
                    return;
                }
                self.lines.pop_back();
            }
        }

        while self.lines.len() >= 2 {
            let n = self.lines.len();
            let (l1, l2) = (&self.lines[n - 2], &self.lines[n - 1]);
            if l1.makes_redundant(l2, &line) {
                self.lines.pop_back();
            } else {
                break;
            }
        }
        self.lines.push_back(line);
    }

    /// Maximum over all inserted lines evaluated at `x`.
    ///
    /// Returns `None` when no line has been inserted. `x` must not be
    /// smaller than any previously queried point.
    pub fn query(&mut self, x: i64) -> Option<i64> {
        #[cfg(debug_assertions)]
        {
            if let Some(prev) = self.last_query {
                debug_assert!(prev <= x, "query points must be non-decreasing: {x} after {prev}");
            }
            self.last_query = Some(x);
        }

        while self.lines.len() >= 2 && self.lines[0].value(x) <= self.lines[1].value(x) {
            self.lines.pop_front();
        }
        self.lines.front().map(|line| line.value(x))
    }
}

#[cfg(test)]
mod tests {
    use super::MaxQueryCht;

    fn naive_max(lines: &[(i64, i64)], x: i64) -> Option<i64> {
        lines.iter().map(|&(m, c)| m * x + c).max()
    }

    #[test]
    fn empty_hull_is_unreachable() {
        let mut hull = MaxQueryCht::new();
        assert!(hull.is_empty());
        assert_eq!(hull.query(0), None);
        assert_eq!(hull.query(7), None);
    }

    #[test]
    fn single_line() {
        let mut hull = MaxQueryCht::new();
        hull.insert(2, 1);
        assert_eq!(hull.query(0), Some(1));
        assert_eq!(hull.query(3), Some(7));
        assert_eq!(hull.len(), 1);
    }

    #[test]
    fn equal_slopes_keep_higher_intercept() {
        let mut hull = MaxQueryCht::new();
        hull.insert(1, 5);
        hull.insert(1, 3);
        assert_eq!(hull.len(), 1);
        assert_eq!(hull.query(0), Some(5));

        hull.insert(1, 9);
        assert_eq!(hull.len(), 1);
        assert_eq!(hull.query(1), Some(10));
    }

    #[test]
    fn equal_slope_replacement_prunes_further() {
        let mut hull = MaxQueryCht::new();
        hull.insert(0, 0);
        hull.insert(1, -2);
        hull.insert(2, -10);
        // replaces (2, -10) and then makes (1, -2) redundant
        hull.insert(2, 0);
        assert_eq!(hull.len(), 2);
        for x in 0..6 {
            assert_eq!(hull.query(x), naive_max(&[(0, 0), (1, -2), (2, 0)], x));
        }
    }

    #[test]
    fn dominated_middle_line_is_pruned() {
        let mut hull = MaxQueryCht::new();
        hull.insert(0, 0);
        hull.insert(1, -5);
        hull.insert(2, -2);
        assert_eq!(hull.len(), 2);
        let lines: Vec<_> = hull.lines().map(|l| (l.slope, l.intercept)).collect();
        assert_eq!(lines, vec![(0, 0), (2, -2)]);
    }

    #[test]
    fn interleaved_inserts_and_queries_match_naive() {
        let mut hull = MaxQueryCht::new();
        let mut inserted = Vec::new();
        let script: &[(i64, i64)] = &[(-4, 10), (-1, 3), (0, 0), (2, -9), (5, -40), (6, -41)];
        for (step, &(m, c)) in script.iter().enumerate() {
            hull.insert(m, c);
            inserted.push((m, c));
            let x = step as i64 * 2;
            assert_eq!(hull.query(x), naive_max(&inserted, x), "x={x}");
        }
    }

    #[test]
    fn repeated_query_point_is_stable() {
        let mut hull = MaxQueryCht::new();
        hull.insert(0, 4);
        hull.insert(3, -2);
        let first = hull.query(2);
        let second = hull.query(2);
        assert_eq!(first, second);
        assert_eq!(first, Some(4));
    }

    #[cfg(debug_assertions)]
    #[test]
    #[should_panic(expected = "slopes must be non-decreasing")]
    fn decreasing_slope_is_rejected_in_debug() {
        let mut hull = MaxQueryCht::new();
        hull.insert(3, 0);
        hull.insert(1, 0);
    }

    #[cfg(debug_assertions)]
    #[test]
    #[should_panic(expected = "query points must be non-decreasing")]
    fn decreasing_query_is_rejected_in_debug() {
        let mut hull = MaxQueryCht::new();
        hull.insert(0, 0);
        hull.query(5);
        hull.query(4);
    }
}
