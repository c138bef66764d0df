//! Quadratic-gap global alignment engine.
//!
//! The engine fills three tables over all prefix pairs `(i, j)`:
//! - `match`: alignments ending in a match/mismatch column,
//! - `gap_a`: alignments ending in a gap in the second sequence (symbols of
//!   the first sequence aligned to `-`), the gap closing at row `i`,
//! - `gap_b`: alignments ending in a gap in the first sequence, closing at
//!   column `j`.
//!
//! A gap of length `L` costs `p * L^2`, so the best `gap_a[i][j]` is
//! `max_k (source(k, j) - p * (i - k)^2)` over every possible origin row
//! `k < i`. Expanding the square and dropping the `-p * i^2` term shared by
//! all origins turns each origin into a line in `i`, and the maximum over
//! origins into an upper-envelope query. Each column keeps one persistent
//! [`MaxQueryCht`] for vertical gaps; each row builds a fresh one for
//! horizontal gaps. The whole fill is O(n * m) amortized.
//!
//! New gaps are only opened from a match column or from a gap in the other
//! sequence. A gap is a maximal run of same-kind indel columns, so a gap
//! directly following a gap of the same kind would just be a longer gap.

use crate::error::AlignError;
use crate::hull::MaxQueryCht;
use crate::scoring::Scoring;
use crate::table::ScoreTable;

/// A validated alignment instance: two sequences and a scoring model.
#[derive(Debug, Clone)]
pub struct QuadGapProblem<'a> {
    s: &'a [u8],
    t: &'a [u8],
    scoring: Scoring,
}

impl<'a> QuadGapProblem<'a> {
    /// Validate the instance.
    ///
    /// Fails if scores could leave 64-bit range for these lengths or if the
    /// DP tables could not be addressed.
    pub fn new(s: &'a [u8], t: &'a [u8], scoring: Scoring) -> Result<Self, AlignError> {
        if scoring.gap_penalty < 0 {
            return Err(AlignError::NegativeGapPenalty(scoring.gap_penalty));
        }
        scoring.check_lengths(s.len(), t.len())?;
        let rows = s.len() + 1;
        let cols = t.len() + 1;
        rows.checked_mul(cols)
            .and_then(|cells| cells.checked_mul(3))
            .ok_or(AlignError::TableTooLarge { rows, cols })?;
        Ok(Self { s, t, scoring })
    }

    pub fn s(&self) -> &'a [u8] {
        self.s
    }

    pub fn t(&self) -> &'a [u8] {
        self.t
    }

    pub fn scoring(&self) -> &Scoring {
        &self.scoring
    }

    fn n(&self) -> usize {
        self.s.len()
    }

    fn m(&self) -> usize {
        self.t.len()
    }
}

/// The three filled DP tables, each `(n + 1) x (m + 1)`.
#[derive(Debug, Clone)]
pub struct DpTables {
    matched: ScoreTable,
    gap_a: ScoreTable,
    gap_b: ScoreTable,
}

impl DpTables {
    fn unreachable(rows: usize, cols: usize) -> Result<Self, AlignError> {
        Ok(Self {
            matched: ScoreTable::unreachable(rows, cols)?,
            gap_a: ScoreTable::unreachable(rows, cols)?,
            gap_b: ScoreTable::unreachable(rows, cols)?,
        })
    }

    pub fn rows(&self) -> usize {
        self.matched.rows()
    }

    pub fn cols(&self) -> usize {
        self.matched.cols()
    }

    /// Best score of prefixes `(i, j)` ending in a match/mismatch column.
    pub fn match_at(&self, i: usize, j: usize) -> Option<i64> {
        self.matched.get(i, j)
    }

    /// Best score of prefixes `(i, j)` ending in a gap in the second sequence.
    pub fn gap_a_at(&self, i: usize, j: usize) -> Option<i64> {
        self.gap_a.get(i, j)
    }

    /// Best score of prefixes `(i, j)` ending in a gap in the first sequence.
    pub fn gap_b_at(&self, i: usize, j: usize) -> Option<i64> {
        self.gap_b.get(i, j)
    }

    /// Best score of prefixes `(i, j)` over all three end states.
    pub fn best_at(&self, i: usize, j: usize) -> Option<i64> {
        self.match_at(i, j)
            .max(self.gap_a_at(i, j))
            .max(self.gap_b_at(i, j))
    }

    /// Best score of the full alignment.
    pub fn final_score(&self) -> Option<i64> {
        self.best_at(self.rows() - 1, self.cols() - 1)
    }
}

/// Quadratic-gap alignment engine for one [`QuadGapProblem`].
///
/// ```
/// use quadgap::{QuadGapEngine, QuadGapProblem, Scoring};
///
/// let scoring = Scoring::new(1, -1, 1).unwrap();
/// let problem = QuadGapProblem::new(b"AA", b"", scoring).unwrap();
/// // one gap of length 2 costs 2^2
/// assert_eq!(QuadGapEngine::new(problem).run(), Ok(-4));
/// ```
#[derive(Debug, Clone)]
pub struct QuadGapEngine<'a> {
    problem: QuadGapProblem<'a>,
}

impl<'a> QuadGapEngine<'a> {
    pub fn new(problem: QuadGapProblem<'a>) -> Self {
        Self { problem }
    }

    pub fn problem(&self) -> &QuadGapProblem<'a> {
        &self.problem
    }

    /// Fill all three tables and return the optimal global score.
    ///
    /// `AlignError::Unreachable` means the recurrence left the final cell
    /// without any alignment, which indicates a defect rather than bad input.
    pub fn run(&self) -> Result<i64, AlignError> {
        let (n, m) = (self.problem.n(), self.problem.m());
        #[cfg(feature = "tracing")]
        let span = tracing::info_span!("quadgap_run", n, m);
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        self.fill()?
            .final_score()
            .ok_or(AlignError::Unreachable { n, m })
    }

    /// Fill and return the `match`, `gap_a` and `gap_b` tables.
    pub fn fill(&self) -> Result<DpTables, AlignError> {
        let s = self.problem.s;
        let t = self.problem.t;
        let scoring = &self.problem.scoring;
        let (n, m) = (s.len(), t.len());

        let mut tables = DpTables::unreachable(n + 1, m + 1)?;
        tables.matched.set(0, 0, Some(0));

        // Gaps opened at row 0. Only column 0 has a real baseline there.
        let mut col_hulls: Vec<MaxQueryCht> = (0..=m)
            .map(|j| {
                let mut hull = MaxQueryCht::new();
                self.open_gap(&mut hull, 0, tables.match_at(0, j));
                hull
            })
            .collect();

        for i in 0..=n {
            #[cfg(feature = "tracing")]
            let span = tracing::trace_span!("row", i);
            #[cfg(feature = "tracing")]
            let _enter = span.enter();

            // Gaps opened at column 0 of this row; real only for row 0.
            let mut row_hull = MaxQueryCht::new();
            self.open_gap(&mut row_hull, 0, tables.match_at(i, 0));

            for j in 0..=m {
                if i == 0 && j == 0 {
                    continue;
                }

                if i > 0 && j > 0 {
                    let pair = scoring.score_pair(s[i - 1], t[j - 1]);
                    let diag = tables.best_at(i - 1, j - 1).map(|best| best + pair);
                    tables.matched.set(i, j, diag);
                }

                if i > 0 {
                    let vertical = col_hulls[j]
                        .query(i as i64)
                        .map(|partial| self.close_gap(i, partial));
                    tables.gap_a.set(i, j, vertical);
                }

                if j > 0 {
                    let horizontal = row_hull
                        .query(j as i64)
                        .map(|partial| self.close_gap(j, partial));
                    tables.gap_b.set(i, j, horizontal);
                }

                let here = tables.match_at(i, j);
                self.open_gap(&mut col_hulls[j], i, here.max(tables.gap_b_at(i, j)));
                self.open_gap(&mut row_hull, j, here.max(tables.gap_a_at(i, j)));
            }
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(
            n,
            m,
            column_hull_lines = col_hulls.iter().map(MaxQueryCht::len).sum::<usize>(),
            "dp tables filled"
        );

        Ok(tables)
    }

    /// Offer a gap starting after index `origin` with the given baseline.
    ///
    /// The line `2*p*origin * x + (baseline - p*origin^2)` evaluated at the
    /// closing index `x` is the gap score minus the shared `-p*x^2` term.
    #[inline]
    fn open_gap(&self, hull: &mut MaxQueryCht, origin: usize, baseline: Option<i64>) {
        if let Some(baseline) = baseline {
            let p = self.problem.scoring.gap_penalty;
            let k = origin as i64;
            hull.insert(2 * p * k, baseline - p * k * k);
        }
    }

    /// Add back the `-p*x^2` term dropped from every line.
    #[inline]
    fn close_gap(&self, at: usize, partial: i64) -> i64 {
        let p = self.problem.scoring.gap_penalty;
        let x = at as i64;
        partial - p * x * x
    }
}

/// Optimal quadratic-gap global alignment score of `s` and `t`.
pub fn align_score(s: &[u8], t: &[u8], scoring: Scoring) -> Result<i64, AlignError> {
    QuadGapEngine::new(QuadGapProblem::new(s, t, scoring)?).run()
}
