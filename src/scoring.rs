//! Scoring model: a match/mismatch scalar pair and a quadratic gap penalty.
//!
//! A gap of length `L` contributes `-gap_penalty * L^2` to the alignment
//! score. A gap is a maximal run of indel columns of the same kind, so two
//! adjacent gaps in the same sequence are always one longer gap.

use crate::error::AlignError;

/// Largest magnitude any intermediate value may reach.
///
/// Half of `i64::MAX` leaves room for the sum of two bounded terms.
const SAFE_MAGNITUDE: u128 = (i64::MAX / 2) as u128;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scoring {
    pub match_score: i64,
    pub mismatch_score: i64,
    pub gap_penalty: i64,
}

impl Scoring {
    /// Build a scoring model.
    ///
    /// `mismatch_score` is added as given (usually negative). `gap_penalty`
    /// is a cost coefficient and must be non-negative.
    pub fn new(
        match_score: i64,
        mismatch_score: i64,
        gap_penalty: i64,
    ) -> Result<Self, AlignError> {
        if gap_penalty < 0 {
            return Err(AlignError::NegativeGapPenalty(gap_penalty));
        }
        Ok(Self {
            match_score,
            mismatch_score,
            gap_penalty,
        })
    }

    #[inline]
    pub fn score_pair(&self, a: u8, b: u8) -> i64 {
        if a == b {
            self.match_score
        } else {
            self.mismatch_score
        }
    }

    /// Score contribution of one gap of `len` symbols, or `None` if it does
    /// not fit in an `i64`.
    pub fn gap_cost(&self, len: usize) -> Option<i64> {
        let len = i64::try_from(len).ok()?;
        len.checked_mul(len)?
            .checked_mul(self.gap_penalty)?
            .checked_neg()
    }

    /// Check that aligning sequences of lengths `n` and `m` stays inside
    /// 64-bit arithmetic.
    ///
    /// With `L = n + m`, every score is bounded by
    /// `L * max(|match|, |mismatch|) + p * L^2`, every hull intercept and
    /// `slope * x` product by a small multiple of `p * L^2`. Requiring
    /// `L * max(|match|, |mismatch|) + 4 * p * (L + 1)^2 <= i64::MAX / 2`
    /// covers all of them, including the 128-bit cross products used when
    /// pruning the hull.
    pub fn check_lengths(&self, n: usize, m: usize) -> Result<(), AlignError> {
        let overflow = || AlignError::ScoreOverflow {
            n,
            m,
            gap_penalty: self.gap_penalty,
        };

        let total = (n as u128).checked_add(m as u128).ok_or_else(overflow)?;
        let symbol = u128::from(
            self.match_score
                .unsigned_abs()
                .max(self.mismatch_score.unsigned_abs()),
        );
        let penalty = self.gap_penalty.max(0) as u128;
        let span = total + 1;
        let bound = total
            .checked_mul(symbol)
            .and_then(|pairs| {
                span.checked_mul(span)
                    .and_then(|sq| sq.checked_mul(4 * penalty))
                    .and_then(|gaps| gaps.checked_add(pairs))
            })
            .ok_or_else(overflow)?;

        if bound > SAFE_MAGNITUDE {
            return Err(overflow());
        }
        Ok(())
    }
}
