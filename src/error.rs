//! Error types surfaced by the alignment engine.

use thiserror::Error;

use crate::input::InputError;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AlignError {
    /// The hull needs non-decreasing slopes, which holds only for `p >= 0`.
    #[error("gap penalty must be non-negative, got {0}")]
    NegativeGapPenalty(i64),

    #[error(
        "scores may overflow 64-bit arithmetic for sequence lengths {n} and {m} \
         with gap penalty {gap_penalty}"
    )]
    ScoreOverflow { n: usize, m: usize, gap_penalty: i64 },

    #[error("dp table of {rows} x {cols} cells is too large to address")]
    TableTooLarge { rows: usize, cols: usize },

    /// No alignment reaches the final cell. Never expected for valid input.
    #[error("internal invariant violated: no alignment reaches cell ({n}, {m})")]
    Unreachable { n: usize, m: usize },

    #[error(transparent)]
    Input(#[from] InputError),
}

impl AlignError {
    /// True for errors caused by the caller's input rather than by a defect.
    pub fn is_input_error(&self) -> bool {
        !matches!(self, AlignError::Unreachable { .. })
    }
}
