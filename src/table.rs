//! Flat DP score tables.
//!
//! A [`ScoreTable`] stores one optional score per cell of a
//! `rows x cols` grid in a single `Vec`, cell `(row, col)` living at offset
//! `row * cols + col`. `None` marks an unreachable cell.

use crate::error::AlignError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreTable {
    rows: usize,
    cols: usize,
    cells: Vec<Option<i64>>,
}

impl ScoreTable {
    /// Allocate a table with every cell unreachable.
    ///
    /// Fails if `rows * cols` does not fit in `usize`; this is the only
    /// place the dimensions are validated.
    pub fn unreachable(rows: usize, cols: usize) -> Result<Self, AlignError> {
        let len = rows
            .checked_mul(cols)
            .ok_or(AlignError::TableTooLarge { rows, cols })?;
        Ok(Self {
            rows,
            cols,
            cells: vec![None; len],
        })
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    #[inline]
    fn offset(&self, row: usize, col: usize) -> usize {
        debug_assert!(
            row < self.rows && col < self.cols,
            "cell ({row}, {col}) out of range"
        );
        row * self.cols + col
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Option<i64> {
        self.cells[self.offset(row, col)]
    }

    #[inline]
    pub fn set(&mut self, row: usize, col: usize, value: Option<i64>) {
        let idx = self.offset(row, col);
        self.cells[idx] = value;
    }

    /// Scores of one row, columns `0..cols`.
    #[cfg(test)]
    fn row(&self, row: usize) -> &[Option<i64>] {
        let start = self.offset(row, 0);
        &self.cells[start..start + self.cols]
    }
}
