//! Quadratic-gap global alignment (quadgap)
//!
//! This crate computes the optimal global alignment score of two sequences
//! when a gap of length `L` costs `gap_penalty * L^2`. Unlike linear or
//! affine gaps, the best origin of a quadratic gap depends on where it ends,
//! so the classic O(1) Gotoh transitions do not apply.
//!
//! ## Core idea
//! 1. Expand `score(k) - p * (x - k)^2` and drop the `-p * x^2` term that is
//!    shared by every origin `k`. What remains is a line in `x`.
//! 2. Keep those lines in a [`MaxQueryCht`](hull::MaxQueryCht): one
//!    persistent hull per DP column for vertical gaps and one hull per row,
//!    rebuilt every row, for horizontal gaps.
//! 3. Let [`QuadGapEngine`] interleave the `match`, `gap_a` and `gap_b`
//!    tables cell by cell, querying and feeding the hulls.
//!
//! The fill runs in O(n * m) amortized time with three `(n+1) x (m+1)`
//! tables.
//!
//! ## Quick start
//! ```
//! use quadgap::{QuadGapEngineBuilder, Scoring};
//!
//! let engine = QuadGapEngineBuilder::new(b"GATTACA", b"GATACA")
//!     .match_score(2)
//!     .mismatch_score(-1)
//!     .gap_penalty(1)
//!     .build()
//!     .unwrap();
//! // six matches and one gap of length 1
//! assert_eq!(engine.run(), Ok(11));
//!
//! let scoring = Scoring::new(1, -1, 1).unwrap();
//! assert_eq!(quadgap::align_score(b"A", b"", scoring), Ok(-1));
//! ```
//!
//! ## Features
//! - `tracing`: emit spans for each run and each DP row.
//! - `heavy`: enable long-running stress tests.

pub mod builder;
pub mod engine;
pub mod error;
pub mod hull;
pub mod input;
pub mod line;
pub mod reference;
pub mod scoring;
pub mod table;

pub use crate::builder::QuadGapEngineBuilder;
pub use crate::engine::{align_score, DpTables, QuadGapEngine, QuadGapProblem};
pub use crate::error::AlignError;
pub use crate::scoring::Scoring;
