//! Batch input format.
//!
//! Tokens separated by ASCII whitespace, in order:
//! 1. `n`, then the first sequence (`n` symbols),
//! 2. `m`, then the second sequence (`m` symbols),
//! 3. `match_score mismatch_score gap_penalty`.
//!
//! Symbols are raw bytes and need not be UTF-8. A sequence may be written as
//! one token or split over several; tokens are concatenated until exactly
//! the declared number of bytes is read. A zero length consumes no token.

use std::slice::Split;

use thiserror::Error;

use crate::error::AlignError;
use crate::scoring::Scoring;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("unexpected end of input, expected {expected}")]
    MissingToken { expected: &'static str },

    #[error("{field}: expected an integer, found '{token}'")]
    InvalidInteger { field: &'static str, token: String },

    #[error("{field}: length must be non-negative, got {value}")]
    NegativeLength { field: &'static str, value: i64 },

    #[error("{field}: symbols run past the declared length {declared}")]
    SequenceOverrun { field: &'static str, declared: usize },

    #[error("unexpected trailing input '{token}'")]
    TrailingInput { token: String },
}

/// A parsed alignment request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlignmentInput {
    pub first: Vec<u8>,
    pub second: Vec<u8>,
    pub scoring: Scoring,
}

/// Parse one batch. Scoring parameters are validated as well, so a negative
/// gap penalty is reported here rather than by the engine.
pub fn parse_input(bytes: &[u8]) -> Result<AlignmentInput, AlignError> {
    let mut tokens = Tokens {
        inner: bytes.split(u8::is_ascii_whitespace as fn(&u8) -> bool),
    };

    let n = tokens.length("first sequence length")?;
    let first = tokens.sequence("first sequence", n)?;
    let m = tokens.length("second sequence length")?;
    let second = tokens.sequence("second sequence", m)?;
    let match_score = tokens.integer("match score")?;
    let mismatch_score = tokens.integer("mismatch score")?;
    let gap_penalty = tokens.integer("gap penalty")?;

    if let Some(extra) = tokens.raw() {
        return Err(InputError::TrailingInput {
            token: lossy(extra),
        }
        .into());
    }

    Ok(AlignmentInput {
        first,
        second,
        scoring: Scoring::new(match_score, mismatch_score, gap_penalty)?,
    })
}

fn lossy(token: &[u8]) -> String {
    String::from_utf8_lossy(token).into_owned()
}

struct Tokens<'a> {
    inner: Split<'a, u8, fn(&u8) -> bool>,
}

impl<'a> Tokens<'a> {
    /// Next non-empty token; runs of whitespace yield empty splits.
    fn raw(&mut self) -> Option<&'a [u8]> {
        self.inner.by_ref().find(|token| !token.is_empty())
    }

    fn next(&mut self, expected: &'static str) -> Result<&'a [u8], InputError> {
        self.raw().ok_or(InputError::MissingToken { expected })
    }

    fn integer(&mut self, field: &'static str) -> Result<i64, InputError> {
        let token = self.next(field)?;
        std::str::from_utf8(token)
            .ok()
            .and_then(|text| text.parse::<i64>().ok())
            .ok_or_else(|| InputError::InvalidInteger {
                field,
                token: lossy(token),
            })
    }

    fn length(&mut self, field: &'static str) -> Result<usize, InputError> {
        let value = self.integer(field)?;
        usize::try_from(value).map_err(|_| InputError::NegativeLength { field, value })
    }

    fn sequence(&mut self, field: &'static str, declared: usize) -> Result<Vec<u8>, InputError> {
        let mut seq = Vec::with_capacity(declared.min(1 << 20));
        while seq.len() < declared {
            let token = self.next(field)?;
            if seq.len() + token.len() > declared {
                return Err(InputError::SequenceOverrun { field, declared });
            }
            seq.extend_from_slice(token);
        }
        Ok(seq)
    }
}
