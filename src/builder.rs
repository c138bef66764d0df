use crate::engine::{QuadGapEngine, QuadGapProblem};
use crate::error::AlignError;
use crate::scoring::Scoring;

pub const DEFAULT_MATCH_SCORE: i64 = 1;
pub const DEFAULT_MISMATCH_SCORE: i64 = -1;
pub const DEFAULT_GAP_PENALTY: i64 = 1;

pub struct QuadGapEngineBuilder<'a> {
    s: &'a [u8],
    t: &'a [u8],
    match_score: Option<i64>,
    mismatch_score: Option<i64>,
    gap_penalty: Option<i64>,
}

impl<'a> QuadGapEngineBuilder<'a> {
    pub fn new(s: &'a [u8], t: &'a [u8]) -> Self {
        Self {
            s,
            t,
            match_score: None,
            mismatch_score: None,
            gap_penalty: None,
        }
    }
    pub fn match_score(mut self, score: i64) -> Self {
        self.match_score = Some(score);
        self
    }
    pub fn mismatch_score(mut self, score: i64) -> Self {
        self.mismatch_score = Some(score);
        self
    }
    pub fn gap_penalty(mut self, penalty: i64) -> Self {
        self.gap_penalty = Some(penalty);
        self
    }
    pub fn scoring(self, scoring: Scoring) -> Self {
        self.match_score(scoring.match_score)
            .mismatch_score(scoring.mismatch_score)
            .gap_penalty(scoring.gap_penalty)
    }
    pub fn build(self) -> Result<QuadGapEngine<'a>, AlignError> {
        let scoring = Scoring::new(
            self.match_score.unwrap_or(DEFAULT_MATCH_SCORE),
            self.mismatch_score.unwrap_or(DEFAULT_MISMATCH_SCORE),
            self.gap_penalty.unwrap_or(DEFAULT_GAP_PENALTY),
        )?;
        let problem = QuadGapProblem::new(self.s, self.t, scoring)?;
        Ok(QuadGapEngine::new(problem))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply() {
        let engine = QuadGapEngineBuilder::new(b"A", b"C").build().unwrap();
        let scoring = engine.problem().scoring();
        assert_eq!(scoring.match_score, DEFAULT_MATCH_SCORE);
        assert_eq!(scoring.mismatch_score, DEFAULT_MISMATCH_SCORE);
        assert_eq!(scoring.gap_penalty, DEFAULT_GAP_PENALTY);
        assert_eq!(engine.run(), Ok(-1));
    }

    #[test]
    fn scoring_overrides_every_field() {
        let scoring = Scoring::new(4, -2, 3).unwrap();
        let engine = QuadGapEngineBuilder::new(b"AC", b"AC")
            .scoring(scoring)
            .build()
            .unwrap();
        assert_eq!(engine.problem().scoring(), &scoring);
        assert_eq!(engine.run(), Ok(8));
    }

    #[test]
    fn invalid_penalty_fails_build() {
        let err = QuadGapEngineBuilder::new(b"A", b"A")
            .gap_penalty(-1)
            .build()
            .err();
        assert_eq!(err, Some(AlignError::NegativeGapPenalty(-1)));
    }
}
