//! Scoring parameters for pairwise sequence alignment.
//!
//! Alignment here uses a linear gap model: every inserted or deleted symbol
//! costs `gap_penalty` once, with no separate open/extend distinction.

use physalia_core::{PhysaliaError, Result};

/// Match/mismatch/gap scoring constants for linear-gap alignment.
///
/// `gap_penalty` is deliberately unconstrained: the global aligner is
/// routinely run with a zero gap penalty, which makes end gaps free and
/// turns the score into a count of matched minus mismatched positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LinearScoring {
    pub match_score: i32,
    pub mismatch_score: i32,
    pub gap_penalty: i32,
}

impl LinearScoring {
    /// Create a new scoring scheme.
    ///
    /// # Errors
    ///
    /// Returns an error if `match_score` is not positive or `mismatch_score`
    /// is positive.
    pub fn new(match_score: i32, mismatch_score: i32, gap_penalty: i32) -> Result<Self> {
        if match_score <= 0 {
            return Err(PhysaliaError::InvalidInput(
                "match_score must be positive".into(),
            ));
        }
        if mismatch_score > 0 {
            return Err(PhysaliaError::InvalidInput(
                "mismatch_score must not be positive".into(),
            ));
        }
        Ok(Self {
            match_score,
            mismatch_score,
            gap_penalty,
        })
    }

    /// Default constants for global alignment: +1 match, -1 mismatch, 0 gap.
    pub fn global_default() -> Self {
        Self {
            match_score: 1,
            mismatch_score: -1,
            gap_penalty: 0,
        }
    }

    /// Default constants for windowed local alignment: +3 match, -3 mismatch, -2 gap.
    pub fn local_default() -> Self {
        Self {
            match_score: 3,
            mismatch_score: -3,
            gap_penalty: -2,
        }
    }

    /// Score a pair of bases. Case-insensitive.
    pub fn score_pair(&self, a: u8, b: u8) -> i32 {
        if a.to_ascii_uppercase() == b.to_ascii_uppercase() {
            self.match_score
        } else {
            self.mismatch_score
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn score_pair_case_insensitive() {
        let s = LinearScoring::global_default();
        assert_eq!(s.score_pair(b'a', b'A'), 1);
        assert_eq!(s.score_pair(b'A', b'T'), -1);
    }

    #[test]
    fn zero_gap_penalty_is_accepted() {
        let s = LinearScoring::new(1, -1, 0).unwrap();
        assert_eq!(s.gap_penalty, 0);
    }

    #[test]
    fn rejects_nonpositive_match() {
        assert!(LinearScoring::new(0, -1, -1).is_err());
        assert!(LinearScoring::new(-2, -1, -1).is_err());
    }

    #[test]
    fn rejects_positive_mismatch() {
        assert!(LinearScoring::new(1, 1, -1).is_err());
    }

    #[test]
    fn defaults_match_reference_constants() {
        let g = LinearScoring::global_default();
        assert_eq!((g.match_score, g.mismatch_score, g.gap_penalty), (1, -1, 0));
        let l = LinearScoring::local_default();
        assert_eq!((l.match_score, l.mismatch_score, l.gap_penalty), (3, -3, -2));
    }
}
