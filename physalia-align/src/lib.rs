//! Pairwise sequence alignment for the Physalia workspace.
//!
//! Provides exact global (Needleman-Wunsch) and local (Smith-Waterman)
//! alignment under a linear gap model, and a windowed tiling strategy that
//! makes whole-genome comparison tractable by running the local score
//! kernel over fixed-size window pairs instead of one O(n*m) matrix.
//!
//! # Quick start
//!
//! ```
//! use physalia_align::{needleman_wunsch, LinearScoring};
//!
//! let scoring = LinearScoring::global_default();
//! let aln = needleman_wunsch(b"ACGT", b"ACGT", &scoring);
//! assert_eq!(aln.score, 4);
//! assert_eq!(aln.percent_identity(), 100.0);
//! ```
//!
//! For genome-scale inputs use [`tiled::tiled_comparison`], which produces a
//! raw similarity map plus percent-of-maximum and z-score normalizations.

pub mod matrix;
pub mod needleman_wunsch;
pub mod scoring;
pub mod smith_waterman;
pub mod tiled;

pub use matrix::{DpMatrix, Step, Traceback};
pub use needleman_wunsch::{needleman_wunsch, GlobalAlignment};
pub use scoring::LinearScoring;
pub use smith_waterman::{smith_waterman, smith_waterman_score, LocalAlignment};
pub use tiled::{
    similarity_map, tiled_comparison, windows, ComparisonSummary, SimilarityMap, TiledComparison,
    TilingParams,
};

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn dna_seq(max_len: usize) -> impl Strategy<Value = Vec<u8>> {
        proptest::collection::vec(
            prop_oneof![Just(b'A'), Just(b'C'), Just(b'G'), Just(b'T')],
            0..=max_len,
        )
    }

    /// Score an alignment column-by-column under the same constants.
    fn rescore(aligned_query: &[u8], aligned_target: &[u8], scoring: &LinearScoring) -> i32 {
        aligned_query
            .iter()
            .zip(aligned_target)
            .map(|(&a, &b)| {
                if a == b'-' || b == b'-' {
                    scoring.gap_penalty
                } else {
                    scoring.score_pair(a, b)
                }
            })
            .sum()
    }

    proptest! {
        #[test]
        fn global_alignment_is_deterministic(q in dna_seq(40), t in dna_seq(40)) {
            let scoring = LinearScoring::global_default();
            let a = needleman_wunsch(&q, &t, &scoring);
            let b = needleman_wunsch(&q, &t, &scoring);
            prop_assert_eq!(a.score, b.score);
            prop_assert_eq!(a.aligned_query, b.aligned_query);
            prop_assert_eq!(a.path, b.path);
        }

        #[test]
        fn aligned_strings_reconstruct_inputs(q in dna_seq(40), t in dna_seq(40)) {
            let scoring = LinearScoring::new(2, -1, -2).unwrap();
            let aln = needleman_wunsch(&q, &t, &scoring);
            prop_assert_eq!(aln.aligned_query.len(), aln.aligned_target.len());
            let stripped_q: Vec<u8> =
                aln.aligned_query.iter().copied().filter(|&b| b != b'-').collect();
            let stripped_t: Vec<u8> =
                aln.aligned_target.iter().copied().filter(|&b| b != b'-').collect();
            prop_assert_eq!(stripped_q, q);
            prop_assert_eq!(stripped_t, t);
        }

        #[test]
        fn global_score_equals_column_rescore(q in dna_seq(40), t in dna_seq(40)) {
            let scoring = LinearScoring::new(1, -1, -1).unwrap();
            let aln = needleman_wunsch(&q, &t, &scoring);
            prop_assert_eq!(aln.score, rescore(&aln.aligned_query, &aln.aligned_target, &scoring));
        }

        #[test]
        fn no_gap_vs_gap_columns(q in dna_seq(40), t in dna_seq(40)) {
            let aln = needleman_wunsch(&q, &t, &LinearScoring::global_default());
            for (&a, &b) in aln.aligned_query.iter().zip(&aln.aligned_target) {
                prop_assert!(!(a == b'-' && b == b'-'));
            }
        }

        #[test]
        fn local_score_nonnegative(q in dna_seq(40), t in dna_seq(40)) {
            let scoring = LinearScoring::local_default();
            prop_assert!(smith_waterman_score(&q, &t, &scoring) >= 0);
        }

        #[test]
        fn local_kernel_matches_full_traceback(q in dna_seq(30), t in dna_seq(30)) {
            let scoring = LinearScoring::new(3, -3, -2).unwrap();
            let aln = smith_waterman(&q, &t, &scoring);
            prop_assert_eq!(aln.score, smith_waterman_score(&q, &t, &scoring));
            prop_assert!(aln.score >= 0);
        }

        #[test]
        fn window_count_property(seq in dna_seq(200), window in 1usize..30, step in 1usize..30) {
            let params = TilingParams::new(window, step).unwrap();
            let expected = (0..seq.len())
                .step_by(step)
                .filter(|&i| 2 * (usize::min(i + window, seq.len()) - i) > window)
                .count();
            prop_assert_eq!(windows(&seq, &params).len(), expected);
        }

        #[test]
        fn zscore_map_is_mean_centered(
            seq_a in dna_seq(60), seq_b in dna_seq(60),
        ) {
            let params = TilingParams::new(8, 8).unwrap();
            let scoring = LinearScoring::local_default();
            if let Ok(cmp) = tiled_comparison(&seq_a, &seq_b, &params, &scoring) {
                let sum: f64 = cmp.zscore.as_slice().iter().sum();
                prop_assert!(sum.abs() < 1e-6, "z-scores should sum to ~0, got {sum}");
            }
        }
    }
}
