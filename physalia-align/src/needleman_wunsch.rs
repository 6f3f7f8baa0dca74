//! Needleman-Wunsch global alignment with a linear gap model.
//!
//! Fills the full `(n+1) x (m+1)` score matrix with the recurrence
//!
//! ```text
//! DP[i][0] = i * gap          DP[0][j] = j * gap
//! DP[i][j] = max(DP[i-1][j-1] + sub, DP[i-1][j] + gap, DP[i][j-1] + gap)
//! ```
//!
//! recording a [`Traceback`] grid as it goes, then walks the recorded steps
//! from `(n, m)` back to `(0, 0)`. Where several predecessors tie, the fill
//! keeps the first of diagonal, up, left — that ordering is part of the
//! output contract, since with a zero gap penalty ties are common.

use physalia_core::Scored;

use crate::matrix::{DpMatrix, Step, Traceback};
use crate::scoring::LinearScoring;

/// The result of a global alignment.
///
/// `path` lists the `(column, row)` grid coordinates visited by the
/// traceback, ordered from the end cell `(m, n)` to the origin `(0, 0)`;
/// plotting consumers draw it over a heatmap of `matrix`.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GlobalAlignment {
    /// Optimal end-to-end alignment score, `DP[n][m]`.
    pub score: i32,
    /// Aligned query with `-` for gaps.
    pub aligned_query: Vec<u8>,
    /// Aligned target with `-` for gaps.
    pub aligned_target: Vec<u8>,
    /// The filled score matrix.
    pub matrix: DpMatrix,
    /// Traceback path as `(column, row)` coordinates, end cell first.
    pub path: Vec<(usize, usize)>,
}

impl GlobalAlignment {
    /// Number of alignment columns.
    pub fn length(&self) -> usize {
        self.aligned_query.len()
    }

    /// Number of columns where query and target carry the same base.
    ///
    /// A gap never matches anything, and gap-vs-gap columns cannot occur.
    pub fn matches(&self) -> usize {
        self.aligned_query
            .iter()
            .zip(&self.aligned_target)
            .filter(|(a, b)| a == b)
            .count()
    }

    /// Fraction of columns that are exact matches, in `[0.0, 1.0]`.
    ///
    /// Returns 0.0 for an empty alignment.
    pub fn identity(&self) -> f64 {
        let total = self.length();
        if total == 0 {
            return 0.0;
        }
        self.matches() as f64 / total as f64
    }

    /// Percent identity, `matches / length * 100`.
    pub fn percent_identity(&self) -> f64 {
        self.identity() * 100.0
    }
}

impl Scored for GlobalAlignment {
    fn score(&self) -> f64 {
        self.score as f64
    }
}

/// Align two sequences end-to-end.
///
/// Empty input is legal: the alignment degenerates to all-gap columns
/// against the non-empty side (or to the empty alignment when both are
/// empty). The call allocates two `(n+1) x (m+1)` grids, so genome-scale
/// inputs belong in [`crate::tiled`] instead.
pub fn needleman_wunsch(
    query: &[u8],
    target: &[u8],
    scoring: &LinearScoring,
) -> GlobalAlignment {
    let n = query.len();
    let m = target.len();
    let gap = scoring.gap_penalty;

    let mut dp = DpMatrix::zeroed(n + 1, m + 1);
    let mut tb = Traceback::new(n + 1, m + 1);

    for i in 0..=n {
        dp.set(i, 0, i as i32 * gap);
    }
    for j in 0..=m {
        dp.set(0, j, j as i32 * gap);
    }

    for i in 1..=n {
        for j in 1..=m {
            let sub = scoring.score_pair(query[i - 1], target[j - 1]);
            let diag = dp.get(i - 1, j - 1) + sub;
            let up = dp.get(i - 1, j) + gap;
            let left = dp.get(i, j - 1) + gap;

            let best = diag.max(up).max(left);
            // Tie-break priority: diagonal, then up, then left.
            let step = if best == diag {
                Step::Diagonal
            } else if best == up {
                Step::Up
            } else {
                Step::Left
            };
            dp.set(i, j, best);
            tb.set(i, j, step);
        }
    }

    // Walk the recorded steps from (n, m) to (0, 0).
    let mut aligned_query = Vec::with_capacity(n + m);
    let mut aligned_target = Vec::with_capacity(n + m);
    let mut path = Vec::with_capacity(n + m + 1);

    let mut i = n;
    let mut j = m;
    path.push((j, i));

    while i > 0 || j > 0 {
        match tb.get(i, j) {
            Step::Diagonal => {
                aligned_query.push(query[i - 1]);
                aligned_target.push(target[j - 1]);
                i -= 1;
                j -= 1;
            }
            Step::Up => {
                aligned_query.push(query[i - 1]);
                aligned_target.push(b'-');
                i -= 1;
            }
            Step::Left => {
                aligned_query.push(b'-');
                aligned_target.push(target[j - 1]);
                j -= 1;
            }
        }
        path.push((j, i));
    }

    aligned_query.reverse();
    aligned_target.reverse();

    GlobalAlignment {
        score: dp.get(n, m),
        aligned_query,
        aligned_target,
        matrix: dp,
        path,
    }
}
