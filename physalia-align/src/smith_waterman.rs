//! Smith-Waterman local alignment with a linear gap model.
//!
//! Two entry points share the floor-at-zero recurrence
//!
//! ```text
//! DP[i][j] = max(0, DP[i-1][j-1] + sub, DP[i-1][j] + gap, DP[i][j-1] + gap)
//! ```
//!
//! - [`smith_waterman_score`] computes only the maximum cell value using a
//!   rolling row, O(m) memory. The windowed tiler calls this once per
//!   window pair and needs nothing else.
//! - [`smith_waterman`] fills the full matrix and reconstructs the
//!   best-scoring local alignment, with the same diagonal/up/left tie-break
//!   as the global aligner.

use physalia_core::Scored;

use crate::matrix::DpMatrix;
use crate::scoring::LinearScoring;

/// The best-scoring local alignment of two sequences.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LocalAlignment {
    /// Maximum value anywhere in the DP grid; always >= 0.
    pub score: i32,
    /// Aligned query region with `-` for gaps.
    pub aligned_query: Vec<u8>,
    /// Aligned target region with `-` for gaps.
    pub aligned_target: Vec<u8>,
    /// Start position in the query (0-based, inclusive).
    pub query_start: usize,
    /// End position in the query (0-based, exclusive).
    pub query_end: usize,
    /// Start position in the target (0-based, inclusive).
    pub target_start: usize,
    /// End position in the target (0-based, exclusive).
    pub target_end: usize,
}

impl LocalAlignment {
    fn empty() -> Self {
        Self {
            score: 0,
            aligned_query: Vec::new(),
            aligned_target: Vec::new(),
            query_start: 0,
            query_end: 0,
            target_start: 0,
            target_end: 0,
        }
    }

    /// Number of alignment columns.
    pub fn length(&self) -> usize {
        self.aligned_query.len()
    }

    /// Number of exactly matching columns.
    pub fn matches(&self) -> usize {
        self.aligned_query
            .iter()
            .zip(&self.aligned_target)
            .filter(|(a, b)| a == b)
            .count()
    }
}

impl Scored for LocalAlignment {
    fn score(&self) -> f64 {
        self.score as f64
    }
}

/// Maximum local alignment score, without traceback.
///
/// Uses a single rolling row, so memory is O(target length) no matter how
/// long the query is. Returns 0 for empty input or when no positive-scoring
/// region exists.
pub fn smith_waterman_score(query: &[u8], target: &[u8], scoring: &LinearScoring) -> i32 {
    let gap = scoring.gap_penalty;
    // row[j] holds H[i-1][j] before the j-th update, H[i][j] after.
    let mut row = vec![0i32; target.len() + 1];
    let mut best = 0i32;

    for &q in query {
        let mut diag = 0i32; // H[i-1][j-1]
        let mut left = 0i32; // H[i][j-1]
        for (j, &t) in target.iter().enumerate() {
            let sub = scoring.score_pair(q, t);
            let h = 0i32
                .max(diag + sub)
                .max(row[j + 1] + gap)
                .max(left + gap);
            diag = row[j + 1];
            row[j + 1] = h;
            left = h;
            if h > best {
                best = h;
            }
        }
    }

    best
}

/// Best local alignment with traceback.
///
/// Fills the full `(n+1) x (m+1)` grid, walks back from the first maximum
/// cell (row-major scan order) until a zero cell, and returns the aligned
/// region. Empty input, or sequences with no positive-scoring region,
/// yield the empty zero-score alignment.
pub fn smith_waterman(query: &[u8], target: &[u8], scoring: &LinearScoring) -> LocalAlignment {
    let n = query.len();
    let m = target.len();
    let gap = scoring.gap_penalty;

    let mut dp = DpMatrix::zeroed(n + 1, m + 1);
    let mut best = 0i32;
    let mut best_i = 0usize;
    let mut best_j = 0usize;

    for i in 1..=n {
        for j in 1..=m {
            let sub = scoring.score_pair(query[i - 1], target[j - 1]);
            let h = 0i32
                .max(dp.get(i - 1, j - 1) + sub)
                .max(dp.get(i - 1, j) + gap)
                .max(dp.get(i, j - 1) + gap);
            dp.set(i, j, h);
            if h > best {
                best = h;
                best_i = i;
                best_j = j;
            }
        }
    }

    if best == 0 {
        return LocalAlignment::empty();
    }

    let mut aligned_query = Vec::new();
    let mut aligned_target = Vec::new();
    let mut i = best_i;
    let mut j = best_j;

    // A positive cell always has i > 0 and j > 0, so the predecessor
    // lookups below stay in bounds until the walk reaches a zero cell.
    while dp.get(i, j) > 0 {
        let current = dp.get(i, j);
        let sub = scoring.score_pair(query[i - 1], target[j - 1]);
        if current == dp.get(i - 1, j - 1) + sub {
            aligned_query.push(query[i - 1]);
            aligned_target.push(target[j - 1]);
            i -= 1;
            j -= 1;
        } else if current == dp.get(i - 1, j) + gap {
            aligned_query.push(query[i - 1]);
            aligned_target.push(b'-');
            i -= 1;
        } else {
            aligned_query.push(b'-');
            aligned_target.push(target[j - 1]);
            j -= 1;
        }
    }

    aligned_query.reverse();
    aligned_target.reverse();

    LocalAlignment {
        score: best,
        aligned_query,
        aligned_target,
        query_start: i,
        query_end: best_i,
        target_start: j,
        target_end: best_j,
    }
}
