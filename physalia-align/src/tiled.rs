//! Windowed genome comparison.
//!
//! Direct DP over two genomes needs an O(n*m) matrix, which is infeasible at
//! genome scale. The tiler instead cuts both sequences into fixed-size
//! windows and runs the score-only Smith-Waterman kernel on every window
//! pair, producing a dense [`SimilarityMap`] of one scalar per pair. Memory
//! per pair is bounded by the window size, and a motif that straddles a
//! window boundary is undercounted — that trade-off is the point of the
//! design, tuned via [`TilingParams`].
//!
//! [`tiled_comparison`] runs the full two-phase pipeline: fill the raw map,
//! then derive percent-of-maximum and z-score maps from it.

use log::{debug, info};

use physalia_core::{PhysaliaError, Result, Summarizable};
use physalia_stats::{percent_of_max, zscores};

use crate::scoring::LinearScoring;
use crate::smith_waterman::smith_waterman_score;

/// Log a progress line after every this many window rows.
const PROGRESS_ROWS: usize = 5;

/// Window size and stride for tiling a sequence.
///
/// Windows start at offsets `0, step, 2*step, ...`; `step < window_size`
/// makes consecutive windows overlap. A trailing fragment is kept only if
/// it is longer than half a window, so the map never contains noisy
/// comparisons of tiny tails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TilingParams {
    pub window_size: usize,
    pub step: usize,
}

impl TilingParams {
    /// Create tiling parameters.
    ///
    /// # Errors
    ///
    /// Returns an error if `window_size` or `step` is zero.
    pub fn new(window_size: usize, step: usize) -> Result<Self> {
        if window_size == 0 {
            return Err(PhysaliaError::InvalidInput(
                "window_size must be positive".into(),
            ));
        }
        if step == 0 {
            return Err(PhysaliaError::InvalidInput("step must be positive".into()));
        }
        Ok(Self { window_size, step })
    }
}

/// Cut `seq` into windows, dropping fragments of half a window or less.
pub fn windows<'a>(seq: &'a [u8], params: &TilingParams) -> Vec<&'a [u8]> {
    let mut out = Vec::new();
    let mut start = 0;
    while start < seq.len() {
        let end = usize::min(start + params.window_size, seq.len());
        let w = &seq[start..end];
        if 2 * w.len() > params.window_size {
            out.push(w);
        }
        start += params.step;
    }
    out
}

/// A dense `(rows, cols)` grid of per-window-pair scores.
///
/// Row `i` corresponds to the i-th window of the first sequence, column `j`
/// to the j-th window of the second. Raw and normalized maps share this
/// type; cells are immutable once the map is built.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimilarityMap {
    rows: usize,
    cols: usize,
    data: Vec<f64>,
}

impl SimilarityMap {
    fn new(rows: usize, cols: usize, data: Vec<f64>) -> Self {
        debug_assert_eq!(data.len(), rows * cols);
        Self { rows, cols, data }
    }

    /// Number of rows (windows of the first sequence).
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns (windows of the second sequence).
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Value at `(row, col)`.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.data[row * self.cols + col]
    }

    /// The underlying row-major cell storage.
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// Largest cell value.
    pub fn max(&self) -> f64 {
        self.data.iter().copied().fold(f64::NEG_INFINITY, f64::max)
    }
}

/// Fill the raw similarity map for two sequences.
///
/// Each cell is the local alignment score of one window pair; cells are
/// mutually independent, so the fill order carries no meaning.
///
/// # Errors
///
/// Returns an error if either sequence produces no windows (shorter than
/// half a window).
pub fn similarity_map(
    seq_a: &[u8],
    seq_b: &[u8],
    params: &TilingParams,
    scoring: &LinearScoring,
) -> Result<SimilarityMap> {
    let windows_a = windows(seq_a, params);
    let windows_b = windows(seq_b, params);

    if windows_a.is_empty() || windows_b.is_empty() {
        return Err(PhysaliaError::InvalidInput(format!(
            "tiling produced no windows ({} bp vs {} bp, window_size={})",
            seq_a.len(),
            seq_b.len(),
            params.window_size,
        )));
    }

    info!(
        "tiling {} x {} windows (window_size={}, step={})",
        windows_a.len(),
        windows_b.len(),
        params.window_size,
        params.step,
    );

    let mut data = Vec::with_capacity(windows_a.len() * windows_b.len());
    for (i, wa) in windows_a.iter().enumerate() {
        for wb in &windows_b {
            data.push(smith_waterman_score(wa, wb, scoring) as f64);
        }
        if i % PROGRESS_ROWS == 0 {
            debug!("processed window row {}/{}", i, windows_a.len());
        }
    }

    Ok(SimilarityMap::new(windows_a.len(), windows_b.len(), data))
}

/// Raw similarity map plus its derived normalizations.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TiledComparison {
    /// Raw Smith-Waterman scores per window pair.
    pub raw: SimilarityMap,
    /// Scores as a percentage of the best score a full-match window can reach.
    pub percent: SimilarityMap,
    /// Scores as population z-scores over the whole raw map.
    pub zscore: SimilarityMap,
}

/// Headline statistics of a [`TiledComparison`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ComparisonSummary {
    pub max_raw: f64,
    pub max_percent: f64,
    pub max_zscore: f64,
}

impl TiledComparison {
    /// Maxima of the three maps.
    pub fn summary_stats(&self) -> ComparisonSummary {
        ComparisonSummary {
            max_raw: self.raw.max(),
            max_percent: self.percent.max(),
            max_zscore: self.zscore.max(),
        }
    }
}

impl Summarizable for TiledComparison {
    fn summary(&self) -> String {
        let s = self.summary_stats();
        format!(
            "{}x{} windows, max raw={:.1}, max similarity={:.2}%, max z={:.2}",
            self.raw.rows(),
            self.raw.cols(),
            s.max_raw,
            s.max_percent,
            s.max_zscore,
        )
    }
}

/// Run the full windowed comparison pipeline.
///
/// Phase 1 fills the raw map; phase 2 aggregates it (mean, population
/// std-dev, theoretical maximum `window_size * match_score`) and derives
/// the percent and z-score maps. When every window pair scores identically
/// the z-score map is all zeros.
///
/// # Errors
///
/// Returns an error if either sequence produces no windows.
pub fn tiled_comparison(
    seq_a: &[u8],
    seq_b: &[u8],
    params: &TilingParams,
    scoring: &LinearScoring,
) -> Result<TiledComparison> {
    let raw = similarity_map(seq_a, seq_b, params, scoring)?;

    let max_possible = (params.window_size as i32 * scoring.match_score) as f64;
    let percent = percent_of_max(raw.as_slice(), max_possible)?;
    let zscore = zscores(raw.as_slice())?;

    Ok(TiledComparison {
        percent: SimilarityMap::new(raw.rows(), raw.cols(), percent),
        zscore: SimilarityMap::new(raw.rows(), raw.cols(), zscore),
        raw,
    })
}
