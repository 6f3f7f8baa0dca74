//! Dense dynamic-programming grids.
//!
//! Both grids are row-major `Vec`s indexed by `(row, col)`. Cell `(i, j)`
//! holds the value for the prefixes `query[..i]` and `target[..j]`, so an
//! alignment of sequences of length `n` and `m` uses an `(n+1) x (m+1)` grid
//! with row 0 and column 0 as boundary conditions.

/// A dense score matrix for pairwise alignment.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DpMatrix {
    rows: usize,
    cols: usize,
    data: Vec<i32>,
}

impl DpMatrix {
    /// Create a zero-filled matrix.
    pub fn zeroed(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            data: vec![0; rows * cols],
        }
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Value at `(row, col)`.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> i32 {
        self.data[row * self.cols + col]
    }

    #[inline]
    pub(crate) fn set(&mut self, row: usize, col: usize, value: i32) {
        self.data[row * self.cols + col] = value;
    }

    /// The underlying row-major cell storage.
    pub fn as_slice(&self) -> &[i32] {
        &self.data
    }
}

/// The predecessor transition that produced a DP cell's value.
///
/// When several predecessors explain the same score the fill records the
/// first in the fixed priority order `Diagonal`, `Up`, `Left`. Traceback
/// replays exactly what was recorded, which keeps alignments deterministic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Step {
    /// Consume one symbol from each sequence (match or mismatch).
    Diagonal,
    /// Consume a query symbol against a gap in the target.
    Up,
    /// Consume a target symbol against a gap in the query.
    Left,
}

/// A grid of [`Step`]s parallel to a [`DpMatrix`].
///
/// Row 0 is pre-set to `Left` and column 0 to `Up` so a traceback that
/// reaches an edge runs straight to the origin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Traceback {
    rows: usize,
    cols: usize,
    data: Vec<Step>,
}

impl Traceback {
    /// Create a traceback grid with edge cells pointing at the origin.
    pub fn new(rows: usize, cols: usize) -> Self {
        let mut data = vec![Step::Diagonal; rows * cols];
        for j in 0..cols {
            data[j] = Step::Left;
        }
        for i in 0..rows {
            data[i * cols] = Step::Up;
        }
        Self { rows, cols, data }
    }

    /// Recorded transition at `(row, col)`.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Step {
        self.data[row * self.cols + col]
    }

    #[inline]
    pub(crate) fn set(&mut self, row: usize, col: usize, step: Step) {
        self.data[row * self.cols + col] = step;
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }
}
