//! Descriptive statistics for numeric data.
//!
//! All functions take a flat `&[f64]` slice and error on empty input.
//! Variance and standard deviation are population statistics (ddof=0),
//! matching the aggregation the z-score transform is defined over.

use physalia_core::{PhysaliaError, Result};

/// Arithmetic mean.
pub fn mean(data: &[f64]) -> Result<f64> {
    if data.is_empty() {
        return Err(PhysaliaError::InvalidInput(
            "mean: data must not be empty".into(),
        ));
    }
    Ok(data.iter().sum::<f64>() / data.len() as f64)
}

/// Population variance (ddof=0).
pub fn variance(data: &[f64]) -> Result<f64> {
    let m = mean(data)?;
    let ss: f64 = data.iter().map(|&x| (x - m) * (x - m)).sum();
    Ok(ss / data.len() as f64)
}

/// Population standard deviation.
pub fn std_dev(data: &[f64]) -> Result<f64> {
    Ok(variance(data)?.sqrt())
}
