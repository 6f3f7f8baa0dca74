//! Score normalization for windowed similarity maps.
//!
//! Both transforms operate on flat row-major `&[f64]` slices and return a new
//! vector of the same length; the caller keeps track of the matrix shape.
//!
//! - [`percent_of_max`] — each score as a percentage of a fixed theoretical
//!   maximum (a full-match window with no gaps or mismatches)
//! - [`zscores`] — each score as the number of population standard deviations
//!   from the mean of the whole map

use physalia_core::{PhysaliaError, Result};

use crate::descriptive;

/// Express each value as a percentage of `max_score`.
///
/// For windowed alignment `max_score` is `window_size * match_score`, the
/// best score any single window pair can attain.
///
/// # Errors
///
/// Returns an error if `values` is empty or `max_score` is not positive.
pub fn percent_of_max(values: &[f64], max_score: f64) -> Result<Vec<f64>> {
    if values.is_empty() {
        return Err(PhysaliaError::InvalidInput(
            "percent_of_max: values must not be empty".into(),
        ));
    }
    if max_score <= 0.0 {
        return Err(PhysaliaError::InvalidInput(
            "percent_of_max: max_score must be positive".into(),
        ));
    }
    Ok(values.iter().map(|&v| v / max_score * 100.0).collect())
}

/// Express each value as a z-score against the whole slice.
///
/// Mean and standard deviation are population statistics over all of
/// `values`. When the standard deviation is zero (every value identical)
/// all z-scores are defined as 0.0 rather than dividing by zero.
///
/// # Errors
///
/// Returns an error if `values` is empty.
pub fn zscores(values: &[f64]) -> Result<Vec<f64>> {
    let m = descriptive::mean(values)?;
    let sd = descriptive::std_dev(values)?;
    if sd > 0.0 {
        Ok(values.iter().map(|&v| (v - m) / sd).collect())
    } else {
        Ok(vec![0.0; values.len()])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percent_of_theoretical_max() {
        // window_size = 3, match_score = 3 → max = 9
        let pct = percent_of_max(&[0.0, 3.0, 6.0, 9.0], 9.0).unwrap();
        assert!((pct[0] - 0.0).abs() < 1e-9);
        assert!((pct[1] - 33.333_333_333).abs() < 1e-6);
        assert!((pct[2] - 66.666_666_666).abs() < 1e-6);
        assert!((pct[3] - 100.0).abs() < 1e-9);
    }

    #[test]
    fn percent_rejects_nonpositive_max() {
        assert!(percent_of_max(&[1.0], 0.0).is_err());
        assert!(percent_of_max(&[1.0], -9.0).is_err());
    }

    #[test]
    fn zscores_known_values() {
        // mean = 4.5, population std ≈ 3.3541
        let z = zscores(&[0.0, 3.0, 6.0, 9.0]).unwrap();
        assert!((z[0] + 1.341_640_786).abs() < 1e-6);
        assert!((z[1] + 0.447_213_595).abs() < 1e-6);
        assert!((z[2] - 0.447_213_595).abs() < 1e-6);
        assert!((z[3] - 1.341_640_786).abs() < 1e-6);
    }

    #[test]
    fn zscores_sum_to_zero() {
        let z = zscores(&[1.0, 4.0, 4.0, 9.0, 2.0]).unwrap();
        let sum: f64 = z.iter().sum();
        assert!(sum.abs() < 1e-9, "z-scores should be mean-centered, sum={sum}");
    }

    #[test]
    fn zscores_degenerate_all_equal() {
        let z = zscores(&[7.0; 6]).unwrap();
        assert!(z.iter().all(|&v| v == 0.0));
    }

    #[test]
    fn empty_input_errors() {
        assert!(percent_of_max(&[], 9.0).is_err());
        assert!(zscores(&[]).is_err());
    }
}
