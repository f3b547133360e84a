// =============================================================================
// Checked Statistics
// =============================================================================
//
// Validating versions of the functions in `descriptive`. Where the plain
// functions let a bad input fall through to NaN, these return an error that
// says what was wrong. On valid input they return exactly the same value.
//
// =============================================================================

use ndarray::Array1;

use crate::descriptive::{correlation, covariance, mean, std_dev, variance};
use crate::error::{Result, StatsMathError};

/// Mean of a non-empty sample.
pub fn try_mean(data: &Array1<f64>) -> Result<f64> {
    require_len(data, 1, "mean")?;
    Ok(mean(data))
}

/// Sample variance; needs at least two observations.
pub fn try_variance(data: &Array1<f64>) -> Result<f64> {
    require_len(data, 2, "variance")?;
    Ok(variance(data))
}

/// Sample standard deviation; needs at least two observations.
pub fn try_std_dev(data: &Array1<f64>) -> Result<f64> {
    require_len(data, 2, "standard deviation")?;
    Ok(std_dev(data))
}

/// Sample covariance of two equal-length samples of at least two observations.
pub fn try_covariance(x: &Array1<f64>, y: &Array1<f64>) -> Result<f64> {
    require_paired(x, y, "covariance")?;
    Ok(covariance(x, y))
}

/// Pearson correlation of two equal-length, non-constant samples.
pub fn try_correlation(a: &Array1<f64>, b: &Array1<f64>) -> Result<f64> {
    require_paired(a, b, "correlation")?;

    // Exact zero: anything else still has a defined (if noisy) r.
    if variance(a) == 0.0 || variance(b) == 0.0 {
        return Err(StatsMathError::InvalidValue(
            "correlation is undefined for a constant sample".to_string(),
        ));
    }

    Ok(correlation(a, b))
}

// =============================================================================
// Validation Helpers
// =============================================================================

fn require_len(data: &Array1<f64>, min: usize, what: &str) -> Result<()> {
    if data.is_empty() {
        return Err(StatsMathError::EmptyInput(format!("{} of an empty sample", what)));
    }
    if data.len() < min {
        return Err(StatsMathError::InsufficientData(format!(
            "{} needs at least {} observations, got {}",
            what,
            min,
            data.len()
        )));
    }
    Ok(())
}

fn require_paired(x: &Array1<f64>, y: &Array1<f64>, what: &str) -> Result<()> {
    if x.len() != y.len() {
        return Err(StatsMathError::DimensionMismatch(format!(
            "{}: first sample has {} observations, second has {}",
            what,
            x.len(),
            y.len()
        )));
    }
    require_len(x, 2, what)
}

// =============================================================================
// Tests
// =============================================================================
