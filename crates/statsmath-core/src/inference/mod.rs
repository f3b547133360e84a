// =============================================================================
// Statistical Inference
// =============================================================================
//
// Tools for asking how much a descriptive statistic can be trusted:
//   - P-values: two-tailed tests against the normal and t distributions
//   - Correlation test: is r distinguishable from zero?
//   - Confidence interval for the mean of a sample
//
// THE CORRELATION TEST
// --------------------
// Under H₀: ρ = 0 (and roughly normal data), the statistic
//
//     t = r · sqrt((n - 2) / (1 - r²))
//
// follows Student's t with n - 2 degrees of freedom.
//
// Example: r = 0.6 from 12 paired observations gives t ≈ 2.37 on 10 df,
// p ≈ 0.039. Significant at 5%, but the same r from 6 observations is not.
//
// CAVEATS:
// - Correlation measures LINEAR association only
// - A tiny r becomes "significant" with enough data
//
// =============================================================================

use log::debug;
use ndarray::Array1;
use statrs::distribution::{ContinuousCDF, Normal, StudentsT};

use crate::checked::{try_correlation, try_mean, try_std_dev};
use crate::error::{Result, StatsMathError};

// =============================================================================
// Configuration
// =============================================================================

/// Settings shared by the inference functions.
#[derive(Debug, Clone)]
pub struct InferenceConfig {
    /// Confidence level for intervals.
    /// Default: 0.95
    pub confidence_level: f64,

    /// Above this many degrees of freedom the t distribution is replaced by
    /// the standard normal.
    /// Default: 1000
    pub normal_approx_df: f64,
}

impl Default for InferenceConfig {
    fn default() -> Self {
        Self {
            confidence_level: 0.95,
            normal_approx_df: 1000.0,
        }
    }
}

// =============================================================================
// P-Value Calculation
// =============================================================================

/// Two-tailed p-value for a z-statistic: P(|Z| > |z|).
pub fn pvalue_z(z: f64) -> f64 {
    if z.is_nan() {
        return f64::NAN;
    }

    let normal = Normal::standard();
    2.0 * (1.0 - normal.cdf(z.abs()))
}

/// Two-tailed p-value for a t-statistic with `df` degrees of freedom.
///
/// Returns NaN for a NaN statistic or non-positive `df`. An infinite
/// statistic gives p = 0.
pub fn pvalue_t(t: f64, df: f64, config: &InferenceConfig) -> f64 {
    if t.is_nan() || df.is_nan() || df <= 0.0 {
        return f64::NAN;
    }

    if df > config.normal_approx_df {
        debug!(
            "pvalue_t: df = {} above {}, using normal approximation",
            df, config.normal_approx_df
        );
        return pvalue_z(t);
    }

    let t_dist = match StudentsT::new(0.0, 1.0, df) {
        Ok(d) => d,
        Err(_) => return f64::NAN,
    };

    2.0 * (1.0 - t_dist.cdf(t.abs()))
}

// =============================================================================
// Correlation Test
// =============================================================================

/// Result of testing a Pearson correlation against zero.
#[derive(Debug, Clone, PartialEq)]
pub struct CorrelationTest {
    /// Pearson correlation coefficient
    pub r: f64,
    /// t = r · sqrt(df / (1 - r²))
    pub t_statistic: f64,
    /// Degrees of freedom, n - 2
    pub df: f64,
    /// Two-tailed p-value
    pub p_value: f64,
}

/// Test whether the correlation between `a` and `b` differs from zero.
///
/// # Errors
/// Everything `try_correlation` rejects, plus fewer than three observations
/// (the test has n - 2 degrees of freedom).
pub fn correlation_test(
    a: &Array1<f64>,
    b: &Array1<f64>,
    config: &InferenceConfig,
) -> Result<CorrelationTest> {
    let r = try_correlation(a, b)?;

    let n = a.len();
    if n < 3 {
        return Err(StatsMathError::InsufficientData(format!(
            "correlation test needs at least 3 observations, got {}",
            n
        )));
    }

    let df = (n - 2) as f64;
    let denom = 1.0 - r * r;

    // Perfect (anti-)correlation
    let (t_statistic, p_value) = if denom <= 0.0 {
        (f64::INFINITY.copysign(r), 0.0)
    } else {
        let t = r * (df / denom).sqrt();
        (t, pvalue_t(t, df, config))
    };

    Ok(CorrelationTest {
        r,
        t_statistic,
        df,
        p_value,
    })
}

// =============================================================================
// Confidence Intervals
// =============================================================================

/// Confidence interval for the population mean: x̄ ± t* · s / sqrt(n).
///
/// Uses `config.confidence_level` (e.g. 0.95 for a 95% interval).
///
/// # Returns
/// (lower_bound, upper_bound)
pub fn mean_confidence_interval(
    data: &Array1<f64>,
    config: &InferenceConfig,
) -> Result<(f64, f64)> {
    let confidence = config.confidence_level;
    if !(confidence > 0.0 && confidence < 1.0) {
        return Err(StatsMathError::InvalidValue(format!(
            "confidence level must be in (0, 1), got {}",
            confidence
        )));
    }

    let mean = try_mean(data)?;
    let std_error = try_std_dev(data)? / (data.len() as f64).sqrt();
    let df = (data.len() - 1) as f64;

    let alpha = 1.0 - confidence;
    let critical = if df > config.normal_approx_df {
        Normal::standard().inverse_cdf(1.0 - alpha / 2.0)
    } else {
        StudentsT::new(0.0, 1.0, df)
            .map_err(|e| StatsMathError::InvalidValue(e.to_string()))?
            .inverse_cdf(1.0 - alpha / 2.0)
    };

    let margin = critical * std_error;
    Ok((mean - margin, mean + margin))
}

// =============================================================================
// Tests
// =============================================================================
