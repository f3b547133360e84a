// =============================================================================
// Descriptive Statistics
// =============================================================================
//
// The five elementary functions everything else builds on:
//
//   mean(x)            = Σx / n
//   variance(x)        = Σ(x - x̄)² / (n - 1)
//   covariance(x, y)   = Σ(x - x̄)(y - ȳ) / (n - 1)
//   correlation(a, b)  = Σ(a - ā)(b - b̄) / sqrt(Σ(a - ā)² · Σ(b - b̄)²)
//   round_n_places     = round_half_up(x · 10ⁿ) / 10ⁿ
//
// NO VALIDATION:
// --------------
// None of these functions check their input. Preconditions that are not met
// show up in the result as IEEE-754 special values:
//
//   - empty sample                → mean is 0/0 = NaN
//   - single observation          → variance is 0/0 = NaN
//   - constant sample             → correlation is 0/0 = NaN
//
// Callers that want an error instead should use the `checked` module.
//
// PAIRED SAMPLES:
// ---------------
// `covariance` and `correlation` expect samples of equal length. When they
// differ, both functions use the common prefix (the first min(len) elements
// of each sample) for every pass, including the means. Nothing panics.
//
// =============================================================================

use log::warn;
use ndarray::{s, Array1, ArrayView1};

// =============================================================================
// Single-Sample Statistics
// =============================================================================

/// Arithmetic mean: Σx / n.
///
/// An empty sample gives NaN.
pub fn mean(data: &Array1<f64>) -> f64 {
    mean_view(data.view())
}

/// Sample variance with Bessel's correction: Σ(x - x̄)² / (n - 1).
///
/// Two passes: the mean first, then the squared deviations.
/// A single observation gives 0/0 = NaN.
pub fn variance(data: &Array1<f64>) -> f64 {
    let mean = mean(data);

    let sum_of_squared_deviations: f64 = data.iter().map(|&x| (x - mean).powi(2)).sum();

    // Divisor stays in floating point so that n = 0 cannot underflow.
    sum_of_squared_deviations / (data.len() as f64 - 1.0)
}

/// Sample standard deviation: sqrt(variance).
pub fn std_dev(data: &Array1<f64>) -> f64 {
    variance(data).sqrt()
}

// =============================================================================
// Paired-Sample Statistics
// =============================================================================

/// Sample covariance: Σ(x - x̄)(y - ȳ) / (n - 1).
///
/// `covariance(x, x)` is `variance(x)`.
pub fn covariance(x: &Array1<f64>, y: &Array1<f64>) -> f64 {
    let (x, y) = common_prefix(x, y, "covariance");

    let x_mean = mean_view(x);
    let y_mean = mean_view(y);

    let sum_of_products: f64 = x
        .iter()
        .zip(y.iter())
        .map(|(&xi, &yi)| (xi - x_mean) * (yi - y_mean))
        .sum();

    sum_of_products / (x.len() as f64 - 1.0)
}

/// Pearson correlation coefficient.
///
/// Computed with the raw-score formula:
///
/// ```text
///          Σ(a - ā)(b - b̄)
/// r = ─────────────────────────
///     sqrt(Σ(a - ā)² · Σ(b - b̄)²)
/// ```
///
/// The result lies in [-1, 1]: 1 for a perfect increasing linear
/// relationship, -1 for a perfect decreasing one. If either sample is
/// constant the denominator is zero and the result is NaN.
pub fn correlation(a: &Array1<f64>, b: &Array1<f64>) -> f64 {
    let (a, b) = common_prefix(a, b, "correlation");

    // Pass 1: means
    let a_mean = mean_view(a);
    let b_mean = mean_view(b);

    // Pass 2: deviations and their products
    let a_dev = a.mapv(|v| v - a_mean);
    let b_dev = b.mapv(|v| v - b_mean);
    let a_times_b = &a_dev * &b_dev;
    let a_squared = &a_dev * &a_dev;
    let b_squared = &b_dev * &b_dev;

    // Pass 3: totals
    let a_times_b_total = a_times_b.sum();
    let a_squared_total = a_squared.sum();
    let b_squared_total = b_squared.sum();

    a_times_b_total / (a_squared_total * b_squared_total).sqrt()
}

// =============================================================================
// Rounding
// =============================================================================

/// Round `number` to `n` decimal places.
///
/// Scales by 10ⁿ, rounds half-up (ties toward positive infinity, so 2.5 → 3
/// and -2.5 → -2), then scales back. `n = 0` rounds to an integer value and a
/// negative `n` rounds to the nearest 10⁻ⁿ (e.g. `n = -2` → nearest hundred).
///
/// There is no overflow check: a large `number` combined with a large `n`
/// overflows the scaled value to infinity.
///
/// # Example
/// ```
/// use statsmath_core::round_n_places;
/// assert_eq!(round_n_places(3.14159, 2), 3.14);
/// assert_eq!(round_n_places(1234.0, -2), 1200.0);
/// ```
pub fn round_n_places(number: f64, n: i32) -> f64 {
    let scale = 10f64.powi(n);
    round_half_up(number * scale) / scale
}

/// floor(x + 0.5), computed without the rounding error that adding 0.5
/// introduces just below a tie (0.49999999999999994 must round to 0).
fn round_half_up(x: f64) -> f64 {
    let floor = x.floor();
    if x - floor >= 0.5 {
        floor + 1.0
    } else {
        floor
    }
}

// =============================================================================
// Helpers
// =============================================================================

fn mean_view(data: ArrayView1<f64>) -> f64 {
    data.sum() / data.len() as f64
}

/// Trim two paired samples to their common length.
fn common_prefix<'a>(
    x: &'a Array1<f64>,
    y: &'a Array1<f64>,
    caller: &str,
) -> (ArrayView1<'a, f64>, ArrayView1<'a, f64>) {
    if x.len() == y.len() {
        return (x.view(), y.view());
    }

    let n = x.len().min(y.len());
    warn!(
        "{}: sample lengths differ ({} vs {}), using the first {} observations",
        caller,
        x.len(),
        y.len(),
        n
    );
    (x.slice(s![..n]), y.slice(s![..n]))
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use ndarray::array;

    #[test]
    fn test_mean() {
        assert_abs_diff_eq!(mean(&array![2.0, 4.0, 6.0]), 4.0, epsilon = 1e-12);
        assert_abs_diff_eq!(mean(&array![-1.5]), -1.5, epsilon = 1e-12);
    }

    #[test]
    fn test_mean_empty_is_nan() {
        let empty: Array1<f64> = Array1::zeros(0);
        assert!(mean(&empty).is_nan());
    }

    #[test]
    fn test_variance() {
        // Squared deviations sum to 8, divided by n - 1 = 2
        assert_abs_diff_eq!(variance(&array![2.0, 4.0, 6.0]), 4.0, epsilon = 1e-12);
    }

    #[test]
    fn test_variance_constant_is_zero() {
        assert_eq!(variance(&array![3.0, 3.0, 3.0, 3.0]), 0.0);
    }

    #[test]
    fn test_variance_single_observation_is_nan() {
        assert!(variance(&array![42.0]).is_nan());
    }

    #[test]
    fn test_std_dev() {
        assert_abs_diff_eq!(std_dev(&array![2.0, 4.0, 6.0]), 2.0, epsilon = 1e-12);
    }

    #[test]
    fn test_covariance() {
        let x = array![1.0, 2.0, 3.0];
        let y = array![2.0, 4.0, 6.0];
        assert_abs_diff_eq!(covariance(&x, &y), 2.0, epsilon = 1e-12);
    }

    #[test]
    fn test_covariance_negative() {
        let x = array![1.0, 2.0, 3.0];
        let y = array![3.0, 2.0, 1.0];
        assert_abs_diff_eq!(covariance(&x, &y), -1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_covariance_with_itself_is_variance() {
        let x = array![1.3, -0.7, 4.2, 8.8, 0.1];
        assert_abs_diff_eq!(covariance(&x, &x), variance(&x), epsilon = 1e-12);
    }

    #[test]
    fn test_covariance_mismatched_lengths_uses_common_prefix() {
        let x = array![1.0, 2.0, 3.0];
        let y = array![2.0, 4.0, 6.0, 1000.0, -1000.0];
        assert_abs_diff_eq!(covariance(&x, &y), 2.0, epsilon = 1e-12);
        assert_abs_diff_eq!(covariance(&y, &x), 2.0, epsilon = 1e-12);
    }

    #[test]
    fn test_correlation_perfect_positive() {
        let a = array![1.0, 2.0, 3.0];
        let b = array![2.0, 4.0, 6.0];
        assert_abs_diff_eq!(correlation(&a, &b), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_correlation_perfect_negative() {
        // Range is [-1, 1], not [0, 1]
        let a = array![1.0, 2.0, 3.0, 4.0];
        let b = array![8.0, 6.0, 4.0, 2.0];
        assert_abs_diff_eq!(correlation(&a, &b), -1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_correlation_known_value() {
        // Cross-products sum to 6, squared deviations to 10 and 6
        let a = array![1.0, 2.0, 3.0, 4.0, 5.0];
        let b = array![2.0, 4.0, 5.0, 4.0, 5.0];
        assert_abs_diff_eq!(correlation(&a, &b), 6.0 / 60f64.sqrt(), epsilon = 1e-12);
    }

    #[test]
    fn test_correlation_constant_is_nan() {
        let a = array![5.0, 5.0, 5.0];
        let b = array![1.0, 2.0, 3.0];
        assert!(correlation(&a, &b).is_nan());
    }

    #[test]
    fn test_correlation_mismatched_lengths_uses_common_prefix() {
        let a = array![1.0, 2.0, 3.0, 4.0];
        let b = array![2.0, 4.0, 6.0];
        assert_abs_diff_eq!(correlation(&a, &b), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_round_n_places() {
        assert_eq!(round_n_places(3.14159, 2), 3.14);
        assert_eq!(round_n_places(3.14159, 4), 3.1416);
        assert_eq!(round_n_places(2.5, 0), 3.0);
    }

    #[test]
    fn test_round_n_places_ties_go_up() {
        assert_eq!(round_n_places(-2.5, 0), -2.0);
        assert_eq!(round_n_places(0.5, 0), 1.0);
        assert_eq!(round_n_places(0.49999999999999994, 0), 0.0);
    }

    #[test]
    fn test_round_n_places_negative_places() {
        assert_eq!(round_n_places(1234.0, -2), 1200.0);
        assert_eq!(round_n_places(1250.0, -2), 1300.0);
        assert_eq!(round_n_places(49.0, -2), 0.0);
    }

    #[test]
    fn test_round_n_places_nan_propagates() {
        assert!(round_n_places(f64::NAN, 2).is_nan());
    }
}
