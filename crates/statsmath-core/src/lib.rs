// =============================================================================
// StatsMath Core Library
// =============================================================================
//
// Pure Rust descriptive statistics. No Python code involved - the bindings
// live in the `statsmath` crate.
//
// STRUCTURE:
// ----------
//   - descriptive: mean, variance, covariance, correlation, rounding
//   - checked:     the same statistics, returning errors instead of NaN
//   - inference:   correlation test and confidence interval for the mean
//   - error:       Error types used throughout the library
//
// FOR MAINTAINERS:
// ----------------
// When adding new functionality:
//   1. Add it to the appropriate module (or create a new one)
//   2. Write tests in that module (see existing tests for examples)
//   3. Re-export public items here so users can access them easily
//   4. Update the Python bindings in the `statsmath` crate
//
// =============================================================================

pub mod checked;
pub mod descriptive;
pub mod error;
pub mod inference;

// Users can write `use statsmath_core::mean` instead of
// `use statsmath_core::descriptive::mean`
pub use checked::{try_correlation, try_covariance, try_mean, try_std_dev, try_variance};
pub use descriptive::{correlation, covariance, mean, round_n_places, std_dev, variance};
pub use error::{Result, StatsMathError};
pub use inference::{
    correlation_test, mean_confidence_interval, pvalue_t, pvalue_z, CorrelationTest,
    InferenceConfig,
};
