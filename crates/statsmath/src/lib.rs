// =============================================================================
// StatsMath Python Bindings
// =============================================================================
//
// This module creates the bridge between Rust and Python using PyO3.
// It wraps the pure Rust code from `statsmath-core` and exposes it as
// a Python module that can be imported with `import statsmath`.
//
// TWO FLAVOURS:
// -------------
// - mean, variance, covariance, correlation, std_dev, round_n_places behave
//   exactly like the Rust functions: bad input gives NaN, never an exception.
// - correlation_test and mean_confidence_interval validate their input and
//   raise ValueError when it is unusable.
//
// FOR MAINTAINERS:
// ----------------
// When adding new functionality:
// 1. Implement the logic in `statsmath-core` first
// 2. Create a Python wrapper here that calls the Rust code
// 3. Add it to the module in the `_statsmath` function at the bottom
//
// =============================================================================

use numpy::PyReadonlyArray1;
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::types::PyDict;

use statsmath_core::{
    correlation, correlation_test, covariance, mean, mean_confidence_interval, round_n_places,
    std_dev, variance, InferenceConfig, StatsMathError,
};

fn to_py_err(e: StatsMathError) -> PyErr {
    PyValueError::new_err(e.to_string())
}

// =============================================================================
// Descriptive Statistics
// =============================================================================

/// Arithmetic mean. Empty input gives nan.
#[pyfunction]
#[pyo3(name = "mean")]
fn mean_py(data: PyReadonlyArray1<'_, f64>) -> f64 {
    mean(&data.as_array().to_owned())
}

/// Sample variance (n - 1 denominator).
#[pyfunction]
#[pyo3(name = "variance")]
fn variance_py(data: PyReadonlyArray1<'_, f64>) -> f64 {
    variance(&data.as_array().to_owned())
}

/// Sample standard deviation.
#[pyfunction]
#[pyo3(name = "std_dev")]
fn std_dev_py(data: PyReadonlyArray1<'_, f64>) -> f64 {
    std_dev(&data.as_array().to_owned())
}

/// Sample covariance of two paired samples.
///
/// If the lengths differ only the common prefix is used.
#[pyfunction]
#[pyo3(name = "covariance")]
fn covariance_py(x: PyReadonlyArray1<'_, f64>, y: PyReadonlyArray1<'_, f64>) -> f64 {
    covariance(&x.as_array().to_owned(), &y.as_array().to_owned())
}

/// Pearson correlation coefficient, in [-1, 1].
#[pyfunction]
#[pyo3(name = "correlation")]
fn correlation_py(a: PyReadonlyArray1<'_, f64>, b: PyReadonlyArray1<'_, f64>) -> f64 {
    correlation(&a.as_array().to_owned(), &b.as_array().to_owned())
}

/// Round to n decimal places (ties round up). n may be negative.
#[pyfunction]
#[pyo3(name = "round_n_places")]
fn round_n_places_py(number: f64, n: i32) -> f64 {
    round_n_places(number, n)
}

// =============================================================================
// Inference
// =============================================================================

/// Test a Pearson correlation against zero.
///
/// Returns a dict with keys r, t_statistic, df, p_value.
#[pyfunction]
#[pyo3(name = "correlation_test")]
fn correlation_test_py<'py>(
    py: Python<'py>,
    a: PyReadonlyArray1<'py, f64>,
    b: PyReadonlyArray1<'py, f64>,
) -> PyResult<Bound<'py, PyDict>> {
    let a_arr = a.as_array().to_owned();
    let b_arr = b.as_array().to_owned();

    let test = correlation_test(&a_arr, &b_arr, &InferenceConfig::default()).map_err(to_py_err)?;

    let dict = PyDict::new_bound(py);
    dict.set_item("r", test.r)?;
    dict.set_item("t_statistic", test.t_statistic)?;
    dict.set_item("df", test.df)?;
    dict.set_item("p_value", test.p_value)?;
    Ok(dict)
}

/// Confidence interval for the mean as (lower, upper).
#[pyfunction]
#[pyo3(name = "mean_confidence_interval", signature = (data, confidence=0.95))]
fn mean_confidence_interval_py(
    data: PyReadonlyArray1<'_, f64>,
    confidence: f64,
) -> PyResult<(f64, f64)> {
    let config = InferenceConfig {
        confidence_level: confidence,
        ..Default::default()
    };
    mean_confidence_interval(&data.as_array().to_owned(), &config).map_err(to_py_err)
}

// =============================================================================
// Module Registration
// =============================================================================

/// StatsMath: descriptive statistics with a Rust backend
///
/// This is the internal Rust module. Users should import from the
/// Python wrapper: `import statsmath`
#[pymodule]
fn _statsmath(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(mean_py, m)?)?;
    m.add_function(wrap_pyfunction!(variance_py, m)?)?;
    m.add_function(wrap_pyfunction!(std_dev_py, m)?)?;
    m.add_function(wrap_pyfunction!(covariance_py, m)?)?;
    m.add_function(wrap_pyfunction!(correlation_py, m)?)?;
    m.add_function(wrap_pyfunction!(round_n_places_py, m)?)?;

    m.add_function(wrap_pyfunction!(correlation_test_py, m)?)?;
    m.add_function(wrap_pyfunction!(mean_confidence_interval_py, m)?)?;

    Ok(())
}
