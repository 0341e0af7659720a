//! rolling_hedonic — rolling-window hedonic regression with Python bindings.
//!
//! Purpose
//! -------
//! Serve as the crate root for Rust callers and as the PyO3 bridge that
//! exposes the rolling regression engine and the stratified train/test
//! splitter to Python via the `_rolling_hedonic` extension module. When the
//! `python-bindings` feature is enabled, this module defines the
//! Python-facing classes and submodules used by the `rolling_hedonic`
//! package.
//!
//! Key behaviors
//! -------------
//! - Re-export the core Rust modules (`regression`, `split`, `reporting`)
//!   as the public crate surface.
//! - Define `#[pyclass]` wrappers and the `#[pymodule]` initializer for the
//!   `_rolling_hedonic` Python extension.
//! - Create and register Python submodules (`modelling`, `sampling`) under
//!   `rolling_hedonic` so that dot-notation imports work as expected.
//!
//! Invariants & assumptions
//! ------------------------
//! - All numerical work is implemented in the inner Rust modules; this file
//!   performs only FFI glue, input conversion, and error mapping.
//! - When `python-bindings` is enabled, the Python-visible
//!   `RollingRegression` mirrors the invariants and signatures of its Rust
//!   counterpart.
//! - On successful conversion from Python objects to Rust types, the
//!   invariants documented in the core modules are assumed to hold.
//!
//! Conventions
//! -----------
//! - Python-exposed items live under `_rolling_hedonic.<submodule>` and are
//!   typically wrapped by thin pure-Python facades in the top-level
//!   `rolling_hedonic` package.
//! - Errors from core Rust code are propagated as rich error types
//!   internally and converted to `PyErr` values (always `ValueError`) at
//!   the PyO3 boundary.
//!
//! Downstream usage
//! ----------------
//! - Native Rust code should depend directly on the inner modules and can
//!   ignore the PyO3 items guarded by the `python-bindings` feature.
//! - The Python packaging layer imports the `_rolling_hedonic` module
//!   defined here and wraps its classes in user-facing Python APIs.
//!
//! Testing notes
//! -------------
//! - Core numerical behavior is covered by unit tests in the inner modules
//!   and by the integration test under `tests/`; Python smoke tests
//!   exercise the binding surface.

pub mod regression;
pub mod reporting;
pub mod split;
pub mod utils;

#[cfg(feature = "python-bindings")]
use pyo3::{exceptions::PyValueError, prelude::*, types::PyAny};

#[cfg(feature = "python-bindings")]
use crate::{
    regression::{
        core::options::RollingOptions, errors::RegressionError,
        models::rolling::RollingRegression,
    },
    reporting::coefficients::{coefficient_paths, CoefficientPath},
    split::train_test::{train_test_split as split_rows, DEFAULT_SEED, DEFAULT_TEST_SHARE},
    utils::{extract_f64_matrix, extract_i64_array, extract_regression_data, matrix_to_rows},
};

/// RollingRegression — Python-facing wrapper for the rolling OLS engine.
///
/// Purpose
/// -------
/// Expose the [`RollingRegression`] fit/predict lifecycle to Python callers
/// while preserving the core Rust invariants and error handling.
///
/// Key behaviors
/// -------------
/// - Build the engine from Python-friendly inputs (numpy arrays, pandas
///   objects, or plain sequences) with the original pipeline's window
///   defaults.
/// - Provide `fit` and `predict` methods that delegate to the core
///   implementation, plus property getters for the per-window result
///   tables (`coeffs`, `pvals`, `rsq`, `rsq_adj`, `fstat`).
/// - Reduce the fit to significance-tagged coefficient paths via
///   `coefficient_path` / `coefficient_paths`.
///
/// Parameters
/// ----------
/// Constructed from Python via
/// `RollingRegression(X, y, t, feature_names=None, window=4, stepsize=1)`:
/// - `X`: 2-D array-like of `float64`, one row per observation; must carry
///   its own constant column when an intercept is wanted.
/// - `y`: 1-D array-like of `float64`, parallel to the rows of `X`.
/// - `t`: 1-D array-like of `int64` period ordinals, parallel to the rows
///   of `X`.
/// - `feature_names`: optional list of column labels; defaults to
///   positional `x0`, `x1`, … labels.
/// - `window`, `stepsize`: window width and step in distinct periods.
///
/// Fields
/// ------
/// - `inner`: [`RollingRegression`]
///   Fully configured engine that owns the data and cached fit results.
///
/// Invariants
/// ----------
/// - `inner` is always a well-formed engine created through
///   [`extract_regression_data`]; construction errors surface as
///   `ValueError` before the object exists.
///
/// Notes
/// -----
/// - Native Rust callers should work with [`RollingRegression`] directly;
///   this type exists solely for the PyO3 binding surface.
#[cfg(feature = "python-bindings")]
#[pyclass(name = "RollingRegression", module = "rolling_hedonic.modelling")]
pub struct PyRollingRegression {
    /// Underlying Rust engine.
    pub inner: RollingRegression,
}

#[cfg(feature = "python-bindings")]
#[pymethods]
impl PyRollingRegression {
    #[new]
    #[pyo3(
        signature = (x, y, t, feature_names = None, window = None, stepsize = None),
        text_signature = "(X, y, t, /, feature_names=None, window=4, stepsize=1)"
    )]
    pub fn new<'py>(
        x: &Bound<'py, PyAny>, y: &Bound<'py, PyAny>, t: &Bound<'py, PyAny>,
        feature_names: Option<Vec<String>>, window: Option<usize>, stepsize: Option<usize>,
    ) -> PyResult<Self> {
        let data = extract_regression_data(x, y, t, feature_names)?;
        let options = RollingOptions::new(
            window.unwrap_or(regression::core::options::DEFAULT_WINDOW),
            stepsize.unwrap_or(regression::core::options::DEFAULT_STEPSIZE),
        )?;
        let inner = RollingRegression::new(data, options)?;
        Ok(PyRollingRegression { inner })
    }

    /// Fit one OLS regression per window; errors leave the model unfitted.
    pub fn fit(&mut self) -> PyResult<()> {
        self.inner.fit()?;
        Ok(())
    }

    #[pyo3(text_signature = "(self, X, t, /)")]
    pub fn predict<'py>(
        &self, x: &Bound<'py, PyAny>, t: &Bound<'py, PyAny>,
    ) -> PyResult<Vec<f64>> {
        let x_arr = extract_f64_matrix(x)?;
        let t_arr = extract_i64_array(t)?;
        let preds = self.inner.predict(x_arr.view(), t_arr.view())?;
        Ok(preds.to_vec())
    }

    /// Per-window coefficient table (rows are windows).
    #[getter]
    pub fn coeffs(&self) -> PyResult<Vec<Vec<f64>>> {
        Ok(matrix_to_rows(self.fitted()?.coeffs()))
    }

    /// Per-window two-sided t p-values, aligned with `coeffs`.
    #[getter]
    pub fn pvals(&self) -> PyResult<Vec<Vec<f64>>> {
        Ok(matrix_to_rows(self.fitted()?.p_values()))
    }

    /// Per-window R².
    #[getter]
    pub fn rsq(&self) -> PyResult<Vec<f64>> {
        Ok(self.fitted()?.r_squared().to_vec())
    }

    /// Per-window adjusted R².
    #[getter]
    pub fn rsq_adj(&self) -> PyResult<Vec<f64>> {
        Ok(self.fitted()?.adj_r_squared().to_vec())
    }

    /// Per-window overall F-statistic.
    #[getter]
    pub fn fstat(&self) -> PyResult<Vec<f64>> {
        Ok(self.fitted()?.f_statistic().to_vec())
    }

    /// Per-window upper-tail p-value of the F-statistic.
    #[getter]
    pub fn fstat_pval(&self) -> PyResult<Vec<f64>> {
        Ok(self.fitted()?.f_pvalue().to_vec())
    }

    /// Column labels, in design-matrix column order.
    #[getter]
    pub fn feature_names(&self) -> Vec<String> {
        self.inner.data().feature_names.clone()
    }

    /// Number of windows the plan produces (available before `fit`).
    #[getter]
    pub fn n_windows(&self) -> usize {
        self.inner.plan().n_windows()
    }

    /// One feature's coefficient path as `(window, value, p_value,
    /// significant)` tuples; raises `ValueError` for unknown names.
    #[pyo3(text_signature = "(self, feature, /)")]
    pub fn coefficient_path(&self, feature: &str) -> PyResult<Vec<(usize, f64, f64, bool)>> {
        let fit = self.fitted()?;
        let path = CoefficientPath::from_fit(fit, feature)
            .ok_or_else(|| PyValueError::new_err(format!("unknown feature {feature:?}")))?;
        Ok(path_to_tuples(&path))
    }

    /// Every feature's coefficient path, in column order.
    #[pyo3(text_signature = "(self, /)")]
    pub fn coefficient_paths(&self) -> PyResult<Vec<(String, Vec<(usize, f64, f64, bool)>)>> {
        let fit = self.fitted()?;
        Ok(coefficient_paths(fit)
            .into_iter()
            .map(|path| (path.feature.clone(), path_to_tuples(&path)))
            .collect())
    }
}

#[cfg(feature = "python-bindings")]
impl PyRollingRegression {
    fn fitted(&self) -> PyResult<&crate::regression::models::rolling::RollingFit> {
        self.inner.fit_result.as_ref().ok_or_else(|| RegressionError::ModelNotFitted.into())
    }
}

#[cfg(feature = "python-bindings")]
fn path_to_tuples(path: &CoefficientPath) -> Vec<(usize, f64, f64, bool)> {
    path.points
        .iter()
        .map(|point| (point.window, point.value, point.p_value, point.significant))
        .collect()
}

/// Stratified per-period train/test split for Python callers.
///
/// Returns the tuple
/// `(X_train, X_test, y_train, y_test, t_train, t_test)` with the training
/// pieces ready to feed back into `RollingRegression`.
#[cfg(feature = "python-bindings")]
#[pyfunction]
#[pyo3(
    signature = (x, y, t, feature_names = None, test_share = None, seed = None),
    text_signature = "(X, y, t, /, feature_names=None, test_share=0.2, seed=1)"
)]
#[allow(clippy::type_complexity)]
pub fn train_test_split<'py>(
    x: &Bound<'py, PyAny>, y: &Bound<'py, PyAny>, t: &Bound<'py, PyAny>,
    feature_names: Option<Vec<String>>, test_share: Option<f64>, seed: Option<u64>,
) -> PyResult<(Vec<Vec<f64>>, Vec<Vec<f64>>, Vec<f64>, Vec<f64>, Vec<i64>, Vec<i64>)> {
    let data = extract_regression_data(x, y, t, feature_names)?;
    let split = split_rows(
        &data,
        test_share.unwrap_or(DEFAULT_TEST_SHARE),
        seed.unwrap_or(DEFAULT_SEED),
    )?;
    Ok((
        matrix_to_rows(&split.x_train),
        matrix_to_rows(&split.x_test),
        split.y_train.to_vec(),
        split.y_test.to_vec(),
        split.t_train.to_vec(),
        split.t_test.to_vec(),
    ))
}

/// _rolling_hedonic — PyO3 module initializer for the Python extension.
///
/// Purpose
/// -------
/// Define the `_rolling_hedonic` Python module and register its submodules
/// used by the public `rolling_hedonic` package.
///
/// Key behaviors
/// -------------
/// - Create `modelling` and `sampling` submodules.
/// - Attach those submodules to the parent `_rolling_hedonic` module.
/// - Register the submodules in `sys.modules` so they are importable via
///   dotted paths from Python.
///
/// Notes
/// -----
/// - This function is invoked automatically by Python when importing the
///   compiled extension; it is not called directly by user code.
#[cfg(feature = "python-bindings")]
#[pymodule]
fn _rolling_hedonic<'py>(_py: Python<'py>, m: &Bound<'py, PyModule>) -> PyResult<()> {
    let modelling_mod = PyModule::new(_py, "modelling")?;
    let sampling_mod = PyModule::new(_py, "sampling")?;
    modelling(_py, m, &modelling_mod)?;
    sampling(_py, m, &sampling_mod)?;

    // Manually add submodules into sys.modules to allow for dot notation.
    _py.import("sys")?
        .getattr("modules")?
        .set_item("rolling_hedonic.modelling", modelling_mod)?;

    _py.import("sys")?
        .getattr("modules")?
        .set_item("rolling_hedonic.sampling", sampling_mod)?;
    Ok(())
}

#[cfg(feature = "python-bindings")]
fn modelling<'py>(
    _py: Python, rolling_hedonic: &Bound<'py, PyModule>, m: &Bound<'py, PyModule>,
) -> PyResult<()> {
    m.add_class::<PyRollingRegression>()?;
    rolling_hedonic.add_submodule(m)?;
    Ok(())
}

#[cfg(feature = "python-bindings")]
fn sampling<'py>(
    _py: Python, rolling_hedonic: &Bound<'py, PyModule>, m: &Bound<'py, PyModule>,
) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(train_test_split, m)?)?;
    rolling_hedonic.add_submodule(m)?;
    Ok(())
}
