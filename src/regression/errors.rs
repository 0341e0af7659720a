//! Errors for the rolling regression stack (input validation, window
//! configuration, per-window fitting, and prediction dispatch).
//!
//! This module defines the unified error type, [`RegressionError`], used
//! across the Rust core and the Python-facing API. It implements
//! `Display`/`Error` and converts to `PyErr` when the `python-bindings`
//! feature is enabled.
//!
//! ## Conventions
//! - **Indices are 0-based** (rows, columns, and window indices alike).
//! - Design-matrix and response entries must be **finite**; the time index
//!   is carried as plain `i64` period ordinals and needs no finiteness check.
//! - Validation errors report the **first offending element** together with
//!   its position, so callers can locate bad rows in large feature tables.
//! - Fit failures name the offending window index; a failed `fit()` leaves
//!   no usable state behind, so `predict` keeps failing with
//!   [`RegressionError::ModelNotFitted`].

#[cfg(feature = "python-bindings")]
use pyo3::exceptions::PyValueError;
#[cfg(feature = "python-bindings")]
use pyo3::prelude::*;

/// Crate-wide result alias for regression operations that may produce
/// [`RegressionError`].
pub type RegressionResult<T> = Result<T, RegressionError>;

/// Unified error type for the rolling regression stack.
///
/// Covers input/shape validation at data construction, window configuration
/// checks, per-window fit failures, and prediction dispatch errors.
/// Implements `Display`/`Error` and converts to a Python `ValueError` at
/// PyO3 boundaries.
#[derive(Debug, Clone, PartialEq)]
pub enum RegressionError {
    // ---- Input/shape validation ----
    /// Design matrix has no rows.
    EmptyDesignMatrix,

    /// Design matrix has no feature columns.
    NoFeatures,

    /// A row-aligned input (`y` or `t`) disagrees with the design matrix row count.
    LengthMismatch { name: &'static str, expected: usize, actual: usize },

    /// Feature name list disagrees with the design matrix column count.
    FeatureNameMismatch { expected: usize, actual: usize },

    /// A design-matrix entry is NaN/±inf.
    NonFiniteFeature { row: usize, col: usize, value: f64 },

    /// A response entry is NaN/±inf.
    NonFiniteResponse { index: usize, value: f64 },

    // ---- Window configuration ----
    /// Window width must be at least one period.
    InvalidWindow { window: usize },

    /// Step size must be at least one period.
    InvalidStepsize { stepsize: usize },

    /// Fewer distinct periods than the rolling window needs.
    TooFewPeriods { periods: usize, window: usize },

    // ---- Per-window fitting ----
    /// A window holds no more rows than the design matrix has columns, so the
    /// residual degrees of freedom would be zero or negative.
    InsufficientObservations { window: usize, rows: usize, cols: usize },

    /// The normal-equations matrix for a window is numerically singular.
    SingularWindow { window: usize },

    // ---- Prediction dispatch ----
    /// Model hasn't been fitted yet.
    ModelNotFitted,

    /// Prediction rows carry a different feature count than the training data.
    FeatureCountMismatch { expected: usize, actual: usize },

    /// A prediction row's period falls beyond every fitted window.
    PeriodBeyondFittedWindows { period: i64, n_windows: usize },
}

impl std::error::Error for RegressionError {}

impl std::fmt::Display for RegressionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            // ---- Input/shape validation ----
            RegressionError::EmptyDesignMatrix => {
                write!(f, "Design matrix has no rows.")
            }
            RegressionError::NoFeatures => {
                write!(f, "Design matrix has no feature columns.")
            }
            RegressionError::LengthMismatch { name, expected, actual } => {
                write!(f, "{name} should be of length {expected} but is of length {actual}")
            }
            RegressionError::FeatureNameMismatch { expected, actual } => {
                write!(f, "Expected {expected} feature names but got {actual}")
            }
            RegressionError::NonFiniteFeature { row, col, value } => {
                write!(f, "Design matrix entry at row {row}, column {col} is non-finite: {value}")
            }
            RegressionError::NonFiniteResponse { index, value } => {
                write!(f, "Response entry at index {index} is non-finite: {value}")
            }
            // ---- Window configuration ----
            RegressionError::InvalidWindow { window } => {
                write!(f, "Window width must be at least 1 period; got {window}")
            }
            RegressionError::InvalidStepsize { stepsize } => {
                write!(f, "Step size must be at least 1 period; got {stepsize}")
            }
            RegressionError::TooFewPeriods { periods, window } => {
                write!(
                    f,
                    "Need at least {window} distinct periods for one rolling window; got {periods}"
                )
            }
            // ---- Per-window fitting ----
            RegressionError::InsufficientObservations { window, rows, cols } => {
                write!(
                    f,
                    "Window {window} holds {rows} observations for {cols} features; \
                     at least {} are required for a well-posed fit",
                    cols + 1
                )
            }
            RegressionError::SingularWindow { window } => {
                write!(f, "Normal-equations matrix for window {window} is singular")
            }
            // ---- Prediction dispatch ----
            RegressionError::ModelNotFitted => {
                write!(f, "Model hasn't been fitted yet.")
            }
            RegressionError::FeatureCountMismatch { expected, actual } => {
                write!(
                    f,
                    "Prediction rows carry {actual} features but the model was fitted on {expected}"
                )
            }
            RegressionError::PeriodBeyondFittedWindows { period, n_windows } => {
                write!(
                    f,
                    "Period {period} falls beyond the last of {n_windows} fitted windows"
                )
            }
        }
    }
}

/// Convert a [`RegressionError`] into a Python `ValueError` with the error
/// message.
///
/// This is used at the Rust↔Python boundary to surface domain errors cleanly.
#[cfg(feature = "python-bindings")]
impl std::convert::From<RegressionError> for PyErr {
    fn from(err: RegressionError) -> PyErr {
        PyValueError::new_err(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - `Display` formatting for each error family, including payload
    //   embedding (indices, lengths, window numbers, offending values).
    //
    // They intentionally DO NOT cover:
    // - The PyO3 conversion path (`From<RegressionError> for PyErr`), which is
    //   exercised by Python-level tests.
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // Verify that shape-validation errors embed their payloads in the
    // rendered message, so callers can locate the offending input.
    //
    // Given
    // -----
    // - A `LengthMismatch` for `t` with expected 10, actual 9.
    // - A `NonFiniteFeature` at row 3, column 1 with a NaN payload.
    //
    // Expect
    // ------
    // - The rendered messages contain the name, both lengths, and the
    //   row/column indices respectively.
    fn display_embeds_shape_error_payloads() {
        let err = RegressionError::LengthMismatch { name: "t", expected: 10, actual: 9 };
        let msg = err.to_string();
        assert!(msg.contains('t') && msg.contains("10") && msg.contains('9'), "got: {msg}");

        let err = RegressionError::NonFiniteFeature { row: 3, col: 1, value: f64::NAN };
        let msg = err.to_string();
        assert!(msg.contains("row 3") && msg.contains("column 1"), "got: {msg}");
    }

    #[test]
    // Purpose
    // -------
    // Verify that fit-time errors name the offending window index, which is
    // the only handle callers have for diagnosing a failed rolling fit.
    //
    // Given
    // -----
    // - An `InsufficientObservations` for window 2 with 3 rows, 4 columns.
    // - A `SingularWindow` for window 5.
    //
    // Expect
    // ------
    // - Both messages contain the window index; the first also reports the
    //   row and column counts.
    fn display_names_offending_window() {
        let err = RegressionError::InsufficientObservations { window: 2, rows: 3, cols: 4 };
        let msg = err.to_string();
        assert!(msg.contains("Window 2") && msg.contains('3') && msg.contains('4'), "got: {msg}");

        let err = RegressionError::SingularWindow { window: 5 };
        assert!(err.to_string().contains("window 5"));
    }

    #[test]
    // Purpose
    // -------
    // Ensure prediction dispatch errors carry enough context to distinguish
    // the not-fitted case from the out-of-range case.
    //
    // Given
    // -----
    // - `ModelNotFitted`.
    // - `PeriodBeyondFittedWindows` for period 12 with 3 fitted windows.
    //
    // Expect
    // ------
    // - The former mentions fitting; the latter embeds the period and the
    //   fitted window count.
    fn display_distinguishes_prediction_errors() {
        assert!(RegressionError::ModelNotFitted.to_string().contains("fitted"));

        let err = RegressionError::PeriodBeyondFittedWindows { period: 12, n_windows: 3 };
        let msg = err.to_string();
        assert!(msg.contains("12") && msg.contains('3'), "got: {msg}");
    }
}
