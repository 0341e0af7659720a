//! Rolling hedonic regression — sliding-window OLS over a time index.
//!
//! Purpose
//! -------
//! Implement the rolling regression engine: slide a fixed-width window over
//! the sorted distinct periods of a dataset, fit an independent OLS
//! regression on the rows of each window, and collect the per-window
//! coefficients and diagnostics into an immutable result that can price new
//! observations by dispatching them to the appropriate window.
//!
//! Key behaviors
//! -------------
//! - [`RollingRegression::new`] validates the (data, options) pairing up
//!   front by building the [`WindowPlan`], so a history too short for the
//!   requested window fails at construction rather than mid-fit.
//! - [`RollingRegression::fit`] runs the per-window solver over every
//!   planned window and caches a [`RollingFit`]; any window failure
//!   (singular, too few rows) aborts the whole fit with no partial result.
//! - [`RollingFit::predict`] prices new rows with the coefficients of the
//!   window that *ends just before* each row's period, clamping
//!   earlier-than-history periods to window 0 and refusing periods beyond
//!   the last fitted window.
//!
//! Invariants & assumptions
//! ------------------------
//! - Inputs arrive as validated [`RegressionData`]; the engine does not
//!   re-check finiteness or row alignment.
//! - The design matrix carries its own constant column when an intercept is
//!   wanted; the engine never adds one.
//! - Windows are fit independently; observations shared by overlapping
//!   windows contribute to each fit they fall in.
//!
//! Conventions
//! -----------
//! - Window indices are 0-based and chronological; row `w` of every result
//!   table belongs to window `w`.
//! - Coefficient columns follow the design-matrix column order and are
//!   labelled by the dataset's feature names.
//!
//! Downstream usage
//! ----------------
//! - The cached [`RollingFit`] is the handoff point to
//!   [`coefficient_paths`](crate::reporting::coefficients::coefficient_paths)
//!   and, behind the `python-bindings` feature, to the Python wrapper.
//!
//! Testing notes
//! -------------
//! - Unit tests cover construction-time plan validation, the single-window
//!   exact-fit scenario, multi-window dispatch (coefficients genuinely
//!   differing across windows and `predict` picking the right one), the
//!   not-fitted guard, and predict-time shape validation.

use crate::regression::{
    core::{
        data::RegressionData,
        ols::fit_window_ols,
        options::RollingOptions,
        windows::WindowPlan,
    },
    errors::{RegressionError, RegressionResult},
};
use ndarray::{Array1, Array2, ArrayView1, ArrayView2, Axis};

/// `RollingRegression` — the sliding-window OLS engine.
///
/// Purpose
/// -------
/// Own a validated dataset together with its window configuration and
/// resolved [`WindowPlan`], fit one OLS regression per window on demand, and
/// cache the result for repeated prediction and reporting.
///
/// Key behaviors
/// -------------
/// - Construction resolves the window plan, so `TooFewPeriods` surfaces
///   before any fitting work.
/// - `fit` is idempotent in effect: it recomputes and replaces the cached
///   result, returning a reference to it.
/// - Prediction goes through the cached [`RollingFit`]; calling `predict`
///   before `fit` is a `ModelNotFitted` error.
///
/// Fields
/// ------
/// - `data`: [`RegressionData`]
///   The validated training dataset.
/// - `options`: [`RollingOptions`]
///   Window width and step size.
/// - `plan`: [`WindowPlan`]
///   Sorted distinct periods and the derived window layout.
/// - `fit_result`: `Option<RollingFit>`
///   Cached fit output; `None` until [`RollingRegression::fit`] succeeds.
///
/// Invariants
/// ----------
/// - `plan` was built from `data.periods` and `options` and stays consistent
///   with both for the life of the model.
/// - When `fit_result` is `Some`, its tables have `plan.n_windows()` rows
///   and `data.n_features()` columns.
#[derive(Debug, Clone)]
pub struct RollingRegression {
    data: RegressionData,
    options: RollingOptions,
    plan: WindowPlan,
    /// Cached fit output; populated by [`RollingRegression::fit`].
    pub fit_result: Option<RollingFit>,
}

/// `RollingFit` — immutable per-window estimates and diagnostics.
///
/// Purpose
/// -------
/// Hold everything a fitted rolling regression knows: one row of
/// coefficients and p-values per window, the per-window scalar diagnostics,
/// the feature names labelling the columns, and the window plan needed to
/// dispatch prediction periods.
///
/// Fields
/// ------
/// - `coeffs`: `Array2<f64>` (`n_windows × n_features`)
///   OLS coefficient estimates; row `w` belongs to window `w`.
/// - `p_values`: `Array2<f64>` (`n_windows × n_features`)
///   Two-sided t p-values aligned with `coeffs`.
/// - `r_squared`, `adj_r_squared`, `f_statistic`, `f_pvalue`:
///   `Array1<f64>` (`n_windows`)
///   Per-window fit diagnostics.
/// - `feature_names`: `Vec<String>`
///   Column labels, in design-matrix column order.
/// - `plan`: [`WindowPlan`]
///   The window layout the fit was produced under; drives `predict`
///   dispatch.
///
/// Invariants
/// ----------
/// - All tables share the row count `plan.n_windows()`; both matrices share
///   the column count `feature_names.len()`.
/// - The struct is never mutated after construction; re-fitting builds a
///   fresh value.
#[derive(Debug, Clone, PartialEq)]
pub struct RollingFit {
    coeffs: Array2<f64>,
    p_values: Array2<f64>,
    r_squared: Array1<f64>,
    adj_r_squared: Array1<f64>,
    f_statistic: Array1<f64>,
    f_pvalue: Array1<f64>,
    feature_names: Vec<String>,
    plan: WindowPlan,
}

impl RollingRegression {
    /// Construct a rolling regression over a validated dataset.
    ///
    /// Parameters
    /// ----------
    /// - `data`: [`RegressionData`]
    ///   Validated design matrix, response, and time index.
    /// - `options`: [`RollingOptions`]
    ///   Window width and step size.
    ///
    /// Returns
    /// -------
    /// `RegressionResult<RollingRegression>`
    ///   An unfitted model with its window plan resolved.
    ///
    /// Errors
    /// ------
    /// - `RegressionError::TooFewPeriods`
    ///   Returned when the data's distinct periods cannot cover one complete
    ///   window under `options`.
    ///
    /// Panics
    /// ------
    /// - Never panics.
    pub fn new(data: RegressionData, options: RollingOptions) -> RegressionResult<Self> {
        let plan = WindowPlan::new(data.periods.view(), &options)?;
        Ok(RollingRegression { data, options, plan, fit_result: None })
    }

    /// Fit one OLS regression per planned window and cache the result.
    ///
    /// Returns
    /// -------
    /// `RegressionResult<&RollingFit>`
    ///   A reference to the freshly cached fit; all tables have
    ///   `n_windows` rows.
    ///
    /// Errors
    /// ------
    /// - `RegressionError::InsufficientObservations`
    ///   Returned when some window holds no more rows than features.
    /// - `RegressionError::SingularWindow`
    ///   Returned when some window's design is collinear.
    ///
    /// Panics
    /// ------
    /// - Never panics.
    ///
    /// Notes
    /// -----
    /// - Fitting is all-or-nothing: a failing window leaves any previously
    ///   cached result untouched and returns its error directly.
    /// - Calling `fit` again recomputes from scratch and replaces the cache.
    pub fn fit(&mut self) -> RegressionResult<&RollingFit> {
        let n_windows = self.plan.n_windows();
        let k = self.data.n_features();

        let mut coeffs = Array2::<f64>::zeros((n_windows, k));
        let mut p_values = Array2::<f64>::zeros((n_windows, k));
        let mut r_squared = Array1::<f64>::zeros(n_windows);
        let mut adj_r_squared = Array1::<f64>::zeros(n_windows);
        let mut f_statistic = Array1::<f64>::zeros(n_windows);
        let mut f_pvalue = Array1::<f64>::zeros(n_windows);

        for w in 0..n_windows {
            let rows = self.window_rows(w);
            let x_w = self.data.x.select(Axis(0), &rows);
            let y_w = self.data.y.select(Axis(0), &rows);
            let fit = fit_window_ols(x_w.view(), y_w.view(), w)?;

            coeffs.row_mut(w).assign(&fit.coeffs);
            p_values.row_mut(w).assign(&fit.p_values);
            r_squared[w] = fit.r_squared;
            adj_r_squared[w] = fit.adj_r_squared;
            f_statistic[w] = fit.f_statistic;
            f_pvalue[w] = fit.f_pvalue;
        }

        Ok(self.fit_result.insert(RollingFit {
            coeffs,
            p_values,
            r_squared,
            adj_r_squared,
            f_statistic,
            f_pvalue,
            feature_names: self.data.feature_names.clone(),
            plan: self.plan.clone(),
        }))
    }

    /// Price new observations with the cached fit.
    ///
    /// Parameters
    /// ----------
    /// - `x_new`: `ArrayView2<f64>`
    ///   New design rows, with the training column order.
    /// - `periods_new`: `ArrayView1<i64>`
    ///   Period ordinal per new row.
    ///
    /// Returns
    /// -------
    /// `RegressionResult<Array1<f64>>`
    ///   One prediction per row of `x_new`.
    ///
    /// Errors
    /// ------
    /// - `RegressionError::ModelNotFitted`
    ///   Returned when [`RollingRegression::fit`] has not succeeded yet.
    /// - Otherwise as [`RollingFit::predict`].
    pub fn predict(
        &self, x_new: ArrayView2<'_, f64>, periods_new: ArrayView1<'_, i64>,
    ) -> RegressionResult<Array1<f64>> {
        match &self.fit_result {
            Some(fit) => fit.predict(x_new, periods_new),
            None => Err(RegressionError::ModelNotFitted),
        }
    }

    /// The training dataset this model was built over.
    pub fn data(&self) -> &RegressionData {
        &self.data
    }

    /// The window configuration in effect.
    pub fn options(&self) -> &RollingOptions {
        &self.options
    }

    /// The resolved window plan.
    pub fn plan(&self) -> &WindowPlan {
        &self.plan
    }

    // ---- Helper methods ----

    /// Row indices of the observations falling in window `w`.
    ///
    /// Parameters
    /// ----------
    /// - `w`: `usize`
    ///   Window index; must satisfy `w < plan.n_windows()`.
    ///
    /// Returns
    /// -------
    /// `Vec<usize>`
    ///   Indices into the dataset rows, in row order. Membership is decided
    ///   by binary search over the window's sorted period span.
    fn window_rows(&self, w: usize) -> Vec<usize> {
        let span = self.plan.window_periods(w);
        self.data
            .periods
            .iter()
            .enumerate()
            .filter(|(_, period)| span.binary_search(period).is_ok())
            .map(|(row, _)| row)
            .collect()
    }
}

impl RollingFit {
    /// Price new observations by dispatching each row to its window.
    ///
    /// Parameters
    /// ----------
    /// - `x_new`: `ArrayView2<f64>`
    ///   New design rows; must have the training feature count, in the
    ///   training column order, including the constant column.
    /// - `periods_new`: `ArrayView1<i64>`
    ///   Period ordinal per new row; resolved against the training plan.
    ///
    /// Returns
    /// -------
    /// `RegressionResult<Array1<f64>>`
    ///   `pred[i] = coeffs[window(periods_new[i])] · x_new[i]`.
    ///
    /// Errors
    /// ------
    /// - `RegressionError::FeatureCountMismatch`
    ///   Returned when `x_new` has the wrong column count.
    /// - `RegressionError::LengthMismatch`
    ///   Returned when `periods_new` is not parallel to the rows of `x_new`.
    /// - `RegressionError::PeriodBeyondFittedWindows`
    ///   Returned for any row whose period falls past the last fitted
    ///   window; no partial prediction vector is produced.
    ///
    /// Panics
    /// ------
    /// - Never panics.
    pub fn predict(
        &self, x_new: ArrayView2<'_, f64>, periods_new: ArrayView1<'_, i64>,
    ) -> RegressionResult<Array1<f64>> {
        let k = self.feature_names.len();
        if x_new.ncols() != k {
            return Err(RegressionError::FeatureCountMismatch {
                expected: k,
                actual: x_new.ncols(),
            });
        }
        if periods_new.len() != x_new.nrows() {
            return Err(RegressionError::LengthMismatch {
                name: "t",
                expected: x_new.nrows(),
                actual: periods_new.len(),
            });
        }

        let mut preds = Array1::<f64>::zeros(x_new.nrows());
        for (i, (row, &period)) in x_new.outer_iter().zip(periods_new.iter()).enumerate() {
            let w = self.plan.resolve_window(period)?;
            preds[i] = self.coeffs.row(w).dot(&row);
        }
        Ok(preds)
    }

    /// Per-window coefficient table (`n_windows × n_features`).
    pub fn coeffs(&self) -> &Array2<f64> {
        &self.coeffs
    }

    /// Per-window two-sided t p-values, aligned with [`RollingFit::coeffs`].
    pub fn p_values(&self) -> &Array2<f64> {
        &self.p_values
    }

    /// Per-window R².
    pub fn r_squared(&self) -> &Array1<f64> {
        &self.r_squared
    }

    /// Per-window adjusted R².
    pub fn adj_r_squared(&self) -> &Array1<f64> {
        &self.adj_r_squared
    }

    /// Per-window overall F-statistic.
    pub fn f_statistic(&self) -> &Array1<f64> {
        &self.f_statistic
    }

    /// Per-window upper-tail p-value of the F-statistic.
    pub fn f_pvalue(&self) -> &Array1<f64> {
        &self.f_pvalue
    }

    /// Column labels, in design-matrix column order.
    pub fn feature_names(&self) -> &[String] {
        &self.feature_names
    }

    /// Number of fitted windows.
    pub fn n_windows(&self) -> usize {
        self.plan.n_windows()
    }

    /// The window plan the fit was produced under.
    pub fn plan(&self) -> &WindowPlan {
        &self.plan
    }
}
