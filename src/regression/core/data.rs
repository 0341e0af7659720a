//! Validated data containers for rolling regression models.
//!
//! Purpose
//! -------
//! Provide a small, validated container bundling the design matrix, response
//! vector, time index, and feature names consumed by the rolling regression
//! engine. This module centralizes input validation for raw tabular data so
//! downstream code can assume row-aligned, finite inputs.
//!
//! Key behaviors
//! -------------
//! - [`RegressionData`] enforces basic data invariants (non-empty design
//!   matrix, row-aligned response and time index, finite numeric entries,
//!   and a feature name per design-matrix column).
//! - Reports the **first** offending element for finiteness violations so
//!   callers can locate bad rows in wide feature tables.
//!
//! Invariants & assumptions
//! ------------------------
//! - The design matrix has at least one row and one column, and already
//!   carries its own constant/intercept column when one is wanted; no
//!   implicit intercept is ever added downstream.
//! - `y` and `periods` are parallel to the design matrix rows.
//! - All design-matrix and response entries are finite.
//! - Feature names are positional: `feature_names[j]` labels column `j`, and
//!   the same ordering must be used for any later prediction input.
//!
//! Conventions
//! -----------
//! - Indexing is 0-based; periods are plain `i64` ordinals (e.g., quarter
//!   counts since the earliest observation) and may start at any value.
//! - This module performs no winsorizing, scaling, or other cleaning; it
//!   only validates. Feature engineering belongs to upstream ETL.
//!
//! Downstream usage
//! ----------------
//! - Construct [`RegressionData`] at the boundary where tabular features
//!   enter the modeling stack, then hand it to
//!   [`RollingRegression::new`](crate::regression::models::rolling::RollingRegression::new)
//!   or [`train_test_split`](crate::split::train_test::train_test_split).
//! - Consumers may safely rely on `RegressionData` invariants and skip
//!   re-validating basic shape properties.
//!
//! Testing notes
//! -------------
//! - Unit tests cover construction behavior for `RegressionData::new`
//!   (happy path, empty matrix, mismatched lengths, non-finite entries,
//!   and feature-name count violations) plus the generated names of
//!   [`RegressionData::unnamed`].

use crate::regression::errors::{RegressionError, RegressionResult};
use ndarray::{Array1, Array2};

/// `RegressionData` — validated design matrix, response, and time index.
///
/// Purpose
/// -------
/// Represent one validated regression dataset: an `n × k` design matrix with
/// named columns, a length-`n` response vector, and a length-`n` integer time
/// index assigning each row to a discrete period. This type centralizes the
/// shape and finiteness checks so the engine and splitter can assume clean
/// inputs.
///
/// Key behaviors
/// -------------
/// - Stores the design matrix as an `ndarray::Array2<f64>` and the response
///   and time index as parallel `Array1`s.
/// - Enforces row alignment, non-emptiness, finiteness, and name/column
///   agreement at construction time via [`RegressionData::new`].
/// - Offers [`RegressionData::unnamed`] for synthetic or test data where
///   positional names (`x0`, `x1`, …) suffice.
///
/// Fields
/// ------
/// - `x`: `Array2<f64>`
///   Design matrix, one row per observation, one column per feature. Must
///   include its own constant column when an intercept is wanted.
/// - `y`: `Array1<f64>`
///   Response vector (e.g., sale price), parallel to the rows of `x`.
/// - `periods`: `Array1<i64>`
///   Discrete period ordinal per row (e.g., quarter count); parallel to the
///   rows of `x`. Distinct values define the rolling windows.
/// - `feature_names`: `Vec<String>`
///   One label per design-matrix column, in column order. Column identity is
///   significant: prediction inputs must use the same ordering.
///
/// Invariants
/// ----------
/// - `x.nrows() > 0` and `x.ncols() > 0`.
/// - `y.len() == x.nrows()` and `periods.len() == x.nrows()`.
/// - All entries of `x` and `y` are finite.
/// - `feature_names.len() == x.ncols()`.
///
/// Performance
/// -----------
/// - Validation is O(n·k) due to a single scan over `x` plus a scan over
///   `y`; after construction this type is a plain container with no hidden
///   allocations.
///
/// Notes
/// -----
/// - The time index needs no finiteness check; it is carried as `i64`.
/// - Higher-level components (engine, splitter, reporting) rely on these
///   invariants and do not re-validate basic properties.
#[derive(Debug, Clone, PartialEq)]
pub struct RegressionData {
    /// Design matrix (rows × features); entries must be finite.
    pub x: Array2<f64>,
    /// Response vector, parallel to the design-matrix rows.
    pub y: Array1<f64>,
    /// Period ordinal per row; distinct values define the rolling windows.
    pub periods: Array1<i64>,
    /// Column labels, one per design-matrix column, in column order.
    pub feature_names: Vec<String>,
}

impl RegressionData {
    /// Construct a validated [`RegressionData`] instance.
    ///
    /// Parameters
    /// ----------
    /// - `x`: `Array2<f64>`
    ///   Design matrix. Must be non-empty in both dimensions with finite
    ///   entries, and must carry its own constant column if an intercept is
    ///   wanted.
    /// - `y`: `Array1<f64>`
    ///   Response vector; must have one finite entry per design-matrix row.
    /// - `periods`: `Array1<i64>`
    ///   Period ordinal per row; must have one entry per design-matrix row.
    /// - `feature_names`: `Vec<String>`
    ///   One label per design-matrix column, in column order.
    ///
    /// Returns
    /// -------
    /// `RegressionResult<RegressionData>`
    ///   - `Ok(RegressionData)` if all invariants are satisfied.
    ///   - `Err(RegressionError)` if validation fails.
    ///
    /// Errors
    /// ------
    /// - `RegressionError::EmptyDesignMatrix`
    ///   Returned when `x.nrows() == 0`.
    /// - `RegressionError::NoFeatures`
    ///   Returned when `x.ncols() == 0`.
    /// - `RegressionError::LengthMismatch { name, expected, actual }`
    ///   Returned when `y` (`name = "y"`) or `periods` (`name = "t"`)
    ///   disagrees with the design-matrix row count.
    /// - `RegressionError::FeatureNameMismatch { expected, actual }`
    ///   Returned when the name count disagrees with the column count.
    /// - `RegressionError::NonFiniteFeature { row, col, value }`
    ///   Returned for the first NaN/±∞ design-matrix entry.
    /// - `RegressionError::NonFiniteResponse { index, value }`
    ///   Returned for the first NaN/±∞ response entry.
    ///
    /// Panics
    /// ------
    /// - Never panics. All invalid inputs are reported via `RegressionError`.
    ///
    /// Notes
    /// -----
    /// - Shape checks run before the finiteness scans, so mismatched inputs
    ///   fail fast without touching the data.
    ///
    /// Examples
    /// --------
    /// ```rust
    /// # use ndarray::{array, Array1, Array2};
    /// # use rolling_hedonic::regression::core::data::RegressionData;
    /// #
    /// let x = array![[1.0, 2.0], [1.0, 3.0]];
    /// let y = array![5.0, 7.0];
    /// let t = array![0_i64, 0];
    /// let names = vec!["const".to_string(), "dist_park".to_string()];
    /// let data = RegressionData::new(x, y, t, names).unwrap();
    /// assert_eq!(data.n_features(), 2);
    /// ```
    pub fn new(
        x: Array2<f64>, y: Array1<f64>, periods: Array1<i64>, feature_names: Vec<String>,
    ) -> RegressionResult<Self> {
        let n_obs = x.nrows();
        if n_obs == 0 {
            return Err(RegressionError::EmptyDesignMatrix);
        }
        if x.ncols() == 0 {
            return Err(RegressionError::NoFeatures);
        }
        if y.len() != n_obs {
            return Err(RegressionError::LengthMismatch {
                name: "y",
                expected: n_obs,
                actual: y.len(),
            });
        }
        if periods.len() != n_obs {
            return Err(RegressionError::LengthMismatch {
                name: "t",
                expected: n_obs,
                actual: periods.len(),
            });
        }
        if feature_names.len() != x.ncols() {
            return Err(RegressionError::FeatureNameMismatch {
                expected: x.ncols(),
                actual: feature_names.len(),
            });
        }

        for ((row, col), &value) in x.indexed_iter() {
            if !value.is_finite() {
                return Err(RegressionError::NonFiniteFeature { row, col, value });
            }
        }
        for (index, &value) in y.iter().enumerate() {
            if !value.is_finite() {
                return Err(RegressionError::NonFiniteResponse { index, value });
            }
        }

        Ok(RegressionData { x, y, periods, feature_names })
    }

    /// Construct a [`RegressionData`] with generated positional column names.
    ///
    /// Parameters
    /// ----------
    /// - `x`, `y`, `periods`
    ///   As in [`RegressionData::new`].
    ///
    /// Returns
    /// -------
    /// `RegressionResult<RegressionData>`
    ///   The validated dataset with column `j` labelled `x{j}`.
    ///
    /// Notes
    /// -----
    /// - Intended for synthetic data and tests; real pipelines should carry
    ///   the upstream feature names so coefficient paths stay interpretable.
    pub fn unnamed(x: Array2<f64>, y: Array1<f64>, periods: Array1<i64>) -> RegressionResult<Self> {
        let names = (0..x.ncols()).map(|j| format!("x{j}")).collect();
        RegressionData::new(x, y, periods, names)
    }

    /// Number of observations (design-matrix rows).
    pub fn n_obs(&self) -> usize {
        self.x.nrows()
    }

    /// Number of feature columns.
    pub fn n_features(&self) -> usize {
        self.x.ncols()
    }
}
