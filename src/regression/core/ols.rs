//! Per-window OLS — eigen-based least squares with coefficient inference.
//!
//! Purpose
//! -------
//! Fit a single window's ordinary-least-squares regression and derive the
//! inference the rolling engine records: coefficient estimates, two-sided
//! t p-values, R², adjusted R², and the model F-statistic with its p-value.
//! This module handles conversion between `ndarray` and `nalgebra` types and
//! solves the normal equations through a symmetric eigendecomposition with
//! eigenvalue truncation.
//!
//! Key behaviors
//! -------------
//! - Form `XᵀX` and `Xᵀy` in `ndarray`, copy the Gram matrix into a
//!   `nalgebra::DMatrix` (`fill_dmatrix`), and eigendecompose it.
//! - Treat any eigenvalue at or below the scaled [`EIGEN_EPS`] threshold as
//!   a hard singularity: collinear columns or degenerate windows abort the
//!   fit instead of being silently truncated.
//! - Recover `β = Q Λ⁻¹ Qᵀ Xᵀy` and the `(XᵀX)⁻¹` diagonal from the same
//!   decomposition, then derive σ², standard errors, and t p-values.
//!
//! Invariants & assumptions
//! ------------------------
//! - The design matrix already carries its own constant column when an
//!   intercept is wanted; **no intercept is added here** (an explicit
//!   modeling choice, mirrored in the diagnostics' degrees of freedom).
//! - Inputs are finite (guaranteed upstream by `RegressionData`), and
//!   `rows > cols` (enforced here, so the residual degrees of freedom are
//!   strictly positive).
//! - `R²` is computed against the centred total sum of squares, matching
//!   the has-constant convention of the original pipeline.
//!
//! Conventions
//! -----------
//! - On an exact fit (zero residual sum of squares), standard errors
//!   collapse to zero and t statistics diverge; p-values take the limit
//!   value 0 for nonzero coefficients (1 for zero ones) and the F-statistic
//!   is `+∞`. This keeps exactly-linear synthetic data free of NaNs.
//! - With a single column (constant-only model) the F-statistic and its
//!   p-value are undefined and reported as NaN.
//! - Errors are reported via `RegressionResult` and name the offending
//!   window index supplied by the caller.
//!
//! Downstream usage
//! ----------------
//! - Called once per window by
//!   [`RollingRegression::fit`](crate::regression::models::rolling::RollingRegression::fit);
//!   not intended as a general-purpose OLS entry point, though it is usable
//!   standalone on any validated design.
//!
//! Testing notes
//! -------------
//! - Unit tests cover exact recovery on noiseless data, agreement of R² /
//!   adjusted R² / F on a small hand-checked problem, the p-value bounds,
//!   the singular and insufficient-observation rejections, and the
//!   `fill_dmatrix` copy.

use crate::regression::errors::{RegressionError, RegressionResult};
use nalgebra::DMatrix;
use ndarray::{Array1, Array2, ArrayView1, ArrayView2};
use statrs::distribution::{ContinuousCDF, FisherSnedecor, StudentsT};

/// Relative eigenvalue cutoff below which the Gram matrix is treated as
/// numerically singular.
pub(crate) const EIGEN_EPS: f64 = 1e-10;

/// `WindowFit` — OLS estimates and diagnostics for one window.
///
/// Purpose
/// -------
/// Carry the per-window quantities the rolling engine records into its
/// result tables: the coefficient vector, its two-sided t p-values, and the
/// scalar fit diagnostics.
///
/// Fields
/// ------
/// - `coeffs`: `Array1<f64>`
///   OLS coefficient estimates, one per design-matrix column, in column
///   order.
/// - `p_values`: `Array1<f64>`
///   Two-sided p-values from Student's t with `rows − cols` degrees of
///   freedom, aligned with `coeffs`.
/// - `r_squared`: `f64`
///   Coefficient of determination against the centred total sum of squares.
/// - `adj_r_squared`: `f64`
///   `1 − (1 − R²)(n − 1)/(n − k)`; always `<= r_squared` for models with a
///   predictor beyond the constant.
/// - `f_statistic`: `f64`
///   Overall model F with `(k − 1, n − k)` degrees of freedom; `+∞` on an
///   exact fit, NaN for constant-only models.
/// - `f_pvalue`: `f64`
///   Upper-tail Fisher–Snedecor probability of `f_statistic`; 0 on an exact
///   fit, NaN when the statistic is undefined.
///
/// Invariants
/// ----------
/// - `coeffs.len() == p_values.len() == cols`.
/// - Every p-value lies in `[0, 1]`.
#[derive(Debug, Clone, PartialEq)]
pub struct WindowFit {
    /// Coefficient estimates, in design-matrix column order.
    pub coeffs: Array1<f64>,
    /// Two-sided t p-values, aligned with `coeffs`.
    pub p_values: Array1<f64>,
    /// R² against the centred total sum of squares.
    pub r_squared: f64,
    /// Adjusted R².
    pub adj_r_squared: f64,
    /// Overall model F-statistic.
    pub f_statistic: f64,
    /// Upper-tail p-value of the F-statistic.
    pub f_pvalue: f64,
}

/// Fit one window's OLS regression and derive its inference.
///
/// Parameters
/// ----------
/// - `x`: `ArrayView2<f64>`
///   Window design matrix (`rows × cols`), finite, carrying its own
///   constant column when an intercept is wanted.
/// - `y`: `ArrayView1<f64>`
///   Window response, parallel to the rows of `x`.
/// - `window`: `usize`
///   Window index, used only to label errors.
///
/// Returns
/// -------
/// `RegressionResult<WindowFit>`
///   The coefficient vector, p-values, and diagnostics for this window.
///
/// Errors
/// ------
/// - `RegressionError::InsufficientObservations`
///   Returned when `rows <= cols`; with `rows == cols` the residual degrees
///   of freedom would be zero and σ² undefined.
/// - `RegressionError::SingularWindow`
///   Returned when the Gram matrix has an eigenvalue at or below the scaled
///   [`EIGEN_EPS`] cutoff (collinear or near-collinear columns).
///
/// Panics
/// ------
/// - Never panics on validated inputs; the `rows > cols` check guarantees
///   the Student's t degrees of freedom are at least 1.
///
/// Notes
/// -----
/// - The solve runs on the `cols × cols` Gram matrix, so cost is
///   O(rows·cols² + cols³) per window.
pub fn fit_window_ols(
    x: ArrayView2<'_, f64>, y: ArrayView1<'_, f64>, window: usize,
) -> RegressionResult<WindowFit> {
    let n = x.nrows();
    let k = x.ncols();
    if n <= k {
        return Err(RegressionError::InsufficientObservations { window, rows: n, cols: k });
    }

    // Normal equations on the Gram matrix, solved by symmetric
    // eigendecomposition so the inverse diagonal falls out of the same pass.
    let xtx = x.t().dot(&x);
    let xty = x.t().dot(&y);
    let mut gram = DMatrix::<f64>::zeros(k, k);
    fill_dmatrix(&xtx, &mut gram);
    let eigen = gram.symmetric_eigen();
    let q = eigen.eigenvectors;
    let eigenvals = eigen.eigenvalues;

    let lambda_max = eigenvals.iter().fold(0.0_f64, |acc, &l| acc.max(l));
    let cutoff = EIGEN_EPS * lambda_max.max(1.0);
    if eigenvals.iter().any(|&l| l <= cutoff) {
        return Err(RegressionError::SingularWindow { window });
    }

    // β = Q Λ⁻¹ Qᵀ (Xᵀy); inv_diag[j] = Σ_m Q[j,m]² / λ_m.
    let mut coeffs = Array1::<f64>::zeros(k);
    let mut inv_diag = Array1::<f64>::zeros(k);
    for (m, &lambda) in eigenvals.iter().enumerate() {
        let mut proj = 0.0;
        for j in 0..k {
            proj += q[(j, m)] * xty[j];
        }
        let scaled = proj / lambda;
        for j in 0..k {
            coeffs[j] += q[(j, m)] * scaled;
            inv_diag[j] += q[(j, m)] * q[(j, m)] / lambda;
        }
    }

    let fitted = x.dot(&coeffs);
    let sse: f64 = y.iter().zip(fitted.iter()).map(|(yi, fi)| (yi - fi).powi(2)).sum();
    let y_mean = y.sum() / n as f64;
    let sst: f64 = y.iter().map(|yi| (yi - y_mean).powi(2)).sum();

    let df_resid = (n - k) as f64;
    let sigma2 = sse / df_resid;
    let r_squared = if sst > 0.0 { 1.0 - sse / sst } else { 0.0 };
    let adj_r_squared = 1.0 - (1.0 - r_squared) * (n as f64 - 1.0) / df_resid;

    let (f_statistic, f_pvalue) = calc_f_statistic(r_squared, sse, k, df_resid);
    let p_values = calc_p_values(&coeffs, &inv_diag, sigma2, df_resid);

    Ok(WindowFit { coeffs, p_values, r_squared, adj_r_squared, f_statistic, f_pvalue })
}

// ---- Helper methods ----

/// fill_dmatrix — copy an `ndarray` Gram matrix into a `nalgebra::DMatrix`.
///
/// Purpose
/// -------
/// Bridge between `ndarray` and `nalgebra` by copying the square `XᵀX`
/// matrix into a `DMatrix<f64>` using column-major writes. Symmetry is a
/// property of the Gram matrix itself; this helper copies both triangles
/// verbatim and does not re-symmetrize.
///
/// Parameters
/// ----------
/// - `gram`: `&Array2<f64>`
///   Square `k×k` Gram matrix in `ndarray` form.
/// - `gram_nalg`: `&mut DMatrix<f64>`
///   Preallocated `k×k` destination. Must have the same dimensions.
///
/// Panics
/// ------
/// - May panic on mismatched shapes, which indicates a programmer error.
///
/// Notes
/// -----
/// - The copy proceeds column by column, matching the column-major storage
///   of `DMatrix`.
fn fill_dmatrix(gram: &Array2<f64>, gram_nalg: &mut DMatrix<f64>) {
    let k = gram.ncols();
    for j in 0..k {
        for i in j..k {
            if j == i {
                gram_nalg[(i, i)] = gram[[i, i]];
            } else {
                gram_nalg[(i, j)] = gram[[i, j]];
                gram_nalg[(j, i)] = gram[[j, i]];
            }
        }
    }
}

/// Two-sided t p-values from the `(XᵀX)⁻¹` diagonal.
///
/// Parameters
/// ----------
/// - `coeffs`: `&Array1<f64>`
///   OLS coefficient estimates.
/// - `inv_diag`: `&Array1<f64>`
///   Diagonal of `(XᵀX)⁻¹`, aligned with `coeffs`.
/// - `sigma2`: `f64`
///   Residual variance estimate `SSE / (n − k)`; zero on an exact fit.
/// - `df_resid`: `f64`
///   Residual degrees of freedom; strictly positive for validated windows.
///
/// Returns
/// -------
/// `Array1<f64>`
///   `p_j = 2·(1 − T_{df}(|β_j / se_j|))`, taking the limit values 0 / 1
///   when the standard error collapses to zero (exact fit).
///
/// Notes
/// -----
/// - `Var(β_j) = σ² · inv_diag[j]`; `inv_diag` entries are positive for any
///   matrix that passed the singularity check.
fn calc_p_values(
    coeffs: &Array1<f64>, inv_diag: &Array1<f64>, sigma2: f64, df_resid: f64,
) -> Array1<f64> {
    let t_dist = StudentsT::new(0.0, 1.0, df_resid).expect("df_resid >= 1");
    let mut p_values = Array1::<f64>::zeros(coeffs.len());
    for j in 0..coeffs.len() {
        let se = (sigma2 * inv_diag[j]).sqrt();
        let t_stat = coeffs[j] / se;
        p_values[j] = if t_stat.is_finite() {
            2.0 * (1.0 - t_dist.cdf(t_stat.abs()))
        } else if coeffs[j] != 0.0 {
            0.0
        } else {
            1.0
        };
    }
    p_values
}

/// Overall model F-statistic and its upper-tail p-value.
///
/// Parameters
/// ----------
/// - `r_squared`: `f64`
///   Centred R² of the window fit.
/// - `sse`: `f64`
///   Residual sum of squares; zero signals an exact fit.
/// - `k`: `usize`
///   Number of design-matrix columns, including the constant.
/// - `df_resid`: `f64`
///   Residual degrees of freedom `n − k`.
///
/// Returns
/// -------
/// `(f64, f64)`
///   `(F, p)` with `F = (R²/(k−1)) / ((1−R²)/(n−k))` under the
///   has-constant convention; `(+∞, 0)` on an exact fit and `(NaN, NaN)`
///   for constant-only models where the statistic is undefined.
fn calc_f_statistic(r_squared: f64, sse: f64, k: usize, df_resid: f64) -> (f64, f64) {
    if k < 2 {
        return (f64::NAN, f64::NAN);
    }
    if sse <= 0.0 {
        return (f64::INFINITY, 0.0);
    }
    let df_model = (k - 1) as f64;
    let f_statistic = (r_squared / df_model) / ((1.0 - r_squared) / df_resid);
    let f_pvalue = match FisherSnedecor::new(df_model, df_resid) {
        Ok(dist) => 1.0 - dist.cdf(f_statistic),
        Err(_) => f64::NAN,
    };
    (f_statistic, f_pvalue)
}
