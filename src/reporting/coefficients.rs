//! Coefficient paths — per-feature time series with significance tags.
//!
//! Purpose
//! -------
//! Reduce a fitted rolling regression to the series its consumers actually
//! plot: for each feature, the coefficient value per window together with
//! its p-value and a 5%-level significance flag. Rendering is out of scope;
//! this module only prepares the data contract.
//!
//! Key behaviors
//! -------------
//! - [`CoefficientPath::from_fit`] extracts one named feature's path;
//!   [`coefficient_paths`] extracts every feature, in design-matrix column
//!   order.
//! - A point is significant when `p_value <= SIGNIFICANCE_LEVEL`.
//!
//! Conventions
//! -----------
//! - Window indices are the fit's own 0-based chronological indices, so
//!   paths line up directly with the result tables.
//!
//! Testing notes
//! -------------
//! - Unit tests cover path extraction by name (hit and miss), alignment
//!   with the fit tables, and the significance threshold at the boundary.

use crate::regression::models::rolling::RollingFit;

/// p-value threshold below which a coefficient is flagged significant.
pub const SIGNIFICANCE_LEVEL: f64 = 0.05;

/// One window's entry in a coefficient path.
///
/// Fields
/// ------
/// - `window`: 0-based chronological window index.
/// - `value`: the coefficient estimate in that window.
/// - `p_value`: the two-sided t p-value of the estimate.
/// - `significant`: `p_value <= SIGNIFICANCE_LEVEL`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoefficientPoint {
    /// 0-based chronological window index.
    pub window: usize,
    /// Coefficient estimate.
    pub value: f64,
    /// Two-sided t p-value.
    pub p_value: f64,
    /// Whether the estimate clears the 5% level.
    pub significant: bool,
}

/// `CoefficientPath` — one feature's coefficient series across windows.
///
/// Purpose
/// -------
/// Pair a feature name with its per-window [`CoefficientPoint`]s, ordered
/// chronologically, ready for plotting or tabulation downstream.
///
/// Invariants
/// ----------
/// - `points.len()` equals the fit's window count, and `points[w].window ==
///   w`.
#[derive(Debug, Clone, PartialEq)]
pub struct CoefficientPath {
    /// Feature name, as carried by the fit.
    pub feature: String,
    /// Per-window points, in chronological order.
    pub points: Vec<CoefficientPoint>,
}

impl CoefficientPath {
    /// Extract the path of one named feature from a fit.
    ///
    /// Parameters
    /// ----------
    /// - `fit`: `&RollingFit`
    ///   A fitted rolling regression.
    /// - `feature`: `&str`
    ///   The feature name to extract; matched exactly against the fit's
    ///   feature names.
    ///
    /// Returns
    /// -------
    /// `Option<CoefficientPath>`
    ///   `None` when the fit carries no feature by that name.
    pub fn from_fit(fit: &RollingFit, feature: &str) -> Option<CoefficientPath> {
        let col = fit.feature_names().iter().position(|name| name == feature)?;
        Some(path_for_column(fit, col))
    }
}

/// Extract every feature's coefficient path, in column order.
///
/// Parameters
/// ----------
/// - `fit`: `&RollingFit`
///   A fitted rolling regression.
///
/// Returns
/// -------
/// `Vec<CoefficientPath>`
///   One path per design-matrix column, each with one point per window.
pub fn coefficient_paths(fit: &RollingFit) -> Vec<CoefficientPath> {
    (0..fit.feature_names().len()).map(|col| path_for_column(fit, col)).collect()
}

fn path_for_column(fit: &RollingFit, col: usize) -> CoefficientPath {
    let points = (0..fit.n_windows())
        .map(|window| {
            let p_value = fit.p_values()[[window, col]];
            CoefficientPoint {
                window,
                value: fit.coeffs()[[window, col]],
                p_value,
                significant: p_value <= SIGNIFICANCE_LEVEL,
            }
        })
        .collect();
    CoefficientPath { feature: fit.feature_names()[col].clone(), points }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::regression::{
        core::{data::RegressionData, options::RollingOptions},
        models::rolling::RollingRegression,
    };
    use ndarray::{array, Array1, Array2};

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Path extraction by feature name, including the unknown-name miss.
    // - Alignment of paths with the fit's coefficient and p-value tables.
    // - The significance flag, including its boundary at exactly 0.05.
    // -------------------------------------------------------------------------

    // Purpose
    // -------
    // Fit a small two-window model whose slope is strongly significant, as
    // a shared fixture for path extraction tests.
    //
    // Given
    // -----
    // - Periods 1..=3, 4 rows each, y = 2v + noise, window 2, step 1.
    //
    // Expect
    // ------
    // - A fitted model with 2 windows and features ["const", "area"].
    fn fitted_model() -> RollingRegression {
        let noise = [0.05, -0.03, 0.04, -0.02];
        let mut rows = Vec::new();
        let mut ys = Vec::new();
        let mut ts = Vec::new();
        for t in 1_i64..=3 {
            for (i, v) in [1.0, 3.0, 5.0, 8.0].into_iter().enumerate() {
                rows.push([1.0, v]);
                ys.push(2.0 * v + noise[i]);
                ts.push(t);
            }
        }
        let n = rows.len();
        let x = Array2::from_shape_fn((n, 2), |(i, j)| rows[i][j]);
        let data = RegressionData::new(
            x,
            Array1::from_vec(ys),
            Array1::from_vec(ts),
            vec!["const".to_string(), "area".to_string()],
        )
        .unwrap();
        let mut model = RollingRegression::new(data, RollingOptions::new(2, 1).unwrap()).unwrap();
        model.fit().unwrap();
        model
    }

    #[test]
    // Purpose
    // -------
    // Verify extraction by name returns the column's values aligned with
    // the fit tables, and that unknown names miss.
    //
    // Given
    // -----
    // - The fitted fixture model.
    //
    // Expect
    // ------
    // - `from_fit(fit, "area")` yields 2 points mirroring column 1 of the
    //   coefficient and p-value tables, with ascending window indices.
    // - `from_fit(fit, "bathrooms")` is `None`.
    fn from_fit_extracts_named_column() {
        let model = fitted_model();
        let fit = model.fit_result.as_ref().unwrap();

        let path = CoefficientPath::from_fit(fit, "area").unwrap();
        assert_eq!(path.feature, "area");
        assert_eq!(path.points.len(), 2);
        for (w, point) in path.points.iter().enumerate() {
            assert_eq!(point.window, w);
            assert_eq!(point.value, fit.coeffs()[[w, 1]]);
            assert_eq!(point.p_value, fit.p_values()[[w, 1]]);
        }
        assert!(path.points.iter().all(|p| p.significant), "slope should clear 5%");

        assert!(CoefficientPath::from_fit(fit, "bathrooms").is_none());
    }

    #[test]
    // Purpose
    // -------
    // Verify `coefficient_paths` returns one path per column in design
    // order.
    //
    // Given
    // -----
    // - The fitted fixture model.
    //
    // Expect
    // ------
    // - Two paths named "const" then "area", each with one point per
    //   window.
    fn coefficient_paths_covers_all_columns_in_order() {
        let model = fitted_model();
        let fit = model.fit_result.as_ref().unwrap();

        let paths = coefficient_paths(fit);
        assert_eq!(paths.len(), 2);
        assert_eq!(paths[0].feature, "const");
        assert_eq!(paths[1].feature, "area");
        assert!(paths.iter().all(|p| p.points.len() == fit.n_windows()));
    }

    #[test]
    // Purpose
    // -------
    // Pin the significance threshold to `p <= 0.05`, inclusive at the
    // boundary.
    //
    // Given
    // -----
    // - Points constructed directly at p = 0.05 and p = 0.050001.
    //
    // Expect
    // ------
    // - The former is significant, the latter is not.
    fn significance_is_inclusive_at_the_threshold() {
        let at = CoefficientPoint {
            window: 0,
            value: 1.0,
            p_value: SIGNIFICANCE_LEVEL,
            significant: SIGNIFICANCE_LEVEL <= SIGNIFICANCE_LEVEL,
        };
        let above = CoefficientPoint {
            window: 0,
            value: 1.0,
            p_value: 0.050001,
            significant: 0.050001 <= SIGNIFICANCE_LEVEL,
        };
        assert!(at.significant);
        assert!(!above.significant);
    }

    #[test]
    // Purpose
    // -------
    // Verify that a hand-assembled fit boundary case flags exactly the
    // points at or below the threshold.
    //
    // Given
    // -----
    // - The fixture fit's "const" path, whose intercept is statistically
    //   indistinguishable from zero (true intercept is 0 plus noise).
    //
    // Expect
    // ------
    // - Every point's flag equals `p_value <= 0.05` recomputed by hand.
    fn flags_match_recomputed_threshold() {
        let model = fitted_model();
        let fit = model.fit_result.as_ref().unwrap();

        for path in coefficient_paths(fit) {
            for point in &path.points {
                assert_eq!(point.significant, point.p_value <= SIGNIFICANCE_LEVEL);
            }
        }
    }
}
