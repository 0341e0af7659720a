//! Stratified per-period train/test splitting.
//!
//! Purpose
//! -------
//! Split a validated dataset into train and test partitions, stratified by
//! the period column so every period contributes its share of hold-out
//! rows. A rolling fit trained on the result still sees every period; an
//! unstratified split could empty out a whole quarter and silently shrink
//! the window layout.
//!
//! Key behaviors
//! -------------
//! - Period groups are processed in **first-encounter order**; within each
//!   group the row indices are shuffled with a single seeded `StdRng`, so
//!   the whole split is a deterministic function of `(data, test_share,
//!   seed)`.
//! - Each group sends its first `round(n · test_share)` shuffled rows to
//!   test and the rest to train; tiny groups may contribute zero test rows.
//! - Row order within each partition follows the shuffled group order, so
//!   consecutive rows of the output still cluster by period.
//!
//! Invariants & assumptions
//! ------------------------
//! - The input is a validated [`RegressionData`]; the splitter re-checks
//!   nothing but the share.
//! - Every input row lands in exactly one partition.
//!
//! Conventions
//! -----------
//! - Defaults reproduce the original pipeline's `test_size=0.2,
//!   random_state=1` convention via [`DEFAULT_TEST_SHARE`] and
//!   [`DEFAULT_SEED`].
//!
//! Downstream usage
//! ----------------
//! - Feed [`TrainTestSplit::train_data`] to
//!   [`RollingRegression::new`](crate::regression::models::rolling::RollingRegression::new)
//!   and score the fit on the held-out arrays.
//!
//! Testing notes
//! -------------
//! - Unit tests cover share validation, per-period conservation and the
//!   80/20 ratio, determinism across equal seeds and divergence across
//!   different ones, and the tiny-group rounding boundary.

use crate::{
    regression::core::data::RegressionData,
    regression::errors::RegressionResult,
    split::errors::{SplitError, SplitResult},
};
use ndarray::{Array1, Array2, Axis};
use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};
use std::collections::HashMap;

/// Default hold-out share, matching the original pipeline's `test_size=0.2`.
pub const DEFAULT_TEST_SHARE: f64 = 0.2;

/// Default RNG seed, matching the original pipeline's `random_state=1`.
pub const DEFAULT_SEED: u64 = 1;

/// `TrainTestSplit` — the two partitions of a stratified split.
///
/// Purpose
/// -------
/// Carry the six parallel train/test collections produced by
/// [`train_test_split`], plus the shared feature names, and rebuild
/// validated datasets from either side on demand.
///
/// Fields
/// ------
/// - `x_train`, `y_train`, `t_train`
///   Training design matrix, response, and period index, row-aligned.
/// - `x_test`, `y_test`, `t_test`
///   Held-out counterparts, row-aligned.
/// - `feature_names`: `Vec<String>`
///   Column labels shared by both design matrices.
///
/// Invariants
/// ----------
/// - `x_train.nrows() + x_test.nrows()` equals the input row count, and the
///   per-period counts are conserved.
/// - Both matrices share the input's column count and ordering.
#[derive(Debug, Clone, PartialEq)]
pub struct TrainTestSplit {
    /// Training design matrix.
    pub x_train: Array2<f64>,
    /// Training response, parallel to `x_train` rows.
    pub y_train: Array1<f64>,
    /// Training period index, parallel to `x_train` rows.
    pub t_train: Array1<i64>,
    /// Held-out design matrix.
    pub x_test: Array2<f64>,
    /// Held-out response, parallel to `x_test` rows.
    pub y_test: Array1<f64>,
    /// Held-out period index, parallel to `x_test` rows.
    pub t_test: Array1<i64>,
    /// Column labels shared by both partitions.
    pub feature_names: Vec<String>,
}

impl TrainTestSplit {
    /// Number of training rows.
    pub fn n_train(&self) -> usize {
        self.x_train.nrows()
    }

    /// Number of held-out rows.
    pub fn n_test(&self) -> usize {
        self.x_test.nrows()
    }

    /// Rebuild a validated dataset from the training partition.
    ///
    /// Returns
    /// -------
    /// `RegressionResult<RegressionData>`
    ///   The training rows as a fresh [`RegressionData`], ready for
    ///   [`RollingRegression::new`](crate::regression::models::rolling::RollingRegression::new).
    ///
    /// Errors
    /// ------
    /// - Validation errors cannot occur for a split of a valid dataset with
    ///   a share below 1; the `Result` is kept for signature uniformity
    ///   with [`TrainTestSplit::test_data`].
    pub fn train_data(&self) -> RegressionResult<RegressionData> {
        RegressionData::new(
            self.x_train.clone(),
            self.y_train.clone(),
            self.t_train.clone(),
            self.feature_names.clone(),
        )
    }

    /// Rebuild a validated dataset from the held-out partition.
    ///
    /// Errors
    /// ------
    /// - `RegressionError::EmptyDesignMatrix`
    ///   Returned when rounding sent zero rows to test (tiny datasets with
    ///   small shares).
    pub fn test_data(&self) -> RegressionResult<RegressionData> {
        RegressionData::new(
            self.x_test.clone(),
            self.y_test.clone(),
            self.t_test.clone(),
            self.feature_names.clone(),
        )
    }
}

/// Split a dataset into stratified train/test partitions.
///
/// Parameters
/// ----------
/// - `data`: `&RegressionData`
///   Validated dataset to split; not consumed.
/// - `test_share`: `f64`
///   Fraction of each period's rows to hold out; must lie strictly between
///   0 and 1.
/// - `seed`: `u64`
///   RNG seed; equal seeds on equal inputs reproduce the split exactly.
///
/// Returns
/// -------
/// `SplitResult<TrainTestSplit>`
///   The two partitions, rows clustered by period in first-encounter order.
///
/// Errors
/// ------
/// - `SplitError::InvalidTestShare`
///   Returned when `test_share` is outside `(0, 1)` or NaN.
///
/// Panics
/// ------
/// - Never panics.
///
/// Notes
/// -----
/// - Each period contributes `round(n · test_share)` test rows, so periods
///   with fewer than 3 rows may contribute none at a 20% share.
pub fn train_test_split(
    data: &RegressionData, test_share: f64, seed: u64,
) -> SplitResult<TrainTestSplit> {
    if !(test_share > 0.0 && test_share < 1.0) {
        return Err(SplitError::InvalidTestShare { value: test_share });
    }

    // Group row indices by period, remembering first-encounter order so the
    // split is invariant to how the groups hash.
    let mut order: Vec<i64> = Vec::new();
    let mut groups: HashMap<i64, Vec<usize>> = HashMap::new();
    for (row, &period) in data.periods.iter().enumerate() {
        groups
            .entry(period)
            .or_insert_with(|| {
                order.push(period);
                Vec::new()
            })
            .push(row);
    }

    let mut rng = StdRng::seed_from_u64(seed);
    let mut train_rows: Vec<usize> = Vec::new();
    let mut test_rows: Vec<usize> = Vec::new();
    for period in &order {
        let Some(mut rows) = groups.remove(period) else { continue };
        rows.shuffle(&mut rng);
        let n_test = (rows.len() as f64 * test_share).round() as usize;
        test_rows.extend_from_slice(&rows[..n_test]);
        train_rows.extend_from_slice(&rows[n_test..]);
    }

    Ok(TrainTestSplit {
        x_train: data.x.select(Axis(0), &train_rows),
        y_train: data.y.select(Axis(0), &train_rows),
        t_train: data.periods.select(Axis(0), &train_rows),
        x_test: data.x.select(Axis(0), &test_rows),
        y_test: data.y.select(Axis(0), &test_rows),
        t_test: data.periods.select(Axis(0), &test_rows),
        feature_names: data.feature_names.clone(),
    })
}

/// [`train_test_split`] with the original pipeline's defaults
/// ([`DEFAULT_TEST_SHARE`], [`DEFAULT_SEED`]).
pub fn train_test_split_default(data: &RegressionData) -> SplitResult<TrainTestSplit> {
    train_test_split(data, DEFAULT_TEST_SHARE, DEFAULT_SEED)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::{Array1, Array2};

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Share validation (bounds and NaN).
    // - Per-period conservation and the 80/20 ratio on well-sized periods.
    // - Determinism across equal seeds and divergence across different ones.
    // - Rounding behavior for tiny periods.
    // - Rebuilding validated datasets from the partitions.
    //
    // They intentionally DO NOT cover:
    // - Rolling fits on split output, which the integration test exercises.
    // -------------------------------------------------------------------------

    // Purpose
    // -------
    // Build a dataset with `rows_per_period` rows in each of `n_periods`
    // periods, with a distinct response value per row so rows can be
    // tracked through the split.
    //
    // Given
    // -----
    // - Row `i` carries y = i and period `i / rows_per_period`.
    //
    // Expect
    // ------
    // - A valid single-feature dataset (constant column plus one feature).
    fn tracked_data(n_periods: usize, rows_per_period: usize) -> RegressionData {
        let n = n_periods * rows_per_period;
        let x = Array2::from_shape_fn((n, 2), |(i, j)| if j == 0 { 1.0 } else { i as f64 });
        let y = Array1::from_shape_fn(n, |i| i as f64);
        let t = Array1::from_shape_fn(n, |i| (i / rows_per_period) as i64);
        RegressionData::unnamed(x, y, t).unwrap()
    }

    #[test]
    // Purpose
    // -------
    // Ensure out-of-range and NaN shares are rejected.
    //
    // Given
    // -----
    // - Shares 0.0, 1.0, -0.1, and NaN on a valid dataset.
    //
    // Expect
    // ------
    // - `InvalidTestShare` carrying the offending value in every case.
    fn split_rejects_invalid_shares() {
        let data = tracked_data(2, 5);

        for share in [0.0, 1.0, -0.1] {
            assert_eq!(
                train_test_split(&data, share, 1).unwrap_err(),
                SplitError::InvalidTestShare { value: share }
            );
        }
        assert!(matches!(
            train_test_split(&data, f64::NAN, 1).unwrap_err(),
            SplitError::InvalidTestShare { value } if value.is_nan()
        ));
    }

    #[test]
    // Purpose
    // -------
    // Verify per-period conservation and the 80/20 ratio, and that every
    // row lands in exactly one partition.
    //
    // Given
    // -----
    // - 5 periods × 10 rows, share 0.2.
    //
    // Expect
    // ------
    // - Each period contributes exactly 2 test and 8 train rows.
    // - The y values of train and test together are exactly 0..50, each
    //   once.
    fn split_conserves_rows_per_period() {
        let data = tracked_data(5, 10);
        let split = train_test_split(&data, 0.2, 7).unwrap();

        assert_eq!(split.n_test(), 10);
        assert_eq!(split.n_train(), 40);
        for period in 0_i64..5 {
            let in_test = split.t_test.iter().filter(|&&t| t == period).count();
            let in_train = split.t_train.iter().filter(|&&t| t == period).count();
            assert_eq!(in_test, 2, "period {period}");
            assert_eq!(in_train, 8, "period {period}");
        }

        let mut seen: Vec<i64> = split
            .y_train
            .iter()
            .chain(split.y_test.iter())
            .map(|&v| v as i64)
            .collect();
        seen.sort_unstable();
        assert_eq!(seen, (0_i64..50).collect::<Vec<_>>());
    }

    #[test]
    // Purpose
    // -------
    // Verify the split is a deterministic function of the seed and that
    // different seeds produce different partitions.
    //
    // Given
    // -----
    // - The same dataset split twice with seed 1 and once with seed 2.
    //
    // Expect
    // ------
    // - Equal seeds reproduce the partitions exactly.
    // - Seed 2 holds out a different set of rows.
    fn split_is_deterministic_in_the_seed() {
        let data = tracked_data(5, 10);

        let a = train_test_split(&data, 0.2, 1).unwrap();
        let b = train_test_split(&data, 0.2, 1).unwrap();
        assert_eq!(a, b);

        let c = train_test_split(&data, 0.2, 2).unwrap();
        let mut held_a: Vec<i64> = a.y_test.iter().map(|&v| v as i64).collect();
        let mut held_c: Vec<i64> = c.y_test.iter().map(|&v| v as i64).collect();
        held_a.sort_unstable();
        held_c.sort_unstable();
        assert_ne!(held_a, held_c);
    }

    #[test]
    // Purpose
    // -------
    // Exercise the rounding boundary on tiny periods.
    //
    // Given
    // -----
    // - 2 rows per period at share 0.2 (round(0.4) = 0 test rows), then
    //   3 rows per period (round(0.6) = 1 test row).
    //
    // Expect
    // ------
    // - The 2-row periods contribute nothing to test; the 3-row periods
    //   contribute exactly one row each.
    fn split_rounds_tiny_periods() {
        let split = train_test_split(&tracked_data(4, 2), 0.2, 1).unwrap();
        assert_eq!(split.n_test(), 0);
        assert_eq!(split.n_train(), 8);

        let split = train_test_split(&tracked_data(4, 3), 0.2, 1).unwrap();
        assert_eq!(split.n_test(), 4);
        assert_eq!(split.n_train(), 8);
    }

    #[test]
    // Purpose
    // -------
    // Verify the partitions rebuild into validated datasets, and that an
    // empty test partition reports the validation error instead of
    // panicking.
    //
    // Given
    // -----
    // - A 5×10 split (non-empty test) and a 4×2 split (empty test).
    //
    // Expect
    // ------
    // - `train_data` and `test_data` succeed for the former with the right
    //   row counts and shared names.
    // - `test_data` fails with `EmptyDesignMatrix` for the latter.
    fn partitions_rebuild_into_datasets() {
        use crate::regression::errors::RegressionError;

        let split = train_test_split(&tracked_data(5, 10), 0.2, 1).unwrap();
        let train = split.train_data().unwrap();
        let test = split.test_data().unwrap();
        assert_eq!(train.n_obs(), 40);
        assert_eq!(test.n_obs(), 10);
        assert_eq!(train.feature_names, test.feature_names);

        let empty_test = train_test_split(&tracked_data(4, 2), 0.2, 1).unwrap();
        assert_eq!(
            empty_test.test_data().unwrap_err(),
            RegressionError::EmptyDesignMatrix
        );
    }
}
