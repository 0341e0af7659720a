//! Window planning — period enumeration and window dispatch for rolling fits.
//!
//! Purpose
//! -------
//! Turn a raw per-row time index and a [`RollingOptions`] configuration into
//! an explicit plan: the sorted distinct period values, the number of
//! windows the sliding fit will produce, the period span of each window, and
//! the rule resolving a (possibly out-of-sample) period to the window whose
//! coefficients should price it.
//!
//! Key behaviors
//! -------------
//! - Enumerate distinct period values in **sorted ascending order** (the
//!   rolling window is defined over time, not over encounter order).
//! - Compute `n_windows = floor(distinct / stepsize) - (window - stepsize)`
//!   and reject configurations where no complete window fits.
//! - Expose the period span of window `idx` as the sorted positions
//!   `[idx·stepsize, idx·stepsize + window)`.
//! - Resolve a prediction period to a fitted window: offsets earlier than
//!   the first complete window **clamp to window 0**, offsets beyond the
//!   last fitted window are an error.
//!
//! Invariants & assumptions
//! ------------------------
//! - `options` has already been validated (`window, stepsize >= 1`).
//! - Period values are integer ordinals (e.g., quarter counts); the
//!   predict-time resolution uses the offset from the earliest training
//!   period, so 0-based and 1-based indices both work.
//! - For every `idx < n_windows`,
//!   `idx·stepsize + window <= distinct_periods`, so `window_periods` never
//!   slices out of bounds.
//!
//! Conventions
//! -----------
//! - Window indices are 0-based and chronological.
//! - The resolution rule reproduces the original quarterly convention: a
//!   new observation in period `t` is priced by the window that *ends just
//!   before* `t`, i.e. raw index `(t − first_period − window) ÷ stepsize`
//!   (floor division), clamped below to 0.
//!
//! Downstream usage
//! ----------------
//! - Built by
//!   [`RollingRegression::new`](crate::regression::models::rolling::RollingRegression::new)
//!   so that configuration/data incompatibilities surface at construction,
//!   before any fitting work.
//! - Carried inside the fitted result so `predict` can dispatch rows to
//!   windows without re-deriving the period list.
//!
//! Testing notes
//! -------------
//! - Unit tests cover window counting for several (distinct, window, step)
//!   combinations, the sorted-order guarantee, the span of each window, and
//!   a clamping table for `resolve_window` (early, in-range, and beyond).

use crate::regression::{
    core::options::RollingOptions,
    errors::{RegressionError, RegressionResult},
};
use ndarray::ArrayView1;

/// `WindowPlan` — the resolved sliding-window layout for one dataset.
///
/// Purpose
/// -------
/// Hold the sorted distinct periods of a dataset together with the window
/// width, step size, and derived window count, and answer the two questions
/// the engine asks: "which periods does window `idx` cover?" (fit time) and
/// "which window prices period `t`?" (predict time).
///
/// Key behaviors
/// -------------
/// - Derives `n_windows` once at construction and fails fast when the data
///   holds fewer distinct periods than one window needs.
/// - Serves window spans as slices into the sorted period list, so fit-time
///   row selection can use binary search.
/// - Resolves prediction periods with the clamp-below / error-above policy
///   described in the module docs.
///
/// Fields
/// ------
/// - `periods`: `Vec<i64>`
///   Sorted ascending distinct period values observed in the training data.
/// - `options`: [`RollingOptions`]
///   The validated window configuration the plan was built from.
/// - `n_windows`: `usize`
///   Number of complete windows; always at least 1.
///
/// Invariants
/// ----------
/// - `periods` is non-empty, strictly increasing, and deduplicated.
/// - `n_windows >= 1`, and
///   `(n_windows - 1)·stepsize + window <= periods.len()`.
///
/// Performance
/// -----------
/// - Construction sorts and deduplicates the period column once (O(n log n));
///   `window_periods` is O(1) and `resolve_window` is O(1).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowPlan {
    periods: Vec<i64>,
    options: RollingOptions,
    n_windows: usize,
}

impl WindowPlan {
    /// Build a [`WindowPlan`] from a per-row time index and window options.
    ///
    /// Parameters
    /// ----------
    /// - `time`: `ArrayView1<i64>`
    ///   Per-row period ordinals (one entry per observation; repeats are
    ///   expected and collapse to distinct values here).
    /// - `options`: `&RollingOptions`
    ///   Validated window configuration.
    ///
    /// Returns
    /// -------
    /// `RegressionResult<WindowPlan>`
    ///   - `Ok(plan)` with `plan.n_windows() >= 1`.
    ///   - `Err(RegressionError::TooFewPeriods)` when
    ///     `floor(distinct / stepsize) - (window - stepsize) <= 0`, i.e. the
    ///     data cannot cover a single complete window.
    ///
    /// Panics
    /// ------
    /// - Never panics.
    ///
    /// Notes
    /// -----
    /// - The window count is computed in signed arithmetic so that wide
    ///   windows on short histories produce the error rather than wrapping.
    pub fn new(time: ArrayView1<'_, i64>, options: &RollingOptions) -> RegressionResult<Self> {
        let mut periods: Vec<i64> = time.iter().copied().collect();
        periods.sort_unstable();
        periods.dedup();

        let distinct = periods.len() as i64;
        let window = options.window as i64;
        let stepsize = options.stepsize as i64;
        let n_windows = distinct / stepsize - (window - stepsize);
        if n_windows <= 0 {
            return Err(RegressionError::TooFewPeriods {
                periods: periods.len(),
                window: options.window,
            });
        }

        Ok(WindowPlan { periods, options: *options, n_windows: n_windows as usize })
    }

    /// Number of complete windows the rolling fit will produce.
    pub fn n_windows(&self) -> usize {
        self.n_windows
    }

    /// Sorted ascending distinct period values of the training data.
    pub fn periods(&self) -> &[i64] {
        &self.periods
    }

    /// The window configuration this plan was built from.
    pub fn options(&self) -> &RollingOptions {
        &self.options
    }

    /// The sorted period values covered by window `idx`.
    ///
    /// Parameters
    /// ----------
    /// - `idx`: `usize`
    ///   Window index; must satisfy `idx < n_windows`.
    ///
    /// Returns
    /// -------
    /// `&[i64]`
    ///   The `window`-many consecutive distinct periods at sorted positions
    ///   `[idx·stepsize, idx·stepsize + window)`.
    ///
    /// Panics
    /// ------
    /// - Panics if `idx >= n_windows` (programmer error; the fit loop only
    ///   iterates over valid indices).
    pub fn window_periods(&self, idx: usize) -> &[i64] {
        let lwr = idx * self.options.stepsize;
        &self.periods[lwr..lwr + self.options.window]
    }

    /// Resolve the fitted window that prices an observation in `period`.
    ///
    /// Parameters
    /// ----------
    /// - `period`: `i64`
    ///   Period ordinal of the observation to price; may fall before,
    ///   inside, or after the training history.
    ///
    /// Returns
    /// -------
    /// `RegressionResult<usize>`
    ///   - `Ok(idx)` with `idx < n_windows`: the raw index
    ///     `(period − first_period − window) ÷ stepsize` (floor division),
    ///     clamped below to 0. Periods earlier than the first complete
    ///     window are priced as if they fell in the first complete window —
    ///     an explicit policy, not a fallback.
    ///   - `Err(RegressionError::PeriodBeyondFittedWindows)` when the raw
    ///     index exceeds `n_windows - 1`; the engine refuses to extrapolate
    ///     past its last fitted window.
    ///
    /// Panics
    /// ------
    /// - Never panics.
    pub fn resolve_window(&self, period: i64) -> RegressionResult<usize> {
        let offset = period - self.periods[0];
        let raw = (offset - self.options.window as i64).div_euclid(self.options.stepsize as i64);
        if raw <= 0 {
            return Ok(0);
        }
        let idx = raw as usize;
        if idx >= self.n_windows {
            return Err(RegressionError::PeriodBeyondFittedWindows {
                period,
                n_windows: self.n_windows,
            });
        }
        Ok(idx)
    }
}
