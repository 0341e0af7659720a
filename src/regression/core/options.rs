//! Rolling options — window configuration for the rolling regression engine.
//!
//! Purpose
//! -------
//! Collect the sliding-window configuration in one validated place, making
//! the rolling fit explicit and reproducible instead of relying on
//! hard-coded constants inside the engine.
//!
//! Key behaviors
//! -------------
//! - Represent the window width and step size via [`RollingOptions`], with
//!   the historical defaults (4 periods wide, advancing 1 period per window)
//!   available through `Default`.
//! - Reject degenerate configurations (zero width or step) at construction,
//!   so the window planner can assume positive values.
//!
//! Invariants & assumptions
//! ------------------------
//! - `window >= 1` and `stepsize >= 1`.
//! - Compatibility with the *data* (enough distinct periods to cover at
//!   least one window) is checked later by the window planner, not here;
//!   this type only validates the configuration in isolation.
//!
//! Conventions
//! -----------
//! - Both fields count *distinct period values*, not observation rows: a
//!   window of 4 spans four distinct periods regardless of how many sales
//!   each period holds.
//! - When `stepsize < window`, consecutive windows overlap; when
//!   `stepsize == window`, they tile the period axis without overlap.
//!
//! Downstream usage
//! ----------------
//! - Construct via [`RollingOptions::new`] (or `Default`) and pass to
//!   [`RollingRegression::new`](crate::regression::models::rolling::RollingRegression::new).
//!
//! Testing notes
//! -------------
//! - Unit tests cover the defaults, a valid custom configuration, and both
//!   rejection branches.

use crate::regression::errors::{RegressionError, RegressionResult};

/// Default window width in distinct periods.
pub const DEFAULT_WINDOW: usize = 4;

/// Default step size in distinct periods.
pub const DEFAULT_STEPSIZE: usize = 1;

/// `RollingOptions` — validated sliding-window configuration.
///
/// Purpose
/// -------
/// Bundle the window width and step size governing how the rolling fit
/// slides over the distinct period values of a dataset.
///
/// Fields
/// ------
/// - `window`: `usize`
///   Number of consecutive distinct periods covered by one regression
///   window. Must be at least 1.
/// - `stepsize`: `usize`
///   Number of distinct periods the window advances between fits. Must be
///   at least 1.
///
/// Invariants
/// ----------
/// - `window >= 1` and `stepsize >= 1`, enforced by [`RollingOptions::new`].
///
/// Performance
/// -----------
/// - Two words; `Copy`, cheap to pass by value.
///
/// Notes
/// -----
/// - `Default` yields the historical configuration `{ window: 4,
///   stepsize: 1 }` used by the original quarterly sale-price model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RollingOptions {
    /// Window width in distinct periods (>= 1).
    pub window: usize,
    /// Step size in distinct periods (>= 1).
    pub stepsize: usize,
}

impl RollingOptions {
    /// Construct a validated [`RollingOptions`].
    ///
    /// Parameters
    /// ----------
    /// - `window`: `usize`
    ///   Window width in distinct periods; must be at least 1.
    /// - `stepsize`: `usize`
    ///   Step size in distinct periods; must be at least 1.
    ///
    /// Returns
    /// -------
    /// `RegressionResult<RollingOptions>`
    ///   - `Ok(RollingOptions)` when both values are positive.
    ///   - `Err(RegressionError::InvalidWindow)` when `window == 0`.
    ///   - `Err(RegressionError::InvalidStepsize)` when `stepsize == 0`.
    ///
    /// Panics
    /// ------
    /// - Never panics.
    pub fn new(window: usize, stepsize: usize) -> RegressionResult<Self> {
        if window == 0 {
            return Err(RegressionError::InvalidWindow { window });
        }
        if stepsize == 0 {
            return Err(RegressionError::InvalidStepsize { stepsize });
        }
        Ok(RollingOptions { window, stepsize })
    }
}

impl Default for RollingOptions {
    fn default() -> Self {
        RollingOptions { window: DEFAULT_WINDOW, stepsize: DEFAULT_STEPSIZE }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - The default configuration values.
    // - Acceptance of a valid custom configuration.
    // - Rejection of zero window width and zero step size.
    //
    // They intentionally DO NOT cover:
    // - Compatibility with a concrete dataset (too few periods), which is
    //   the window planner's responsibility.
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // Verify that `Default` reproduces the historical 4-period window with
    // single-period steps.
    //
    // Given
    // -----
    // - `RollingOptions::default()`.
    //
    // Expect
    // ------
    // - `window == 4` and `stepsize == 1`.
    fn default_matches_historical_configuration() {
        let opts = RollingOptions::default();
        assert_eq!(opts.window, DEFAULT_WINDOW);
        assert_eq!(opts.stepsize, DEFAULT_STEPSIZE);
    }

    #[test]
    // Purpose
    // -------
    // Verify that a valid custom configuration is accepted unchanged.
    //
    // Given
    // -----
    // - `window = 6`, `stepsize = 2`.
    //
    // Expect
    // ------
    // - `RollingOptions::new` returns `Ok` preserving both values.
    fn new_accepts_valid_configuration() {
        let opts = RollingOptions::new(6, 2).unwrap();
        assert_eq!(opts, RollingOptions { window: 6, stepsize: 2 });
    }

    #[test]
    // Purpose
    // -------
    // Ensure degenerate configurations are rejected with the matching
    // variant.
    //
    // Given
    // -----
    // - `window = 0` with a valid step, then a valid window with
    //   `stepsize = 0`.
    //
    // Expect
    // ------
    // - `InvalidWindow { window: 0 }` and `InvalidStepsize { stepsize: 0 }`
    //   respectively.
    fn new_rejects_zero_window_and_zero_stepsize() {
        assert_eq!(
            RollingOptions::new(0, 1).unwrap_err(),
            RegressionError::InvalidWindow { window: 0 }
        );
        assert_eq!(
            RollingOptions::new(4, 0).unwrap_err(),
            RegressionError::InvalidStepsize { stepsize: 0 }
        );
    }
}
