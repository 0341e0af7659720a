//! regression — rolling hedonic regression stack: core numerics, models,
//! and errors.
//!
//! Purpose
//! -------
//! Provide the sliding-window hedonic regression layer: validated data
//! containers, window planning, per-window OLS with coefficient inference,
//! the user-facing [`RollingRegression`] engine, and a shared error surface.
//! This is the namespace most consumers (including the Python bindings)
//! should depend on.
//!
//! Key behaviors
//! -------------
//! - Collect structural and numerical building blocks in [`core`]: the
//!   [`RegressionData`] container, [`RollingOptions`], the [`WindowPlan`]
//!   layout, and the eigen-based per-window solver.
//! - Expose the fit / predict lifecycle in [`models`] via
//!   [`RollingRegression`] and its immutable output [`RollingFit`].
//! - Centralize validation, configuration, fitting, and prediction errors
//!   in [`errors`] as [`RegressionError`] with the [`RegressionResult`]
//!   alias, including the `PyErr` bridge behind the `python-bindings`
//!   feature.
//! - Re-export the everyday types directly from this module and via
//!   [`prelude`] for ergonomic imports.
//!
//! Invariants & assumptions
//! ------------------------
//! - Data enter through [`RegressionData::new`], which enforces row
//!   alignment, finiteness, and name/column agreement once; downstream code
//!   relies on those invariants without re-checking.
//! - The design matrix carries its own constant column when an intercept is
//!   wanted; nothing in this subtree adds one implicitly.
//! - Windows are defined over the **sorted distinct** values of the integer
//!   time index; window indices are 0-based and chronological.
//!
//! Conventions
//! -----------
//! - Errors are reported via [`RegressionResult`]; panics indicate
//!   programming errors such as out-of-range window indices.
//! - This subtree performs no I/O and no randomness; sampling lives under
//!   [`split`](crate::split) and presentation under
//!   [`reporting`](crate::reporting).
//!
//! Downstream usage
//! ----------------
//! - Typical end-to-end flow:
//!   1. Build a [`RegressionData`] from the feature table, response, and
//!      period index.
//!   2. Pick a [`RollingOptions`] (the default reproduces the original
//!      quarterly 4-period window with step 1).
//!   3. Construct the engine with [`RollingRegression::new`], call
//!      [`fit`](RollingRegression::fit), and price new rows with
//!      [`predict`](RollingRegression::predict).
//!   4. Hand the cached [`RollingFit`] to
//!      [`coefficient_paths`](crate::reporting::coefficients::coefficient_paths)
//!      for significance-annotated coefficient series.
//!
//! Testing notes
//! -------------
//! - Unit tests live next to each submodule; the cross-module fit lifecycle
//!   is exercised in the model suite and in the crate-level integration
//!   test.

pub mod core;
pub mod errors;
pub mod models;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::core::{
    fit_window_ols, RegressionData, RollingOptions, WindowFit, WindowPlan, DEFAULT_STEPSIZE,
    DEFAULT_WINDOW,
};
pub use self::errors::{RegressionError, RegressionResult};
pub use self::models::{RollingFit, RollingRegression};

// ---- Optional convenience prelude for downstream crates -------------------
//
// Downstream crates can write
//
//     use rolling_hedonic::regression::prelude::*;
//
// to import the main modeling surface in a single line.

pub mod prelude {
    pub use super::{
        RegressionData, RegressionError, RegressionResult, RollingFit, RollingOptions,
        RollingRegression,
    };
}
