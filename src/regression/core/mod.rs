//! core — data containers, window planning, and per-window numerics.
//!
//! Purpose
//! -------
//! Collect the building blocks the rolling engine is assembled from: the
//! validated [`RegressionData`] container, the [`RollingOptions`]
//! configuration, the [`WindowPlan`] layout, and the per-window OLS solver.
//!
//! Key behaviors
//! -------------
//! - [`data`] validates raw tabular inputs once, at the boundary.
//! - [`options`] holds the window width / step size pair with the original
//!   quarterly defaults.
//! - [`windows`] turns a time index into an explicit window layout and owns
//!   the predict-time dispatch rule.
//! - [`ols`] solves one window's normal equations by symmetric
//!   eigendecomposition and derives coefficient inference.
//!
//! Conventions
//! -----------
//! - Everything here is model-agnostic: nothing in this subtree knows about
//!   the rolling fit loop or result caching, which live under
//!   [`models`](crate::regression::models).
//!
//! Testing notes
//! -------------
//! - Each submodule carries its own unit suite; the fit lifecycle is tested
//!   at the model level.

pub mod data;
pub mod ols;
pub mod options;
pub mod windows;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::data::RegressionData;
pub use self::ols::{fit_window_ols, WindowFit};
pub use self::options::{RollingOptions, DEFAULT_STEPSIZE, DEFAULT_WINDOW};
pub use self::windows::WindowPlan;
