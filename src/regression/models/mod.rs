//! models — user-facing rolling regression models.
//!
//! Purpose
//! -------
//! Expose the model layer built on top of
//! [`core`](crate::regression::core): currently the sliding-window OLS
//! engine [`RollingRegression`] and its immutable fit output [`RollingFit`].
//!
//! Conventions
//! -----------
//! - Models own their data and cache fit results internally; fit outputs are
//!   immutable values that can outlive the model that produced them.

pub mod rolling;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::rolling::{RollingFit, RollingRegression};
