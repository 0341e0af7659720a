//! split — reproducible sampling for model evaluation.
//!
//! Purpose
//! -------
//! Provide the sampling layer the modeling stack is evaluated with:
//! currently the stratified per-period train/test splitter in
//! [`train_test`] with its dedicated error surface in [`errors`].
//!
//! Key behaviors
//! -------------
//! - [`train_test_split`] holds out a fixed share of every period's rows
//!   under a seeded RNG, so splits are reproducible and no period is ever
//!   emptied out of the training set.
//! - [`train_test_split_default`] applies the original pipeline's 20%
//!   share and seed 1.
//!
//! Conventions
//! -----------
//! - Randomness is confined to this subtree; the regression stack itself is
//!   fully deterministic.

pub mod errors;
pub mod train_test;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::errors::{SplitError, SplitResult};
pub use self::train_test::{
    train_test_split, train_test_split_default, TrainTestSplit, DEFAULT_SEED, DEFAULT_TEST_SHARE,
};
