//! Error types for the sampling layer.
//!
//! Purpose
//! -------
//! Define the error surface of the train/test splitter. The splitter
//! consumes already-validated datasets, so its own failure modes reduce to
//! configuration problems.
//!
//! Conventions
//! -----------
//! - Messages are phrased in terms of domain constraints ("test_share must
//!   lie strictly between 0 and 1") rather than implementation details.
//! - With the `python-bindings` feature enabled, every [`SplitError`] maps
//!   to a Python `ValueError` with the `Display` message preserved
//!   verbatim.
//!
//! Testing notes
//! -------------
//! - Unit tests verify payload embedding in the `Display` output.

use std::{error::Error, fmt};

#[cfg(feature = "python-bindings")]
use pyo3::{exceptions::PyValueError, PyErr};

/// Result alias for splitter operations.
pub type SplitResult<T> = Result<T, SplitError>;

/// `SplitError` — failure modes of the train/test splitter.
///
/// Variants
/// --------
/// - `InvalidTestShare { value }`
///   The requested test share does not lie strictly between 0 and 1 (NaN
///   included).
#[derive(Debug, Clone, PartialEq)]
pub enum SplitError {
    /// Requested test share outside the open interval (0, 1).
    InvalidTestShare { value: f64 },
}

impl fmt::Display for SplitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SplitError::InvalidTestShare { value } => write!(
                f,
                "invalid test share {value}: test_share must lie strictly between 0 and 1"
            ),
        }
    }
}

impl Error for SplitError {}

#[cfg(feature = "python-bindings")]
impl From<SplitError> for PyErr {
    fn from(err: SplitError) -> PyErr {
        PyValueError::new_err(err.to_string())
    }
}
