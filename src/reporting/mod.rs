//! reporting — presentation-ready reductions of fitted models.
//!
//! Purpose
//! -------
//! Turn fit output into the structures consumers plot or tabulate.
//! Currently this is the coefficient-path extraction in [`coefficients`];
//! actual rendering stays with the caller.

pub mod coefficients;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::coefficients::{
    coefficient_paths, CoefficientPath, CoefficientPoint, SIGNIFICANCE_LEVEL,
};
