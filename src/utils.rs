#[cfg(feature = "python-bindings")]
use ndarray::{Array1, Array2};

#[cfg(feature = "python-bindings")]
use pyo3::{
    exceptions::{PyTypeError, PyValueError},
    prelude::*,
    types::PyAny,
};

#[cfg(feature = "python-bindings")]
use numpy::{
    PyReadonlyArray1, // 1-D readonly views
    PyReadonlyArray2, // 2-D readonly views
};

#[cfg(feature = "python-bindings")]
use crate::regression::core::data::RegressionData;

/// Extract a 1-D `f64` array from a numpy array, pandas Series, or sequence.
///
/// Tries, in order: a numpy `float64` array, the object's `to_numpy()`
/// output, and finally a plain `f64` sequence. The result is always an
/// owned, contiguous `Array1`.
#[cfg(feature = "python-bindings")]
pub fn extract_f64_array(raw_data: &Bound<'_, PyAny>) -> PyResult<Array1<f64>> {
    if let Ok(arr_ro) = raw_data.extract::<PyReadonlyArray1<f64>>() {
        return Ok(arr_ro.as_array().to_owned());
    }

    if let Ok(obj) = raw_data.call_method0("to_numpy") {
        if let Ok(series_ro) = obj.extract::<PyReadonlyArray1<f64>>() {
            return Ok(series_ro.as_array().to_owned());
        }
    }

    let vec: Vec<f64> = raw_data.extract().map_err(|_| {
        PyTypeError::new_err("expected a 1-D numpy.ndarray, pandas.Series, or sequence of float64")
    })?;
    Ok(Array1::from(vec))
}

/// Extract a 1-D `i64` array (the period index) with the same fallback
/// chain as [`extract_f64_array`].
#[cfg(feature = "python-bindings")]
pub fn extract_i64_array(raw_data: &Bound<'_, PyAny>) -> PyResult<Array1<i64>> {
    if let Ok(arr_ro) = raw_data.extract::<PyReadonlyArray1<i64>>() {
        return Ok(arr_ro.as_array().to_owned());
    }

    if let Ok(obj) = raw_data.call_method0("to_numpy") {
        if let Ok(series_ro) = obj.extract::<PyReadonlyArray1<i64>>() {
            return Ok(series_ro.as_array().to_owned());
        }
    }

    let vec: Vec<i64> = raw_data.extract().map_err(|_| {
        PyTypeError::new_err("expected a 1-D numpy.ndarray, pandas.Series, or sequence of int64")
    })?;
    Ok(Array1::from(vec))
}

/// Extract a 2-D `f64` design matrix from a numpy array, pandas DataFrame,
/// or sequence of equal-length rows.
#[cfg(feature = "python-bindings")]
pub fn extract_f64_matrix(raw_data: &Bound<'_, PyAny>) -> PyResult<Array2<f64>> {
    if let Ok(arr_ro) = raw_data.extract::<PyReadonlyArray2<f64>>() {
        return Ok(arr_ro.as_array().to_owned());
    }

    if let Ok(obj) = raw_data.call_method0("to_numpy") {
        if let Ok(frame_ro) = obj.extract::<PyReadonlyArray2<f64>>() {
            return Ok(frame_ro.as_array().to_owned());
        }
    }

    let rows: Vec<Vec<f64>> = raw_data.extract().map_err(|_| {
        PyTypeError::new_err(
            "expected a 2-D numpy.ndarray, pandas.DataFrame, or sequence of float64 rows",
        )
    })?;
    let nrows = rows.len();
    let ncols = rows.first().map_or(0, |row| row.len());
    if rows.iter().any(|row| row.len() != ncols) {
        return Err(PyValueError::new_err("all rows of X must have the same length"));
    }
    let mut out = Array2::<f64>::zeros((nrows, ncols));
    for (i, row) in rows.iter().enumerate() {
        for (j, &value) in row.iter().enumerate() {
            out[[i, j]] = value;
        }
    }
    Ok(out)
}

/// Build a validated [`RegressionData`] from Python-friendly inputs.
///
/// Feature names default to positional labels (`x0`, `x1`, …) when not
/// provided; all core validation errors surface as `ValueError`.
#[cfg(feature = "python-bindings")]
pub fn extract_regression_data<'py>(
    x: &Bound<'py, PyAny>, y: &Bound<'py, PyAny>, t: &Bound<'py, PyAny>,
    feature_names: Option<Vec<String>>,
) -> PyResult<RegressionData> {
    let x_arr = extract_f64_matrix(x)?;
    let y_arr = extract_f64_array(y)?;
    let t_arr = extract_i64_array(t)?;

    let data = match feature_names {
        Some(names) => RegressionData::new(x_arr, y_arr, t_arr, names),
        None => RegressionData::unnamed(x_arr, y_arr, t_arr),
    };
    data.map_err(Into::into)
}

/// Convert a row-major `Array2<f64>` into nested `Vec`s for Python callers.
#[cfg(feature = "python-bindings")]
pub fn matrix_to_rows(matrix: &Array2<f64>) -> Vec<Vec<f64>> {
    matrix.rows().into_iter().map(|row| row.to_vec()).collect()
}
