use numpy::{IntoPyArray, PyArray1, PyArray3, PyReadonlyArray1, PyReadonlyArray2, PyReadonlyArrayDyn};
use pyo3::prelude::*;

use crate::ops::{mask, rank, rolling};

#[pyfunction]
pub fn get_mask<'py>(
    py: Python<'py>,
    length: usize,
    start: usize,
    end: usize,
) -> PyResult<&'py PyArray1<bool>> {
    let result = mask::get_mask(length, start, end)?;
    Ok(result.into_pyarray(py))
}

#[pyfunction]
#[pyo3(signature = (data, true_idx, low_values = false))]
pub fn get_rank<'py>(
    py: Python<'py>,
    data: PyReadonlyArray2<f32>,
    true_idx: PyReadonlyArray1<i64>,
    low_values: bool,
) -> PyResult<&'py PyArray1<i64>> {
    let data_arr = data.as_array();
    let true_arr = rank::true_indices_from_i64(&true_idx.as_array())?;

    let ranks = rank::get_rank(&data_arr, &true_arr.view(), low_values)?;
    Ok(ranks.mapv(|r| r as i64).into_pyarray(py))
}

#[pyfunction]
pub fn get_rolling_matrix<'py>(
    py: Python<'py>,
    x: PyReadonlyArrayDyn<f32>,
) -> PyResult<&'py PyArray3<f32>> {
    let x_arr = x.as_array();
    let result = rolling::get_rolling_matrix_dyn(&x_arr)?;
    Ok(result.into_pyarray(py))
}

pub fn register(m: &PyModule) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(get_mask, m)?)?;
    m.add_function(wrap_pyfunction!(get_rank, m)?)?;
    m.add_function(wrap_pyfunction!(get_rolling_matrix, m)?)?;
    Ok(())
}
