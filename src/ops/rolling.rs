use log::{debug, warn};
use ndarray::{Array3, ArrayView2, ArrayViewD, Axis, Ix2};
use num_integer::Integer;
use num_traits::Zero;
use rayon::prelude::*;

use crate::error::{KgeOpsError, Result};

/// Column of the base vector that lands at `(i, j)` of a rolling matrix: `(j - i) mod dim`.
/// Returns `None` when `dim == 0`, where no column exists.
pub fn rolled_index(i: usize, j: usize, dim: usize) -> Option<usize> {
    if dim == 0 {
        return None;
    }
    Some(wrap_column(i, j, dim))
}

// dim > 0
#[inline]
fn wrap_column(i: usize, j: usize, dim: usize) -> usize {
    (j as isize - i as isize).mod_floor(&(dim as isize)) as usize
}

/// Builds a rolling (circulant) matrix for each vector of the batch.
/// x: A 2D array of shape (b_size, dim).
/// Returns a 3D array of shape (b_size, dim, dim) with `mat[b, i, j] = x[b, (j - i) mod dim]`,
/// i.e. row `i` of each matrix is `x[b]` rolled right by `i`.
pub fn get_rolling_matrix<T>(x: &ArrayView2<T>) -> Array3<T>
where
    T: Clone + Zero + Send + Sync,
{
    let (b_size, dim) = x.dim();
    debug!("get_rolling_matrix: b_size={}, dim={}", b_size, dim);

    let mut mat = Array3::zeros((b_size, dim, dim));

    mat.axis_iter_mut(Axis(0))
        .into_par_iter()
        .enumerate()
        .for_each(|(b, mut block)| {
            let base = x.row(b);
            for ((i, j), value) in block.indexed_iter_mut() {
                *value = base[wrap_column(i, j, dim)].clone();
            }
        });

    mat
}

/// Rank-checked entry point for callers holding an array of unknown dimensionality.
pub fn get_rolling_matrix_dyn<T>(x: &ArrayViewD<T>) -> Result<Array3<T>>
where
    T: Clone + Zero + Send + Sync,
{
    let x2 = x.view().into_dimensionality::<Ix2>().map_err(|_| {
        warn!("get_rolling_matrix: rejected input of shape {:?}", x.shape());
        KgeOpsError::InvalidRank { ndim: x.ndim() }
    })?;
    Ok(get_rolling_matrix(&x2))
}
