use log::{debug, warn};
use ndarray::{s, Array1};

use crate::error::{KgeOpsError, Result};

/// Builds a boolean mask of size `length` that is `true` exactly on `[start, end)`.
///
/// `start == end` gives an all-`false` mask. Bounds outside
/// `0 <= start <= end <= length` are rejected instead of wrapped.
pub fn get_mask(length: usize, start: usize, end: usize) -> Result<Array1<bool>> {
    if start > end || end > length {
        warn!("get_mask: rejected range [{}, {}) for length {}", start, end, length);
        return Err(KgeOpsError::MaskRange { length, start, end });
    }
    debug!("get_mask: length={}, range=[{}, {})", length, start, end);

    let mut mask = Array1::from_elem(length, false);
    mask.slice_mut(s![start..end]).fill(true);
    Ok(mask)
}
