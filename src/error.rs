use thiserror::Error;

/// Input violations rejected by the array operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KgeOpsError {
    /// Mask bounds outside `0 <= start <= end <= length`
    #[error("mask range [{start}, {end}) is out of bounds for length {length}")]
    MaskRange {
        length: usize,
        start: usize,
        end: usize,
    },

    /// Score rows and true indices disagree in count
    #[error("score matrix has {rows} rows but {indices} true indices were given")]
    RowMismatch { rows: usize, indices: usize },

    /// True index past the last candidate column
    #[error("true index {index} in row {row} is out of range for {columns} columns")]
    IndexOutOfRange {
        row: usize,
        index: usize,
        columns: usize,
    },

    /// Signed true index below zero
    #[error("true index {index} in row {row} is negative")]
    NegativeIndex { row: usize, index: i64 },

    /// Input that must be a (batch, dim) matrix had another rank
    #[error("expected a 2-dimensional input, got {ndim} dimension(s)")]
    InvalidRank { ndim: usize },
}

pub type Result<T> = std::result::Result<T, KgeOpsError>;

#[cfg(feature = "python")]
impl From<KgeOpsError> for pyo3::PyErr {
    fn from(err: KgeOpsError) -> Self {
        use pyo3::exceptions::{PyIndexError, PyValueError};
        match err {
            KgeOpsError::MaskRange { .. }
            | KgeOpsError::IndexOutOfRange { .. }
            | KgeOpsError::NegativeIndex { .. } => PyIndexError::new_err(err.to_string()),
            KgeOpsError::RowMismatch { .. } | KgeOpsError::InvalidRank { .. } => {
                PyValueError::new_err(err.to_string())
            }
        }
    }
}
