//! Array helpers for knowledge graph embedding: range masks, link-prediction
//! ranks and rolling (circulant) matrices over `ndarray`.
//!
//! Enable the `python` feature to build the `_rust` extension module.

pub mod error;
pub mod ops;

#[cfg(feature = "python")]
pub mod bindings;

pub use error::{KgeOpsError, Result};
pub use ops::{
    get_mask, get_rank, get_rank_by, get_rolling_matrix, get_rolling_matrix_dyn, rolled_index,
    true_indices_from_i64, RankOrder,
};
