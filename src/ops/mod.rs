pub mod mask;
pub mod rank;
pub mod rolling;

#[cfg(test)]
mod tests;

pub use self::mask::get_mask;
pub use self::rank::{get_rank, get_rank_by, true_indices_from_i64, RankOrder};
pub use self::rolling::{get_rolling_matrix, get_rolling_matrix_dyn, rolled_index};
