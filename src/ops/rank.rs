use log::{debug, warn};
use ndarray::{Array1, ArrayView1, ArrayView2, Zip};

use crate::error::{KgeOpsError, Result};

/// Which end of the score range counts as better when ranking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RankOrder {
    /// Higher scores are better (distance-free scoring functions).
    #[default]
    HighIsBetter,
    /// Lower scores are better (distance-based scoring functions).
    LowIsBetter,
}

impl RankOrder {
    pub fn from_low_values(low_values: bool) -> Self {
        if low_values {
            RankOrder::LowIsBetter
        } else {
            RankOrder::HighIsBetter
        }
    }

    /// Whether `score` ties or beats `target` under this order.
    #[inline]
    fn ties_or_beats<T: PartialOrd>(self, score: &T, target: &T) -> bool {
        match self {
            RankOrder::HighIsBetter => score >= target,
            RankOrder::LowIsBetter => score <= target,
        }
    }
}

/// Converts signed true indices (as handed over from Python/torch) into column indices.
///
/// Negative entries are rejected with the first offending row; the upper
/// bound is checked later by [`get_rank`] against the score matrix.
pub fn true_indices_from_i64(idx: &ArrayView1<i64>) -> Result<Array1<usize>> {
    idx.iter()
        .enumerate()
        .map(|(row, &index)| {
            usize::try_from(index).map_err(|_| {
                warn!("get_rank: negative true index {} in row {}", index, row);
                KgeOpsError::NegativeIndex { row, index }
            })
        })
        .collect()
}

/// Counts, for every fact, how many candidates score at least as well as the true one.
///
/// data: scores of shape (n_facts, dimensions).
/// true_idx: column of the true candidate for each fact, shape (n_facts,).
/// low_values: if true the lowest score is the best, else the highest.
///
/// Ties count toward the rank and the true candidate counts itself, so the
/// best rank is 1.
pub fn get_rank<T>(
    data: &ArrayView2<T>,
    true_idx: &ArrayView1<usize>,
    low_values: bool,
) -> Result<Array1<usize>>
where
    T: PartialOrd + Copy + Send + Sync,
{
    get_rank_by(data, true_idx, RankOrder::from_low_values(low_values))
}

/// Same as [`get_rank`] with the ranking direction given as a [`RankOrder`].
///
/// A NaN true score is never tied or beaten, which gives rank 0.
pub fn get_rank_by<T>(
    data: &ArrayView2<T>,
    true_idx: &ArrayView1<usize>,
    order: RankOrder,
) -> Result<Array1<usize>>
where
    T: PartialOrd + Copy + Send + Sync,
{
    let (n_facts, n_candidates) = data.dim();

    if true_idx.len() != n_facts {
        warn!(
            "get_rank: {} score rows but {} true indices",
            n_facts,
            true_idx.len()
        );
        return Err(KgeOpsError::RowMismatch {
            rows: n_facts,
            indices: true_idx.len(),
        });
    }
    if let Some((row, &index)) = true_idx
        .iter()
        .enumerate()
        .find(|(_, index)| **index >= n_candidates)
    {
        warn!(
            "get_rank: true index {} in row {} exceeds {} candidates",
            index, row, n_candidates
        );
        return Err(KgeOpsError::IndexOutOfRange {
            row,
            index,
            columns: n_candidates,
        });
    }
    debug!(
        "get_rank: n_facts={}, candidates={}, order={:?}",
        n_facts, n_candidates, order
    );

    let mut ranks = Array1::<usize>::zeros(n_facts);
    Zip::from(&mut ranks)
        .and(data.rows())
        .and(true_idx)
        .par_for_each(|rank, scores, &t| {
            let target = scores[t];
            *rank = scores
                .iter()
                .filter(|score| order.ties_or_beats(*score, &target))
                .count();
        });

    Ok(ranks)
}
