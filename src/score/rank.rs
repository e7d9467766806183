//! Ranking a compound against the whole profile store.

use rayon::prelude::*;

use crate::error::ScoreError;
use crate::profile::ProfileStore;

use super::score_profiles;

/// Sentinel score assigned to the self-comparison entry so a compound never
/// ranks as its own best match.
pub const SELF_SCORE: i64 = -100;

/// Score `ref_id` against every compound in the store.
///
/// Returns (compound ID, score) pairs in descending score order; ties keep
/// ascending-ID store order. The self entry is forced to [`SELF_SCORE`] and is
/// never computed through the scorer. Fails with `CompoundNotFound` if
/// `ref_id` has no profile.
///
/// The pairwise computations are independent and run in parallel; the final
/// stable sort restores a deterministic order.
pub fn score_against_all(
    store: &ProfileStore,
    ref_id: &str,
) -> Result<Vec<(String, i64)>, ScoreError> {
    let ref_profile = store.get(ref_id)?;
    tracing::info!(
        compound = ref_id,
        others = store.len().saturating_sub(1),
        "scoring compound against all others"
    );

    let entries: Vec<(&String, _)> = store.iter().collect();
    let mut scores: Vec<(String, i64)> = entries
        .par_iter()
        .map(|&(id, profile)| {
            let score = if id == ref_id {
                SELF_SCORE
            } else {
                score_profiles(ref_profile, profile)
            };
            (id.clone(), score)
        })
        .collect();

    scores.sort_by(|a, b| b.1.cmp(&a.1));
    Ok(scores)
}

/// Take the top `n` entries of a score list, re-sorted descending.
///
/// `n` is clamped to the available count; `n == 0` fails with `InvalidTopN`.
pub fn get_n_best(scores: &[(String, i64)], n: usize) -> Result<Vec<(String, i64)>, ScoreError> {
    if n == 0 {
        return Err(ScoreError::InvalidTopN);
    }
    let mut sorted = scores.to_vec();
    sorted.sort_by(|a, b| b.1.cmp(&a.1));
    sorted.truncate(n);
    Ok(sorted)
}
