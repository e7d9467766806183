//! Combination search: find the best-scoring pair among candidate compounds.

use rayon::prelude::*;
use serde::Serialize;

use crate::error::ScoreError;
use crate::profile::ProfileStore;

use super::score_pair;

/// A scored candidate pair, carrying both the display names the caller
/// supplied and the canonical compound IDs they resolved to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoredPair {
    pub score: i64,
    pub name_a: String,
    pub name_b: String,
    pub id_a: String,
    pub id_b: String,
}

/// Score every unordered pair of candidate names and return the top `top_n`.
///
/// Names are resolved to compound IDs through the caller-supplied `resolve`
/// function; a pair with an unresolvable name is skipped (logged, not fatal).
/// A resolved ID that is missing from the store is a real error. Fewer than
/// two candidates yields an empty result.
///
/// Pairs are enumerated in standard combinatorial order over the input, and
/// the descending sort is stable, so equal scores keep enumeration order.
pub fn find_best_pair<F>(
    store: &ProfileStore,
    candidates: &[String],
    resolve: F,
    top_n: usize,
) -> Result<Vec<ScoredPair>, ScoreError>
where
    F: Fn(&str) -> Option<String>,
{
    if candidates.len() < 2 {
        tracing::warn!(
            candidates = candidates.len(),
            "need at least 2 candidates to find pairs"
        );
        return Ok(Vec::new());
    }
    tracing::info!(candidates = candidates.len(), "finding best pair(s)");

    // Resolve sequentially so skip logging follows enumeration order.
    let mut resolved: Vec<(&str, &str, String, String)> = Vec::new();
    for (i, name_a) in candidates.iter().enumerate() {
        for name_b in &candidates[i + 1..] {
            let (Some(id_a), Some(id_b)) = (resolve(name_a), resolve(name_b)) else {
                tracing::debug!(
                    name_a = %name_a,
                    name_b = %name_b,
                    "skipping pair: name resolution failed"
                );
                continue;
            };
            resolved.push((name_a.as_str(), name_b.as_str(), id_a, id_b));
        }
    }

    let mut pairs: Vec<ScoredPair> = resolved
        .par_iter()
        .map(|(name_a, name_b, id_a, id_b)| {
            let score = score_pair(store, id_a, id_b)?;
            Ok(ScoredPair {
                score,
                name_a: name_a.to_string(),
                name_b: name_b.to_string(),
                id_a: id_a.clone(),
                id_b: id_b.clone(),
            })
        })
        .collect::<Result<_, ScoreError>>()?;

    if pairs.is_empty() {
        tracing::warn!("no valid pairs found");
        return Ok(Vec::new());
    }

    pairs.sort_by(|a, b| b.score.cmp(&a.score));
    pairs.truncate(top_n);
    if let Some(best) = pairs.first() {
        tracing::info!(
            name_a = %best.name_a,
            name_b = %best.name_b,
            score = best.score,
            "best pair found"
        );
    }
    Ok(pairs)
}
