//! Pairwise compound compatibility scoring.
//!
//! The total score for a pair of compounds is the sum of four integer
//! sub-scores computed from their annotation profiles: genes, pathways and
//! molecular functions, diseases, and side effects. Scores carry no
//! normalization — magnitude scales with profile cardinality, so they are only
//! meaningful in relative (ranked) comparison.

pub mod pairs;
pub mod rank;

use std::collections::BTreeSet;

use crate::error::ScoreError;
use crate::profile::{CompoundProfile, ProfileStore};

/// Number of shared elements between two sets, as a signed score term.
fn overlap(a: &BTreeSet<String>, b: &BTreeSet<String>) -> i64 {
    a.intersection(b).count() as i64
}

/// Compare gene interactions between two compounds.
///
/// Agreement on a gene (both activate, or both inhibit) scores +2;
/// a conflict (one activates what the other inhibits) scores -2.
pub fn gene_score(r: &CompoundProfile, c: &CompoundProfile) -> i64 {
    2 * overlap(&r.gene_plus, &c.gene_plus) + 2 * overlap(&r.gene_minus, &c.gene_minus)
        - 2 * overlap(&r.gene_plus, &c.gene_minus)
        - 2 * overlap(&r.gene_minus, &c.gene_plus)
}

/// Compare pathway and molecular-function interactions between two compounds.
///
/// Same shape as [`gene_score`] but with unit weight: pathway and function
/// agreement counts half as much as direct gene agreement.
pub fn pathway_function_score(r: &CompoundProfile, c: &CompoundProfile) -> i64 {
    let categories = [
        (&r.pathway_plus, &r.pathway_minus, &c.pathway_plus, &c.pathway_minus),
        (&r.function_plus, &r.function_minus, &c.function_plus, &c.function_minus),
    ];
    categories
        .iter()
        .map(|(rp, rm, cp, cm)| {
            overlap(rp, cp) + overlap(rm, cm) - overlap(rp, cm) - overlap(rm, cp)
        })
        .sum()
}

/// Compare disease annotations between two compounds.
///
/// A compound may cure a disease (`plus`) or be associated with it (`minus`).
/// Shared cures score +2, shared associations -2, and each compound is
/// separately rewarded per cured disease and penalized per associated disease.
/// The cross terms carry a positive sign, unlike [`gene_score`]: one compound
/// curing a disease the other merely causes is treated as partial synergy.
pub fn disease_score(r: &CompoundProfile, c: &CompoundProfile) -> i64 {
    2 * overlap(&r.disease_plus, &c.disease_plus)
        - 2 * overlap(&r.disease_minus, &c.disease_minus)
        + overlap(&r.disease_plus, &c.disease_minus)
        + overlap(&r.disease_minus, &c.disease_plus)
        + r.disease_plus.len() as i64
        + c.disease_plus.len() as i64
        - r.disease_minus.len() as i64
        - c.disease_minus.len() as i64
}

/// Compare side effects between two compounds.
///
/// Every side effect is penalized, shared side effects doubly so.
pub fn side_effect_score(r: &CompoundProfile, c: &CompoundProfile) -> i64 {
    -(r.side_effect_plus.len() as i64)
        - c.side_effect_plus.len() as i64
        - 2 * overlap(&r.side_effect_plus, &c.side_effect_plus)
}

/// Total compatibility score between two profiles.
pub fn score_profiles(r: &CompoundProfile, c: &CompoundProfile) -> i64 {
    gene_score(r, c) + pathway_function_score(r, c) + disease_score(r, c) + side_effect_score(r, c)
}

/// Total compatibility score between two compounds looked up by ID.
///
/// Fails with `CompoundNotFound` if either ID is absent from the store.
pub fn score_pair(store: &ProfileStore, ref_id: &str, cmp_id: &str) -> Result<i64, ScoreError> {
    let r = store.get(ref_id)?;
    let c = store.get(cmp_id)?;
    Ok(score_profiles(r, c))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(items: &[&str]) -> BTreeSet<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn empty() -> CompoundProfile {
        CompoundProfile::default()
    }

    #[test]
    fn gene_agreement_and_conflict() {
        let a = CompoundProfile {
            gene_plus: set(&["g1", "g2"]),
            gene_minus: set(&["g3"]),
            ..empty()
        };
        let b = CompoundProfile {
            gene_plus: set(&["g1", "g3"]),
            gene_minus: set(&["g2"]),
            ..empty()
        };
        // g1 plus-plus (+2), g2 plus-minus (-2), g3 minus-plus (-2)
        assert_eq!(gene_score(&a, &b), -2);
    }

    #[test]
    fn pathway_function_unit_weight() {
        let a = CompoundProfile {
            pathway_plus: set(&["p1"]),
            function_plus: set(&["f1"]),
            ..empty()
        };
        let b = CompoundProfile {
            pathway_plus: set(&["p1"]),
            function_plus: set(&["f1"]),
            ..empty()
        };
        assert_eq!(pathway_function_score(&a, &b), 2);

        // The same overlap on genes would score 2 per shared element.
        let ga = CompoundProfile { gene_plus: set(&["g1"]), ..empty() };
        let gb = CompoundProfile { gene_plus: set(&["g1"]), ..empty() };
        assert_eq!(gene_score(&ga, &gb), 2);
    }

    #[test]
    fn disease_cross_terms_are_positive() {
        let a = CompoundProfile { disease_plus: set(&["d1"]), ..empty() };
        let b = CompoundProfile { disease_minus: set(&["d1"]), ..empty() };
        // cross term +1, |rp| bonus +1, |pm| penalty -1
        assert_eq!(disease_score(&a, &b), 1);
    }

    #[test]
    fn shared_cured_disease_adds_exactly_two_over_baseline() {
        let a = CompoundProfile { disease_plus: set(&["d1"]), ..empty() };
        let b = CompoundProfile { disease_plus: set(&["d1"]), ..empty() };
        let a2 = CompoundProfile { disease_plus: set(&["d1", "d2"]), ..empty() };
        let b2 = CompoundProfile { disease_plus: set(&["d1", "d2"]), ..empty() };
        // One extra shared cured disease: +2 shared-cure term and +1 cardinality
        // bonus on each side.
        assert_eq!(
            disease_score(&a2, &b2) - disease_score(&a, &b),
            2 + 1 + 1
        );
        // Isolating the shared-cure term: subtract the cardinality bonuses that
        // an unshared extra disease on each side would also have earned.
        let a3 = CompoundProfile { disease_plus: set(&["d1", "d2"]), ..empty() };
        let b3 = CompoundProfile { disease_plus: set(&["d1", "d3"]), ..empty() };
        assert_eq!(disease_score(&a2, &b2) - disease_score(&a3, &b3), 2);
    }

    #[test]
    fn side_effects_penalize_shared_twice() {
        let a = CompoundProfile { side_effect_plus: set(&["s1", "s2"]), ..empty() };
        let b = CompoundProfile { side_effect_plus: set(&["s1"]), ..empty() };
        // -2 for a's effects, -1 for b's, -2 for the shared s1
        assert_eq!(side_effect_score(&a, &b), -5);
    }

    #[test]
    fn all_sub_scores_are_symmetric() {
        let a = CompoundProfile {
            gene_plus: set(&["g1", "g2"]),
            gene_minus: set(&["g3"]),
            pathway_plus: set(&["p1"]),
            function_minus: set(&["f1"]),
            disease_plus: set(&["d1", "d2"]),
            disease_minus: set(&["d3"]),
            side_effect_plus: set(&["s1"]),
            ..empty()
        };
        let b = CompoundProfile {
            gene_plus: set(&["g3"]),
            gene_minus: set(&["g1"]),
            pathway_plus: set(&["p1", "p2"]),
            function_minus: set(&["f1", "f2"]),
            disease_plus: set(&["d3"]),
            disease_minus: set(&["d1"]),
            side_effect_plus: set(&["s1", "s2"]),
            ..empty()
        };
        assert_eq!(gene_score(&a, &b), gene_score(&b, &a));
        assert_eq!(pathway_function_score(&a, &b), pathway_function_score(&b, &a));
        assert_eq!(disease_score(&a, &b), disease_score(&b, &a));
        assert_eq!(side_effect_score(&a, &b), side_effect_score(&b, &a));
        assert_eq!(score_profiles(&a, &b), score_profiles(&b, &a));
    }

    #[test]
    fn score_pair_unknown_id_fails() {
        let store = ProfileStore::from_profiles([("Compound::DB00001", empty())]);
        let err = score_pair(&store, "Compound::DB00001", "Compound::DB99999").unwrap_err();
        assert!(matches!(err, ScoreError::CompoundNotFound { .. }));
    }

    #[test]
    fn empty_profiles_score_zero() {
        let store = ProfileStore::from_profiles([
            ("Compound::DB00001", empty()),
            ("Compound::DB00002", empty()),
        ]);
        assert_eq!(
            score_pair(&store, "Compound::DB00001", "Compound::DB00002").unwrap(),
            0
        );
    }
}
