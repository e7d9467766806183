//! Compound profiles and the load-once profile store.
//!
//! A [`CompoundProfile`] holds the nine category sets a compound is annotated
//! with: genes, pathways and molecular functions it activates (`plus`) or
//! inhibits (`minus`), diseases it cures (`plus`) or is associated with
//! (`minus`), and its known side effects. Missing data is always the empty
//! set — profiles carry no null/absent distinction.
//!
//! The [`ProfileStore`] is built once at startup from a JSON snapshot and is
//! read-only afterwards; every scoring operation borrows it immutably.

use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ScoreError, StoreError};

/// The set-valued annotation profile of a single compound.
///
/// `plus` sets hold activating/curative relations, `minus` sets hold
/// inhibiting/causative relations. Side effects have no polarity split.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompoundProfile {
    /// Genes enhanced or activated by the compound.
    #[serde(default)]
    pub gene_plus: BTreeSet<String>,
    /// Genes inhibited or suppressed by the compound.
    #[serde(default)]
    pub gene_minus: BTreeSet<String>,
    /// Gene pathways activated by the compound.
    #[serde(default)]
    pub pathway_plus: BTreeSet<String>,
    /// Gene pathways inhibited by the compound.
    #[serde(default)]
    pub pathway_minus: BTreeSet<String>,
    /// Molecular functions activated by the compound.
    #[serde(default)]
    pub function_plus: BTreeSet<String>,
    /// Molecular functions inhibited by the compound.
    #[serde(default)]
    pub function_minus: BTreeSet<String>,
    /// Diseases cured by the compound.
    #[serde(default)]
    pub disease_plus: BTreeSet<String>,
    /// Diseases associated with the compound.
    #[serde(default)]
    pub disease_minus: BTreeSet<String>,
    /// Side effects associated with the compound.
    #[serde(default)]
    pub side_effect_plus: BTreeSet<String>,
}

/// Immutable store of compound profiles keyed by canonical compound ID.
///
/// Iteration order is ascending by ID, so every operation over the whole
/// store is deterministic.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProfileStore {
    profiles: BTreeMap<String, CompoundProfile>,
}

impl ProfileStore {
    /// Build a store from an iterator of (ID, profile) pairs.
    ///
    /// Duplicate IDs keep the last profile supplied.
    pub fn from_profiles<I, S>(profiles: I) -> Self
    where
        I: IntoIterator<Item = (S, CompoundProfile)>,
        S: Into<String>,
    {
        Self {
            profiles: profiles
                .into_iter()
                .map(|(id, profile)| (id.into(), profile))
                .collect(),
        }
    }

    /// Load a store from a JSON snapshot: an object mapping compound ID to
    /// profile. Category sets absent from the JSON deserialize as empty.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|e| StoreError::Io {
            path: path.display().to_string(),
            source: e,
        })?;
        let store: Self = serde_json::from_str(&raw).map_err(|e| StoreError::Parse {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        tracing::info!(
            compounds = store.len(),
            path = %path.display(),
            "loaded compound profile store"
        );
        Ok(store)
    }

    /// Look up a profile, failing with `CompoundNotFound` if the ID is absent.
    pub fn get(&self, id: &str) -> Result<&CompoundProfile, ScoreError> {
        self.profiles
            .get(id)
            .ok_or_else(|| ScoreError::CompoundNotFound { id: id.to_string() })
    }

    /// Check whether a compound ID is present.
    pub fn contains(&self, id: &str) -> bool {
        self.profiles.contains_key(id)
    }

    /// Iterate over (ID, profile) pairs in ascending ID order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &CompoundProfile)> {
        self.profiles.iter()
    }

    /// Iterate over compound IDs in ascending order.
    pub fn ids(&self) -> impl Iterator<Item = &String> {
        self.profiles.keys()
    }

    /// Number of compounds in the store.
    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    /// Whether the store is empty.
    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}
