//! Entity ID ↔ display name mapping.
//!
//! The mapping is assembled from several vocabularies (DrugBank, MeSH, DOID,
//! HGNC, SIDER) by the external ingestion pipeline and merged here with an
//! explicit, documented precedence: sources are applied in order and the last
//! applied source wins on key collision. Name lookups are case-insensitive
//! but otherwise exact.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{MappingError, StoreError};

/// Bidirectional entity ID ↔ display name mapping.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(from = "BTreeMap<String, String>", into = "BTreeMap<String, String>")]
pub struct EntityNameMap {
    id_to_name: BTreeMap<String, String>,
    /// Lowercased name → ID, derived from `id_to_name` under the same
    /// last-wins precedence. Rebuilt on deserialization, never stored.
    name_to_id: BTreeMap<String, String>,
}

impl EntityNameMap {
    /// Build a mapping from ordered sources. Sources are applied first to
    /// last; on key collision the last-applied source wins.
    pub fn from_sources<I>(sources: I) -> Self
    where
        I: IntoIterator<Item = BTreeMap<String, String>>,
    {
        let mut id_to_name = BTreeMap::new();
        for source in sources {
            id_to_name.extend(source);
        }
        Self::from_id_to_name(id_to_name)
    }

    fn from_id_to_name(id_to_name: BTreeMap<String, String>) -> Self {
        let mut name_to_id = BTreeMap::new();
        for (id, name) in &id_to_name {
            // Ascending-ID iteration makes the reverse direction
            // deterministic too: the greatest ID wins a shared name.
            name_to_id.insert(name.to_lowercase(), id.clone());
        }
        Self { id_to_name, name_to_id }
    }

    /// Load a mapping from a JSON snapshot: an object of ID → name.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|e| StoreError::Io {
            path: path.display().to_string(),
            source: e,
        })?;
        let map: Self = serde_json::from_str(&raw).map_err(|e| StoreError::Parse {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        tracing::info!(entities = map.len(), path = %path.display(), "loaded entity name mapping");
        Ok(map)
    }

    /// The display name for an entity ID.
    pub fn name_of(&self, id: &str) -> Option<&str> {
        self.id_to_name.get(id).map(String::as_str)
    }

    /// The entity ID for a display name (case-insensitive exact match).
    pub fn id_of(&self, name: &str) -> Option<&str> {
        self.name_to_id.get(&name.to_lowercase()).map(String::as_str)
    }

    /// Like [`id_of`](Self::id_of) but failing with a typed error.
    pub fn resolve(&self, name: &str) -> Result<&str, MappingError> {
        self.id_of(name)
            .ok_or_else(|| MappingError::NameNotFound { name: name.to_string() })
    }

    /// A name → ID resolver closure, as consumed by combination search.
    pub fn resolver(&self) -> impl Fn(&str) -> Option<String> + '_ {
        move |name| self.id_of(name).map(str::to_string)
    }

    /// Number of mapped entities.
    pub fn len(&self) -> usize {
        self.id_to_name.len()
    }

    /// Whether the mapping is empty.
    pub fn is_empty(&self) -> bool {
        self.id_to_name.is_empty()
    }
}

impl From<BTreeMap<String, String>> for EntityNameMap {
    fn from(id_to_name: BTreeMap<String, String>) -> Self {
        Self::from_id_to_name(id_to_name)
    }
}

impl From<EntityNameMap> for BTreeMap<String, String> {
    fn from(map: EntityNameMap) -> Self {
        map.id_to_name
    }
}
