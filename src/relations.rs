//! Curated relation allow-lists, keyed by query target cardinality.
//!
//! The glossary is maintained externally by domain experts; a TOML export of
//! it is loaded once at startup. One-target and two-target queries use
//! different allow-lists because the meaningful relations differ (e.g.
//! compound-compound relations only matter when comparing two compounds).

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{GraphError, StoreError};

/// Relation allow-lists for one- and two-target neighborhood queries.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RelationGlossary {
    /// Relations meaningful when querying around a single compound.
    #[serde(default)]
    pub one_target: HashSet<String>,
    /// Relations meaningful when comparing two compounds.
    #[serde(default)]
    pub two_targets: HashSet<String>,
}

impl RelationGlossary {
    /// Load a glossary from a TOML snapshot file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|e| StoreError::Io {
            path: path.display().to_string(),
            source: e,
        })?;
        let glossary: Self = toml::from_str(&raw).map_err(|e| StoreError::Parse {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        tracing::info!(
            one_target = glossary.one_target.len(),
            two_targets = glossary.two_targets.len(),
            path = %path.display(),
            "loaded relation glossary"
        );
        Ok(glossary)
    }

    /// The allow-list for a query with `target_count` target compounds.
    ///
    /// Only one- and two-target queries are curated; anything else fails.
    pub fn allow_list(&self, target_count: usize) -> Result<&HashSet<String>, GraphError> {
        match target_count {
            1 => Ok(&self.one_target),
            2 => Ok(&self.two_targets),
            count => Err(GraphError::UnsupportedTargetCount { count }),
        }
    }
}
