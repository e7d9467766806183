//! Engine facade: top-level API for the pharmakon system.
//!
//! The `Engine` loads every snapshot exactly once at construction and owns
//! them read-only for the lifetime of the process. All query operations
//! borrow shared state immutably, so concurrent reads are safe without
//! locking.

use std::path::PathBuf;

use crate::error::{EngineError, PharmResult};
use crate::graph::KnowledgeGraph;
use crate::graph::filter::{Subgraph, filter_graph};
use crate::mapping::EntityNameMap;
use crate::profile::ProfileStore;
use crate::relations::RelationGlossary;
use crate::score;
use crate::score::pairs::ScoredPair;
use crate::score::rank;

/// Snapshot locations for the pharmakon engine.
///
/// The profile snapshot is required; the graph, relation glossary, and name
/// mapping are optional — operations that need a missing snapshot simply see
/// an empty one.
#[derive(Debug, Clone, Default)]
pub struct EngineConfig {
    /// JSON snapshot of compound profiles (required).
    pub profiles: Option<PathBuf>,
    /// JSON snapshot of the knowledge graph.
    pub graph: Option<PathBuf>,
    /// TOML snapshot of the relation glossary.
    pub relations: Option<PathBuf>,
    /// JSON snapshot of the entity name mapping.
    pub names: Option<PathBuf>,
}

/// The pharmakon scoring and subgraph-extraction engine.
///
/// Owns the profile store, knowledge graph, relation glossary, and entity
/// name mapping, all immutable after construction.
pub struct Engine {
    profiles: ProfileStore,
    graph: KnowledgeGraph,
    relations: RelationGlossary,
    names: EntityNameMap,
}

impl Engine {
    /// Create an engine by loading the configured snapshots.
    pub fn new(config: EngineConfig) -> PharmResult<Self> {
        let Some(ref profile_path) = config.profiles else {
            return Err(EngineError::InvalidConfig {
                message: "a compound profile snapshot path is required".into(),
            }
            .into());
        };
        let profiles = ProfileStore::load(profile_path)?;

        let graph = match config.graph {
            Some(ref path) => KnowledgeGraph::load(path)?,
            None => {
                tracing::warn!("no graph snapshot configured, subgraph queries will be empty");
                KnowledgeGraph::new()
            }
        };
        let relations = match config.relations {
            Some(ref path) => RelationGlossary::load(path)?,
            None => RelationGlossary::default(),
        };
        let names = match config.names {
            Some(ref path) => EntityNameMap::load(path)?,
            None => EntityNameMap::default(),
        };

        Ok(Self::from_parts(profiles, graph, relations, names))
    }

    /// Assemble an engine from already-built components.
    pub fn from_parts(
        profiles: ProfileStore,
        graph: KnowledgeGraph,
        relations: RelationGlossary,
        names: EntityNameMap,
    ) -> Self {
        Self { profiles, graph, relations, names }
    }

    /// Compatibility score between two compounds by canonical ID.
    pub fn score_pair(&self, ref_id: &str, cmp_id: &str) -> PharmResult<i64> {
        Ok(score::score_pair(&self.profiles, ref_id, cmp_id)?)
    }

    /// Score a compound against every compound in the store, descending.
    pub fn score_against_all(&self, ref_id: &str) -> PharmResult<Vec<(String, i64)>> {
        Ok(rank::score_against_all(&self.profiles, ref_id)?)
    }

    /// Top `n` matches for a compound.
    pub fn rank(&self, ref_id: &str, n: usize) -> PharmResult<Vec<(String, i64)>> {
        let scores = rank::score_against_all(&self.profiles, ref_id)?;
        Ok(rank::get_n_best(&scores, n)?)
    }

    /// Best-scoring pairs among candidate display names, resolved through
    /// the entity name mapping.
    pub fn find_best_pair(
        &self,
        candidates: &[String],
        top_n: usize,
    ) -> PharmResult<Vec<ScoredPair>> {
        Ok(score::pairs::find_best_pair(
            &self.profiles,
            candidates,
            self.names.resolver(),
            top_n,
        )?)
    }

    /// Extract the relation-filtered neighborhood subgraph around the given
    /// targets (display names or canonical IDs).
    ///
    /// The relation allow-list is chosen by target cardinality; only one- and
    /// two-target queries are supported.
    pub fn neighborhood(&self, targets: &[String]) -> PharmResult<Subgraph> {
        let target_ids: Vec<String> = targets.iter().map(|t| self.resolve_target(t)).collect();
        let allowed = self.relations.allow_list(target_ids.len())?;
        Ok(filter_graph(&self.graph, &target_ids, allowed))
    }

    /// Resolve a target to a canonical entity ID: display names go through
    /// the name mapping, anything else is taken as an ID verbatim.
    fn resolve_target(&self, target: &str) -> String {
        match self.names.id_of(target) {
            Some(id) => id.to_string(),
            None => target.to_string(),
        }
    }

    /// The profile store handle.
    pub fn profiles(&self) -> &ProfileStore {
        &self.profiles
    }

    /// The knowledge graph handle.
    pub fn graph(&self) -> &KnowledgeGraph {
        &self.graph
    }

    /// The entity name mapping handle.
    pub fn names(&self) -> &EntityNameMap {
        &self.names
    }

    /// Summary statistics over the loaded snapshots.
    pub fn info(&self) -> EngineInfo {
        EngineInfo {
            compounds: self.profiles.len(),
            graph_nodes: self.graph.node_count(),
            graph_edges: self.graph.edge_count(),
            mapped_entities: self.names.len(),
            one_target_relations: self.relations.one_target.len(),
            two_target_relations: self.relations.two_targets.len(),
        }
    }
}

impl std::fmt::Debug for Engine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Engine")
            .field("profiles", &self.profiles.len())
            .field("graph", &self.graph)
            .field("mapped_entities", &self.names.len())
            .finish()
    }
}

/// Summary information about the engine state.
#[derive(Debug, Clone)]
pub struct EngineInfo {
    pub compounds: usize,
    pub graph_nodes: usize,
    pub graph_edges: usize,
    pub mapped_entities: usize,
    pub one_target_relations: usize,
    pub two_target_relations: usize,
}

impl std::fmt::Display for EngineInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "pharmakon engine info")?;
        writeln!(f, "  compounds:            {}", self.compounds)?;
        writeln!(f, "  graph nodes:          {}", self.graph_nodes)?;
        writeln!(f, "  graph edges:          {}", self.graph_edges)?;
        writeln!(f, "  mapped entities:      {}", self.mapped_entities)?;
        writeln!(f, "  1-target relations:   {}", self.one_target_relations)?;
        writeln!(f, "  2-target relations:   {}", self.two_target_relations)?;
        Ok(())
    }
}
