//! In-memory entity-relation knowledge graph.
//!
//! Nodes are entity IDs of the form `Type::identifier` (e.g.
//! `Compound::DB00123`, `Gene::5468`); edges carry a relation name. The graph
//! is a directed multigraph: several edges with different relations may
//! connect the same pair of nodes. Built once from a snapshot and treated as
//! read-only afterwards.

pub mod filter;

use std::collections::HashMap;
use std::path::Path;

use petgraph::graph::{DiGraph, NodeIndex};
use serde::{Deserialize, Serialize};

use crate::error::StoreError;

/// The entity type encoded in an ID: the prefix before the `::` separator,
/// or the empty string if the ID carries no prefix.
pub fn entity_kind(id: &str) -> &str {
    id.split_once("::").map(|(kind, _)| kind).unwrap_or("")
}

/// The bare identifier after the `::` separator, or the whole ID without one.
pub fn entity_tail(id: &str) -> &str {
    id.split_once("::").map(|(_, tail)| tail).unwrap_or(id)
}

/// A node in serialized form: ID plus the type derived from it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeRecord {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
}

impl NodeRecord {
    pub fn new(id: impl Into<String>) -> Self {
        let id = id.into();
        let kind = entity_kind(&id).to_string();
        Self { id, kind }
    }
}

/// An edge in serialized form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeRecord {
    pub source: String,
    pub target: String,
    pub relation: String,
}

/// Snapshot format for loading and exporting graphs.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GraphSnapshot {
    #[serde(default)]
    pub nodes: Vec<NodeRecord>,
    #[serde(default)]
    pub edges: Vec<EdgeRecord>,
}

/// Directed multigraph over entity IDs, backed by petgraph.
///
/// Keeps an ID → node-index map for O(1) lookups. Node and edge indices are
/// assigned in insertion order and never reused, which gives every derived
/// ordering a stable, reproducible criterion.
pub struct KnowledgeGraph {
    graph: DiGraph<String, String>,
    node_index: HashMap<String, NodeIndex>,
}

impl KnowledgeGraph {
    /// Create a new empty knowledge graph.
    pub fn new() -> Self {
        Self {
            graph: DiGraph::new(),
            node_index: HashMap::new(),
        }
    }

    /// Ensure a node exists for the given entity ID, returning its index.
    pub fn ensure_node(&mut self, id: &str) -> NodeIndex {
        if let Some(&idx) = self.node_index.get(id) {
            return idx;
        }
        let idx = self.graph.add_node(id.to_string());
        self.node_index.insert(id.to_string(), idx);
        idx
    }

    /// Add an edge, creating endpoint nodes as needed. Parallel edges with
    /// different relations are kept as distinct edges.
    pub fn add_edge(&mut self, source: &str, target: &str, relation: impl Into<String>) {
        let s = self.ensure_node(source);
        let t = self.ensure_node(target);
        self.graph.add_edge(s, t, relation.into());
    }

    /// Build a graph from a snapshot. Isolated nodes in the snapshot are kept.
    pub fn from_snapshot(snapshot: &GraphSnapshot) -> Self {
        let mut kg = Self::new();
        for node in &snapshot.nodes {
            kg.ensure_node(&node.id);
        }
        for edge in &snapshot.edges {
            kg.add_edge(&edge.source, &edge.target, edge.relation.clone());
        }
        kg
    }

    /// Load a graph from a JSON snapshot file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|e| StoreError::Io {
            path: path.display().to_string(),
            source: e,
        })?;
        let snapshot: GraphSnapshot =
            serde_json::from_str(&raw).map_err(|e| StoreError::Parse {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;
        let kg = Self::from_snapshot(&snapshot);
        tracing::info!(
            nodes = kg.node_count(),
            edges = kg.edge_count(),
            path = %path.display(),
            "loaded knowledge graph"
        );
        Ok(kg)
    }

    /// Look up a node index by entity ID.
    pub fn node_by_id(&self, id: &str) -> Option<NodeIndex> {
        self.node_index.get(id).copied()
    }

    /// The entity ID stored at a node index.
    pub fn node_id(&self, idx: NodeIndex) -> Option<&str> {
        self.graph.node_weight(idx).map(String::as_str)
    }

    /// Check if an entity ID has a node.
    pub fn has_node(&self, id: &str) -> bool {
        self.node_index.contains_key(id)
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Number of edges.
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Borrow the underlying petgraph structure.
    pub(crate) fn inner(&self) -> &DiGraph<String, String> {
        &self.graph
    }
}

impl Default for KnowledgeGraph {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for KnowledgeGraph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KnowledgeGraph")
            .field("nodes", &self.node_count())
            .field("edges", &self.edge_count())
            .finish()
    }
}
