//! Relation-filtered neighborhood subgraph extraction.
//!
//! Given target entity IDs and a curated relation allow-list, restrict the
//! graph to allowed edges, expand the targets by one hop of undirected
//! adjacency over those edges, and return the vertex-induced subgraph.

use std::collections::{BTreeSet, HashSet};

use petgraph::visit::EdgeRef;
use serde::Serialize;

use super::{EdgeRecord, KnowledgeGraph, NodeRecord};

/// A node-induced restriction of a knowledge graph, in serialized form ready
/// for downstream visualization. Produced per query, never mutated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Subgraph {
    pub nodes: Vec<NodeRecord>,
    pub edges: Vec<EdgeRecord>,
}

impl Subgraph {
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

/// Extract the neighborhood subgraph around `target_ids`, following only
/// edges whose relation is in `allowed_relations`.
///
/// The edge restriction is edge-induced: nodes isolated by it still count as
/// potential targets. Targets absent from the graph are ignored. An empty
/// target set yields an empty subgraph without any expansion. Result nodes
/// are ordered by ascending original node index and result edges by ascending
/// original edge index, so repeated queries yield identical output.
pub fn filter_graph(
    kg: &KnowledgeGraph,
    target_ids: &[String],
    allowed_relations: &HashSet<String>,
) -> Subgraph {
    let graph = kg.inner();

    // Step 1: restrict to edges whose relation is allowed.
    let filtered_edges: Vec<_> = graph
        .edge_references()
        .filter(|e| allowed_relations.contains(e.weight().as_str()))
        .collect();

    // Step 2: resolve targets to node indices.
    let targets: BTreeSet<_> = target_ids
        .iter()
        .filter_map(|id| kg.node_by_id(id))
        .collect();
    if targets.is_empty() {
        tracing::debug!("no targets resolved in graph, returning empty subgraph");
        return Subgraph::default();
    }

    // Step 3: one-hop undirected expansion over the filtered edges.
    let mut vertices = targets.clone();
    for edge in &filtered_edges {
        if targets.contains(&edge.source()) {
            vertices.insert(edge.target());
        }
        if targets.contains(&edge.target()) {
            vertices.insert(edge.source());
        }
    }

    // Step 4: induce over the vertex set. BTreeSet iteration gives ascending
    // node-index order.
    let nodes = vertices
        .iter()
        .filter_map(|&idx| kg.node_id(idx))
        .map(NodeRecord::new)
        .collect();
    let edges = filtered_edges
        .iter()
        .filter(|e| vertices.contains(&e.source()) && vertices.contains(&e.target()))
        .filter_map(|e| {
            Some(EdgeRecord {
                source: kg.node_id(e.source())?.to_string(),
                target: kg.node_id(e.target())?.to_string(),
                relation: e.weight().clone(),
            })
        })
        .collect();

    let subgraph = Subgraph { nodes, edges };
    tracing::info!(
        targets = targets.len(),
        nodes = subgraph.node_count(),
        edges = subgraph.edge_count(),
        "extracted neighborhood subgraph"
    );
    subgraph
}

#[cfg(test)]
mod tests {
    use super::*;

    fn relations(items: &[&str]) -> HashSet<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn ids(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn sample_graph() -> KnowledgeGraph {
        let mut kg = KnowledgeGraph::new();
        kg.add_edge("Compound::A", "Gene::X", "activates");
        kg.add_edge("Compound::B", "Gene::X", "inhibits");
        kg
    }

    #[test]
    fn relation_filter_excludes_other_relations() {
        let kg = sample_graph();
        let sub = filter_graph(&kg, &ids(&["Compound::A"]), &relations(&["activates"]));

        let node_ids: Vec<_> = sub.nodes.iter().map(|n| n.id.as_str()).collect();
        assert_eq!(node_ids, vec!["Compound::A", "Gene::X"]);
        assert_eq!(sub.edges.len(), 1);
        assert_eq!(sub.edges[0].source, "Compound::A");
        assert_eq!(sub.edges[0].relation, "activates");
    }

    #[test]
    fn node_records_carry_derived_type() {
        let kg = sample_graph();
        let sub = filter_graph(&kg, &ids(&["Compound::A"]), &relations(&["activates"]));
        assert_eq!(sub.nodes[0].kind, "Compound");
        assert_eq!(sub.nodes[1].kind, "Gene");
    }

    #[test]
    fn empty_targets_yield_empty_subgraph() {
        let kg = sample_graph();
        let sub = filter_graph(&kg, &[], &relations(&["activates", "inhibits"]));
        assert!(sub.is_empty());
        assert_eq!(sub.edge_count(), 0);
    }

    #[test]
    fn no_matching_relations_keeps_targets_only() {
        let kg = sample_graph();
        let sub = filter_graph(&kg, &ids(&["Compound::A"]), &relations(&["treats"]));
        assert_eq!(sub.node_count(), 1);
        assert_eq!(sub.nodes[0].id, "Compound::A");
        assert_eq!(sub.edge_count(), 0);
    }

    #[test]
    fn expansion_is_undirected() {
        // Gene::X points *at* the target; it must still be pulled in.
        let mut kg = KnowledgeGraph::new();
        kg.add_edge("Gene::X", "Compound::A", "targets");
        let sub = filter_graph(&kg, &ids(&["Compound::A"]), &relations(&["targets"]));
        let node_ids: Vec<_> = sub.nodes.iter().map(|n| n.id.as_str()).collect();
        assert_eq!(node_ids, vec!["Gene::X", "Compound::A"]);
        assert_eq!(sub.edge_count(), 1);
    }

    #[test]
    fn expansion_is_exactly_one_hop() {
        let mut kg = KnowledgeGraph::new();
        kg.add_edge("Compound::A", "Gene::X", "activates");
        kg.add_edge("Gene::X", "Pathway::P", "participates");
        let sub = filter_graph(
            &kg,
            &ids(&["Compound::A"]),
            &relations(&["activates", "participates"]),
        );
        // Pathway::P is two hops out and must not appear; neither does the
        // Gene::X -> Pathway::P edge, whose far endpoint is outside.
        let node_ids: Vec<_> = sub.nodes.iter().map(|n| n.id.as_str()).collect();
        assert_eq!(node_ids, vec!["Compound::A", "Gene::X"]);
        assert_eq!(sub.edge_count(), 1);
    }

    #[test]
    fn edges_between_two_targets_are_kept() {
        let mut kg = KnowledgeGraph::new();
        kg.add_edge("Compound::A", "Compound::B", "resembles");
        kg.add_edge("Compound::A", "Gene::X", "activates");
        let sub = filter_graph(
            &kg,
            &ids(&["Compound::A", "Compound::B"]),
            &relations(&["resembles"]),
        );
        assert_eq!(sub.edge_count(), 1);
        assert_eq!(sub.edges[0].relation, "resembles");
        // Gene::X is unreachable through allowed relations.
        assert!(sub.nodes.iter().all(|n| n.id != "Gene::X"));
    }

    #[test]
    fn unknown_targets_are_ignored() {
        let kg = sample_graph();
        let sub = filter_graph(
            &kg,
            &ids(&["Compound::MISSING", "Compound::A"]),
            &relations(&["activates"]),
        );
        assert_eq!(sub.node_count(), 2);
    }

    #[test]
    fn repeated_queries_are_identical() {
        let kg = sample_graph();
        let targets = ids(&["Compound::A", "Compound::B"]);
        let allow = relations(&["activates", "inhibits"]);
        let first = filter_graph(&kg, &targets, &allow);
        let second = filter_graph(&kg, &targets, &allow);
        assert_eq!(first, second);
    }
}
