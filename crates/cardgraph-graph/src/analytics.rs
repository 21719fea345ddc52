//! Summary metrics over a built card graph.

use crate::graph::Graph;
use cardgraph_core::EdgeKind;
use cardgraph_core::utils::round2;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Connectivity summary of a graph
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphAnalytics {
    pub node_count: usize,
    pub edge_count: usize,
    /// Edge counts keyed by kind; kinds with no edges are absent
    pub edges_by_type: BTreeMap<EdgeKind, usize>,
    /// Mean outgoing connections per node, rounded to two decimals
    pub avg_connections: f64,
    pub max_connections: usize,
    /// Nodes with no outgoing connections
    pub isolated_nodes: usize,
    /// Edges over possible ordered pairs, `e / (n * (n - 1))`
    pub density: f64,
}

impl GraphAnalytics {
    /// Compute analytics for a graph
    pub fn from_graph(graph: &Graph) -> Self {
        let node_count = graph.node_count();
        let edge_count = graph.edge_count();

        let mut edges_by_type = BTreeMap::new();
        for edge in graph.edges() {
            *edges_by_type.entry(edge.kind).or_insert(0) += 1;
        }

        let connections: Vec<usize> = graph.nodes().map(|n| n.connections.len()).collect();
        let avg_connections = if connections.is_empty() {
            0.0
        } else {
            round2(connections.iter().sum::<usize>() as f64 / connections.len() as f64)
        };
        let max_connections = connections.iter().copied().max().unwrap_or(0);
        let isolated_nodes = connections.iter().filter(|&&c| c == 0).count();

        let density = if node_count > 1 {
            edge_count as f64 / (node_count as f64 * (node_count as f64 - 1.0))
        } else {
            0.0
        };

        Self {
            node_count,
            edge_count,
            edges_by_type,
            avg_connections,
            max_connections,
            isolated_nodes,
            density,
        }
    }

    /// Count of edges of one kind
    pub fn count(&self, kind: EdgeKind) -> usize {
        self.edges_by_type.get(&kind).copied().unwrap_or(0)
    }
}

/// Basic statistics about the graph
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphStats {
    pub total_cards: usize,
    pub total_edges: usize,
    pub orphaned_cards: usize,
    pub average_edges_per_card: f64,
}

impl Graph {
    /// Get statistics about the graph
    pub fn stats(&self) -> GraphStats {
        let total_cards = self.node_count();
        let total_edges = self.edge_count();

        let average_edges_per_card = if total_cards > 0 {
            total_edges as f64 / total_cards as f64
        } else {
            0.0
        };

        GraphStats {
            total_cards,
            total_edges,
            orphaned_cards: self.orphans().len(),
            average_edges_per_card,
        }
    }
}
