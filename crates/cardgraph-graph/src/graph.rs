//! Card graph data model and read-only queries

use cardgraph_core::prelude::*;
use petgraph::algo::kosaraju_scc;
use petgraph::graph::{DiGraph, NodeIndex};
use std::collections::{HashMap, HashSet, VecDeque};

/// One card plus every edge that starts at it
#[derive(Debug, Clone, PartialEq)]
pub struct GraphNode {
    pub card: Card,
    /// Outgoing edges of all kinds, in construction order
    pub connections: Vec<Edge>,
}

impl GraphNode {
    fn new(card: Card) -> Self {
        Self {
            card,
            connections: Vec::new(),
        }
    }

    /// Card id of this node
    pub fn id(&self) -> &str {
        &self.card.id
    }
}

/// Directed multigraph of cards.
///
/// Nodes keep insertion order; re-inserting an existing id replaces the card
/// in place. Every edge is stored once in [`Graph::edges`] and once in its
/// source node's `connections`.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    nodes: Vec<GraphNode>,
    index: HashMap<String, usize>,
    edges: Vec<Edge>,
}

impl Graph {
    /// Create an empty graph
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a node by card id
    pub fn node(&self, id: &str) -> Option<&GraphNode> {
        self.index.get(id).map(|&i| &self.nodes[i])
    }

    /// Check whether a card id is present
    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// Nodes in insertion order
    pub fn nodes(&self) -> impl Iterator<Item = &GraphNode> {
        self.nodes.iter()
    }

    /// All edges in construction order: links, then backlinks, then tags
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub(crate) fn clear(&mut self) {
        self.nodes.clear();
        self.index.clear();
        self.edges.clear();
    }

    /// Insert a card, replacing any existing card with the same id
    pub(crate) fn insert_card(&mut self, card: Card) {
        match self.index.get(&card.id) {
            Some(&i) => self.nodes[i] = GraphNode::new(card),
            None => {
                self.index.insert(card.id.clone(), self.nodes.len());
                self.nodes.push(GraphNode::new(card));
            }
        }
    }

    pub(crate) fn node_mut(&mut self, id: &str) -> Option<&mut GraphNode> {
        self.index.get(id).map(|&i| &mut self.nodes[i])
    }

    /// Append an edge to its source node and to the edge list.
    ///
    /// Returns false and stores nothing when either endpoint is missing or the
    /// edge would be a self loop.
    pub(crate) fn add_edge(&mut self, edge: Edge) -> bool {
        if edge.from == edge.to || !self.contains(&edge.to) {
            return false;
        }
        let Some(source) = self.node_mut(&edge.from) else {
            return false;
        };

        source.connections.push(edge.clone());
        self.edges.push(edge);
        true
    }

    /// Nodes reachable over one outgoing edge, one entry per edge
    pub fn connected_nodes(&self, id: &str) -> Vec<&GraphNode> {
        let Some(node) = self.node(id) else {
            return Vec::new();
        };

        node.connections
            .iter()
            .filter_map(|edge| self.node(&edge.to))
            .collect()
    }

    /// Edges pointing at `id`, in edge-list order
    pub fn incoming(&self, id: &str) -> Vec<&Edge> {
        self.edges.iter().filter(|edge| edge.to == id).collect()
    }

    /// Shortest path by edge count from `from` to `to`, following directed
    /// edges of every kind.
    ///
    /// Returns an empty path when either id is unknown or `to` is unreachable.
    /// Nodes are marked visited when dequeued, so ties between equally short
    /// paths go to the one whose edges were appended first during the build.
    pub fn shortest_path(&self, from: &str, to: &str) -> Vec<String> {
        if !self.contains(from) || !self.contains(to) {
            return Vec::new();
        }

        let mut visited: HashSet<&str> = HashSet::new();
        let mut queue: VecDeque<(&str, Vec<&str>)> = VecDeque::new();
        queue.push_back((from, vec![from]));

        while let Some((id, path)) = queue.pop_front() {
            if id == to {
                return path.into_iter().map(str::to_string).collect();
            }

            if !visited.insert(id) {
                continue;
            }

            if let Some(node) = self.node(id) {
                for edge in &node.connections {
                    if !visited.contains(edge.to.as_str()) {
                        let mut next = path.clone();
                        next.push(edge.to.as_str());
                        queue.push_back((edge.to.as_str(), next));
                    }
                }
            }
        }

        Vec::new()
    }

    /// Groups of nodes discovered by depth-first reachability.
    ///
    /// Each not-yet-visited node (in insertion order) starts a stack-based DFS
    /// over outgoing edges of every kind; everything it reaches that was not
    /// already claimed forms one group, in discovery order. Only groups with at
    /// least two members are returned. Membership is outbound reachability from
    /// the start node, not mutual reachability; see [`Graph::cycles`] for true
    /// strongly connected components.
    pub fn connected_components(&self) -> Vec<Vec<String>> {
        let mut visited: HashSet<&str> = HashSet::new();
        let mut components = Vec::new();

        for node in &self.nodes {
            if visited.contains(node.id()) {
                continue;
            }

            let component = self.dfs_component(node.id(), &mut visited);
            if component.len() > 1 {
                components.push(component);
            }
        }

        components
    }

    fn dfs_component<'a>(&'a self, start: &'a str, visited: &mut HashSet<&'a str>) -> Vec<String> {
        let mut component = Vec::new();
        let mut stack = vec![start];

        while let Some(id) = stack.pop() {
            if !visited.insert(id) {
                continue;
            }
            component.push(id.to_string());

            if let Some(node) = self.node(id) {
                for edge in &node.connections {
                    if !visited.contains(edge.to.as_str()) {
                        stack.push(edge.to.as_str());
                    }
                }
            }
        }

        component
    }

    /// Strongly connected components of the Link edges (size >= 2).
    ///
    /// Members are listed in node insertion order, components ordered by their
    /// first member.
    pub fn cycles(&self) -> Vec<Vec<String>> {
        let mut link_graph: DiGraph<usize, ()> = DiGraph::with_capacity(self.nodes.len(), 0);
        let indices: Vec<NodeIndex> = (0..self.nodes.len())
            .map(|i| link_graph.add_node(i))
            .collect();

        for edge in self.edges.iter().filter(|e| e.kind == EdgeKind::Link) {
            if let (Some(&from), Some(&to)) = (self.index.get(&edge.from), self.index.get(&edge.to))
            {
                link_graph.add_edge(indices[from], indices[to], ());
            }
        }

        let mut components: Vec<Vec<usize>> = kosaraju_scc(&link_graph)
            .into_iter()
            .filter(|scc| scc.len() > 1)
            .map(|scc| {
                let mut members: Vec<usize> = scc.iter().map(|&idx| link_graph[idx]).collect();
                members.sort_unstable();
                members
            })
            .collect();
        components.sort_by_key(|members| members[0]);

        components
            .into_iter()
            .map(|members| {
                members
                    .into_iter()
                    .map(|i| self.nodes[i].card.id.clone())
                    .collect()
            })
            .collect()
    }

    /// Ids of nodes with no incoming and no outgoing edges
    pub fn orphans(&self) -> Vec<String> {
        let targets: HashSet<&str> = self.edges.iter().map(|e| e.to.as_str()).collect();

        self.nodes
            .iter()
            .filter(|node| node.connections.is_empty() && !targets.contains(node.id()))
            .map(|node| node.card.id.clone())
            .collect()
    }

    /// Copy into a petgraph `DiGraph` keyed by card id, one edge per [`Edge`]
    pub fn to_petgraph(&self) -> DiGraph<String, EdgeKind> {
        let mut graph = DiGraph::with_capacity(self.nodes.len(), self.edges.len());
        let indices: Vec<NodeIndex> = self
            .nodes
            .iter()
            .map(|node| graph.add_node(node.card.id.clone()))
            .collect();

        for edge in &self.edges {
            if let (Some(&from), Some(&to)) = (self.index.get(&edge.from), self.index.get(&edge.to))
            {
                graph.add_edge(indices[from], indices[to], edge.kind);
            }
        }

        graph
    }
}
