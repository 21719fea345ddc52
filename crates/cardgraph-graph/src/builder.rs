//! Graph construction from parsed cards

use crate::graph::Graph;
use cardgraph_core::prelude::*;
use std::collections::HashMap;

/// Builds a [`Graph`] from cards and keeps the most recent result.
///
/// Each call to [`CardGraph::build_graph`] discards the previous graph and
/// rebuilds it from scratch. Cards are cloned into the graph; `backlinks` are
/// written on the graph's copies, never on the caller's cards.
#[derive(Debug, Clone, Default)]
pub struct CardGraph {
    graph: Graph,
    options: GraphOptions,
}

impl CardGraph {
    /// Create a builder with the given options
    pub fn new(options: GraphOptions) -> Self {
        Self {
            graph: Graph::new(),
            options,
        }
    }

    /// The graph produced by the last build (empty before the first one)
    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    /// Take ownership of the last built graph
    pub fn into_graph(self) -> Graph {
        self.graph
    }

    /// Rebuild the graph from `cards`.
    ///
    /// Passes run in a fixed order so the edge list reads: all Link edges, then
    /// all Backlink edges, then all Tag edges. Unknown link targets and self
    /// links are dropped without error.
    pub fn build_graph(&mut self, cards: &[Card]) -> &Graph {
        self.graph.clear();

        self.add_cards(cards);
        self.add_link_edges(cards);

        if self.options.include_backlinks {
            self.add_backlink_edges();
        }

        if self.options.include_tags {
            self.add_tag_edges(cards);
        }

        log::debug!(
            "Built card graph: {} cards in, {} nodes, {} edges",
            cards.len(),
            self.graph.node_count(),
            self.graph.edge_count()
        );

        &self.graph
    }

    fn add_cards(&mut self, cards: &[Card]) {
        for card in cards {
            self.graph.insert_card(card.clone());
        }
    }

    fn add_link_edges(&mut self, cards: &[Card]) {
        let weight = self.options.edge_weight();

        for card in cards {
            for target in &card.links {
                if *target == card.id {
                    continue;
                }
                if !self.graph.contains(target) {
                    log::debug!("Dropping link {} -> {}: no such card", card.id, target);
                    continue;
                }

                self.graph
                    .add_edge(Edge::new(&card.id, target, EdgeKind::Link, weight));
            }
        }
    }

    /// For every linked-to card, record its linkers as backlinks and add one
    /// Backlink edge from it back to each linker.
    fn add_backlink_edges(&mut self) {
        let weight = self.options.edge_weight();

        // Grouped by target, targets in order of their first incoming link.
        let mut positions: HashMap<&str, usize> = HashMap::new();
        let mut groups: Vec<(String, Vec<String>)> = Vec::new();
        for edge in self.graph.edges().iter().filter(|e| e.kind == EdgeKind::Link) {
            let slot = *positions.entry(edge.to.as_str()).or_insert_with(|| {
                groups.push((edge.to.clone(), Vec::new()));
                groups.len() - 1
            });
            groups[slot].1.push(edge.from.clone());
        }

        let ids: Vec<String> = self.graph.nodes().map(|n| n.card.id.clone()).collect();
        for id in &ids {
            if let Some(node) = self.graph.node_mut(id) {
                node.card.backlinks.clear();
            }
        }

        for (target, sources) in groups {
            if let Some(node) = self.graph.node_mut(&target) {
                node.card.backlinks = sources.clone();
            }

            for source in sources {
                self.graph
                    .add_edge(Edge::new(&target, source, EdgeKind::Backlink, weight));
            }
        }
    }

    /// Connect every pair of cards that share a tag, once per shared tag.
    fn add_tag_edges(&mut self, cards: &[Card]) {
        let weight = self.options.edge_weight();

        let mut positions: HashMap<&str, usize> = HashMap::new();
        let mut groups: Vec<Vec<&str>> = Vec::new();
        for card in cards {
            for tag in &card.tags {
                let slot = *positions.entry(tag.as_str()).or_insert_with(|| {
                    groups.push(Vec::new());
                    groups.len() - 1
                });
                groups[slot].push(card.id.as_str());
            }
        }

        for ids in groups.iter().filter(|ids| ids.len() > 1) {
            for (i, &a) in ids.iter().enumerate() {
                for &b in &ids[i + 1..] {
                    if a == b || !self.graph.contains(a) || !self.graph.contains(b) {
                        continue;
                    }

                    let forward = Edge::new(a, b, EdgeKind::Tag, weight);
                    let backward = forward.reversed();
                    self.graph.add_edge(forward);
                    self.graph.add_edge(backward);
                }
            }
        }
    }
}
