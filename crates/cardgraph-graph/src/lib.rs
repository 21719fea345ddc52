//! # Card Graph
//!
//! Builds a directed relationship graph from parsed cards and answers
//! structural questions about it.
//!
//! Provides:
//! - Link edges from each card to the cards it references
//! - Backlink edges from each referenced card back to its linkers
//! - Tag edges between every pair of cards sharing a tag
//! - Shortest paths (BFS over directed edges)
//! - Reachability components (DFS) and true link cycles (petgraph SCC)
//! - Connectivity analytics
//!
//! ## Quick Start
//!
//! ```
//! use cardgraph_core::{Card, EdgeKind, GraphOptions};
//! use cardgraph_graph::CardGraph;
//!
//! let cards = vec![
//!     Card::new("a", "A").with_links(["b"]),
//!     Card::new("b", "B"),
//! ];
//!
//! let mut builder = CardGraph::new(GraphOptions::default());
//! let graph = builder.build_graph(&cards);
//!
//! assert_eq!(graph.node_count(), 2);
//! assert_eq!(graph.edges()[0].kind, EdgeKind::Link);
//! assert_eq!(graph.edges()[1].kind, EdgeKind::Backlink);
//! assert_eq!(graph.shortest_path("b", "a"), vec!["b", "a"]);
//! ```
//!
//! ## Core Concepts
//!
//! ### Nodes and Edges
//! - **Nodes**: one per unique card id; a later card with the same id replaces
//!   the earlier one
//! - **Edges**: directed, never self loops, never dangling
//! - **Order**: the edge list holds all Link edges, then Backlink, then Tag
//!
//! ### Components vs Cycles
//!
//! [`Graph::connected_components`] groups nodes by outbound DFS reachability
//! across every edge kind. [`Graph::cycles`] is the strict variant: strongly
//! connected components over Link edges only.
//!
//! ## Modules
//!
//! - [`graph`] - Graph data model and queries
//! - [`builder`] - Graph construction
//! - [`analytics`] - Connectivity metrics

pub mod analytics;
pub mod builder;
pub mod graph;

pub use analytics::{GraphAnalytics, GraphStats};
pub use builder::CardGraph;
pub use graph::{Graph, GraphNode};

pub mod prelude {
    pub use crate::analytics::{GraphAnalytics, GraphStats};
    pub use crate::builder::CardGraph;
    pub use crate::graph::{Graph, GraphNode};
    pub use cardgraph_core::prelude::*;
}
