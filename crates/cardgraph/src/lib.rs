//! # Cardgraph
//!
//! Parse a folder of markdown cards, build their relationship graph, then
//! analyze or export it.
//!
//! ```no_run
//! use cardgraph::{ExportFormat, GeneratorConfig, GraphGenerator};
//! use std::path::Path;
//!
//! # fn example() -> cardgraph::Result<()> {
//! let mut generator = GraphGenerator::new(GeneratorConfig::default())?;
//! generator.generate_from_directory(Path::new("./vault"), true)?;
//!
//! println!("{}", generator.export(ExportFormat::Mermaid)?);
//! println!("{:?}", generator.analytics());
//! # Ok(())
//! # }
//! ```

pub mod generator;

pub use cardgraph_core::prelude::*;
pub use cardgraph_export::ExportFormat;
pub use cardgraph_graph::{CardGraph, Graph, GraphAnalytics, GraphNode, GraphStats};
pub use cardgraph_parser::MarkdownParser;
pub use generator::GraphGenerator;
