//! Wires the markdown parser into the graph builder and exposes export and
//! analytics over the resulting graph.

use cardgraph_core::prelude::*;
use cardgraph_export::{ExportFormat, export};
use cardgraph_graph::{CardGraph, Graph, GraphAnalytics};
use cardgraph_parser::MarkdownParser;
use std::path::Path;
use tracing::instrument;

/// Parser plus graph builder, holding the most recently generated graph
#[derive(Debug, Clone)]
pub struct GraphGenerator {
    config: GeneratorConfig,
    parser: MarkdownParser,
    builder: CardGraph,
}

impl Default for GraphGenerator {
    fn default() -> Self {
        Self {
            config: GeneratorConfig::default(),
            parser: MarkdownParser::default(),
            builder: CardGraph::default(),
        }
    }
}

impl GraphGenerator {
    /// Create a generator, validating the parser patterns
    pub fn new(config: GeneratorConfig) -> Result<Self> {
        let parser = MarkdownParser::new(config.parser.clone())?;
        let builder = CardGraph::new(config.graph);

        Ok(Self {
            config,
            parser,
            builder,
        })
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    pub fn parser(&self) -> &MarkdownParser {
        &self.parser
    }

    /// The last generated graph
    pub fn graph(&self) -> &Graph {
        self.builder.graph()
    }

    /// Parse every markdown file under `dir` and build the graph
    #[instrument(skip(self, dir), fields(dir = %dir.display()))]
    pub fn generate_from_directory(&mut self, dir: &Path, recursive: bool) -> Result<&Graph> {
        let cards = self.parser.parse_directory(dir, recursive)?;
        log::info!("Parsed {} cards from {}", cards.len(), dir.display());
        Ok(self.builder.build_graph(&cards))
    }

    /// Parse the given files and build the graph; unreadable files are skipped
    #[instrument(skip_all, fields(files = paths.len()))]
    pub fn generate_from_files<P: AsRef<Path>>(&mut self, paths: &[P]) -> &Graph {
        let mut cards = Vec::with_capacity(paths.len());

        for path in paths {
            let path = path.as_ref();
            match self.parser.parse_file(path) {
                Ok(card) => cards.push(card),
                Err(e) => log::warn!("Failed to parse {}: {}", path.display(), e),
            }
        }

        self.builder.build_graph(&cards)
    }

    /// Build the graph from already-parsed cards
    #[instrument(skip_all, fields(cards = cards.len()))]
    pub fn generate_from_cards(&mut self, cards: &[Card]) -> &Graph {
        self.builder.build_graph(cards)
    }

    /// Render the last generated graph
    pub fn export(&self, format: ExportFormat) -> Result<String> {
        export(self.graph(), format)
    }

    /// Connectivity analytics for the last generated graph
    pub fn analytics(&self) -> GraphAnalytics {
        GraphAnalytics::from_graph(self.graph())
    }
}
