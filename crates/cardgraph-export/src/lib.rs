//! # Export System
//!
//! Renders a built [`Graph`] as JSON, Graphviz DOT or Mermaid text, and
//! exports graph analytics as JSON or CSV.
//!
//! ## Quick Start
//!
//! ```
//! use cardgraph_core::{Card, GraphOptions};
//! use cardgraph_export::{DotExporter, ExportFormat, export};
//! use cardgraph_graph::CardGraph;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let cards = vec![Card::new("a", "Alpha").with_links(["b"]), Card::new("b", "Beta")];
//! let mut builder = CardGraph::new(GraphOptions::default());
//! let graph = builder.build_graph(&cards);
//!
//! let dot = DotExporter::export(graph);
//! assert!(dot.contains("\"a\" -> \"b\" [color=blue];"));
//!
//! let json = export(graph, "json".parse::<ExportFormat>()?)?;
//! assert!(json.contains("\"edges\""));
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```
//!
//! ## Export Formats
//!
//! ### JSON
//! - Pretty-printed
//! - `nodes`: id plus card metadata (no content), in node insertion order
//! - `edges`: `{from, to, type, weight?}` in construction order
//!
//! ### DOT
//! - Left-to-right layout, rounded boxes labelled with card titles
//! - One line per distinct `from -> to` pair; the first edge's kind picks the style
//! - Link: solid blue, Backlink: dashed red, Tag: dotted green
//!
//! ### Mermaid
//! - Top-down flowchart, node ids stripped to alphanumerics
//! - Titles truncated to 20 characters
//! - Link: `-->`, Backlink: `-.->`, Tag: `==>`
//!
//! All exporters are pure functions over the graph's public data; none of
//! them perform I/O.

use cardgraph_core::prelude::*;
use cardgraph_core::to_json_string;
use cardgraph_graph::{Graph, GraphAnalytics};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// Longest title shown on a Mermaid node, in characters
const MERMAID_TITLE_LIMIT: usize = 20;

/// Export format options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    /// JSON format (pretty-printed)
    Json,
    /// Graphviz DOT
    Dot,
    /// Mermaid flowchart
    Mermaid,
}

impl FromStr for ExportFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "json" => Ok(ExportFormat::Json),
            "dot" | "graphviz" => Ok(ExportFormat::Dot),
            "mermaid" | "mmd" => Ok(ExportFormat::Mermaid),
            other => Err(Error::config_error(format!(
                "Invalid export format '{}'. Use 'json', 'dot' or 'mermaid'",
                other
            ))),
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ExportFormat::Json => "json",
            ExportFormat::Dot => "dot",
            ExportFormat::Mermaid => "mermaid",
        })
    }
}

/// Render a graph in the requested format
pub fn export(graph: &Graph, format: ExportFormat) -> Result<String> {
    match format {
        ExportFormat::Json => JsonExporter::export(graph),
        ExportFormat::Dot => Ok(DotExporter::export(graph)),
        ExportFormat::Mermaid => Ok(MermaidExporter::export(graph)),
    }
}

/// Card metadata as exported (content omitted)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardRecord {
    pub id: String,
    pub title: String,
    pub file_path: PathBuf,
    pub tags: Vec<String>,
    pub links: Vec<String>,
    pub backlinks: Vec<String>,
}

/// Node record for JSON export
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NodeRecord {
    pub id: String,
    pub card: CardRecord,
}

/// Whole-graph document for JSON export
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphDocument {
    pub nodes: Vec<NodeRecord>,
    pub edges: Vec<Edge>,
}

impl GraphDocument {
    /// Snapshot a graph's public data
    pub fn from_graph(graph: &Graph) -> Self {
        let nodes = graph
            .nodes()
            .map(|node| NodeRecord {
                id: node.card.id.clone(),
                card: CardRecord {
                    id: node.card.id.clone(),
                    title: node.card.title.clone(),
                    file_path: node.card.file_path.clone(),
                    tags: node.card.tags.clone(),
                    links: node.card.links.clone(),
                    backlinks: node.card.backlinks.clone(),
                },
            })
            .collect();

        Self {
            nodes,
            edges: graph.edges().to_vec(),
        }
    }
}

/// JSON graph exporter
pub struct JsonExporter;

impl JsonExporter {
    /// Export nodes and edges as pretty JSON
    pub fn export(graph: &Graph) -> Result<String> {
        to_json_string(&GraphDocument::from_graph(graph), "graph")
    }
}

/// Graphviz DOT exporter
pub struct DotExporter;

impl DotExporter {
    /// Export as a `digraph`
    pub fn export(graph: &Graph) -> String {
        let mut dot = String::from("digraph G {\n");
        dot.push_str("  rankdir=LR;\n");
        dot.push_str("  node [shape=box, style=rounded];\n\n");

        for node in graph.nodes() {
            let label = node.card.title.replace('"', "\\\"");
            dot.push_str(&format!("  \"{}\" [label=\"{}\"];\n", node.id(), label));
        }

        dot.push('\n');

        let mut seen: HashSet<(&str, &str)> = HashSet::new();
        for edge in graph.edges() {
            if seen.insert((edge.from.as_str(), edge.to.as_str())) {
                dot.push_str(&format!(
                    "  \"{}\" -> \"{}\" {};\n",
                    edge.from,
                    edge.to,
                    Self::style(edge.kind)
                ));
            }
        }

        dot.push('}');
        dot
    }

    fn style(kind: EdgeKind) -> &'static str {
        match kind {
            EdgeKind::Link => "[color=blue]",
            EdgeKind::Backlink => "[color=red, style=dashed]",
            EdgeKind::Tag => "[color=green, style=dotted]",
        }
    }
}

/// Mermaid flowchart exporter
pub struct MermaidExporter;

impl MermaidExporter {
    /// Export as a top-down `graph TD` flowchart
    pub fn export(graph: &Graph) -> String {
        let mut mermaid = String::from("graph TD\n");

        for node in graph.nodes() {
            let title: String = node.card.title.chars().take(MERMAID_TITLE_LIMIT).collect();
            mermaid.push_str(&format!("  {}[\"{}\"]\n", clean_id(node.id()), title));
        }

        mermaid.push('\n');

        let mut seen: HashSet<(String, String)> = HashSet::new();
        for edge in graph.edges() {
            let from = clean_id(&edge.from);
            let to = clean_id(&edge.to);
            let line = format!("  {} {} {}\n", from, Self::arrow(edge.kind), to);

            if seen.insert((from, to)) {
                mermaid.push_str(&line);
            }
        }

        mermaid
    }

    fn arrow(kind: EdgeKind) -> &'static str {
        match kind {
            EdgeKind::Link => "-->",
            EdgeKind::Backlink => "-.->",
            EdgeKind::Tag => "==>",
        }
    }
}

/// Strip everything but ASCII letters and digits
fn clean_id(id: &str) -> String {
    id.chars().filter(|c| c.is_ascii_alphanumeric()).collect()
}

/// Analytics report for export
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyticsReport {
    pub timestamp: String,
    pub source: String,
    #[serde(flatten)]
    pub analytics: GraphAnalytics,
}

/// Create an analytics report stamped with the current time
pub fn create_analytics_report(source: &str, analytics: GraphAnalytics) -> AnalyticsReport {
    AnalyticsReport {
        timestamp: Utc::now().to_rfc3339(),
        source: source.to_string(),
        analytics,
    }
}

/// Analytics report exporter
pub struct AnalyticsExporter;

impl AnalyticsExporter {
    /// Export analytics report as JSON
    pub fn to_json(report: &AnalyticsReport) -> Result<String> {
        to_json_string(report, "analytics report")
    }

    /// Export analytics report as CSV (single row)
    pub fn to_csv(report: &AnalyticsReport) -> Result<String> {
        let a = &report.analytics;
        let csv = format!(
            "timestamp,source,node_count,edge_count,link_edges,backlink_edges,tag_edges,avg_connections,max_connections,isolated_nodes,density\n\
             {},\"{}\",{},{},{},{},{},{:.2},{},{},{:.3}",
            report.timestamp,
            report.source.replace('"', "\"\""),
            a.node_count,
            a.edge_count,
            a.count(EdgeKind::Link),
            a.count(EdgeKind::Backlink),
            a.count(EdgeKind::Tag),
            a.avg_connections,
            a.max_connections,
            a.isolated_nodes,
            a.density
        );

        Ok(csv)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cardgraph_graph::CardGraph;

    fn mock_cards(count: usize) -> Vec<Card> {
        (0..count)
            .map(|i| {
                Card::new(format!("card-{}", i), format!("Card {}", i))
                    .with_content(format!("Content for card {}", i))
                    .with_file_path(format!("/test/card-{}.md", i))
            })
            .collect()
    }

    fn linked_pair() -> Graph {
        let mut cards = mock_cards(2);
        cards[0].links = vec!["card-1".into()];
        cards[0].tags = vec!["test".into()];

        let mut builder = CardGraph::default();
        builder.build_graph(&cards);
        builder.into_graph()
    }

    fn shared_tag_pair() -> Graph {
        let cards = vec![
            Card::new("card-a", "A")
                .with_links(["card-b"])
                .with_tags(["shared"]),
            Card::new("card-b", "B").with_tags(["shared"]),
        ];

        let mut builder = CardGraph::default();
        builder.build_graph(&cards);
        builder.into_graph()
    }

    #[test]
    fn test_format_parsing() {
        assert_eq!("json".parse::<ExportFormat>().unwrap(), ExportFormat::Json);
        assert_eq!("DOT".parse::<ExportFormat>().unwrap(), ExportFormat::Dot);
        assert_eq!("mermaid".parse::<ExportFormat>().unwrap(), ExportFormat::Mermaid);
        assert!("csv".parse::<ExportFormat>().is_err());
        assert_eq!(ExportFormat::Mermaid.to_string(), "mermaid");
    }

    #[test]
    fn test_json_export() {
        let json = JsonExporter::export(&linked_pair()).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();

        let nodes = parsed["nodes"].as_array().unwrap();
        assert_eq!(nodes.len(), 2);
        assert_eq!(nodes[0]["id"], "card-0");
        assert_eq!(nodes[0]["card"]["title"], "Card 0");
        assert_eq!(nodes[0]["card"]["filePath"], "/test/card-0.md");
        assert_eq!(nodes[0]["card"]["links"][0], "card-1");
        assert_eq!(nodes[1]["card"]["backlinks"][0], "card-0");
        assert!(nodes[0]["card"].get("content").is_none());

        let edges = parsed["edges"].as_array().unwrap();
        assert_eq!(edges.len(), 2);
        assert_eq!(edges[0]["type"], "link");
        assert_eq!(edges[1]["type"], "backlink");
        assert!(edges[0].get("weight").is_none());
    }

    #[test]
    fn test_json_export_empty_graph() {
        let json = JsonExporter::export(&Graph::new()).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed["nodes"].as_array().unwrap().len(), 0);
        assert_eq!(parsed["edges"].as_array().unwrap().len(), 0);
    }

    #[test]
    fn test_dot_export() {
        let dot = DotExporter::export(&linked_pair());

        assert!(dot.starts_with("digraph G {"));
        assert!(dot.ends_with('}'));
        assert!(dot.contains("rankdir=LR"));
        assert!(dot.contains("\"card-0\" [label=\"Card 0\"];"));
        assert!(dot.contains("\"card-1\""));
        assert!(dot.contains("\"card-0\" -> \"card-1\" [color=blue];"));
        assert!(dot.contains("\"card-1\" -> \"card-0\" [color=red, style=dashed];"));
    }

    #[test]
    fn test_dot_escapes_quotes_in_labels() {
        let mut builder = CardGraph::default();
        builder.build_graph(&[Card::new("q", "Say \"hi\"")]);
        let dot = DotExporter::export(builder.graph());

        assert!(dot.contains("[label=\"Say \\\"hi\\\"\"]"));
    }

    #[test]
    fn test_dot_dedupes_pairs_first_kind_wins() {
        let dot = DotExporter::export(&shared_tag_pair());

        assert_eq!(dot.matches("\"card-a\" -> \"card-b\"").count(), 1);
        assert!(dot.contains("\"card-a\" -> \"card-b\" [color=blue];"));
        assert!(dot.contains("\"card-b\" -> \"card-a\" [color=red, style=dashed];"));
        assert!(!dot.contains("[color=green, style=dotted]"));
    }

    #[test]
    fn test_dot_tag_style() {
        let mut builder = CardGraph::default();
        builder.build_graph(&[
            Card::new("x", "X").with_tags(["t"]),
            Card::new("y", "Y").with_tags(["t"]),
        ]);
        let dot = DotExporter::export(builder.graph());
        assert!(dot.contains("\"x\" -> \"y\" [color=green, style=dotted];"));
    }

    #[test]
    fn test_mermaid_export() {
        let mermaid = MermaidExporter::export(&linked_pair());

        assert!(mermaid.starts_with("graph TD"));
        assert!(mermaid.contains("  card0[\"Card 0\"]"));
        assert!(mermaid.contains("card1"));
        assert!(mermaid.contains("card0 --> card1"));
        assert!(mermaid.contains("card1 -.-> card0"));
    }

    #[test]
    fn test_mermaid_truncates_titles() {
        let mut builder = CardGraph::default();
        builder.build_graph(&[Card::new("long", "An exceptionally long card title")]);
        let mermaid = MermaidExporter::export(builder.graph());

        assert!(mermaid.contains("long[\"An exceptionally lon\"]"));
    }

    #[test]
    fn test_mermaid_tag_arrow() {
        let mut builder = CardGraph::default();
        builder.build_graph(&[
            Card::new("x", "X").with_tags(["t"]),
            Card::new("y", "Y").with_tags(["t"]),
        ]);
        let mermaid = MermaidExporter::export(builder.graph());
        assert!(mermaid.contains("x ==> y"));
        assert!(mermaid.contains("y ==> x"));
    }

    #[test]
    fn test_export_dispatch() {
        let graph = linked_pair();
        assert!(export(&graph, ExportFormat::Json).unwrap().contains("\"nodes\""));
        assert!(export(&graph, ExportFormat::Dot).unwrap().starts_with("digraph"));
        assert!(export(&graph, ExportFormat::Mermaid).unwrap().starts_with("graph TD"));
    }

    #[test]
    fn test_analytics_report_export() {
        let analytics = GraphAnalytics::from_graph(&shared_tag_pair());
        let report = create_analytics_report("vault", analytics);

        let json = AnalyticsExporter::to_json(&report).unwrap();
        assert!(json.contains("\"node_count\": 2"));
        assert!(json.contains("\"source\": \"vault\""));

        let csv = AnalyticsExporter::to_csv(&report).unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("timestamp,source,node_count"));
        assert!(lines[1].contains(",\"vault\",2,4,1,1,2,"));
    }

    #[test]
    fn test_analytics_csv_escapes_quotes_in_source() {
        let analytics = GraphAnalytics::from_graph(&Graph::new());
        let report = create_analytics_report("my \"notes\"", analytics);
        let csv = AnalyticsExporter::to_csv(&report).unwrap();

        let row = csv.lines().nth(1).unwrap();
        assert!(row.contains(",\"my \"\"notes\"\"\",0,0,"));
    }
}
