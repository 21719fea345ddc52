//! Integration tests for cardgraph

use cardgraph::{EdgeKind, Error, ExportFormat, GeneratorConfig, GraphGenerator, ParserOptions};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn write_card(dir: &Path, name: &str, content: &str) {
    fs::write(dir.join(name), content).unwrap();
}

/// Three cards: alpha links to beta and gamma, beta links back to alpha,
/// beta and gamma share a tag
fn sample_vault() -> TempDir {
    let temp = TempDir::new().unwrap();
    write_card(
        temp.path(),
        "alpha.md",
        "# Alpha\n\nSee [[Beta]] and [[Gamma|the third]].\n\n#start",
    );
    write_card(temp.path(), "beta.md", "# Beta\n\nBack to [[Alpha]].\n\n#shared");
    write_card(temp.path(), "gamma.md", "# Gamma\n\nLeaf card.\n\n#shared");
    temp
}

// ==================== Generation Tests ====================

#[test]
fn test_generate_from_directory() {
    let vault = sample_vault();
    let mut generator = GraphGenerator::default();
    let graph = generator
        .generate_from_directory(vault.path(), true)
        .unwrap();

    assert_eq!(graph.node_count(), 3);

    let count = |kind: EdgeKind| graph.edges().iter().filter(|e| e.kind == kind).count();
    assert_eq!(count(EdgeKind::Link), 3);
    assert_eq!(count(EdgeKind::Backlink), 3);
    assert_eq!(count(EdgeKind::Tag), 2);

    let alpha = graph.node("alpha").unwrap();
    assert_eq!(alpha.card.links, vec!["beta", "gamma"]);
    assert_eq!(alpha.card.backlinks, vec!["beta"]);

    let beta = graph.node("beta").unwrap();
    assert_eq!(beta.card.backlinks, vec!["alpha"]);

    let connected: Vec<&str> = graph
        .connected_nodes("gamma")
        .iter()
        .map(|n| n.id())
        .collect();
    assert_eq!(connected, vec!["alpha", "beta"]);
}

#[test]
fn test_node_connections_match_edge_list() {
    let vault = sample_vault();
    let mut generator = GraphGenerator::default();
    let graph = generator
        .generate_from_directory(vault.path(), true)
        .unwrap();

    let total: usize = graph.nodes().map(|n| n.connections.len()).sum();
    assert_eq!(total, graph.edge_count());

    for node in graph.nodes() {
        for edge in &node.connections {
            assert_eq!(edge.from, node.id());
            assert!(graph.contains(&edge.to));
        }
    }
}

#[test]
fn test_cycle_forms_one_component() {
    let temp = TempDir::new().unwrap();
    write_card(temp.path(), "a.md", "# A\n\n[[B]]");
    write_card(temp.path(), "b.md", "# B\n\n[[C]]");
    write_card(temp.path(), "c.md", "# C\n\n[[A]]");
    write_card(temp.path(), "d.md", "# D\n\nAlone.");

    let config = GeneratorConfig::builder()
        .include_backlinks(false)
        .build()
        .unwrap();
    let mut generator = GraphGenerator::new(config).unwrap();
    let graph = generator.generate_from_directory(temp.path(), true).unwrap();

    assert_eq!(
        graph.connected_components(),
        vec![vec!["a".to_string(), "b".to_string(), "c".to_string()]]
    );
    assert_eq!(graph.cycles().len(), 1);
    assert_eq!(graph.orphans(), vec!["d".to_string()]);
    assert_eq!(graph.shortest_path("b", "a"), vec!["b", "c", "a"]);
    assert!(graph.shortest_path("a", "d").is_empty());
}

#[test]
fn test_heading_only_link_never_reaches_empty_id_card() {
    let temp = TempDir::new().unwrap();
    write_card(temp.path(), "alpha.md", "# Alpha\n\nSee [[#Intro]] below.");
    write_card(temp.path(), "jp.md", "# 日本語\n\nbody");

    let mut generator = GraphGenerator::default();
    let graph = generator.generate_from_directory(temp.path(), true).unwrap();

    assert!(graph.node("alpha").unwrap().card.links.is_empty());
    let jp = graph.node("").unwrap();
    assert!(jp.card.backlinks.is_empty());
    assert_eq!(graph.edge_count(), 0);
}

#[test]
fn test_generate_from_files_skips_missing() {
    let vault = sample_vault();
    let files = vec![
        vault.path().join("alpha.md"),
        vault.path().join("missing.md"),
        vault.path().join("gamma.md"),
    ];

    let mut generator = GraphGenerator::default();
    let graph = generator.generate_from_files(&files);

    assert_eq!(graph.node_count(), 2);
    assert!(graph.contains("alpha"));
    assert!(graph.contains("gamma"));
    assert!(!graph.contains("beta"));
}

#[test]
fn test_non_recursive_scan() {
    let vault = sample_vault();
    let nested = vault.path().join("nested");
    fs::create_dir(&nested).unwrap();
    write_card(&nested, "delta.md", "# Delta\n\n[[Alpha]]");

    let mut generator = GraphGenerator::default();
    assert_eq!(
        generator
            .generate_from_directory(vault.path(), false)
            .unwrap()
            .node_count(),
        3
    );
    assert_eq!(
        generator
            .generate_from_directory(vault.path(), true)
            .unwrap()
            .node_count(),
        4
    );
}

#[test]
fn test_missing_directory_is_an_error() {
    let mut generator = GraphGenerator::default();
    let result = generator.generate_from_directory(Path::new("/no/such/cards"), true);
    assert!(matches!(result, Err(Error::FileNotFound { .. })));
}

// ==================== Config Tests ====================

#[test]
fn test_config_file_round_trip() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("cardgraph.yaml");

    let config = GeneratorConfig::builder()
        .include_tags(false)
        .weight_by_frequency(true)
        .build()
        .unwrap();
    config.save(&path).unwrap();

    let loaded = GeneratorConfig::load(&path).unwrap();
    assert_eq!(loaded, config);

    let vault = sample_vault();
    let mut generator = GraphGenerator::new(loaded).unwrap();
    let graph = generator
        .generate_from_directory(vault.path(), true)
        .unwrap();

    assert!(graph.edges().iter().all(|e| e.kind != EdgeKind::Tag));
    assert!(graph.edges().iter().all(|e| e.weight == Some(1.0)));
}

#[test]
fn test_partial_config_file_uses_defaults() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("partial.yaml");
    fs::write(&path, "graph:\n  include_backlinks: false\n").unwrap();

    let config = GeneratorConfig::load(&path).unwrap();
    assert!(!config.graph.include_backlinks);
    assert!(config.graph.include_tags);
    assert_eq!(config.parser, ParserOptions::default());
}

// ==================== Export Tests ====================

#[test]
fn test_export_json() {
    let vault = sample_vault();
    let mut generator = GraphGenerator::default();
    generator
        .generate_from_directory(vault.path(), true)
        .unwrap();

    let json = generator.export(ExportFormat::Json).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(value["nodes"].as_array().unwrap().len(), 3);
    assert_eq!(value["nodes"][0]["id"], "alpha");
    assert_eq!(value["nodes"][0]["card"]["backlinks"][0], "beta");
    assert_eq!(value["edges"][0]["type"], "link");
    assert!(value["edges"][0].get("weight").is_none());
}

#[test]
fn test_export_dot_and_mermaid() {
    let vault = sample_vault();
    let mut generator = GraphGenerator::default();
    generator
        .generate_from_directory(vault.path(), true)
        .unwrap();

    let dot = generator.export(ExportFormat::Dot).unwrap();
    assert!(dot.starts_with("digraph G {"));
    assert!(dot.contains("\"alpha\" -> \"beta\""));
    assert!(dot.trim_end().ends_with('}'));

    let mermaid = generator.export("mermaid".parse().unwrap()).unwrap();
    assert!(mermaid.starts_with("graph TD"));
    assert!(mermaid.contains("alpha --> beta"));
}

#[test]
fn test_analytics_for_sample_vault() {
    let vault = sample_vault();
    let mut generator = GraphGenerator::default();
    generator
        .generate_from_directory(vault.path(), true)
        .unwrap();

    let analytics = generator.analytics();
    assert_eq!(analytics.node_count, 3);
    assert_eq!(analytics.edge_count, 8);
    assert_eq!(analytics.count(EdgeKind::Tag), 2);
    assert_eq!(analytics.isolated_nodes, 0);
}
