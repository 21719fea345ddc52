//! Cardgraph CLI

use anyhow::{Context, bail};
use cardgraph::{ExportFormat, GeneratorConfig, GraphGenerator};
use cardgraph_export::{AnalyticsExporter, create_analytics_report};
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Build a relationship graph from a folder of markdown cards
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Directory containing markdown cards
    dir: PathBuf,

    /// Export format (json, dot, mermaid)
    #[arg(short, long, default_value = "json")]
    format: String,

    /// Write the export to a file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// YAML configuration file
    #[arg(short, long, env = "CARDGRAPH_CONFIG")]
    config: Option<PathBuf>,

    /// Skip backlink edges
    #[arg(long, action = clap::ArgAction::SetTrue)]
    no_backlinks: bool,

    /// Skip tag co-occurrence edges
    #[arg(long, action = clap::ArgAction::SetTrue)]
    no_tags: bool,

    /// Attach weight = 1 to every edge
    #[arg(long, action = clap::ArgAction::SetTrue)]
    weighted: bool,

    /// Only parse the top level of DIR
    #[arg(long, action = clap::ArgAction::SetTrue)]
    no_recursive: bool,

    /// Print graph analytics as JSON
    #[arg(long, action = clap::ArgAction::SetTrue)]
    analytics: bool,

    /// Print the shortest path between two card ids
    #[arg(long, num_args = 2, value_names = ["FROM", "TO"])]
    path: Option<Vec<String>>,

    /// Print reachability components
    #[arg(long, action = clap::ArgAction::SetTrue)]
    components: bool,

    /// Print link cycles
    #[arg(long, action = clap::ArgAction::SetTrue)]
    cycles: bool,

    /// Debug logging
    #[arg(short, long, action = clap::ArgAction::SetTrue)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let default_level = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    log::info!("cardgraph v{}", env!("CARGO_PKG_VERSION"));

    let format: ExportFormat = args.format.parse()?;

    let mut config = match &args.config {
        Some(path) => GeneratorConfig::load(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => GeneratorConfig::default(),
    };
    if args.no_backlinks {
        config.graph.include_backlinks = false;
    }
    if args.no_tags {
        config.graph.include_tags = false;
    }
    if args.weighted {
        config.graph.weight_by_frequency = true;
    }

    let mut generator = GraphGenerator::new(config).context("Invalid configuration")?;
    let graph = generator
        .generate_from_directory(&args.dir, !args.no_recursive)
        .with_context(|| format!("Failed to generate graph from {}", args.dir.display()))?;
    log::info!(
        "Graph ready: {} nodes, {} edges",
        graph.node_count(),
        graph.edge_count()
    );

    let mut queried = false;

    if args.analytics {
        let source = args.dir.display().to_string();
        let report = create_analytics_report(&source, generator.analytics());
        println!("{}", AnalyticsExporter::to_json(&report)?);
        queried = true;
    }

    if let Some(ids) = &args.path {
        let [from, to] = ids.as_slice() else {
            bail!("--path takes exactly two card ids");
        };
        let path = generator.graph().shortest_path(from, to);
        if path.is_empty() {
            println!("No path from {} to {}", from, to);
        } else {
            println!("{}", path.join(" -> "));
        }
        queried = true;
    }

    if args.components {
        for component in generator.graph().connected_components() {
            println!("{}", component.join(", "));
        }
        queried = true;
    }

    if args.cycles {
        for cycle in generator.graph().cycles() {
            println!("{}", cycle.join(", "));
        }
        queried = true;
    }

    if queried && args.output.is_none() {
        return Ok(());
    }

    let rendered = generator.export(format)?;
    match &args.output {
        Some(path) => {
            std::fs::write(path, rendered)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            log::info!("Wrote {} export to {}", format, path.display());
        }
        None => println!("{}", rendered),
    }

    Ok(())
}
