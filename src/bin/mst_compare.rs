//! Runs Prim and Kruskal side by side on generated graphs and prints a JSON report.

use anyhow::{bail, Context, Result};
use clap::Parser;
use serde::Serialize;
use std::fs;
use std::path::PathBuf;

use spanning::{run_experiment, Algorithm, ExperimentConfig, Graph};

#[derive(Parser)]
#[command(name = "mst_compare")]
#[command(about = "Compare Prim and Kruskal on random weighted graphs", long_about = None)]
struct Cli {
    /// JSON experiment config; flags below override its fields
    config: Option<PathBuf>,

    /// Number of nodes (at least 2)
    #[arg(long)]
    nodes: Option<usize>,

    /// Number of edges (at least nodes - 1)
    #[arg(long)]
    edges: Option<usize>,

    /// Smallest edge weight
    #[arg(long)]
    min_weight: Option<i64>,

    /// Largest edge weight
    #[arg(long)]
    max_weight: Option<i64>,

    /// Seed for reproducible graphs
    #[arg(long)]
    seed: Option<u64>,

    /// Number of graphs to compare
    #[arg(long)]
    runs: Option<usize>,
}

#[derive(Serialize)]
struct RunRow {
    run: usize,
    nodes: usize,
    edges: usize,
    total_weight: i64,
    prim_ms: f64,
    kruskal_ms: f64,
    weights_agree: bool,
    faster: Algorithm,
}

#[derive(Serialize)]
struct Report {
    config: ExperimentConfig,
    runs: Vec<RunRow>,
}

fn load_config(cli: &Cli) -> Result<ExperimentConfig> {
    let mut config = match &cli.config {
        Some(path) => {
            let content = fs::read_to_string(path)
                .with_context(|| format!("failed to read config {}", path.display()))?;
            ExperimentConfig::from_json_str(&content)
                .with_context(|| format!("invalid config {}", path.display()))?
        }
        None => ExperimentConfig::default(),
    };

    let graph = &mut config.graph;
    if let Some(nodes) = cli.nodes {
        graph.nodes = nodes;
    }
    if let Some(edges) = cli.edges {
        graph.edges = edges;
    }
    if let Some(min_weight) = cli.min_weight {
        graph.min_weight = min_weight;
    }
    if let Some(max_weight) = cli.max_weight {
        graph.max_weight = max_weight;
    }
    if cli.seed.is_some() {
        graph.seed = cli.seed;
    }
    if let Some(runs) = cli.runs {
        config.runs = runs;
    }

    if config.runs == 0 {
        bail!("--runs must be at least 1");
    }
    Ok(config)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = load_config(&cli)?;

    let mut generator = config.graph.generator();
    let edges = config
        .graph
        .edges
        .min(Graph::<i64>::max_simple_edges(config.graph.nodes));
    let mut runs = Vec::with_capacity(config.runs);
    for run in 1..=config.runs {
        let comparison = run_experiment(&mut generator, &config.graph)
            .with_context(|| format!("experiment {run} failed"))?;
        runs.push(RunRow {
            run,
            nodes: config.graph.nodes,
            edges,
            total_weight: comparison.kruskal.total_weight,
            prim_ms: comparison.prim.elapsed_ms(),
            kruskal_ms: comparison.kruskal.elapsed_ms(),
            weights_agree: comparison.weights_agree(),
            faster: comparison.faster(),
        });
    }

    let report = Report { config, runs };
    let json = serde_json::to_string_pretty(&report).context("failed to serialize report")?;
    println!("{json}");
    Ok(())
}
