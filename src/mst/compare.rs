//! Side-by-side runs of both engines on the same graph.

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::{GraphError, Result};
use crate::graph::generator::{GeneratorConfig, RandomGraphGenerator, MIN_GENERATED_NODES};
use crate::graph::model::{Graph, Weight};
use crate::mst::engine::Algorithm;
use crate::mst::kruskal::kruskal;
use crate::mst::prim::prim;
use crate::mst::result::MstResult;

/// Results of Prim (from node 0) and Kruskal on one graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comparison<W> {
    /// Prim's result.
    pub prim: MstResult<W>,
    /// Kruskal's result.
    pub kruskal: MstResult<W>,
}

impl<W: Weight> Comparison<W> {
    /// Returns `true` if both totals are equal.
    ///
    /// On a connected graph the MST weight is unique, so a mismatch means a
    /// bug. Float totals are summed in selection order and may differ in the
    /// last bits. On a disconnected graph Prim only spans one component and the
    /// totals legitimately differ.
    pub fn weights_agree(&self) -> bool {
        self.prim.total_weight == self.kruskal.total_weight
    }

    /// The engine with the smaller elapsed time; Prim wins ties.
    pub fn faster(&self) -> Algorithm {
        if self.prim.elapsed <= self.kruskal.elapsed {
            Algorithm::Prim
        } else {
            Algorithm::Kruskal
        }
    }

    /// Result of one engine.
    pub fn result(&self, algorithm: Algorithm) -> &MstResult<W> {
        match algorithm {
            Algorithm::Prim => &self.prim,
            Algorithm::Kruskal => &self.kruskal,
        }
    }
}

/// Runs both engines on `graph`.
///
/// # Errors
///
/// None in practice: node 0 always exists in a [`Graph`]. The `Result` keeps
/// the signature uniform with the engines.
pub fn compare<W: Weight>(graph: &Graph<W>) -> Result<Comparison<W>> {
    let comparison = Comparison {
        prim: prim(graph, 0)?,
        kruskal: kruskal(graph),
    };
    if !comparison.weights_agree() {
        warn!(
            prim = ?comparison.prim.total_weight,
            kruskal = ?comparison.kruskal.total_weight,
            "MST totals differ"
        );
    }
    Ok(comparison)
}

/// A batch of comparison runs on freshly generated graphs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExperimentConfig {
    /// Shape of every generated graph.
    pub graph: GeneratorConfig,
    /// Number of graphs to generate and compare.
    pub runs: usize,
}

impl Default for ExperimentConfig {
    fn default() -> Self {
        Self {
            graph: GeneratorConfig::default(),
            runs: 1,
        }
    }
}

impl ExperimentConfig {
    /// Parses a JSON document; missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns the `serde_json` error for malformed input.
    pub fn from_json_str(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}

/// Generates one graph and compares both engines on it.
///
/// The comparison harness requires a spanning edge budget up front, unlike the
/// generator, which would silently raise it.
///
/// # Errors
///
/// [`GraphError::TooFewNodes`] for fewer than 2 nodes,
/// [`GraphError::TooFewEdges`] for fewer than `nodes - 1` edges, then any
/// generator error.
pub fn run_experiment<R: Rng>(
    generator: &mut RandomGraphGenerator<R>,
    config: &GeneratorConfig,
) -> Result<Comparison<i64>> {
    if config.nodes < MIN_GENERATED_NODES {
        return Err(GraphError::TooFewNodes {
            nodes: config.nodes,
            min: MIN_GENERATED_NODES,
        });
    }
    let min_edges = config.nodes - 1;
    if config.edges < min_edges {
        return Err(GraphError::TooFewEdges {
            edges: config.edges,
            min: min_edges,
        });
    }

    let graph = generator.generate_from_config(config)?;
    let comparison = compare(&graph)?;
    info!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        prim_ms = comparison.prim.elapsed_ms(),
        kruskal_ms = comparison.kruskal.elapsed_ms(),
        "experiment complete"
    );
    Ok(comparison)
}
