//! Random connected graph generation and layout coordinates.
//!
//! The entropy source is injected, so a seeded generator reproduces the exact
//! same graph and the same layout on every run.

use rand::distributions::uniform::SampleUniform;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{GraphError, Result};
use crate::graph::model::{check_weight_sum, Edge, Graph, Weight};

/// Distance kept between generated positions and the layout border.
pub const LAYOUT_MARGIN: f64 = 30.0;

/// Smallest node count [`RandomGraphGenerator::generate`] accepts.
pub const MIN_GENERATED_NODES: usize = 2;

/// Layout coordinates of a node, consumed by rendering collaborators.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NodePosition {
    /// Horizontal coordinate.
    pub x: f64,
    /// Vertical coordinate.
    pub y: f64,
}

/// Parameters for one generated graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Node count, at least 2.
    pub nodes: usize,
    /// Requested edge count; clamped to the number of distinct pairs.
    pub edges: usize,
    /// Inclusive lower weight bound.
    pub min_weight: i64,
    /// Inclusive upper weight bound.
    pub max_weight: i64,
    /// Seed for a reproducible graph; `None` draws from OS entropy.
    pub seed: Option<u64>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            nodes: 10,
            edges: 15,
            min_weight: 1,
            max_weight: 20,
            seed: None,
        }
    }
}

impl GeneratorConfig {
    /// Parses a JSON document; missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns the `serde_json` error for malformed input.
    pub fn from_json_str(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// A generator seeded from `seed`, or from OS entropy when unset.
    pub fn generator(&self) -> RandomGraphGenerator<StdRng> {
        match self.seed {
            Some(seed) => RandomGraphGenerator::seeded(seed),
            None => RandomGraphGenerator::from_entropy(),
        }
    }
}

/// Produces connected weighted graphs from an owned entropy source.
#[derive(Debug, Clone)]
pub struct RandomGraphGenerator<R> {
    rng: R,
}

impl RandomGraphGenerator<StdRng> {
    /// A reproducible generator.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    /// A generator seeded from the operating system.
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }
}

impl<R: Rng> RandomGraphGenerator<R> {
    /// Wraps any entropy source.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Mutable access to the entropy source.
    pub fn rng_mut(&mut self) -> &mut R {
        &mut self.rng
    }

    /// Generates a connected graph with `n` nodes and `min(m, n(n-1)/2)` edges.
    ///
    /// A random spanning tree is laid down first (node `i` joins a uniformly
    /// chosen earlier node), so the result is connected even when `m < n - 1`;
    /// in that case the graph has exactly `n - 1` edges. Further edges join
    /// uniformly chosen distinct endpoints and may duplicate existing pairs.
    /// Weights are uniform in `[min_weight, max_weight]`.
    ///
    /// Requesting more edges than distinct pairs exist is not an error: `m` is
    /// silently reduced and a warning is logged.
    ///
    /// # Errors
    ///
    /// [`GraphError::TooFewNodes`] if `n < 2`,
    /// [`GraphError::InvalidWeightRange`] if `min_weight > max_weight`, a bound
    /// cannot be ordered, or a float range is not finite,
    /// [`GraphError::WeightOverflow`] if the drawn weights are too large to total.
    pub fn generate<W>(
        &mut self,
        n: usize,
        m: usize,
        min_weight: W,
        max_weight: W,
    ) -> Result<Graph<W>>
    where
        W: Weight + SampleUniform,
    {
        if n < MIN_GENERATED_NODES {
            return Err(GraphError::TooFewNodes {
                nodes: n,
                min: MIN_GENERATED_NODES,
            });
        }
        // Unordered (NaN) bounds fail this check too.
        if !W::is_sampleable_range(min_weight, max_weight) {
            return Err(GraphError::InvalidWeightRange {
                min: format!("{min_weight:?}"),
                max: format!("{max_weight:?}"),
            });
        }

        let max_edges = Graph::<W>::max_simple_edges(n);
        let target = if m > max_edges {
            warn!(requested = m, clamped = max_edges, "edge count clamped to distinct pairs");
            max_edges
        } else {
            m
        };

        let mut edges = Vec::with_capacity(target.max(n - 1));

        for i in 1..n {
            let parent = self.rng.gen_range(0..i);
            let weight = self.rng.gen_range(min_weight..=max_weight);
            edges.push(Edge::new(parent, i, weight));
        }

        while edges.len() < target {
            let u = self.rng.gen_range(0..n);
            let v = self.rng.gen_range(0..n);
            if u == v {
                continue;
            }
            let weight = self.rng.gen_range(min_weight..=max_weight);
            edges.push(Edge::new(u, v, weight));
        }

        check_weight_sum(&edges)?;

        debug!(nodes = n, edges = edges.len(), "generated random graph");
        // Endpoints are drawn from `0..n` with `u != v` and the weights come from a
        // range whose bounds were ordered above.
        Ok(Graph::from_parts_unchecked(n, edges))
    }

    /// Generates a graph with integer weights from a config.
    ///
    /// The config's `seed` is ignored here; the generator's own source is used.
    ///
    /// # Errors
    ///
    /// Same as [`generate`](Self::generate).
    pub fn generate_from_config(&mut self, config: &GeneratorConfig) -> Result<Graph<i64>> {
        self.generate(config.nodes, config.edges, config.min_weight, config.max_weight)
    }

    /// Random layout coordinates for `n` nodes inside a `width` x `height` area.
    ///
    /// Coordinates keep [`LAYOUT_MARGIN`] from every border. When a dimension is
    /// too small for the margin all nodes are centered along it.
    ///
    /// # Errors
    ///
    /// [`GraphError::InvalidCanvas`] if a dimension is not positive and finite.
    pub fn node_positions(
        &mut self,
        n: usize,
        width: f64,
        height: f64,
    ) -> Result<Vec<NodePosition>> {
        let valid = |d: f64| d.is_finite() && d > 0.0;
        if !valid(width) || !valid(height) {
            return Err(GraphError::InvalidCanvas { width, height });
        }

        let positions = (0..n)
            .map(|_| NodePosition {
                x: self.coordinate(width),
                y: self.coordinate(height),
            })
            .collect();
        Ok(positions)
    }

    fn coordinate(&mut self, extent: f64) -> f64 {
        let span = extent - 2.0 * LAYOUT_MARGIN;
        if span <= 0.0 {
            return extent / 2.0;
        }
        self.rng.gen::<f64>() * span + LAYOUT_MARGIN
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::components::is_connected;

    #[test]
    fn test_seeded_generation_is_reproducible() {
        let a = RandomGraphGenerator::seeded(7).generate(12, 30, 1i64, 20).unwrap();
        let b = RandomGraphGenerator::seeded(7).generate(12, 30, 1i64, 20).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_spanning_tree_prefix() {
        let graph = RandomGraphGenerator::seeded(1).generate(8, 20, 1i64, 5).unwrap();
        for (i, edge) in graph.edges().iter().take(7).enumerate() {
            assert_eq!(edge.to, i + 1);
            assert!(edge.from <= i);
        }
        assert!(graph.edges().iter().all(|e| (1..=5).contains(&e.weight)));
        assert!(is_connected(&graph));
    }

    #[test]
    fn test_edge_count_is_clamped() {
        let graph = RandomGraphGenerator::seeded(3).generate(4, 100, 1i64, 9).unwrap();
        assert_eq!(graph.edge_count(), 6);
    }

    #[test]
    fn test_fewer_edges_than_tree_still_spans() {
        let graph = RandomGraphGenerator::seeded(3).generate(6, 0, 1i64, 9).unwrap();
        assert_eq!(graph.edge_count(), 5);
        assert!(is_connected(&graph));
    }

    #[test]
    fn test_rejects_bad_requests() {
        let mut generator = RandomGraphGenerator::seeded(0);
        assert_eq!(
            generator.generate(1, 0, 1i64, 2),
            Err(GraphError::TooFewNodes { nodes: 1, min: 2 })
        );
        assert_eq!(
            generator.generate(3, 3, 5i64, 1),
            Err(GraphError::InvalidWeightRange {
                min: "5".into(),
                max: "1".into()
            })
        );
        assert!(generator.generate(3, 3, f64::NAN, 1.0).is_err());
        assert_eq!(
            generator.generate(3, 3, -f64::MAX, f64::MAX),
            Err(GraphError::InvalidWeightRange {
                min: format!("{:?}", -f64::MAX),
                max: format!("{:?}", f64::MAX),
            })
        );
        assert!(matches!(
            generator.generate(3, 3, f64::NEG_INFINITY, 0.0),
            Err(GraphError::InvalidWeightRange { .. })
        ));
        assert_eq!(
            generator.generate(4, 6, i64::MAX - 10, i64::MAX),
            Err(GraphError::WeightOverflow)
        );
    }

    #[test]
    fn test_full_integer_range_is_accepted() {
        let graph = RandomGraphGenerator::seeded(2)
            .generate(2, 1, i64::MIN + 1, i64::MAX)
            .unwrap();
        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn test_float_weights_stay_in_range() {
        let graph = RandomGraphGenerator::seeded(11)
            .generate(10, 25, -2.5f64, 2.5)
            .unwrap();
        assert!(graph.edges().iter().all(|e| (-2.5..=2.5).contains(&e.weight)));
    }

    #[test]
    fn test_node_positions_respect_margin() {
        let mut generator = RandomGraphGenerator::seeded(5);
        let positions = generator.node_positions(50, 800.0, 600.0).unwrap();
        assert_eq!(positions.len(), 50);
        for p in &positions {
            assert!((30.0..770.0).contains(&p.x));
            assert!((30.0..570.0).contains(&p.y));
        }

        let narrow = generator.node_positions(3, 40.0, 600.0).unwrap();
        assert!(narrow.iter().all(|p| p.x == 20.0));

        assert!(generator.node_positions(3, 0.0, 10.0).is_err());
        assert!(generator.node_positions(3, 10.0, f64::INFINITY).is_err());
    }

    #[test]
    fn test_config_defaults_from_json() {
        let config = GeneratorConfig::from_json_str(r#"{"nodes": 6, "seed": 9}"#).unwrap();
        assert_eq!(config.nodes, 6);
        assert_eq!(config.edges, 15);
        assert_eq!(config.min_weight, 1);
        assert_eq!(config.max_weight, 20);

        let graph = config.generator().generate_from_config(&config).unwrap();
        assert_eq!(graph.edge_count(), 15);
        assert_eq!(graph.node_count(), 6);
    }
}
