//! Uniform result shape returned by every engine.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::graph::components::is_forest;
use crate::graph::model::{Edge, Weight};
use crate::mst::engine::Algorithm;
use crate::mst::timing::as_millis_f64;

/// Selected tree edges, their total weight and the time the engine took.
///
/// For a connected graph `mst` has exactly `n - 1` edges. A disconnected graph
/// yields fewer, which is a valid result: Kruskal returns a spanning forest and
/// Prim the tree of the start node's component.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MstResult<W> {
    /// Engine that produced the result.
    pub algorithm: Algorithm,
    /// Selected edges in selection order, with their stored orientation.
    pub mst: Vec<Edge<W>>,
    /// Sum of the selected weights.
    pub total_weight: W,
    /// Wall-clock time of the whole computation, setup included.
    pub elapsed: Duration,
}

impl<W: Weight> MstResult<W> {
    pub(crate) fn new(algorithm: Algorithm, mst: Vec<Edge<W>>, elapsed: Duration) -> Self {
        let total_weight = mst.iter().fold(W::zero(), |acc, e| acc + e.weight);
        Self {
            algorithm,
            mst,
            total_weight,
            elapsed,
        }
    }

    /// Number of selected edges.
    pub fn edge_count(&self) -> usize {
        self.mst.len()
    }

    /// Elapsed time in fractional milliseconds.
    pub fn elapsed_ms(&self) -> f64 {
        as_millis_f64(self.elapsed)
    }

    /// Returns `true` if the edges are a cycle-free tree over all `node_count` nodes.
    pub fn is_spanning_tree(&self, node_count: usize) -> bool {
        self.mst.len() == node_count.saturating_sub(1) && is_forest(node_count, &self.mst)
    }

    /// Returns `true` if an edge between `a` and `b` was selected, in either orientation.
    pub fn contains_edge(&self, a: usize, b: usize) -> bool {
        let query = Edge::new(a, b, ());
        self.mst.iter().any(|e| e.same_endpoints(&query))
    }

    /// Compares tree contents and weight, ignoring timing.
    pub fn same_tree(&self, other: &Self) -> bool {
        self.mst == other.mst && self.total_weight == other.total_weight
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_result_totals_and_checks() {
        let result = MstResult::new(
            Algorithm::Kruskal,
            vec![Edge::new(0, 1, 2i64), Edge::new(2, 1, 3)],
            Duration::from_millis(2),
        );
        assert_eq!(result.total_weight, 5);
        assert_eq!(result.edge_count(), 2);
        assert_eq!(result.elapsed_ms(), 2.0);
        assert!(result.is_spanning_tree(3));
        assert!(!result.is_spanning_tree(4));
        assert!(result.contains_edge(1, 2));
        assert!(result.contains_edge(2, 1));
        assert!(!result.contains_edge(0, 2));
    }

    #[test]
    fn test_empty_result() {
        let result = MstResult::<f64>::new(Algorithm::Prim, Vec::new(), Duration::ZERO);
        assert_eq!(result.total_weight, 0.0);
        assert!(result.is_spanning_tree(1));
    }

    #[test]
    fn test_result_serializes_for_renderers() {
        let result = MstResult::new(Algorithm::Prim, vec![Edge::new(0, 1, 4i64)], Duration::ZERO);
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["algorithm"], "prim");
        assert_eq!(json["total_weight"], 4);
        assert_eq!(json["mst"][0]["from"], 0);
    }
}
