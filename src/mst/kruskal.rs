//! Minimum spanning tree via Kruskal's algorithm.
//!
//! Edges are stable-sorted by weight and greedily accepted whenever they join
//! two different components of a fresh [`DisjointSet`].
//!
//! Time: O(m log m) for sorting + O(m α(n)) for union-find.

use crate::collections::DisjointSet;
use crate::error::Result;
use crate::graph::model::{cmp_weights, Edge, Graph, Weight};
use crate::mst::engine::Algorithm;
use crate::mst::result::MstResult;
use crate::mst::timing::timed;
use tracing::debug;

/// Kruskal's minimum spanning tree (or forest, for a disconnected graph).
///
/// Ties between equal weights keep edge-list order. The graph is not modified.
pub fn kruskal<W: Weight>(graph: &Graph<W>) -> MstResult<W> {
    let (tree, elapsed) = timed(|| select_edges(graph.node_count(), graph.edges()));
    let result = MstResult::new(Algorithm::Kruskal, tree, elapsed);
    debug!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        selected = result.edge_count(),
        total_weight = ?result.total_weight,
        elapsed_ms = result.elapsed_ms(),
        "kruskal finished"
    );
    result
}

/// Kruskal over a raw node count and edge list.
///
/// # Errors
///
/// Any [`Graph::new`] validation failure.
pub fn kruskal_mst<W: Weight>(node_count: usize, edges: &[Edge<W>]) -> Result<MstResult<W>> {
    let graph = Graph::new(node_count, edges.to_vec())?;
    Ok(kruskal(&graph))
}

fn select_edges<W: Weight>(node_count: usize, edges: &[Edge<W>]) -> Vec<Edge<W>> {
    let target = node_count.saturating_sub(1);
    let mut tree = Vec::with_capacity(target);
    if target == 0 {
        return tree;
    }

    let mut sorted = edges.to_vec();
    sorted.sort_by(|a, b| cmp_weights(&a.weight, &b.weight));

    let mut ds = DisjointSet::new(node_count);
    for edge in sorted {
        if ds.union(edge.from, edge.to) {
            tree.push(edge);
            // Stop when we have n-1 edges
            if tree.len() == target {
                break;
            }
        }
    }

    tree
}
