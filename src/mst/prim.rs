//! Minimum spanning tree via Prim's algorithm with a lazy-deletion binary heap.
//!
//! The frontier holds candidate edges from the grown tree. Entries whose
//! destination became visited after they were queued stay in the heap and are
//! skipped when popped, instead of being searched for and removed.
//!
//! Time: O((n + m) log m).

use core::cmp::Ordering;

use tracing::{debug, trace};

use crate::collections::{MinHeap, VisitedSet};
use crate::error::{GraphError, Result};
use crate::graph::csr::WeightedCsr;
use crate::graph::model::{cmp_weights, Edge, Graph, Weight};
use crate::mst::engine::Algorithm;
use crate::mst::result::MstResult;
use crate::mst::timing::timed;

/// A frontier entry. Equal weights pop in insertion order.
#[derive(Debug, Clone, Copy)]
struct Candidate<W> {
    weight: W,
    from: usize,
    to: usize,
    seq: usize,
}

impl<W: Weight> Ord for Candidate<W> {
    fn cmp(&self, other: &Self) -> Ordering {
        cmp_weights(&self.weight, &other.weight).then_with(|| self.seq.cmp(&other.seq))
    }
}

impl<W: Weight> PartialOrd for Candidate<W> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<W: Weight> PartialEq for Candidate<W> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<W: Weight> Eq for Candidate<W> {}

struct Frontier<W> {
    heap: MinHeap<Candidate<W>>,
    next_seq: usize,
}

impl<W: Weight> Frontier<W> {
    fn new() -> Self {
        Self {
            heap: MinHeap::new(),
            next_seq: 0,
        }
    }

    /// Queues every edge from `node` to a node not yet in the tree.
    fn expand(&mut self, csr: &WeightedCsr<W>, visited: &VisitedSet, node: usize) {
        for nbr in csr.neighbors(node) {
            if visited.is_visited(nbr.node) {
                continue;
            }
            self.heap.push(Candidate {
                weight: nbr.weight,
                from: node,
                to: nbr.node,
                seq: self.next_seq,
            });
            self.next_seq += 1;
        }
    }

    fn pop(&mut self) -> Option<Candidate<W>> {
        self.heap.pop()
    }
}

/// Prim's minimum spanning tree grown from `start`.
///
/// On a disconnected graph only the component containing `start` is spanned;
/// other nodes are left out without error. Selected edges are oriented
/// tree node → newly reached node.
///
/// # Errors
///
/// [`GraphError::StartNodeOutOfRange`] if `start >= graph.node_count()`.
pub fn prim<W: Weight>(graph: &Graph<W>, start: usize) -> Result<MstResult<W>> {
    let node_count = graph.node_count();
    if start >= node_count {
        return Err(GraphError::StartNodeOutOfRange { start, node_count });
    }

    let (tree, elapsed) = timed(|| grow_tree(graph, start));
    let result = MstResult::new(Algorithm::Prim, tree, elapsed);
    debug!(
        nodes = node_count,
        edges = graph.edge_count(),
        start,
        selected = result.edge_count(),
        total_weight = ?result.total_weight,
        elapsed_ms = result.elapsed_ms(),
        "prim finished"
    );
    Ok(result)
}

/// Prim over a raw node count and edge list.
///
/// # Errors
///
/// Any [`Graph::new`] validation failure, then
/// [`GraphError::StartNodeOutOfRange`].
pub fn prim_mst<W: Weight>(
    node_count: usize,
    edges: &[Edge<W>],
    start: usize,
) -> Result<MstResult<W>> {
    let graph = Graph::new(node_count, edges.to_vec())?;
    prim(&graph, start)
}

fn grow_tree<W: Weight>(graph: &Graph<W>, start: usize) -> Vec<Edge<W>> {
    let target = graph.node_count() - 1;
    let mut tree = Vec::with_capacity(target);
    if target == 0 {
        return tree;
    }

    let csr = WeightedCsr::from_graph(graph);
    let mut visited = VisitedSet::new(graph.node_count());
    let mut frontier = Frontier::new();

    visited.try_visit(start);
    frontier.expand(&csr, &visited, start);

    while tree.len() < target {
        let Some(candidate) = frontier.pop() else {
            break;
        };
        if !visited.try_visit(candidate.to) {
            trace!(from = candidate.from, to = candidate.to, "skipping stale frontier entry");
            continue;
        }
        tree.push(Edge::new(candidate.from, candidate.to, candidate.weight));
        frontier.expand(&csr, &visited, candidate.to);
    }

    tree
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Graph<i64> {
        Graph::from_triples(4, [(0, 1, 1), (0, 2, 4), (1, 2, 2), (1, 3, 5), (2, 3, 3)]).unwrap()
    }

    #[test]
    fn test_prim_sample() {
        let result = prim(&sample(), 0).unwrap();
        assert_eq!(result.total_weight, 6);
        assert_eq!(
            result.mst,
            vec![Edge::new(0, 1, 1), Edge::new(1, 2, 2), Edge::new(2, 3, 3)]
        );
        assert_eq!(result.algorithm, Algorithm::Prim);
    }

    #[test]
    fn test_prim_orients_from_tree() {
        let result = prim(&sample(), 3).unwrap();
        assert_eq!(
            result.mst,
            vec![Edge::new(3, 2, 3), Edge::new(2, 1, 2), Edge::new(1, 0, 1)]
        );
    }

    #[test]
    fn test_prim_ties_pop_in_insertion_order() {
        let graph =
            Graph::from_triples(4, [(0, 2, 1i64), (0, 1, 1), (1, 3, 1), (2, 3, 1)]).unwrap();
        let result = prim(&graph, 0).unwrap();
        assert_eq!(
            result.mst,
            vec![Edge::new(0, 2, 1), Edge::new(0, 1, 1), Edge::new(2, 3, 1)]
        );
    }

    #[test]
    fn test_prim_spans_start_component_only() {
        let graph = Graph::from_triples(5, [(0, 1, 2i64), (3, 4, 1), (4, 2, 7)]).unwrap();
        let left = prim(&graph, 1).unwrap();
        assert_eq!(left.mst, vec![Edge::new(1, 0, 2)]);

        let right = prim(&graph, 2).unwrap();
        assert_eq!(right.edge_count(), 2);
        assert_eq!(right.total_weight, 8);
    }

    #[test]
    fn test_prim_parallel_edges_take_lightest() {
        let graph = Graph::from_triples(2, [(0, 1, 9i64), (1, 0, 4), (0, 1, 6)]).unwrap();
        let result = prim(&graph, 0).unwrap();
        assert_eq!(result.mst, vec![Edge::new(0, 1, 4)]);
    }

    #[test]
    fn test_prim_start_out_of_range() {
        assert_eq!(
            prim(&sample(), 4).unwrap_err(),
            GraphError::StartNodeOutOfRange {
                start: 4,
                node_count: 4
            }
        );
        assert!(prim_mst(4, sample().edges(), 9).is_err());
        assert_eq!(prim_mst(4, sample().edges(), 0).unwrap().total_weight, 6);
    }

    #[test]
    fn test_prim_single_node() {
        let result = prim(&Graph::<f64>::isolated(1).unwrap(), 0).unwrap();
        assert!(result.mst.is_empty());
        assert_eq!(result.total_weight, 0.0);
    }
}
