//! Connectivity queries over a [`Graph`].

use crate::collections::DisjointSet;
use crate::graph::model::{Edge, Graph};

fn union_all<W>(node_count: usize, edges: &[Edge<W>]) -> DisjointSet {
    let mut ds = DisjointSet::new(node_count);
    for edge in edges {
        ds.union(edge.from, edge.to);
    }
    ds
}

/// Computes the connected components of the graph.
///
/// Returns a vector where the index corresponds to the node ID,
/// and the value is the component ID (representative node ID).
pub fn connected_components<W>(graph: &Graph<W>) -> Vec<usize> {
    let ds = union_all(graph.node_count(), graph.edges());
    graph.nodes().map(|u| ds.find(u)).collect()
}

/// Number of connected components; isolated nodes count individually.
pub fn component_count<W>(graph: &Graph<W>) -> usize {
    union_all(graph.node_count(), graph.edges()).component_count()
}

/// Returns `true` if every node is reachable from every other node.
pub fn is_connected<W>(graph: &Graph<W>) -> bool {
    component_count(graph) == 1
}

/// Returns `true` if `edges` form a forest on `node_count` nodes (no edge closes a cycle).
///
/// Edges with an endpoint outside `0..node_count` make the answer `false`.
pub fn is_forest<W>(node_count: usize, edges: &[Edge<W>]) -> bool {
    let mut ds = DisjointSet::new(node_count);
    edges
        .iter()
        .all(|e| e.from < node_count && e.to < node_count && ds.union(e.from, e.to))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_components() {
        let graph = Graph::from_triples(5, [(0, 1, 1i64), (3, 4, 1)]).unwrap();
        let labels = connected_components(&graph);
        assert_eq!(labels[0], labels[1]);
        assert_eq!(labels[3], labels[4]);
        assert_ne!(labels[0], labels[2]);
        assert_ne!(labels[0], labels[3]);
        assert_eq!(component_count(&graph), 3);
        assert!(!is_connected(&graph));
    }

    #[test]
    fn test_single_node_is_connected() {
        assert!(is_connected(&Graph::<i64>::isolated(1).unwrap()));
    }

    #[test]
    fn test_is_forest() {
        let path = [Edge::new(0, 1, 1), Edge::new(1, 2, 1)];
        assert!(is_forest(3, &path));

        let cycle = [Edge::new(0, 1, 1), Edge::new(1, 2, 1), Edge::new(2, 0, 1)];
        assert!(!is_forest(3, &cycle));
        assert!(!is_forest(2, &path));
    }
}
