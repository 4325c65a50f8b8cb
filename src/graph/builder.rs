//! Caller-owned accumulator for interactively entered edges.

use crate::error::{GraphError, Result};
use crate::graph::model::{validate_edge, Edge, Graph, Weight};

/// Collects edges one at a time and produces validated [`Graph`] snapshots.
///
/// Edges are checked as they are added, so a rejected edge never enters the
/// list. Shrinking the node count with [`set_node_count`](Self::set_node_count)
/// is re-checked by [`build`](Self::build).
///
/// ```
/// use spanning::graph::GraphBuilder;
///
/// let mut builder = GraphBuilder::new(3);
/// builder.add_edge(0, 1, 4).unwrap().add_edge(1, 2, 1).unwrap();
/// let graph = builder.build().unwrap();
/// assert_eq!(graph.edge_count(), 2);
///
/// builder.reset();
/// assert_eq!(builder.edge_count(), 0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct GraphBuilder<W> {
    node_count: usize,
    edges: Vec<Edge<W>>,
}

impl<W: Weight> GraphBuilder<W> {
    /// Starts an empty edge list over `node_count` nodes.
    pub fn new(node_count: usize) -> Self {
        Self {
            node_count,
            edges: Vec::new(),
        }
    }

    /// Appends the edge `(from, to, weight)`.
    ///
    /// # Errors
    ///
    /// Rejects out-of-range endpoints, self loops and unorderable weights.
    pub fn add_edge(&mut self, from: usize, to: usize, weight: W) -> Result<&mut Self> {
        let edge = Edge::new(from, to, weight);
        validate_edge(&edge, self.node_count)?;
        self.edges.push(edge);
        Ok(self)
    }

    /// Drops every accumulated edge; the node count is kept.
    pub fn reset(&mut self) {
        self.edges.clear();
    }

    /// Changes the node count for subsequent edges and builds.
    pub fn set_node_count(&mut self, node_count: usize) {
        self.node_count = node_count;
    }

    /// Node count edges are validated against.
    pub fn node_count(&self) -> usize {
        self.node_count
    }

    /// Number of accumulated edges.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Accumulated edges in insertion order.
    pub fn edges(&self) -> &[Edge<W>] {
        &self.edges
    }

    /// Snapshots the current edges into a graph. The builder stays usable.
    ///
    /// # Errors
    ///
    /// [`GraphError::EmptyGraph`] if the node count is zero, or
    /// [`GraphError::NodeOutOfRange`] if the node count was lowered below an
    /// endpoint already in the list.
    pub fn build(&self) -> Result<Graph<W>> {
        if self.node_count == 0 {
            return Err(GraphError::EmptyGraph);
        }
        Graph::new(self.node_count, self.edges.clone())
    }
}
