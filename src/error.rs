//! Error types shared by the graph model, the generator and the MST engines.

use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T> = core::result::Result<T, GraphError>;

/// Failures raised when an input violates a precondition.
///
/// Degenerate but valid inputs (disconnected graphs, parallel edges, a graph
/// with no edges) are never errors.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GraphError {
    /// A graph must contain at least one node.
    #[error("a graph must contain at least one node")]
    EmptyGraph,

    /// The operation needs more nodes than were requested.
    #[error("at least {min} nodes are required, got {nodes}")]
    TooFewNodes {
        /// Requested node count.
        nodes: usize,
        /// Minimum accepted node count.
        min: usize,
    },

    /// The comparison harness needs enough edges to span the graph.
    #[error("at least {min} edges are required, got {edges}")]
    TooFewEdges {
        /// Requested edge count.
        edges: usize,
        /// Minimum accepted edge count.
        min: usize,
    },

    /// `min_weight` was greater than `max_weight`.
    #[error("minimum weight {min} exceeds maximum weight {max}")]
    InvalidWeightRange {
        /// Rendered lower bound.
        min: String,
        /// Rendered upper bound.
        max: String,
    },

    /// An edge endpoint is not a node of the graph.
    #[error("node {node} is out of range for a graph with {node_count} nodes")]
    NodeOutOfRange {
        /// Offending endpoint.
        node: usize,
        /// Node count of the graph.
        node_count: usize,
    },

    /// Edges must join two distinct nodes.
    #[error("self loop on node {node} is not a valid edge")]
    SelfLoop {
        /// Node referenced on both ends.
        node: usize,
    },

    /// The weight cannot be ordered (a float NaN).
    #[error("edge {from} -> {to} has a weight that cannot be ordered")]
    IncomparableWeight {
        /// Edge origin.
        from: usize,
        /// Edge destination.
        to: usize,
    },

    /// The edge weights cannot be totalled in the weight type.
    #[error("edge weights are too large to sum without overflow")]
    WeightOverflow,

    /// Prim's start node is not a node of the graph.
    #[error("start node {start} is out of range for a graph with {node_count} nodes")]
    StartNodeOutOfRange {
        /// Requested start node.
        start: usize,
        /// Node count of the graph.
        node_count: usize,
    },

    /// Layout dimensions must be positive and finite.
    #[error("invalid layout area {width} x {height}")]
    InvalidCanvas {
        /// Requested width.
        width: f64,
        /// Requested height.
        height: f64,
    },
}

/// An algorithm name that is neither `prim` nor `kruskal`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown MST algorithm `{0}`, expected `prim` or `kruskal`")]
pub struct ParseAlgorithmError(pub String);
