//! Weighted undirected graph value type shared by every algorithm.

use core::cmp::Ordering;
use core::fmt;

use num_traits::Zero;
use serde::{Deserialize, Serialize};

use crate::error::{GraphError, Result};

/// Numeric edge weight.
///
/// Implemented for the primitive integers and floats.
pub trait Weight: Copy + PartialOrd + Zero + fmt::Debug {
    /// `self + |other|`, or `None` if the result does not fit in `Self`.
    ///
    /// Floats saturate to infinity instead of failing.
    fn add_magnitude(self, other: Self) -> Option<Self>;

    /// Returns `true` if values can be drawn uniformly from `low..=high`.
    fn is_sampleable_range(low: Self, high: Self) -> bool;
}

macro_rules! impl_signed_weight {
    ($($t:ty),*) => {$(
        impl Weight for $t {
            #[inline]
            fn add_magnitude(self, other: Self) -> Option<Self> {
                self.checked_add(other.checked_abs()?)
            }

            #[inline]
            fn is_sampleable_range(low: Self, high: Self) -> bool {
                low <= high
            }
        }
    )*};
}

macro_rules! impl_unsigned_weight {
    ($($t:ty),*) => {$(
        impl Weight for $t {
            #[inline]
            fn add_magnitude(self, other: Self) -> Option<Self> {
                self.checked_add(other)
            }

            #[inline]
            fn is_sampleable_range(low: Self, high: Self) -> bool {
                low <= high
            }
        }
    )*};
}

macro_rules! impl_float_weight {
    ($($t:ty),*) => {$(
        impl Weight for $t {
            #[inline]
            fn add_magnitude(self, other: Self) -> Option<Self> {
                Some(self + other.abs())
            }

            // The uniform sampler scales by the span over the largest unit draw,
            // which must stay finite.
            #[inline]
            fn is_sampleable_range(low: Self, high: Self) -> bool {
                low <= high
                    && low.is_finite()
                    && high.is_finite()
                    && ((high - low) / (1.0 - <$t>::EPSILON)).is_finite()
            }
        }
    )*};
}

impl_signed_weight!(i8, i16, i32, i64, i128, isize);
impl_unsigned_weight!(u8, u16, u32, u64, u128, usize);
impl_float_weight!(f32, f64);

/// Total order on weights that were accepted by [`Graph::new`].
#[inline]
pub(crate) fn cmp_weights<W: Weight>(a: &W, b: &W) -> Ordering {
    a.partial_cmp(b).unwrap_or(Ordering::Equal)
}

/// Returns `true` if the weight can be ordered against itself.
#[inline]
pub(crate) fn is_comparable<W: Weight>(w: &W) -> bool {
    w.partial_cmp(w).is_some()
}

/// An undirected weighted edge.
///
/// `(u, v, w)` and `(v, u, w)` are the same edge for traversal, but the stored
/// orientation is kept for display.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Edge<W> {
    /// First endpoint.
    pub from: usize,
    /// Second endpoint.
    pub to: usize,
    /// Edge weight.
    pub weight: W,
}

impl<W> Edge<W> {
    /// Creates an edge. No validation happens here; see [`Graph::new`].
    pub const fn new(from: usize, to: usize, weight: W) -> Self {
        Self { from, to, weight }
    }

    /// Endpoints as stored.
    pub const fn endpoints(&self) -> (usize, usize) {
        (self.from, self.to)
    }

    /// Returns `true` if `node` is one of the endpoints.
    pub const fn touches(&self, node: usize) -> bool {
        self.from == node || self.to == node
    }

    /// Returns `true` if both edges join the same pair of nodes, in either orientation.
    pub const fn same_endpoints<V>(&self, other: &Edge<V>) -> bool {
        (self.from == other.from && self.to == other.to)
            || (self.from == other.to && self.to == other.from)
    }
}

impl<W> From<(usize, usize, W)> for Edge<W> {
    fn from((from, to, weight): (usize, usize, W)) -> Self {
        Self { from, to, weight }
    }
}

impl<W: fmt::Display> fmt::Display for Edge<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {} ({})", self.from, self.to, self.weight)
    }
}

/// Checks one edge against a graph of `node_count` nodes.
pub(crate) fn validate_edge<W: Weight>(edge: &Edge<W>, node_count: usize) -> Result<()> {
    for node in [edge.from, edge.to] {
        if node >= node_count {
            return Err(GraphError::NodeOutOfRange { node, node_count });
        }
    }
    if edge.from == edge.to {
        return Err(GraphError::SelfLoop { node: edge.from });
    }
    if !is_comparable(&edge.weight) {
        return Err(GraphError::IncomparableWeight {
            from: edge.from,
            to: edge.to,
        });
    }
    Ok(())
}

/// Checks that the magnitudes of all weights sum without overflow, which bounds
/// the total of every edge subset.
pub(crate) fn check_weight_sum<W: Weight>(edges: &[Edge<W>]) -> Result<()> {
    edges
        .iter()
        .try_fold(W::zero(), |acc, edge| acc.add_magnitude(edge.weight))
        .map(|_| ())
        .ok_or(GraphError::WeightOverflow)
}

/// A node count plus an ordered edge list.
///
/// Every endpoint lies in `0..node_count`, no edge is a self loop and every
/// weight is orderable. The weight magnitudes sum without overflow, so any
/// subset total is representable. Parallel edges are allowed. The value is read-only once
/// built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawGraph<W>", bound(deserialize = "W: Weight + Deserialize<'de>"))]
pub struct Graph<W> {
    node_count: usize,
    edges: Vec<Edge<W>>,
}

impl<W: Weight> Graph<W> {
    /// Validates and builds a graph.
    ///
    /// # Errors
    ///
    /// [`GraphError::EmptyGraph`] for `node_count == 0`, otherwise the first
    /// offending edge's [`NodeOutOfRange`](GraphError::NodeOutOfRange),
    /// [`SelfLoop`](GraphError::SelfLoop) or
    /// [`IncomparableWeight`](GraphError::IncomparableWeight), and
    /// [`WeightOverflow`](GraphError::WeightOverflow) if the weights are too
    /// large to total.
    pub fn new(node_count: usize, edges: Vec<Edge<W>>) -> Result<Self> {
        if node_count == 0 {
            return Err(GraphError::EmptyGraph);
        }
        for edge in &edges {
            validate_edge(edge, node_count)?;
        }
        check_weight_sum(&edges)?;
        Ok(Self { node_count, edges })
    }

    /// Builds a graph from `(from, to, weight)` triples.
    ///
    /// # Errors
    ///
    /// Same as [`Graph::new`].
    pub fn from_triples<I>(node_count: usize, triples: I) -> Result<Self>
    where
        I: IntoIterator<Item = (usize, usize, W)>,
    {
        Self::new(node_count, triples.into_iter().map(Edge::from).collect())
    }

    /// A graph with nodes and no edges.
    ///
    /// # Errors
    ///
    /// [`GraphError::EmptyGraph`] for `node_count == 0`.
    pub fn isolated(node_count: usize) -> Result<Self> {
        Self::new(node_count, Vec::new())
    }

    /// Sum of all edge weights. Construction bounds the magnitudes, so this
    /// cannot overflow.
    pub fn total_weight(&self) -> W {
        self.edges
            .iter()
            .fold(W::zero(), |acc, edge| acc + edge.weight)
    }
}

impl<W> Graph<W> {
    /// Assembles a graph whose invariants the caller has already checked.
    pub(crate) fn from_parts_unchecked(node_count: usize, edges: Vec<Edge<W>>) -> Self {
        Self { node_count, edges }
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.node_count
    }

    /// Number of edges, counting parallel edges separately.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Edges in insertion order.
    pub fn edges(&self) -> &[Edge<W>] {
        &self.edges
    }

    /// Iterates over the node indices.
    pub fn nodes(&self) -> core::ops::Range<usize> {
        0..self.node_count
    }

    /// Maximum number of distinct undirected pairs on `node_count` nodes.
    pub const fn max_simple_edges(node_count: usize) -> usize {
        node_count.saturating_mul(node_count.saturating_sub(1)) / 2
    }

    /// Consumes the graph, returning its edge list.
    pub fn into_edges(self) -> Vec<Edge<W>> {
        self.edges
    }
}

#[derive(Deserialize)]
struct RawGraph<W> {
    node_count: usize,
    edges: Vec<Edge<W>>,
}

impl<W: Weight> TryFrom<RawGraph<W>> for Graph<W> {
    type Error = GraphError;

    fn try_from(raw: RawGraph<W>) -> Result<Self> {
        Self::new(raw.node_count, raw.edges)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_graph_rejects_bad_edges() {
        assert_eq!(Graph::<i64>::isolated(0), Err(GraphError::EmptyGraph));
        assert_eq!(
            Graph::from_triples(3, [(0, 3, 1i64)]),
            Err(GraphError::NodeOutOfRange {
                node: 3,
                node_count: 3
            })
        );
        assert_eq!(
            Graph::from_triples(3, [(1, 1, 1i64)]),
            Err(GraphError::SelfLoop { node: 1 })
        );
        assert_eq!(
            Graph::from_triples(2, [(0, 1, f64::NAN)]),
            Err(GraphError::IncomparableWeight { from: 0, to: 1 })
        );
    }

    #[test]
    fn test_graph_rejects_weights_that_overflow_the_total() {
        assert_eq!(
            Graph::from_triples(3, [(0, 1, i64::MAX - 1), (1, 2, i64::MAX)]),
            Err(GraphError::WeightOverflow)
        );
        // Opposite signs cancel in the total but not in the magnitude bound.
        assert_eq!(
            Graph::from_triples(3, [(0, 1, i64::MAX), (1, 2, -5)]),
            Err(GraphError::WeightOverflow)
        );
        assert_eq!(
            Graph::from_triples(2, [(0, 1, i64::MIN)]),
            Err(GraphError::WeightOverflow)
        );
        assert_eq!(
            Graph::from_triples(3, [(0, 1, u8::MAX), (1, 2, 1)]),
            Err(GraphError::WeightOverflow)
        );

        let at_limit = Graph::from_triples(3, [(0, 1, i64::MAX - 1), (1, 2, 1)]).unwrap();
        assert_eq!(at_limit.total_weight(), i64::MAX);

        let huge = Graph::from_triples(3, [(0, 1, f64::MAX), (1, 2, f64::MAX)]).unwrap();
        assert_eq!(huge.total_weight(), f64::INFINITY);
    }

    #[test]
    fn test_sampleable_ranges() {
        assert!(i64::is_sampleable_range(i64::MIN, i64::MAX));
        assert!(!i64::is_sampleable_range(2, 1));
        assert!(f64::is_sampleable_range(-1.0, 1.0));
        assert!(!f64::is_sampleable_range(-f64::MAX, f64::MAX));
        assert!(!f64::is_sampleable_range(f64::NEG_INFINITY, 0.0));
        assert!(!f64::is_sampleable_range(f64::NAN, 1.0));
        assert!(!f32::is_sampleable_range(-f32::MAX, f32::MAX));
    }

    #[test]
    fn test_graph_keeps_orientation_and_parallel_edges() {
        let graph = Graph::from_triples(3, [(2, 0, 4i64), (0, 2, 4), (1, 0, -3)]).unwrap();
        assert_eq!(graph.node_count(), 3);
        assert_eq!(graph.edge_count(), 3);
        assert_eq!(graph.edges()[0].endpoints(), (2, 0));
        assert!(graph.edges()[0].same_endpoints(&graph.edges()[1]));
        assert_eq!(graph.total_weight(), 5);
        assert_eq!(graph.edges()[2].to_string(), "1 -> 0 (-3)");
    }

    #[test]
    fn test_max_simple_edges() {
        assert_eq!(Graph::<i64>::max_simple_edges(1), 0);
        assert_eq!(Graph::<i64>::max_simple_edges(2), 1);
        assert_eq!(Graph::<i64>::max_simple_edges(10), 45);
    }

    #[test]
    fn test_graph_json_round_trip_revalidates() {
        let graph = Graph::from_triples(2, [(0, 1, 7i64)]).unwrap();
        let json = serde_json::to_string(&graph).unwrap();
        let back: Graph<i64> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, graph);

        let bad = r#"{"node_count":2,"edges":[{"from":0,"to":5,"weight":1}]}"#;
        assert!(serde_json::from_str::<Graph<i64>>(bad).is_err());
    }
}
