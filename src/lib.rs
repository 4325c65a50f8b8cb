//! # `spanning` - Weighted graph generation and minimum spanning trees
//!
//! Generates random or hand-built weighted undirected graphs and computes their
//! minimum spanning tree with two independent engines, timing each run so the
//! two can be compared.
//!
//! ## Engines
//!
//! - **Kruskal**: stable sort of the edge list, then greedy acceptance through a
//!   union-find with path compression and union by rank.
//! - **Prim**: grows a tree from a start node over a binary min-heap frontier.
//!   Stale frontier entries are skipped when popped (lazy deletion).
//!
//! Both return the same [`MstResult`] shape: the selected edges, their total
//! weight and the elapsed wall-clock time.
//!
//! ## Guarantees
//!
//! - A connected graph on `n` nodes yields exactly `n - 1` edges from both
//!   engines, with equal total weight.
//! - A disconnected graph is not an error: Kruskal returns a spanning forest and
//!   Prim the tree of the start node's component.
//! - Engines never modify the input graph and keep no state between calls.
//! - Invalid input (out-of-range nodes, self loops, NaN weights, weights too
//!   large to total, bad start nodes) is reported as a [`GraphError`], not a
//!   panic.
//!
//! ## Stratified design
//!
//! - [`collections`]: disjoint set, min-heap and visited bitset
//! - [`graph`]: the immutable [`Graph`] value, [`GraphBuilder`], the seeded
//!   [`RandomGraphGenerator`] and connectivity queries
//! - [`mst`]: the engines, timing and the comparison harness
//!
//! ## Example
//!
//! ```rust
//! use spanning::{kruskal, prim, Graph};
//!
//! let graph = Graph::from_triples(
//!     4,
//!     [(0, 1, 1), (0, 2, 4), (1, 2, 2), (1, 3, 5), (2, 3, 3)],
//! )
//! .unwrap();
//!
//! let by_prim = prim(&graph, 0).unwrap();
//! let by_kruskal = kruskal(&graph);
//! assert_eq!(by_prim.total_weight, 6);
//! assert_eq!(by_kruskal.total_weight, 6);
//! ```
//!
//! Seeded generation is reproducible:
//!
//! ```rust
//! use spanning::{compare, RandomGraphGenerator};
//!
//! let graph = RandomGraphGenerator::seeded(42).generate(20, 60, 1i64, 20).unwrap();
//! let comparison = compare(&graph).unwrap();
//! assert!(comparison.weights_agree());
//! assert_eq!(comparison.kruskal.edge_count(), 19);
//! ```

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod collections;
pub mod error;
pub mod graph;
pub mod mst;

pub use collections::{DisjointSet, MinHeap, VisitedSet};
pub use error::{GraphError, ParseAlgorithmError, Result};
pub use graph::{
    Edge, GeneratorConfig, Graph, GraphBuilder, NodePosition, RandomGraphGenerator, Weight,
};
pub use mst::{
    compare, kruskal, kruskal_mst, prim, prim_mst, run_experiment, Algorithm, Comparison,
    ExperimentConfig, Kruskal, MstEngine, MstResult, Prim,
};

// Compile-time checks that results can cross thread boundaries.
const _: () = {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Graph<i64>>();
    assert_send_sync::<Graph<f64>>();
    assert_send_sync::<MstResult<i64>>();
    assert_send_sync::<Comparison<f64>>();
};
