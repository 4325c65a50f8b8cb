//! Graph model, construction and generation.
//!
//! - `model`: the immutable [`Graph`] value and its [`Edge`]s
//! - `builder`: caller-owned incremental construction
//! - `generator`: seeded random connected graphs and layout coordinates
//! - `csr`: symmetric adjacency projection used by traversals
//! - `components`: connectivity queries backed by [`DisjointSet`](crate::collections::DisjointSet)

pub mod builder;
pub mod components;
pub mod csr;
pub mod generator;
pub mod model;

pub use builder::GraphBuilder;
pub use components::{component_count, connected_components, is_connected, is_forest};
pub use csr::{Neighbor, WeightedCsr};
pub use generator::{GeneratorConfig, NodePosition, RandomGraphGenerator};
pub use model::{Edge, Graph, Weight};
