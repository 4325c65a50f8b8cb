//! Minimum spanning tree engines.
//!
//! This module provides:
//! - Kruskal (stable sort + union-find)
//! - Prim (binary heap frontier with lazy deletion)
//! - A uniform [`MstResult`] with wall-clock timing
//! - A comparison harness running both on the same graph

pub mod compare;
pub mod engine;
pub mod kruskal;
pub mod prim;
pub mod result;
pub mod timing;

pub use compare::{compare, run_experiment, Comparison, ExperimentConfig};
pub use engine::{Algorithm, Kruskal, MstEngine, Prim};
pub use kruskal::{kruskal, kruskal_mst};
pub use prim::{prim, prim_mst};
pub use result::MstResult;
pub use timing::{timed, Stopwatch};
