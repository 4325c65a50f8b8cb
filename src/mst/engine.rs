//! The seam shared by both MST engines.

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ParseAlgorithmError, Result};
use crate::graph::model::{Graph, Weight};
use crate::mst::kruskal::kruskal;
use crate::mst::prim::prim;
use crate::mst::result::MstResult;

/// Identifies which engine produced a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    /// Prim's algorithm.
    Prim,
    /// Kruskal's algorithm.
    Kruskal,
}

impl Algorithm {
    /// Both engines, in comparison order.
    pub const ALL: [Algorithm; 2] = [Algorithm::Prim, Algorithm::Kruskal];

    /// Lowercase name.
    pub const fn name(self) -> &'static str {
        match self {
            Algorithm::Prim => "prim",
            Algorithm::Kruskal => "kruskal",
        }
    }

    /// Runs this engine with its default settings (Prim starts at node 0).
    ///
    /// # Errors
    ///
    /// Propagates the engine's error.
    pub fn compute<W: Weight>(self, graph: &Graph<W>) -> Result<MstResult<W>> {
        match self {
            Algorithm::Prim => Prim::default().compute(graph),
            Algorithm::Kruskal => Kruskal.compute(graph),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = ParseAlgorithmError;

    fn from_str(s: &str) -> core::result::Result<Self, Self::Err> {
        Algorithm::ALL
            .into_iter()
            .find(|a| a.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseAlgorithmError(s.to_owned()))
    }
}

/// An algorithm that turns a graph into an [`MstResult`].
pub trait MstEngine<W: Weight> {
    /// Which algorithm this engine runs.
    fn algorithm(&self) -> Algorithm;

    /// Computes the tree.
    ///
    /// # Errors
    ///
    /// Engine-specific precondition failures.
    fn compute(&self, graph: &Graph<W>) -> Result<MstResult<W>>;
}

/// Prim's engine with a configurable start node.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Prim {
    /// Node the tree is grown from.
    pub start: usize,
}

impl Prim {
    /// Engine starting at `start`.
    pub const fn from_node(start: usize) -> Self {
        Self { start }
    }
}

impl<W: Weight> MstEngine<W> for Prim {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Prim
    }

    fn compute(&self, graph: &Graph<W>) -> Result<MstResult<W>> {
        prim(graph, self.start)
    }
}

/// Kruskal's engine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Kruskal;

impl<W: Weight> MstEngine<W> for Kruskal {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Kruskal
    }

    fn compute(&self, graph: &Graph<W>) -> Result<MstResult<W>> {
        Ok(kruskal(graph))
    }
}
