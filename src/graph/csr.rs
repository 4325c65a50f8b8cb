//! Weighted CSR (compressed sparse row) adjacency projection of a [`Graph`].
//!
//! Memory layout:
//! - `offsets`: `Vec<usize>` of length `n + 1` (row offsets)
//! - `neighbors`: contiguous `(target, weight)` pairs for each row
//!
//! Every undirected edge is registered at both endpoints, so the neighbor list
//! holds `2 * m` entries. Within a row, neighbors keep edge-list order.

use crate::graph::model::Graph;

/// An outgoing half of an undirected edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Neighbor<W> {
    /// Node at the other end.
    pub node: usize,
    /// Weight of the edge.
    pub weight: W,
}

/// Read-only adjacency rows built once per algorithm run.
///
/// ### Performance Characteristics
/// | Operation | Complexity |
/// |-----------|------------|
/// | `from_graph` | \(O(n + m)\) |
/// | `neighbors` | \(O(1)\) |
/// | `degree` | \(O(1)\) |
#[derive(Debug, Clone)]
pub struct WeightedCsr<W> {
    offsets: Vec<usize>,
    neighbors: Vec<Neighbor<W>>,
}

impl<W: Copy> WeightedCsr<W> {
    /// Projects the graph's edge list into symmetric adjacency rows.
    pub fn from_graph(graph: &Graph<W>) -> Self {
        let mut rows: Vec<Vec<Neighbor<W>>> = vec![Vec::new(); graph.node_count()];
        for edge in graph.edges() {
            rows[edge.from].push(Neighbor {
                node: edge.to,
                weight: edge.weight,
            });
            rows[edge.to].push(Neighbor {
                node: edge.from,
                weight: edge.weight,
            });
        }
        Self::from_rows(rows)
    }

    // Packs per-node neighbor rows into CSR form.
    fn from_rows(rows: Vec<Vec<Neighbor<W>>>) -> Self {
        let mut offsets = Vec::with_capacity(rows.len() + 1);
        offsets.push(0);

        let mut total = 0usize;
        for row in &rows {
            total = total.saturating_add(row.len());
            offsets.push(total);
        }

        let mut neighbors = Vec::with_capacity(total);
        for row in rows {
            neighbors.extend(row);
        }

        Self { offsets, neighbors }
    }
}

impl<W> WeightedCsr<W> {
    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        // `offsets` is length `n + 1` by construction.
        self.offsets.len().saturating_sub(1)
    }

    /// Number of stored half-edges (twice the edge count).
    pub fn half_edge_count(&self) -> usize {
        self.neighbors.len()
    }

    /// Neighbors of `node` in edge-list order.
    ///
    /// # Panics
    ///
    /// Panics if `node >= self.node_count()`.
    #[inline]
    pub fn neighbors(&self, node: usize) -> &[Neighbor<W>] {
        &self.neighbors[self.offsets[node]..self.offsets[node + 1]]
    }

    /// Number of edges incident to `node`, counting parallel edges.
    #[inline]
    pub fn degree(&self, node: usize) -> usize {
        self.offsets[node + 1] - self.offsets[node]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_csr_is_symmetric() {
        let graph =
            Graph::from_triples(4, [(0, 1, 5i64), (2, 0, 3), (1, 2, 1), (0, 1, 9)]).unwrap();
        let csr = WeightedCsr::from_graph(&graph);

        assert_eq!(csr.node_count(), 4);
        assert_eq!(csr.half_edge_count(), 8);
        assert_eq!(csr.degree(0), 3);
        assert_eq!(csr.degree(3), 0);

        let row0: Vec<(usize, i64)> = csr.neighbors(0).iter().map(|n| (n.node, n.weight)).collect();
        assert_eq!(row0, vec![(1, 5), (2, 3), (1, 9)]);

        let row2: Vec<(usize, i64)> = csr.neighbors(2).iter().map(|n| (n.node, n.weight)).collect();
        assert_eq!(row2, vec![(0, 3), (1, 1)]);
        assert!(csr.neighbors(3).is_empty());
    }
}
