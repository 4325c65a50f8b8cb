//! Disjoint Set (Union-Find) over a fixed node range.
//!
//! # Performance
//!
//! - Parent pointers live in `Cell<usize>` so `find` can compress paths through
//!   a shared reference.
//! - Path compression and union-by-rank keep operations near constant amortized time.

use std::cell::Cell;

/// A Disjoint Set (Union-Find) data structure over the nodes `0..n`.
///
/// Indices passed to [`find`](Self::find) and [`union`](Self::union) must be in
/// range; use [`try_find`](Self::try_find) when that cannot be guaranteed.
#[derive(Debug, Clone)]
pub struct DisjointSet {
    /// Parent pointers. `Cell` allows path compression with a shared reference.
    parent: Vec<Cell<usize>>,
    /// Rank (depth upper bound) for union-by-rank.
    rank: Vec<u8>,
    /// Number of disjoint sets currently tracked.
    components: usize,
}

impl DisjointSet {
    /// Creates `n` singleton sets, one per node.
    pub fn new(n: usize) -> Self {
        Self {
            parent: (0..n).map(Cell::new).collect(),
            rank: vec![0; n],
            components: n,
        }
    }

    /// Finds the representative of the set containing `id`, with path compression.
    ///
    /// # Panics
    ///
    /// Panics if `id >= self.len()`.
    pub fn find(&self, id: usize) -> usize {
        let mut root = id;
        loop {
            let parent = self.parent[root].get();
            if parent == root {
                break;
            }
            root = parent;
        }

        let mut curr = id;
        while curr != root {
            let cell = &self.parent[curr];
            let next = cell.get();
            cell.set(root);
            curr = next;
        }

        root
    }

    /// Like [`find`](Self::find), but returns `None` for an out-of-range `id`.
    pub fn try_find(&self, id: usize) -> Option<usize> {
        (id < self.len()).then(|| self.find(id))
    }

    /// Unites the sets containing `a` and `b`.
    ///
    /// Returns `true` if they were in different sets, `false` otherwise. On a rank
    /// tie the root of `b` is attached under the root of `a`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of range.
    pub fn union(&mut self, a: usize, b: usize) -> bool {
        let root_a = self.find(a);
        let root_b = self.find(b);

        if root_a == root_b {
            return false;
        }

        let rank_a = self.rank[root_a];
        let rank_b = self.rank[root_b];

        if rank_a < rank_b {
            self.parent[root_a].set(root_b);
        } else if rank_a > rank_b {
            self.parent[root_b].set(root_a);
        } else {
            self.parent[root_b].set(root_a);
            self.rank[root_a] = rank_a.saturating_add(1);
        }

        self.components -= 1;
        true
    }

    /// Returns `true` if `a` and `b` belong to the same set.
    pub fn same_set(&self, a: usize, b: usize) -> bool {
        self.find(a) == self.find(b)
    }

    /// Number of disjoint sets.
    pub fn component_count(&self) -> usize {
        self.components
    }

    /// Returns the number of elements in the disjoint set.
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    /// Returns true if empty.
    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }
}
