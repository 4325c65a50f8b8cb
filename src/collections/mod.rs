//! Data structures backing the MST engines.

pub mod disjoint_set;
pub mod min_heap;
pub mod visited;

pub use disjoint_set::DisjointSet;
pub use min_heap::MinHeap;
pub use visited::VisitedSet;
