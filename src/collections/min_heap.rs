//! `MinHeap`: a priority queue over a Vec-backed binary heap.
//!
//! The smallest element (by `Ord`) is always at the top. Prim's engine uses it
//! as the frontier of candidate edges.

use core::cmp::Ord;
use core::fmt;

/// A min-priority queue implemented with a binary heap over a `Vec`.
pub struct MinHeap<T> {
    data: Vec<T>,
}

impl<T: Ord> MinHeap<T> {
    /// Creates an empty binary heap.
    pub fn new() -> Self {
        Self { data: Vec::new() }
    }

    /// Creates an empty binary heap with a specific capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
        }
    }

    /// Returns the number of elements in the heap.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if the heap is empty.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Pushes an item onto the binary heap.
    pub fn push(&mut self, item: T) {
        self.data.push(item);
        self.sift_up(self.data.len() - 1);
    }

    /// Pops the smallest item from the binary heap.
    pub fn pop(&mut self) -> Option<T> {
        if self.data.is_empty() {
            return None;
        }
        let last_idx = self.data.len() - 1;
        self.data.swap(0, last_idx);
        let item = self.data.pop()?;
        if !self.data.is_empty() {
            self.sift_down(0);
        }
        Some(item)
    }

    /// Returns a reference to the smallest item in the binary heap.
    pub fn peek(&self) -> Option<&T> {
        self.data.first()
    }

    /// Clears the binary heap.
    pub fn clear(&mut self) {
        self.data.clear();
    }

    fn sift_up(&mut self, mut node: usize) {
        while node > 0 {
            let parent = (node - 1) / 2;
            if self.precedes(node, parent) {
                self.data.swap(parent, node);
                node = parent;
            } else {
                break;
            }
        }
    }

    fn sift_down(&mut self, mut node: usize) {
        let len = self.data.len();
        loop {
            let left = 2 * node + 1;
            if left >= len {
                break;
            }
            let right = left + 1;
            let mut smaller = left;
            if right < len && self.precedes(right, left) {
                smaller = right;
            }

            if self.precedes(smaller, node) {
                self.data.swap(node, smaller);
                node = smaller;
            } else {
                break;
            }
        }
    }

    // `a` must come out of the heap before `b`
    fn precedes(&self, a: usize, b: usize) -> bool {
        self.data[a] < self.data[b]
    }
}

impl<T> MinHeap<T> {
    /// Iterates over all elements in the heap in arbitrary order.
    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.data.iter()
    }
}

impl<T: Ord> Default for MinHeap<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord> Extend<T> for MinHeap<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push(item);
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for MinHeap<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MinHeap")
            .field("len", &self.data.len())
            .finish()
    }
}
