//! Dense, word-packed visited set for graph traversals.

const WORD_BITS: usize = u64::BITS as usize;

/// A fixed-size bitset recording which nodes a traversal has reached.
#[derive(Debug, Clone)]
pub struct VisitedSet {
    words: Vec<u64>,
    len: usize,
    marked: usize,
}

impl VisitedSet {
    /// Creates a set for nodes `0..len`, all unvisited.
    pub fn new(len: usize) -> Self {
        Self {
            words: vec![0; len.div_ceil(WORD_BITS)],
            len,
            marked: 0,
        }
    }

    /// Number of nodes the set can track.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the set tracks no nodes.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of nodes marked visited.
    #[inline]
    pub fn visited_count(&self) -> usize {
        self.marked
    }

    /// Returns `true` iff this call observed the node as not-yet-visited and marks it visited.
    ///
    /// # Panics
    ///
    /// Panics if `node >= self.len()`.
    #[inline]
    pub fn try_visit(&mut self, node: usize) -> bool {
        assert!(node < self.len, "node {node} out of bounds for len={}", self.len);
        let (word, mask) = Self::locate(node);
        let slot = &mut self.words[word];
        if *slot & mask != 0 {
            return false;
        }
        *slot |= mask;
        self.marked += 1;
        true
    }

    /// Returns `true` if `node` is marked. Out-of-range nodes are never visited.
    #[inline]
    pub fn is_visited(&self, node: usize) -> bool {
        if node >= self.len {
            return false;
        }
        let (word, mask) = Self::locate(node);
        self.words[word] & mask != 0
    }

    /// Unmarks every node.
    pub fn clear(&mut self) {
        self.words.fill(0);
        self.marked = 0;
    }

    #[inline(always)]
    fn locate(node: usize) -> (usize, u64) {
        (node / WORD_BITS, 1u64 << (node % WORD_BITS))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_try_visit_once() {
        let mut visited = VisitedSet::new(130);
        assert!(visited.try_visit(0));
        assert!(visited.try_visit(64));
        assert!(visited.try_visit(129));
        assert!(!visited.try_visit(64));
        assert_eq!(visited.visited_count(), 3);

        assert!(visited.is_visited(129));
        assert!(!visited.is_visited(128));
        assert!(!visited.is_visited(500));
    }

    #[test]
    fn test_clear() {
        let mut visited = VisitedSet::new(3);
        visited.try_visit(1);
        visited.clear();
        assert!(!visited.is_visited(1));
        assert_eq!(visited.visited_count(), 0);
        assert_eq!(visited.len(), 3);
        assert!(VisitedSet::new(0).is_empty());
    }
}
