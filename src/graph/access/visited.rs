//! Visited sets for graph traversals.
//!
//! Traversal scratch lives outside the graph: each call allocates its own
//! `VisitedSet`, so a graph can be traversed from many threads through `&self`.

const WORD_BITS: usize = u64::BITS as usize;

/// A dense, word-packed visited set for fixed-size graphs.
#[derive(Debug, Clone)]
pub(crate) struct VisitedSet {
    words: Vec<u64>,
    len: usize,
}

impl VisitedSet {
    #[inline]
    pub(crate) fn new(bits: usize) -> Self {
        Self {
            words: vec![0; bits.div_ceil(WORD_BITS)],
            len: bits,
        }
    }

    /// Returns `true` iff `node` was not yet visited, and marks it visited.
    #[inline(always)]
    pub(crate) fn try_visit(&mut self, node: usize) -> bool {
        assert!(node < self.len, "node {node} out of bounds");
        let word = &mut self.words[node / WORD_BITS];
        let mask = 1u64 << (node % WORD_BITS);
        let fresh = *word & mask == 0;
        *word |= mask;
        fresh
    }

    #[inline(always)]
    pub(crate) fn is_visited(&self, node: usize) -> bool {
        assert!(node < self.len, "node {node} out of bounds");
        self.words[node / WORD_BITS] & (1u64 << (node % WORD_BITS)) != 0
    }

    /// Number of visited nodes.
    pub(crate) fn count(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }
}
