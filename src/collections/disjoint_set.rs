//! Disjoint Set (Union-Find) used for component decomposition.
//!
//! # Performance
//!
//! - Uses `Cell<usize>` for parent pointers so `find` can compress paths through `&self`.
//! - Path compression and union-by-rank keep operations nearly constant time.
//! - Tracks the live set count so connectivity is a single comparison after the unions.

use std::cell::Cell;

/// A Disjoint Set (Union-Find) data structure.
#[derive(Debug, Clone, Default)]
pub struct DisjointSet {
    /// Parent pointers.
    /// Uses `Cell` to allow path compression with shared reference.
    parent: Vec<Cell<usize>>,
    /// Rank (depth upper bound) for union-by-rank.
    rank: Vec<u8>,
    sets: usize,
}

impl DisjointSet {
    /// Creates a new empty disjoint set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new disjoint set with the specified capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            parent: Vec::with_capacity(capacity),
            rank: Vec::with_capacity(capacity),
            sets: 0,
        }
    }

    /// Creates `n` singleton sets with ids `0..n`.
    pub fn with_singletons(n: usize) -> Self {
        let mut ds = Self::with_capacity(n);
        for _ in 0..n {
            ds.make_set();
        }
        ds
    }

    /// Creates a new set containing a single element.
    /// Returns the representative ID of the new set.
    pub fn make_set(&mut self) -> usize {
        let id = self.parent.len();
        self.parent.push(Cell::new(id));
        self.rank.push(0);
        self.sets += 1;
        id
    }

    /// Finds the representative of the set containing `id`, with path compression.
    ///
    /// # Panics
    /// Panics if `id` was never created by `make_set`.
    pub fn find(&self, id: usize) -> usize {
        assert!(id < self.parent.len(), "element {id} out of bounds");

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
            let parent = self.parent[curr].get();
            self.parent[curr].set(root);
            curr = parent;
        }

        root
    }

    /// Unites the sets containing `id1` and `id2`.
    /// Returns `true` if they were in different sets, `false` otherwise.
    pub fn union(&mut self, id1: usize, id2: usize) -> bool {
        let root1 = self.find(id1);
        let root2 = self.find(id2);

        if root1 == root2 {
            return false;
        }

        let rank1 = self.rank[root1];
        let rank2 = self.rank[root2];

        if rank1 < rank2 {
            self.parent[root1].set(root2);
        } else if rank1 > rank2 {
            self.parent[root2].set(root1);
        } else {
            // Same rank, attach 2 to 1 and bump 1.
            self.parent[root2].set(root1);
            self.rank[root1] += 1;
        }

        self.sets -= 1;
        true
    }

    /// Returns true if `id1` and `id2` are in the same set.
    pub fn same_set(&self, id1: usize, id2: usize) -> bool {
        self.find(id1) == self.find(id2)
    }

    /// Number of disjoint sets currently tracked.
    pub fn set_count(&self) -> usize {
        self.sets
    }

    /// Representative of every element, indexed by element id.
    pub fn labels(&self) -> Vec<usize> {
        (0..self.len()).map(|id| self.find(id)).collect()
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_union_find_basic() {
        let mut ds = DisjointSet::with_singletons(5);
        assert_eq!(ds.set_count(), 5);

        assert!(ds.union(0, 1));
        assert!(ds.union(3, 4));
        assert!(!ds.union(1, 0));
        assert_eq!(ds.set_count(), 3);

        assert!(ds.same_set(0, 1));
        assert!(ds.same_set(3, 4));
        assert!(!ds.same_set(1, 3));
        assert_eq!(ds.find(2), 2);
    }

    #[test]
    fn test_union_find_chain_compresses() {
        let mut ds = DisjointSet::with_singletons(64);
        for i in 0..63 {
            ds.union(i, i + 1);
        }
        assert_eq!(ds.set_count(), 1);

        let root = ds.find(63);
        let labels = ds.labels();
        assert!(labels.iter().all(|&l| l == root));
    }

    #[test]
    fn test_make_set_grows() {
        let mut ds = DisjointSet::new();
        assert!(ds.is_empty());
        assert_eq!(ds.make_set(), 0);
        assert_eq!(ds.make_set(), 1);
        assert_eq!(ds.len(), 2);
        assert_eq!(ds.set_count(), 2);
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn test_find_out_of_bounds_panics() {
        let ds = DisjointSet::with_singletons(2);
        ds.find(2);
    }
}
