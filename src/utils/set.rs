use std::collections::HashSet;
use std::hash::{BuildHasher, Hash};

use crate::node::{Node, NumNodes};

/// Common abstraction over set data structures used by graph algorithms.
pub trait Set<T> {
    /// Inserts `item` into the set. Returns *true* if the item was not yet
    /// present.
    fn insert(&mut self, item: T) -> bool;

    /// Removes `item` from the set. Returns *true* if the item was present.
    fn remove(&mut self, item: &T) -> bool;

    /// Returns *true* if `item` is in the set.
    fn contains(&self, item: &T) -> bool;

    /// Removes all items from the set.
    fn clear(&mut self);

    /// Number of items in the set.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T: Eq + Hash, S: BuildHasher> Set<T> for HashSet<T, S> {
    fn insert(&mut self, item: T) -> bool {
        HashSet::insert(self, item)
    }

    fn remove(&mut self, item: &T) -> bool {
        HashSet::remove(self, item)
    }

    fn contains(&self, item: &T) -> bool {
        HashSet::contains(self, item)
    }

    fn clear(&mut self) {
        HashSet::clear(self);
    }

    fn len(&self) -> usize {
        HashSet::len(self)
    }
}

/// A dense set of nodes backed by a boolean vector.
///
/// Membership tests and updates are O(1); space is linear in the largest
/// node ever inserted. This is the default visited-set of the traversal
/// algorithms.
#[derive(Debug, Clone, Default)]
pub struct NodeSet {
    flags: Vec<bool>,
    cardinality: usize,
}

impl NodeSet {
    pub fn new(n: NumNodes) -> Self {
        Self {
            flags: vec![false; n as usize],
            cardinality: 0,
        }
    }

    /// Iterates over all nodes in the set in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = Node> + '_ {
        self.flags
            .iter()
            .enumerate()
            .filter_map(|(u, f)| f.then_some(u as Node))
    }
}

impl Set<Node> for NodeSet {
    fn insert(&mut self, item: Node) -> bool {
        let idx = item as usize;
        if idx >= self.flags.len() {
            self.flags.resize(idx + 1, false);
        }
        let new = !self.flags[idx];
        self.flags[idx] = true;
        self.cardinality += new as usize;
        new
    }

    fn remove(&mut self, item: &Node) -> bool {
        let idx = *item as usize;
        let present = idx < self.flags.len() && self.flags[idx];
        if present {
            self.flags[idx] = false;
            self.cardinality -= 1;
        }
        present
    }

    fn contains(&self, item: &Node) -> bool {
        let idx = *item as usize;
        idx < self.flags.len() && self.flags[idx]
    }

    fn clear(&mut self) {
        self.flags.fill(false);
        self.cardinality = 0;
    }

    fn len(&self) -> usize {
        self.cardinality
    }
}

/// Constructor abstraction for containers that can reserve space for a known
/// number of items upfront.
pub trait FromCapacity {
    fn from_capacity(cap: usize) -> Self;
}

impl FromCapacity for NodeSet {
    fn from_capacity(cap: usize) -> Self {
        NodeSet::new(cap as NumNodes)
    }
}

impl<T: Eq + Hash, S: BuildHasher + Default> FromCapacity for HashSet<T, S> {
    fn from_capacity(cap: usize) -> Self {
        HashSet::with_capacity_and_hasher(cap, S::default())
    }
}

impl<T> FromCapacity for Vec<T> {
    fn from_capacity(cap: usize) -> Self {
        Vec::with_capacity(cap)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fxhash::FxHashSet;
    use itertools::Itertools;

    fn exercise_set<S: Set<Node>>(mut set: S) {
        assert!(set.is_empty());
        assert!(set.insert(3));
        assert!(set.insert(7));
        assert!(!set.insert(3));
        assert_eq!(set.len(), 2);

        assert!(set.contains(&3));
        assert!(!set.contains(&5));

        assert!(set.remove(&3));
        assert!(!set.remove(&3));
        assert_eq!(set.len(), 1);

        set.clear();
        assert!(set.is_empty());
        assert!(!set.contains(&7));
    }

    #[test]
    fn node_set_ops() {
        exercise_set(NodeSet::new(8));
    }

    #[test]
    fn hash_set_ops() {
        exercise_set(FxHashSet::default());
    }

    #[test]
    fn node_set_grows_on_demand() {
        let mut set = NodeSet::new(2);
        assert!(set.insert(100));
        assert!(set.contains(&100));
        assert!(!set.contains(&99));
        assert_eq!(set.iter().collect_vec(), vec![100]);
    }
}
