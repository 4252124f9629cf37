use itertools::Itertools;
use smallvec::{Array, SmallVec};

use super::*;

/// Trait for methods on the weighted Neighborhood of a specified vertex.
///
/// A Neighborhood stores, for one vertex, the indices of its neighbors
/// together with the weights of the connecting edges. The backing storage
/// determines the trade-offs of the resulting graph representation.
pub trait Neighborhood: Clone {
    /// *true* if the backing storage keeps one slot per vertex of the graph
    /// and must therefore grow whenever a vertex is added
    const DENSE: bool = false;

    /// Creates an empty Neighborhood for a graph with `n` vertices
    fn new(n: NumNodes) -> Self;

    /// Returns the number of neighbors in the Neighborhood
    fn num_of_neighbors(&self) -> NumNodes;

    /// Returns an iterator over all `(neighbor, weight)` pairs
    fn neighbors(&self) -> impl Iterator<Item = (Node, Weight)> + '_;

    /// Returns the weight towards `v`, or `None` if `v` is no neighbor.
    /// ** Might panic if `v >= n` **
    fn weight_to(&self, v: Node) -> Option<Weight>;

    /// Returns *true* if `v` is in the Neighborhood
    /// ** Might panic if `v >= n` **
    fn has_neighbor(&self, v: Node) -> bool {
        self.weight_to(v).is_some()
    }

    /// Inserts `v` with weight `w`, overwriting an existing entry.
    /// Returns the previous weight towards `v`, if any.
    /// ** Might panic if `v >= n` **
    fn set_neighbor(&mut self, v: Node, w: Weight) -> Option<Weight>;

    /// Tries to remove `v` from the Neighborhood and returns the weight of
    /// the removed entry.
    /// ** Might panic if `v >= n` **
    fn try_remove_neighbor(&mut self, v: Node) -> Option<Weight>;

    /// Removes all neighbors from the Neighborhood
    fn clear(&mut self);

    /// Extends the Neighborhood by one slot after a vertex was appended
    /// to the graph. A no-op for sparse backings.
    fn push_slot(&mut self);

    /// Removes the slot of vertex `v` after it was deleted from the graph:
    /// drops a potential entry for `v` and renames all indices `> v` to one
    /// less.
    fn remove_slot(&mut self, v: Node);
}

/// Basic Neighborhood-Impl. using `Vec<(Node, Weight)>`.
/// Neighbors are enumerated in insertion order.
#[derive(Debug, Default, Clone)]
pub struct ArrNeighborhood(pub Vec<(Node, Weight)>);

impl Neighborhood for ArrNeighborhood {
    fn new(_n: NumNodes) -> Self {
        Self(Default::default())
    }

    fn num_of_neighbors(&self) -> NumNodes {
        self.0.len() as NumNodes
    }

    fn neighbors(&self) -> impl Iterator<Item = (Node, Weight)> + '_ {
        self.0.iter().copied()
    }

    fn weight_to(&self, v: Node) -> Option<Weight> {
        self.0.iter().find(|(x, _)| *x == v).map(|(_, w)| *w)
    }

    fn set_neighbor(&mut self, v: Node, w: Weight) -> Option<Weight> {
        if let Some((_, prev)) = self.0.iter_mut().find(|(x, _)| *x == v) {
            Some(std::mem::replace(prev, w))
        } else {
            self.0.push((v, w));
            None
        }
    }

    fn try_remove_neighbor(&mut self, v: Node) -> Option<Weight> {
        // `Vec::remove` instead of `swap_remove` to keep insertion order
        let (pos, _) = self.0.iter().find_position(|(x, _)| *x == v)?;
        Some(self.0.remove(pos).1)
    }

    fn clear(&mut self) {
        self.0.clear();
    }

    fn push_slot(&mut self) {}

    fn remove_slot(&mut self, v: Node) {
        self.0.retain(|(x, _)| *x != v);
        for (x, _) in self.0.iter_mut() {
            if *x > v {
                *x -= 1;
            }
        }
    }
}

/// Like [`ArrNeighborhood`] but uses `SmallVec<[(Node, Weight); N]>` instead.
/// Prefer this if the graph is known to be sparse: up to `N` neighbors are
/// stored inline without a heap allocation.
#[derive(Debug, Default, Clone)]
pub struct SparseNeighborhood<const N: usize = 4>(pub SmallVec<[(Node, Weight); N]>)
where
    [(Node, Weight); N]: Array<Item = (Node, Weight)>;

impl<const N: usize> Neighborhood for SparseNeighborhood<N>
where
    [(Node, Weight); N]: Array<Item = (Node, Weight)>,
{
    fn new(_n: NumNodes) -> Self {
        Self(Default::default())
    }

    fn num_of_neighbors(&self) -> NumNodes {
        self.0.len() as NumNodes
    }

    fn neighbors(&self) -> impl Iterator<Item = (Node, Weight)> + '_ {
        self.0.iter().copied()
    }

    fn weight_to(&self, v: Node) -> Option<Weight> {
        self.0.iter().find(|(x, _)| *x == v).map(|(_, w)| *w)
    }

    fn set_neighbor(&mut self, v: Node, w: Weight) -> Option<Weight> {
        if let Some((_, prev)) = self.0.iter_mut().find(|(x, _)| *x == v) {
            Some(std::mem::replace(prev, w))
        } else {
            self.0.push((v, w));
            None
        }
    }

    fn try_remove_neighbor(&mut self, v: Node) -> Option<Weight> {
        let (pos, _) = self.0.iter().find_position(|(x, _)| *x == v)?;
        Some(self.0.remove(pos).1)
    }

    fn clear(&mut self) {
        self.0.clear();
    }

    fn push_slot(&mut self) {}

    fn remove_slot(&mut self, v: Node) {
        self.0.retain(|(x, _)| *x != v);
        for (x, _) in self.0.iter_mut() {
            if *x > v {
                *x -= 1;
            }
        }
    }
}

/// A Neighborhood represented by one row of a dense weight matrix:
/// slot `v` holds `Some(w)` iff the edge towards `v` exists.
///
/// Weight lookup is O(1); neighbors are enumerated in ascending index order.
#[derive(Debug, Default, Clone)]
pub struct DenseNeighborhood(pub Vec<Option<Weight>>);

impl Neighborhood for DenseNeighborhood {
    const DENSE: bool = true;

    fn new(n: NumNodes) -> Self {
        Self(vec![None; n as usize])
    }

    fn num_of_neighbors(&self) -> NumNodes {
        self.0.iter().filter(|w| w.is_some()).count() as NumNodes
    }

    fn neighbors(&self) -> impl Iterator<Item = (Node, Weight)> + '_ {
        self.0
            .iter()
            .enumerate()
            .filter_map(|(v, w)| w.map(|w| (v as Node, w)))
    }

    fn weight_to(&self, v: Node) -> Option<Weight> {
        self.0[v as usize]
    }

    fn set_neighbor(&mut self, v: Node, w: Weight) -> Option<Weight> {
        self.0[v as usize].replace(w)
    }

    fn try_remove_neighbor(&mut self, v: Node) -> Option<Weight> {
        self.0[v as usize].take()
    }

    fn clear(&mut self) {
        self.0.iter_mut().for_each(|w| *w = None);
    }

    fn push_slot(&mut self) {
        self.0.push(None);
    }

    fn remove_slot(&mut self, v: Node) {
        self.0.remove(v as usize);
    }
}
