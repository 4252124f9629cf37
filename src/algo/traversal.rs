/*!
Graph traversal algorithms and traversal-derived utilities.

This module provides:
- Generic traversal iterators (BFS, DFS, with and without predecessor
  tracking) parameterized by the frontier container and the visited-set.
- The `TraversalTree` abstraction that turns predecessor-tracking
  traversals into parent or depth arrays.
- A high-level `Traversal` trait that exposes traversal algorithms
  directly as methods on graph data structures.
- The [`BfsOrder`] and [`DfsOrder`] runners implementing
  [`GraphAlgorithm`].

Traversals ignore edge weights; they only follow the adjacency
structure. Neighbor expansion order is representation-defined, so the
exact visit order of a list-backed and a matrix-backed graph may
differ even for the same edge set.
*/

use std::marker::PhantomData;

use super::*;

/// Common interface for querying visited-states during a traversal.
///
/// Implementations wrap a [`Set<Node>`] that tracks which vertices have
/// already been discovered. This allows traversal algorithms to be
/// parameterized by different set implementations (e.g. [`NodeSet`],
/// `HashSet`) without changing the traversal logic.
pub trait TraversalState<S>
where
    S: Set<Node>,
{
    /// Returns a reference to the set of visited vertices.
    fn visited(&self) -> &S;

    /// Checks if a given vertex `u` has already been visited.
    fn did_visit_node(&self, u: Node) -> bool {
        self.visited().contains(&u)
    }
}

/// Abstraction for items yielded by a traversal iterator.
///
/// A `SequencedItem` encodes both the vertex currently visited and an
/// optional predecessor, its parent in the traversal tree.
///
/// Two implementations are provided:
/// - [`Node`] stores only the vertex.
/// - [`PredecessorOfNode`] stores `(predecessor, vertex)` pairs.
pub trait SequencedItem: Clone + Copy {
    /// Constructs a new item with a predecessor.
    fn new_with_predecessor(predecessor: Node, item: Node) -> Self;

    /// Constructs a new item without predecessor information.
    fn new_without_predecessor(item: Node) -> Self;

    /// Returns the vertex represented by this item.
    fn item(&self) -> Node;

    /// Returns the predecessor of this vertex, if any.
    fn predecessor(&self) -> Option<Node>;

    /// Returns a pair `(predecessor, item)` where the predecessor may be
    /// `None` if not tracked.
    fn predecessor_with_item(&self) -> (Option<Node>, Node) {
        (self.predecessor(), self.item())
    }
}

impl SequencedItem for Node {
    fn new_with_predecessor(_: Node, item: Node) -> Self {
        item
    }
    fn new_without_predecessor(item: Node) -> Self {
        item
    }
    fn item(&self) -> Node {
        *self
    }
    fn predecessor(&self) -> Option<Node> {
        None
    }
}

/// Compact representation of `(predecessor, vertex)` used for traversals
/// with parent tracking.
///
/// The absence of a predecessor is encoded by setting both tuple entries
/// to the same vertex.
pub type PredecessorOfNode = (Node, Node);

impl SequencedItem for PredecessorOfNode {
    fn new_with_predecessor(predecessor: Node, item: Node) -> Self {
        (predecessor, item)
    }
    fn new_without_predecessor(item: Node) -> Self {
        (item, item)
    }
    fn item(&self) -> Node {
        self.1
    }
    fn predecessor(&self) -> Option<Node> {
        if self.0 == self.1 {
            None
        } else {
            Some(self.0)
        }
    }
}

/// Abstraction for the traversal frontier data structure.
///
/// A `NodeSequencer` stores the "to be visited" items during a traversal.
/// The implementation determines the traversal order:
///
/// - [`Queue`] -> FIFO semantics -> **BFS**
/// - [`Vec`] -> stack semantics -> **DFS**
pub trait NodeSequencer<T> {
    /// Creates a new sequencer initialized with a single item.
    fn init(u: T) -> Self;

    /// Pushes an item into the frontier.
    fn push(&mut self, item: T);

    /// Removes and returns the next item from the frontier.
    fn pop(&mut self) -> Option<T>;

    /// Returns the number of items currently in the frontier.
    fn cardinality(&self) -> usize;
}

impl<T> NodeSequencer<T> for Queue<T> {
    fn init(u: T) -> Self {
        let mut queue = Queue::new();
        queue.enqueue(u);
        queue
    }
    fn push(&mut self, u: T) {
        self.enqueue(u)
    }
    fn pop(&mut self) -> Option<T> {
        self.dequeue().ok()
    }
    fn cardinality(&self) -> usize {
        self.len()
    }
}

impl<T> NodeSequencer<T> for Vec<T> {
    fn init(u: T) -> Self {
        vec![u]
    }
    fn push(&mut self, u: T) {
        self.push(u)
    }
    fn pop(&mut self) -> Option<T> {
        self.pop()
    }
    fn cardinality(&self) -> usize {
        self.len()
    }
}

/// Generic traversal iterator supporting BFS and DFS variants.
///
/// Maintains an explicit frontier (queue or stack) of vertices to visit
/// and a set of visited vertices, and optionally records predecessor
/// information. Parameterized by the container type for the frontier and
/// the type of items yielded (either `Node` or `PredecessorOfNode`).
pub struct TraversalSearch<'a, G, S, I, V = NodeSet>
where
    G: AdjacencyList,
    S: NodeSequencer<I>,
    I: SequencedItem,
    V: Set<Node>,
{
    graph: &'a G,
    visited: V,
    sequencer: S,
    _item: PhantomData<I>,
}

/// BFS iterator using a generic visited-set.
pub type BfsWithSet<'a, G, V> = TraversalSearch<'a, G, Queue<Node>, Node, V>;

/// DFS iterator using a generic visited-set.
pub type DfsWithSet<'a, G, V> = TraversalSearch<'a, G, Vec<Node>, Node, V>;

/// A BFS traversal iterator over the graph, visiting vertices in
/// breadth-first order from a given starting vertex.
pub type Bfs<'a, G> = TraversalSearch<'a, G, Queue<Node>, Node, NodeSet>;

/// A DFS traversal iterator over the graph, visiting vertices in
/// depth-first order from a given starting vertex.
pub type Dfs<'a, G> = TraversalSearch<'a, G, Vec<Node>, Node, NodeSet>;

/// A BFS traversal iterator that records predecessor information,
/// producing a spanning tree of the search.
pub type BfsWithPredecessor<'a, G> =
    TraversalSearch<'a, G, Queue<PredecessorOfNode>, PredecessorOfNode, NodeSet>;

/// A DFS traversal iterator that records predecessor information,
/// producing a spanning tree of the search.
pub type DfsWithPredecessor<'a, G> =
    TraversalSearch<'a, G, Vec<PredecessorOfNode>, PredecessorOfNode, NodeSet>;

impl<G, S, I, V> WithGraphRef<G> for TraversalSearch<'_, G, S, I, V>
where
    G: AdjacencyList,
    S: NodeSequencer<I>,
    I: SequencedItem,
    V: Set<Node>,
{
    fn graph_ref(&self) -> &G {
        self.graph
    }
}

impl<G, S, I, V> TraversalState<V> for TraversalSearch<'_, G, S, I, V>
where
    G: AdjacencyList,
    S: NodeSequencer<I>,
    I: SequencedItem,
    V: Set<Node>,
{
    fn visited(&self) -> &V {
        &self.visited
    }
}

impl<G, S, I, V> Iterator for TraversalSearch<'_, G, S, I, V>
where
    G: AdjacencyList,
    S: NodeSequencer<I>,
    I: SequencedItem,
    V: Set<Node>,
{
    type Item = I;

    fn next(&mut self) -> Option<Self::Item> {
        let popped = self.sequencer.pop()?;
        let u = popped.item();

        for (v, _weight) in self.graph.neighbors_of(u) {
            if self.visited.insert(v) {
                self.sequencer.push(I::new_with_predecessor(u, v));
            }
        }

        Some(popped)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (
            self.sequencer.cardinality(),
            Some(self.graph.len() - self.visited.len()),
        )
    }
}

impl<'a, G, S, I, V> TraversalSearch<'a, G, S, I, V>
where
    G: AdjacencyList,
    S: NodeSequencer<I>,
    I: SequencedItem,
    V: Set<Node> + FromCapacity,
{
    /// Creates a new traversal iterator starting from `start`.
    ///
    /// Fails with [`GraphError::InvalidIndex`] if `start` is not a vertex
    /// of the graph.
    pub fn new(graph: &'a G, start: Node) -> Result<Self> {
        graph.check_vertex(start)?;
        let mut visited = V::from_capacity(graph.len());
        visited.insert(start);
        Ok(Self {
            graph,
            visited,
            sequencer: S::init(I::new_without_predecessor(start)),
            _item: PhantomData,
        })
    }
}

impl<G, S, I, V> TraversalSearch<'_, G, S, I, V>
where
    G: AdjacencyList,
    S: NodeSequencer<I>,
    I: SequencedItem,
    V: Set<Node>,
{
    /// Tries to restart the search at a yet unvisited vertex and returns
    /// true iff successful. Requires that the search came to a hold
    /// earlier, i.e. `self.next()` returned `None`.
    pub fn try_restart_at_unvisited(&mut self) -> bool {
        assert_eq!(self.sequencer.cardinality(), 0);
        let node = self.graph.vertices().find(|u| !self.visited.contains(u));
        match node {
            None => false,
            Some(u) => {
                self.visited.insert(u);
                self.sequencer.push(I::new_without_predecessor(u));
                true
            }
        }
    }
}

/// Extension trait for traversal iterators that return `PredecessorOfNode`,
/// enabling extraction of the implied spanning tree structure.
pub trait TraversalTree<G>: WithGraphRef<G> + Iterator<Item = PredecessorOfNode> + Sized
where
    G: AdjacencyList,
{
    /// Consumes the iterator and records the parent of each vertex in the
    /// implied traversal tree into the provided slice `tree`. Unvisited
    /// entries remain unchanged.
    ///
    /// `tree.len()` must be at least `graph.len()`.
    fn parent_array_into(&mut self, tree: &mut [Node]) {
        for pred_with_item in self.by_ref() {
            if let Some(p) = pred_with_item.predecessor() {
                tree[pred_with_item.item() as usize] = p;
            }
        }
    }

    /// Constructs a fresh parent array of size `graph.len()` where each
    /// vertex is initially its own parent, then fills in the traversal
    /// tree structure using [`parent_array_into`](TraversalTree::parent_array_into).
    ///
    /// # Examples
    /// ```
    /// use wgraphs::{prelude::*, algo::*};
    ///
    /// let g = GraphList::<()>::from_edges(3, [(0, 1), (1, 2)]).unwrap();
    ///
    /// let parents = g.bfs_with_predecessor(0).unwrap().parent_array();
    /// assert_eq!(parents, vec![0, 0, 1]);
    /// ```
    fn parent_array(&mut self) -> Vec<Node> {
        let mut tree: Vec<_> = self.graph_ref().vertices().collect();
        self.parent_array_into(&mut tree);
        tree
    }

    /// Consumes the iterator and computes the depth of each visited vertex
    /// in the traversal tree (root depth = 0). Unvisited entries remain
    /// unchanged.
    ///
    /// `depths.len()` must be at least `graph.len()`.
    fn depths_into(&mut self, depths: &mut [Node]) {
        for pred_with_item in self.by_ref() {
            depths[pred_with_item.item() as usize] = pred_with_item
                .predecessor()
                .map_or(0, |p| depths[p as usize] + 1);
        }
    }

    /// Constructs a fresh zero-initialized depth array of size
    /// `graph.len()` and fills it using [`depths_into`](TraversalTree::depths_into).
    fn depths(&mut self) -> Vec<Node> {
        let mut depths = vec![0; self.graph_ref().len()];
        self.depths_into(&mut depths);
        depths
    }
}

impl<G, S, V> TraversalTree<G> for TraversalSearch<'_, G, S, PredecessorOfNode, V>
where
    G: AdjacencyList,
    S: NodeSequencer<PredecessorOfNode>,
    V: Set<Node>,
{
}

/// Provides convenient traversal methods directly on graph types.
pub trait Traversal: AdjacencyList + Sized {
    /// Returns an iterator that traverses vertices reachable from `start`
    /// in **breadth-first search (BFS) order**.
    ///
    /// # Examples
    /// ```
    /// use wgraphs::{prelude::*, algo::*};
    ///
    /// let g = GraphList::<()>::from_edges(2, [(0, 1)]).unwrap();
    ///
    /// let order: Vec<_> = g.bfs(0).unwrap().collect();
    /// assert_eq!(order, vec![0, 1]);
    /// ```
    fn bfs(&self, start: Node) -> Result<Bfs<'_, Self>> {
        Bfs::new(self, start)
    }

    /// Returns an iterator that traverses vertices reachable from `start`
    /// in **depth-first search (DFS) order**.
    fn dfs(&self, start: Node) -> Result<Dfs<'_, Self>> {
        Dfs::new(self, start)
    }

    /// Returns a BFS iterator starting from `start` that additionally
    /// yields the predecessor relation (edges traversed).
    fn bfs_with_predecessor(&self, start: Node) -> Result<BfsWithPredecessor<'_, Self>> {
        BfsWithPredecessor::new(self, start)
    }

    /// Returns a DFS iterator starting from `start` that additionally
    /// yields the predecessor relation (edges traversed).
    fn dfs_with_predecessor(&self, start: Node) -> Result<DfsWithPredecessor<'_, Self>> {
        DfsWithPredecessor::new(self, start)
    }
}

impl<G> Traversal for G where G: AdjacencyList + Sized {}

/// [`GraphAlgorithm`] runner producing the BFS visit order from a start
/// vertex.
pub struct BfsOrder<'a, G> {
    graph: &'a G,
}

/// [`GraphAlgorithm`] runner producing the DFS visit order from a start
/// vertex.
pub struct DfsOrder<'a, G> {
    graph: &'a G,
}

macro_rules! impl_order_algorithm {
    ($algo:ident, $search:ident) => {
        impl<G> WithGraphRef<G> for $algo<'_, G> {
            fn graph_ref(&self) -> &G {
                self.graph
            }
        }

        impl<'a, G: AdjacencyList> GraphAlgorithm<'a, G> for $algo<'a, G> {
            type Output = Vec<Node>;

            fn new(graph: &'a G) -> Self {
                Self { graph }
            }

            fn run(&mut self, start: Node) -> Result<Vec<Node>> {
                Ok($search::new(self.graph, start)?.collect())
            }
        }
    };
}

impl_order_algorithm!(BfsOrder, Bfs);
impl_order_algorithm!(DfsOrder, Dfs);

#[cfg(test)]
pub mod tests {
    use super::*;
    use crate::repr::{GraphList, GraphMatrix};
    use itertools::Itertools;

    //         1
    //       /   \
    //      2     3
    //     / \     \
    //    4   0     5
    fn tree_edges() -> [(Node, Node); 5] {
        [(1, 2), (1, 3), (2, 4), (2, 0), (3, 5)]
    }

    #[test]
    fn bfs_order_list() {
        let graph = GraphList::<()>::from_edges(6, tree_edges()).unwrap();
        assert_eq!(graph.bfs(1).unwrap().collect_vec(), vec![1, 2, 3, 4, 0, 5]);
        assert_eq!(graph.bfs(3).unwrap().collect_vec(), vec![3, 1, 5, 2, 4, 0]);
    }

    #[test]
    fn bfs_order_matrix() {
        let graph = GraphMatrix::<()>::from_edges(6, tree_edges()).unwrap();
        assert_eq!(graph.bfs(1).unwrap().collect_vec(), vec![1, 2, 3, 0, 4, 5]);
    }

    #[test]
    fn dfs_order_list() {
        let graph = GraphList::<()>::from_edges(6, tree_edges()).unwrap();
        // the stack expands the most recently pushed neighbor first
        assert_eq!(graph.dfs(1).unwrap().collect_vec(), vec![1, 3, 5, 2, 0, 4]);
    }

    #[test]
    fn dfs_order_matrix() {
        let graph = GraphMatrix::<()>::from_edges(6, tree_edges()).unwrap();
        assert_eq!(graph.dfs(1).unwrap().collect_vec(), vec![1, 3, 5, 2, 4, 0]);
    }

    #[test]
    fn traversal_is_deterministic() {
        let graph = GraphList::<()>::from_edges(6, tree_edges()).unwrap();
        let first = graph.bfs(1).unwrap().collect_vec();
        for _ in 0..3 {
            assert_eq!(graph.bfs(1).unwrap().collect_vec(), first);
        }
    }

    #[test]
    fn traversal_stops_at_component_boundary() {
        let graph = GraphList::<()>::from_edges(4, [(0, 1), (2, 3)]).unwrap();
        assert_eq!(graph.bfs(0).unwrap().collect_vec(), vec![0, 1]);
        assert_eq!(graph.dfs(2).unwrap().collect_vec(), vec![2, 3]);
    }

    #[test]
    fn isolated_start_yields_itself() {
        let graph = GraphList::<u32>::with_vertices(3);
        assert_eq!(graph.bfs(2).unwrap().collect_vec(), vec![2]);
    }

    #[test]
    fn invalid_start_fails() {
        let graph = GraphList::<()>::from_edges(2, [(0, 1)]).unwrap();
        assert_eq!(
            graph.bfs(2).err(),
            Some(GraphError::InvalidIndex { index: 2, len: 2 })
        );
        assert_eq!(
            graph.dfs(7).err(),
            Some(GraphError::InvalidIndex { index: 7, len: 2 })
        );
    }

    #[test]
    fn bfs_depths_are_levels() {
        let graph = GraphList::<()>::from_edges(6, tree_edges()).unwrap();
        let depths = graph.bfs_with_predecessor(1).unwrap().depths();
        assert_eq!(depths, vec![2, 0, 1, 1, 2, 2]);
    }

    #[test]
    fn bfs_tree() {
        let graph = GraphList::<()>::from_edges(6, tree_edges()).unwrap();
        let parents = graph.bfs_with_predecessor(1).unwrap().parent_array();
        assert_eq!(parents, vec![2, 1, 1, 1, 2, 3]);
    }

    #[test]
    fn dfs_with_predecessor_spans_tree() {
        let graph = GraphList::<()>::from_edges(6, tree_edges()).unwrap();

        let mut edges: Vec<_> = graph
            .dfs_with_predecessor(1)
            .unwrap()
            .map(|x| x.predecessor_with_item())
            .collect();
        edges.sort();
        assert_eq!(
            edges,
            vec![
                (None, 1),
                (Some(1), 2),
                (Some(1), 3),
                (Some(2), 0),
                (Some(2), 4),
                (Some(3), 5),
            ]
        );
    }

    #[test]
    fn runner_traversals() {
        let graph = GraphList::<()>::from_edges(6, tree_edges()).unwrap();

        let mut bfs = BfsOrder::new(&graph);
        assert_eq!(bfs.run(1), Ok(vec![1, 2, 3, 4, 0, 5]));
        // re-running resets all state
        assert_eq!(bfs.run(1), Ok(vec![1, 2, 3, 4, 0, 5]));

        let mut dfs = DfsOrder::new(&graph);
        assert_eq!(dfs.run(1), Ok(vec![1, 3, 5, 2, 0, 4]));
        assert_eq!(
            dfs.run(6),
            Err(GraphError::InvalidIndex { index: 6, len: 6 })
        );
    }

    #[test]
    fn weights_do_not_affect_traversal() {
        let unit = GraphList::<()>::from_edges(4, [(0, 1), (1, 2), (2, 3)]).unwrap();
        let heavy =
            GraphList::<()>::from_edges(4, [(0, 1, 1000), (1, 2, -0), (2, 3, 42)]).unwrap();
        assert_eq!(
            unit.bfs(0).unwrap().collect_vec(),
            heavy.bfs(0).unwrap().collect_vec()
        );
    }
}
