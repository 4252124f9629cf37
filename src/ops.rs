/*!
# Graph Operations

The capability set every graph representation must support, split into small
traits in the usual fashion: sizes ([`GraphNodeOrder`], [`GraphEdgeOrder`]),
neighborhood access ([`AdjacencyList`]), edge queries ([`AdjacencyTest`]),
construction ([`GraphNew`], [`GraphFromScratch`]) and mutation
([`GraphEdgeEditing`], [`GraphVertexEditing`]).

Read-only accessors follow the convention of panicking on out-of-range
indices, while every mutating operation and every `try_`/`_of`-lookup that an
API consumer drives directly returns a [`Result`](crate::error::Result).
*/

use std::ops::Range;

use itertools::Itertools;

use crate::{error::*, prelude::*};

/// Provides getters pertaining to the node-size of a graph
pub trait GraphNodeOrder {
    /// Returns the number of vertices of the graph
    fn number_of_nodes(&self) -> NumNodes;

    /// Returns the number of vertices as usize
    fn len(&self) -> usize {
        self.number_of_nodes() as usize
    }

    /// Returns *true* if the graph has no vertices (and thus no edges)
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns an iterator over V. Vertices are their insertion indices,
    /// so this is simply the range `0..n`.
    fn vertices(&self) -> Range<Node> {
        0..self.number_of_nodes()
    }

    /// Returns `Ok(())` if `u` is a valid vertex index and
    /// [`GraphError::InvalidIndex`] otherwise
    fn check_vertex(&self, u: Node) -> Result<()> {
        if u < self.number_of_nodes() {
            Ok(())
        } else {
            Err(GraphError::InvalidIndex {
                index: u,
                len: self.number_of_nodes(),
            })
        }
    }
}

/// Provides getters pertaining to the edge-size of a graph
pub trait GraphEdgeOrder {
    /// Returns the number of (undirected) edges of the graph
    fn number_of_edges(&self) -> NumEdges;

    /// Returns *true* if the graph has no edges
    fn is_singleton(&self) -> bool {
        self.number_of_edges() == 0
    }
}

/// Traits pertaining getters for neighborhoods & edges
pub trait AdjacencyList: GraphNodeOrder + Sized {
    /// Returns an iterator over the (open) neighborhood of a given vertex
    /// as `(neighbor, weight)` pairs.
    ///
    /// The iteration order is representation-defined: insertion order for
    /// list-backed graphs, ascending index order for the matrix. Algorithms
    /// may only rely on it for deterministic tie-breaking.
    ///
    /// ** Panics if `u >= n` **
    fn neighbors_of(&self, u: Node) -> impl Iterator<Item = (Node, Weight)> + '_;

    /// Returns the number of neighbors of `u`
    /// ** Panics if `u >= n` **
    fn degree_of(&self, u: Node) -> NumNodes;

    /// Returns an iterator over the neighbors of `u` without their weights.
    /// ** Panics if `u >= n` **
    fn neighbor_nodes_of(&self, u: Node) -> impl Iterator<Item = Node> + '_ {
        self.neighbors_of(u).map(|(v, _)| v)
    }

    /// Returns an iterator over the degrees of all vertices
    fn degrees(&self) -> impl Iterator<Item = NumNodes> + '_ {
        self.vertices().map(|u| self.degree_of(u))
    }

    /// Returns the maximum degree in the graph
    fn max_degree(&self) -> NumNodes {
        self.degrees().max().unwrap_or(0)
    }

    /// Returns an iterator over the edges incident to a given vertex.
    /// If `only_normalized`, then only edges `(u, v)` with `u <= v` are considered.
    /// ** Panics if `u >= n` **
    fn edges_of(&self, u: Node, only_normalized: bool) -> impl Iterator<Item = WeightedEdge> + '_ {
        self.neighbors_of(u)
            .map(move |(v, w)| WeightedEdge(u, v, w))
            .filter(move |e| !only_normalized || e.is_normalized())
    }

    /// Returns an iterator over all edges in the graph; as edges are stored
    /// symmetrically, every edge is produced exactly once in normalized form.
    fn edges(&self) -> impl Iterator<Item = WeightedEdge> + '_ {
        self.vertices().flat_map(move |u| self.edges_of(u, true))
    }

    /// Returns all edges in the graph in sorted order
    fn ordered_edges(&self) -> Vec<WeightedEdge> {
        let mut edges = self.edges().collect_vec();
        edges.sort_unstable();
        edges
    }
}

/// Trait to test existence of edges in a graph
pub trait AdjacencyTest: GraphNodeOrder {
    /// Returns *true* if the edge `{u,v}` exists in the graph.
    /// O(degree) for list-backed graphs, O(1) for the matrix.
    /// ** Panics if `u >= n || v >= n` **
    fn has_edge(&self, u: Node, v: Node) -> bool;

    /// Returns the weight of the edge `{u,v}`, failing with
    /// [`GraphError::InvalidIndex`] for out-of-range endpoints and
    /// [`GraphError::EdgeNotFound`] if the edge is absent.
    fn weight_of(&self, u: Node, v: Node) -> Result<Weight>;

    /// Returns *true* if a self-loop `{u,u}` exists.
    /// ** Panics if `u >= n` **
    fn has_self_loop(&self, u: Node) -> bool {
        self.has_edge(u, u)
    }
}

/// Access to the payload type stored in a graph's vertices
pub trait GraphPayload {
    /// The data each vertex of this graph carries
    type Payload;
}

/// Trait for creating a new graph
pub trait GraphNew: GraphPayload + Sized {
    /// Creates an empty graph with no vertices
    fn new() -> Self;

    /// Creates a graph with `n` singleton vertices carrying default payloads
    fn with_vertices(n: NumNodes) -> Self
    where
        Self::Payload: Default;

    /// Creates a graph with one singleton vertex per payload, indexed in
    /// iteration order
    fn from_payloads<I>(payloads: I) -> Self
    where
        I: IntoIterator<Item = Self::Payload>;
}

/// Read access to vertex payloads
pub trait VertexPayloads: GraphPayload + GraphNodeOrder {
    /// Returns a reference to the payload of a given vertex.
    /// ** Panics if `u >= n` **
    fn payload_of(&self, u: Node) -> &Self::Payload;

    /// Returns a mutable reference to the payload of a given vertex.
    /// ** Panics if `u >= n` **
    fn payload_of_mut(&mut self, u: Node) -> &mut Self::Payload;

    /// Fallible variant of [`VertexPayloads::payload_of`]
    fn try_payload_of(&self, u: Node) -> Result<&Self::Payload> {
        self.check_vertex(u)?;
        Ok(self.payload_of(u))
    }
}

/// Provides functions to insert/update/delete edges
pub trait GraphEdgeEditing: GraphNodeOrder {
    /// Inserts the edge `{u,v}` with weight `w`, overwriting the weight if the
    /// edge already exists (idempotent upsert). Returns the previous weight.
    ///
    /// Fails with [`GraphError::InvalidIndex`] if either endpoint is out of
    /// range; in that case the graph is left unchanged.
    fn set_edge(&mut self, u: Node, v: Node, w: Weight) -> Result<Option<Weight>>;

    /// Inserts all edges in the collection via [`GraphEdgeEditing::set_edge`]
    fn set_edges<I, E>(&mut self, edges: I) -> Result<()>
    where
        I: IntoIterator<Item = E>,
        E: Into<WeightedEdge>,
    {
        for WeightedEdge(u, v, w) in edges.into_iter().map(|e| e.into()) {
            self.set_edge(u, v, w)?;
        }
        Ok(())
    }

    /// Removes the edge `{u,v}` and returns its weight, failing with
    /// [`GraphError::EdgeNotFound`] if the edge is absent
    fn remove_edge(&mut self, u: Node, v: Node) -> Result<Weight> {
        self.try_remove_edge(u, v)?
            .ok_or(GraphError::EdgeNotFound(u, v))
    }

    /// Removes the edge `{u,v}` if present and returns its weight.
    /// A missing edge is a no-op yielding `Ok(None)`; only out-of-range
    /// endpoints are an error.
    fn try_remove_edge(&mut self, u: Node, v: Node) -> Result<Option<Weight>>;
}

/// Provides functions to insert/delete vertices
pub trait GraphVertexEditing: GraphPayload + GraphNodeOrder {
    /// Appends a new singleton vertex and returns its index.
    /// Amortized O(1) for list-backed graphs, O(n) for the matrix
    /// (row/column growth).
    fn add_vertex(&mut self, data: Self::Payload) -> Node;

    /// Removes vertex `u` together with all incident edges and returns its
    /// payload. All vertices with indices greater than `u` shift down by one;
    /// stored neighbor indices are renamed accordingly.
    ///
    /// Fails with [`GraphError::InvalidIndex`] if `u` is out of range.
    fn remove_vertex(&mut self, u: Node) -> Result<Self::Payload>;
}

/// A super trait for creating a graph from scratch from a set of weighted
/// edges and a number of vertices
pub trait GraphFromScratch: GraphNew + GraphEdgeEditing {
    /// Creates a graph with `n` default-payload vertices and the given edges.
    ///
    /// # Examples
    /// ```
    /// use wgraphs::prelude::*;
    ///
    /// let g = GraphList::<()>::from_edges(3, [(0, 1, 4), (1, 2, 2)]).unwrap();
    /// assert_eq!(g.number_of_nodes(), 3);
    /// assert_eq!(g.number_of_edges(), 2);
    /// assert_eq!(g.weight_of(2, 1), Ok(2));
    /// ```
    fn from_edges<I, E>(n: NumNodes, edges: I) -> Result<Self>
    where
        Self::Payload: Default,
        I: IntoIterator<Item = E>,
        E: Into<WeightedEdge>,
    {
        let mut graph = Self::with_vertices(n);
        graph.set_edges(edges)?;
        Ok(graph)
    }
}

impl<G: GraphNew + GraphEdgeEditing> GraphFromScratch for G {}
