/*!
`wgraphs` is a graph data structure & algorithms library designed for graphs that are
- **w**eighted : Every edge carries a signed integer weight
- **labelled** : Every vertex carries an arbitrary payload of your choosing
- **undirected** : `Edge(u, v)` and `Edge(v, u)` identify the same edge

It grew out of a star-map editor where vertices are celestial objects and
edge weights are travel costs, but nothing in the crate is specific to
that domain.

# Representation

We represent **vertices** as `u32` indices in the range `0..n` where `n` is the
number of vertices in the graph. Vertex payloads live in an arena indexed by
these values, so cloning a vertex handle is always cheap. For **edges**, we use
the tuple-structs `Edge(Node, Node)` and `WeightedEdge(Node, Node, Weight)`.

### Available Representations

See the [`repr`] module for the full list of graph storage backends:

- [`GraphList`](crate::repr::GraphList)
- [`SparseGraphList`](crate::repr::SparseGraphList)
- [`GraphMatrix`](crate::repr::GraphMatrix)

The list variants store per-vertex neighbor vectors (compact, O(degree)
edge lookup); the matrix variant stores one slot per vertex pair (O(n²)
space, O(1) edge lookup). All of them implement the same operation traits,
so algorithms are written once and run on any backend.

# Design

Algorithms are provided as configurable structs implementing
[`GraphAlgorithm`](crate::algo::GraphAlgorithm): bind an instance to a graph,
then `run` it from any start vertex, as often as you like. The most commonly
used functionality is additionally exposed via traits on the graph itself
(`graph.bfs(start)`, `graph.dijkstra(start)`, `graph.is_connected()`), making
it usable without configuring anything beforehand.

All fallible operations return a [`GraphError`](crate::error::GraphError);
a failed call never leaves the graph in a partially modified state.

# Usage

There are *4* core submodules you probably want to interact with:
- [`prelude`] includes definitions for vertices, edges, errors, basic graph
  operations, and all graph representations,
- [`algo`] includes traversal (BFS/DFS), shortest paths (Dijkstra) and
  connectivity queries,
- [`gens`] includes a seedable random source and random graph generation,
- [`utils`] includes the supporting containers ([`Queue`](crate::utils::Queue),
  [`Set`](crate::utils::Set)) the algorithms are built on.

In most use-cases, `use wgraphs::{prelude::*, algo::*};` suffices for your needs.

# When to use

You should only use this library if the following apply:
- Your graphs are undirected with integer edge weights
- You want payloads attached to vertices without managing them yourself
- You require only basic graph functionality

In all other cases, it might make sense for you to check out
[petgraph](https://crates.io/crates/petgraph) who provide a more extensive
library for general graphs in *Rust*.
*/

pub mod algo;
pub mod edge;
pub mod error;
pub mod gens;
pub mod node;
pub mod ops;
pub mod repr;
pub(crate) mod testing;
pub mod utils;

/// `wgraphs::prelude` includes definitions for vertices, edges and errors, all
/// basic graph operation traits as well as all implemented representations.
pub mod prelude {
    pub use super::{edge::*, error::*, node::*, ops::*, repr::*};
}
