/*!
# Graph Algorithms

This module provides the **graph algorithms** built on top of the graph
representations in this crate. All algorithms are re-exported at the top
level of this module, so you can simply do:
```rust
use wgraphs::algo::*;
```
and gain access to traversal, shortest-path, and connectivity routines.
Where possible, algorithms are provided as **iterators** so results can
be consumed lazily; each is additionally wrapped in a [`GraphAlgorithm`]
runner for callers that want a plain "construct, run, inspect" interface.
*/

mod connectivity;
mod dijkstra;
mod traversal;

use crate::{prelude::*, utils::*};

pub use connectivity::*;
pub use dijkstra::*;
pub use traversal::*;

/// Access to the graph an algorithm instance operates on.
pub trait WithGraphRef<G> {
    /// Returns the graph being processed.
    fn graph_ref(&self) -> &G;
}

/// Uniform interface for algorithms that run against a borrowed graph.
///
/// An algorithm instance is bound to one graph; [`run`](GraphAlgorithm::run)
/// may be invoked repeatedly with different start vertices and resets all
/// internal state on each call. After the graph has been mutated, simply run
/// the same kind of algorithm again on the updated graph.
pub trait GraphAlgorithm<'a, G>: WithGraphRef<G> + Sized {
    /// Result type of a successful run.
    type Output;

    /// Binds a new algorithm instance to `graph`.
    fn new(graph: &'a G) -> Self;

    /// Executes the algorithm from `start`.
    fn run(&mut self, start: Node) -> Result<Self::Output>;
}
