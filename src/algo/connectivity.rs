/*!
Connectivity queries over undirected graphs.

Both the [`IsConnected`] runner and the [`ConnectedComponents`] iterator
are thin layers over BFS: a graph is connected iff a single search covers
all vertices, and restarting an exhausted search at unvisited vertices
enumerates the components one at a time.
*/

use itertools::Itertools;

use super::*;

/// Iterates over the connected components of a graph, emitting the
/// vertices of one component at a time. Components appear ordered by
/// their smallest vertex.
pub struct ConnectedComponents<'a, G>
where
    G: AdjacencyList,
{
    bfs: Option<Bfs<'a, G>>,
}

impl<'a, G> ConnectedComponents<'a, G>
where
    G: AdjacencyList,
{
    pub fn new(graph: &'a G) -> Self {
        Self {
            // a graph without vertices has no components to emit
            bfs: graph.bfs(0).ok(),
        }
    }
}

impl<G> Iterator for ConnectedComponents<'_, G>
where
    G: AdjacencyList,
{
    type Item = Vec<Node>;

    fn next(&mut self) -> Option<Self::Item> {
        let bfs = self.bfs.as_mut()?;
        loop {
            let cc = bfs.by_ref().collect_vec();
            if !cc.is_empty() {
                return Some(cc);
            }

            if !bfs.try_restart_at_unvisited() {
                return None;
            }
        }
    }
}

/// [`GraphAlgorithm`] deciding whether every vertex is reachable from the
/// start vertex.
///
/// Running it on a graph without vertices fails with
/// [`GraphError::EmptyGraph`] since neither answer would be meaningful.
pub struct IsConnected<'a, G> {
    graph: &'a G,
}

impl<G> WithGraphRef<G> for IsConnected<'_, G> {
    fn graph_ref(&self) -> &G {
        self.graph
    }
}

impl<'a, G: AdjacencyList> GraphAlgorithm<'a, G> for IsConnected<'a, G> {
    type Output = bool;

    fn new(graph: &'a G) -> Self {
        Self { graph }
    }

    fn run(&mut self, start: Node) -> Result<bool> {
        if self.graph.is_empty() {
            return Err(GraphError::EmptyGraph);
        }
        Ok(self.graph.bfs(start)?.count() == self.graph.len())
    }
}

/// Exposes connectivity queries directly as methods on graph types.
pub trait Connectivity: AdjacencyList + Sized {
    /// Returns *true* if the graph consists of a single connected
    /// component. Fails with [`GraphError::EmptyGraph`] on a graph
    /// without vertices.
    ///
    /// # Examples
    /// ```
    /// use wgraphs::{prelude::*, algo::*};
    ///
    /// let g = GraphList::<()>::from_edges(3, [(0, 1), (1, 2)]).unwrap();
    /// assert_eq!(g.is_connected(), Ok(true));
    /// ```
    fn is_connected(&self) -> Result<bool> {
        IsConnected::new(self).run(0)
    }

    /// Returns an iterator over the connected components.
    fn connected_components(&self) -> ConnectedComponents<'_, Self> {
        ConnectedComponents::new(self)
    }

    /// Returns the number of connected components. A graph without
    /// vertices has zero components.
    fn number_of_components(&self) -> usize {
        self.connected_components().count()
    }
}

impl<G> Connectivity for G where G: AdjacencyList + Sized {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repr::{GraphList, GraphMatrix};

    #[test]
    fn connected_path() {
        let graph = GraphMatrix::<()>::from_edges(4, [(0, 1), (1, 2), (2, 3)]).unwrap();
        assert_eq!(graph.is_connected(), Ok(true));
        assert_eq!(graph.number_of_components(), 1);
    }

    #[test]
    fn split_into_two_components() {
        let graph = GraphList::<()>::from_edges(5, [(0, 1), (1, 2), (3, 4)]).unwrap();
        assert_eq!(graph.is_connected(), Ok(false));
        assert_eq!(
            graph.connected_components().collect_vec(),
            vec![vec![0, 1, 2], vec![3, 4]]
        );
    }

    #[test]
    fn isolated_vertices_are_own_components() {
        let graph = GraphList::<u32>::with_vertices(3);
        assert_eq!(graph.is_connected(), Ok(false));
        assert_eq!(graph.number_of_components(), 3);
    }

    #[test]
    fn single_vertex_is_connected() {
        let graph = GraphList::<u32>::with_vertices(1);
        assert_eq!(graph.is_connected(), Ok(true));
    }

    #[test]
    fn empty_graph_fails() {
        let graph = GraphList::<u32>::new();
        assert_eq!(graph.is_connected(), Err(GraphError::EmptyGraph));
        assert_eq!(IsConnected::new(&graph).run(0), Err(GraphError::EmptyGraph));
        assert_eq!(graph.number_of_components(), 0);
    }

    #[test]
    fn connectivity_reflects_edits() {
        let mut graph = GraphList::<()>::from_edges(3, [(0, 1), (1, 2)]).unwrap();
        assert_eq!(graph.is_connected(), Ok(true));

        graph.remove_edge(1, 2).unwrap();
        assert_eq!(graph.is_connected(), Ok(false));
        assert_eq!(graph.number_of_components(), 2);

        graph.set_edge(0, 2, 5).unwrap();
        assert_eq!(graph.is_connected(), Ok(true));
    }

    #[test]
    fn runner_from_any_start() {
        let graph = GraphMatrix::<()>::from_edges(4, [(0, 1), (1, 2), (2, 3)]).unwrap();
        let mut algo = IsConnected::new(&graph);
        for u in graph.vertices() {
            assert_eq!(algo.run(u), Ok(true));
        }
        assert_eq!(
            algo.run(4),
            Err(GraphError::InvalidIndex { index: 4, len: 4 })
        );
    }
}
