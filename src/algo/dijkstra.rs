/*!
Single-source shortest paths via Dijkstra's algorithm.

The implementation uses the textbook quadratic variant: each round scans
for the unsettled vertex with the smallest tentative distance and relaxes
its incident edges. With the dense representations of this crate (small
editor graphs, frequently near-complete) this is simpler than a heap and
not measurably slower.

Vertex selection scans indices in ascending order with a strict
comparison, so among equally distant candidates the smallest index is
settled first. This makes results fully deterministic.
*/

use super::*;

/// Result of a Dijkstra run: tentative distances and the shortest-path
/// tree rooted at the start vertex.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortestPaths {
    start: Node,
    dist: Vec<Option<Weight>>,
    pred: Vec<Option<OptionalNode>>,
}

impl ShortestPaths {
    /// The vertex all paths originate from.
    pub fn start(&self) -> Node {
        self.start
    }

    /// Returns the length of the shortest path from the start to `v`, or
    /// `None` if `v` is unreachable.
    /// ** Panics if `v >= n` **
    pub fn distance_to(&self, v: Node) -> Option<Weight> {
        self.dist[v as usize]
    }

    /// Returns the parent of `v` in the shortest-path tree. The start
    /// vertex and unreachable vertices have no parent.
    /// ** Panics if `v >= n` **
    pub fn predecessor_of(&self, v: Node) -> Option<Node> {
        self.pred[v as usize].map(|p| p.get())
    }

    /// Returns *true* if a path from the start to `v` exists.
    /// ** Panics if `v >= n` **
    pub fn is_reachable(&self, v: Node) -> bool {
        self.dist[v as usize].is_some()
    }

    /// Reconstructs the shortest path from the start to `v` as a vertex
    /// sequence including both endpoints. Returns `None` if `v` is
    /// unreachable.
    /// ** Panics if `v >= n` **
    pub fn path_to(&self, v: Node) -> Option<Vec<Node>> {
        self.dist[v as usize]?;

        let mut path = vec![v];
        let mut node = v;
        while let Some(p) = self.pred[node as usize] {
            node = p.get();
            path.push(node);
        }
        path.reverse();
        Some(path)
    }
}

/// [`GraphAlgorithm`] computing single-source shortest paths.
///
/// All edge weights reachable from the start must be non-negative;
/// touching a negative edge aborts the run with
/// [`GraphError::NegativeWeight`].
pub struct Dijkstra<'a, G> {
    graph: &'a G,
}

impl<G> WithGraphRef<G> for Dijkstra<'_, G> {
    fn graph_ref(&self) -> &G {
        self.graph
    }
}

impl<'a, G: AdjacencyList> GraphAlgorithm<'a, G> for Dijkstra<'a, G> {
    type Output = ShortestPaths;

    fn new(graph: &'a G) -> Self {
        Self { graph }
    }

    fn run(&mut self, start: Node) -> Result<ShortestPaths> {
        self.graph.check_vertex(start)?;

        let n = self.graph.len();
        let mut dist: Vec<Option<Weight>> = vec![None; n];
        let mut pred: Vec<Option<OptionalNode>> = vec![None; n];
        let mut settled = vec![false; n];

        dist[start as usize] = Some(0);

        while let Some((u, dist_u)) = pick_closest_unsettled(&dist, &settled) {
            settled[u as usize] = true;

            for (v, w) in self.graph.neighbors_of(u) {
                if w < 0 {
                    return Err(GraphError::NegativeWeight(u, v, w));
                }
                if settled[v as usize] {
                    continue;
                }

                let candidate = dist_u + w;
                if dist[v as usize].is_none_or(|d| candidate < d) {
                    dist[v as usize] = Some(candidate);
                    pred[v as usize] = OptionalNode::new(u);
                }
            }
        }

        Ok(ShortestPaths { start, dist, pred })
    }
}

/// Returns the unsettled vertex with the smallest tentative distance.
/// Ascending scan with strict comparison yields the lowest index on ties.
fn pick_closest_unsettled(dist: &[Option<Weight>], settled: &[bool]) -> Option<(Node, Weight)> {
    let mut best: Option<(Node, Weight)> = None;
    for (u, d) in dist.iter().enumerate() {
        if settled[u] {
            continue;
        }
        if let Some(d) = *d {
            if best.is_none_or(|(_, bd)| d < bd) {
                best = Some((u as Node, d));
            }
        }
    }
    best
}

/// Exposes Dijkstra directly as a method on graph types.
pub trait ShortestPath: AdjacencyList + Sized {
    /// Computes shortest paths from `start` to all reachable vertices.
    ///
    /// # Examples
    /// ```
    /// use wgraphs::{prelude::*, algo::*};
    ///
    /// let g = GraphList::<()>::from_edges(3, [(0, 1, 2), (1, 2, 3)]).unwrap();
    ///
    /// let paths = g.dijkstra(0).unwrap();
    /// assert_eq!(paths.distance_to(2), Some(5));
    /// assert_eq!(paths.path_to(2), Some(vec![0, 1, 2]));
    /// ```
    fn dijkstra(&self, start: Node) -> Result<ShortestPaths> {
        Dijkstra::new(self).run(start)
    }
}

impl<G> ShortestPath for G where G: AdjacencyList + Sized {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repr::{GraphList, GraphMatrix};

    //      1        2
    //  0 ----- 1 ------ 2 ----- 3
    //   \              /      7
    //    \----- 4 ----/
    fn route_map<G: GraphFromScratch<Payload = ()> + AdjacencyList>() -> G {
        G::from_edges(4, [(0, 1, 1), (1, 2, 2), (0, 2, 4), (2, 3, 7)]).unwrap()
    }

    fn check_route_map<G: GraphFromScratch<Payload = ()> + AdjacencyList>() {
        let graph: G = route_map();
        let paths = graph.dijkstra(0).unwrap();

        assert_eq!(paths.start(), 0);
        assert_eq!(paths.distance_to(0), Some(0));
        assert_eq!(paths.distance_to(1), Some(1));
        assert_eq!(paths.distance_to(2), Some(3));
        assert_eq!(paths.distance_to(3), Some(10));

        assert_eq!(paths.predecessor_of(0), None);
        assert_eq!(paths.predecessor_of(2), Some(1));
        assert_eq!(paths.path_to(3), Some(vec![0, 1, 2, 3]));
    }

    #[test]
    fn route_map_list() {
        check_route_map::<GraphList<()>>();
    }

    #[test]
    fn route_map_matrix() {
        check_route_map::<GraphMatrix<()>>();
    }

    #[test]
    fn unreachable_vertices() {
        let graph = GraphList::<()>::from_edges(4, [(0, 1, 5)]).unwrap();
        let paths = graph.dijkstra(0).unwrap();

        assert!(paths.is_reachable(1));
        assert!(!paths.is_reachable(2));
        assert_eq!(paths.distance_to(3), None);
        assert_eq!(paths.path_to(2), None);
    }

    #[test]
    fn equal_cost_ties_are_deterministic() {
        // two shortest paths to 3; vertex 1 is settled before vertex 2
        let graph =
            GraphList::<()>::from_edges(4, [(0, 1, 1), (0, 2, 1), (1, 3, 1), (2, 3, 1)]).unwrap();
        let paths = graph.dijkstra(0).unwrap();

        assert_eq!(paths.distance_to(3), Some(2));
        assert_eq!(paths.predecessor_of(3), Some(1));
        assert_eq!(paths.path_to(3), Some(vec![0, 1, 3]));
    }

    #[test]
    fn negative_edge_aborts() {
        let graph = GraphList::<()>::from_edges(3, [(0, 1, 1), (1, 2, -5)]).unwrap();
        assert_eq!(
            graph.dijkstra(0),
            Err(GraphError::NegativeWeight(1, 2, -5))
        );
    }

    #[test]
    fn unreached_negative_edge_is_ignored() {
        let graph = GraphList::<()>::from_edges(4, [(0, 1, 1), (2, 3, -4)]).unwrap();
        let paths = graph.dijkstra(0).unwrap();
        assert_eq!(paths.distance_to(1), Some(1));
        assert!(!paths.is_reachable(2));
    }

    #[test]
    fn zero_weight_edges() {
        let graph = GraphList::<()>::from_edges(3, [(0, 1, 0), (1, 2, 0)]).unwrap();
        let paths = graph.dijkstra(0).unwrap();
        assert_eq!(paths.distance_to(2), Some(0));
        assert_eq!(paths.path_to(2), Some(vec![0, 1, 2]));
    }

    #[test]
    fn invalid_start_fails() {
        let graph = GraphList::<()>::from_edges(2, [(0, 1, 1)]).unwrap();
        assert_eq!(
            graph.dijkstra(2),
            Err(GraphError::InvalidIndex { index: 2, len: 2 })
        );
    }

    #[test]
    fn rerun_after_edge_removal() {
        let mut graph: GraphList<()> = route_map();

        let mut dijkstra = Dijkstra::new(&graph);
        assert_eq!(dijkstra.run(0).unwrap().distance_to(2), Some(3));
        drop(dijkstra);

        graph.remove_edge(1, 2).unwrap();
        assert_eq!(graph.dijkstra(0).unwrap().distance_to(2), Some(4));
    }

    #[test]
    fn self_loops_do_not_change_distances() {
        let mut graph: GraphList<()> = route_map();
        graph.set_edge(1, 1, 3).unwrap();

        let paths = graph.dijkstra(0).unwrap();
        assert_eq!(paths.distance_to(1), Some(1));
        assert_eq!(paths.distance_to(3), Some(10));
    }
}
