use super::*;

/// An undirected weighted graph over a payload arena.
///
/// Vertices are identified by their insertion index into the arena; edges are
/// stored symmetrically in one [`Neighborhood`] per vertex. The choice of
/// `Nbs` yields the concrete representations [`GraphList`],
/// [`SparseGraphList`] and [`GraphMatrix`].
#[derive(Debug, Clone)]
pub struct WeightedGraph<T, Nbs: Neighborhood> {
    payloads: Vec<T>,
    nbs: Vec<Nbs>,
    num_edges: NumEdges,
}

/// Adjacency-list representation: O(n + m) space, neighbor enumeration in
/// insertion order, O(degree) edge lookup.
pub type GraphList<T> = WeightedGraph<T, ArrNeighborhood>;

/// Adjacency-list representation backed by inline small vectors.
/// Prefer this for graphs known to be very sparse.
pub type SparseGraphList<T> = WeightedGraph<T, SparseNeighborhood>;

/// Adjacency-matrix representation: O(n²) space, O(1) edge lookup,
/// neighbor enumeration in ascending index order.
pub type GraphMatrix<T> = WeightedGraph<T, DenseNeighborhood>;

impl<T, Nbs: Neighborhood> GraphNodeOrder for WeightedGraph<T, Nbs> {
    fn number_of_nodes(&self) -> NumNodes {
        self.payloads.len() as NumNodes
    }
}

impl<T, Nbs: Neighborhood> GraphEdgeOrder for WeightedGraph<T, Nbs> {
    fn number_of_edges(&self) -> NumEdges {
        self.num_edges
    }
}

impl<T, Nbs: Neighborhood> AdjacencyList for WeightedGraph<T, Nbs> {
    fn neighbors_of(&self, u: Node) -> impl Iterator<Item = (Node, Weight)> + '_ {
        self.nbs[u as usize].neighbors()
    }

    fn degree_of(&self, u: Node) -> NumNodes {
        self.nbs[u as usize].num_of_neighbors()
    }
}

impl<T, Nbs: Neighborhood> AdjacencyTest for WeightedGraph<T, Nbs> {
    fn has_edge(&self, u: Node, v: Node) -> bool {
        assert!(v < self.number_of_nodes());
        self.nbs[u as usize].has_neighbor(v)
    }

    fn weight_of(&self, u: Node, v: Node) -> Result<Weight> {
        self.check_vertex(u)?;
        self.check_vertex(v)?;
        self.nbs[u as usize]
            .weight_to(v)
            .ok_or(GraphError::EdgeNotFound(u, v))
    }
}

impl<T, Nbs: Neighborhood> GraphPayload for WeightedGraph<T, Nbs> {
    type Payload = T;
}

impl<T, Nbs: Neighborhood> GraphNew for WeightedGraph<T, Nbs> {
    fn new() -> Self {
        Self {
            payloads: Vec::new(),
            nbs: Vec::new(),
            num_edges: 0,
        }
    }

    fn with_vertices(n: NumNodes) -> Self
    where
        T: Default,
    {
        Self {
            payloads: (0..n).map(|_| T::default()).collect(),
            nbs: vec![Nbs::new(n); n as usize],
            num_edges: 0,
        }
    }

    fn from_payloads<I>(payloads: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let payloads: Vec<T> = payloads.into_iter().collect();
        let n = payloads.len() as NumNodes;
        Self {
            payloads,
            nbs: vec![Nbs::new(n); n as usize],
            num_edges: 0,
        }
    }
}

impl<T, Nbs: Neighborhood> VertexPayloads for WeightedGraph<T, Nbs> {
    fn payload_of(&self, u: Node) -> &T {
        &self.payloads[u as usize]
    }

    fn payload_of_mut(&mut self, u: Node) -> &mut T {
        &mut self.payloads[u as usize]
    }
}

impl<T, Nbs: Neighborhood> GraphEdgeEditing for WeightedGraph<T, Nbs> {
    fn set_edge(&mut self, u: Node, v: Node, w: Weight) -> Result<Option<Weight>> {
        self.check_vertex(u)?;
        self.check_vertex(v)?;

        let prev = self.nbs[u as usize].set_neighbor(v, w);
        if u != v {
            self.nbs[v as usize].set_neighbor(u, w);
        }
        if prev.is_none() {
            self.num_edges += 1;
        }
        Ok(prev)
    }

    fn try_remove_edge(&mut self, u: Node, v: Node) -> Result<Option<Weight>> {
        self.check_vertex(u)?;
        self.check_vertex(v)?;

        let removed = self.nbs[u as usize].try_remove_neighbor(v);
        if removed.is_some() {
            if u != v {
                self.nbs[v as usize].try_remove_neighbor(u);
            }
            self.num_edges -= 1;
        }
        Ok(removed)
    }
}

impl<T, Nbs: Neighborhood> GraphVertexEditing for WeightedGraph<T, Nbs> {
    fn add_vertex(&mut self, data: T) -> Node {
        let u = self.payloads.len() as Node;
        self.payloads.push(data);
        if Nbs::DENSE {
            for nb in &mut self.nbs {
                nb.push_slot();
            }
        }
        self.nbs.push(Nbs::new(self.number_of_nodes()));
        u
    }

    fn remove_vertex(&mut self, u: Node) -> Result<T> {
        self.check_vertex(u)?;

        // each incident edge (self-loops included) is stored exactly once
        // in u's own neighborhood
        self.num_edges -= self.nbs[u as usize].num_of_neighbors();
        self.nbs.remove(u as usize);
        for nb in &mut self.nbs {
            nb.remove_slot(u);
        }
        Ok(self.payloads.remove(u as usize))
    }
}

crate::testing::test_graph_ops!(graph_list, crate::repr::GraphList<u32>);
crate::testing::test_graph_ops!(sparse_graph_list, crate::repr::SparseGraphList<u32>);
crate::testing::test_graph_ops!(graph_matrix, crate::repr::GraphMatrix<u32>);

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;

    #[test]
    fn list_neighbors_in_insertion_order() {
        let g = GraphList::<()>::from_edges(5, [(2, 4, 1), (2, 0, 2), (2, 3, 3)]).unwrap();
        assert_eq!(
            g.neighbors_of(2).collect_vec(),
            vec![(4, 1), (0, 2), (3, 3)]
        );
    }

    #[test]
    fn matrix_neighbors_in_ascending_order() {
        let g = GraphMatrix::<()>::from_edges(5, [(2, 4, 1), (2, 0, 2), (2, 3, 3)]).unwrap();
        assert_eq!(
            g.neighbors_of(2).collect_vec(),
            vec![(0, 2), (3, 3), (4, 1)]
        );
    }

    #[test]
    fn payload_access() {
        let mut g = GraphList::<&str>::from_payloads(["Sun", "Sirius", "Vega"]);
        assert_eq!(g.number_of_nodes(), 3);
        assert_eq!(*g.payload_of(1), "Sirius");

        *g.payload_of_mut(1) = "Altair";
        assert_eq!(*g.payload_of(1), "Altair");

        assert_eq!(
            g.try_payload_of(3),
            Err(GraphError::InvalidIndex { index: 3, len: 3 })
        );
    }

    #[test]
    fn self_loop_counts_once() {
        let mut g = GraphMatrix::<()>::with_vertices(2);
        g.set_edge(0, 0, 7).unwrap();
        assert_eq!(g.number_of_edges(), 1);
        assert!(g.has_self_loop(0));
        assert_eq!(g.degree_of(0), 1);

        assert_eq!(g.remove_edge(0, 0), Ok(7));
        assert_eq!(g.number_of_edges(), 0);
    }

    #[test]
    fn edges_are_produced_once() {
        let edges = [(0u32, 1u32, 5i64), (1, 2, 3), (1, 1, 9)];
        let g = GraphList::<()>::from_edges(3, edges).unwrap();
        assert_eq!(
            g.ordered_edges(),
            vec![
                WeightedEdge(0, 1, 5),
                WeightedEdge(1, 1, 9),
                WeightedEdge(1, 2, 3)
            ]
        );
    }
}
