use std::fmt::{Debug, Display};

use crate::node::Node;

/// Edge weights are signed 64-bit integers.
/// CHANGE it to a wider or floating type if this does not suffice (which it usually should).
pub type Weight = i64;

/// We limit the number of edges to `2^32 - 1`.
/// CHANGE it to `u64` if this does not suffice (which it usually should).
pub type NumEdges = u32;

/// An edge is defined by two nodes/endpoints. As all graphs in this crate are
/// undirected, `Edge(u, v)` and `Edge(v, u)` identify the same edge.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Edge(pub Node, pub Node);

impl Display for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{})", self.0, self.1)
    }
}

impl Debug for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        <Self as Display>::fmt(self, f)
    }
}

impl Edge {
    /// Normalizes the edge such that the endpoint with smaller value comes first
    pub fn normalized(&self) -> Self {
        Edge(self.0.min(self.1), self.0.max(self.1))
    }

    /// Returns true if the endpoint with smaller index comes first
    pub fn is_normalized(&self) -> bool {
        self.0 <= self.1
    }

    /// Returns true if both endpoints are equal
    pub fn is_loop(&self) -> bool {
        self.0 == self.1
    }

    /// Reverses the edge by switching the endpoints
    pub fn reverse(&self) -> Self {
        Edge(self.1, self.0)
    }
}

impl From<(Node, Node)> for Edge {
    fn from(value: (Node, Node)) -> Self {
        Edge(value.0, value.1)
    }
}

impl From<&Edge> for Edge {
    fn from(value: &Edge) -> Self {
        *value
    }
}

/// An edge together with its weight.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WeightedEdge(pub Node, pub Node, pub Weight);

impl Display for WeightedEdge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{}|{})", self.0, self.1, self.2)
    }
}

impl Debug for WeightedEdge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        <Self as Display>::fmt(self, f)
    }
}

impl WeightedEdge {
    /// Returns the endpoint-pair identifying this edge
    pub fn endpoints(&self) -> Edge {
        Edge(self.0, self.1)
    }

    /// Returns the weight of this edge
    pub fn weight(&self) -> Weight {
        self.2
    }

    /// Normalizes the edge such that the endpoint with smaller value comes first
    pub fn normalized(&self) -> Self {
        WeightedEdge(self.0.min(self.1), self.0.max(self.1), self.2)
    }

    /// Returns true if the endpoint with smaller index comes first
    pub fn is_normalized(&self) -> bool {
        self.0 <= self.1
    }

    /// Returns true if both endpoints are equal
    pub fn is_loop(&self) -> bool {
        self.0 == self.1
    }
}

impl From<(Node, Node, Weight)> for WeightedEdge {
    fn from(value: (Node, Node, Weight)) -> Self {
        WeightedEdge(value.0, value.1, value.2)
    }
}

/// Unweighted tuples default to weight `1` which is convenient for
/// traversal- and connectivity-only graphs.
impl From<(Node, Node)> for WeightedEdge {
    fn from(value: (Node, Node)) -> Self {
        WeightedEdge(value.0, value.1, 1)
    }
}

impl From<&WeightedEdge> for WeightedEdge {
    fn from(value: &WeightedEdge) -> Self {
        *value
    }
}
