/*!
# Errors

All fallible operations in this crate report a [`GraphError`]. Failures are
local and synchronous: an offending call returns the error directly and leaves
the graph unchanged. The crate never retries or logs; callers (typically a UI
layer) decide how to surface the message.
*/

use thiserror::Error;

use crate::{
    edge::Weight,
    node::{Node, NumNodes},
};

/// Errors reported by graph operations and algorithms.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum GraphError {
    /// A vertex index was outside `0..n`
    #[error("vertex index {index} is out of range (graph has {len} vertices)")]
    InvalidIndex { index: Node, len: NumNodes },

    /// A queried edge does not exist
    #[error("no edge between vertices {0} and {1}")]
    EdgeNotFound(Node, Node),

    /// `dequeue` was called on an empty queue
    #[error("dequeue on an empty queue")]
    EmptyQueue,

    /// Dijkstra touched an edge with negative weight
    #[error("edge ({0},{1}) has negative weight {2}")]
    NegativeWeight(Node, Node, Weight),

    /// An algorithm was invoked on a graph without vertices
    #[error("operation requires a non-empty graph")]
    EmptyGraph,
}

/// Crate-wide result alias
pub type Result<T> = std::result::Result<T, GraphError>;
