//! Error types for graph construction, editing and graph6 decoding.
//!
//! Fallible graph operations return [`GraphResult`]. Decoding errors are kept in their own
//! [`Graph6Error`] type so that the codec can be used without pulling in the editing
//! taxonomy; they convert into [`GraphError::Format`].

use thiserror::Error;

use crate::node::{Node, NumNodes};

/// Result type alias for graph operations.
pub type GraphResult<T> = Result<T, GraphError>;

/// Malformed graph6 input.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Graph6Error {
    /// Input ended before the adjacency triangle was complete (or was empty).
    #[error("graph6 text too short: expected {expected} bytes, got {found}")]
    TooShort { expected: usize, found: usize },

    /// Bytes remain after the adjacency triangle was fully read.
    #[error("graph6 text too long: expected {expected} bytes, got {found}")]
    TooLong { expected: usize, found: usize },

    /// The header byte does not encode an order in `1..=MAX_NODES`.
    #[error("invalid graph6 order byte {0:#04x} (order must be in 1..=16)")]
    InvalidOrder(u8),

    /// A body byte lies outside of the printable range `63..=126`.
    #[error("invalid graph6 character {byte:#04x} at position {position}")]
    InvalidCharacter { position: usize, byte: u8 },
}

/// Errors of graph construction and structural editing.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphError {
    /// Decoding graph6 text failed.
    #[error(transparent)]
    Format(#[from] Graph6Error),

    /// The graph already holds `MAX_NODES` vertices.
    #[error("too many vertices: capacity of 16 vertices exceeded")]
    Capacity,

    /// The operation would leave the graph without any vertex.
    #[error("graph must have vertices")]
    NoVertices,

    /// A vertex index is not in `0..number_of_nodes`.
    #[error("node {node} out of range for graph with {number_of_nodes} nodes")]
    Index {
        node: Node,
        number_of_nodes: NumNodes,
    },

    /// Simple graphs do not allow an edge from a vertex to itself.
    #[error("self-loop at node {0} not allowed in a simple graph")]
    SelfLoop(Node),
}
