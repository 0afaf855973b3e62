/*!
# Node Representation

Nodes are plain `u32` values in the range `0..n`. Graphs in this crate never exceed
[`MAX_NODES`] vertices, but we keep the wider integer so node values can be used as
indices and in arithmetic without conversions at every call site.
*/

/// Nodes can be any unsigned integer from `0` to `MAX_NODES - 1`
pub type Node = u32;

/// Number of nodes of a graph
pub type NumNodes = Node;

/// Maximum number of vertices a forward-star graph can hold
pub const MAX_NODES: NumNodes = 16;

/// Maximum length of the flat neighbor list, reached by the complete graph on
/// [`MAX_NODES`] vertices (every edge is stored once per endpoint)
pub const MAX_NEIGHBOR_ENTRIES: usize = (MAX_NODES * (MAX_NODES - 1)) as usize;
