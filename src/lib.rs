/*!
`simplegraphs` is a small-graph library for **simple** undirected graphs with at most
[`MAX_NODES`]` = 16` vertices:
- no self-loops and no multi-edges,
- nodes are numbered `0` to `n - 1` and renumbered contiguously when a node is removed,
- graphs are read from and written to [graph6](io::graph6) text.

# Representation

We represent **nodes** as `u32` in the range `0..n` and **edges** as the tuple-struct
`Edge(Node, Node)`, where `Edge(u, v)` and `Edge(v, u)` denote the same edge.

The graph itself is stored as a [`ForwardStar`](crate::repr::ForwardStar): a flat
neighbor list split into one run per vertex by an offset table (the CSR layout). Each edge
is stored once per endpoint. Every structural edit (adding/removing a vertex or an edge)
rebuilds the whole layout, so the layout invariants hold after every call and a failed
call changes nothing.

# Usage

- [`prelude`] includes definitions for nodes, edges, errors, all graph operation traits and
  the representations,
- [`io`] includes the graph6 codec and line-oriented readers/writers.

```
use simplegraphs::prelude::*;

let mut graph = ForwardStar::new();
graph.try_add_node().unwrap();
graph.try_add_node().unwrap();
graph.try_add_edge(1, 2).unwrap();

assert_eq!(graph.number_of_nodes(), 3);
assert_eq!(graph.try_has_edge(2, 1), Ok(true));
assert_eq!(graph.try_has_edge(0, 3), Err(GraphError::Index { node: 3, number_of_nodes: 3 }));
assert_eq!(graph.to_string(), "BG");
```
*/

pub mod edge;
pub mod error;
pub mod io;
pub mod node;
pub mod ops;
pub mod repr;
#[cfg(test)]
pub(crate) mod testing;
pub mod utils;

pub use edge::*;
pub use error::*;
pub use node::*;

/// `simplegraphs::prelude` includes definitions for nodes, edges and errors, all basic graph
/// operation traits as well as all representations.
pub mod prelude {
    pub use super::{edge::*, error::*, node::*, ops::*, repr::*};
}
