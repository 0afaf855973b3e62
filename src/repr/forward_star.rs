/*!
# Forward-Star Graph Representation

[`ForwardStar`] stores a simple undirected graph with at most [`MAX_NODES`] vertices in
**forward-star** form: one flat neighbor list, partitioned into one contiguous run per
vertex by an offset table whose last entry is a sentinel equal to the length of the
neighbor list. Every undirected edge `{u, v}` appears twice, once as `v` in the run of `u`
and once as `u` in the run of `v`, so the sentinel always equals `2 * m`.

Runs list neighbors in insertion order. Graphs decoded from graph6 start with every run
sorted ascending; edges added later are appended at the end of the two affected runs.

## Editing

The layout is never patched in place. Every structural edit builds a complete new offset
table and neighbor list from the current one and only replaces the graph after the rebuild
succeeded, so a failing operation leaves the graph untouched. With at most 16 vertices and
240 neighbor entries, a rebuild is bounded by a small constant.

```
use simplegraphs::prelude::*;

let mut graph: ForwardStar = "A_".parse().unwrap();
assert!(graph.has_edge(1, 0));

let w = graph.try_add_node().unwrap();
graph.try_add_edge(w, 0).unwrap();
assert_eq!(graph.to_string(), "Bo");
```
*/

use std::{
    fmt::{self, Debug, Display},
    iter,
    str::FromStr,
};

use itertools::Itertools;
use tracing::trace;

use super::*;
use crate::{io::graph6, utils::sliced_buffer::SlicedBuffer};

/// Forward-star representation of a simple undirected graph with `1..=MAX_NODES` vertices.
///
/// Equality is representation equality: two graphs are equal iff they agree on the number
/// of vertices and edges, the offset table and the complete neighbor list. Two graphs with
/// the same edge set but differently ordered runs compare unequal.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct ForwardStar {
    nbs: SlicedBuffer<Node>,
}

impl Default for ForwardStar {
    /// A single isolated vertex
    fn default() -> Self {
        Self {
            nbs: SlicedBuffer::default(),
        }
    }
}

impl ForwardStar {
    /// Creates a graph with a single vertex and no edges
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a graph with `n` isolated vertices
    pub fn try_with_nodes(n: NumNodes) -> GraphResult<Self> {
        if n == 0 {
            return Err(GraphError::NoVertices);
        }
        if n > MAX_NODES {
            return Err(GraphError::Capacity);
        }

        Ok(Self::from_runs((0..n).map(|_| iter::empty())))
    }

    /// Creates a graph with `n` vertices and the given edges (in order of insertion).
    /// Edges occurring multiple times are inserted once.
    pub fn try_from_edges(
        n: NumNodes,
        edges: impl IntoIterator<Item = impl Into<Edge>>,
    ) -> GraphResult<Self> {
        let mut graph = Self::try_with_nodes(n)?;
        graph.try_add_edges(edges)?;
        Ok(graph)
    }

    /// Decodes a graph from its graph6 representation
    pub fn try_from_graph6(text: &str) -> Result<Self, Graph6Error> {
        graph6::decode(text.as_bytes()).map(|matrix| Self::from(&matrix))
    }

    /// Re-initializes the graph from graph6 text.
    /// If decoding fails, the graph is left unchanged.
    pub fn assign_graph6(&mut self, text: &str) -> Result<(), Graph6Error> {
        *self = Self::try_from_graph6(text)?;
        Ok(())
    }

    /// Encodes the graph in graph6
    pub fn to_graph6(&self) -> String {
        graph6::encode(&AdjacencyMatrix::from(self))
    }

    /// Returns the offset table including the trailing sentinel (`n + 1` entries)
    pub fn offsets(&self) -> &[NumEdges] {
        self.nbs.raw_offset_slice()
    }

    /// Returns the flat neighbor list (`2 * m` entries)
    pub fn neighbors(&self) -> &[Node] {
        self.nbs.raw_buffer_slice()
    }

    /// Returns *true* if the layout describes a simple undirected graph within capacity:
    /// every neighbor is a vertex other than the owner of its run, appears at most once
    /// per run, and is matched by exactly one reverse entry.
    pub fn is_consistent(&self) -> bool {
        let n = self.number_of_nodes();

        (1..=MAX_NODES).contains(&n)
            && self.neighbors().len() <= MAX_NEIGHBOR_ENTRIES
            && self.vertices().all(|u| {
                self.nbs[u].iter().all_unique()
                    && self.nbs[u].iter().all(|&v| {
                        v < n && v != u && self.nbs[v].iter().filter(|&&w| w == u).count() == 1
                    })
            })
    }

    /// Builds the graph whose run `i` is the `i`-th element of `runs`
    fn from_runs<I, R>(runs: I) -> Self
    where
        I: IntoIterator<Item = R>,
        R: IntoIterator<Item = Node>,
    {
        let graph = Self {
            nbs: SlicedBuffer::from_slices(runs),
        };
        debug_assert!(graph.is_consistent(), "{graph:?}");
        graph
    }
}

impl GraphNodeOrder for ForwardStar {
    fn number_of_nodes(&self) -> NumNodes {
        self.nbs.len() as NumNodes
    }
}

impl GraphEdgeOrder for ForwardStar {
    fn number_of_edges(&self) -> NumEdges {
        self.nbs.number_of_entries() / 2
    }
}

impl AdjacencyList for ForwardStar {
    fn neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_ {
        self.nbs[u].iter().copied()
    }

    fn degree_of(&self, u: Node) -> NumNodes {
        self.nbs.size_of(u)
    }
}

impl AdjacencyTest for ForwardStar {
    fn has_edge(&self, u: Node, v: Node) -> bool {
        self.nbs[u].contains(&v)
    }
}

impl GraphNodeEditing for ForwardStar {
    fn try_add_node(&mut self) -> GraphResult<Node> {
        let u = self.number_of_nodes();
        if u == MAX_NODES {
            return Err(GraphError::Capacity);
        }

        let rebuilt = Self::from_runs(
            self.nbs
                .iter()
                .chain(iter::once(&[] as &[Node]))
                .map(|run| run.iter().copied()),
        );

        *self = rebuilt;
        trace!(u, n = u + 1, "added vertex");
        Ok(u)
    }

    fn try_remove_node(&mut self, u: Node) -> GraphResult<()> {
        if self.number_of_nodes() == 1 {
            return Err(GraphError::NoVertices);
        }
        self.check_node(u)?;

        let nbs = &self.nbs;
        let rebuilt = Self::from_runs(self.vertices().filter(move |&w| w != u).map(move |w| {
            nbs[w]
                .iter()
                .copied()
                .filter(move |&x| x != u)
                .map(move |x| if x > u { x - 1 } else { x })
        }));

        trace!(
            u,
            removed_edges = self.degree_of(u),
            n = rebuilt.number_of_nodes(),
            "removed vertex"
        );
        *self = rebuilt;
        Ok(())
    }
}

impl GraphEdgeEditing for ForwardStar {
    fn try_add_edge(&mut self, u: Node, v: Node) -> GraphResult<bool> {
        self.check_node(u)?;
        self.check_node(v)?;
        if u == v {
            return Err(GraphError::SelfLoop(u));
        }
        if self.has_edge(u, v) {
            return Ok(true);
        }

        let nbs = &self.nbs;
        let rebuilt = Self::from_runs(self.vertices().map(move |w| {
            nbs[w]
                .iter()
                .copied()
                .chain((w == u).then_some(v))
                .chain((w == v).then_some(u))
        }));

        *self = rebuilt;
        trace!(u, v, m = self.number_of_edges(), "added edge");
        Ok(false)
    }

    fn try_remove_edge(&mut self, u: Node, v: Node) -> GraphResult<bool> {
        self.check_node(u)?;
        self.check_node(v)?;
        if !self.has_edge(u, v) {
            return Ok(false);
        }

        let nbs = &self.nbs;
        let rebuilt = Self::from_runs(self.vertices().map(move |w| {
            nbs[w]
                .iter()
                .copied()
                .filter(move |&x| !(w == u && x == v) && !(w == v && x == u))
        }));

        *self = rebuilt;
        trace!(u, v, m = self.number_of_edges(), "removed edge");
        Ok(true)
    }
}

impl From<&AdjacencyMatrix> for ForwardStar {
    /// Every run lists the neighbors in increasing order
    fn from(matrix: &AdjacencyMatrix) -> Self {
        Self::from_runs(matrix.vertices().map(|u| matrix.neighbors_of(u)))
    }
}

impl From<&ForwardStar> for AdjacencyMatrix {
    fn from(graph: &ForwardStar) -> Self {
        let mut matrix = AdjacencyMatrix::new(graph.number_of_nodes());
        for Edge(u, v) in graph.edges(true) {
            matrix.set_edge(u, v, true);
        }
        matrix
    }
}

impl FromStr for ForwardStar {
    type Err = Graph6Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_from_graph6(s)
    }
}

impl Display for ForwardStar {
    /// Formats the graph in graph6
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_graph6())
    }
}

impl Debug for ForwardStar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ForwardStar")
            .field("n", &self.number_of_nodes())
            .field("m", &self.number_of_edges())
            .field("offsets", &self.offsets())
            .field("neighbors", &self.neighbors())
            .finish()
    }
}
