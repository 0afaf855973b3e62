/*!
# Adjacency Matrix

A dense, symmetric adjacency matrix for at most [`MAX_NODES`] vertices. Each row is a
`u16` bitmask (bit `j` of row `i` set iff `{i, j}` is an edge), which covers exactly the
vertex capacity of this crate.

The matrix is the intermediate form of the graph6 codec: decoding fills it from the
lower triangle, encoding reads the lower triangle back out of it.
*/

use super::*;

type Row = u16;

/// Symmetric adjacency matrix of a simple undirected graph with at most `MAX_NODES` vertices
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AdjacencyMatrix {
    n: NumNodes,
    rows: [Row; MAX_NODES as usize],
}

impl AdjacencyMatrix {
    /// Creates a matrix of `n` isolated vertices.
    /// ** Panics if `n == 0 || n > MAX_NODES` **
    pub fn new(n: NumNodes) -> Self {
        assert!((1..=MAX_NODES).contains(&n));
        Self {
            n,
            rows: [0; MAX_NODES as usize],
        }
    }

    /// Sets or clears the (symmetric) entry `{u, v}`.
    /// ** Panics if `u >= n || v >= n` or `u == v` **
    pub fn set_edge(&mut self, u: Node, v: Node, present: bool) {
        assert!(u < self.n && v < self.n);
        assert_ne!(u, v);

        if present {
            self.rows[u as usize] |= 1 << v;
            self.rows[v as usize] |= 1 << u;
        } else {
            self.rows[u as usize] &= !(1 << v);
            self.rows[v as usize] &= !(1 << u);
        }
    }

    /// Returns an iterator over the pairs `(i, j)` of the strict lower triangle in
    /// row-major order, i.e. rows `1..n` and columns `0..i`.
    pub fn lower_triangle(&self) -> impl Iterator<Item = (Node, Node)> + use<> {
        (1..self.n).flat_map(|i| (0..i).map(move |j| (i, j)))
    }

    /// Number of entries of the strict lower triangle
    pub fn triangle_len(&self) -> usize {
        let n = self.n as usize;
        n * (n - 1) / 2
    }
}

impl GraphNodeOrder for AdjacencyMatrix {
    fn number_of_nodes(&self) -> NumNodes {
        self.n
    }
}

impl GraphEdgeOrder for AdjacencyMatrix {
    fn number_of_edges(&self) -> NumEdges {
        self.rows.iter().map(|row| row.count_ones()).sum::<NumEdges>() / 2
    }
}

impl AdjacencyList for AdjacencyMatrix {
    /// Neighbors are reported in increasing order
    fn neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_ {
        let row = self.rows[u as usize];
        (0..self.n).filter(move |&v| row & (1 << v) != 0)
    }

    fn degree_of(&self, u: Node) -> NumNodes {
        self.rows[u as usize].count_ones()
    }
}

impl AdjacencyTest for AdjacencyMatrix {
    fn has_edge(&self, u: Node, v: Node) -> bool {
        assert!(u < self.n && v < self.n);
        self.rows[u as usize] & (1 << v) != 0
    }
}
