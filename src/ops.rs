use std::ops::Range;

use itertools::Itertools;

use crate::*;

/// Provides getters pertaining to the node-size of a graph
pub trait GraphNodeOrder {
    /// Returns the number of nodes of the graph
    fn number_of_nodes(&self) -> NumNodes;

    /// Return the number of nodes as usize
    fn len(&self) -> usize {
        self.number_of_nodes() as usize
    }

    /// Returns a range over V.
    /// In contrast to an iterator borrowing the graph, the range may be used while
    /// the graph is mutably borrowed.
    fn vertices_range(&self) -> Range<Node> {
        0..self.number_of_nodes()
    }

    /// Returns an iterator over V.
    fn vertices(&self) -> impl Iterator<Item = Node> + '_ {
        self.vertices_range()
    }

    /// Returns *true* if `u` is a vertex of the graph
    fn contains_node(&self, u: Node) -> bool {
        u < self.number_of_nodes()
    }

    /// Returns an [`GraphError::Index`] if `u` is not a vertex of the graph
    fn check_node(&self, u: Node) -> GraphResult<()> {
        if self.contains_node(u) {
            Ok(())
        } else {
            Err(GraphError::Index {
                node: u,
                number_of_nodes: self.number_of_nodes(),
            })
        }
    }
}

/// Provides getters pertaining to the edge-size of a graph
pub trait GraphEdgeOrder {
    /// Returns the number of edges of the graph
    fn number_of_edges(&self) -> NumEdges;

    /// Returns *true* if the graph has no edges
    fn is_singleton_graph(&self) -> bool {
        self.number_of_edges() == 0
    }
}

/// Traits pertaining getters for neighborhoods & edges
pub trait AdjacencyList: GraphNodeOrder + Sized {
    /// Returns an iterator over the (open) neighborhood of a given vertex
    /// in the order the neighbors are stored.
    /// ** Panics if `u >= n` **
    fn neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_;

    /// Returns the number of neighbors of `u`
    /// ** Panics if `u >= n` **
    fn degree_of(&self, u: Node) -> NumNodes;

    /// Returns an iterator over the degrees of all vertices
    fn degrees(&self) -> impl Iterator<Item = NumNodes> + '_ {
        self.vertices().map(|u| self.degree_of(u))
    }

    /// Returns the maximum degree in the graph
    fn max_degree(&self) -> NumNodes {
        self.degrees().max().unwrap_or(0)
    }

    /// Returns an iterator over edges incident to a given vertex.
    /// If `only_normalized`, then only edges `(u, v)` with `u <= v` are considered.
    /// ** Panics if `u >= n` **
    fn edges_of(&self, u: Node, only_normalized: bool) -> impl Iterator<Item = Edge> + '_ {
        self.neighbors_of(u)
            .map(move |v| Edge(u, v))
            .filter(move |e| !only_normalized || e.is_normalized())
    }

    /// Returns an iterator over all edges in the graph.
    /// If `only_normalized`, then only edges `(u, v)` with `u <= v` are considered.
    fn edges(&self, only_normalized: bool) -> impl Iterator<Item = Edge> + '_ {
        self.vertices_range()
            .flat_map(move |u| self.edges_of(u, only_normalized))
    }

    /// Returns all edges in the graph in sorted order.
    /// If `only_normalized`, then only edges `(u, v)` with `u <= v` are considered.
    fn ordered_edges(&self, only_normalized: bool) -> Vec<Edge> {
        self.edges(only_normalized).sorted_unstable().collect_vec()
    }
}

/// Trait to test existence of certain structures in a graph.
pub trait AdjacencyTest: GraphNodeOrder {
    /// Returns *true* if the egde (u,v) exists in the graph.
    /// ** Panics if `u >= n || v >= n` **
    fn has_edge(&self, u: Node, v: Node) -> bool;

    /// Returns *true* if the egde (u,v) exists in the graph or
    /// [`GraphError::Index`] if one of the endpoints is not a vertex.
    fn try_has_edge(&self, u: Node, v: Node) -> GraphResult<bool> {
        self.check_node(u)?;
        self.check_node(v)?;
        Ok(self.has_edge(u, v))
    }
}

/// Provides functions to insert/delete vertices
pub trait GraphNodeEditing: GraphNodeOrder {
    /// Appends a new isolated vertex and returns its index.
    /// Fails with [`GraphError::Capacity`] if the graph is full.
    fn try_add_node(&mut self) -> GraphResult<Node>;

    /// Removes vertex `u` together with all incident edges.
    /// Vertices with larger index are shifted down by one.
    fn try_remove_node(&mut self, u: Node) -> GraphResult<()>;
}

/// Provides functions to insert/delete edges
pub trait GraphEdgeEditing: GraphNodeOrder {
    /// Adds the edge `(u, v)` to the graph.
    /// Returns *true* exactly if the edge was present previously (in which case the graph
    /// is left unchanged).
    fn try_add_edge(&mut self, u: Node, v: Node) -> GraphResult<bool>;

    /// Adds all edges in the collection and stops at the first failure.
    fn try_add_edges(&mut self, edges: impl IntoIterator<Item = impl Into<Edge>>) -> GraphResult<()> {
        for Edge(u, v) in edges.into_iter().map(|e| e.into()) {
            self.try_add_edge(u, v)?;
        }
        Ok(())
    }

    /// Removes the edge `(u, v)` from the graph.
    /// If the edge was removed, returns *true* and *false* if it was not present.
    fn try_remove_edge(&mut self, u: Node, v: Node) -> GraphResult<bool>;
}
