//! Helpers shared by the randomized unit tests.

use itertools::Itertools;
use rand::Rng;

use crate::{ops::*, repr::*, *};

/// Creates a list of at most `m_ub` random, normalized, loop-free and distinct edges for
/// nodes `0..n`
pub(crate) fn random_edges<R: Rng>(rng: &mut R, n: NumNodes, m_ub: NumEdges) -> Vec<Edge> {
    let mut edges = (0..m_ub)
        .map(|_| Edge(rng.random_range(0..n), rng.random_range(0..n)).normalized())
        .filter(|e| !e.is_loop())
        .collect_vec();
    edges.sort_unstable();
    edges.dedup();

    edges
}

/// Asserts that `graph` is a consistent forward star with exactly the edges of `model`
pub(crate) fn assert_matches_model(graph: &ForwardStar, model: &AdjacencyMatrix) {
    let n = model.number_of_nodes();

    assert!(graph.is_consistent(), "{graph:?}");
    assert_eq!(graph.number_of_nodes(), n);
    assert_eq!(graph.number_of_edges(), model.number_of_edges());
    assert_eq!(graph.offsets()[0], 0);
    assert_eq!(
        graph.offsets()[n as usize] as usize,
        2 * graph.number_of_edges() as usize
    );
    assert_eq!(graph.ordered_edges(false), model.ordered_edges(false));

    for u in 0..n {
        assert_eq!(graph.degree_of(u), model.degree_of(u));
        for v in 0..n {
            assert_eq!(graph.has_edge(u, v), model.has_edge(u, v));
            assert_eq!(graph.has_edge(u, v), graph.has_edge(v, u));
        }
    }
}
