use proptest::prelude::*;
use simplegraphs::{io::graph6, prelude::*};

#[derive(Debug, Clone)]
enum Operation {
    AddNode,
    RemoveNode(Node),
    AddEdge(Node, Node),
    RemoveEdge(Node, Node),
}

/// Node indices may exceed the current order to exercise the index checks
fn operation() -> impl Strategy<Value = Operation> {
    prop_oneof![
        Just(Operation::AddNode),
        (0..=MAX_NODES).prop_map(Operation::RemoveNode),
        (0..=MAX_NODES, 0..=MAX_NODES).prop_map(|(u, v)| Operation::AddEdge(u, v)),
        (0..=MAX_NODES, 0..=MAX_NODES).prop_map(|(u, v)| Operation::RemoveEdge(u, v)),
    ]
}

/// Canonical graph6 text (zero padding) of a random graph, together with its edge count
fn canonical_graph6() -> impl Strategy<Value = (String, usize)> {
    (1..=MAX_NODES).prop_flat_map(|n| {
        let triangle = (n * (n - 1) / 2) as usize;
        proptest::collection::vec(any::<bool>(), triangle).prop_map(move |bits| {
            let mut text = String::new();
            text.push(char::from(n as u8 + 63));
            for group in bits.chunks(6) {
                let mut value = 0u8;
                for (k, &bit) in group.iter().enumerate() {
                    if bit {
                        value |= 1 << (5 - k);
                    }
                }
                text.push(char::from(value + 63));
            }
            (text, bits.iter().filter(|&&b| b).count())
        })
    })
}

fn assert_symmetric(graph: &ForwardStar) {
    let n = graph.number_of_nodes();
    for u in 0..n {
        for v in 0..n {
            assert_eq!(graph.try_has_edge(u, v), graph.try_has_edge(v, u));
        }
    }
}

proptest! {
    #[test]
    fn canonical_text_round_trips((text, m) in canonical_graph6()) {
        let graph: ForwardStar = text.parse().unwrap();

        prop_assert!(graph.is_consistent());
        prop_assert_eq!(graph.number_of_edges() as usize, m);
        prop_assert_eq!(graph.to_string(), text);
    }

    #[test]
    fn decoding_arbitrary_bytes_never_panics(bytes in proptest::collection::vec(any::<u8>(), 0..32)) {
        if let Ok(matrix) = graph6::decode(&bytes) {
            prop_assert_eq!(bytes.len(), graph6::encoded_len(matrix.number_of_nodes()));
        }
    }

    #[test]
    fn mutators_preserve_invariants(ops in proptest::collection::vec(operation(), 1..200)) {
        let mut graph = ForwardStar::new();

        for op in ops {
            let before = graph.clone();
            let n = graph.number_of_nodes();

            let result = match op {
                Operation::AddNode => graph.try_add_node().map(|u| {
                    assert_eq!(u, n);
                }),
                Operation::RemoveNode(u) => graph.try_remove_node(u),
                Operation::AddEdge(u, v) => graph.try_add_edge(u, v).map(|_| ()),
                Operation::RemoveEdge(u, v) => graph.try_remove_edge(u, v).map(|_| ()),
            };

            match result {
                Err(GraphError::Capacity) => prop_assert_eq!(n, MAX_NODES),
                Err(GraphError::NoVertices) => prop_assert_eq!(n, 1),
                Err(GraphError::Index { node, number_of_nodes }) => {
                    prop_assert_eq!(number_of_nodes, n);
                    prop_assert!(node >= n);
                }
                Err(GraphError::SelfLoop(_)) => {}
                Err(err) => prop_assert!(false, "unexpected error {err}"),
                Ok(()) => {}
            }
            if result.is_err() {
                prop_assert_eq!(&graph, &before);
            }

            prop_assert!(graph.is_consistent());
            prop_assert_eq!(
                graph.offsets()[graph.number_of_nodes() as usize],
                2 * graph.number_of_edges()
            );
            assert_symmetric(&graph);
        }
    }

    #[test]
    fn remove_edge_twice_equals_once(
        (text, _) in canonical_graph6(),
        u in 0..MAX_NODES,
        v in 0..MAX_NODES,
    ) {
        let mut graph: ForwardStar = text.parse().unwrap();
        let n = graph.number_of_nodes();
        let (u, v) = (u % n, v % n);

        graph.try_remove_edge(u, v).unwrap();
        let once = graph.clone();
        prop_assert_eq!(graph.try_remove_edge(u, v), Ok(false));
        prop_assert_eq!(graph, once);
    }
}
