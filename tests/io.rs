use std::{
    io::{Cursor, ErrorKind},
    path::PathBuf,
};

use simplegraphs::{io::*, prelude::*};

fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("simplegraphs-{}-{name}", std::process::id()))
}

#[test]
fn file_round_trip() {
    init_logging();

    let mut star = ForwardStar::try_with_nodes(6).unwrap();
    for v in 1..6 {
        star.try_add_edge(0, v).unwrap();
    }
    let graphs = vec![ForwardStar::new(), "A_".parse().unwrap(), star];

    let path = temp_path("round_trip.g6");
    Graph6Writer::new()
        .header(true)
        .try_write_graphs(&graphs, std::fs::File::create(&path).unwrap())
        .unwrap();

    let file = std::io::BufReader::new(std::fs::File::open(&path).unwrap());
    let read = Graph6Reader::new()
        .header(true)
        .graphs(file)
        .collect::<std::io::Result<Vec<_>>>()
        .unwrap();
    std::fs::remove_file(&path).unwrap();

    assert_eq!(read.len(), 3);
    for (original, read) in graphs.iter().zip(&read) {
        assert_eq!(original.to_string(), read.to_string());
        assert_eq!(original.ordered_edges(true), read.ordered_edges(true));
    }
}

#[test]
fn single_graph_file() {
    init_logging();

    let graph: ForwardStar = "Bw".parse().unwrap();
    let path = temp_path("single.g6");

    graph.try_write_graph6_file(&path).unwrap();
    let read = ForwardStar::try_read_graph6_file(&path).unwrap();
    std::fs::remove_file(&path).unwrap();

    assert_eq!(read, graph);
}

#[test]
fn malformed_lines_do_not_stop_iteration() {
    init_logging();

    let data = b"A_\nA_?\nQ\nBw\n";
    let results = Graph6Reader::new()
        .graphs(Cursor::new(&data[..]))
        .collect::<Vec<_>>();

    assert_eq!(results.len(), 4);
    assert!(results[0].is_ok());
    assert!(results[3].is_ok());

    let errors = results[1..3]
        .iter()
        .map(|r| {
            let err = r.as_ref().unwrap_err();
            assert_eq!(err.kind(), ErrorKind::InvalidData);
            *err.get_ref()
                .and_then(|e| e.downcast_ref::<Graph6Error>())
                .unwrap()
        })
        .collect::<Vec<_>>();

    assert_eq!(
        errors,
        vec![
            Graph6Error::TooLong {
                expected: 2,
                found: 3
            },
            Graph6Error::InvalidOrder(b'Q'),
        ]
    );
}

#[test]
fn missing_file() {
    let err = Graph6Reader::new()
        .try_read_graph_file(temp_path("does-not-exist.g6"))
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);
}
