use neoplus::{
    error::Error,
    graphs::{
        graph_factory::GraphFactory,
        in_memory_graph::{GraphSnapshot, InMemoryGraph, Node, Relationship},
        weighted_view::WeightedView,
    },
    search::{
        config::{FrontierKind, SearchConfig},
        dijkstra::ShortestPathEngine,
    },
    shortest_path_length,
};

fn get_graph(number_of_nodes: u64, edges: &[(u64, u64, f64)]) -> InMemoryGraph {
    let snapshot = GraphSnapshot {
        nodes: (1..=number_of_nodes)
            .map(|id| Node {
                id,
                labels: vec!["Label".to_string()],
                ..Node::default()
            })
            .collect(),
        relationships: edges
            .iter()
            .map(|&(start, end, weight)| {
                Relationship::new(start, end, "LINKED_TO").with_property("w", weight)
            })
            .collect(),
    };
    InMemoryGraph::from_snapshot(snapshot).unwrap()
}

#[test]
fn single_relationship() {
    let graph = get_graph(2, &[(1, 2, 12.0)]);
    assert_eq!(shortest_path_length(&graph, 1, 2, "w").unwrap(), Some(12.0));
    assert_eq!(shortest_path_length(&graph, 2, 1, "w").unwrap(), Some(12.0));
}

#[test]
fn two_hop_path() {
    let graph = get_graph(3, &[(1, 2, 5.0), (2, 3, 3.0)]);
    assert_eq!(shortest_path_length(&graph, 1, 3, "w").unwrap(), Some(8.0));
}

#[test]
fn cheaper_detour() {
    let graph = get_graph(3, &[(1, 2, 10.0), (1, 3, 2.0), (3, 2, 2.0)]);
    assert_eq!(shortest_path_length(&graph, 1, 2, "w").unwrap(), Some(4.0));
}

#[test]
fn no_relationships() {
    let graph = get_graph(2, &[]);
    assert_eq!(shortest_path_length(&graph, 1, 2, "w").unwrap(), None);
}

#[test]
fn same_start_and_end() {
    let graph = get_graph(3, &[(1, 2, 5.0), (2, 3, 3.0)]);
    for node in 1..=3 {
        assert_eq!(shortest_path_length(&graph, node, node, "w").unwrap(), Some(0.0));
    }
}

#[test]
fn unknown_weight_property_counts_hops() {
    let graph = get_graph(3, &[(1, 2, 5.0), (2, 3, 3.0), (1, 3, 9.0)]);
    assert_eq!(shortest_path_length(&graph, 1, 3, "cost").unwrap(), Some(1.0));
    assert_eq!(shortest_path_length(&graph, 1, 3, "w").unwrap(), Some(8.0));
}

#[test]
fn non_numeric_weight_counts_as_one() {
    let mut graph = get_graph(3, &[]);
    graph
        .add_relationship(Relationship::new(1, 2, "LINKED_TO").with_property("w", "far"))
        .unwrap();
    graph
        .add_relationship(Relationship::new(2, 3, "LINKED_TO").with_property("w", true))
        .unwrap();

    assert_eq!(shortest_path_length(&graph, 1, 3, "w").unwrap(), Some(2.0));
}

#[test]
fn unknown_node() {
    let graph = get_graph(2, &[(1, 2, 1.0)]);
    assert!(matches!(
        shortest_path_length(&graph, 1, 3, "w"),
        Err(Error::UnknownNode(3))
    ));
    assert!(matches!(
        shortest_path_length(&graph, 0, 1, "w"),
        Err(Error::UnknownNode(0))
    ));
}

#[test]
fn disconnected_components() {
    let graph = get_graph(4, &[(1, 2, 1.0), (3, 4, 1.0)]);
    let view = WeightedView::new(&graph, "w");

    for frontier in [FrontierKind::LinearScan, FrontierKind::BinaryHeap] {
        let engine =
            ShortestPathEngine::with_config(&view, SearchConfig::default().with_frontier(frontier));
        assert_eq!(engine.distance(1, 4).unwrap(), None);
        assert_eq!(engine.path(1, 4).unwrap(), None);
        assert_eq!(engine.distance(3, 4).unwrap(), Some(1.0));
    }
}

#[test]
fn repeated_queries_are_identical() {
    let graph = get_graph(
        5,
        &[(1, 2, 0.5), (2, 3, 1.25), (3, 4, 2.0), (1, 4, 4.0), (4, 5, 0.75)],
    );
    let view = WeightedView::new(&graph, "w");
    let engine = ShortestPathEngine::new(&view);

    let first = engine.path(1, 5).unwrap();
    for _ in 0..10 {
        assert_eq!(engine.path(1, 5).unwrap(), first);
    }
    assert_eq!(first.map(|path| path.distance), Some(4.5));
}

#[test]
fn edge_list_graph() {
    let input = "# start end weight\n1 2 10\n1 3 2\n3 2\n";
    let graph = GraphFactory::from_edge_list_reader(input.as_bytes()).unwrap();

    assert_eq!(shortest_path_length(&graph, 1, 2, "weight").unwrap(), Some(3.0));
}
