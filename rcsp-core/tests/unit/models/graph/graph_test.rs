use super::*;
use crate::helpers::models::create_weighted_graph;

#[test]
fn can_resolve_nodes_and_edges() {
    let graph = create_weighted_graph(&["A", "B", "C"], &[("A", "B", 1.), ("A", "C", 2.), ("B", "C", 3.)]);

    assert_eq!(graph.size(), 3);
    assert_eq!(graph.edges_size(), 3);
    assert_eq!(graph.node_index("B"), Some(1));
    assert_eq!(graph.node_index("D"), None);
    assert_eq!(graph.resolve("C"), Ok(2));
    assert_eq!(graph.resolve("D").unwrap_err().to_string(), "unknown node: 'D'");
    assert_eq!(graph.node(0).id, "A");
    assert_eq!(graph.nodes().len(), 3);
    assert_eq!(graph.edges().len(), 3);
}

#[test]
fn can_iterate_outgoing_edges_in_definition_order() {
    let graph = create_weighted_graph(&["A", "B", "C"], &[("A", "C", 2.), ("B", "C", 3.), ("A", "B", 1.)]);

    let targets = graph.outgoing(0).map(|(edge_idx, edge)| (edge_idx, edge.to)).collect::<Vec<_>>();

    assert_eq!(targets, vec![(0, 2), (2, 1)]);
    assert_eq!(graph.outgoing(2).count(), 0);
    assert_eq!(graph.find_edge(0, 1), Some(2));
    assert_eq!(graph.find_edge(1, 0), None);
    assert_eq!(graph.edge(1).attributes.distance, 3.);
}

#[test]
fn can_detect_capacities() {
    let graph = create_weighted_graph(&["A", "B"], &[("A", "B", 1.)]);
    assert!(!graph.has_capacities());

    let graph = GraphBuilder::default()
        .add_node(Node::new("A"))
        .add_node(Node::new("B").with_capacity(1))
        .add_edge("A", "B", EdgeAttributes::with_weight(1.))
        .build()
        .unwrap();
    assert!(graph.has_capacities());

    let graph = GraphBuilder::default()
        .add_nodes(["A", "B"].into_iter().map(Node::new))
        .add_edge("A", "B", EdgeAttributes::with_weight(1.).with_capacity(3))
        .build()
        .unwrap();
    assert!(graph.has_capacities());
}

parameterized_test! {can_calculate_travel_duration, (congestion, capacity, load, expected), {
    let mut attributes = EdgeAttributes::with_weight(10.).with_congestion(congestion);
    attributes.capacity = capacity;

    assert_eq!(attributes.travel_duration(load), expected);
}}

can_calculate_travel_duration! {
    case01_no_congestion: (0., Some(4), 2, 10.),
    case02_no_load: (1., Some(4), 0, 10.),
    case03_capacity_ratio: (1., Some(4), 2, 15.),
    case04_unlimited_capacity: (0.5, None, 2, 20.),
    case05_zero_capacity: (1., Some(0), 2, 10.),
}

#[test]
fn can_apply_recharge() {
    assert_eq!(Recharge::full().apply(2., 10.), 10.);
    assert_eq!(Recharge::partial(3.).apply(2., 10.), 5.);
    assert_eq!(Recharge::partial(30.).apply(2., 10.), 10.);
}
