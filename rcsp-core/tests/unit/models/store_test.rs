use super::*;
use crate::helpers::models::create_graph;
use crate::models::graph::{EdgeAttributes, Node};

fn create_test_graph() -> Graph {
    create_graph(
        vec![Node::new("A"), Node::new("B").with_capacity(3), Node::new("C")],
        vec![
            ("A", "B", EdgeAttributes::with_weight(1.).with_capacity(2)),
            ("B", "C", EdgeAttributes::with_weight(1.)),
        ],
    )
}

#[test]
fn can_reserve_and_release_route() {
    let graph = create_test_graph();
    let mut store = LoadStore::default();

    store.reserve(&graph, &[0, 1], 2).unwrap();

    assert_eq!(store.edge_load(0), 2);
    assert_eq!(store.edge_load(1), 2);
    assert_eq!(store.node_load(0), 0);
    assert_eq!(store.node_load(1), 2);
    assert_eq!(store.node_load(2), 2);
    assert!(!store.can_fit_edge(&graph, 0, 1));
    assert!(store.can_fit_node(&graph, 1, 1));
    assert!(store.can_fit_edge(&graph, 1, 100));

    store.release(&graph, &[0, 1], 2).unwrap();

    assert!(store.is_empty());
}

#[test]
fn can_keep_store_untouched_when_reservation_fails() {
    let graph = create_test_graph();
    let mut store = LoadStore::default();
    store.set_node_load(1, 2);

    let result = store.reserve(&graph, &[1, 0], 2);

    assert_eq!(result, Err("node 'B' cannot accept extra demand 2".into()));
    assert_eq!(store.edge_load(0), 0);
    assert_eq!(store.edge_load(1), 0);
    assert_eq!(store.node_load(1), 2);
}

#[test]
fn can_reject_edge_over_capacity() {
    let graph = create_test_graph();
    let mut store = LoadStore::default();

    let result = store.reserve(&graph, &[0], 3);

    assert_eq!(result, Err("edge 0 cannot carry extra demand 3".into()));
    assert!(store.is_empty());
}

#[test]
fn can_reject_releasing_more_than_held() {
    let graph = create_test_graph();
    let mut store = LoadStore::default();
    store.reserve(&graph, &[0], 1).unwrap();

    assert_eq!(store.release_edge(0, 2), Err("cannot release 2 from edge 0: only 1 is held".into()));
    assert_eq!(store.release_node(1, 2), Err("cannot release 2 from node 1: only 1 is held".into()));
    assert!(store.release(&graph, &[0, 1], 1).is_err());
    assert_eq!(store.edge_load(0), 1);
    assert_eq!(store.node_load(1), 1);
}

#[test]
fn can_reject_negative_demand() {
    let graph = create_test_graph();
    let mut store = LoadStore::default();

    assert!(store.reserve(&graph, &[0], -1).is_err());
    assert!(store.release(&graph, &[0], -1).is_err());
}

#[test]
fn can_set_loads_directly() {
    let mut store = LoadStore::default();

    store.set_edge_load(3, 5);
    store.set_node_load(2, 1);
    assert_eq!(store.edge_load(3), 5);
    assert_eq!(store.node_load(2), 1);

    store.set_edge_load(3, 0);
    assert_eq!(store.edge_load(3), 0);
    assert!(!store.is_empty());

    store.clear();
    assert!(store.is_empty());
}

#[test]
fn can_reject_demand_overflowing_current_load() {
    let graph = create_test_graph();
    let mut store = LoadStore::default();
    store.set_edge_load(0, 1);
    store.set_node_load(1, 1);

    assert!(!store.can_fit_edge(&graph, 0, Load::MAX));
    assert!(!store.can_fit_node(&graph, 1, Load::MAX));
    assert_eq!(store.reserve(&graph, &[0], Load::MAX), Err("edge 0 cannot carry extra demand 2147483647".into()));
    assert_eq!(store.edge_load(0), 1);
}

#[test]
fn can_reject_reservation_overflowing_unlimited_edge() {
    let graph = create_test_graph();
    let mut store = LoadStore::default();
    store.set_edge_load(1, Load::MAX);

    let result = store.reserve(&graph, &[1], 1);

    assert_eq!(result, Err("load of edge 1 is out of range".into()));
    assert_eq!(store.edge_load(1), Load::MAX);
}
