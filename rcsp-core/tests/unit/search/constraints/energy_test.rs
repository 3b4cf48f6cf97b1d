use super::*;
use crate::helpers::models::create_graph;
use crate::helpers::search::{create_query_context, evaluate_constraint};
use crate::models::graph::{EdgeAttributes, Recharge};
use crate::search::{Battery, Query};

fn create_test_graph(recharge: Option<Recharge>) -> Graph {
    let node = Node::new("B");
    let node = if let Some(recharge) = recharge { node.with_recharge(recharge) } else { node };

    create_graph(vec![Node::new("A"), node], vec![("A", "B", EdgeAttributes::with_weight(1.).with_energy(4.))])
}

parameterized_test! {can_check_energy, (energy, expected), {
    let graph = create_test_graph(None);
    let query = create_query_context(&graph, &Query::new("A", "B").with_battery(Battery::full(10.)));
    let state = ResourceState { node: 0, time: 0., energy, visited: None };

    let store = LoadStore::default();

    let (violation, candidate) = evaluate_constraint(&EnergyConstraint, &graph, &store, &query, 0, &state);

    match expected {
        Ok(remaining) => {
            assert_eq!(violation, None);
            assert_eq!(candidate.state.energy, remaining);
        }
        Err(code) => assert_eq!(violation, ConstraintViolation::fail(code)),
    }
}}

can_check_energy! {
    case01_enough: (Some(10.), Ok(Some(6.))),
    case02_exact: (Some(4.), Ok(Some(0.))),
    case03_not_enough: (Some(3.9), Err(ENERGY_CONSTRAINT_CODE)),
    case04_not_tracked: (None, Ok(None)),
}

parameterized_test! {can_recharge, (recharge, energy, expected), {
    let graph = create_test_graph(Some(recharge));
    let query = create_query_context(&graph, &Query::new("A", "B").with_battery(Battery::full(10.)));
    let state = ResourceState { node: 1, time: 5., energy, visited: None };

    let result = recharge_state(graph.node(1), &query, &state)
        .map(|(state, metrics)| (state.time, state.energy, metrics.charging, metrics.price));

    assert_eq!(result, expected);
}}

can_recharge! {
    case01_full: (Recharge::full().with_duration(2.).with_price(3.), Some(1.), Some((7., Some(10.), 2., 3.))),
    case02_partial: (Recharge::partial(4.), Some(1.), Some((5., Some(5.), 0., 0.))),
    case03_partial_capped: (Recharge::partial(4.), Some(8.), Some((5., Some(10.), 0., 0.))),
    case04_already_full: (Recharge::full(), Some(10.), None),
    case05_not_tracked: (Recharge::full(), None, None),
}

#[test]
fn can_not_recharge_at_regular_node() {
    let graph = create_test_graph(None);
    let query = create_query_context(&graph, &Query::new("A", "B").with_battery(Battery::full(10.)));
    let state = ResourceState { node: 1, time: 0., energy: Some(1.), visited: None };

    assert!(recharge_state(graph.node(1), &query, &state).is_none());
}
