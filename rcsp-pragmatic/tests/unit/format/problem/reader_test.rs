use super::*;
use crate::helpers::*;
use rcsp_core::models::graph::RechargeAmount;
use rcsp_core::search::{TelemetryMode, TravelCost};

#[test]
fn can_read_graph_with_default_attributes() {
    let problem = Problem {
        nodes: vec![
            create_node("A"),
            Node { service: Some(2.), capacity: Some(1), ..create_node_with_time_window("B", (5., 20.)) },
            Node {
                recharge: Some(NodeRecharge { amount: Some(3.), duration: Some(4.), price: None }),
                ..create_node("C")
            },
        ],
        edges: vec![
            create_undirected_edge("A", "B", 5.),
            Edge { duration: Some(7.), capacity: Some(2), ..create_edge("B", "C", 3.) },
        ],
        ..create_test_problem()
    };

    let problem = problem.read_pragmatic().expect("cannot read problem");
    let graph = problem.graph.as_ref();

    assert_eq!(graph.size(), 3);
    assert_eq!(graph.edges_size(), 3);

    let node = graph.node(1);
    assert_eq!(node.time_window.as_ref().map(|tw| (tw.start, tw.end)), Some((5., 20.)));
    assert_eq!(node.service, 2.);
    assert_eq!(node.capacity, Some(1));

    let recharge = graph.node(2).recharge.as_ref().expect("no recharge");
    assert_eq!(recharge.amount, RechargeAmount::Partial(3.));
    assert_eq!((recharge.duration, recharge.price), (4., 0.));

    let forward = graph.find_edge(0, 1).expect("no forward edge");
    let backward = graph.find_edge(1, 0).expect("no backward edge");
    assert_eq!(graph.edge(forward).attributes.duration, 5.);
    assert_eq!(graph.edge(backward).attributes.distance, 5.);

    let edge = graph.edge(graph.find_edge(1, 2).expect("no edge"));
    assert_eq!((edge.attributes.distance, edge.attributes.duration), (3., 7.));
    assert_eq!(edge.attributes.capacity, Some(2));
}

#[test]
fn can_read_queries_with_defaults() {
    let problem = Problem {
        queries: vec![
            create_query("q1", "A", "C"),
            Query {
                starts: vec!["A".to_string(), "B".to_string()],
                departure: Some(10.),
                demand: Some(2),
                battery: Some(QueryBattery { capacity: 20., initial: None }),
                time_budget: Some(30.),
                ..create_query("q2", "A", "C")
            },
        ],
        ..create_test_problem()
    };

    let problem = problem.read_pragmatic().expect("cannot read problem");

    assert_eq!(problem.query_ids, vec!["q1".to_string(), "q2".to_string()]);

    let query = &problem.queries[0];
    assert_eq!((query.departure, query.demand, query.battery.is_none(), query.time_budget), (0., 0, true, None));

    let query = &problem.queries[1];
    assert_eq!(query.starts, vec!["A".to_string(), "B".to_string()]);
    assert_eq!((query.departure, query.demand, query.time_budget), (10., 2, Some(30.)));
    assert_eq!(query.battery.as_ref().map(|battery| (battery.capacity, battery.initial)), Some((20., 20.)));
}

#[test]
fn can_read_loads_accumulated_per_edge_and_node() {
    let problem = Problem {
        edges: vec![create_undirected_edge("A", "B", 4.), create_edge("B", "C", 4.)],
        loads: Some(Loads {
            edges: vec![
                EdgeLoad { from: "A".to_string(), to: "B".to_string(), load: 1 },
                EdgeLoad { from: "B".to_string(), to: "A".to_string(), load: 2 },
                EdgeLoad { from: "A".to_string(), to: "B".to_string(), load: 3 },
            ],
            nodes: vec![NodeLoad { id: "C".to_string(), load: 5 }],
        }),
        ..create_test_problem()
    };

    let problem = problem.read_pragmatic().expect("cannot read problem");
    let graph = problem.graph.as_ref();
    let edge_load = |from, to| problem.loads.edge_load(graph.find_edge(from, to).expect("no edge"));

    assert_eq!(edge_load(0, 1), 4);
    assert_eq!(edge_load(1, 0), 2);
    assert_eq!(edge_load(1, 2), 0);
    assert_eq!(problem.loads.node_load(2), 5);
    assert_eq!(problem.loads.node_load(0), 0);
}

#[test]
fn can_saturate_accumulated_loads() {
    let problem = Problem {
        loads: Some(Loads {
            edges: vec![
                EdgeLoad { from: "A".to_string(), to: "B".to_string(), load: i32::MAX },
                EdgeLoad { from: "A".to_string(), to: "B".to_string(), load: 1 },
            ],
            nodes: vec![NodeLoad { id: "B".to_string(), load: i32::MAX }, NodeLoad { id: "B".to_string(), load: 2 }],
        }),
        ..create_test_problem()
    };

    let problem = problem.read_pragmatic().expect("cannot read problem");
    let edge_idx = problem.graph.find_edge(0, 1).expect("no edge");

    assert_eq!(problem.loads.edge_load(edge_idx), i32::MAX);
    assert_eq!(problem.loads.node_load(1), i32::MAX);
}

parameterized_test! {can_read_search_config, (objective, options, expected), {
    can_read_search_config_impl(objective, options, expected);
}}

can_read_search_config! {
    case01_defaults: (None, None, (1, true, false, TelemetryMode::None)),
    case02_weighted: (
        Some(Objective::WeightedSum { weights: vec![MetricWeight { metric: Metric::Price, weight: 2. }] }),
        Some(Options { allow_waiting: Some(false), elementary_paths: Some(true), logging: Some(true) }),
        (1, false, true, TelemetryMode::OnlyLogging)
    ),
    case03_lexicographic: (
        Some(Objective::Lexicographic { metrics: vec![Metric::Hops, Metric::Distance, Metric::Risk] }),
        Some(Options::default()),
        (3, true, false, TelemetryMode::None)
    ),
}

fn can_read_search_config_impl(
    objective: Option<Objective>,
    options: Option<Options>,
    expected: (usize, bool, bool, TelemetryMode),
) {
    let problem = Problem { objective, options, ..create_test_problem() };

    let config = problem.read_pragmatic().expect("cannot read problem").config;

    assert_eq!(
        (config.travel_cost.dimensions(), config.allow_waiting, config.elementary_paths, config.telemetry),
        expected
    );
}

#[test]
fn can_read_problem_from_string_and_reader() {
    let json = r#"{
      "nodes": [{ "id": "A" }, { "id": "B" }],
      "edges": [{ "from": "A", "to": "B", "distance": 1 }],
      "queries": [{ "id": "q1", "starts": ["A"], "goal": "B" }]
    }"#;

    let from_string = json.to_string().read_pragmatic().expect("cannot read from string");
    let from_reader = BufReader::new(json.as_bytes()).read_pragmatic().expect("cannot read from reader");

    assert_eq!(from_string.graph.edges_size(), 1);
    assert_eq!(from_reader.query_ids, vec!["q1".to_string()]);
}

#[test]
fn can_return_all_validation_errors() {
    let problem = Problem {
        nodes: create_nodes(&["A", "B", "A"]),
        edges: vec![create_edge("A", "X", 1.)],
        queries: vec![create_query("q1", "A", "Y")],
        ..create_empty_problem()
    };

    let codes = get_error_codes(problem);

    assert_eq!(codes, vec!["E1101".to_string(), "E1104".to_string(), "E1203".to_string()]);
}
