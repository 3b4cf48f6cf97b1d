use crate::format::problem::*;
use crate::format::solution::*;
use crate::generator::*;
use crate::helpers::*;
use proptest::prelude::*;

fn get_edge_distance(problem: &Problem, from: &str, to: &str) -> Option<f64> {
    problem
        .edges
        .iter()
        .filter(|edge| {
            (edge.from == from && edge.to == to)
                || (edge.undirected.unwrap_or(false) && edge.from == to && edge.to == from)
        })
        .map(|edge| edge.distance)
        .min_by(|a, b| a.total_cmp(b))
}

fn check_route(problem: &Problem, route: &Route) {
    let query = problem.queries.iter().find(|query| query.id == route.query_id).expect("unknown query");

    assert_eq!(route.nodes.first(), query.starts.first());
    assert_eq!(route.nodes.last(), Some(&query.goal));
    assert_eq!(route.stops.len(), route.nodes.len());
    assert_eq!(route.statistic.hops + 1, route.nodes.len());

    let distance = route
        .nodes
        .windows(2)
        .map(|pair| get_edge_distance(problem, &pair[0], &pair[1]).expect("route uses unknown edge"))
        .sum::<f64>();

    assert_eq!(route.statistic.distance, distance);
    assert_eq!(route.cost, distance);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]
    #[test]
    fn can_find_shortest_paths_on_grid(problem in generate_grid_problem(2..6, 2..6)) {
        let solution = solve_problem_sequentially(problem.clone());

        prop_assert!(solution.infeasible.is_empty());
        prop_assert_eq!(solution.routes.len(), problem.queries.len());

        for route in solution.routes.iter() {
            check_route(&problem, route);

            let query = problem.queries.iter().find(|query| query.id == route.query_id).expect("unknown query");
            let expected = find_shortest_distance(&problem, &query.starts[0], &query.goal);
            prop_assert_eq!(Some(route.cost), expected);
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]
    #[test]
    fn can_produce_same_solution_on_repeated_runs(problem in generate_grid_problem(2..8, 2..8)) {
        let first = solve_problem_sequentially(problem.clone());
        let second = solve_problem_sequentially(problem);

        prop_assert_eq!(first, second);
    }
}
