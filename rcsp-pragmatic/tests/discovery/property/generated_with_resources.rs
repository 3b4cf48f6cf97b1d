use crate::format::problem::*;
use crate::format::solution::*;
use crate::generator::*;
use crate::helpers::*;
use proptest::prelude::*;
use rustc_hash::FxHashMap;

fn with_queries(problem: &Problem, update: impl Fn(Query) -> Query) -> Problem {
    Problem { queries: problem.queries.iter().cloned().map(update).collect(), ..problem.clone() }
}

fn get_route_cost(solution: &Solution, query_id: &str) -> Option<f64> {
    solution.routes.iter().find(|route| route.query_id == query_id).map(|route| route.cost)
}

fn check_relaxed_costs(tight: &Solution, relaxed: &Solution, problem: &Problem) -> Result<(), TestCaseError> {
    for query in problem.queries.iter() {
        if let Some(tight_cost) = get_route_cost(tight, &query.id) {
            let relaxed_cost = get_route_cost(relaxed, &query.id);
            prop_assert!(relaxed_cost.is_some_and(|cost| cost <= tight_cost));
        }
    }

    Ok(())
}

prop_compose! {
    fn generate_loaded_grid_problem()
    (problem in generate_grid_problem(2..5, 2..5))
    (
      capacities in prop::collection::vec(1..4_i32, problem.edges.len()),
      loads in prop::collection::vec(0..3_i32, problem.edges.len()),
      demand in 1..3_i32,
      problem in Just(problem)
    ) -> Problem {
        let edges = problem
            .edges
            .iter()
            .zip(capacities)
            .map(|(edge, capacity)| Edge { capacity: Some(capacity), ..edge.clone() })
            .collect::<Vec<_>>();

        let loads = edges
            .iter()
            .zip(loads)
            .map(|(edge, load)| EdgeLoad { from: edge.from.clone(), to: edge.to.clone(), load })
            .collect();

        let problem = Problem { edges, loads: Some(Loads { edges: loads, nodes: vec![] }), ..problem };

        with_queries(&problem, |query| Query { demand: Some(demand), ..query })
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]
    #[test]
    fn can_keep_cost_when_battery_is_bigger(problem in generate_grid_problem(2..6, 2..6), capacity in 5..30_i32) {
        let capacity = capacity as f64;
        let create_battery = |capacity: f64| Some(QueryBattery { capacity, initial: None });

        let tight = with_queries(&problem, |query| Query { battery: create_battery(capacity), ..query });
        let relaxed = with_queries(&problem, |query| Query { battery: create_battery(2. * capacity), ..query });

        let tight_solution = solve_problem_sequentially(tight);
        let relaxed_solution = solve_problem_sequentially(relaxed);

        check_relaxed_costs(&tight_solution, &relaxed_solution, &problem)?;
        for route in tight_solution.routes.iter() {
            prop_assert!(route.statistic.energy <= capacity);
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]
    #[test]
    fn can_keep_cost_when_time_budget_is_bigger(problem in generate_grid_problem(2..6, 2..6), budget in 5..30_i32) {
        let budget = budget as f64;

        let tight = with_queries(&problem, |query| Query { time_budget: Some(budget), ..query });
        let relaxed = with_queries(&problem, |query| Query { time_budget: Some(2. * budget), ..query });

        let tight_solution = solve_problem_sequentially(tight);
        let relaxed_solution = solve_problem_sequentially(relaxed);

        check_relaxed_costs(&tight_solution, &relaxed_solution, &problem)?;
        for route in tight_solution.routes.iter() {
            prop_assert!(route.statistic.duration <= budget);
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]
    #[test]
    fn can_respect_edge_capacities_with_loads(problem in generate_loaded_grid_problem()) {
        let solution = solve_problem_sequentially(problem.clone());

        let edges = problem.edges.iter().fold(FxHashMap::default(), |mut acc, edge| {
            acc.insert((edge.from.as_str(), edge.to.as_str()), edge.capacity.unwrap_or(i32::MAX));
            acc.insert((edge.to.as_str(), edge.from.as_str()), edge.capacity.unwrap_or(i32::MAX));
            acc
        });
        let loads = problem.loads.iter().flat_map(|loads| loads.edges.iter()).fold(
            FxHashMap::<_, i32>::default(),
            |mut acc, load| {
                *acc.entry((load.from.as_str(), load.to.as_str())).or_default() += load.load;
                acc
            },
        );

        for route in solution.routes.iter() {
            let demand = problem.queries.iter().find(|query| query.id == route.query_id).and_then(|q| q.demand);
            let demand = demand.unwrap_or_default();

            for pair in route.nodes.windows(2) {
                let key = (pair[0].as_str(), pair[1].as_str());
                let capacity = edges.get(&key).copied().expect("route uses unknown edge");
                let load = loads.get(&key).copied().unwrap_or_default();

                prop_assert!(load + demand <= capacity);
            }

            let mut visited = route.nodes.clone();
            visited.sort();
            visited.dedup();
            prop_assert_eq!(visited.len(), route.nodes.len());
        }
    }
}
