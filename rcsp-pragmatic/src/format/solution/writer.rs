#[cfg(test)]
#[path = "../../../tests/unit/format/solution/writer_test.rs"]
mod writer_test;

use super::*;
use crate::format::problem::CoreProblem;
use rcsp_core::search::constraints::{
    CAPACITY_CONSTRAINT_CODE, ENERGY_CONSTRAINT_CODE, LOOP_CONSTRAINT_CODE, TIME_BUDGET_CONSTRAINT_CODE,
    TIME_WINDOW_CONSTRAINT_CODE,
};
use rcsp_core::search::{Infeasibility, Route as CoreRoute, SearchResult, Solver, Stop as CoreStop, ViolationCode};
use rcsp_core::utils::{Environment, GenericResult};
use std::io::{BufWriter, Write};
use std::sync::Arc;

/// A trait to serialize solution in pragmatic format.
pub trait PragmaticSolution<W: Write> {
    /// Serializes solution in pragmatic json format.
    fn write_pragmatic_json(&self, problem: &CoreProblem, writer: BufWriter<W>) -> Result<(), String>;
}

impl<W: Write> PragmaticSolution<W> for Vec<GenericResult<SearchResult>> {
    fn write_pragmatic_json(&self, problem: &CoreProblem, writer: BufWriter<W>) -> Result<(), String> {
        let solution = map_to_solution(problem, self.as_slice());
        serialize_solution(writer, &solution).map_err(|err| err.to_string())?;

        Ok(())
    }
}

/// Solves all queries of the problem against its loads and creates a pragmatic solution.
pub fn create_solution(problem: &CoreProblem, environment: Arc<Environment>) -> Solution {
    let results = solve_problem(problem, environment);

    map_to_solution(problem, results.as_slice())
}

/// Solves all queries of the problem in parallel. Results are returned in the order of queries.
pub fn solve_problem(problem: &CoreProblem, environment: Arc<Environment>) -> Vec<GenericResult<SearchResult>> {
    let solver = Solver::new(problem.graph.clone(), problem.config.clone(), environment);

    solver.solve_all_with_loads(problem.queries.as_slice(), &problem.loads)
}

/// Maps search results into pragmatic solution.
pub fn map_to_solution(problem: &CoreProblem, results: &[GenericResult<SearchResult>]) -> Solution {
    let (routes, infeasible) = problem.query_ids.iter().zip(results.iter()).fold(
        (Vec::default(), Vec::default()),
        |(mut routes, mut infeasible), (query_id, result)| {
            match result {
                Ok(SearchResult::Found(route)) => routes.push(create_route(query_id, route)),
                Ok(SearchResult::Infeasible(infeasibility)) => infeasible.push(InfeasibleQuery {
                    query_id: query_id.clone(),
                    reasons: create_reasons(infeasibility),
                }),
                Err(err) => infeasible.push(InfeasibleQuery {
                    query_id: query_id.clone(),
                    reasons: vec![InfeasibleReason {
                        code: "MALFORMED_QUERY".to_string(),
                        description: err.to_string(),
                        count: None,
                    }],
                }),
            }

            (routes, infeasible)
        },
    );

    let statistic = routes.iter().fold(Statistic::default(), |acc, route: &Route| Statistic {
        cost: acc.cost + route.cost,
        distance: acc.distance + route.statistic.distance,
        duration: acc.duration + route.statistic.duration,
        hops: acc.hops + route.statistic.hops,
    });

    Solution { statistic, routes, infeasible }
}

fn create_route(query_id: &str, route: &CoreRoute) -> Route {
    let statistic = &route.statistic;

    Route {
        query_id: query_id.to_string(),
        nodes: route.nodes.clone(),
        cost: route.cost,
        objective: route.objective.clone(),
        stops: route.stops.iter().map(create_stop).collect(),
        statistic: RouteStatistic {
            distance: statistic.distance,
            duration: statistic.duration,
            travel: statistic.travel,
            waiting: statistic.waiting,
            service: statistic.service,
            charging: statistic.charging,
            energy: statistic.energy,
            price: statistic.price,
            risk: statistic.risk,
            hops: statistic.hops,
        },
    }
}

fn create_stop(stop: &CoreStop) -> Stop {
    Stop {
        node: stop.node.clone(),
        arrival: stop.arrival,
        departure: stop.departure,
        waiting: stop.waiting,
        recharged: stop.recharged,
        energy: stop.energy,
    }
}

fn create_reasons(infeasibility: &Infeasibility) -> Vec<InfeasibleReason> {
    if infeasibility.is_unreachable() {
        return vec![InfeasibleReason {
            code: "NO_PATH".to_string(),
            description: "goal cannot be reached from any start".to_string(),
            count: None,
        }];
    }

    infeasibility
        .statistics
        .rejected
        .iter()
        .map(|&(code, count)| {
            let (code, description) = map_code_reason(code);
            InfeasibleReason { code, description, count: Some(count) }
        })
        .collect()
}

fn map_code_reason(code: ViolationCode) -> (String, String) {
    let (name, description) = match code {
        TIME_WINDOW_CONSTRAINT_CODE => ("TIME_WINDOW_CONSTRAINT", "cannot arrive within node time window"),
        TIME_BUDGET_CONSTRAINT_CODE => ("TIME_BUDGET_CONSTRAINT", "cannot reach goal within time budget"),
        ENERGY_CONSTRAINT_CODE => ("ENERGY_CONSTRAINT", "cannot traverse edge with remaining energy"),
        CAPACITY_CONSTRAINT_CODE => ("CAPACITY_CONSTRAINT", "cannot fit demand into edge or node capacity"),
        LOOP_CONSTRAINT_CODE => ("LOOP_CONSTRAINT", "cannot visit the same node twice"),
        _ => return ("CUSTOM_CONSTRAINT".to_string(), format!("rejected by custom constraint with code {code}")),
    };

    (name.to_string(), description.to_string())
}
