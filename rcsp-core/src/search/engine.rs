#[cfg(test)]
#[path = "../../tests/unit/search/engine_test.rs"]
mod engine_test;

use crate::models::graph::Graph;
use crate::models::LoadStore;
use crate::search::constraints::{recharge_state, Transition};
use crate::search::reconstruction::{create_trivial_route, reconstruct_route};
use crate::search::*;
use crate::utils::{parallel_collect, Environment, GenericResult, Timer};
use std::rc::Rc;
use std::sync::Arc;

/// A solver which runs constrained shortest path queries against one graph.
pub struct Solver {
    graph: Arc<Graph>,
    config: SearchConfig,
    pipeline: ConstraintPipeline,
    environment: Arc<Environment>,
}

impl Solver {
    /// Creates a new instance of `Solver`.
    pub fn new(graph: Arc<Graph>, config: SearchConfig, environment: Arc<Environment>) -> Self {
        let pipeline = ConstraintPipeline::new(config.allow_waiting, config.constraints.as_slice());

        Self { graph, config, pipeline, environment }
    }

    /// Returns a graph used by the solver.
    pub fn graph(&self) -> &Arc<Graph> {
        &self.graph
    }

    /// Returns search configuration.
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Returns environment.
    pub fn environment(&self) -> &Arc<Environment> {
        &self.environment
    }

    /// Solves query assuming that nothing is loaded.
    pub fn solve(&self, query: &Query) -> GenericResult<SearchResult> {
        self.solve_with_loads(query, &LoadStore::default())
    }

    /// Solves query taking into account current loads. Returns an error only if query is malformed:
    /// a query without feasible route is solved with [`SearchResult::Infeasible`].
    pub fn solve_with_loads(&self, query: &Query, store: &LoadStore) -> GenericResult<SearchResult> {
        let query = QueryContext::new(self.graph.as_ref(), query, self.config.elementary_paths)?;

        if query.starts.contains(&query.goal) {
            let dimensions = self.config.travel_cost.dimensions();
            return Ok(SearchResult::Found(create_trivial_route(self.graph.as_ref(), &query, query.goal, dimensions)));
        }

        let (result, duration) = Timer::measure_duration(|| self.search(&query, store));

        if self.config.telemetry == TelemetryMode::OnlyLogging {
            let goal = self.graph.node(query.goal).id.as_str();
            let (outcome, statistics) = match &result {
                (SearchResult::Found(route), statistics) => {
                    (format!("found route with {} hops and cost {:.3}", route.statistic.hops, route.cost), statistics)
                }
                (SearchResult::Infeasible(_), statistics) => ("no feasible route".to_string(), statistics),
            };

            (self.environment.logger)(&format!(
                "search to '{goal}' finished in {}ms: {outcome}, expanded: {}, generated: {}, pruned: {}, rejected: {}",
                duration.as_millis(),
                statistics.expanded,
                statistics.generated,
                statistics.pruned,
                statistics.total_rejected()
            ));
        }

        Ok(result.0)
    }

    /// Solves independent queries in parallel. Results are returned in the order of queries.
    pub fn solve_all(&self, queries: &[Query]) -> Vec<GenericResult<SearchResult>> {
        self.solve_all_with_loads(queries, &LoadStore::default())
    }

    /// Solves independent queries in parallel against the same loads.
    pub fn solve_all_with_loads(&self, queries: &[Query], store: &LoadStore) -> Vec<GenericResult<SearchResult>> {
        let parallelism = &self.environment.parallelism;

        if parallelism.is_sequential() || queries.len() < 2 {
            queries.iter().map(|query| self.solve_with_loads(query, store)).collect()
        } else {
            parallelism.execute(|| parallel_collect(queries, |query| self.solve_with_loads(query, store)))
        }
    }

    fn search(&self, query: &QueryContext, store: &LoadStore) -> (SearchResult, SearchStatistics) {
        let graph = self.graph.as_ref();
        let travel_cost = self.config.travel_cost.as_ref();
        let time_dominance = if self.config.allow_waiting && !travel_cost.depends_on_waiting() {
            TimeDominance::Earlier
        } else {
            TimeDominance::Exact
        };
        let mut ctx = SearchContext::new(graph.size(), time_dominance);

        for &start in query.starts.iter() {
            let state = query.initial_state(graph, start);
            let step = Step {
                node: start,
                edge: None,
                arrival: state.time,
                waiting: 0.,
                departure: state.time,
                recharged: false,
                energy: state.energy,
                metrics: TransitionMetrics::default(),
            };

            ctx.admit(Label { cost: CostVector::zero(travel_cost.dimensions()), state, trail: Trail::start(step) });
        }

        while let Some((id, label)) = ctx.frontier.pop() {
            if ctx.registry.is_stale(id) {
                continue;
            }

            ctx.statistics.expanded += 1;

            if label.state.node == query.goal {
                return (SearchResult::Found(reconstruct_route(graph, query, label.as_ref())), ctx.statistics);
            }

            if let Some((state, metrics)) = recharge_state(graph.node(label.state.node), query, &label.state) {
                let cost = label.cost.add(&travel_cost.cost(&metrics));
                let mut step_metrics = label.trail.step.metrics.clone();
                step_metrics.accumulate(&metrics);

                let step = Step {
                    departure: state.time,
                    recharged: true,
                    energy: state.energy,
                    metrics: step_metrics,
                    ..label.trail.step.clone()
                };

                ctx.statistics.generated += 1;
                ctx.admit(Label { cost, state, trail: Trail::replace(&label.trail, step) });
            }

            for (edge_idx, edge) in graph.outgoing(label.state.node) {
                let transition = Transition { graph, store, query, edge_idx, edge, target: graph.node(edge.to) };

                match self.pipeline.evaluate(&transition, &label.state) {
                    Ok(candidate) => {
                        let cost = label.cost.add(&travel_cost.cost(&candidate.metrics));
                        let step = Step {
                            node: edge.to,
                            edge: Some(edge_idx),
                            arrival: candidate.arrival,
                            waiting: candidate.waiting,
                            departure: candidate.state.time,
                            recharged: false,
                            energy: candidate.state.energy,
                            metrics: candidate.metrics,
                        };

                        ctx.statistics.generated += 1;
                        ctx.admit(Label { cost, state: candidate.state, trail: Trail::extend(&label.trail, step) });
                    }
                    Err(violation) => ctx.statistics.add_rejection(violation.code),
                }
            }
        }

        let statistics = ctx.statistics;

        (SearchResult::Infeasible(Infeasibility { statistics: statistics.clone() }), statistics)
    }
}

struct SearchContext {
    registry: LabelRegistry,
    frontier: Frontier,
    statistics: SearchStatistics,
}

impl SearchContext {
    fn new(size: usize, time_dominance: TimeDominance) -> Self {
        Self {
            registry: LabelRegistry::new(size, time_dominance),
            frontier: Frontier::default(),
            statistics: SearchStatistics::default(),
        }
    }

    fn admit(&mut self, label: Label) {
        let label = Rc::new(label);

        match self.registry.register(label.clone()) {
            Registration::Accepted(id) => self.frontier.push(id, label),
            Registration::Dominated => self.statistics.pruned += 1,
        }
    }
}
