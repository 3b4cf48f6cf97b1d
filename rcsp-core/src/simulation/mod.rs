//! The simulation module contains a discrete-event loop where many trips share edge and node
//! capacities over simulated time.
//!
//! Each trip is routed at its departure time against the current load store. A found route is
//! reserved as a whole, then its legs are released one by one: the edge when the trip arrives at
//! its end, the node when the trip leaves it (the goal node on arrival). Trips which cannot be
//! routed are rejected without retries.

#[cfg(test)]
#[path = "../../tests/unit/simulation/simulation_test.rs"]
mod simulation_test;

mod events;
pub use self::events::*;

use crate::models::LoadStore;
use crate::models::common::{Load, Timestamp};
use crate::search::{Infeasibility, Query, Route, SearchResult, Solver, TelemetryMode};
use crate::utils::{GenericError, GenericResult};
use std::sync::Arc;

/// A trip to be simulated.
#[derive(Clone, Debug)]
pub struct Trip {
    /// Trip id.
    pub id: String,
    /// A query which departure time specifies when trip starts.
    pub query: Query,
}

impl Trip {
    /// Creates a new instance of `Trip`.
    pub fn new(id: impl Into<String>, query: Query) -> Self {
        Self { id: id.into(), query }
    }
}

/// Specifies what happened with the trip.
#[derive(Clone, Debug, PartialEq)]
pub enum TripOutcome {
    /// Trip has reached its goal within horizon.
    Completed {
        /// A route taken.
        route: Route,
        /// Arrival time at goal.
        arrival: Timestamp,
    },
    /// No feasible route at departure time.
    Rejected {
        /// Why route was not found.
        infeasibility: Infeasibility,
    },
    /// Trip was routed, but its goal arrival is beyond horizon. It keeps the reservations which
    /// are not released until horizon.
    Unfinished {
        /// A route taken.
        route: Route,
    },
    /// Departure is beyond horizon.
    Unscheduled,
}

/// A simulation result.
#[derive(Clone, Debug)]
pub struct SimulationReport {
    /// Trip outcomes in the order trips were added.
    pub outcomes: Vec<(String, TripOutcome)>,
    /// Amount of processed events.
    pub events: usize,
    /// Loads left at the end of simulation.
    pub store: LoadStore,
}

impl SimulationReport {
    /// Returns outcome of the trip with given id.
    pub fn outcome(&self, trip_id: &str) -> Option<&TripOutcome> {
        self.outcomes.iter().find(|(id, _)| id == trip_id).map(|(_, outcome)| outcome)
    }

    /// Returns amount of completed trips.
    pub fn completed(&self) -> usize {
        self.outcomes.iter().filter(|(_, outcome)| matches!(outcome, TripOutcome::Completed { .. })).count()
    }

    /// Returns amount of rejected trips.
    pub fn rejected(&self) -> usize {
        self.outcomes.iter().filter(|(_, outcome)| matches!(outcome, TripOutcome::Rejected { .. })).count()
    }
}

/// A discrete-event simulation of trips which share capacities of one graph.
pub struct Simulation {
    solver: Arc<Solver>,
    horizon: Timestamp,
    store: LoadStore,
    trips: Vec<Trip>,
}

impl Simulation {
    /// Creates a new simulation which processes events up to the horizon (inclusive).
    pub fn new(solver: Arc<Solver>, horizon: Timestamp) -> Self {
        Self { solver, horizon, store: LoadStore::default(), trips: Vec::default() }
    }

    /// Sets initial loads, e.g. a background traffic.
    pub fn with_store(mut self, store: LoadStore) -> Self {
        self.store = store;
        self
    }

    /// Adds a trip.
    pub fn add_trip(mut self, trip: Trip) -> Self {
        self.trips.push(trip);
        self
    }

    /// Runs simulation till no events are left within horizon.
    pub fn run(self) -> GenericResult<SimulationReport> {
        if self.horizon.is_nan() {
            return Err("simulation horizon should not be NaN".into());
        }

        let mut state = SimulationState { queue: EventQueue::default(), store: self.store.clone() };
        let mut outcomes = vec![TripOutcome::Unscheduled; self.trips.len()];

        self.trips
            .iter()
            .enumerate()
            .filter(|(_, trip)| trip.query.departure <= self.horizon)
            .for_each(|(trip_idx, trip)| state.queue.push(trip.query.departure, EventKind::Depart { trip: trip_idx }));

        let mut events = 0;
        while let Some(event) = state.queue.pop() {
            events += 1;

            match event.kind {
                EventKind::Depart { trip } => {
                    let outcome = self.depart(trip, &mut state)?;
                    self.log(|| format!("trip '{}' at {}: {}", self.trips[trip].id, event.time, describe(&outcome)));
                    outcomes[trip] = outcome;
                }
                EventKind::ReleaseEdge { trip, edge } => state.store.release_edge(edge, self.demand(trip))?,
                EventKind::ReleaseNode { trip, node } => state.store.release_node(node, self.demand(trip))?,
            }
        }

        let outcomes = self.trips.iter().map(|trip| trip.id.clone()).zip(outcomes).collect::<Vec<_>>();
        let report = SimulationReport { outcomes, events, store: state.store };

        self.log(|| {
            format!(
                "simulation finished: {} events, {} completed, {} rejected out of {} trips",
                report.events,
                report.completed(),
                report.rejected(),
                report.outcomes.len()
            )
        });

        Ok(report)
    }

    fn depart(&self, trip_idx: usize, state: &mut SimulationState) -> GenericResult<TripOutcome> {
        let trip = &self.trips[trip_idx];
        let graph = self.solver.graph().as_ref();

        let route = match self.solver.solve_with_loads(&trip.query, &state.store)? {
            SearchResult::Found(route) => route,
            SearchResult::Infeasible(infeasibility) => return Ok(TripOutcome::Rejected { infeasibility }),
        };

        state.store.reserve(graph, route.edges.as_slice(), trip.query.demand)?;

        let last_leg = route.edges.len().saturating_sub(1);
        for (leg, &edge_idx) in route.edges.iter().enumerate() {
            let stop = route.stops.get(leg + 1).ok_or_else(|| GenericError::from("route has inconsistent stops"))?;
            let node_release = if leg == last_leg { stop.arrival } else { stop.departure };
            let node = graph.edge(edge_idx).to;

            state.schedule(self.horizon, stop.arrival, EventKind::ReleaseEdge { trip: trip_idx, edge: edge_idx });
            state.schedule(self.horizon, node_release, EventKind::ReleaseNode { trip: trip_idx, node });
        }

        let arrival = route.stops.last().map_or(trip.query.departure, |stop| stop.arrival);

        Ok(if arrival <= self.horizon {
            TripOutcome::Completed { route, arrival }
        } else {
            TripOutcome::Unfinished { route }
        })
    }

    fn demand(&self, trip_idx: usize) -> Load {
        self.trips[trip_idx].query.demand
    }

    fn log<F: FnOnce() -> String>(&self, message: F) {
        if self.solver.config().telemetry == TelemetryMode::OnlyLogging {
            (self.solver.environment().logger)(message().as_str());
        }
    }
}

struct SimulationState {
    queue: EventQueue,
    store: LoadStore,
}

impl SimulationState {
    fn schedule(&mut self, horizon: Timestamp, time: Timestamp, kind: EventKind) {
        if time <= horizon {
            self.queue.push(time, kind);
        }
    }
}

fn describe(outcome: &TripOutcome) -> String {
    match outcome {
        TripOutcome::Completed { route, arrival } => {
            format!("completed with {} hops, arrival at {arrival}", route.statistic.hops)
        }
        TripOutcome::Rejected { infeasibility } => {
            format!("rejected, {} transitions violated constraints", infeasibility.statistics.total_rejected())
        }
        TripOutcome::Unfinished { route } => format!("unfinished with {} hops", route.statistic.hops),
        TripOutcome::Unscheduled => "unscheduled".to_string(),
    }
}
