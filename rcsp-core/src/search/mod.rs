//! The search module contains a best-first label setting search engine which finds the cheapest
//! feasible path between start node(s) and a goal node.
//!
//! Labels are ordered by a total order: the cost vector (compared lexicographically), then amount
//! of hops (fewer is better), then the sequence of node indices from the start (lexicographically
//! smaller is better). This makes results reproducible when several optimal paths exist.

#[cfg(test)]
#[path = "../../tests/unit/search/query_test.rs"]
mod query_test;

use crate::algorithms::structures::BitVec;
use crate::models::common::{Duration, Energy, Load, Timestamp};
use crate::models::graph::{Graph, NodeIndex};
use crate::utils::{GenericError, GenericResult};

mod config;
pub use self::config::*;

pub mod constraints;
pub use self::constraints::{ConstraintPipeline, ConstraintViolation, TransitionConstraint, ViolationCode};

mod cost;
pub use self::cost::*;

mod engine;
pub use self::engine::Solver;

mod frontier;
pub use self::frontier::*;

mod label;
pub use self::label::*;

mod reconstruction;

mod result;
pub use self::result::*;

/// A battery definition of the query.
#[derive(Clone, Debug, PartialEq)]
pub struct Battery {
    /// Maximum charge.
    pub capacity: Energy,
    /// Charge at departure.
    pub initial: Energy,
}

impl Battery {
    /// Creates a battery which is fully charged at departure.
    pub fn full(capacity: Energy) -> Self {
        Self { capacity, initial: capacity }
    }
}

/// A routing query: where to go from, where to, and which resources are available.
#[derive(Clone, Debug)]
pub struct Query {
    /// Start node ids. More than one start makes a multi-source query.
    pub starts: Vec<String>,
    /// Goal node id.
    pub goal: String,
    /// Departure time.
    pub departure: Timestamp,
    /// A load carried by the query, it has to fit edge and node capacities.
    pub demand: Load,
    /// A battery, if energy is tracked.
    pub battery: Option<Battery>,
    /// A maximum elapsed time from departure.
    pub time_budget: Option<Duration>,
}

impl Query {
    /// Creates a query from single start to the goal.
    pub fn new(start: &str, goal: &str) -> Self {
        Self::new_multi_source(&[start], goal)
    }

    /// Creates a query with multiple starts.
    pub fn new_multi_source(starts: &[&str], goal: &str) -> Self {
        Self {
            starts: starts.iter().map(|start| start.to_string()).collect(),
            goal: goal.to_string(),
            departure: 0.,
            demand: 0,
            battery: None,
            time_budget: None,
        }
    }

    /// Sets departure time.
    pub fn with_departure(mut self, departure: Timestamp) -> Self {
        self.departure = departure;
        self
    }

    /// Sets demand.
    pub fn with_demand(mut self, demand: Load) -> Self {
        self.demand = demand;
        self
    }

    /// Sets battery.
    pub fn with_battery(mut self, battery: Battery) -> Self {
        self.battery = Some(battery);
        self
    }

    /// Sets time budget.
    pub fn with_time_budget(mut self, time_budget: Duration) -> Self {
        self.time_budget = Some(time_budget);
        self
    }
}

/// A query resolved against a specific graph.
#[derive(Clone, Debug)]
pub struct QueryContext {
    /// Start node indices without duplicates.
    pub starts: Vec<NodeIndex>,
    /// Goal node index.
    pub goal: NodeIndex,
    /// Departure time.
    pub departure: Timestamp,
    /// Carried demand.
    pub demand: Load,
    /// Battery.
    pub battery: Option<Battery>,
    /// Time budget.
    pub time_budget: Option<Duration>,
    /// True if paths have to visit every node at most once.
    pub is_elementary: bool,
}

impl QueryContext {
    /// Validates query and resolves node ids. Loop avoidance is forced when a non-zero demand is
    /// carried over a graph with capacities, so no edge can be used twice by the same path.
    pub fn new(graph: &Graph, query: &Query, elementary_paths: bool) -> GenericResult<Self> {
        let mut errors = Vec::default();

        if query.starts.is_empty() {
            errors.push("query has no start nodes".to_string());
        }

        let mut starts = Vec::with_capacity(query.starts.len());
        for start in query.starts.iter() {
            match graph.resolve(start) {
                Ok(node_idx) if !starts.contains(&node_idx) => starts.push(node_idx),
                Ok(_) => {}
                Err(err) => errors.push(err.to_string()),
            }
        }

        let goal = graph.resolve(query.goal.as_str()).map_err(|err| errors.push(err.to_string())).ok();

        if !query.departure.is_finite() {
            errors.push(format!("departure time should be finite, got {}", query.departure));
        }

        if query.demand < 0 {
            errors.push(format!("demand should be non-negative, got {}", query.demand));
        }

        if let Some(battery) = query.battery.as_ref() {
            let is_valid = battery.capacity.is_finite()
                && battery.capacity > 0.
                && battery.initial >= 0.
                && battery.initial <= battery.capacity;

            if !is_valid {
                errors.push(format!(
                    "battery should have positive capacity and initial charge within it, got {} and {}",
                    battery.capacity, battery.initial
                ));
            }
        }

        if query.time_budget.is_some_and(|budget| budget.is_nan() || budget < 0.) {
            errors.push("time budget should be non-negative".to_string());
        }

        GenericError::from_many("query has validation errors", errors)?;

        let goal = goal.ok_or_else(|| GenericError::from("cannot resolve goal"))?;
        let is_elementary = elementary_paths || (query.demand > 0 && graph.has_capacities());

        Ok(Self {
            starts,
            goal,
            departure: query.departure,
            demand: query.demand,
            battery: query.battery.clone(),
            time_budget: query.time_budget,
            is_elementary,
        })
    }

    /// Creates initial resource state at given start node.
    pub fn initial_state(&self, graph: &Graph, start: NodeIndex) -> ResourceState {
        let visited = if self.is_elementary {
            let mut visited = BitVec::new(graph.size());
            visited.set(start, true);
            Some(visited)
        } else {
            None
        };

        ResourceState {
            node: start,
            time: self.departure,
            energy: self.battery.as_ref().map(|battery| battery.initial),
            visited,
        }
    }
}
