//! Contains feasibility constraints which are evaluated for every transition before a new label
//! is admitted to the frontier.

#[cfg(test)]
#[path = "../../../tests/unit/search/constraints/pipeline_test.rs"]
mod pipeline_test;

use crate::models::common::{Duration, Timestamp};
use crate::models::graph::{Edge, EdgeIndex, Graph, Node};
use crate::models::LoadStore;
use crate::search::{QueryContext, ResourceState, TransitionMetrics};
use std::sync::Arc;

mod capacity;
pub use self::capacity::CapacityConstraint;

mod energy;
pub use self::energy::{recharge_state, EnergyConstraint};

mod loops;
pub use self::loops::LoopConstraint;

mod time;
pub use self::time::{TimeBudgetConstraint, TimeWindowConstraint};

/// Specifies a type for constraint violation code.
pub type ViolationCode = i32;

/// A violation code of time window constraint.
pub const TIME_WINDOW_CONSTRAINT_CODE: ViolationCode = 1;
/// A violation code of time budget constraint.
pub const TIME_BUDGET_CONSTRAINT_CODE: ViolationCode = 2;
/// A violation code of energy constraint.
pub const ENERGY_CONSTRAINT_CODE: ViolationCode = 3;
/// A violation code of capacity constraint.
pub const CAPACITY_CONSTRAINT_CODE: ViolationCode = 4;
/// A violation code of loop avoidance constraint.
pub const LOOP_CONSTRAINT_CODE: ViolationCode = 5;

/// Specifies result of a constraint check.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ConstraintViolation {
    /// Violation code which is used as marker of specific constraint violated.
    pub code: ViolationCode,
}

impl ConstraintViolation {
    /// A constraint violation failure.
    pub fn fail(code: ViolationCode) -> Option<Self> {
        Some(ConstraintViolation { code })
    }

    /// No constraint violation.
    pub fn success() -> Option<Self> {
        None
    }
}

/// Describes a move from the current label's node through an edge.
pub struct Transition<'a> {
    /// A graph.
    pub graph: &'a Graph,
    /// Current loads.
    pub store: &'a LoadStore,
    /// A query being solved.
    pub query: &'a QueryContext,
    /// An index of used edge.
    pub edge_idx: EdgeIndex,
    /// Used edge.
    pub edge: &'a Edge,
    /// Target node.
    pub target: &'a Node,
}

/// A candidate state produced by a transition which is refined by constraints.
#[derive(Clone, Debug)]
pub struct Candidate {
    /// A new resource state.
    pub state: ResourceState,
    /// Arrival time at target node.
    pub arrival: Timestamp,
    /// Waiting time at target node.
    pub waiting: Duration,
    /// Transition metrics.
    pub metrics: TransitionMetrics,
}

/// A feasibility check of a single transition. Implementation should reject candidate by
/// returning a violation or update the part of the candidate's state it is responsible for.
pub trait TransitionConstraint {
    /// Evaluates transition from the current state.
    fn evaluate(
        &self,
        transition: &Transition<'_>,
        current: &ResourceState,
        candidate: &mut Candidate,
    ) -> Option<ConstraintViolation>;
}

/// Applies constraints one by one: the first violation rejects the transition.
#[derive(Clone)]
pub struct ConstraintPipeline {
    constraints: Vec<Arc<dyn TransitionConstraint + Send + Sync>>,
}

impl ConstraintPipeline {
    /// Creates a pipeline with built-in constraints followed by extra ones.
    pub fn new(allow_waiting: bool, extra: &[Arc<dyn TransitionConstraint + Send + Sync>]) -> Self {
        let constraints: Vec<Arc<dyn TransitionConstraint + Send + Sync>> = vec![
            Arc::new(TimeWindowConstraint::new(allow_waiting)),
            Arc::new(TimeBudgetConstraint),
            Arc::new(EnergyConstraint),
            Arc::new(CapacityConstraint),
            Arc::new(LoopConstraint),
        ];

        Self { constraints: constraints.into_iter().chain(extra.iter().cloned()).collect() }
    }

    /// Evaluates transition returning admitted candidate or the first violation.
    pub fn evaluate(
        &self,
        transition: &Transition<'_>,
        current: &ResourceState,
    ) -> Result<Candidate, ConstraintViolation> {
        let attributes = &transition.edge.attributes;
        let duration = attributes.travel_duration(transition.store.edge_load(transition.edge_idx));
        let arrival = current.time + duration;

        let mut candidate = Candidate {
            state: ResourceState { node: transition.edge.to, time: arrival, ..current.clone() },
            arrival,
            waiting: 0.,
            metrics: TransitionMetrics {
                distance: attributes.distance,
                duration,
                energy: attributes.energy,
                price: attributes.price,
                risk: attributes.risk,
                hops: 1.,
                ..TransitionMetrics::default()
            },
        };

        let violation =
            self.constraints.iter().find_map(|constraint| constraint.evaluate(transition, current, &mut candidate));

        match violation {
            Some(violation) => Err(violation),
            None => Ok(candidate),
        }
    }

    /// Returns amount of constraints.
    pub fn len(&self) -> usize {
        self.constraints.len()
    }

    /// Returns true if pipeline has no constraints.
    pub fn is_empty(&self) -> bool {
        self.constraints.is_empty()
    }
}
