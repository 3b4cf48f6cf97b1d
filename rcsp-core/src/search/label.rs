#[cfg(test)]
#[path = "../../tests/unit/search/label_test.rs"]
mod label_test;

use crate::algorithms::structures::BitVec;
use crate::models::common::{Duration, Energy, Timestamp};
use crate::models::graph::{EdgeIndex, NodeIndex};
use crate::search::{CostVector, TransitionMetrics};
use crate::utils::compare_floats;
use std::cmp::Ordering;
use std::rc::Rc;

/// Specifies how ready times of two labels are compared by dominance.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TimeDominance {
    /// An earlier ready time is not worse: the label can always wait to catch up with a later one.
    Earlier,
    /// Ready times have to be equal: an earlier arrival can be rejected by a time window or pay
    /// more for waiting later.
    Exact,
}

/// A snapshot of resources tracked by the search at a specific node.
#[derive(Clone, Debug, PartialEq)]
pub struct ResourceState {
    /// Current node.
    pub node: NodeIndex,
    /// A time when the node can be left: after waiting, service and charging.
    pub time: Timestamp,
    /// Remaining energy, if battery is tracked.
    pub energy: Option<Energy>,
    /// Visited nodes, if loop avoidance is active.
    pub visited: Option<BitVec>,
}

impl ResourceState {
    /// Checks whether resources of this state are not worse than resources of the other one.
    pub fn is_not_worse(&self, other: &Self, time_dominance: TimeDominance) -> bool {
        let is_time_not_worse = match (time_dominance, compare_floats(self.time, other.time)) {
            (TimeDominance::Earlier, ordering) => ordering != Ordering::Greater,
            (TimeDominance::Exact, ordering) => ordering == Ordering::Equal,
        };

        let is_energy_not_worse = match (self.energy, other.energy) {
            (Some(left), Some(right)) => compare_floats(left, right) != Ordering::Less,
            (None, None) => true,
            _ => false,
        };

        let is_visited_not_worse = match (self.visited.as_ref(), other.visited.as_ref()) {
            (Some(left), Some(right)) => left.is_subset(right),
            (None, None) => true,
            _ => false,
        };

        is_time_not_worse && is_energy_not_worse && is_visited_not_worse
    }
}

/// A single realized step of the path.
#[derive(Clone, Debug)]
pub struct Step {
    /// A node reached by the step.
    pub node: NodeIndex,
    /// An edge used to reach the node, none for the start node.
    pub edge: Option<EdgeIndex>,
    /// Arrival time.
    pub arrival: Timestamp,
    /// Waiting time before time window start.
    pub waiting: Duration,
    /// Departure time.
    pub departure: Timestamp,
    /// True if battery was recharged at the node.
    pub recharged: bool,
    /// Remaining energy at departure.
    pub energy: Option<Energy>,
    /// Metrics accumulated by the step.
    pub metrics: TransitionMetrics,
}

/// A persistent chain of steps from the start node. Labels which share a prefix share the
/// same chain links, so the chain is used both as parent pointers and as a tie breaker.
#[derive(Debug)]
pub struct Trail {
    /// The last step.
    pub step: Step,
    /// The rest of the chain.
    pub parent: Option<Rc<Trail>>,
    /// Amount of traversed edges.
    pub hops: usize,
}

impl Trail {
    /// Creates a chain which consists of the start step only.
    pub fn start(step: Step) -> Rc<Self> {
        Rc::new(Self { step, parent: None, hops: 0 })
    }

    /// Extends the chain with a new step reached through an edge.
    pub fn extend(parent: &Rc<Self>, step: Step) -> Rc<Self> {
        Rc::new(Self { step, parent: Some(parent.clone()), hops: parent.hops + 1 })
    }

    /// Replaces the last step keeping the same parent.
    pub fn replace(this: &Rc<Self>, step: Step) -> Rc<Self> {
        Rc::new(Self { step, parent: this.parent.clone(), hops: this.hops })
    }

    /// Compares two chains by hops and then by sequence of node indices from the start.
    pub fn compare(left: &Rc<Self>, right: &Rc<Self>) -> Ordering {
        left.hops.cmp(&right.hops).then_with(|| {
            let mut result = Ordering::Equal;
            let (mut left, mut right) = (Some(left), Some(right));

            // the most significant difference is the one closest to the start
            while let (Some(l), Some(r)) = (left, right) {
                if Rc::ptr_eq(l, r) {
                    break;
                }

                let ordering = l.step.node.cmp(&r.step.node);
                if ordering != Ordering::Equal {
                    result = ordering;
                }

                left = l.parent.as_ref();
                right = r.parent.as_ref();
            }

            result
        })
    }

    /// Iterates steps from the last one to the start.
    pub fn iter(self: &Rc<Self>) -> impl Iterator<Item = &Step> + '_ {
        std::iter::successors(Some(self.as_ref()), |trail| trail.parent.as_deref()).map(|trail| &trail.step)
    }
}

/// A search label: an accumulated cost with a resource snapshot and a way how it was reached.
#[derive(Clone, Debug)]
pub struct Label {
    /// Accumulated cost.
    pub cost: CostVector,
    /// Resources snapshot.
    pub state: ResourceState,
    /// A chain of steps.
    pub trail: Rc<Trail>,
}

impl Label {
    /// Returns amount of traversed edges.
    pub fn hops(&self) -> usize {
        self.trail.hops
    }

    /// Compares labels by priority: cost, then hops, then node sequence.
    pub fn compare_priority(&self, other: &Self) -> Ordering {
        self.cost.compare(&other.cost).then_with(|| Trail::compare(&self.trail, &other.trail))
    }

    /// Checks whether this label dominates the other one: it has not worse priority and not worse
    /// resources at the same node, so any extension of the other label is not better than the
    /// same extension of this one.
    pub fn dominates(&self, other: &Self, time_dominance: TimeDominance) -> bool {
        self.state.node == other.state.node
            && self.compare_priority(other) != Ordering::Greater
            && self.state.is_not_worse(&other.state, time_dominance)
    }
}
