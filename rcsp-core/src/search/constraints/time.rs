#[cfg(test)]
#[path = "../../../tests/unit/search/constraints/time_test.rs"]
mod time_test;

use super::*;
use crate::utils::compare_floats;
use std::cmp::Ordering;

/// Checks arrival against target node's time window. An early arrival waits for window start
/// (or is rejected when waiting is not allowed). Service time is added after waiting.
pub struct TimeWindowConstraint {
    allow_waiting: bool,
}

impl TimeWindowConstraint {
    /// Creates a new instance of `TimeWindowConstraint`.
    pub fn new(allow_waiting: bool) -> Self {
        Self { allow_waiting }
    }
}

impl TransitionConstraint for TimeWindowConstraint {
    fn evaluate(
        &self,
        transition: &Transition<'_>,
        _: &ResourceState,
        candidate: &mut Candidate,
    ) -> Option<ConstraintViolation> {
        let waiting = match transition.target.time_window.as_ref().map(|tw| tw.waiting_time(candidate.arrival)) {
            Some(None) => return ConstraintViolation::fail(TIME_WINDOW_CONSTRAINT_CODE),
            Some(Some(waiting)) if waiting > 0. && !self.allow_waiting => {
                return ConstraintViolation::fail(TIME_WINDOW_CONSTRAINT_CODE);
            }
            Some(Some(waiting)) => waiting,
            None => 0.,
        };

        let service = transition.target.service;

        candidate.waiting = waiting;
        candidate.metrics.waiting = waiting;
        candidate.metrics.service = service;
        candidate.state.time = candidate.arrival + waiting + service;

        ConstraintViolation::success()
    }
}

/// Limits total elapsed time from query departure till arrival at any node.
pub struct TimeBudgetConstraint;

impl TransitionConstraint for TimeBudgetConstraint {
    fn evaluate(
        &self,
        transition: &Transition<'_>,
        _: &ResourceState,
        candidate: &mut Candidate,
    ) -> Option<ConstraintViolation> {
        let elapsed = candidate.arrival - transition.query.departure;

        match transition.query.time_budget {
            Some(budget) if compare_floats(elapsed, budget) == Ordering::Greater => {
                ConstraintViolation::fail(TIME_BUDGET_CONSTRAINT_CODE)
            }
            _ => ConstraintViolation::success(),
        }
    }
}
