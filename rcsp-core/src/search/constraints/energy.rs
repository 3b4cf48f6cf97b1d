#[cfg(test)]
#[path = "../../../tests/unit/search/constraints/energy_test.rs"]
mod energy_test;

use super::*;
use crate::models::graph::Node;
use crate::utils::compare_floats;
use std::cmp::Ordering;

/// Rejects transitions which consume more energy than remains in the battery.
pub struct EnergyConstraint;

impl TransitionConstraint for EnergyConstraint {
    fn evaluate(
        &self,
        transition: &Transition<'_>,
        current: &ResourceState,
        candidate: &mut Candidate,
    ) -> Option<ConstraintViolation> {
        let Some(energy) = current.energy else {
            return ConstraintViolation::success();
        };

        let remaining = energy - transition.edge.attributes.energy;
        if compare_floats(remaining, 0.) == Ordering::Less {
            return ConstraintViolation::fail(ENERGY_CONSTRAINT_CODE);
        }

        candidate.state.energy = Some(remaining);

        ConstraintViolation::success()
    }
}

/// Returns a state after charging at given node together with charging metrics.
/// Returns `None` if node cannot recharge, battery is not tracked or charging gives nothing.
pub fn recharge_state(
    node: &Node,
    query: &QueryContext,
    state: &ResourceState,
) -> Option<(ResourceState, TransitionMetrics)> {
    let recharge = node.recharge.as_ref()?;
    let battery = query.battery.as_ref()?;
    let energy = state.energy?;

    let charged = recharge.apply(energy, battery.capacity);
    if compare_floats(charged, energy) != Ordering::Greater {
        return None;
    }

    let metrics =
        TransitionMetrics { charging: recharge.duration, price: recharge.price, ..TransitionMetrics::default() };
    let state = ResourceState { time: state.time + recharge.duration, energy: Some(charged), ..state.clone() };

    Some((state, metrics))
}
