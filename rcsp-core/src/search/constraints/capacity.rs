#[cfg(test)]
#[path = "../../../tests/unit/search/constraints/capacity_test.rs"]
mod capacity_test;

use super::*;

/// Rejects transitions where demand carried by the query does not fit into remaining capacity
/// of the edge or of the target node.
pub struct CapacityConstraint;

impl TransitionConstraint for CapacityConstraint {
    fn evaluate(
        &self,
        transition: &Transition<'_>,
        _: &ResourceState,
        candidate: &mut Candidate,
    ) -> Option<ConstraintViolation> {
        let demand = transition.query.demand;
        if demand == 0 {
            return ConstraintViolation::success();
        }

        let (graph, store) = (transition.graph, transition.store);

        let can_fit_edge = store.can_fit_edge(graph, transition.edge_idx, demand);
        let can_fit_node = store.can_fit_node(graph, candidate.state.node, demand);

        if can_fit_edge && can_fit_node {
            ConstraintViolation::success()
        } else {
            ConstraintViolation::fail(CAPACITY_CONSTRAINT_CODE)
        }
    }
}
