use super::*;

/// Rejects revisiting a node when visited set is tracked.
pub struct LoopConstraint;

impl TransitionConstraint for LoopConstraint {
    fn evaluate(
        &self,
        _: &Transition<'_>,
        _: &ResourceState,
        candidate: &mut Candidate,
    ) -> Option<ConstraintViolation> {
        let node = candidate.state.node;

        match candidate.state.visited.as_mut() {
            Some(visited) if visited.get(node).unwrap_or(false) => ConstraintViolation::fail(LOOP_CONSTRAINT_CODE),
            Some(visited) => {
                visited.set(node, true);
                ConstraintViolation::success()
            }
            None => ConstraintViolation::success(),
        }
    }
}
