use super::*;
use crate::search::{CostVector, ResourceState, Step, TimeDominance, Trail, TransitionMetrics};

fn create_label(node: NodeIndex, cost: f64, time: f64) -> Rc<Label> {
    let step = Step {
        node,
        edge: None,
        arrival: time,
        waiting: 0.,
        departure: time,
        recharged: false,
        energy: None,
        metrics: TransitionMetrics::default(),
    };

    Rc::new(Label {
        cost: CostVector::from(vec![cost]),
        state: ResourceState { node, time, energy: None, visited: None },
        trail: Trail::start(step),
    })
}

#[test]
fn can_pop_labels_by_priority() {
    let mut frontier = Frontier::default();
    frontier.push(0, create_label(0, 3., 0.));
    frontier.push(1, create_label(1, 1., 0.));
    frontier.push(2, create_label(2, 2., 0.));

    assert_eq!(frontier.len(), 3);
    let ids = std::iter::from_fn(|| frontier.pop().map(|(id, _)| id)).collect::<Vec<_>>();

    assert_eq!(ids, vec![1, 2, 0]);
    assert!(frontier.is_empty());
}

#[test]
fn can_pop_equal_labels_in_registration_order() {
    let mut frontier = Frontier::default();
    frontier.push(1, create_label(0, 1., 0.));
    frontier.push(0, create_label(0, 1., 0.));

    assert_eq!(frontier.pop().map(|(id, _)| id), Some(0));
    assert_eq!(frontier.pop().map(|(id, _)| id), Some(1));
    assert_eq!(frontier.pop().map(|(id, _)| id), None);
}

#[test]
fn can_reject_dominated_label() {
    let mut registry = LabelRegistry::new(2, TimeDominance::Earlier);

    assert_eq!(registry.register(create_label(1, 1., 1.)), Registration::Accepted(0));
    assert_eq!(registry.register(create_label(1, 2., 2.)), Registration::Dominated);
    assert_eq!(registry.alive_at(1), 1);
    assert_eq!(registry.len(), 1);
}

#[test]
fn can_keep_incomparable_labels() {
    let mut registry = LabelRegistry::new(2, TimeDominance::Earlier);

    assert_eq!(registry.register(create_label(1, 1., 5.)), Registration::Accepted(0));
    assert_eq!(registry.register(create_label(1, 2., 2.)), Registration::Accepted(1));
    assert_eq!(registry.register(create_label(0, 9., 9.)), Registration::Accepted(2));

    assert_eq!(registry.alive_at(1), 2);
    assert_eq!(registry.alive_at(0), 1);
    assert!(!registry.is_stale(0));
    assert!(!registry.is_stale(1));
}

#[test]
fn can_mark_dominated_labels_as_stale() {
    let mut registry = LabelRegistry::new(2, TimeDominance::Earlier);
    registry.register(create_label(1, 3., 5.));
    registry.register(create_label(1, 4., 2.));

    assert_eq!(registry.register(create_label(1, 1., 1.)), Registration::Accepted(2));

    assert!(registry.is_stale(0));
    assert!(registry.is_stale(1));
    assert!(!registry.is_stale(2));
    assert_eq!(registry.alive_at(1), 1);
    assert_eq!(registry.len(), 3);
    assert_eq!(registry.get(2).cost.primary(), 1.);
}

#[test]
fn can_keep_earlier_and_later_labels_with_exact_time_dominance() {
    let mut registry = LabelRegistry::new(2, TimeDominance::Exact);

    assert_eq!(registry.register(create_label(1, 1., 1.)), Registration::Accepted(0));
    assert_eq!(registry.register(create_label(1, 2., 5.)), Registration::Accepted(1));
    assert_eq!(registry.register(create_label(1, 3., 5.)), Registration::Dominated);

    assert_eq!(registry.alive_at(1), 2);
}
