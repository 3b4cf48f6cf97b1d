use super::*;

fn pop_all(queue: &mut EventQueue) -> Vec<(Timestamp, EventKind)> {
    std::iter::from_fn(|| queue.pop().map(|event| (event.time, event.kind))).collect()
}

#[test]
fn can_pop_events_by_time() {
    let mut queue = EventQueue::default();
    queue.push(5., EventKind::Depart { trip: 0 });
    queue.push(1., EventKind::Depart { trip: 1 });
    queue.push(3., EventKind::ReleaseEdge { trip: 2, edge: 0 });

    assert_eq!(queue.len(), 3);
    assert_eq!(
        pop_all(&mut queue),
        vec![
            (1., EventKind::Depart { trip: 1 }),
            (3., EventKind::ReleaseEdge { trip: 2, edge: 0 }),
            (5., EventKind::Depart { trip: 0 }),
        ]
    );
    assert!(queue.is_empty());
}

#[test]
fn can_pop_releases_before_departures_at_the_same_time() {
    let mut queue = EventQueue::default();
    queue.push(2., EventKind::Depart { trip: 0 });
    queue.push(2., EventKind::ReleaseNode { trip: 1, node: 3 });
    queue.push(2., EventKind::ReleaseEdge { trip: 1, edge: 4 });

    assert_eq!(
        pop_all(&mut queue),
        vec![
            (2., EventKind::ReleaseNode { trip: 1, node: 3 }),
            (2., EventKind::ReleaseEdge { trip: 1, edge: 4 }),
            (2., EventKind::Depart { trip: 0 }),
        ]
    );
}

#[test]
fn can_keep_insertion_order_for_equal_events() {
    let mut queue = EventQueue::default();
    (0..5).for_each(|trip| queue.push(1., EventKind::Depart { trip }));

    let trips = pop_all(&mut queue)
        .into_iter()
        .filter_map(|(_, kind)| match kind {
            EventKind::Depart { trip } => Some(trip),
            _ => None,
        })
        .collect::<Vec<_>>();

    assert_eq!(trips, vec![0, 1, 2, 3, 4]);
}
