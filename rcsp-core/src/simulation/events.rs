#[cfg(test)]
#[path = "../../tests/unit/simulation/events_test.rs"]
mod events_test;

use crate::models::common::Timestamp;
use crate::models::graph::{EdgeIndex, NodeIndex};
use crate::utils::compare_floats;
use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// Specifies what happens when event is processed.
#[derive(Clone, Debug, PartialEq)]
pub enum EventKind {
    /// Demand held on the edge is released.
    ReleaseEdge {
        /// Trip index.
        trip: usize,
        /// Edge to release.
        edge: EdgeIndex,
    },
    /// Occupancy held on the node is released.
    ReleaseNode {
        /// Trip index.
        trip: usize,
        /// Node to release.
        node: NodeIndex,
    },
    /// Trip is routed and starts moving.
    Depart {
        /// Trip index.
        trip: usize,
    },
}

impl EventKind {
    fn rank(&self) -> usize {
        match self {
            EventKind::ReleaseEdge { .. } | EventKind::ReleaseNode { .. } => 0,
            EventKind::Depart { .. } => 1,
        }
    }
}

/// A scheduled event.
#[derive(Clone, Debug)]
pub struct Event {
    /// Time when event happens.
    pub time: Timestamp,
    /// Event kind.
    pub kind: EventKind,
    sequence: usize,
}

impl PartialEq for Event {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Event {}

impl PartialOrd for Event {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Event {
    fn cmp(&self, other: &Self) -> Ordering {
        // min-heap: releases at the same time go before departures
        compare_floats(other.time, self.time)
            .then_with(|| other.kind.rank().cmp(&self.kind.rank()))
            .then_with(|| other.sequence.cmp(&self.sequence))
    }
}

/// An event queue which pops events strictly ordered by time, kind and insertion sequence.
#[derive(Default)]
pub struct EventQueue {
    heap: BinaryHeap<Event>,
    sequence: usize,
}

impl EventQueue {
    /// Schedules a new event.
    pub fn push(&mut self, time: Timestamp, kind: EventKind) {
        self.heap.push(Event { time, kind, sequence: self.sequence });
        self.sequence += 1;
    }

    /// Pops the earliest event.
    pub fn pop(&mut self) -> Option<Event> {
        self.heap.pop()
    }

    /// Returns amount of pending events.
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Returns true if no events are pending.
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}
