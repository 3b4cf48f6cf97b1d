#[cfg(test)]
#[path = "../../tests/unit/search/frontier_test.rs"]
mod frontier_test;

use crate::models::graph::NodeIndex;
use crate::search::{Label, TimeDominance};
use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::rc::Rc;

/// A result of label registration.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Registration {
    /// Label is registered and has given id.
    Accepted(usize),
    /// Label is dominated by already registered one.
    Dominated,
}

/// Keeps all non-dominated labels per node.
pub struct LabelRegistry {
    labels: Vec<(Rc<Label>, bool)>,
    buckets: Vec<Vec<usize>>,
    time_dominance: TimeDominance,
}

impl LabelRegistry {
    /// Creates a new registry for graph of given size.
    pub fn new(size: usize, time_dominance: TimeDominance) -> Self {
        Self { labels: Vec::default(), buckets: vec![Vec::default(); size], time_dominance }
    }

    /// Registers label if it is not dominated. Already registered labels dominated by the new
    /// one become stale and are removed from their bucket.
    pub fn register(&mut self, label: Rc<Label>) -> Registration {
        let time_dominance = self.time_dominance;
        let bucket = &mut self.buckets[label.state.node];

        if bucket.iter().any(|&id| self.labels[id].0.dominates(&label, time_dominance)) {
            return Registration::Dominated;
        }

        let labels = &mut self.labels;
        bucket.retain(|&id| {
            let is_dominated = label.dominates(&labels[id].0, time_dominance);
            if is_dominated {
                labels[id].1 = true;
            }

            !is_dominated
        });

        let id = self.labels.len();
        bucket.push(id);
        self.labels.push((label, false));

        Registration::Accepted(id)
    }

    /// Returns label by its id.
    pub fn get(&self, id: usize) -> &Rc<Label> {
        &self.labels[id].0
    }

    /// Checks whether label was superseded by a dominating one.
    pub fn is_stale(&self, id: usize) -> bool {
        self.labels[id].1
    }

    /// Returns amount of alive labels at given node.
    pub fn alive_at(&self, node: NodeIndex) -> usize {
        self.buckets[node].len()
    }

    /// Returns total amount of registered labels.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Returns true if nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

struct FrontierEntry {
    id: usize,
    label: Rc<Label>,
}

impl PartialEq for FrontierEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FrontierEntry {}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // min-heap by label priority, registration order keeps it total
        other.label.compare_priority(&self.label).then_with(|| other.id.cmp(&self.id))
    }
}

/// A min-priority queue of labels to be expanded.
#[derive(Default)]
pub struct Frontier {
    heap: BinaryHeap<FrontierEntry>,
}

impl Frontier {
    /// Pushes registered label.
    pub fn push(&mut self, id: usize, label: Rc<Label>) {
        self.heap.push(FrontierEntry { id, label });
    }

    /// Pops label with the lowest priority.
    pub fn pop(&mut self) -> Option<(usize, Rc<Label>)> {
        self.heap.pop().map(|entry| (entry.id, entry.label))
    }

    /// Returns amount of labels in frontier.
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Returns true if frontier is empty.
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}
