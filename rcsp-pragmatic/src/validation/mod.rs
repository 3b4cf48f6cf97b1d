//! This module provides functionality to validate problem definition for logical correctness.

use crate::format::problem::*;
use crate::format::{FormatError, MultiFormatError};
use rustc_hash::FxHashSet;

mod graph;
use self::graph::validate_graph;

mod loads;
use self::loads::validate_loads;

mod objectives;
use self::objectives::validate_objectives;

mod queries;
use self::queries::validate_queries;

/// A validation context which keeps essential information.
pub struct ValidationContext<'a> {
    /// An original problem.
    pub problem: &'a Problem,

    node_ids: FxHashSet<&'a str>,
    edge_keys: FxHashSet<(&'a str, &'a str)>,
}

impl<'a> ValidationContext<'a> {
    /// Creates an instance of `ValidationContext`.
    pub fn new(problem: &'a Problem) -> Self {
        let node_ids = problem.nodes.iter().map(|node| node.id.as_str()).collect();
        let edge_keys = problem
            .edges
            .iter()
            .flat_map(|edge| {
                let forward = (edge.from.as_str(), edge.to.as_str());
                let backward = edge.undirected.unwrap_or(false).then_some((edge.to.as_str(), edge.from.as_str()));

                std::iter::once(forward).chain(backward)
            })
            .collect();

        Self { problem, node_ids, edge_keys }
    }

    /// Validates problem on set of rules.
    pub fn validate(&self) -> Result<(), MultiFormatError> {
        let errors = validate_graph(self)
            .err()
            .into_iter()
            .chain(validate_queries(self).err())
            .chain(validate_loads(self).err())
            .chain(validate_objectives(self).err())
            .flatten()
            .collect::<Vec<_>>();

        if errors.is_empty() { Ok(()) } else { Err(errors.into()) }
    }

    /// Checks whether node with given id is defined.
    fn has_node(&self, id: &str) -> bool {
        self.node_ids.contains(id)
    }

    /// Checks whether an edge between two nodes can be traversed in given direction.
    fn has_edge(&self, from: &str, to: &str) -> bool {
        self.edge_keys.contains(&(from, to))
    }
}

fn is_non_negative(value: f64) -> bool {
    value.is_finite() && value >= 0.
}

/// Joins ids keeping their order and dropping repeated ones.
fn join_unique<'a>(ids: impl Iterator<Item = &'a str>) -> String {
    let mut seen = FxHashSet::default();

    ids.filter(|id| seen.insert(*id)).collect::<Vec<_>>().join(", ")
}
