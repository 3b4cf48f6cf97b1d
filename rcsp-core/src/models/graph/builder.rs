#[cfg(test)]
#[path = "../../../tests/unit/models/graph/builder_test.rs"]
mod builder_test;

use super::*;
use crate::utils::{GenericError, GenericResult};
use rustc_hash::FxHashMap;

struct EdgeDefinition {
    from: String,
    to: String,
    attributes: EdgeAttributes,
    is_undirected: bool,
}

impl EdgeDefinition {
    fn new(from: &str, to: &str, attributes: EdgeAttributes, is_undirected: bool) -> Self {
        Self { from: from.to_string(), to: to.to_string(), attributes, is_undirected }
    }
}

/// Provides the way to build a graph with validation of its consistency.
#[derive(Default)]
pub struct GraphBuilder {
    nodes: Vec<Node>,
    edges: Vec<EdgeDefinition>,
}

impl GraphBuilder {
    /// Adds a node.
    pub fn add_node(mut self, node: Node) -> Self {
        self.nodes.push(node);
        self
    }

    /// Adds multiple nodes.
    pub fn add_nodes(mut self, nodes: impl IntoIterator<Item = Node>) -> Self {
        self.nodes.extend(nodes);
        self
    }

    /// Adds a directed edge.
    pub fn add_edge(mut self, from: &str, to: &str, attributes: EdgeAttributes) -> Self {
        self.edges.push(EdgeDefinition::new(from, to, attributes, false));
        self
    }

    /// Adds an undirected edge which is stored as a symmetric pair of directed edges.
    pub fn add_undirected_edge(mut self, from: &str, to: &str, attributes: EdgeAttributes) -> Self {
        self.edges.push(EdgeDefinition::new(from, to, attributes, true));
        self
    }

    /// Builds a graph. Returns an error which lists all found problems if input is malformed.
    pub fn build(self) -> GenericResult<Graph> {
        let mut errors = Vec::default();
        let mut index = FxHashMap::<&str, NodeIndex>::default();

        for (position, node) in self.nodes.iter().enumerate() {
            if node.id.is_empty() {
                errors.push(format!("node with empty id at position {position}"));
            } else if index.contains_key(node.id.as_str()) {
                errors.push(format!("duplicated node id: '{}'", node.id));
            } else {
                index.insert(node.id.as_str(), position);
            }

            errors.extend(check_node(node));
        }

        let mut edges = Vec::with_capacity(self.edges.len() * 2);
        for definition in self.edges.iter() {
            errors.extend(check_edge_attributes(definition));

            let resolve = |id: &str| match index.get(id) {
                Some(&node_idx) => Ok(node_idx),
                None => Err(format!("edge '{}'->'{}' references unknown node '{id}'", definition.from, definition.to)),
            };

            match (resolve(definition.from.as_str()), resolve(definition.to.as_str())) {
                (Ok(from), Ok(to)) => {
                    edges.push(Edge { from, to, attributes: definition.attributes.clone() });
                    if definition.is_undirected && from != to {
                        edges.push(Edge { from: to, to: from, attributes: definition.attributes.clone() });
                    }
                }
                (from, to) => errors.extend(from.err().into_iter().chain(to.err())),
            }
        }

        GenericError::from_many("graph has validation errors", errors)?;

        Ok(Graph::new(self.nodes, edges))
    }
}

fn check_node(node: &Node) -> Vec<String> {
    let mut errors = Vec::default();

    if node.time_window.as_ref().is_some_and(|time_window| !time_window.is_valid()) {
        errors.push(format!("node '{}' has invalid time window", node.id));
    }

    if !is_non_negative(node.service) {
        errors.push(format!("node '{}' has negative or non-finite service duration", node.id));
    }

    if node.capacity.is_some_and(|capacity| capacity < 0) {
        errors.push(format!("node '{}' has negative capacity", node.id));
    }

    if let Some(recharge) = node.recharge.as_ref() {
        let is_amount_valid = match recharge.amount {
            RechargeAmount::Full => true,
            RechargeAmount::Partial(amount) => is_non_negative(amount),
        };

        if !is_amount_valid || !is_non_negative(recharge.duration) || !is_non_negative(recharge.price) {
            errors.push(format!("node '{}' has invalid recharge definition", node.id));
        }
    }

    errors
}

fn check_edge_attributes(definition: &EdgeDefinition) -> Vec<String> {
    let attributes = &definition.attributes;

    let mut errors = [
        ("distance", attributes.distance),
        ("duration", attributes.duration),
        ("energy", attributes.energy),
        ("price", attributes.price),
        ("risk", attributes.risk),
        ("congestion", attributes.congestion),
    ]
    .into_iter()
    .filter(|(_, value)| !is_non_negative(*value))
    .map(|(name, _)| format!("edge '{}'->'{}' has negative or non-finite {name}", definition.from, definition.to))
    .collect::<Vec<_>>();

    if attributes.capacity.is_some_and(|capacity| capacity < 0) {
        errors.push(format!("edge '{}'->'{}' has negative capacity", definition.from, definition.to));
    }

    errors
}

fn is_non_negative(value: f64) -> bool {
    value.is_finite() && value >= 0.
}
