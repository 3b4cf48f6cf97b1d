#[cfg(test)]
#[path = "../../tests/unit/validation/graph_test.rs"]
mod graph_test;

use super::*;
use crate::utils::{combine_error_results, get_duplicates};

/// Checks that graph has at least one node.
fn check_e1100_empty_graph(ctx: &ValidationContext) -> Result<(), FormatError> {
    if ctx.problem.nodes.is_empty() {
        Err(FormatError::new(
            "E1100".to_string(),
            "graph has no nodes".to_string(),
            "specify at least one node".to_string(),
        ))
    } else {
        Ok(())
    }
}

/// Checks that node ids are unique and not empty.
fn check_e1101_node_ids(ctx: &ValidationContext) -> Result<(), FormatError> {
    let has_empty = ctx.problem.nodes.iter().any(|node| node.id.is_empty());

    match (get_duplicates(ctx.problem.nodes.iter().map(|node| &node.id)), has_empty) {
        (None, false) => Ok(()),
        (duplicates, _) => Err(FormatError::new(
            "E1101".to_string(),
            "duplicated or empty node ids".to_string(),
            format!(
                "use unique non empty ids, duplicates: '{}'",
                duplicates.map(|ids| ids.join(", ")).unwrap_or_default()
            ),
        )),
    }
}

/// Checks that node time windows are correct.
fn check_e1102_node_time_windows(ctx: &ValidationContext) -> Result<(), FormatError> {
    let node_ids = ctx
        .problem
        .nodes
        .iter()
        .filter(|node| {
            node.time_window.as_ref().is_some_and(|tw| match tw.as_slice() {
                [start, end] => !start.is_finite() || end.is_nan() || start > end,
                _ => true,
            })
        })
        .map(|node| node.id.as_str());

    let node_ids = join_unique(node_ids);

    if node_ids.is_empty() {
        Ok(())
    } else {
        Err(FormatError::new(
            "E1102".to_string(),
            "invalid time window of nodes".to_string(),
            format!("use [start, end] with start not after end for nodes: '{node_ids}'"),
        ))
    }
}

/// Checks that node service, capacity and recharge are non-negative.
fn check_e1103_node_attributes(ctx: &ValidationContext) -> Result<(), FormatError> {
    let node_ids = ctx
        .problem
        .nodes
        .iter()
        .filter(|node| {
            let has_invalid_recharge = node.recharge.as_ref().is_some_and(|recharge| {
                [recharge.amount, recharge.duration, recharge.price]
                    .into_iter()
                    .flatten()
                    .any(|value| !is_non_negative(value))
            });

            node.service.is_some_and(|service| !is_non_negative(service))
                || node.capacity.is_some_and(|capacity| capacity < 0)
                || has_invalid_recharge
        })
        .map(|node| node.id.as_str());

    let node_ids = join_unique(node_ids);

    if node_ids.is_empty() {
        Ok(())
    } else {
        Err(FormatError::new(
            "E1103".to_string(),
            "negative or non-finite node attributes".to_string(),
            format!("use non-negative service, capacity and recharge values for nodes: '{node_ids}'"),
        ))
    }
}

/// Checks that edges reference only known nodes.
fn check_e1104_edge_unknown_nodes(ctx: &ValidationContext) -> Result<(), FormatError> {
    let node_ids = ctx
        .problem
        .edges
        .iter()
        .flat_map(|edge| [edge.from.as_str(), edge.to.as_str()])
        .filter(|id| !ctx.has_node(id));

    let node_ids = join_unique(node_ids);

    if node_ids.is_empty() {
        Ok(())
    } else {
        Err(FormatError::new(
            "E1104".to_string(),
            "edge references unknown node".to_string(),
            format!("define nodes with ids: '{node_ids}'"),
        ))
    }
}

/// Checks that edge attributes are non-negative.
fn check_e1105_edge_attributes(ctx: &ValidationContext) -> Result<(), FormatError> {
    let edges = ctx
        .problem
        .edges
        .iter()
        .filter(|edge| {
            let has_invalid_value = [edge.duration, edge.energy, edge.price, edge.risk, edge.congestion]
                .into_iter()
                .flatten()
                .chain(std::iter::once(edge.distance))
                .any(|value| !is_non_negative(value));

            has_invalid_value || edge.capacity.is_some_and(|capacity| capacity < 0)
        })
        .map(|edge| format!("{}->{}", edge.from, edge.to))
        .collect::<Vec<_>>();

    if edges.is_empty() {
        Ok(())
    } else {
        Err(FormatError::new(
            "E1105".to_string(),
            "negative or non-finite edge attributes".to_string(),
            format!("use non-negative finite attributes for edges: '{}'", edges.join(", ")),
        ))
    }
}

/// Validates nodes and edges.
pub fn validate_graph(ctx: &ValidationContext) -> Result<(), Vec<FormatError>> {
    combine_error_results(&[
        check_e1100_empty_graph(ctx),
        check_e1101_node_ids(ctx),
        check_e1102_node_time_windows(ctx),
        check_e1103_node_attributes(ctx),
        check_e1104_edge_unknown_nodes(ctx),
        check_e1105_edge_attributes(ctx),
    ])
}
