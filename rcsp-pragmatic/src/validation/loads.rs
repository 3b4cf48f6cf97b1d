#[cfg(test)]
#[path = "../../tests/unit/validation/loads_test.rs"]
mod loads_test;

use super::*;
use crate::utils::combine_error_results;

/// Checks that edge loads reference existing edges.
fn check_e1300_unknown_edges(ctx: &ValidationContext, loads: &Loads) -> Result<(), FormatError> {
    let edges = loads
        .edges
        .iter()
        .filter(|edge_load| !ctx.has_edge(edge_load.from.as_str(), edge_load.to.as_str()))
        .map(|edge_load| format!("{}->{}", edge_load.from, edge_load.to))
        .collect::<Vec<_>>();

    if edges.is_empty() {
        Ok(())
    } else {
        Err(FormatError::new(
            "E1300".to_string(),
            "load of unknown edge".to_string(),
            format!("define edges or remove their loads: '{}'", edges.join(", ")),
        ))
    }
}

/// Checks that node loads reference existing nodes.
fn check_e1301_unknown_nodes(ctx: &ValidationContext, loads: &Loads) -> Result<(), FormatError> {
    let node_ids = loads.nodes.iter().map(|node_load| node_load.id.as_str()).filter(|id| !ctx.has_node(id));
    let node_ids = join_unique(node_ids);

    if node_ids.is_empty() {
        Ok(())
    } else {
        Err(FormatError::new(
            "E1301".to_string(),
            "load of unknown node".to_string(),
            format!("define nodes or remove their loads: '{node_ids}'"),
        ))
    }
}

/// Checks that loads are non-negative.
fn check_e1302_negative_loads(loads: &Loads) -> Result<(), FormatError> {
    let has_negative = loads
        .edges
        .iter()
        .map(|edge_load| edge_load.load)
        .chain(loads.nodes.iter().map(|node_load| node_load.load))
        .any(|load| load < 0);

    if has_negative {
        Err(FormatError::new(
            "E1302".to_string(),
            "negative load".to_string(),
            "use non-negative values for edge and node loads".to_string(),
        ))
    } else {
        Ok(())
    }
}

/// Validates current loads.
pub fn validate_loads(ctx: &ValidationContext) -> Result<(), Vec<FormatError>> {
    let Some(loads) = ctx.problem.loads.as_ref() else { return Ok(()) };

    combine_error_results(&[
        check_e1300_unknown_edges(ctx, loads),
        check_e1301_unknown_nodes(ctx, loads),
        check_e1302_negative_loads(loads),
    ])
}
