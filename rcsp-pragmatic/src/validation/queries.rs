#[cfg(test)]
#[path = "../../tests/unit/validation/queries_test.rs"]
mod queries_test;

use super::*;
use crate::utils::{combine_error_results, get_duplicates};

/// Checks that at least one query is specified.
fn check_e1200_empty_queries(ctx: &ValidationContext) -> Result<(), FormatError> {
    if ctx.problem.queries.is_empty() {
        Err(FormatError::new(
            "E1200".to_string(),
            "no queries specified".to_string(),
            "specify at least one query".to_string(),
        ))
    } else {
        Ok(())
    }
}

/// Checks that query ids are unique.
fn check_e1201_duplicated_queries(ctx: &ValidationContext) -> Result<(), FormatError> {
    get_duplicates(ctx.problem.queries.iter().map(|query| &query.id)).map_or(Ok(()), |ids| {
        Err(FormatError::new(
            "E1201".to_string(),
            "duplicated query ids".to_string(),
            format!("remove duplicates of queries with the ids: '{}'", ids.join(", ")),
        ))
    })
}

/// Checks that every query has at least one start.
fn check_e1202_queries_without_starts(ctx: &ValidationContext) -> Result<(), FormatError> {
    let query_ids = join_unique(
        ctx.problem.queries.iter().filter(|query| query.starts.is_empty()).map(|query| query.id.as_str()),
    );

    if query_ids.is_empty() {
        Ok(())
    } else {
        Err(FormatError::new(
            "E1202".to_string(),
            "query without start nodes".to_string(),
            format!("specify at least one start for queries: '{query_ids}'"),
        ))
    }
}

/// Checks that queries reference only known nodes.
fn check_e1203_query_unknown_nodes(ctx: &ValidationContext) -> Result<(), FormatError> {
    let node_ids = ctx
        .problem
        .queries
        .iter()
        .flat_map(|query| query.starts.iter().chain(std::iter::once(&query.goal)))
        .map(|id| id.as_str())
        .filter(|id| !ctx.has_node(id));

    let node_ids = join_unique(node_ids);

    if node_ids.is_empty() {
        Ok(())
    } else {
        Err(FormatError::new(
            "E1203".to_string(),
            "query references unknown node".to_string(),
            format!("define nodes with ids: '{node_ids}'"),
        ))
    }
}

/// Checks that departure, demand and time budget have valid values.
fn check_e1204_query_resources(ctx: &ValidationContext) -> Result<(), FormatError> {
    let query_ids = ctx
        .problem
        .queries
        .iter()
        .filter(|query| {
            query.departure.is_some_and(|departure| !departure.is_finite())
                || query.demand.is_some_and(|demand| demand < 0)
                || query.time_budget.is_some_and(|budget| budget.is_nan() || budget < 0.)
        })
        .map(|query| query.id.as_str());

    let query_ids = join_unique(query_ids);

    if query_ids.is_empty() {
        Ok(())
    } else {
        Err(FormatError::new(
            "E1204".to_string(),
            "invalid query departure, demand or time budget".to_string(),
            format!("use finite departure and non-negative demand and time budget for queries: '{query_ids}'"),
        ))
    }
}

/// Checks that battery has positive capacity and initial charge within it.
fn check_e1205_query_battery(ctx: &ValidationContext) -> Result<(), FormatError> {
    let query_ids = ctx
        .problem
        .queries
        .iter()
        .filter(|query| {
            query.battery.as_ref().is_some_and(|battery| {
                let initial = battery.initial.unwrap_or(battery.capacity);
                !battery.capacity.is_finite() || battery.capacity <= 0. || !(0. ..=battery.capacity).contains(&initial)
            })
        })
        .map(|query| query.id.as_str());

    let query_ids = join_unique(query_ids);

    if query_ids.is_empty() {
        Ok(())
    } else {
        Err(FormatError::new(
            "E1205".to_string(),
            "invalid battery definition".to_string(),
            format!("use positive capacity and initial charge not greater than capacity for queries: '{query_ids}'"),
        ))
    }
}

/// Validates queries.
pub fn validate_queries(ctx: &ValidationContext) -> Result<(), Vec<FormatError>> {
    combine_error_results(&[
        check_e1200_empty_queries(ctx),
        check_e1201_duplicated_queries(ctx),
        check_e1202_queries_without_starts(ctx),
        check_e1203_query_unknown_nodes(ctx),
        check_e1204_query_resources(ctx),
        check_e1205_query_battery(ctx),
    ])
}
