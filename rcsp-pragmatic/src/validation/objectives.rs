#[cfg(test)]
#[path = "../../tests/unit/validation/objectives_test.rs"]
mod objectives_test;

use super::*;
use crate::utils::{combine_error_results, get_duplicates};

/// Checks that objective has at least one metric.
fn check_e1400_empty_objective(metrics: &[Metric]) -> Result<(), FormatError> {
    if metrics.is_empty() {
        Err(FormatError::new(
            "E1400".to_string(),
            "an empty objective specified".to_string(),
            "specify at least one metric or remove objective to minimize distance".to_string(),
        ))
    } else {
        Ok(())
    }
}

/// Checks that each metric is specified only once.
fn check_e1401_duplicate_metrics(metrics: &[Metric]) -> Result<(), FormatError> {
    let names = metrics.iter().map(|metric| format!("{metric:?}").to_lowercase()).collect::<Vec<_>>();

    get_duplicates(names.iter()).map_or(Ok(()), |names| {
        Err(FormatError::new(
            "E1401".to_string(),
            "duplicate metrics in objective".to_string(),
            format!("remove duplicates of metrics: '{}'", names.join(", ")),
        ))
    })
}

/// Checks that weights are finite and non-negative.
fn check_e1402_invalid_weights(ctx: &ValidationContext) -> Result<(), FormatError> {
    let has_invalid = match ctx.problem.objective.as_ref() {
        Some(Objective::WeightedSum { weights }) => weights.iter().any(|weight| !is_non_negative(weight.weight)),
        _ => false,
    };

    if has_invalid {
        Err(FormatError::new(
            "E1402".to_string(),
            "invalid metric weight".to_string(),
            "use finite non-negative weights".to_string(),
        ))
    } else {
        Ok(())
    }
}

fn get_metrics(ctx: &ValidationContext) -> Option<Vec<Metric>> {
    ctx.problem.objective.as_ref().map(|objective| match objective {
        Objective::WeightedSum { weights } => weights.iter().map(|weight| weight.metric).collect(),
        Objective::Lexicographic { metrics } => metrics.clone(),
    })
}

/// Validates objective.
pub fn validate_objectives(ctx: &ValidationContext) -> Result<(), Vec<FormatError>> {
    let Some(metrics) = get_metrics(ctx) else { return Ok(()) };

    combine_error_results(&[
        check_e1400_empty_objective(metrics.as_slice()),
        check_e1401_duplicate_metrics(metrics.as_slice()),
        check_e1402_invalid_weights(ctx),
    ])
}
