use super::*;
use crate::helpers::*;

fn weighted(weights: Vec<(Metric, f64)>) -> Objective {
    Objective::WeightedSum {
        weights: weights.into_iter().map(|(metric, weight)| MetricWeight { metric, weight }).collect(),
    }
}

fn lexicographic(metrics: Vec<Metric>) -> Objective {
    Objective::Lexicographic { metrics }
}

#[test]
fn can_fallback_to_default() {
    let problem = Problem { objective: None, ..create_test_problem() };

    let result = validate_objectives(&ValidationContext::new(&problem));

    assert!(result.is_ok());
}

parameterized_test! {can_validate_objective, (objective, expected), {
    can_validate_objective_impl(objective, expected);
}}

can_validate_objective! {
    case01_weighted: (weighted(vec![(Metric::Distance, 1.), (Metric::Risk, 10.)]), vec![]),
    case02_lexicographic: (lexicographic(vec![Metric::Hops, Metric::Time]), vec![]),
    case03_empty_weights: (weighted(vec![]), vec!["E1400"]),
    case04_empty_metrics: (lexicographic(vec![]), vec!["E1400"]),
    case05_duplicate_metrics: (lexicographic(vec![Metric::Hops, Metric::Time, Metric::Hops]), vec!["E1401"]),
    case06_duplicate_weights: (weighted(vec![(Metric::Price, 1.), (Metric::Price, 2.)]), vec!["E1401"]),
    case07_negative_weight: (weighted(vec![(Metric::Price, -1.)]), vec!["E1402"]),
    case08_nan_weight: (weighted(vec![(Metric::Price, f64::NAN), (Metric::Price, 1.)]), vec!["E1401", "E1402"]),
}

fn can_validate_objective_impl(objective: Objective, expected: Vec<&str>) {
    let problem = Problem { objective: Some(objective), ..create_test_problem() };

    let result = validate_objectives(&ValidationContext::new(&problem));

    let codes = result.err().map(|errors| errors.into_iter().map(|err| err.code).collect::<Vec<_>>());
    assert_eq!(codes.unwrap_or_default(), expected);
}

#[test]
fn can_list_duplicate_metric_names() {
    let metrics = vec![Metric::Risk, Metric::Distance, Metric::Risk, Metric::Distance];

    let result = check_e1401_duplicate_metrics(metrics.as_slice());

    assert_eq!(result.err().map(|err| err.action), Some("remove duplicates of metrics: 'distance, risk'".to_string()));
}
