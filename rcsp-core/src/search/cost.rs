#[cfg(test)]
#[path = "../../tests/unit/search/cost_test.rs"]
mod cost_test;

use crate::models::common::Cost;
use crate::utils::{compare_float_slices, Float, GenericResult};
use std::cmp::Ordering;
use std::fmt;
use tinyvec::TinyVec;

/// A metric measured for a single transition.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Metric {
    /// Traveled distance.
    Distance,
    /// Travel duration (with congestion).
    Duration,
    /// Time spent waiting for time window start.
    Waiting,
    /// Time spent on service at node.
    Service,
    /// Time spent on charging.
    Charging,
    /// Total elapsed time: travel, waiting, service and charging.
    Time,
    /// Consumed energy.
    Energy,
    /// Price paid for traversal and charging.
    Price,
    /// Risk score.
    Risk,
    /// Amount of traversed edges.
    Hops,
}

impl Metric {
    /// Returns true if the metric accumulates waiting time.
    pub fn includes_waiting(&self) -> bool {
        matches!(self, Metric::Waiting | Metric::Time)
    }
}

/// Keeps metrics of a single transition: an edge traversal or a recharge.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TransitionMetrics {
    /// Traveled distance.
    pub distance: Float,
    /// Travel duration (with congestion).
    pub duration: Float,
    /// Waiting time.
    pub waiting: Float,
    /// Service time.
    pub service: Float,
    /// Charging time.
    pub charging: Float,
    /// Consumed energy.
    pub energy: Float,
    /// Paid price.
    pub price: Float,
    /// Risk score.
    pub risk: Float,
    /// Amount of traversed edges.
    pub hops: Float,
}

impl TransitionMetrics {
    /// Returns value of the given metric.
    pub fn get(&self, metric: Metric) -> Float {
        match metric {
            Metric::Distance => self.distance,
            Metric::Duration => self.duration,
            Metric::Waiting => self.waiting,
            Metric::Service => self.service,
            Metric::Charging => self.charging,
            Metric::Time => self.duration + self.waiting + self.service + self.charging,
            Metric::Energy => self.energy,
            Metric::Price => self.price,
            Metric::Risk => self.risk,
            Metric::Hops => self.hops,
        }
    }

    /// Accumulates other metrics into this one.
    pub fn accumulate(&mut self, other: &Self) {
        self.distance += other.distance;
        self.duration += other.duration;
        self.waiting += other.waiting;
        self.service += other.service;
        self.charging += other.charging;
        self.energy += other.energy;
        self.price += other.price;
        self.risk += other.risk;
        self.hops += other.hops;
    }
}

/// A cost vector which components are compared lexicographically.
/// A weighted sum objective uses a single component.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CostVector(TinyVec<[Cost; 4]>);

impl CostVector {
    /// Creates a zero cost vector of given dimension.
    pub fn zero(dimensions: usize) -> Self {
        Self(std::iter::repeat_n(0., dimensions).collect())
    }

    /// Returns the first (the most important) component.
    pub fn primary(&self) -> Cost {
        self.0.first().copied().unwrap_or_default()
    }

    /// Returns a component-wise sum of two vectors.
    pub fn add(&self, other: &Self) -> Self {
        debug_assert_eq!(self.0.len(), other.0.len());
        Self(self.0.iter().zip(other.0.iter()).map(|(a, b)| a + b).collect())
    }

    /// Compares vectors lexicographically.
    pub fn compare(&self, other: &Self) -> Ordering {
        compare_float_slices(self.as_slice(), other.as_slice())
    }

    /// Returns components as slice.
    pub fn as_slice(&self) -> &[Cost] {
        self.0.as_slice()
    }
}

impl From<Vec<Cost>> for CostVector {
    fn from(values: Vec<Cost>) -> Self {
        Self(values.into_iter().collect())
    }
}

impl fmt::Display for CostVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let values = self.0.iter().map(|value| format!("{value:.3}")).collect::<Vec<_>>();
        write!(f, "[{}]", values.join(", "))
    }
}

/// Provides the way to turn transition metrics into a cost.
pub trait TravelCost {
    /// Returns amount of cost vector components.
    fn dimensions(&self) -> usize;

    /// Returns a cost of the transition with given metrics.
    fn cost(&self, metrics: &TransitionMetrics) -> CostVector;

    /// Returns true if the cost grows with waiting time, directly or as a part of elapsed time.
    fn depends_on_waiting(&self) -> bool {
        true
    }
}

/// A single component cost calculated as a weighted sum of metrics.
#[derive(Clone, Debug)]
pub struct WeightedCost {
    weights: Vec<(Metric, Float)>,
}

impl WeightedCost {
    /// Creates a new instance of `WeightedCost`. Weights have to be finite and non-negative.
    pub fn new(weights: Vec<(Metric, Float)>) -> GenericResult<Self> {
        if let Some((metric, weight)) = weights.iter().find(|(_, weight)| !weight.is_finite() || *weight < 0.) {
            return Err(format!("weight of {metric:?} metric should be finite and non-negative, got {weight}").into());
        }

        Ok(Self { weights })
    }

    /// Returns weights.
    pub fn weights(&self) -> &[(Metric, Float)] {
        self.weights.as_slice()
    }
}

impl Default for WeightedCost {
    fn default() -> Self {
        Self { weights: vec![(Metric::Distance, 1.)] }
    }
}

impl TravelCost for WeightedCost {
    fn dimensions(&self) -> usize {
        1
    }

    fn cost(&self, metrics: &TransitionMetrics) -> CostVector {
        let total = self.weights.iter().map(|(metric, weight)| metrics.get(*metric) * weight).sum::<Float>();

        CostVector::from(vec![total])
    }

    fn depends_on_waiting(&self) -> bool {
        self.weights.iter().any(|(metric, weight)| metric.includes_waiting() && *weight > 0.)
    }
}

/// A multi component cost where each component is a metric compared in the given order.
#[derive(Clone, Debug)]
pub struct LexicographicCost {
    metrics: Vec<Metric>,
}

impl LexicographicCost {
    /// Creates a new instance of `LexicographicCost`.
    pub fn new(metrics: Vec<Metric>) -> GenericResult<Self> {
        if metrics.is_empty() {
            return Err("lexicographic cost requires at least one metric".into());
        }

        Ok(Self { metrics })
    }
}

impl TravelCost for LexicographicCost {
    fn dimensions(&self) -> usize {
        self.metrics.len()
    }

    fn cost(&self, metrics: &TransitionMetrics) -> CostVector {
        CostVector(self.metrics.iter().map(|metric| metrics.get(*metric)).collect())
    }

    fn depends_on_waiting(&self) -> bool {
        self.metrics.iter().any(|metric| metric.includes_waiting())
    }
}
