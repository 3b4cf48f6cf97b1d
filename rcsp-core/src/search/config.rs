use crate::search::{TransitionConstraint, TravelCost, WeightedCost};
use std::sync::Arc;

/// Specifies a telemetry mode.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum TelemetryMode {
    /// No telemetry at all.
    #[default]
    None,
    /// Only logging of search and simulation summaries.
    OnlyLogging,
}

/// A search configuration.
#[derive(Clone)]
pub struct SearchConfig {
    /// Turns transition metrics into cost.
    pub travel_cost: Arc<dyn TravelCost + Send + Sync>,
    /// Constraints evaluated after built-in ones.
    pub constraints: Vec<Arc<dyn TransitionConstraint + Send + Sync>>,
    /// Allows to wait for time window start when arriving early.
    pub allow_waiting: bool,
    /// Forbids visiting the same node twice.
    pub elementary_paths: bool,
    /// Telemetry mode.
    pub telemetry: TelemetryMode,
}

impl SearchConfig {
    /// Sets travel cost.
    pub fn with_travel_cost(mut self, travel_cost: Arc<dyn TravelCost + Send + Sync>) -> Self {
        self.travel_cost = travel_cost;
        self
    }

    /// Appends a custom constraint.
    pub fn with_constraint<T: TransitionConstraint + Send + Sync + 'static>(mut self, constraint: T) -> Self {
        self.constraints.push(Arc::new(constraint));
        self
    }

    /// Sets whether waiting is allowed.
    pub fn with_waiting(mut self, allow_waiting: bool) -> Self {
        self.allow_waiting = allow_waiting;
        self
    }

    /// Sets whether paths have to be elementary.
    pub fn with_elementary_paths(mut self, elementary_paths: bool) -> Self {
        self.elementary_paths = elementary_paths;
        self
    }

    /// Sets telemetry mode.
    pub fn with_telemetry(mut self, telemetry: TelemetryMode) -> Self {
        self.telemetry = telemetry;
        self
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            travel_cost: Arc::new(WeightedCost::default()),
            constraints: Vec::default(),
            allow_waiting: true,
            elementary_paths: false,
            telemetry: TelemetryMode::None,
        }
    }
}
