//! This module reimports a common used types.

pub use crate::models::common::{Cost, Distance, Duration, Energy, Load, TimeWindow, Timestamp};
pub use crate::models::graph::{EdgeAttributes, Graph, GraphBuilder, Node, Recharge, RechargeAmount};
pub use crate::models::LoadStore;

pub use crate::search::{
    Battery, ConstraintPipeline, LexicographicCost, Metric, Query, Route, SearchConfig, SearchResult, Solver,
    TelemetryMode, TransitionConstraint, TravelCost, WeightedCost,
};

pub use crate::simulation::{Simulation, SimulationReport, Trip, TripOutcome};

pub use crate::utils::compare_floats;
pub use crate::utils::Environment;
pub use crate::utils::Float;
pub use crate::utils::InfoLogger;
pub use crate::utils::{GenericError, GenericResult};
