#[cfg(test)]
#[path = "../../../tests/unit/format/problem/model_test.rs"]
mod model_test;

use crate::format::{FormatError, MultiFormatError};
use serde::{Deserialize, Serialize};
use std::io::{BufReader, BufWriter, Error, Read, Write};

// region Graph

/// Specifies a recharge station at the node.
#[derive(Clone, Deserialize, Debug, Serialize)]
pub struct NodeRecharge {
    /// Amount of restored energy. Battery is charged to its capacity when omitted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
    /// Charging duration.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<f64>,
    /// Charging price.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
}

/// A graph node.
#[derive(Clone, Deserialize, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Node {
    /// A unique node id.
    pub id: String,

    /// Allowed arrival time as `[start, end]`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_window: Option<Vec<f64>>,

    /// Service duration.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service: Option<f64>,

    /// Maximum occupancy.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capacity: Option<i32>,

    /// Recharge station.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recharge: Option<NodeRecharge>,
}

/// A graph edge.
#[derive(Clone, Deserialize, Debug, Serialize)]
pub struct Edge {
    /// Source node id.
    pub from: String,

    /// Target node id.
    pub to: String,

    /// Edge length, used also as weight of default objective.
    pub distance: f64,

    /// Travel duration. The same as distance when omitted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<f64>,

    /// Consumed energy.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub energy: Option<f64>,

    /// Traversal price.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,

    /// Risk score.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub risk: Option<f64>,

    /// Congestion coefficient.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub congestion: Option<f64>,

    /// Maximum load carried at the same time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capacity: Option<i32>,

    /// If set to true, the edge can be traversed in both directions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub undirected: Option<bool>,
}

// endregion

// region Queries

/// A battery of the query.
#[derive(Clone, Deserialize, Debug, Serialize)]
pub struct QueryBattery {
    /// Battery capacity.
    pub capacity: f64,
    /// Initial charge. The battery is full when omitted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub initial: Option<f64>,
}

/// A routing query.
#[derive(Clone, Deserialize, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Query {
    /// A unique query id.
    pub id: String,

    /// Start node ids.
    pub starts: Vec<String>,

    /// Goal node id.
    pub goal: String,

    /// Departure time, zero by default.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub departure: Option<f64>,

    /// Carried load.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub demand: Option<i32>,

    /// Battery.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub battery: Option<QueryBattery>,

    /// Maximum elapsed time from departure.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_budget: Option<f64>,
}

// endregion

// region Loads

/// A current load of the edge.
#[derive(Clone, Deserialize, Debug, Serialize)]
pub struct EdgeLoad {
    /// Source node id.
    pub from: String,
    /// Target node id.
    pub to: String,
    /// Load value.
    pub load: i32,
}

/// A current occupancy of the node.
#[derive(Clone, Deserialize, Debug, Serialize)]
pub struct NodeLoad {
    /// Node id.
    pub id: String,
    /// Load value.
    pub load: i32,
}

/// Loads observed before queries are solved.
#[derive(Clone, Deserialize, Debug, Default, Serialize)]
pub struct Loads {
    /// Edge loads.
    #[serde(default)]
    pub edges: Vec<EdgeLoad>,
    /// Node loads.
    #[serde(default)]
    pub nodes: Vec<NodeLoad>,
}

// endregion

// region Objective

/// A metric measured for every transition.
#[derive(Clone, Copy, Deserialize, Debug, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Metric {
    /// Traveled distance.
    Distance,
    /// Travel duration.
    Duration,
    /// Waiting time.
    Waiting,
    /// Service time.
    Service,
    /// Charging time.
    Charging,
    /// Total elapsed time.
    Time,
    /// Consumed energy.
    Energy,
    /// Paid price.
    Price,
    /// Risk score.
    Risk,
    /// Amount of traversed edges.
    Hops,
}

/// A weight of the metric.
#[derive(Clone, Deserialize, Debug, Serialize)]
pub struct MetricWeight {
    /// A metric.
    pub metric: Metric,
    /// Its weight.
    pub weight: f64,
}

/// Specifies how cost of the route is calculated.
#[derive(Clone, Deserialize, Debug, Serialize)]
#[serde(tag = "type")]
pub enum Objective {
    /// A weighted sum of metrics.
    #[serde(rename(deserialize = "weighted-sum", serialize = "weighted-sum"))]
    WeightedSum {
        /// Metric weights.
        weights: Vec<MetricWeight>,
    },

    /// Metrics compared in lexicographical order.
    #[serde(rename(deserialize = "lexicographic", serialize = "lexicographic"))]
    Lexicographic {
        /// Metrics from the most important to the least.
        metrics: Vec<Metric>,
    },
}

// endregion

// region Common

/// Search options.
#[derive(Clone, Deserialize, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Options {
    /// Allows to wait for time window start, true by default.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_waiting: Option<bool>,

    /// Forbids visiting the same node twice, false by default.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub elementary_paths: Option<bool>,

    /// Enables logging of search summaries.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logging: Option<bool>,
}

/// A problem definition.
#[derive(Clone, Deserialize, Debug, Serialize)]
pub struct Problem {
    /// Graph nodes.
    pub nodes: Vec<Node>,

    /// Graph edges.
    pub edges: Vec<Edge>,

    /// Queries to solve.
    pub queries: Vec<Query>,

    /// Current loads.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub loads: Option<Loads>,

    /// Objective, the distance is minimized when omitted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub objective: Option<Objective>,

    /// Search options.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<Options>,
}

// endregion

/// Deserializes problem in json format from `BufReader`.
pub fn deserialize_problem<R: Read>(reader: BufReader<R>) -> Result<Problem, MultiFormatError> {
    serde_json::from_reader(reader).map_err(|err| {
        vec![FormatError::new(
            "E0000".to_string(),
            "cannot deserialize problem".to_string(),
            format!("check input json: '{err}'"),
        )]
        .into()
    })
}

/// Serializes problem in json format into `BufWriter`.
pub fn serialize_problem<W: Write>(problem: &Problem, writer: &mut BufWriter<W>) -> Result<(), Error> {
    serde_json::to_writer_pretty(writer, problem).map_err(Error::from)
}
