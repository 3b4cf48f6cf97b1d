use serde::{Deserialize, Serialize};
use std::io::{BufReader, BufWriter, Error, Read, Write};

/// A visit of the node.
#[derive(Clone, Deserialize, Serialize, PartialEq, Debug)]
pub struct Stop {
    /// Node id.
    pub node: String,
    /// Arrival time.
    pub arrival: f64,
    /// Departure time.
    pub departure: f64,
    /// Waiting time before time window start.
    #[serde(default)]
    pub waiting: f64,
    /// Set to true if battery was recharged.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub recharged: bool,
    /// Remaining energy at departure.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub energy: Option<f64>,
}

/// Route statistic.
#[derive(Clone, Default, Deserialize, Serialize, PartialEq, Debug)]
pub struct RouteStatistic {
    /// Total distance.
    pub distance: f64,
    /// Elapsed time from departure till arrival at goal.
    pub duration: f64,
    /// Travel time.
    pub travel: f64,
    /// Waiting time.
    pub waiting: f64,
    /// Service time.
    pub service: f64,
    /// Charging time.
    pub charging: f64,
    /// Consumed energy.
    pub energy: f64,
    /// Paid price.
    pub price: f64,
    /// Accumulated risk.
    pub risk: f64,
    /// Amount of traversed edges.
    pub hops: usize,
}

/// A route found for the query.
#[derive(Clone, Deserialize, Serialize, PartialEq, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Route {
    /// Query id.
    pub query_id: String,
    /// Node ids from start to goal.
    pub nodes: Vec<String>,
    /// Route cost.
    pub cost: f64,
    /// All cost components.
    pub objective: Vec<f64>,
    /// Route schedule.
    pub stops: Vec<Stop>,
    /// Route statistic.
    pub statistic: RouteStatistic,
}

/// A reason why no route is found.
#[derive(Clone, Deserialize, Serialize, PartialEq, Debug)]
pub struct InfeasibleReason {
    /// A reason code.
    pub code: String,
    /// Description.
    pub description: String,
    /// Amount of rejected transitions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,
}

/// A query without feasible route.
#[derive(Clone, Deserialize, Serialize, PartialEq, Debug)]
#[serde(rename_all = "camelCase")]
pub struct InfeasibleQuery {
    /// Query id.
    pub query_id: String,
    /// Possible reasons.
    pub reasons: Vec<InfeasibleReason>,
}

/// A total statistic of all routes.
#[derive(Clone, Default, Deserialize, Serialize, PartialEq, Debug)]
pub struct Statistic {
    /// Total cost.
    pub cost: f64,
    /// Total distance.
    pub distance: f64,
    /// Total duration.
    pub duration: f64,
    /// Total amount of traversed edges.
    pub hops: usize,
}

/// A solution of all queries.
#[derive(Clone, Deserialize, Serialize, PartialEq, Debug)]
pub struct Solution {
    /// Total statistic.
    pub statistic: Statistic,
    /// Found routes.
    pub routes: Vec<Route>,
    /// Queries without feasible route.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub infeasible: Vec<InfeasibleQuery>,
}

/// Serializes solution into json format.
pub fn serialize_solution<W: Write>(writer: BufWriter<W>, solution: &Solution) -> Result<(), Error> {
    serde_json::to_writer_pretty(writer, solution).map_err(Error::from)
}

/// Deserializes solution from json format.
pub fn deserialize_solution<R: Read>(reader: BufReader<R>) -> Result<Solution, Error> {
    serde_json::from_reader(reader).map_err(Error::from)
}
