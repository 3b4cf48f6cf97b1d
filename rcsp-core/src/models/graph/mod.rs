//! Contains a graph model: nodes, directed edges with their attributes and an adjacency index.

use crate::models::common::*;

mod builder;
pub use self::builder::GraphBuilder;

#[allow(clippy::module_inception)]
mod graph;
pub use self::graph::Graph;

/// An index of the node inside of the graph.
pub type NodeIndex = usize;

/// An index of the edge inside of the graph.
pub type EdgeIndex = usize;

/// Specifies how much energy is restored at recharge node.
#[derive(Clone, Debug, PartialEq)]
pub enum RechargeAmount {
    /// Battery is charged up to its capacity.
    Full,
    /// Battery is charged by given amount, but not more than its capacity.
    Partial(Energy),
}

/// Specifies a recharge capability of a node.
#[derive(Clone, Debug, PartialEq)]
pub struct Recharge {
    /// How much energy is restored.
    pub amount: RechargeAmount,
    /// How long charging takes.
    pub duration: Duration,
    /// A price paid for charging.
    pub price: Cost,
}

impl Recharge {
    /// Creates an instantaneous and free recharge to full capacity.
    pub fn full() -> Self {
        Self { amount: RechargeAmount::Full, duration: 0., price: 0. }
    }

    /// Creates a recharge which restores given amount of energy.
    pub fn partial(amount: Energy) -> Self {
        Self { amount: RechargeAmount::Partial(amount), duration: 0., price: 0. }
    }

    /// Sets charging duration.
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    /// Sets charging price.
    pub fn with_price(mut self, price: Cost) -> Self {
        self.price = price;
        self
    }

    /// Returns energy level after charging.
    pub fn apply(&self, energy: Energy, battery: Energy) -> Energy {
        match self.amount {
            RechargeAmount::Full => battery,
            RechargeAmount::Partial(amount) => (energy + amount).min(battery),
        }
    }
}

/// Represents a graph node with its static attributes.
#[derive(Clone, Debug)]
pub struct Node {
    /// A unique node id.
    pub id: String,
    /// Allowed arrival time.
    pub time_window: Option<TimeWindow>,
    /// A service time spent at node after arrival (or after waiting for time window start).
    pub service: Duration,
    /// Maximum occupancy of the node.
    pub capacity: Option<Load>,
    /// Recharge capability.
    pub recharge: Option<Recharge>,
}

impl Node {
    /// Creates a node without any constraints.
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into(), time_window: None, service: 0., capacity: None, recharge: None }
    }

    /// Sets node time window.
    pub fn with_time_window(mut self, time_window: TimeWindow) -> Self {
        self.time_window = Some(time_window);
        self
    }

    /// Sets node service time.
    pub fn with_service(mut self, service: Duration) -> Self {
        self.service = service;
        self
    }

    /// Sets node occupancy capacity.
    pub fn with_capacity(mut self, capacity: Load) -> Self {
        self.capacity = Some(capacity);
        self
    }

    /// Marks node as a recharge station.
    pub fn with_recharge(mut self, recharge: Recharge) -> Self {
        self.recharge = Some(recharge);
        self
    }
}

/// Keeps edge attributes used by constraints and costs.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EdgeAttributes {
    /// Edge length.
    pub distance: Distance,
    /// Free flow travel duration.
    pub duration: Duration,
    /// Energy consumed by traversal.
    pub energy: Energy,
    /// A price paid for traversal (toll).
    pub price: Cost,
    /// A risk score of traversal.
    pub risk: Cost,
    /// A congestion coefficient: how much travel duration grows with the current edge load.
    pub congestion: f64,
    /// Maximum load which edge can carry at the same time.
    pub capacity: Option<Load>,
}

impl EdgeAttributes {
    /// Creates attributes with given weight used as both distance and duration.
    pub fn with_weight(weight: Distance) -> Self {
        Self { distance: weight, duration: weight, ..Self::default() }
    }

    /// Sets distance.
    pub fn with_distance(mut self, distance: Distance) -> Self {
        self.distance = distance;
        self
    }

    /// Sets duration.
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    /// Sets consumed energy.
    pub fn with_energy(mut self, energy: Energy) -> Self {
        self.energy = energy;
        self
    }

    /// Sets traversal price.
    pub fn with_price(mut self, price: Cost) -> Self {
        self.price = price;
        self
    }

    /// Sets traversal risk.
    pub fn with_risk(mut self, risk: Cost) -> Self {
        self.risk = risk;
        self
    }

    /// Sets congestion coefficient.
    pub fn with_congestion(mut self, congestion: f64) -> Self {
        self.congestion = congestion;
        self
    }

    /// Sets edge capacity.
    pub fn with_capacity(mut self, capacity: Load) -> Self {
        self.capacity = Some(capacity);
        self
    }

    /// Returns travel duration taking into account congestion caused by current load.
    pub fn travel_duration(&self, load: Load) -> Duration {
        if load <= 0 || self.congestion == 0. {
            return self.duration;
        }

        let ratio = match self.capacity {
            Some(capacity) if capacity > 0 => load as f64 / capacity as f64,
            Some(_) => 0.,
            None => load as f64,
        };

        self.duration * (1. + self.congestion * ratio)
    }
}

/// A directed edge.
#[derive(Clone, Debug)]
pub struct Edge {
    /// Source node.
    pub from: NodeIndex,
    /// Target node.
    pub to: NodeIndex,
    /// Edge attributes.
    pub attributes: EdgeAttributes,
}
