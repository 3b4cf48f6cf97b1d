use crate::models::common::{Cost, Distance, Duration, Energy, Timestamp};
use crate::models::graph::EdgeIndex;
use crate::search::ViolationCode;

/// A scheduled visit of a node.
#[derive(Clone, Debug, PartialEq)]
pub struct Stop {
    /// Node id.
    pub node: String,
    /// Arrival time.
    pub arrival: Timestamp,
    /// Departure time.
    pub departure: Timestamp,
    /// Waiting time before time window start.
    pub waiting: Duration,
    /// True if battery was recharged.
    pub recharged: bool,
    /// Remaining energy at departure.
    pub energy: Option<Energy>,
}

/// Aggregated metrics of the route.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RouteStatistic {
    /// Total distance.
    pub distance: Distance,
    /// Elapsed time from departure till arrival at goal.
    pub duration: Duration,
    /// Total travel duration.
    pub travel: Duration,
    /// Total waiting time.
    pub waiting: Duration,
    /// Total service time.
    pub service: Duration,
    /// Total charging time.
    pub charging: Duration,
    /// Consumed energy.
    pub energy: Energy,
    /// Total price.
    pub price: Cost,
    /// Total risk.
    pub risk: Cost,
    /// Amount of traversed edges.
    pub hops: usize,
}

/// A realized path from start to goal.
#[derive(Clone, Debug, PartialEq)]
pub struct Route {
    /// Node ids from start to goal.
    pub nodes: Vec<String>,
    /// Used edges.
    pub edges: Vec<EdgeIndex>,
    /// Schedule of the route.
    pub stops: Vec<Stop>,
    /// A total cost: the first component of objective.
    pub cost: Cost,
    /// All cost components.
    pub objective: Vec<Cost>,
    /// Route statistic.
    pub statistic: RouteStatistic,
}

/// Search statistics.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct SearchStatistics {
    /// Amount of labels popped from frontier and expanded.
    pub expanded: usize,
    /// Amount of labels admitted by constraints.
    pub generated: usize,
    /// Amount of admitted labels which were dominated.
    pub pruned: usize,
    /// Amount of transitions rejected by constraints, per violation code sorted by code.
    pub rejected: Vec<(ViolationCode, usize)>,
}

impl SearchStatistics {
    pub(crate) fn add_rejection(&mut self, code: ViolationCode) {
        match self.rejected.binary_search_by_key(&code, |(code, _)| *code) {
            Ok(idx) => self.rejected[idx].1 += 1,
            Err(idx) => self.rejected.insert(idx, (code, 1)),
        }
    }

    /// Returns total amount of rejected transitions.
    pub fn total_rejected(&self) -> usize {
        self.rejected.iter().map(|(_, count)| count).sum()
    }
}

/// Describes why no route was found.
#[derive(Clone, Debug, PartialEq)]
pub struct Infeasibility {
    /// Search statistics including rejections per constraint.
    pub statistics: SearchStatistics,
}

impl Infeasibility {
    /// Returns true if no constraint rejected anything: the goal is simply not reachable.
    pub fn is_unreachable(&self) -> bool {
        self.statistics.rejected.is_empty()
    }
}

/// A search result: either a route or a signal that no feasible route exists.
#[derive(Clone, Debug, PartialEq)]
pub enum SearchResult {
    /// The cheapest feasible route.
    Found(Route),
    /// No feasible route exists.
    Infeasible(Infeasibility),
}

impl SearchResult {
    /// Returns route if it is found.
    pub fn route(&self) -> Option<&Route> {
        match self {
            SearchResult::Found(route) => Some(route),
            SearchResult::Infeasible(_) => None,
        }
    }

    /// Returns true if no route is found.
    pub fn is_infeasible(&self) -> bool {
        matches!(self, SearchResult::Infeasible(_))
    }
}
