#[cfg(test)]
#[path = "../../tests/unit/search/reconstruction_test.rs"]
mod reconstruction_test;

use crate::models::graph::{Graph, NodeIndex};
use crate::search::{Label, QueryContext, Route, RouteStatistic, Step, Stop, TransitionMetrics};

/// Creates a route by walking the label's chain of steps back to the start.
pub(crate) fn reconstruct_route(graph: &Graph, query: &QueryContext, label: &Label) -> Route {
    let mut steps = label.trail.iter().collect::<Vec<_>>();
    steps.reverse();

    let mut metrics = TransitionMetrics::default();
    steps.iter().for_each(|step| metrics.accumulate(&step.metrics));

    let goal_arrival = steps.last().map_or(query.departure, |step| step.arrival);

    let statistic = RouteStatistic {
        distance: metrics.distance,
        duration: goal_arrival - query.departure,
        travel: metrics.duration,
        waiting: metrics.waiting,
        service: metrics.service,
        charging: metrics.charging,
        energy: metrics.energy,
        price: metrics.price,
        risk: metrics.risk,
        hops: label.hops(),
    };

    Route {
        nodes: steps.iter().map(|step| graph.node(step.node).id.clone()).collect(),
        edges: steps.iter().filter_map(|step| step.edge).collect(),
        stops: steps.iter().map(|step| create_stop(graph, step)).collect(),
        cost: label.cost.primary(),
        objective: label.cost.as_slice().to_vec(),
        statistic,
    }
}

/// Creates a route which consists of the single node, used when start is the goal.
pub(crate) fn create_trivial_route(graph: &Graph, query: &QueryContext, node: NodeIndex, dimensions: usize) -> Route {
    let stop = Stop {
        node: graph.node(node).id.clone(),
        arrival: query.departure,
        departure: query.departure,
        waiting: 0.,
        recharged: false,
        energy: query.battery.as_ref().map(|battery| battery.initial),
    };

    Route {
        nodes: vec![stop.node.clone()],
        edges: vec![],
        stops: vec![stop],
        cost: 0.,
        objective: vec![0.; dimensions],
        statistic: RouteStatistic::default(),
    }
}

fn create_stop(graph: &Graph, step: &Step) -> Stop {
    Stop {
        node: graph.node(step.node).id.clone(),
        arrival: step.arrival,
        departure: step.departure,
        waiting: step.waiting,
        recharged: step.recharged,
        energy: step.energy,
    }
}
