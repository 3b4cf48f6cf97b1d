use super::*;
use crate::validation::ValidationContext;
use rcsp_core::models::common::TimeWindow;
use rcsp_core::models::graph::{EdgeAttributes, GraphBuilder, Node as CoreNode, Recharge};
use rcsp_core::search::{Battery, LexicographicCost, Metric as CoreMetric, TelemetryMode, TravelCost, WeightedCost};
use rcsp_core::utils::{GenericError, GenericResult};

pub(super) fn map_to_problem(api_problem: ApiProblem) -> Result<CoreProblem, MultiFormatError> {
    ValidationContext::new(&api_problem).validate()?;

    let graph = read_graph(&api_problem).map_err(|err| to_multi_format_error("E0001", "cannot create graph", err))?;
    let config = read_search_config(&api_problem)
        .map_err(|err| to_multi_format_error("E0002", "cannot create search configuration", err))?;
    let loads = read_loads(&api_problem, &graph);
    let (query_ids, queries): (Vec<_>, Vec<_>) =
        api_problem.queries.iter().map(|query| (query.id.clone(), read_query(query))).unzip();

    Ok(CoreProblem { graph: Arc::new(graph), query_ids, queries, loads, config })
}

fn read_graph(api_problem: &ApiProblem) -> GenericResult<Graph> {
    let builder = GraphBuilder::default().add_nodes(api_problem.nodes.iter().map(read_node));

    api_problem
        .edges
        .iter()
        .fold(builder, |builder, edge| {
            let attributes = read_edge_attributes(edge);
            if edge.undirected.unwrap_or(false) {
                builder.add_undirected_edge(&edge.from, &edge.to, attributes)
            } else {
                builder.add_edge(&edge.from, &edge.to, attributes)
            }
        })
        .build()
}

fn read_node(node: &Node) -> CoreNode {
    let mut core_node = CoreNode::new(node.id.as_str()).with_service(node.service.unwrap_or(0.));

    if let Some(time_window) = node.time_window.as_ref().and_then(|tw| parse_time_window(tw.as_slice())) {
        core_node = core_node.with_time_window(time_window);
    }

    if let Some(capacity) = node.capacity {
        core_node = core_node.with_capacity(capacity);
    }

    if let Some(recharge) = node.recharge.as_ref() {
        let core_recharge = recharge
            .amount
            .map_or_else(Recharge::full, Recharge::partial)
            .with_duration(recharge.duration.unwrap_or(0.))
            .with_price(recharge.price.unwrap_or(0.));

        core_node = core_node.with_recharge(core_recharge);
    }

    core_node
}

fn read_edge_attributes(edge: &Edge) -> EdgeAttributes {
    EdgeAttributes {
        distance: edge.distance,
        duration: edge.duration.unwrap_or(edge.distance),
        energy: edge.energy.unwrap_or(0.),
        price: edge.price.unwrap_or(0.),
        risk: edge.risk.unwrap_or(0.),
        congestion: edge.congestion.unwrap_or(0.),
        capacity: edge.capacity,
    }
}

fn read_query(query: &Query) -> CoreQuery {
    let starts = query.starts.iter().map(|start| start.as_str()).collect::<Vec<_>>();
    let mut core_query = CoreQuery::new_multi_source(starts.as_slice(), query.goal.as_str())
        .with_departure(query.departure.unwrap_or(0.))
        .with_demand(query.demand.unwrap_or(0));

    if let Some(battery) = query.battery.as_ref() {
        let initial = battery.initial.unwrap_or(battery.capacity);
        core_query = core_query.with_battery(Battery { capacity: battery.capacity, initial });
    }

    if let Some(time_budget) = query.time_budget {
        core_query = core_query.with_time_budget(time_budget);
    }

    core_query
}

/// Accumulates loads per edge and node, a sum beyond the load range saturates and fits no demand.
fn read_loads(api_problem: &ApiProblem, graph: &Graph) -> LoadStore {
    let mut store = LoadStore::default();
    let Some(loads) = api_problem.loads.as_ref() else { return store };

    loads
        .edges
        .iter()
        .filter_map(|edge_load| {
            let from = graph.node_index(edge_load.from.as_str())?;
            let to = graph.node_index(edge_load.to.as_str())?;

            graph.find_edge(from, to).map(|edge_idx| (edge_idx, edge_load.load))
        })
        .for_each(|(edge_idx, load)| store.set_edge_load(edge_idx, store.edge_load(edge_idx).saturating_add(load)));

    loads
        .nodes
        .iter()
        .filter_map(|node_load| graph.node_index(node_load.id.as_str()).map(|node_idx| (node_idx, node_load.load)))
        .for_each(|(node_idx, load)| store.set_node_load(node_idx, store.node_load(node_idx).saturating_add(load)));

    store
}

fn read_search_config(api_problem: &ApiProblem) -> GenericResult<SearchConfig> {
    let options = api_problem.options.clone().unwrap_or_default();

    let travel_cost: Arc<dyn TravelCost + Send + Sync> = match api_problem.objective.as_ref() {
        Some(Objective::WeightedSum { weights }) => Arc::new(WeightedCost::new(
            weights.iter().map(|weight| (map_metric(weight.metric), weight.weight)).collect(),
        )?),
        Some(Objective::Lexicographic { metrics }) => {
            Arc::new(LexicographicCost::new(metrics.iter().copied().map(map_metric).collect())?)
        }
        None => Arc::new(WeightedCost::default()),
    };

    let telemetry = if options.logging.unwrap_or(false) { TelemetryMode::OnlyLogging } else { TelemetryMode::None };

    Ok(SearchConfig::default()
        .with_travel_cost(travel_cost)
        .with_waiting(options.allow_waiting.unwrap_or(true))
        .with_elementary_paths(options.elementary_paths.unwrap_or(false))
        .with_telemetry(telemetry))
}

fn map_metric(metric: Metric) -> CoreMetric {
    match metric {
        Metric::Distance => CoreMetric::Distance,
        Metric::Duration => CoreMetric::Duration,
        Metric::Waiting => CoreMetric::Waiting,
        Metric::Service => CoreMetric::Service,
        Metric::Charging => CoreMetric::Charging,
        Metric::Time => CoreMetric::Time,
        Metric::Energy => CoreMetric::Energy,
        Metric::Price => CoreMetric::Price,
        Metric::Risk => CoreMetric::Risk,
        Metric::Hops => CoreMetric::Hops,
    }
}

fn parse_time_window(tw: &[f64]) -> Option<TimeWindow> {
    match tw {
        [start, end] => Some(TimeWindow::new(*start, *end)),
        _ => None,
    }
}

fn to_multi_format_error(code: &str, cause: &str, error: GenericError) -> MultiFormatError {
    vec![FormatError::new(code.to_string(), cause.to_string(), format!("check problem definition: '{error}'"))].into()
}
