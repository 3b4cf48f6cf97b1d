#[cfg(test)]
#[path = "../../tests/unit/models/store_test.rs"]
mod store_test;

use crate::models::common::Load;
use crate::models::graph::{EdgeIndex, Graph, NodeIndex};
use crate::utils::{GenericError, GenericResult};
use nohash_hasher::IntMap;

/// Keeps current load of edges and occupancy of nodes which is shared between multiple queries.
/// The store is never global: the caller owns it and passes it explicitly to the search and
/// decides when loads are reserved or released.
#[derive(Clone, Debug, Default)]
pub struct LoadStore {
    edges: IntMap<EdgeIndex, Load>,
    nodes: IntMap<NodeIndex, Load>,
}

impl LoadStore {
    /// Returns current load of the edge.
    pub fn edge_load(&self, edge_idx: EdgeIndex) -> Load {
        self.edges.get(&edge_idx).copied().unwrap_or_default()
    }

    /// Returns current occupancy of the node.
    pub fn node_load(&self, node_idx: NodeIndex) -> Load {
        self.nodes.get(&node_idx).copied().unwrap_or_default()
    }

    /// Checks whether edge can carry extra demand.
    pub fn can_fit_edge(&self, graph: &Graph, edge_idx: EdgeIndex, demand: Load) -> bool {
        let capacity = graph.edge(edge_idx).attributes.capacity;

        capacity.is_none_or(|capacity| {
            self.edge_load(edge_idx).checked_add(demand).is_some_and(|load| load <= capacity)
        })
    }

    /// Checks whether node can accept extra demand.
    pub fn can_fit_node(&self, graph: &Graph, node_idx: NodeIndex, demand: Load) -> bool {
        let capacity = graph.node(node_idx).capacity;

        capacity.is_none_or(|capacity| {
            self.node_load(node_idx).checked_add(demand).is_some_and(|load| load <= capacity)
        })
    }

    /// Reserves demand on every given edge and on every node entered through these edges.
    /// Store is not modified when at least one capacity is exceeded.
    pub fn reserve(&mut self, graph: &Graph, edges: &[EdgeIndex], demand: Load) -> GenericResult<()> {
        if demand < 0 {
            return Err(format!("cannot reserve negative demand: {demand}").into());
        }

        // NOTE: edges repeated in the list are checked with the accumulated demand
        let mut candidate = self.clone();
        for &edge_idx in edges {
            let node_idx = graph.edge(edge_idx).to;

            if !candidate.can_fit_edge(graph, edge_idx, demand) {
                return Err(format!("edge {edge_idx} cannot carry extra demand {demand}").into());
            }

            if !candidate.can_fit_node(graph, node_idx, demand) {
                return Err(format!("node '{}' cannot accept extra demand {demand}", graph.node(node_idx).id).into());
            }

            candidate.add_edge_load(edge_idx, demand)?;
            candidate.add_node_load(node_idx, demand)?;
        }

        *self = candidate;

        Ok(())
    }

    /// Releases demand previously reserved by [`LoadStore::reserve`].
    pub fn release(&mut self, graph: &Graph, edges: &[EdgeIndex], demand: Load) -> GenericResult<()> {
        if demand < 0 {
            return Err(format!("cannot release negative demand: {demand}").into());
        }

        let mut candidate = self.clone();
        for &edge_idx in edges {
            candidate.release_edge(edge_idx, demand)?;
            candidate.release_node(graph.edge(edge_idx).to, demand)?;
        }

        *self = candidate;

        Ok(())
    }

    /// Releases demand from single edge.
    pub fn release_edge(&mut self, edge_idx: EdgeIndex, demand: Load) -> GenericResult<()> {
        if self.edge_load(edge_idx) < demand {
            let held = self.edge_load(edge_idx);
            return Err(format!("cannot release {demand} from edge {edge_idx}: only {held} is held").into());
        }

        self.add_edge_load(edge_idx, -demand)
    }

    /// Releases demand from single node.
    pub fn release_node(&mut self, node_idx: NodeIndex, demand: Load) -> GenericResult<()> {
        if self.node_load(node_idx) < demand {
            let held = self.node_load(node_idx);
            return Err(format!("cannot release {demand} from node {node_idx}: only {held} is held").into());
        }

        self.add_node_load(node_idx, -demand)
    }

    /// Sets edge load directly, e.g. to restore a state observed outside.
    pub fn set_edge_load(&mut self, edge_idx: EdgeIndex, load: Load) {
        if load == 0 {
            self.edges.remove(&edge_idx);
        } else {
            self.edges.insert(edge_idx, load);
        }
    }

    /// Sets node occupancy directly.
    pub fn set_node_load(&mut self, node_idx: NodeIndex, load: Load) {
        if load == 0 {
            self.nodes.remove(&node_idx);
        } else {
            self.nodes.insert(node_idx, load);
        }
    }

    /// Returns true if nothing is reserved.
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty() && self.nodes.is_empty()
    }

    /// Removes all reservations.
    pub fn clear(&mut self) {
        self.edges.clear();
        self.nodes.clear();
    }

    fn add_edge_load(&mut self, edge_idx: EdgeIndex, delta: Load) -> GenericResult<()> {
        let load = self
            .edge_load(edge_idx)
            .checked_add(delta)
            .ok_or_else(|| GenericError::from(format!("load of edge {edge_idx} is out of range")))?;
        self.set_edge_load(edge_idx, load);

        Ok(())
    }

    fn add_node_load(&mut self, node_idx: NodeIndex, delta: Load) -> GenericResult<()> {
        let load = self
            .node_load(node_idx)
            .checked_add(delta)
            .ok_or_else(|| GenericError::from(format!("load of node {node_idx} is out of range")))?;
        self.set_node_load(node_idx, load);

        Ok(())
    }
}
