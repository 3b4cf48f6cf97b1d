#[cfg(test)]
#[path = "../../../tests/unit/models/graph/graph_test.rs"]
mod graph_test;

use super::*;
use crate::utils::GenericResult;
use rustc_hash::FxHashMap;

/// A read-only graph with adjacency lists of outgoing edges.
pub struct Graph {
    nodes: Vec<Node>,
    edges: Vec<Edge>,
    outgoing: Vec<Vec<EdgeIndex>>,
    index: FxHashMap<String, NodeIndex>,
}

impl Graph {
    /// Creates a graph from already validated nodes and edges.
    pub(super) fn new(nodes: Vec<Node>, edges: Vec<Edge>) -> Self {
        let index = nodes.iter().enumerate().map(|(idx, node)| (node.id.clone(), idx)).collect();

        let mut outgoing = vec![Vec::default(); nodes.len()];
        edges.iter().enumerate().for_each(|(edge_idx, edge)| outgoing[edge.from].push(edge_idx));

        Self { nodes, edges, outgoing, index }
    }

    /// Returns amount of nodes.
    pub fn size(&self) -> usize {
        self.nodes.len()
    }

    /// Returns amount of directed edges.
    pub fn edges_size(&self) -> usize {
        self.edges.len()
    }

    /// Returns node by its index.
    pub fn node(&self, node_idx: NodeIndex) -> &Node {
        &self.nodes[node_idx]
    }

    /// Returns edge by its index.
    pub fn edge(&self, edge_idx: EdgeIndex) -> &Edge {
        &self.edges[edge_idx]
    }

    /// Returns all nodes.
    pub fn nodes(&self) -> &[Node] {
        self.nodes.as_slice()
    }

    /// Returns all edges.
    pub fn edges(&self) -> &[Edge] {
        self.edges.as_slice()
    }

    /// Returns node index by its id.
    pub fn node_index(&self, id: &str) -> Option<NodeIndex> {
        self.index.get(id).copied()
    }

    /// Returns node index by its id or an error if node is not known.
    pub fn resolve(&self, id: &str) -> GenericResult<NodeIndex> {
        self.node_index(id).ok_or_else(|| format!("unknown node: '{id}'").into())
    }

    /// Returns outgoing edges of given node in the order they were defined.
    pub fn outgoing(&self, node_idx: NodeIndex) -> impl Iterator<Item = (EdgeIndex, &Edge)> + '_ {
        self.outgoing[node_idx].iter().map(move |&edge_idx| (edge_idx, &self.edges[edge_idx]))
    }

    /// Returns the first edge defined between two nodes.
    pub fn find_edge(&self, from: NodeIndex, to: NodeIndex) -> Option<EdgeIndex> {
        self.outgoing(from).find(|(_, edge)| edge.to == to).map(|(edge_idx, _)| edge_idx)
    }

    /// Returns true if any node or edge defines a capacity.
    pub fn has_capacities(&self) -> bool {
        self.nodes.iter().any(|node| node.capacity.is_some())
            || self.edges.iter().any(|edge| edge.attributes.capacity.is_some())
    }
}
