//! Undirected graph storage over variables.

use crate::VariableGraph;
use std::collections::{BTreeMap, BTreeSet};
use trellis_core::{Variable, VariableSet};

/// A simple undirected graph over variables.
///
/// Storage is an adjacency-set map keyed by variable. Ordered
/// collections keep node and edge iteration deterministic, which the
/// context machinery relies on for stable default synthesis and error
/// reporting. Self-loops are representable and not treated specially.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SimpleGraph {
    /// Neighbor sets keyed by node. A non-loop edge appears in both
    /// endpoints' sets; a self-loop appears once.
    adjacency: BTreeMap<Variable, BTreeSet<Variable>>,
}

impl SimpleGraph {
    /// Create a new empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a graph with the given nodes and no edges.
    pub fn empty(nodes: impl IntoIterator<Item = Variable>) -> Self {
        let mut graph = Self::new();
        for node in nodes {
            graph.add_node(node);
        }
        graph
    }

    /// Create a complete graph over the given nodes.
    pub fn complete(nodes: impl IntoIterator<Item = Variable>) -> Self {
        let nodes: Vec<Variable> = nodes.into_iter().collect();
        let mut graph = Self::empty(nodes.iter().cloned());
        for (i, u) in nodes.iter().enumerate() {
            for v in nodes.iter().skip(i + 1) {
                graph.add_edge(u.clone(), v.clone());
            }
        }
        graph
    }

    /// Create a graph from edges. Endpoints become nodes.
    pub fn from_edges(edges: impl IntoIterator<Item = (Variable, Variable)>) -> Self {
        let mut graph = Self::new();
        for (u, v) in edges {
            graph.add_edge(u, v);
        }
        graph
    }

    // ==================== Mutation ====================

    /// Add a node. No-op if already present.
    pub fn add_node(&mut self, node: Variable) {
        self.adjacency.entry(node).or_default();
    }

    /// Add an undirected edge, inserting endpoints as needed.
    pub fn add_edge(&mut self, u: Variable, v: Variable) {
        self.adjacency
            .entry(u.clone())
            .or_default()
            .insert(v.clone());
        self.adjacency.entry(v).or_default().insert(u);
    }

    /// Remove an edge if present. Endpoints stay.
    pub fn remove_edge(&mut self, u: &Variable, v: &Variable) {
        if let Some(neighbors) = self.adjacency.get_mut(u) {
            neighbors.remove(v);
        }
        if let Some(neighbors) = self.adjacency.get_mut(v) {
            neighbors.remove(u);
        }
    }

    /// Remove a node and all edges incident to it.
    pub fn remove_node(&mut self, node: &Variable) {
        if self.adjacency.remove(node).is_some() {
            for neighbors in self.adjacency.values_mut() {
                neighbors.remove(node);
            }
        }
    }

    // ==================== Queries ====================

    /// Returns true if the variable is a node of this graph.
    pub fn has_node(&self, node: &Variable) -> bool {
        self.adjacency.contains_key(node)
    }

    /// Returns true if an edge connects the two variables, in either order.
    pub fn has_edge(&self, u: &Variable, v: &Variable) -> bool {
        self.adjacency
            .get(u)
            .map_or(false, |neighbors| neighbors.contains(v))
    }

    /// All nodes, in order.
    pub fn nodes(&self) -> impl Iterator<Item = &Variable> + '_ {
        self.adjacency.keys()
    }

    /// The node set.
    pub fn node_set(&self) -> VariableSet {
        self.adjacency.keys().cloned().collect()
    }

    /// Neighbors of a node, in order. Empty for unknown nodes.
    pub fn neighbors(&self, node: &Variable) -> impl Iterator<Item = &Variable> + '_ {
        self.adjacency.get(node).into_iter().flatten()
    }

    /// All edges, each undirected pair exactly once, endpoints in
    /// canonical order.
    pub fn edges(&self) -> Vec<(Variable, Variable)> {
        let mut edges = Vec::new();
        for (u, neighbors) in &self.adjacency {
            for v in neighbors {
                if u <= v {
                    edges.push((u.clone(), v.clone()));
                }
            }
        }
        edges
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of edges. Counts each undirected edge once.
    pub fn edge_count(&self) -> usize {
        self.adjacency
            .iter()
            .map(|(u, neighbors)| neighbors.iter().filter(|v| u <= *v).count())
            .sum()
    }
}

impl VariableGraph for SimpleGraph {
    fn empty_over(nodes: impl IntoIterator<Item = Variable>) -> Self {
        SimpleGraph::empty(nodes)
    }

    fn complete_over(nodes: impl IntoIterator<Item = Variable>) -> Self {
        SimpleGraph::complete(nodes)
    }

    fn has_node(&self, node: &Variable) -> bool {
        SimpleGraph::has_node(self, node)
    }

    fn has_edge(&self, u: &Variable, v: &Variable) -> bool {
        SimpleGraph::has_edge(self, u, v)
    }

    fn edges(&self) -> Vec<(Variable, Variable)> {
        SimpleGraph::edges(self)
    }
}
