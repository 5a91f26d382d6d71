//! Shared fixtures: small discovery scenarios used across the
//! integration suites.

use trellis_core::{DataTable, Variable, VariableSet, vars};
use trellis_graph::SimpleGraph;

/// Column labels of the classic sprinkler network.
pub fn sprinkler_columns() -> VariableSet {
    vars!["cloudy", "rain", "sprinkler", "wet"]
}

/// A data table over the sprinkler columns.
pub fn sprinkler_table() -> DataTable {
    DataTable::new(sprinkler_columns())
}

/// The textbook sprinkler skeleton: cloudy touches rain and sprinkler,
/// both of which touch wet.
pub fn sprinkler_skeleton() -> SimpleGraph {
    SimpleGraph::from_edges(vec![
        (Variable::from("cloudy"), Variable::from("rain")),
        (Variable::from("cloudy"), Variable::from("sprinkler")),
        (Variable::from("rain"), Variable::from("wet")),
        (Variable::from("sprinkler"), Variable::from("wet")),
    ])
}

/// A single-edge graph, for planting edge constraints.
pub fn edge(u: &str, v: &str) -> SimpleGraph {
    SimpleGraph::from_edges(vec![(Variable::from(u), Variable::from(v))])
}

/// Asserts the graph has exactly the given nodes and no edges.
pub fn assert_edgeless_over(graph: &SimpleGraph, nodes: &VariableSet) {
    assert_eq!(&graph.node_set(), nodes);
    assert_eq!(graph.edge_count(), 0);
}
