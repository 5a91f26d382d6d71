//! The graph abstraction consumed by context construction.

use trellis_core::Variable;

/// Read access to an undirected graph over variables.
///
/// Context construction is generic over this trait so that richer graph
/// types (say, a mixed graph produced by an earlier discovery stage)
/// can serve as the initial structural hypothesis.
/// [`SimpleGraph`](crate::SimpleGraph) is the default implementation.
pub trait VariableGraph {
    /// A graph with the given nodes and no edges.
    fn empty_over(nodes: impl IntoIterator<Item = Variable>) -> Self
    where
        Self: Sized;

    /// A complete graph over the given nodes.
    fn complete_over(nodes: impl IntoIterator<Item = Variable>) -> Self
    where
        Self: Sized;

    /// Returns true if the variable is a node of this graph.
    fn has_node(&self, node: &Variable) -> bool;

    /// Returns true if an edge connects the two variables, in either order.
    fn has_edge(&self, u: &Variable, v: &Variable) -> bool;

    /// All edges, each undirected pair exactly once.
    fn edges(&self) -> Vec<(Variable, Variable)>;

    /// Returns true if every given variable is a node of this graph.
    fn contains_all<'a>(&self, nodes: impl IntoIterator<Item = &'a Variable>) -> bool {
        nodes.into_iter().all(|node| self.has_node(node))
    }
}
