//! The immutable analysis context.

use crate::{StateMap, StateValue};
use trellis_core::VariableSet;
use trellis_graph::SimpleGraph;

/// The immutable configuration bundle consumed by a discovery algorithm.
///
/// A context is built only through
/// [`ContextBuilder`](crate::ContextBuilder) and holds the resolved
/// variable sets, the hard edge constraints, the initial structural
/// hypothesis, and whatever intermediate state earlier pipeline stages
/// recorded. It is generic over the initial-graph type, defaulting to
/// [`SimpleGraph`].
#[derive(Debug, Clone, PartialEq)]
pub struct Context<G = SimpleGraph> {
    /// The starting structural hypothesis.
    init_graph: G,
    /// Edges required to appear in the discovered graph.
    included_edges: SimpleGraph,
    /// Edges forbidden from the discovered graph.
    excluded_edges: SimpleGraph,
    /// Variables available as data columns.
    observed_variables: VariableSet,
    /// Variables believed to exist but not observed.
    latent_variables: VariableSet,
    /// Intermediate state recorded by pipeline stages.
    state_variables: StateMap,
}

impl<G> Context<G> {
    /// Assemble a context from resolved parts. Only the builder calls this.
    pub(crate) fn new(
        init_graph: G,
        included_edges: SimpleGraph,
        excluded_edges: SimpleGraph,
        observed_variables: VariableSet,
        latent_variables: VariableSet,
        state_variables: StateMap,
    ) -> Self {
        Self {
            init_graph,
            included_edges,
            excluded_edges,
            observed_variables,
            latent_variables,
            state_variables,
        }
    }

    /// The starting structural hypothesis.
    pub fn init_graph(&self) -> &G {
        &self.init_graph
    }

    /// Edges required to appear in the discovered graph.
    pub fn included_edges(&self) -> &SimpleGraph {
        &self.included_edges
    }

    /// Edges forbidden from the discovered graph.
    pub fn excluded_edges(&self) -> &SimpleGraph {
        &self.excluded_edges
    }

    /// Variables available as data columns.
    pub fn observed_variables(&self) -> &VariableSet {
        &self.observed_variables
    }

    /// Variables believed to exist but not observed.
    pub fn latent_variables(&self) -> &VariableSet {
        &self.latent_variables
    }

    /// All intermediate state.
    pub fn state_variables(&self) -> &StateMap {
        &self.state_variables
    }

    /// Look up one piece of intermediate state by name.
    pub fn state_variable(&self, name: &str) -> Option<&StateValue> {
        self.state_variables.get(name)
    }

    /// The durable parameters of this context, for seeding a new builder.
    ///
    /// State variables are not parameters: they are scratch owned by
    /// whichever algorithm produced them and never carried across
    /// contexts.
    pub fn params(&self) -> ContextParams<'_, G> {
        ContextParams {
            init_graph: &self.init_graph,
            included_edges: &self.included_edges,
            excluded_edges: &self.excluded_edges,
            observed_variables: &self.observed_variables,
            latent_variables: &self.latent_variables,
        }
    }
}

/// Borrowed view of a context's durable parameters.
///
/// Exhaustive by construction: adding a parameter to [`Context`] forces
/// this struct, and with it every consumer, to account for it.
#[derive(Debug, Clone, Copy)]
pub struct ContextParams<'a, G> {
    /// The starting structural hypothesis.
    pub init_graph: &'a G,
    /// Edges required to appear in the discovered graph.
    pub included_edges: &'a SimpleGraph,
    /// Edges forbidden from the discovered graph.
    pub excluded_edges: &'a SimpleGraph,
    /// Variables available as data columns.
    pub observed_variables: &'a VariableSet,
    /// Variables believed to exist but not observed.
    pub latent_variables: &'a VariableSet,
}
