//! ContextBuilder for constructing an immutable Context.

use crate::{
    ConflictError, ConflictResult, Context, StateMap, StateValue, UnresolvedError, UnresolvedResult,
};
use trellis_core::{Dataset, Variable, VariableSet};
use trellis_graph::{SimpleGraph, VariableGraph};

/// Builder for constructing an immutable [`Context`].
///
/// Every field starts unset and is filled through the setters;
/// [`build`](Self::build) reads the accumulated state, interpolates
/// defaults for anything still unset, and returns a fresh context. The
/// builder is never consumed: it can be adjusted and rebuilt any number
/// of times, and contexts built earlier are unaffected.
///
/// Setters validate eagerly against what is already set and leave their
/// field untouched when they fail, so a rejected call can simply be
/// retried with corrected input.
#[derive(Debug)]
pub struct ContextBuilder<G = SimpleGraph> {
    /// The starting structural hypothesis, if given.
    init_graph: Option<G>,
    /// Edges required to appear in the discovered graph, if given.
    included_edges: Option<SimpleGraph>,
    /// Edges forbidden from the discovered graph, if given.
    excluded_edges: Option<SimpleGraph>,
    /// Variables available as data columns, once resolved.
    observed_variables: Option<VariableSet>,
    /// Variables believed to exist but not observed, if given.
    latent_variables: Option<VariableSet>,
    /// Intermediate state recorded so far.
    state_variables: StateMap,
}

// Written out because a derive would demand `G: Default`.
impl<G> Default for ContextBuilder<G> {
    fn default() -> Self {
        Self {
            init_graph: None,
            included_edges: None,
            excluded_edges: None,
            observed_variables: None,
            latent_variables: None,
            state_variables: StateMap::new(),
        }
    }
}

impl ContextBuilder {
    /// Create a new builder over [`SimpleGraph`] initial graphs.
    ///
    /// For a different initial-graph type, use
    /// `ContextBuilder::<G>::default()`.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<G> ContextBuilder<G> {
    /// Set the initial structural hypothesis handed to the discovery
    /// algorithm.
    ///
    /// Whether its nodes cover the observed variables is checked at
    /// [`build`](Self::build) time, once the observed set is known.
    pub fn init_graph(&mut self, graph: G) -> &mut Self {
        self.init_graph = Some(graph);
        self
    }

    /// Set the edges required to appear in the discovered graph.
    ///
    /// Rejects the first edge already present in the excluded set.
    /// Passing `None` clears the field.
    pub fn included_edges(&mut self, include: Option<SimpleGraph>) -> ConflictResult<&mut Self> {
        if let (Some(include), Some(excluded)) = (&include, &self.excluded_edges) {
            if let Some((u, v)) = first_common_edge(include, excluded) {
                return Err(ConflictError::EdgeAlreadyExcluded(u, v));
            }
        }
        self.included_edges = include;
        Ok(self)
    }

    /// Set the edges forbidden from the discovered graph.
    ///
    /// Rejects the first edge already present in the included set.
    /// Passing `None` clears the field.
    pub fn excluded_edges(&mut self, exclude: Option<SimpleGraph>) -> ConflictResult<&mut Self> {
        if let (Some(exclude), Some(included)) = (&exclude, &self.included_edges) {
            if let Some((u, v)) = first_common_edge(exclude, included) {
                return Err(ConflictError::EdgeAlreadyIncluded(u, v));
            }
        }
        self.excluded_edges = exclude;
        Ok(self)
    }

    /// Overwrite both edge-constraint sets at once, without the
    /// cross-check the individual setters perform.
    ///
    /// This is the escape hatch for callers that assemble both sets
    /// elsewhere and take responsibility for their consistency. A
    /// conflicting pair planted this way is not caught at build time
    /// either; it resurfaces only when the built context's parameters
    /// are replayed through [`make_context`](crate::make_context).
    pub fn edges(
        &mut self,
        include: Option<SimpleGraph>,
        exclude: Option<SimpleGraph>,
    ) -> &mut Self {
        self.included_edges = include;
        self.excluded_edges = exclude;
        self
    }

    /// Declare the observed variables.
    ///
    /// Rejects the first variable already declared latent.
    pub fn observed_variables(&mut self, observed: VariableSet) -> ConflictResult<&mut Self> {
        if let Some(latents) = &self.latent_variables {
            if let Some(shared) = observed.iter().find(|variable| latents.contains(*variable)) {
                return Err(ConflictError::AlreadyLatent(shared.clone()));
            }
        }
        self.observed_variables = Some(observed);
        Ok(self)
    }

    /// Declare the latent variables.
    ///
    /// Rejects the first variable already declared observed.
    pub fn latent_variables(&mut self, latents: VariableSet) -> ConflictResult<&mut Self> {
        if let Some(observed) = &self.observed_variables {
            if let Some(shared) = latents.iter().find(|variable| observed.contains(*variable)) {
                return Err(ConflictError::AlreadyObserved(shared.clone()));
            }
        }
        self.latent_variables = Some(latents);
        Ok(self)
    }

    /// Set the observed and latent variable sets together, deriving
    /// whichever is missing from the data's columns.
    ///
    /// With data present: when both sets are given they must partition
    /// the columns (columns minus observed must equal the latents);
    /// when one is given the other is derived as its complement within
    /// the columns; when neither is given every column is taken as
    /// observed. Without data the given sets pass through as they are,
    /// and the observed set must have been given.
    ///
    /// Both fields are overwritten on success (a latent set that
    /// cannot be derived comes out unset) and left untouched on
    /// failure. Like [`edges`](Self::edges), this combined form skips
    /// the cross-checks the individual setters perform.
    pub fn variables(
        &mut self,
        observed: Option<VariableSet>,
        latents: Option<VariableSet>,
        data: Option<&dyn Dataset>,
    ) -> UnresolvedResult<&mut Self> {
        let (observed, latents) = interpolate_variables(observed, latents, data)?;
        self.observed_variables = Some(observed);
        self.latent_variables = latents;
        Ok(self)
    }

    /// Replace the whole intermediate-state map.
    pub fn state_variables(&mut self, state: StateMap) -> &mut Self {
        self.state_variables = state;
        self
    }

    /// Record one piece of intermediate state, overwriting any previous
    /// value under the same name.
    pub fn state_variable(
        &mut self,
        name: impl Into<String>,
        value: impl Into<StateValue>,
    ) -> &mut Self {
        self.state_variables.insert(name.into(), value.into());
        self
    }
}

impl<G: VariableGraph + Clone> ContextBuilder<G> {
    /// Build the immutable [`Context`] from the accumulated state.
    ///
    /// Unset fields are interpolated: the initial graph defaults to the
    /// complete graph over the observed variables (full prior
    /// uncertainty), each edge-constraint set defaults to the edgeless
    /// graph over them, and the latent set defaults to empty. A
    /// supplied initial graph must cover every observed variable; extra
    /// nodes are allowed.
    ///
    /// Fails when the observed set was never resolved, or when the
    /// supplied initial graph is missing an observed variable.
    pub fn build(&self) -> UnresolvedResult<Context<G>> {
        let observed = self
            .observed_variables
            .as_ref()
            .ok_or(UnresolvedError::NoObservedVariables)?;

        let init_graph = self.interpolate_graph(observed)?;
        let empty_graph = || SimpleGraph::empty(observed.iter().cloned());

        Ok(Context::new(
            init_graph,
            self.included_edges.clone().unwrap_or_else(empty_graph),
            self.excluded_edges.clone().unwrap_or_else(empty_graph),
            observed.clone(),
            self.latent_variables.clone().unwrap_or_default(),
            self.state_variables.clone(),
        ))
    }

    /// Resolve the initial graph: the stored one if it covers the
    /// observed variables, else the complete graph over them.
    fn interpolate_graph(&self, observed: &VariableSet) -> UnresolvedResult<G> {
        match &self.init_graph {
            None => Ok(G::complete_over(observed.iter().cloned())),
            Some(graph) => {
                if let Some(missing) = observed.iter().find(|variable| !graph.has_node(variable)) {
                    return Err(UnresolvedError::MissingGraphNode(missing.clone()));
                }
                Ok(graph.clone())
            }
        }
    }
}

/// Resolve observed and latent variable sets from partial input.
///
/// Pure: callers assign the output only on success, so a failure leaves
/// no partial state behind.
fn interpolate_variables(
    observed: Option<VariableSet>,
    latents: Option<VariableSet>,
    data: Option<&dyn Dataset>,
) -> UnresolvedResult<(VariableSet, Option<VariableSet>)> {
    let (observed, latents) = match data {
        Some(data) => {
            let columns = data.column_set();
            match (observed, latents) {
                (Some(observed), Some(latents)) => {
                    let complement: VariableSet =
                        columns.difference(&observed).cloned().collect();
                    if complement != latents {
                        return Err(UnresolvedError::ColumnMismatch);
                    }
                    (Some(observed), Some(latents))
                }
                (None, Some(latents)) => {
                    let observed = columns.difference(&latents).cloned().collect();
                    (Some(observed), Some(latents))
                }
                (Some(observed), None) => {
                    let latents = columns.difference(&observed).cloned().collect();
                    (Some(observed), Some(latents))
                }
                // Nothing declared: assume nothing about the data is latent.
                (None, None) => (Some(columns), Some(VariableSet::new())),
            }
        }
        None => (observed, latents),
    };

    match observed {
        Some(observed) => Ok((observed, latents)),
        None => Err(UnresolvedError::NoObservedVariables),
    }
}

/// First edge of `graph`, in canonical order, that `other` also has.
fn first_common_edge(graph: &SimpleGraph, other: &SimpleGraph) -> Option<(Variable, Variable)> {
    graph.edges().into_iter().find(|(u, v)| other.has_edge(u, v))
}
