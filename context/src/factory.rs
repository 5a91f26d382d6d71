//! Context factory: fresh builders, or builders seeded from an
//! existing context.

use crate::{ConflictResult, Context, ContextBuilder};
use trellis_graph::VariableGraph;

/// Create a builder, optionally seeded with the durable parameters of
/// an existing context.
///
/// Seeding replays the context's parameters through the ordinary
/// setters: initial graph, then included edges, excluded edges,
/// observed variables, latent variables. State variables are never
/// copied: they are scratch owned by whichever algorithm produced
/// them, and a new pipeline run starts with an empty bag. The source
/// context is not touched.
///
/// Because the copies flow through the validating setters, a context
/// whose constraint sets were forced into conflict through the
/// check-bypassing combined setters
/// ([`edges`](ContextBuilder::edges),
/// [`variables`](ContextBuilder::variables)) surfaces that conflict
/// here.
pub fn make_context<G: VariableGraph + Clone>(
    context: Option<&Context<G>>,
) -> ConflictResult<ContextBuilder<G>> {
    let mut builder = ContextBuilder::default();
    if let Some(context) = context {
        let params = context.params();
        builder
            .init_graph(params.init_graph.clone())
            .included_edges(Some(params.included_edges.clone()))?
            .excluded_edges(Some(params.excluded_edges.clone()))?
            .observed_variables(params.observed_variables.clone())?
            .latent_variables(params.latent_variables.clone())?;
    }
    Ok(builder)
}
