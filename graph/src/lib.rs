//! Trellis Graph Primitives
//!
//! This crate provides the undirected graphs used during context
//! construction:
//! - SimpleGraph: deterministic adjacency-set storage over variables
//! - VariableGraph: the abstraction the context machinery consumes,
//!   so richer graph types can serve as initial structural hypotheses

mod graph;
mod traits;

pub use graph::*;
pub use traits::*;
