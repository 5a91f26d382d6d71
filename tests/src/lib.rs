//! Trellis Integration Tests
//!
//! Shared fixtures and a prelude for exercising context construction
//! across the workspace crates end to end.

mod fixtures;

pub use fixtures::*;

/// Everything an integration test needs in scope.
pub mod prelude {
    pub use crate::fixtures::*;
    pub use trellis_context::{
        ConflictError, Context, ContextBuilder, ContextParams, StateMap, StateValue,
        UnresolvedError, make_context,
    };
    pub use trellis_core::{DataTable, Dataset, Variable, VariableSet, vars};
    pub use trellis_graph::{SimpleGraph, VariableGraph};
}
