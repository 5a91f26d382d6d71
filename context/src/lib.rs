//! Trellis Context Construction
//!
//! This crate assembles the immutable analysis context a graph-discovery
//! algorithm runs against:
//! - ContextBuilder: fluent, validating accumulator with default
//!   interpolation for unset fields
//! - Context: the immutable result, plus its durable-parameter view
//! - make_context: fresh builders, or builders seeded from a context
//! - StateValue / StateMap: the open intermediate-state bag
//! - ConflictError / UnresolvedError: the two failure kinds

mod builder;
mod context;
mod error;
mod factory;
mod state;

pub use builder::*;
pub use context::*;
pub use error::*;
pub use factory::*;
pub use state::*;
