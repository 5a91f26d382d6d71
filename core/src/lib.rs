//! Trellis Core Types
//!
//! This crate provides the foundational types used throughout the trellis system:
//! - Variable identifiers (named or positional data columns)
//! - Variable sets with deterministic iteration order
//! - The tabular-data abstraction (Dataset trait, DataTable carrier)

mod data;
mod variable;

pub use data::*;
pub use variable::*;
