//! Context construction error types.

use thiserror::Error;
use trellis_core::Variable;

/// Result type for setter-time validation.
pub type ConflictResult<T> = Result<T, ConflictError>;

/// Result type for interpolation and finalization.
pub type UnresolvedResult<T> = Result<T, UnresolvedError>;

/// Errors raised when a setter would make two constraint sets mutually
/// inconsistent. The first offending edge or variable is reported; the
/// rejected setter leaves its field unchanged.
#[derive(Debug, Error)]
pub enum ConflictError {
    #[error("edge ({0}, {1}) is already specified as an included edge")]
    EdgeAlreadyIncluded(Variable, Variable),

    #[error("edge ({0}, {1}) is already specified as an excluded edge")]
    EdgeAlreadyExcluded(Variable, Variable),

    #[error("variable {0} is already specified as a latent variable")]
    AlreadyLatent(Variable),

    #[error("variable {0} is already specified as an observed variable")]
    AlreadyObserved(Variable),
}

/// Errors raised when required information cannot be resolved from what
/// the builder was given.
#[derive(Debug, Error)]
pub enum UnresolvedError {
    #[error("could not infer observed variables from data or given arguments")]
    NoObservedVariables,

    #[error("observed and latent variables must partition the data columns")]
    ColumnMismatch,

    #[error("initial graph is missing observed variable {0}")]
    MissingGraphNode(Variable),
}
