//! Variable identifiers for discovery contexts.
//!
//! A variable names one column of the data a discovery algorithm runs
//! against. Columns in the wild carry either string labels or bare
//! positions, so both shapes are first-class, hashable, and ordered.

use std::collections::BTreeSet;
use std::fmt;

/// Identifier for a single variable (data column).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Variable {
    /// A named column.
    Name(String),
    /// A positional column label.
    Index(i64),
}

impl Variable {
    /// Returns true if this is a named variable.
    pub fn is_name(&self) -> bool {
        matches!(self, Variable::Name(_))
    }

    /// Returns true if this is a positional variable.
    pub fn is_index(&self) -> bool {
        matches!(self, Variable::Index(_))
    }

    /// Get the name if this is a named variable.
    pub fn as_name(&self) -> Option<&str> {
        match self {
            Variable::Name(name) => Some(name),
            Variable::Index(_) => None,
        }
    }

    /// Get the position if this is a positional variable.
    pub fn as_index(&self) -> Option<i64> {
        match self {
            Variable::Name(_) => None,
            Variable::Index(index) => Some(*index),
        }
    }
}

impl fmt::Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Variable::Name(name) => write!(f, "{}", name),
            Variable::Index(index) => write!(f, "{}", index),
        }
    }
}

// Convenient From implementations
impl From<&str> for Variable {
    fn from(name: &str) -> Self {
        Variable::Name(name.to_string())
    }
}

impl From<String> for Variable {
    fn from(name: String) -> Self {
        Variable::Name(name)
    }
}

impl From<i64> for Variable {
    fn from(index: i64) -> Self {
        Variable::Index(index)
    }
}

impl From<i32> for Variable {
    fn from(index: i32) -> Self {
        Variable::Index(index as i64)
    }
}

/// Type alias for variable sets.
///
/// Ordered storage keeps iteration, edge synthesis, and error
/// reporting deterministic.
pub type VariableSet = BTreeSet<Variable>;

/// Helper macro to create variable sets from mixed literals.
#[macro_export]
macro_rules! vars {
    () => {
        std::collections::BTreeSet::new()
    };
    ($($var:expr),+ $(,)?) => {
        {
            let mut set = std::collections::BTreeSet::new();
            $(
                set.insert($crate::Variable::from($var));
            )+
            set
        }
    };
}
